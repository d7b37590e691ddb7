//! MCP tool handlers for the birthday server
//!
//! Each handler validates its arguments, applies one selection action, and
//! returns the redrawn page.

pub mod filters;
pub mod page;
pub mod search;
pub mod view;
