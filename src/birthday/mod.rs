//! Birthday domain models and logic
//!
//! Split into submodules:
//! - `calendar`: next-birthday and age arithmetic
//! - `person`: person, id, and raw roster entry types
//! - `roster`: person registry with parent resolution
//! - `urgency`: days-left presentation buckets
//! - `phrase`: birthday sentences and contact prompts
//! - `selection`: page state and its reducer
//! - `queries`: filter and sort pipeline producing the visible list

pub mod calendar;
mod person;
pub mod phrase;
pub mod queries;
mod roster;
mod selection;
mod urgency;

pub use calendar::local_date_today;
pub use person::{Gender, Person, PersonId, RosterEntry};
pub use roster::Roster;
pub use selection::{Action, FilterCategory, SelectionState, SortOrder, View};
pub use urgency::Urgency;
