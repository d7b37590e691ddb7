//! Search handler for birthday MCP server

use crate::BirthdayServerHandler;
use crate::birthday::Action;
use mcp_attr::Result as McpResult;

impl BirthdayServerHandler {
    /// Sets or clears the name query.
    pub async fn handle_search(&self, query: Option<String>) -> McpResult<String> {
        Ok(self.apply(Action::Search(query)))
    }
}
