//! Page handler for birthday MCP server

use crate::BirthdayServerHandler;
use mcp_attr::Result as McpResult;

impl BirthdayServerHandler {
    /// Render the page without changing the selection.
    pub async fn handle_agenda(&self) -> McpResult<String> {
        Ok(self.render_page())
    }
}
