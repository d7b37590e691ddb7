//! View handler for birthday MCP server

use crate::BirthdayServerHandler;
use crate::birthday::Action;
use crate::validation;
use mcp_attr::Result as McpResult;
use tracing::warn;

impl BirthdayServerHandler {
    /// Switches between agenda and age views; re-selecting age flips its direction.
    pub async fn handle_select_view(&self, view: String) -> McpResult<String> {
        let view = validation::parse_view(&view).inspect_err(|_| {
            warn!(%view, "Rejected view");
        })?;
        Ok(self.apply(Action::SelectView(view)))
    }
}
