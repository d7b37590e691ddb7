//! Filter handlers for birthday MCP server

use crate::BirthdayServerHandler;
use crate::birthday::Action;
use crate::validation::{self, FilterValue};
use mcp_attr::Result as McpResult;
use tracing::warn;

impl BirthdayServerHandler {
    /// Toggles one birth year, or clears / selects every year.
    pub async fn handle_toggle_year(&self, value: String) -> McpResult<String> {
        let action = match validation::parse_year_value(&value, &self.roster) {
            Ok(FilterValue::Clear) => Action::ClearYears,
            Ok(FilterValue::All) => Action::SelectAllYears(self.roster.years()),
            Ok(FilterValue::One(year)) => Action::ToggleYear(year),
            Err(e) => {
                warn!(%value, "Rejected year filter");
                return Err(e);
            }
        };
        Ok(self.apply(action))
    }

    /// Toggles one parent, or clears / selects every parent.
    pub async fn handle_toggle_parent(&self, value: String) -> McpResult<String> {
        let action = match validation::parse_parent_value(&value, &self.roster) {
            Ok(FilterValue::Clear) => Action::ClearParents,
            Ok(FilterValue::All) => Action::SelectAllParents(
                self.roster
                    .parents()
                    .into_iter()
                    .map(|parent| parent.id.clone())
                    .collect(),
            ),
            Ok(FilterValue::One(id)) => Action::ToggleParent(id),
            Err(e) => {
                warn!(%value, "Rejected parent filter");
                return Err(e);
            }
        };
        Ok(self.apply(action))
    }

    /// Opens the named filter panel, or closes it if already open.
    pub async fn handle_toggle_filter_category(&self, category: String) -> McpResult<String> {
        let category = validation::parse_filter_category(&category).inspect_err(|_| {
            warn!(%category, "Rejected filter category");
        })?;
        Ok(self.apply(Action::ToggleFilterCategory(category)))
    }

    /// Clears year and parent filters.
    pub async fn handle_reset_filters(&self) -> McpResult<String> {
        Ok(self.apply(Action::Reset))
    }
}
