//! Validation helpers for tool arguments
//!
//! Turns the raw strings received from MCP clients into typed selection
//! values, rejecting anything the page would not offer as a button.

use crate::birthday::{FilterCategory, PersonId, Roster, View};
use mcp_attr::Result as McpResult;

/// Value of a year or parent filter button
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue<T> {
    /// Deselect everything
    Clear,
    /// Select every available value
    All,
    /// Toggle a single value
    One(T),
}

fn invalid_params(message: String) -> mcp_attr::Error {
    mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS).with_message(message, true)
}

/// Parse and validate a view name (`agenda` or `age`)
pub fn parse_view(view: &str) -> McpResult<View> {
    view.trim().parse::<View>().map_err(invalid_params)
}

/// Parse and validate a filter category (`year` or `parent`)
pub fn parse_filter_category(category: &str) -> McpResult<FilterCategory> {
    category
        .trim()
        .parse::<FilterCategory>()
        .map_err(invalid_params)
}

/// Parse a year filter value: `clear`, `all`, or a birth year present in the roster
///
/// # Arguments
/// * `value` - Raw argument
/// * `roster` - Supplies the available years
pub fn parse_year_value(value: &str, roster: &Roster) -> McpResult<FilterValue<i32>> {
    let value = value.trim();
    match value {
        "clear" => return Ok(FilterValue::Clear),
        "all" => return Ok(FilterValue::All),
        _ => {}
    }

    let years = roster.years();
    match value.parse::<i32>() {
        Ok(year) if years.contains(&year) => Ok(FilterValue::One(year)),
        _ => Err(invalid_params(format_invalid_year_error(value, &years))),
    }
}

/// Parse a parent filter value: `clear`, `all`, or a parent's id or name
pub fn parse_parent_value(value: &str, roster: &Roster) -> McpResult<FilterValue<PersonId>> {
    let value = value.trim();
    match value {
        "clear" => Ok(FilterValue::Clear),
        "all" => Ok(FilterValue::All),
        _ => roster
            .find_parent(value)
            .map(|parent| FilterValue::One(parent.id.clone()))
            .ok_or_else(|| invalid_params(format_invalid_parent_error(value, roster))),
    }
}

/// Format an error message for an unknown year with the available years
pub fn format_invalid_year_error(value: &str, years: &[i32]) -> String {
    let year_list: Vec<String> = years.iter().map(|y| y.to_string()).collect();
    format!(
        "Year '{}' is not available. Use 'clear', 'all', or one of: {}",
        value,
        year_list.join(", ")
    )
}

/// Format an error message for an unknown parent with the available parents
pub fn format_invalid_parent_error(value: &str, roster: &Roster) -> String {
    let parents = roster.parents();
    if parents.is_empty() {
        return format!(
            "Parent '{}' does not exist. Nobody in the roster has a parent set.",
            value
        );
    }
    let parent_list: Vec<String> = parents
        .iter()
        .map(|p| format!("{} ({})", p.name, p.id))
        .collect();
    format!(
        "Parent '{}' does not exist. Use 'clear', 'all', or one of: {}",
        value,
        parent_list.join(", ")
    )
}
