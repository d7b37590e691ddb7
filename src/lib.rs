//! Birthday MCP Server Library
//!
//! This library provides a Model Context Protocol (MCP) server that lists the
//! upcoming birthdays of a family roster, with French phrasing. Clients change
//! the view, filters, and search text through tools; every change redraws the
//! whole page.
//!
//! # Architecture
//!
//! - **MCP Layer**: `BirthdayServerHandler` - one tool per page interaction
//! - **Domain Layer**: `birthday` module - birthday arithmetic, roster, selection reducer, list pipeline
//! - **Presentation Layer**: `locale` and `formatting` modules - wording and text rendering
//! - **Configuration**: `config` module - TOML roster files and the built-in roster
//!
//! # Example
//!
//! ```no_run
//! use birthday_mcp::BirthdayServerHandler;
//! use birthday_mcp::birthday::local_date_today;
//! use anyhow::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let handler = BirthdayServerHandler::new(None, local_date_today())?;
//!     println!("{}", handler.render_page());
//!     Ok(())
//! }
//! ```

pub mod birthday;
pub mod config;
pub mod error;
pub mod formatting;
mod handlers;
pub mod locale;
pub mod validation;

use anyhow::Result;
use chrono::NaiveDate;
use mcp_attr::Result as McpResult;
use mcp_attr::server::{McpServer, mcp_server};
use std::sync::Mutex;
use tracing::{debug, info};

use birthday::{Action, Roster, SelectionState, queries};
use locale::{French, Locale};

// Re-export commonly used types
pub use birthday::{Person, PersonId, View};
pub use config::{RosterFile, RosterSource, Settings};
pub use error::RosterError;

/// MCP Server handler for the birthday page
///
/// Holds the roster, computed once against the reference date, and the
/// mutable page selection. Tool calls are serialized through the selection
/// lock, so each one runs to completion before the next.
pub struct BirthdayServerHandler {
    pub(crate) roster: Roster,
    pub(crate) settings: Settings,
    pub(crate) today: NaiveDate,
    pub(crate) locale: Box<dyn Locale>,
    pub(crate) state: Mutex<SelectionState>,
}

impl BirthdayServerHandler {
    /// Create a new handler
    ///
    /// # Arguments
    /// * `roster_path` - Roster TOML file, or `None` for the built-in roster
    /// * `today` - Reference date for all birthday computations
    ///
    /// # Example
    /// ```no_run
    /// # use birthday_mcp::BirthdayServerHandler;
    /// # use chrono::NaiveDate;
    /// # use anyhow::Result;
    /// # fn main() -> Result<()> {
    /// let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
    /// let handler = BirthdayServerHandler::new(Some("family.toml"), today)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(roster_path: Option<&str>, today: NaiveDate) -> Result<Self> {
        let file = RosterSource::new(roster_path).load()?;
        Self::from_roster_file(file, today)
    }

    /// Create a handler from an already parsed roster file
    pub fn from_roster_file(file: RosterFile, today: NaiveDate) -> Result<Self> {
        let roster = Roster::build(file.people, today)?;
        info!(%today, people = roster.len(), "Birthdays computed");
        Ok(Self {
            roster,
            settings: file.settings,
            today,
            locale: Box::new(French),
            state: Mutex::new(SelectionState::new()),
        })
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Snapshot of the current selection
    pub fn selection(&self) -> SelectionState {
        self.state.lock().unwrap().clone()
    }

    /// Render the full page for the current selection
    pub fn render_page(&self) -> String {
        let state = self.state.lock().unwrap();
        self.render_with(&state)
    }

    /// Apply one interaction, then redraw
    pub(crate) fn apply(&self, action: Action) -> String {
        let mut state = self.state.lock().unwrap();
        debug!(?action, "Applying action");
        *state = std::mem::take(&mut *state).reduce(action);
        self.render_with(&state)
    }

    fn render_with(&self, state: &SelectionState) -> String {
        let people = queries::visible_people(&self.roster, state);
        let locale = self.locale.as_ref();
        format!(
            "{}\n{}",
            formatting::format_nav(&self.roster, state, locale),
            formatting::format_people(&people, &self.roster, self.today, &self.settings, locale)
        )
    }
}

/// Family birthday agenda with French phrasing.
///
/// The page shows everyone's next birthday, the age they will reach, and how soon it is.
/// Children turning less than 21 within 30 days get a prompt naming the parent to contact.
///
/// Key concepts:
/// - **agenda view**: sorted by next birthday, soonest first
/// - **age view**: sorted by age; selecting it again flips youngest-first/oldest-first
/// - **filters**: birth years and parents combine with AND; a parent filter also shows the parent
/// - **search**: case-insensitive name substring
///
/// Every tool returns the redrawn page: navigation first, then the list.
/// Selected buttons are shown in [brackets].
#[mcp_server]
impl McpServer for BirthdayServerHandler {
    /// **Show page**: Render the current navigation and birthday list without changing anything.
    #[tool]
    async fn agenda(&self) -> McpResult<String> {
        self.handle_agenda().await
    }

    /// **Change view**: "agenda" sorts by next birthday; "age" sorts by age.
    /// Selecting "age" while already in age view flips the sort direction.
    #[tool]
    async fn select_view(
        &self,
        /// View: agenda/age
        view: String,
    ) -> McpResult<String> {
        self.handle_select_view(view).await
    }

    /// **Year filter**: Toggle a birth year, or "clear" to deselect all, or "all" to select all.
    #[tool]
    async fn toggle_year(
        &self,
        /// Birth year (e.g., "1978"), "clear", or "all"
        value: String,
    ) -> McpResult<String> {
        self.handle_toggle_year(value).await
    }

    /// **Parent filter**: Toggle a parent by name or id, or "clear" / "all".
    /// A selected parent shows their children and themself.
    #[tool]
    async fn toggle_parent(
        &self,
        /// Parent name (e.g., "Maryline"), person id, "clear", or "all"
        value: String,
    ) -> McpResult<String> {
        self.handle_toggle_parent(value).await
    }

    /// **Filter panel**: Open the year or parent panel listing the available values; same category again closes it.
    #[tool]
    async fn toggle_filter_category(
        &self,
        /// Category: year/parent
        category: String,
    ) -> McpResult<String> {
        self.handle_toggle_filter_category(category).await
    }

    /// **Reset**: Clear year and parent filters. View, sort direction, and search are kept.
    #[tool]
    async fn reset_filters(&self) -> McpResult<String> {
        self.handle_reset_filters().await
    }

    /// **Search**: Show only names containing the text (case-insensitive). Omit or leave blank to clear.
    #[tool]
    async fn search(
        &self,
        /// Text to look for in names (optional)
        query: Option<String>,
    ) -> McpResult<String> {
        self.handle_search(query).await
    }
}
