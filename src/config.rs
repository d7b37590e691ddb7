//! Roster file loading
//!
//! A roster file is TOML with an optional `[settings]` table and one
//! `[[person]]` table per family member:
//!
//! ```toml
//! [settings]
//! contact_max_age = 21
//!
//! [[person]]
//! name = "Maryline"
//! birth_date = "1978-10-30"
//! gender = "F"
//! parent = "Monique"
//! ```
//!
//! Without a file, the family roster compiled into the binary is used.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::birthday::RosterEntry;

/// Roster compiled into the binary
pub const BUILTIN_ROSTER: &str = include_str!("../roster/family.toml");

/// Page thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Contact prompts are shown for people turning strictly less than this
    pub contact_max_age: u32,
    /// Contact prompts are shown this many days ahead (inclusive)
    pub contact_window_days: i64,
    /// Phrases get a "dans N jours" suffix this many days ahead (inclusive)
    pub countdown_window_days: i64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            contact_max_age: 21,
            contact_window_days: 30,
            countdown_window_days: 30,
        }
    }
}

/// Parsed content of a roster file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterFile {
    #[serde(default)]
    pub settings: Settings,
    #[serde(default, rename = "person")]
    pub people: Vec<RosterEntry>,
}

impl RosterFile {
    pub fn parse(content: &str) -> Result<Self> {
        let file: RosterFile = toml::from_str(content)?;
        Ok(file)
    }
}

/// Where the roster comes from: a file on disk or the built-in one
pub struct RosterSource {
    file_path: Option<PathBuf>,
}

impl RosterSource {
    pub fn new(file_path: Option<impl AsRef<Path>>) -> Self {
        Self {
            file_path: file_path.map(|p| p.as_ref().to_path_buf()),
        }
    }

    pub fn builtin() -> Self {
        Self { file_path: None }
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn load(&self) -> Result<RosterFile> {
        let file = match self.file_path {
            Some(ref path) => {
                let content = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read roster file {}", path.display()))?;
                RosterFile::parse(&content)
                    .with_context(|| format!("Invalid roster file {}", path.display()))?
            }
            None => RosterFile::parse(BUILTIN_ROSTER).context("Invalid built-in roster")?,
        };

        let source = self
            .file_path()
            .map_or("built-in".into(), |p| p.display().to_string());
        info!(
            %source,
            people = file.people.len(),
            "Roster loaded"
        );
        Ok(file)
    }
}
