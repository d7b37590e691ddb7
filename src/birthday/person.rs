use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::calendar;

/// Gender as recorded in the roster ("M" or "F")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

/// Stable identifier of a person: name and ISO birth date (e.g. "Alex-1948-05-23")
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PersonId(String);

impl PersonId {
    pub fn new(name: &str, birth_date: NaiveDate) -> Self {
        Self(format!("{}-{}", name, birth_date.format("%Y-%m-%d")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One line of a roster file, before parent resolution
///
/// `parent` refers to another entry by name or by person id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub name: String,
    pub birth_date: NaiveDate,
    pub gender: Gender,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

impl RosterEntry {
    pub fn new(name: &str, birth_date: NaiveDate, gender: Gender, parent: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            birth_date,
            gender,
            parent: parent.map(str::to_string),
        }
    }
}

/// A family member with birthday data derived against the reference date
///
/// Built once by [`Roster::build`](super::Roster::build) and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub birth_date: NaiveDate,
    pub gender: Gender,
    /// Parent id, resolved against the same roster
    pub parent: Option<PersonId>,
    /// Next birthday on or after the reference date
    pub next_birthday: NaiveDate,
    /// Age reached on `next_birthday`
    pub birthday_age: u32,
}

impl Person {
    /// Calendar days from `today` until the next birthday
    pub fn days_until_birthday(&self, today: NaiveDate) -> i64 {
        calendar::days_until(self.next_birthday, today)
    }

    pub fn is_child_of(&self, parent: &PersonId) -> bool {
        self.parent.as_ref() == Some(parent)
    }
}
