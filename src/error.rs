//! Domain errors raised while building the roster

use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised while resolving roster entries into people.
///
/// The roster is static, so every variant is fatal at startup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RosterError {
    #[error("Parent '{parent}' of '{person}' is not in the roster")]
    UnknownParent { person: String, parent: String },

    #[error("Parent '{parent}' of '{person}' matches several people; use the person id instead")]
    AmbiguousParent { person: String, parent: String },

    #[error("'{0}' cannot be their own parent")]
    SelfParent(String),

    #[error("'{name}' is born on {birth_date}, after the reference date {today}")]
    BornInFuture {
        name: String,
        birth_date: NaiveDate,
        today: NaiveDate,
    },

    #[error("Next birthday of '{0}' is outside the supported calendar range")]
    DateOutOfRange(String),

    #[error("Person '{0}' is listed twice")]
    DuplicatePerson(String),
}
