//! Common test utilities for integration tests
#![allow(dead_code)]

use birthday_mcp::BirthdayServerHandler;
use birthday_mcp::birthday::{Gender, Person, Roster, RosterEntry};
use chrono::NaiveDate;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Reference date used by most tests
pub fn test_today() -> NaiveDate {
    date(2024, 3, 10)
}

/// Handler over the built-in roster at `today`
pub fn get_test_handler(today: NaiveDate) -> BirthdayServerHandler {
    BirthdayServerHandler::new(None, today).unwrap()
}

/// Built-in roster at `today`
pub fn builtin_roster(today: NaiveDate) -> Roster {
    let file = birthday_mcp::RosterSource::builtin().load().unwrap();
    Roster::build(file.people, today).unwrap()
}

pub fn entry(
    name: &str,
    birth_date: NaiveDate,
    gender: Gender,
    parent: Option<&str>,
) -> RosterEntry {
    RosterEntry::new(name, birth_date, gender, parent)
}

pub fn find<'a>(roster: &'a Roster, name: &str) -> &'a Person {
    roster
        .people()
        .iter()
        .find(|p| p.name == name)
        .unwrap_or_else(|| panic!("{} not in roster", name))
}

pub fn names(people: &[&Person]) -> Vec<String> {
    people.iter().map(|p| p.name.clone()).collect()
}
