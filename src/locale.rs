//! Locale-dependent wording
//!
//! The birthday logic only talks to the [`Locale`] trait: plural forms, date
//! formats, sentence templates, and UI labels. [`French`] is the one shipped
//! implementation.

use chrono::{Datelike, NaiveDate};
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Date formats used by the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// Day and month name, e.g. "30 septembre"
    DayMonth,
    /// Day, month name, and year, e.g. "30 septembre 2025"
    Long,
    /// Numeric, e.g. "30/09/1978"
    Short,
}

/// Fixed UI labels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Agenda,
    ByAge,
    Years,
    Parents,
    Reset,
    NoBirthdays,
}

pub trait Locale: Send + Sync {
    /// Age with its unit, e.g. "46 ans"
    fn years(&self, count: u32) -> String;

    /// Day count with its unit, e.g. "5 jours"
    fn days(&self, count: i64) -> String;

    fn format_date(&self, date: NaiveDate, style: DateStyle) -> String;

    fn birthday_today(&self, name: &str, age: &str) -> String;

    fn birthday_tomorrow(&self, name: &str, age: &str) -> String;

    fn birthday_on(&self, name: &str, age: &str, date: &str) -> String;

    /// Relative distance appended to a phrase, e.g. "dans 5 jours"
    fn countdown(&self, distance: &str) -> String;

    fn contact_prompt(&self, parent_name: &str) -> String;

    fn label(&self, label: Label) -> &'static str;
}

const FRENCH_MONTHS: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct French;

impl French {
    /// CLDR French: "one" covers 0 and 1
    fn is_singular(count: i64) -> bool {
        count == 0 || count == 1
    }

    fn month_name(date: NaiveDate) -> &'static str {
        FRENCH_MONTHS[date.month0() as usize]
    }
}

impl Locale for French {
    fn years(&self, count: u32) -> String {
        if Self::is_singular(i64::from(count)) {
            format!("{} an", count)
        } else {
            format!("{} ans", count)
        }
    }

    fn days(&self, count: i64) -> String {
        if count == 1 {
            "1 jour".to_string()
        } else {
            format!("{} jours", count)
        }
    }

    fn format_date(&self, date: NaiveDate, style: DateStyle) -> String {
        match style {
            DateStyle::DayMonth => format!("{} {}", date.day(), Self::month_name(date)),
            DateStyle::Long => format!("{} {} {}", date.day(), Self::month_name(date), date.year()),
            DateStyle::Short => date.format("%d/%m/%Y").to_string(),
        }
    }

    fn birthday_today(&self, name: &str, age: &str) -> String {
        format!("{} a {} aujourd'hui !", name, age)
    }

    fn birthday_tomorrow(&self, name: &str, age: &str) -> String {
        format!("{} aura {} demain !", name, age)
    }

    fn birthday_on(&self, name: &str, age: &str, date: &str) -> String {
        format!("{} aura {} le {}", name, age, date)
    }

    fn countdown(&self, distance: &str) -> String {
        format!("dans {}", distance)
    }

    fn contact_prompt(&self, parent_name: &str) -> String {
        format!("Envoyez vos souhaits via {}", parent_name)
    }

    fn label(&self, label: Label) -> &'static str {
        match label {
            Label::Agenda => "Agenda",
            Label::ByAge => "Par âge",
            Label::Years => "Années",
            Label::Parents => "Parents",
            Label::Reset => "Effacer",
            Label::NoBirthdays => "Aucun anniversaire",
        }
    }
}

/// Sort key approximating French collation: case- and accent-insensitive
///
/// Names are decomposed first, so precomposed and decomposed spellings of
/// the same name produce the same key.
pub fn collation_key(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}
