//! Text rendering of the birthday page
//!
//! The page has two regions: the navigation region (views, selected-value
//! badges, filter categories, and the open filter panel) and the list region
//! (one line per visible person). Selected buttons are shown in brackets.

use chrono::NaiveDate;

use crate::birthday::phrase;
use crate::birthday::{FilterCategory, Person, Roster, SelectionState, SortOrder, Urgency, View};
use crate::config::Settings;
use crate::locale::{DateStyle, Label, Locale};

fn button(label: &str, selected: bool) -> String {
    if selected {
        format!("[{}]", label)
    } else {
        label.to_string()
    }
}

fn badge(label: &str) -> String {
    format!("{} x", label)
}

/// Render the navigation region
pub fn format_nav(roster: &Roster, state: &SelectionState, locale: &dyn Locale) -> String {
    let mut result = String::new();

    let arrow = match state.age_sort_order {
        SortOrder::asc => "↑",
        SortOrder::desc => "↓",
    };
    result.push_str(&format!(
        "{}  {}\n",
        button(locale.label(Label::Agenda), state.view == View::agenda),
        button(
            &format!("{} {}", locale.label(Label::ByAge), arrow),
            state.view == View::age
        ),
    ));

    let mut badges: Vec<String> = state.years.iter().map(|y| badge(&y.to_string())).collect();
    badges.extend(
        state
            .parents
            .iter()
            .filter_map(|id| roster.get(id))
            .map(|parent| badge(&parent.name)),
    );
    if !badges.is_empty() {
        result.push_str(&format!("{}\n", badges.join("  ")));
    }

    let mut categories = vec![
        button(
            locale.label(Label::Years),
            state.filter_category == Some(FilterCategory::year),
        ),
        button(
            locale.label(Label::Parents),
            state.filter_category == Some(FilterCategory::parent),
        ),
    ];
    if state.has_filters() {
        categories.push(locale.label(Label::Reset).to_string());
    }
    result.push_str(&format!("{}\n", categories.join("  ")));

    match state.filter_category {
        Some(FilterCategory::year) => {
            let years: Vec<String> = roster
                .years()
                .iter()
                .map(|year| button(&year.to_string(), state.years.contains(year)))
                .collect();
            result.push_str(&format!("{}\n", years.join("  ")));
        }
        Some(FilterCategory::parent) => {
            let parents: Vec<String> = roster
                .parents()
                .iter()
                .map(|parent| button(&parent.name, state.parents.contains(&parent.id)))
                .collect();
            result.push_str(&format!("{}\n", parents.join("  ")));
        }
        None => {}
    }

    result
}

/// Render one person: urgency class, phrase, birth date, and contact prompt
pub fn format_person(
    person: &Person,
    roster: &Roster,
    today: NaiveDate,
    settings: &Settings,
    locale: &dyn Locale,
) -> String {
    let urgency = Urgency::classify(person.days_until_birthday(today));
    let text = phrase::phrase(person, today, settings, locale);
    let born = locale.format_date(person.birth_date, DateStyle::Short);

    let mut result = if urgency == Urgency::Normal {
        format!("- {} ({})\n", text, born)
    } else {
        format!("- [{}] {} ({})\n", urgency, text, born)
    };
    if let Some(prompt) = phrase::contact_prompt(person, roster, today, settings, locale) {
        result.push_str(&format!("  {}\n", prompt));
    }
    result
}

/// Render the list region
pub fn format_people(
    people: &[&Person],
    roster: &Roster,
    today: NaiveDate,
    settings: &Settings,
    locale: &dyn Locale,
) -> String {
    if people.is_empty() {
        return format!("{}\n", locale.label(Label::NoBirthdays));
    }

    people
        .iter()
        .map(|person| format_person(person, roster, today, settings, locale))
        .collect()
}
