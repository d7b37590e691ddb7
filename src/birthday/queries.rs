//! Visible-list pipeline
//!
//! Turns the full roster and the current selection into the ordered list of
//! people to display: query filter, year filter, parent filter, then sort.

use chrono::Datelike;

use super::person::{Person, PersonId};
use super::roster::Roster;
use super::selection::{SelectionState, SortOrder, View};

/// Compute the people to display for `state`
pub fn visible_people<'a>(roster: &'a Roster, state: &SelectionState) -> Vec<&'a Person> {
    let mut people: Vec<&Person> = roster.people().iter().collect();

    if let Some(ref query) = state.query {
        apply_query_filter(&mut people, query);
    }
    if !state.years.is_empty() {
        apply_year_filter(&mut people, &state.years);
    }
    if !state.parents.is_empty() {
        apply_parent_filter(&mut people, &state.parents);
    }

    sort_people(&mut people, state.view, state.age_sort_order);
    people
}

/// Keep people whose name contains `query` (case-insensitive)
pub fn apply_query_filter(people: &mut Vec<&Person>, query: &str) {
    let query_lower = query.to_lowercase();
    people.retain(|person| person.name.to_lowercase().contains(&query_lower));
}

/// Keep people born in one of `years`
pub fn apply_year_filter(people: &mut Vec<&Person>, years: &[i32]) {
    people.retain(|person| years.contains(&person.birth_date.year()));
}

/// Keep children of the selected parents, and the parents themselves
pub fn apply_parent_filter(people: &mut Vec<&Person>, parents: &[PersonId]) {
    people.retain(|person| {
        parents
            .iter()
            .any(|parent| person.is_child_of(parent) || &person.id == parent)
    });
}

/// Stable sort for the selected view
///
/// * `agenda` - next birthday ascending
/// * `age` - youngest first for `asc`, oldest first for `desc`
pub fn sort_people(people: &mut [&Person], view: View, order: SortOrder) {
    match view {
        View::agenda => people.sort_by_key(|person| person.next_birthday),
        View::age => match order {
            SortOrder::asc => people.sort_by(|a, b| b.birth_date.cmp(&a.birth_date)),
            SortOrder::desc => people.sort_by(|a, b| a.birth_date.cmp(&b.birth_date)),
        },
    }
}
