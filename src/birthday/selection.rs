use std::str::FromStr;

use super::person::PersonId;

/// Which ordering the list uses
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    /// Chronological order of next birthdays
    #[default]
    agenda,
    /// Ordered by age, direction given by [`SortOrder`]
    age,
}

/// Direction of the age view; `asc` lists the youngest first
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    #[default]
    asc,
    desc,
}

impl SortOrder {
    pub fn flipped(self) -> Self {
        match self {
            SortOrder::asc => SortOrder::desc,
            SortOrder::desc => SortOrder::asc,
        }
    }
}

/// Filter panel that can be expanded
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterCategory {
    year,
    parent,
}

impl FromStr for View {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "agenda" => Ok(View::agenda),
            "age" => Ok(View::age),
            _ => Err(format!("Invalid view '{}'. Valid options are: agenda, age", s)),
        }
    }
}

impl FromStr for FilterCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "year" => Ok(FilterCategory::year),
            "parent" => Ok(FilterCategory::parent),
            _ => Err(format!(
                "Invalid filter category '{}'. Valid options are: year, parent",
                s
            )),
        }
    }
}

/// A user interaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SelectView(View),
    ToggleYear(i32),
    ClearYears,
    /// Select every year of the given universe
    SelectAllYears(Vec<i32>),
    ToggleParent(PersonId),
    ClearParents,
    SelectAllParents(Vec<PersonId>),
    ToggleFilterCategory(FilterCategory),
    /// Clear both year and parent filters
    Reset,
    /// Set the name query; `None` or blank clears it
    Search(Option<String>),
}

/// Everything the user can change on the page
///
/// Selected years and parents keep insertion order so badges show in the
/// order they were picked.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionState {
    pub view: View,
    pub age_sort_order: SortOrder,
    pub years: Vec<i32>,
    pub parents: Vec<PersonId>,
    pub filter_category: Option<FilterCategory>,
    pub query: Option<String>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one action and return the resulting state
    pub fn reduce(mut self, action: Action) -> Self {
        match action {
            Action::SelectView(view) => {
                if view == View::age && self.view == View::age {
                    self.age_sort_order = self.age_sort_order.flipped();
                }
                self.view = view;
            }
            Action::ToggleYear(year) => toggle(&mut self.years, year),
            Action::ClearYears => self.years.clear(),
            Action::SelectAllYears(years) => self.years = years,
            Action::ToggleParent(parent) => toggle(&mut self.parents, parent),
            Action::ClearParents => self.parents.clear(),
            Action::SelectAllParents(parents) => self.parents = parents,
            Action::ToggleFilterCategory(category) => {
                self.filter_category = if self.filter_category == Some(category) {
                    None
                } else {
                    Some(category)
                };
            }
            Action::Reset => {
                self.years.clear();
                self.parents.clear();
            }
            Action::Search(query) => {
                self.query = query
                    .map(|q| q.trim().to_string())
                    .filter(|q| !q.is_empty());
            }
        }
        self
    }

    /// Whether any year or parent filter is active
    pub fn has_filters(&self) -> bool {
        !self.years.is_empty() || !self.parents.is_empty()
    }
}

fn toggle<T: PartialEq>(selection: &mut Vec<T>, value: T) {
    if let Some(position) = selection.iter().position(|v| *v == value) {
        selection.remove(position);
    } else {
        selection.push(value);
    }
}
