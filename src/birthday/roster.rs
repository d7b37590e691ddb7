use chrono::{Datelike, NaiveDate};
use std::collections::HashMap;

use super::calendar;
use super::person::{Person, PersonId, RosterEntry};
use crate::error::RosterError;
use crate::locale;

/// Registry of all people, in roster order
///
/// Parents are stored as ids into this registry, so looking one up never
/// follows an object reference.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    pub(crate) people: Vec<Person>,

    /// id → position in `people`
    pub(crate) index: HashMap<PersonId, usize>,
}

impl Roster {
    /// Build the registry from raw entries, deriving birthdays against `today`
    ///
    /// # Arguments
    /// * `entries` - Roster entries; `parent` may name any other entry by name or id
    /// * `today` - Reference date the next birthdays are computed from
    ///
    /// # Returns
    /// The roster, or the first entry that cannot be resolved
    pub fn build(entries: Vec<RosterEntry>, today: NaiveDate) -> Result<Self, RosterError> {
        let mut ids = Vec::with_capacity(entries.len());
        let mut index = HashMap::with_capacity(entries.len());

        for (position, entry) in entries.iter().enumerate() {
            if entry.birth_date > today {
                return Err(RosterError::BornInFuture {
                    name: entry.name.clone(),
                    birth_date: entry.birth_date,
                    today,
                });
            }
            let id = PersonId::new(&entry.name, entry.birth_date);
            if index.insert(id.clone(), position).is_some() {
                return Err(RosterError::DuplicatePerson(id.to_string()));
            }
            ids.push(id);
        }

        let mut people = Vec::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            let id = ids[position].clone();
            let parent = match entry.parent.as_deref() {
                Some(reference) => Some(resolve_parent(&entry.name, reference, &entries, &ids)?),
                None => None,
            };
            if parent.as_ref() == Some(&id) {
                return Err(RosterError::SelfParent(entry.name.clone()));
            }

            let next_birthday = calendar::next_birthday(entry.birth_date, today)
                .ok_or_else(|| RosterError::DateOutOfRange(entry.name.clone()))?;
            let birthday_age =
                u32::try_from(calendar::birthday_age(entry.birth_date, next_birthday))
                    .map_err(|_| RosterError::DateOutOfRange(entry.name.clone()))?;

            people.push(Person {
                id,
                name: entry.name.clone(),
                birth_date: entry.birth_date,
                gender: entry.gender,
                parent,
                next_birthday,
                birthday_age,
            });
        }

        Ok(Self { people, index })
    }

    /// All people in roster order
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Find a person by id
    pub fn get(&self, id: &PersonId) -> Option<&Person> {
        self.index.get(id).map(|&position| &self.people[position])
    }

    /// Get the parent of `person`, if one is set
    pub fn parent_of(&self, person: &Person) -> Option<&Person> {
        person.parent.as_ref().and_then(|id| self.get(id))
    }

    /// Distinct birth years, in order of first appearance
    pub fn years(&self) -> Vec<i32> {
        let mut years = Vec::new();
        for person in &self.people {
            let year = person.birth_date.year();
            if !years.contains(&year) {
                years.push(year);
            }
        }
        years
    }

    /// Everyone listed as somebody's parent, sorted by name
    pub fn parents(&self) -> Vec<&Person> {
        let mut parents: Vec<&Person> = Vec::new();
        for id in self.people.iter().filter_map(|p| p.parent.as_ref()) {
            if parents.iter().any(|p| &p.id == id) {
                continue;
            }
            if let Some(parent) = self.get(id) {
                parents.push(parent);
            }
        }
        parents.sort_by_cached_key(|p| locale::collation_key(&p.name));
        parents
    }

    /// Find a parent by id or, failing that, by exact name
    pub fn find_parent(&self, reference: &str) -> Option<&Person> {
        let parents = self.parents();
        parents
            .iter()
            .find(|p| p.id.as_str() == reference)
            .or_else(|| parents.iter().find(|p| p.name == reference))
            .copied()
    }
}

/// Resolve a parent reference: an exact person id wins, otherwise a unique name
fn resolve_parent(
    child: &str,
    reference: &str,
    entries: &[RosterEntry],
    ids: &[PersonId],
) -> Result<PersonId, RosterError> {
    if let Some(id) = ids.iter().find(|id| id.as_str() == reference) {
        return Ok(id.clone());
    }

    let mut matches = entries
        .iter()
        .zip(ids)
        .filter(|(entry, _)| entry.name == reference)
        .map(|(_, id)| id);

    match (matches.next(), matches.next()) {
        (Some(id), None) => Ok(id.clone()),
        (Some(_), Some(_)) => Err(RosterError::AmbiguousParent {
            person: child.to_string(),
            parent: reference.to_string(),
        }),
        (None, _) => Err(RosterError::UnknownParent {
            person: child.to_string(),
            parent: reference.to_string(),
        }),
    }
}
