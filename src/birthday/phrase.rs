use chrono::{Datelike, NaiveDate};

use super::person::Person;
use super::roster::Roster;
use crate::config::Settings;
use crate::locale::{DateStyle, Locale};

/// Build the sentence announcing a person's next birthday
///
/// # Arguments
/// * `person` - Person to describe
/// * `today` - Reference date
/// * `settings` - Supplies the countdown window
/// * `locale` - Wording
///
/// # Returns
/// "<name> a <age> aujourd'hui !", "<name> aura <age> demain !", or
/// "<name> aura <age> le <date>" with ", dans <N> jours" appended when the
/// birthday falls within the countdown window
pub fn phrase(
    person: &Person,
    today: NaiveDate,
    settings: &Settings,
    locale: &dyn Locale,
) -> String {
    let age = locale.years(person.birthday_age);
    let days = person.days_until_birthday(today);

    match days {
        0 => locale.birthday_today(&person.name, &age),
        1 => locale.birthday_tomorrow(&person.name, &age),
        _ => {
            // Year is only shown once the birthday moves into next year
            let style = if person.next_birthday.year() == today.year() {
                DateStyle::DayMonth
            } else {
                DateStyle::Long
            };
            let date = locale.format_date(person.next_birthday, style);
            let sentence = locale.birthday_on(&person.name, &age, &date);

            if days > settings.countdown_window_days {
                sentence
            } else {
                format!("{}, {}", sentence, locale.countdown(&locale.days(days)))
            }
        }
    }
}

/// Whether wishes should be routed through the parent
pub fn shows_contacts(person: &Person, today: NaiveDate, settings: &Settings) -> bool {
    person.days_until_birthday(today) <= settings.contact_window_days
        && person.birthday_age < settings.contact_max_age
}

/// Prompt pointing well-wishers at the parent of a soon-to-celebrate minor
///
/// Returns `None` outside the contact window or when no parent is set.
pub fn contact_prompt(
    person: &Person,
    roster: &Roster,
    today: NaiveDate,
    settings: &Settings,
    locale: &dyn Locale,
) -> Option<String> {
    if !shows_contacts(person, today, settings) {
        return None;
    }
    roster
        .parent_of(person)
        .map(|parent| locale.contact_prompt(&parent.name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::birthday::person::{Gender, RosterEntry};
    use crate::locale::French;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn roster(today: NaiveDate) -> Roster {
        Roster::build(
            vec![
                RosterEntry::new("Maryline", date(1978, 9, 30), Gender::Female, None),
                RosterEntry::new("Keziah", date(2009, 3, 11), Gender::Male, Some("Maryline")),
                RosterEntry::new("Moana", date(2017, 3, 20), Gender::Female, Some("Maryline")),
                RosterEntry::new("Rudy", date(1985, 1, 1), Gender::Male, None),
                RosterEntry::new("Alone", date(2015, 3, 15), Gender::Male, None),
                RosterEntry::new("Baby", date(2023, 3, 10), Gender::Female, Some("Rudy")),
            ],
            today,
        )
        .unwrap()
    }

    fn find<'a>(roster: &'a Roster, name: &str) -> &'a Person {
        roster.people().iter().find(|p| p.name == name).unwrap()
    }

    #[test]
    fn test_phrase_later_this_year() {
        let today = date(2024, 3, 10);
        let roster = roster(today);
        let text = phrase(find(&roster, "Maryline"), today, &Settings::default(), &French);
        assert_eq!(text, "Maryline aura 46 ans le 30 septembre");
    }

    #[test]
    fn test_phrase_next_year_includes_year() {
        let today = date(2024, 3, 10);
        let roster = roster(today);
        let text = phrase(find(&roster, "Rudy"), today, &Settings::default(), &French);
        assert_eq!(text, "Rudy aura 40 ans le 1 janvier 2025");
    }

    #[test]
    fn test_phrase_today_and_tomorrow() {
        let today = date(2024, 3, 10);
        let roster = roster(today);
        let settings = Settings::default();
        assert_eq!(
            phrase(find(&roster, "Baby"), today, &settings, &French),
            "Baby a 1 an aujourd'hui !"
        );
        assert_eq!(
            phrase(find(&roster, "Keziah"), today, &settings, &French),
            "Keziah aura 15 ans demain !"
        );
    }

    #[test]
    fn test_phrase_countdown_within_window() {
        let today = date(2024, 3, 10);
        let roster = roster(today);
        let text = phrase(find(&roster, "Moana"), today, &Settings::default(), &French);
        assert_eq!(text, "Moana aura 7 ans le 20 mars, dans 10 jours");
    }

    #[test]
    fn test_phrase_countdown_boundary() {
        let today = date(2024, 8, 31);
        let roster = roster(today);
        // 30 days ahead: still counted down
        let text = phrase(find(&roster, "Maryline"), today, &Settings::default(), &French);
        assert_eq!(text, "Maryline aura 46 ans le 30 septembre, dans 30 jours");

        let today = date(2024, 8, 30);
        let roster = Roster::build(
            vec![RosterEntry::new("Maryline", date(1978, 9, 30), Gender::Female, None)],
            today,
        )
        .unwrap();
        let text = phrase(&roster.people()[0], today, &Settings::default(), &French);
        assert_eq!(text, "Maryline aura 46 ans le 30 septembre");
    }

    #[test]
    fn test_contact_prompt_for_minor_with_parent() {
        let today = date(2024, 3, 10);
        let roster = roster(today);
        let settings = Settings::default();
        assert_eq!(
            contact_prompt(find(&roster, "Moana"), &roster, today, &settings, &French).as_deref(),
            Some("Envoyez vos souhaits via Maryline")
        );
        assert_eq!(
            contact_prompt(find(&roster, "Baby"), &roster, today, &settings, &French).as_deref(),
            Some("Envoyez vos souhaits via Rudy")
        );
    }

    #[test]
    fn test_contact_prompt_omitted() {
        let today = date(2024, 3, 10);
        let roster = roster(today);
        let settings = Settings::default();
        // Adult
        let maryline = find(&roster, "Maryline");
        assert!(contact_prompt(maryline, &roster, today, &settings, &French).is_none());
        // Minor without parent, inside the window
        let alone = find(&roster, "Alone");
        assert!(shows_contacts(alone, today, &settings));
        assert!(contact_prompt(alone, &roster, today, &settings, &French).is_none());
    }

    #[test]
    fn test_contact_prompt_outside_window() {
        let today = date(2024, 4, 15);
        let roster = roster(today);
        let moana = find(&roster, "Moana");
        assert!(moana.days_until_birthday(today) > 30);
        assert!(!shows_contacts(moana, today, &Settings::default()));
    }

    #[test]
    fn test_contact_prompt_age_boundary() {
        let today = date(2024, 3, 10);
        let roster = Roster::build(
            vec![
                RosterEntry::new("Parent", date(1980, 1, 1), Gender::Female, None),
                RosterEntry::new("Twenty", date(2004, 3, 20), Gender::Male, Some("Parent")),
                RosterEntry::new("TwentyOne", date(2003, 3, 20), Gender::Male, Some("Parent")),
            ],
            today,
        )
        .unwrap();
        let settings = Settings::default();

        let twenty = find(&roster, "Twenty");
        assert_eq!(twenty.birthday_age, 20);
        assert!(shows_contacts(twenty, today, &settings));

        let twenty_one = find(&roster, "TwentyOne");
        assert_eq!(twenty_one.birthday_age, 21);
        assert!(!shows_contacts(twenty_one, today, &settings));
        assert!(contact_prompt(twenty_one, &roster, today, &settings, &French).is_none());
    }

    #[test]
    fn test_contact_prompt_day_boundary() {
        let today = date(2024, 3, 10);
        let roster = Roster::build(
            vec![
                RosterEntry::new("Parent", date(1980, 1, 1), Gender::Female, None),
                RosterEntry::new("In", date(2015, 4, 9), Gender::Female, Some("Parent")),
                RosterEntry::new("Out", date(2015, 4, 10), Gender::Female, Some("Parent")),
            ],
            today,
        )
        .unwrap();
        let settings = Settings::default();

        let inside = find(&roster, "In");
        assert_eq!(inside.days_until_birthday(today), 30);
        assert_eq!(
            contact_prompt(inside, &roster, today, &settings, &French).as_deref(),
            Some("Envoyez vos souhaits via Parent")
        );

        let outside = find(&roster, "Out");
        assert_eq!(outside.days_until_birthday(today), 31);
        assert!(!shows_contacts(outside, today, &settings));
    }
}
