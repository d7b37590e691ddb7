//! Birthday date arithmetic
//!
//! All computations are at day granularity against a reference date captured
//! once at startup.

use chrono::{Datelike, Local, Months, NaiveDate};

/// Get the current date in local timezone
pub fn local_date_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Get the anniversary of `birth_date` in `year`
///
/// A Feb 29 birth date falls on March 1 in non-leap years.
/// Returns `None` only when `year` is outside chrono's calendar range.
pub fn anniversary_in(birth_date: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birth_date.month(), birth_date.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
}

/// Get the next birthday on or after `today`
///
/// # Arguments
/// * `birth_date` - Date of birth
/// * `today` - Reference date
///
/// # Returns
/// The anniversary in `today`'s year, or, when that is strictly before
/// `today`, the same date moved one year forward. The move clamps to the end
/// of the month, so a Feb 29 birthday that already fell on March 1 stays on
/// March 1 and a leap-year Feb 29 becomes Feb 28.
pub fn next_birthday(birth_date: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = anniversary_in(birth_date, today.year())?;
    if this_year < today {
        this_year.checked_add_months(Months::new(12))
    } else {
        Some(this_year)
    }
}

/// Age reached on `next_birthday`
///
/// Equals the plain year difference to `today` when the birthday falls in
/// `today`'s year, and that difference plus one otherwise.
pub fn birthday_age(birth_date: NaiveDate, next_birthday: NaiveDate) -> i32 {
    next_birthday.year() - birth_date.year()
}

/// Number of calendar days from `today` to `date`
pub fn days_until(date: NaiveDate, today: NaiveDate) -> i64 {
    date.signed_duration_since(today).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_next_birthday_later_this_year() {
        let next = next_birthday(date(1978, 9, 30), date(2024, 3, 10)).unwrap();
        assert_eq!(next, date(2024, 9, 30));
        assert_eq!(birthday_age(date(1978, 9, 30), next), 46);
    }

    #[test]
    fn test_next_birthday_already_passed() {
        let next = next_birthday(date(1985, 1, 1), date(2024, 3, 10)).unwrap();
        assert_eq!(next, date(2025, 1, 1));
        assert_eq!(birthday_age(date(1985, 1, 1), next), 40);
    }

    #[test]
    fn test_next_birthday_today() {
        let today = date(2024, 5, 23);
        let next = next_birthday(date(1948, 5, 23), today).unwrap();
        assert_eq!(next, today);
        assert_eq!(days_until(next, today), 0);
        assert_eq!(birthday_age(date(1948, 5, 23), next), 76);
    }

    #[test]
    fn test_next_birthday_yesterday_rolls_over() {
        let next = next_birthday(date(1948, 5, 23), date(2024, 5, 24)).unwrap();
        assert_eq!(next, date(2025, 5, 23));
    }

    #[test]
    fn test_leap_day_birthday() {
        let birth = date(2000, 2, 29);
        assert_eq!(anniversary_in(birth, 2023), Some(date(2023, 3, 1)));
        assert_eq!(anniversary_in(birth, 2024), Some(date(2024, 2, 29)));

        // Non-leap year, before March 1
        let next = next_birthday(birth, date(2023, 2, 10)).unwrap();
        assert_eq!(next, date(2023, 3, 1));
        assert_eq!(birthday_age(birth, next), 23);
    }

    #[test]
    fn test_leap_day_birthday_after_it_passed() {
        let birth = date(2000, 2, 29);

        // Rolled to March 1 this year, moved forward from there
        let next = next_birthday(birth, date(2023, 3, 5)).unwrap();
        assert_eq!(next, date(2024, 3, 1));
        assert_eq!(birthday_age(birth, next), 24);

        // Leap year: Feb 29 moved forward clamps to Feb 28
        let next = next_birthday(birth, date(2024, 3, 5)).unwrap();
        assert_eq!(next, date(2025, 2, 28));
        assert_eq!(birthday_age(birth, next), 25);

        let next = next_birthday(birth, date(2024, 2, 29)).unwrap();
        assert_eq!(next, date(2024, 2, 29));
    }

    #[test]
    fn test_next_birthday_never_before_today() {
        let birth = date(1990, 12, 31);
        let mut today = date(2024, 1, 1);
        while today < date(2025, 1, 15) {
            let next = next_birthday(birth, today).unwrap();
            assert!(next >= today, "{} < {}", next, today);
            assert!(days_until(next, today) <= 366);
            today = today.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_age_increases_across_birthday() {
        let birth = date(2010, 6, 15);
        let before = next_birthday(birth, date(2024, 6, 15)).unwrap();
        let after = next_birthday(birth, date(2024, 6, 16)).unwrap();
        assert_eq!(birthday_age(birth, before), 14);
        assert_eq!(birthday_age(birth, after), 15);
    }

    #[test]
    fn test_days_until_crosses_year() {
        assert_eq!(days_until(date(2025, 1, 1), date(2024, 12, 31)), 1);
        assert_eq!(days_until(date(2024, 12, 31), date(2024, 1, 1)), 365);
    }
}
