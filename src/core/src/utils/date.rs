use chrono::{Datelike, Months, NaiveDate};

pub struct DateUtils;

impl DateUtils {
    /// Full years between `birth_date` and `now`. Dates in the future yield 0.
    pub fn age(birth_date: NaiveDate, now: NaiveDate) -> u8 {
        now.years_since(birth_date)
            .map(|years| years.min(u8::MAX as u32) as u8)
            .unwrap_or(0)
    }

    pub fn is_birthday(birth_date: NaiveDate, now: NaiveDate) -> bool {
        birth_date.month() == now.month() && birth_date.day() == now.day()
    }

    /// Birth date of someone who turns `age` on `now`. A leap day maps to
    /// Feb 28 of the birth year.
    pub fn birth_date_for_age(age: u8, now: NaiveDate) -> NaiveDate {
        now.checked_sub_months(Months::new(age as u32 * 12))
            .unwrap_or(NaiveDate::MIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_age_before_birthday() {
        assert_eq!(DateUtils::age(date(2000, 6, 15), date(2025, 6, 14)), 24);
    }

    #[test]
    fn test_age_on_birthday() {
        assert_eq!(DateUtils::age(date(2000, 6, 15), date(2025, 6, 15)), 25);
    }

    #[test]
    fn test_age_future_birth_date_is_zero() {
        assert_eq!(DateUtils::age(date(2030, 1, 1), date(2025, 1, 1)), 0);
    }

    #[test]
    fn test_birth_date_for_age_round_trips() {
        let now = date(2025, 3, 10);
        for age in [16u8, 21, 30, 38] {
            assert_eq!(DateUtils::age(DateUtils::birth_date_for_age(age, now), now), age);
        }
    }

    #[test]
    fn test_birth_date_for_age_on_leap_day() {
        let now = date(2024, 2, 29);

        assert_eq!(DateUtils::birth_date_for_age(17, now), date(2007, 2, 28));
        assert_eq!(DateUtils::birth_date_for_age(24, now), date(2000, 2, 29));
        for age in [17u8, 24, 25, 30] {
            assert_eq!(DateUtils::age(DateUtils::birth_date_for_age(age, now), now), age);
        }
    }

    #[test]
    fn test_is_birthday() {
        assert!(DateUtils::is_birthday(date(1999, 2, 3), date(2024, 2, 3)));
        assert!(!DateUtils::is_birthday(date(1999, 2, 3), date(2024, 2, 4)));
    }
}
