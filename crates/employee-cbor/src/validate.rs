//! Calendar checks for [`Date`], kept apart from the codec.
//!
//! The codec stores whatever integers it is given. Callers that want to
//! refuse impossible birthdates run [`Date::validate`] themselves.

use thiserror::Error;

use crate::record::Date;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DateError {
    #[error("month {0} is outside 1..=12")]
    Month(i32),
    #[error("day {day} is outside 1..={max} for month {month} of {year}")]
    Day {
        day: i32,
        month: i32,
        year: i32,
        max: i32,
    },
}

impl Date {
    /// Proleptic Gregorian validity check.
    pub fn validate(&self) -> Result<(), DateError> {
        let max = days_in_month(self.month, self.year).ok_or(DateError::Month(self.month))?;
        if !(1..=max).contains(&self.day) {
            return Err(DateError::Day {
                day: self.day,
                month: self.month,
                year: self.year,
                max,
            });
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(month: i32, year: i32) -> Option<i32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 if is_leap_year(year) => Some(29),
        2 => Some(28),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_real_dates() {
        assert!(Date::new(1, 1, 2000).is_valid());
        assert!(Date::new(29, 2, 2000).is_valid());
        assert!(Date::new(31, 12, -44).is_valid());
    }

    #[test]
    fn rejects_bad_month() {
        assert_eq!(Date::new(1, 13, 2000).validate(), Err(DateError::Month(13)));
        assert_eq!(Date::new(1, 0, 2000).validate(), Err(DateError::Month(0)));
    }

    #[test]
    fn rejects_bad_day() {
        assert_eq!(
            Date::new(29, 2, 1900).validate(),
            Err(DateError::Day {
                day: 29,
                month: 2,
                year: 1900,
                max: 28
            })
        );
        assert!(!Date::new(0, 5, 2020).is_valid());
        assert!(!Date::new(31, 4, 2020).is_valid());
    }
}
