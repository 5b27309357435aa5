use crate::{
    error::Error,
    util::common::{days_in_month, is_leap_year},
};

/// A calendar date in the proleptic Gregorian calendar.
///
/// A `Date` value corresponds to a triple of year, month and day. Every
/// `Date` value is guaranteed to be a valid date. For example, both
/// `2023-02-29` and `2023-11-31` are invalid and cannot be represented.
///
/// The supported years are `1..=9999`, which is precisely the range of
/// years expressible with the grammar's mandatory four digit year once
/// year zero is excluded. There are no negative years.
///
/// # Comparisons
///
/// `Date` implements `Eq` and `Ord`. When a date `d1` occurs before a
/// date `d2`, then `d1 < d2`.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Date {
    year: i16,
    month: i8,
    day: i8,
}

impl Date {
    /// The minimum representable date, `0001-01-01`.
    pub const MIN: Date = Date::constant(1, 1, 1);

    /// The maximum representable date, `9999-12-31`.
    pub const MAX: Date = Date::constant(9999, 12, 31);

    /// Creates a new `Date` value from its component year, month and day
    /// values.
    ///
    /// To set the component values of a date after creating it, use one
    /// of the parsing entry points instead; a `Date` is immutable.
    ///
    /// # Errors
    ///
    /// This returns an error when the given components are out of range:
    /// the year must be in `1..=9999`, the month in `1..=12` and the day
    /// at least `1` and at most the number of days in the corresponding
    /// month. So for example, `2024-02-29` is valid but `2023-02-29` is
    /// not.
    ///
    /// # Example
    ///
    /// ```
    /// use isoparse::civil::Date;
    ///
    /// let d = Date::new(2024, 2, 29)?;
    /// assert_eq!(d.year(), 2024);
    /// assert_eq!(d.month(), 2);
    /// assert_eq!(d.day(), 29);
    ///
    /// assert!(Date::new(2023, 2, 29).is_err());
    /// # Ok::<(), isoparse::Error>(())
    /// ```
    #[inline]
    pub fn new(year: i16, month: i8, day: i8) -> Result<Date, Error> {
        if !(1 <= year && year <= 9999) {
            return Err(Error::range("year", year, 1, 9999));
        }
        if !(1 <= month && month <= 12) {
            return Err(Error::range("month", month, 1, 12));
        }
        let max_day = days_in_month(year, month);
        if !(1 <= day && day <= max_day) {
            return Err(Error::range("day", day, 1, max_day));
        }
        Ok(Date { year, month, day })
    }

    /// Creates a new `Date` value in a `const` context.
    ///
    /// # Panics
    ///
    /// This routine panics when [`Date::new`] would return an error.
    ///
    /// # Example
    ///
    /// ```
    /// use isoparse::civil::Date;
    ///
    /// let d = Date::constant(2024, 2, 29);
    /// assert_eq!(d.year(), 2024);
    /// ```
    #[inline]
    pub const fn constant(year: i16, month: i8, day: i8) -> Date {
        if year < 1 || year > 9999 {
            panic!("invalid year");
        }
        if month < 1 || month > 12 {
            panic!("invalid month");
        }
        if day < 1 || day > days_in_month(year, month) {
            panic!("invalid day");
        }
        Date { year, month, day }
    }

    /// Returns the year of this date, in `1..=9999`.
    #[inline]
    pub fn year(self) -> i16 {
        self.year
    }

    /// Returns the month of this date, in `1..=12`.
    #[inline]
    pub fn month(self) -> i8 {
        self.month
    }

    /// Returns the day of this date, in `1..=31`.
    #[inline]
    pub fn day(self) -> i8 {
        self.day
    }

    /// Returns true if and only if the year of this date is a leap year.
    ///
    /// # Example
    ///
    /// ```
    /// use isoparse::civil::Date;
    ///
    /// assert!(Date::constant(2024, 1, 1).in_leap_year());
    /// assert!(!Date::constant(2023, 12, 31).in_leap_year());
    /// ```
    #[inline]
    pub fn in_leap_year(self) -> bool {
        is_leap_year(self.year)
    }

    /// Returns the number of days in the month of this date.
    ///
    /// # Example
    ///
    /// ```
    /// use isoparse::civil::Date;
    ///
    /// assert_eq!(Date::constant(2024, 2, 10).days_in_month(), 29);
    /// assert_eq!(Date::constant(2023, 2, 10).days_in_month(), 28);
    /// ```
    #[inline]
    pub fn days_in_month(self) -> i8 {
        days_in_month(self.year, self.month)
    }
}

impl core::fmt::Debug for Date {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn new_rejects_out_of_range() {
        assert!(Date::new(0, 1, 1).is_err());
        assert!(Date::new(10_000, 1, 1).is_err());
        assert!(Date::new(2024, 0, 1).is_err());
        assert!(Date::new(2024, 13, 1).is_err());
        assert!(Date::new(2024, 1, 0).is_err());
        assert!(Date::new(2024, 1, 32).is_err());
        assert!(Date::new(2024, 4, 31).is_err());
        assert!(Date::new(2023, 2, 29).is_err());
        assert!(Date::new(1900, 2, 29).is_err());
    }

    #[test]
    fn new_accepts_boundaries() {
        assert_eq!(Date::new(1, 1, 1).unwrap(), Date::MIN);
        assert_eq!(Date::new(9999, 12, 31).unwrap(), Date::MAX);
        assert!(Date::new(2024, 2, 29).is_ok());
        assert!(Date::new(2000, 2, 29).is_ok());
    }

    #[test]
    fn day_out_of_range_names_month_maximum() {
        let err = Date::new(2023, 2, 29).unwrap_err();
        assert_eq!(
            err.to_string(),
            "parameter 'day' with value 29 is not in the \
             required range of 1..=28",
        );
    }
}
