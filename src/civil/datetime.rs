use crate::civil::{Date, Time};

/// A calendar date paired with a clock time.
///
/// A `DateTime` has no timezone attached; see
/// [`Timestamp`](crate::Timestamp) for the full result of a parse, which
/// may additionally carry a UTC offset.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct DateTime {
    date: Date,
    time: Time,
}

impl DateTime {
    /// Creates a `DateTime` from its date and time components.
    ///
    /// This is infallible: both components are already validated by
    /// construction.
    ///
    /// # Example
    ///
    /// ```
    /// use isoparse::civil::{Date, DateTime, Time};
    ///
    /// let dt = DateTime::from_parts(
    ///     Date::constant(2024, 6, 1),
    ///     Time::constant(12, 30, 0, 0),
    /// );
    /// assert_eq!(dt.date().day(), 1);
    /// assert_eq!(dt.time().minute(), 30);
    /// ```
    #[inline]
    pub fn from_parts(date: Date, time: Time) -> DateTime {
        DateTime { date, time }
    }

    /// Returns the date component.
    #[inline]
    pub fn date(self) -> Date {
        self.date
    }

    /// Returns the time component.
    #[inline]
    pub fn time(self) -> Time {
        self.time
    }
}

impl core::fmt::Debug for DateTime {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{:?}T{:?}", self.date, self.time)
    }
}
