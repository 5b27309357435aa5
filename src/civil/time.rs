use crate::error::Error;

/// A 24-hour clock time with microsecond precision.
///
/// Every `Time` value is a valid clock reading: the hour is in `0..=23`,
/// the minute and second in `0..=59` and the microsecond in
/// `0..=999_999`. Leap seconds are not supported, so a second value of
/// `60` is out of range.
///
/// # Default value
///
/// The default `Time` is midnight, which is also what each component of
/// a parsed timestamp defaults to when the input omits it.
#[derive(Clone, Copy, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Time {
    hour: i8,
    minute: i8,
    second: i8,
    microsecond: i32,
}

impl Time {
    /// The minimum representable time, `00:00:00` (midnight).
    pub const MIN: Time = Time::midnight();

    /// The maximum representable time, `23:59:59.999999`.
    pub const MAX: Time = Time::constant(23, 59, 59, 999_999);

    /// Creates a new `Time` value from its component hour, minute,
    /// second and microsecond values.
    ///
    /// # Errors
    ///
    /// This returns an error when any component is out of range: the
    /// hour must be in `0..=23`, the minute and second in `0..=59` and
    /// the microsecond in `0..=999_999`.
    ///
    /// # Example
    ///
    /// ```
    /// use isoparse::civil::Time;
    ///
    /// let t = Time::new(16, 30, 59, 999_999)?;
    /// assert_eq!(t.hour(), 16);
    /// assert_eq!(t.microsecond(), 999_999);
    ///
    /// // No leap second support.
    /// assert!(Time::new(23, 59, 60, 0).is_err());
    /// # Ok::<(), isoparse::Error>(())
    /// ```
    #[inline]
    pub fn new(
        hour: i8,
        minute: i8,
        second: i8,
        microsecond: i32,
    ) -> Result<Time, Error> {
        if !(0 <= hour && hour <= 23) {
            return Err(Error::range("hour", hour, 0, 23));
        }
        if !(0 <= minute && minute <= 59) {
            return Err(Error::range("minute", minute, 0, 59));
        }
        if !(0 <= second && second <= 59) {
            return Err(Error::range("second", second, 0, 59));
        }
        if !(0 <= microsecond && microsecond <= 999_999) {
            return Err(Error::range("microsecond", microsecond, 0, 999_999));
        }
        Ok(Time { hour, minute, second, microsecond })
    }

    /// Creates a new `Time` value in a `const` context.
    ///
    /// # Panics
    ///
    /// This routine panics when [`Time::new`] would return an error.
    #[inline]
    pub const fn constant(
        hour: i8,
        minute: i8,
        second: i8,
        microsecond: i32,
    ) -> Time {
        if hour < 0 || hour > 23 {
            panic!("invalid hour");
        }
        if minute < 0 || minute > 59 {
            panic!("invalid minute");
        }
        if second < 0 || second > 59 {
            panic!("invalid second");
        }
        if microsecond < 0 || microsecond > 999_999 {
            panic!("invalid microsecond");
        }
        Time { hour, minute, second, microsecond }
    }

    /// Returns midnight, `00:00:00`.
    #[inline]
    pub const fn midnight() -> Time {
        Time { hour: 0, minute: 0, second: 0, microsecond: 0 }
    }

    /// Returns the hour of this time, in `0..=23`.
    #[inline]
    pub fn hour(self) -> i8 {
        self.hour
    }

    /// Returns the minute of this time, in `0..=59`.
    #[inline]
    pub fn minute(self) -> i8 {
        self.minute
    }

    /// Returns the second of this time, in `0..=59`.
    #[inline]
    pub fn second(self) -> i8 {
        self.second
    }

    /// Returns the microsecond of this time, in `0..=999_999`.
    #[inline]
    pub fn microsecond(self) -> i32 {
        self.microsecond
    }
}

impl core::fmt::Debug for Time {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if self.microsecond == 0 {
            write!(
                f,
                "{:02}:{:02}:{:02}",
                self.hour, self.minute, self.second
            )
        } else {
            write!(
                f,
                "{:02}:{:02}:{:02}.{:06}",
                self.hour, self.minute, self.second, self.microsecond
            )
        }
    }
}
