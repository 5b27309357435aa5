use crate::{
    civil::{Date, DateTime, Time},
    error::Error,
    fmt::iso8601,
    tz::Offset,
};

/// A parsed calendar timestamp: a datetime and an optional UTC offset.
///
/// This is the result of a successful parse. The date is always present.
/// When the input had no time segment, the time is midnight, and when it
/// had no timezone designator, the timestamp is naive and
/// [`Timestamp::offset`] returns `None`.
///
/// The two ways to get a `Timestamp` are [`Timestamp::parse`] and the
/// `FromStr` impl.
///
/// # Example
///
/// ```
/// use isoparse::{tz::Offset, Timestamp};
///
/// let ts = Timestamp::parse("1902-08-02T12:30:24+01:15")?;
/// assert_eq!(ts.datetime().date().year(), 1902);
/// assert_eq!(ts.datetime().time().second(), 24);
/// assert_eq!(ts.offset().map(Offset::seconds), Some(4500));
/// # Ok::<(), isoparse::Error>(())
/// ```
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct Timestamp {
    datetime: DateTime,
    offset: Option<Offset>,
}

impl Timestamp {
    /// Parses a timestamp from the entirety of the given input.
    ///
    /// The input must match `DATE ['T' TIME] [TIMEZONE]` exactly, with
    /// nothing before or after. The accepted grammar, and the categories
    /// of [`Error`] this can return, are documented at the crate level.
    ///
    /// This accepts `&str` and `&[u8]` alike. Input is never required to
    /// be valid UTF-8.
    ///
    /// # Example
    ///
    /// ```
    /// use isoparse::Timestamp;
    ///
    /// let ts = Timestamp::parse("2022-12-12T11:10:09Z")?;
    /// assert_eq!(ts.datetime().time().hour(), 11);
    /// assert!(ts.offset().unwrap().is_utc());
    ///
    /// // A date alone is a timestamp at midnight.
    /// let ts = Timestamp::parse("1583-01-01")?;
    /// assert_eq!(ts.datetime().time().hour(), 0);
    /// assert_eq!(ts.offset(), None);
    /// # Ok::<(), isoparse::Error>(())
    /// ```
    pub fn parse<I: AsRef<[u8]>>(input: I) -> Result<Timestamp, Error> {
        iso8601::parse_timestamp(input.as_ref())
    }

    /// Creates a timestamp from an already validated datetime and
    /// optional offset.
    #[inline]
    pub fn new(datetime: DateTime, offset: Option<Offset>) -> Timestamp {
        Timestamp { datetime, offset }
    }

    /// Returns the civil datetime of this timestamp.
    #[inline]
    pub fn datetime(self) -> DateTime {
        self.datetime
    }

    /// Returns the date of this timestamp.
    #[inline]
    pub fn date(self) -> Date {
        self.datetime.date()
    }

    /// Returns the time of this timestamp.
    ///
    /// When the input had no time segment at all, this is midnight.
    #[inline]
    pub fn time(self) -> Time {
        self.datetime.time()
    }

    /// Returns the UTC offset of this timestamp, or `None` when the
    /// input carried no timezone designator.
    #[inline]
    pub fn offset(self) -> Option<Offset> {
        self.offset
    }
}

impl core::str::FromStr for Timestamp {
    type Err = Error;

    fn from_str(s: &str) -> Result<Timestamp, Error> {
        Timestamp::parse(s)
    }
}

impl core::fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{:?}", self.datetime)?;
        match self.offset {
            None => Ok(()),
            Some(Offset::Utc) => write!(f, "Z"),
            Some(Offset::Fixed(offset)) => write!(f, "{offset:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use super::*;

    #[test]
    fn from_str() {
        let ts: Timestamp = "2022-12-12T11:10:09Z".parse().unwrap();
        assert_eq!(ts, Timestamp::parse("2022-12-12T11:10:09Z").unwrap());
        assert_eq!(ts, Timestamp::parse(b"2022-12-12T11:10:09Z").unwrap());
    }

    #[test]
    fn debug_roundtrips_the_input() {
        for input in [
            "1583-01-01",
            "2022-12-12T11:10:09Z",
            "1902-08-02T12:30:24+01:15",
            "1902-08-02T12:30:24-01:15",
            "1970-01-01T16:00:00.000001",
        ] {
            let ts = Timestamp::parse(input).unwrap();
            let debug = format!("{ts:?}");
            match input {
                // A date-only input prints with its implied midnight.
                "1583-01-01" => {
                    assert_eq!(debug, "1583-01-01T00:00:00")
                }
                _ => assert_eq!(debug, input),
            }
        }
    }
}
