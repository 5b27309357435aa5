use crate::error::Error;

/// The timezone information carried by a timestamp.
///
/// The grammar distinguishes the literal `Z` designator from an explicit
/// numeric offset, and so does this type: `Offset::Utc` is the `Z`
/// sentinel, while `+00:00` parses to a zero [`FixedOffset`]. A
/// timestamp with no designator at all has no `Offset` (it is "naive"),
/// which is modeled with `Option<Offset>` on the parse result.
///
/// # Example
///
/// ```
/// use isoparse::{tz::Offset, Timestamp};
///
/// let ts: Timestamp = "2022-12-12T11:10:09Z".parse()?;
/// assert_eq!(ts.offset(), Some(Offset::Utc));
///
/// let ts: Timestamp = "1902-08-02T12:30:24+01:15".parse()?;
/// let Some(Offset::Fixed(offset)) = ts.offset() else { unreachable!() };
/// assert_eq!(offset.seconds(), 4500);
/// # Ok::<(), isoparse::Error>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Offset {
    /// The `Z` (Zulu) designator: the instant is in UTC.
    Utc,
    /// An explicit signed offset from UTC.
    Fixed(FixedOffset),
}

impl Offset {
    /// Returns true if this is the `Z` designator.
    #[inline]
    pub fn is_utc(self) -> bool {
        matches!(self, Offset::Utc)
    }

    /// Returns this offset as a number of seconds east of UTC.
    ///
    /// The `Z` designator is zero seconds.
    #[inline]
    pub fn seconds(self) -> i32 {
        match self {
            Offset::Utc => 0,
            Offset::Fixed(offset) => offset.seconds(),
        }
    }
}

/// A fixed signed offset from UTC, with one minute precision.
///
/// The sign applies to both the hour and minute components, so `-01:15`
/// has `hours() == -1` and `minutes() == -15`.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct FixedOffset {
    seconds: i32,
}

impl FixedOffset {
    /// Creates a fixed offset from a sign and unsigned hour and minute
    /// amounts.
    ///
    /// The magnitude must be strictly less than 24 hours: hours in
    /// `0..=23` and minutes in `0..=59`. Anything else is a range error.
    #[inline]
    pub(crate) fn from_hm(
        sign: i8,
        hours: i8,
        minutes: i8,
    ) -> Result<FixedOffset, Error> {
        if !(0 <= hours && hours <= 23) {
            return Err(Error::range("offset hours", hours, 0, 23));
        }
        if !(0 <= minutes && minutes <= 59) {
            return Err(Error::range("offset minutes", minutes, 0, 59));
        }
        let magnitude = i32::from(hours) * 3_600 + i32::from(minutes) * 60;
        Ok(FixedOffset { seconds: i32::from(sign.signum()) * magnitude })
    }

    /// Returns this offset as a number of seconds east of UTC.
    #[inline]
    pub fn seconds(self) -> i32 {
        self.seconds
    }

    /// Returns the signed hour component of this offset, in `-23..=23`.
    #[inline]
    pub fn hours(self) -> i8 {
        (self.seconds / 3_600) as i8
    }

    /// Returns the signed minute component of this offset, in
    /// `-59..=59`.
    #[inline]
    pub fn minutes(self) -> i8 {
        (self.seconds % 3_600 / 60) as i8
    }
}

impl core::fmt::Debug for FixedOffset {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let sign = if self.seconds < 0 { "-" } else { "+" };
        write!(
            f,
            "{sign}{:02}:{:02}",
            self.hours().unsigned_abs(),
            self.minutes().unsigned_abs(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_applies_to_both_components() {
        let offset = FixedOffset::from_hm(-1, 1, 15).unwrap();
        assert_eq!(offset.seconds(), -4500);
        assert_eq!(offset.hours(), -1);
        assert_eq!(offset.minutes(), -15);

        let offset = FixedOffset::from_hm(1, 1, 15).unwrap();
        assert_eq!(offset.seconds(), 4500);
        assert_eq!(offset.hours(), 1);
        assert_eq!(offset.minutes(), 15);
    }

    #[test]
    fn utc_is_distinguishable_from_zero() {
        let zero = Offset::Fixed(FixedOffset::from_hm(1, 0, 0).unwrap());
        assert_ne!(Offset::Utc, zero);
        assert_eq!(Offset::Utc.seconds(), zero.seconds());
    }

    #[test]
    fn out_of_range() {
        assert!(FixedOffset::from_hm(1, 24, 0).is_err());
        assert!(FixedOffset::from_hm(1, 99, 59).is_err());
        assert!(FixedOffset::from_hm(-1, 0, 60).is_err());
        assert!(FixedOffset::from_hm(1, 23, 59).is_ok());
    }
}
