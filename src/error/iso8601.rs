use crate::{error, util::escape};

/// Structured errors for the date and time portions of the timestamp
/// grammar, along with the trailing-input guard.
///
/// Each variant belongs to exactly one of the public failure categories,
/// which the `is_*` helpers below encode. The `Failed*` variants are
/// contexts layered on top of a lower level cause; the rest are root
/// causes.
#[derive(Clone, Debug)]
pub(crate) enum Error {
    DateShape,
    ExpectedDateSeparator { byte: u8 },
    ExpectedDateSeparatorFoundEndOfInput,
    ExpectedFourDigitYear,
    ExpectedFractionDigits,
    ExpectedNoDateSeparator,
    ExpectedNoTimeSeparator,
    ExpectedTimeDesignator { byte: u8 },
    ExpectedTimeSeparator,
    ExpectedTwoDigitDay,
    ExpectedTwoDigitHour,
    ExpectedTwoDigitMinute,
    ExpectedTwoDigitMonth,
    ExpectedTwoDigitSecond,
    FailedDayInDate,
    FailedFractionInTime,
    FailedHourInTime,
    FailedMinuteInTime,
    FailedMonthInDate,
    FailedSecondInTime,
    FailedSeparatorAfterMonth,
    FailedSeparatorAfterYear,
    FailedYearInDate,
    FractionTooLong,
    InvalidDate,
    InvalidTime,
    ParseDay,
    ParseHour,
    ParseMinute,
    ParseMonth,
    ParseSecond,
    ParseYear,
    TimeShape,
    TrailingCharacters { byte: u8 },
}

impl Error {
    /// Returns true for errors raised while extracting the mandatory
    /// leading date.
    pub(crate) fn is_date(&self) -> bool {
        use self::Error::*;

        matches!(
            *self,
            DateShape
                | ExpectedDateSeparator { .. }
                | ExpectedDateSeparatorFoundEndOfInput
                | ExpectedFourDigitYear
                | ExpectedNoDateSeparator
                | ExpectedTwoDigitDay
                | ExpectedTwoDigitMonth
                | FailedDayInDate
                | FailedMonthInDate
                | FailedSeparatorAfterMonth
                | FailedSeparatorAfterYear
                | FailedYearInDate
                | InvalidDate
                | ParseDay
                | ParseMonth
                | ParseYear
        )
    }

    /// Returns true only for the missing-`T` failure, which is its own
    /// category: it is detected before the rest of the time segment is
    /// considered at all.
    pub(crate) fn is_time_designator(&self) -> bool {
        matches!(*self, Error::ExpectedTimeDesignator { .. })
    }

    /// Returns true for errors raised while extracting the time segment
    /// that follows the `T` designator.
    pub(crate) fn is_time(&self) -> bool {
        use self::Error::*;

        matches!(
            *self,
            ExpectedFractionDigits
                | ExpectedNoTimeSeparator
                | ExpectedTimeSeparator
                | ExpectedTwoDigitHour
                | ExpectedTwoDigitMinute
                | ExpectedTwoDigitSecond
                | FailedFractionInTime
                | FailedHourInTime
                | FailedMinuteInTime
                | FailedSecondInTime
                | FractionTooLong
                | InvalidTime
                | ParseHour
                | ParseMinute
                | ParseSecond
                | TimeShape
        )
    }

    /// Returns true for the valid-timestamp-followed-by-garbage failure.
    pub(crate) fn is_trailing(&self) -> bool {
        matches!(*self, Error::TrailingCharacters { .. })
    }
}

impl error::IntoError for Error {
    fn into_error(self) -> error::Error {
        self.into()
    }
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Iso8601(err).into()
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::Error::*;

        match *self {
            DateShape => f.write_str(
                "the date of a timestamp must be formatted as \
                 YYYY-MM-DD or YYYYMMDD",
            ),
            ExpectedDateSeparator { byte } => write!(
                f,
                "expected `-` separator, but found `{byte}`",
                byte = escape::Byte(byte),
            ),
            ExpectedDateSeparatorFoundEndOfInput => {
                f.write_str("expected `-` separator, but found end of input")
            }
            ExpectedFourDigitYear => f.write_str(
                "expected four digit year, but found end of input",
            ),
            ExpectedFractionDigits => f.write_str(
                "found decimal after the smallest time component, but did \
                 not find any decimal digits after it",
            ),
            ExpectedNoDateSeparator => f.write_str(
                "expected no separator since none was found after the \
                 year, but found a `-` separator",
            ),
            ExpectedNoTimeSeparator => f.write_str(
                "expected no separator since none was found after the \
                 hour, but found a `:` separator",
            ),
            ExpectedTimeDesignator { byte } => write!(
                f,
                "the date and time of a timestamp must be separated by \
                 a `T`, but found `{byte}`",
                byte = escape::Byte(byte),
            ),
            ExpectedTimeSeparator => f.write_str(
                "expected `:` separator before next time component, \
                 but found digits",
            ),
            ExpectedTwoDigitDay => {
                f.write_str("expected two digit day, but found end of input")
            }
            ExpectedTwoDigitHour => {
                f.write_str("expected two digit hour, but found end of input")
            }
            ExpectedTwoDigitMinute => f.write_str(
                "expected two digit minute, but found end of input",
            ),
            ExpectedTwoDigitMonth => {
                f.write_str("expected two digit month, but found end of input")
            }
            ExpectedTwoDigitSecond => f.write_str(
                "expected two digit second, but found end of input",
            ),
            FailedDayInDate => f.write_str("failed to parse day in date"),
            FailedFractionInTime => {
                f.write_str("failed to parse fractional component in time")
            }
            FailedHourInTime => f.write_str("failed to parse hour in time"),
            FailedMinuteInTime => {
                f.write_str("failed to parse minute in time")
            }
            FailedMonthInDate => f.write_str("failed to parse month in date"),
            FailedSecondInTime => {
                f.write_str("failed to parse second in time")
            }
            FailedSeparatorAfterMonth => {
                f.write_str("failed to parse separator after month")
            }
            FailedSeparatorAfterYear => {
                f.write_str("failed to parse separator after year")
            }
            FailedYearInDate => f.write_str("failed to parse year in date"),
            FractionTooLong => f.write_str(
                "fractional component must have at most 6 digits \
                 (microsecond precision)",
            ),
            InvalidDate => f.write_str("parsed date is not valid"),
            InvalidTime => f.write_str("parsed time is not valid"),
            ParseDay => {
                f.write_str("failed to parse two digit integer as day")
            }
            ParseHour => {
                f.write_str("failed to parse two digit integer as hour")
            }
            ParseMinute => {
                f.write_str("failed to parse two digit integer as minute")
            }
            ParseMonth => {
                f.write_str("failed to parse two digit integer as month")
            }
            ParseSecond => {
                f.write_str("failed to parse two digit integer as second")
            }
            ParseYear => {
                f.write_str("failed to parse four digit integer as year")
            }
            TimeShape => f.write_str(
                "the time of a timestamp must be formatted as \
                 HH[[:]MM[[:]SS]] with an optional fraction",
            ),
            TrailingCharacters { byte } => write!(
                f,
                "a valid timestamp was followed by unparseable characters \
                 beginning with `{byte}`",
                byte = escape::Byte(byte),
            ),
        }
    }
}
