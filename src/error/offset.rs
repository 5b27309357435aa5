use crate::{error, util::escape};

/// Structured errors for the trailing timezone designator.
///
/// All of these fall into the "timezone format" category, except that
/// `InvalidOffset` only ever appears as context over a range error, which
/// takes precedence.
#[derive(Clone, Debug)]
pub(crate) enum Error {
    ExpectedTwoDigitHours,
    InvalidDesignator { byte: u8 },
    InvalidOffset,
    ParseHours,
    ParseMinutes,
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
        error::ErrorKind::Offset(err).into()
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::Error::*;

        match *self {
            ExpectedTwoDigitHours => f.write_str(
                "expected two digit hours after offset sign, \
                 but found end of input",
            ),
            InvalidDesignator { byte } => write!(
                f,
                "invalid timezone designator, expected `Z` or a signed \
                 numeric offset, but found `{byte}`",
                byte = escape::Byte(byte),
            ),
            InvalidOffset => f.write_str("parsed UTC offset is not valid"),
            ParseHours => f.write_str(
                "failed to parse two digit integer as offset hours",
            ),
            ParseMinutes => f.write_str(
                "failed to parse two digit integer as offset minutes",
            ),
        }
    }
}
