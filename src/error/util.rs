use crate::error;

/// An error from parsing a group of ASCII digits into an integer.
///
/// These only ever appear as the root cause underneath a context naming
/// the component that was being parsed.
#[derive(Clone, Debug)]
pub(crate) enum ParseIntError {
    Empty,
    InvalidDigit,
    Overflow,
}

impl error::IntoError for ParseIntError {
    fn into_error(self) -> error::Error {
        self.into()
    }
}

impl From<ParseIntError> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: ParseIntError) -> error::Error {
        error::ErrorKind::ParseInt(err).into()
    }
}

impl core::fmt::Display for ParseIntError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ParseIntError::*;

        match *self {
            Empty => f.write_str("invalid number, no digits found"),
            InvalidDigit => {
                f.write_str("invalid digit, expected a digit in 0-9")
            }
            Overflow => f.write_str("number is too big"),
        }
    }
}
