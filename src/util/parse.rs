/*!
Helpers for parsing integers out of byte slices.

Everything here operates on `&[u8]` so that a parser can consume a prefix
of its input and hand the rest on without re-validating UTF-8 at every
step.
*/

use crate::error::{util::ParseIntError, Error};

/// Parses an `i64` from the beginning to the end of the given slice of
/// ASCII digits.
///
/// Unlike `str::parse`, this accepts digits only: no sign, no whitespace
/// and no empty input. Every byte in `bytes` must be in `0-9`.
///
/// The digit groups in the timestamp grammar are at most 6 bytes long, so
/// overflow is impossible here, but we check for it anyway rather than
/// rely on callers upholding that.
pub(crate) fn i64(bytes: &[u8]) -> Result<i64, Error> {
    if bytes.is_empty() {
        return Err(Error::from(ParseIntError::Empty));
    }
    let mut n: i64 = 0;
    for &byte in bytes {
        let digit = match byte.checked_sub(b'0') {
            None => return Err(Error::from(ParseIntError::InvalidDigit)),
            Some(digit) if digit > 9 => {
                return Err(Error::from(ParseIntError::InvalidDigit))
            }
            Some(digit) => i64::from(digit),
        };
        n = n
            .checked_mul(10)
            .and_then(|n| n.checked_add(digit))
            .ok_or(Error::from(ParseIntError::Overflow))?;
    }
    Ok(n)
}

/// Splits the given input into a prefix of length `at` and the remainder.
///
/// Returns `None` when the input is shorter than `at`.
pub(crate) fn split(input: &[u8], at: usize) -> Option<(&[u8], &[u8])> {
    if at > input.len() {
        None
    } else {
        Some(input.split_at(at))
    }
}

/// Returns a closure that, given a suffix of `whole`, returns the prefix
/// of `whole` preceding that suffix.
///
/// This is how parsers recover "the bytes I consumed" without carrying an
/// explicit offset around: thread the remainder through and slice once at
/// the end. The closure must only ever be called with a true suffix of
/// `whole`, which every parser in this crate maintains by construction.
pub(crate) fn slicer<'i>(
    whole: &'i [u8],
) -> impl Fn(&'i [u8]) -> &'i [u8] + 'i {
    move |remainder| {
        let consumed = whole.len() - remainder.len();
        &whole[..consumed]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_digits() {
        assert_eq!(i64(b"0").unwrap(), 0);
        assert_eq!(i64(b"09").unwrap(), 9);
        assert_eq!(i64(b"2024").unwrap(), 2024);
        assert_eq!(i64(b"999999").unwrap(), 999_999);

        assert!(i64(b"").is_err());
        assert!(i64(b"-1").is_err());
        assert!(i64(b"+1").is_err());
        assert!(i64(b"12a").is_err());
        assert!(i64(b" 12").is_err());
    }

    #[test]
    fn split_prefix() {
        assert_eq!(split(b"2024-", 4).unwrap(), (&b"2024"[..], &b"-"[..]));
        assert_eq!(split(b"20", 2).unwrap(), (&b"20"[..], &b""[..]));
        assert_eq!(split(b"2", 2), None);
    }

    #[test]
    fn slice_consumed() {
        let input = &b"2024-06-01T00"[..];
        let mkslice = slicer(input);
        assert_eq!(mkslice(&input[10..]), b"2024-06-01");
        assert_eq!(mkslice(input), b"");
        assert_eq!(mkslice(&input[input.len()..]), input);
    }
}
