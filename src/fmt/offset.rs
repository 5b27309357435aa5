/*!
A parser for the trailing timezone designator of a timestamp.

The designator is either the literal `Z` or a signed numeric offset of
the form `{+-}HH[[:]MM]`. An empty remainder is fine too, since the
designator as a whole is optional.
*/

use crate::{
    error::{offset, Error, ErrorContext},
    fmt::Parsed,
    tz::{FixedOffset, Offset},
    util::parse,
};

/// A parsed UTC offset designator, before range validation.
#[derive(Debug)]
pub(crate) struct ParsedOffset {
    kind: ParsedOffsetKind,
}

#[derive(Debug)]
enum ParsedOffsetKind {
    Zulu,
    Numeric { sign: i8, hours: i8, minutes: i8 },
}

impl ParsedOffset {
    /// Validates the parsed fields and converts them to an offset.
    pub(crate) fn to_offset(&self) -> Result<Offset, Error> {
        match self.kind {
            ParsedOffsetKind::Zulu => Ok(Offset::Utc),
            ParsedOffsetKind::Numeric { sign, hours, minutes } => {
                FixedOffset::from_hm(sign, hours, minutes)
                    .map(Offset::Fixed)
                    .context(offset::Error::InvalidOffset)
            }
        }
    }
}

/// A parser for the timezone designator.
#[derive(Debug)]
pub(crate) struct Parser {
    /// There are no configuration options for this parser.
    _priv: (),
}

impl Parser {
    /// Create a new timezone designator parser with the default
    /// configuration.
    pub(crate) const fn new() -> Parser {
        Parser { _priv: () }
    }

    // Offset :::
    //   Z
    //   Sign Hour
    //   Sign Hour : Minute
    //   Sign Hour Minute
    //
    // Sign ::: one of
    //   + -

    /// Parses an optional timezone designator from the given input.
    ///
    /// If the input is empty, no designator is present, which is not an
    /// error. If the input is non-empty then it must begin with a
    /// designator, although input may be left over after it. In
    /// particular, a `:` not followed by two digits is not consumed, so
    /// that `+01:` parses as a one hour offset with `:` remaining.
    pub(crate) fn parse_optional<'i>(
        &self,
        input: &'i [u8],
    ) -> Result<Parsed<'i, Option<ParsedOffset>>, Error> {
        let Some(&first) = input.first() else {
            return Ok(Parsed { value: None, input });
        };
        let Parsed { value, input } = match first {
            b'Z' => Parsed {
                value: ParsedOffset { kind: ParsedOffsetKind::Zulu },
                input: &input[1..],
            },
            b'+' | b'-' => self.parse_numeric(input)?,
            _ => {
                return Err(Error::from(offset::Error::InvalidDesignator {
                    byte: first,
                }))
            }
        };
        Ok(Parsed { value: Some(value), input })
    }

    /// Parses a numeric offset. The input is guaranteed by the caller to
    /// begin with a sign.
    fn parse_numeric<'i>(
        &self,
        input: &'i [u8],
    ) -> Result<Parsed<'i, ParsedOffset>, Error> {
        let sign: i8 = if input[0] == b'-' { -1 } else { 1 };
        let input = &input[1..];

        let (hours, input) = parse::split(input, 2)
            .ok_or(offset::Error::ExpectedTwoDigitHours)?;
        let hours = parse::i64(hours).context(offset::Error::ParseHours)?;

        // Minutes are only part of the designator when two digits
        // actually follow, optionally preceded by a `:`. Anything else,
        // including a bare `:`, is left for the trailing-input check.
        let (minutes, input) = if let Some(tail) = input.strip_prefix(b":") {
            match two_digits(tail) {
                Some((digits, tail)) => (Some(digits), tail),
                None => (None, input),
            }
        } else {
            match two_digits(input) {
                Some((digits, tail)) => (Some(digits), tail),
                None => (None, input),
            }
        };
        let minutes = match minutes {
            None => 0,
            Some(digits) => {
                parse::i64(digits).context(offset::Error::ParseMinutes)?
            }
        };

        let kind = ParsedOffsetKind::Numeric {
            sign,
            hours: hours as i8,
            minutes: minutes as i8,
        };
        Ok(Parsed { value: ParsedOffset { kind }, input })
    }
}

/// Splits off a prefix of exactly two ASCII digits, if there is one.
fn two_digits(input: &[u8]) -> Option<(&[u8], &[u8])> {
    let (digits, rest) = parse::split(input, 2)?;
    if !digits.iter().all(u8::is_ascii_digit) {
        return None;
    }
    Some((digits, rest))
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    fn parse(input: &str) -> Result<Parsed<'_, Option<ParsedOffset>>, Error> {
        Parser::new().parse_optional(input.as_bytes())
    }

    fn offset(input: &str) -> Offset {
        let parsed = parse(input).unwrap().value.unwrap();
        parsed.to_offset().unwrap()
    }

    #[test]
    fn zulu() {
        assert_eq!(offset("Z"), Offset::Utc);
        assert!(offset("Z").is_utc());
    }

    #[test]
    fn numeric() {
        assert_eq!(offset("+01:15").seconds(), 4500);
        assert_eq!(offset("+0115").seconds(), 4500);
        assert_eq!(offset("-01:15").seconds(), -4500);
        assert_eq!(offset("+23").seconds(), 23 * 3600);
        assert_eq!(offset("-00:00").seconds(), 0);
        assert_ne!(offset("-00:00"), Offset::Utc);
    }

    #[test]
    fn empty_is_no_designator() {
        let parsed = parse("").unwrap();
        assert!(parsed.value.is_none());
        assert!(parsed.input.is_empty());
    }

    #[test]
    fn dangling_colon_is_left_over() {
        let parsed = parse("+01:").unwrap();
        let value = parsed.value.unwrap();
        assert_eq!(value.to_offset().unwrap().seconds(), 3600);
        assert_eq!(parsed.input, b":");
    }

    #[test]
    fn one_minute_digit_is_left_over() {
        let parsed = parse("+01:3").unwrap();
        assert_eq!(parsed.input, b":3");

        let parsed = parse("+013").unwrap();
        assert_eq!(parsed.input, b"3");
    }

    #[test]
    fn unrecognized_designator() {
        let err = parse("X").unwrap_err();
        assert!(err.is_timezone_format());
        assert_eq!(
            err.to_string(),
            "invalid timezone designator, expected `Z` or a signed \
             numeric offset, but found `X`",
        );
    }

    #[test]
    fn truncated_numeric() {
        assert!(parse("+1").unwrap_err().is_timezone_format());
        assert!(parse("-").unwrap_err().is_timezone_format());
        assert!(parse("+ab").unwrap_err().is_timezone_format());
    }

    #[test]
    fn out_of_range_is_range_error() {
        let value = parse("+24:00").unwrap().value.unwrap();
        let err = value.to_offset().unwrap_err();
        assert!(err.is_range());
        assert!(!err.is_timezone_format());
    }
}
