/*!
A parser for a restricted profile of the ISO 8601 calendar timestamp
format.

The overall grammar is `Date [TimeDesignator Time] [Offset]`, where the
designator is a literal uppercase `T`. The date and time each come in an
expanded form with separators and a truncated form without, and the two
forms may not be mixed within one segment. Parsing is structural first:
digit groups are extracted left to right and only checked against
calendar and clock bounds at the very end, once the whole input has been
consumed.
*/

use crate::{
    civil::{Date, DateTime, Time},
    error::{iso8601, Error, ErrorContext},
    fmt::{
        fraction::{Fraction, Unit},
        offset,
        Parsed,
    },
    timestamp::Timestamp,
    util::parse,
};

/// The default timestamp parser used by [`Timestamp::parse`].
static DEFAULT_TIMESTAMP_PARSER: TimestampParser = TimestampParser::new();

/// Parses a timestamp from the entirety of the given input.
pub(crate) fn parse_timestamp(input: &[u8]) -> Result<Timestamp, Error> {
    DEFAULT_TIMESTAMP_PARSER.parse(input)
}

/// A parsed timestamp, before range validation.
///
/// All digit groups have been extracted but nothing has been checked
/// against calendar or clock bounds yet. Validation happens all at once
/// in [`ParsedTimestamp::to_timestamp`], after the trailing-input check,
/// so that a structural error anywhere in the input always wins over a
/// range error.
#[derive(Debug)]
pub(crate) struct ParsedTimestamp {
    /// The mandatory date.
    date: ParsedDate,
    /// The optional time.
    time: Option<ParsedTime>,
    /// The optional timezone designator.
    offset: Option<offset::ParsedOffset>,
}

impl ParsedTimestamp {
    /// Validates every extracted field and assembles the final value.
    ///
    /// A timestamp without a time is at midnight, and a timestamp
    /// without a designator is naive.
    fn to_timestamp(&self) -> Result<Timestamp, Error> {
        let date = self.date.to_date()?;
        let time = match self.time {
            None => Time::midnight(),
            Some(ref time) => time.to_time()?,
        };
        let offset = match self.offset {
            None => None,
            Some(ref offset) => Some(offset.to_offset()?),
        };
        Ok(Timestamp::new(DateTime::from_parts(date, time), offset))
    }
}

/// A parsed date, before range validation.
#[derive(Debug)]
struct ParsedDate {
    year: i16,
    month: i8,
    day: i8,
}

impl ParsedDate {
    fn to_date(&self) -> Result<Date, Error> {
        Date::new(self.year, self.month, self.day)
            .context(iso8601::Error::InvalidDate)
    }
}

/// A parsed time, before range validation.
///
/// Components absent from the input are `None` here and become zero in
/// the final value, except when a fraction was attached to the smallest
/// present component, in which case [`ParsedTime::new`] has already
/// expanded it into the components below it.
#[derive(Debug)]
struct ParsedTime {
    hour: i8,
    minute: Option<i8>,
    second: Option<i8>,
    microsecond: Option<i32>,
}

impl ParsedTime {
    fn new(
        hour: i8,
        minute: Option<i8>,
        second: Option<i8>,
        fraction: Option<Fraction>,
    ) -> ParsedTime {
        let mut time =
            ParsedTime { hour, minute, second, microsecond: None };
        let Some(fraction) = fraction else { return time };
        // The fraction only ever attaches to the smallest component
        // present, so everything it expands into is currently absent.
        let sub = fraction.to_subunits();
        match fraction.unit() {
            Unit::Hour => {
                time.minute = Some(sub.minute);
                time.second = Some(sub.second);
                time.microsecond = Some(sub.microsecond);
            }
            Unit::Minute => {
                time.second = Some(sub.second);
                time.microsecond = Some(sub.microsecond);
            }
            Unit::Second | Unit::Microsecond => {
                time.microsecond = Some(sub.microsecond);
            }
        }
        time
    }

    fn to_time(&self) -> Result<Time, Error> {
        Time::new(
            self.hour,
            self.minute.unwrap_or(0),
            self.second.unwrap_or(0),
            self.microsecond.unwrap_or(0),
        )
        .context(iso8601::Error::InvalidTime)
    }
}

/// A parser for the timestamp grammar.
#[derive(Debug)]
pub(crate) struct TimestampParser {
    /// There are no configuration options for this parser.
    _priv: (),
}

impl TimestampParser {
    /// Create a new timestamp parser with the default configuration.
    pub(crate) const fn new() -> TimestampParser {
        TimestampParser { _priv: () }
    }

    // Timestamp :::
    //   Date
    //   Date TimeDesignator TimeSpec
    //   Date TimeDesignator TimeSpec Offset

    /// Parses a timestamp from the entirety of the given input.
    ///
    /// Everything must be consumed: a valid timestamp followed by
    /// anything at all is an error.
    pub(crate) fn parse(&self, input: &[u8]) -> Result<Timestamp, Error> {
        trace!(
            "parsing timestamp from {input:?}",
            input = crate::util::escape::Bytes(input),
        );
        let Parsed { value: parsed, input } =
            self.parse_timestamp_spec(input)?;
        if let Some((&byte, _)) = input.split_first() {
            return Err(Error::from(iso8601::Error::TrailingCharacters {
                byte,
            }));
        }
        parsed.to_timestamp()
    }

    fn parse_timestamp_spec<'i>(
        &self,
        input: &'i [u8],
    ) -> Result<Parsed<'i, ParsedTimestamp>, Error> {
        let Parsed { value: date, input } =
            self.parse_date_spec(input).context(iso8601::Error::DateShape)?;
        let Parsed { value: time, input } = self.parse_time_spec(input)?;
        let Parsed { value: offset, input } =
            offset::Parser::new().parse_optional(input)?;

        let value = ParsedTimestamp { date, time, offset };
        Ok(Parsed { value, input })
    }

    // Date :::
    //   DateYear - DateMonth - DateDay
    //   DateYear DateMonth DateDay

    fn parse_date_spec<'i>(
        &self,
        input: &'i [u8],
    ) -> Result<Parsed<'i, ParsedDate>, Error> {
        // Parse year component.
        let Parsed { value: year, input } = self
            .parse_year(input)
            .context(iso8601::Error::FailedYearInDate)?;
        let extended = input.starts_with(b"-");

        // Parse optional separator.
        let Parsed { input, .. } = self
            .parse_date_separator(input, extended)
            .context(iso8601::Error::FailedSeparatorAfterYear)?;

        // Parse month component.
        let Parsed { value: month, input } = self
            .parse_month(input)
            .context(iso8601::Error::FailedMonthInDate)?;

        // Parse optional separator.
        let Parsed { input, .. } = self
            .parse_date_separator(input, extended)
            .context(iso8601::Error::FailedSeparatorAfterMonth)?;

        // Parse day component.
        let Parsed { value: day, input } = self
            .parse_day(input)
            .context(iso8601::Error::FailedDayInDate)?;

        let value = ParsedDate { year, month, day };
        Ok(Parsed { value, input })
    }

    // TimeSpec :::
    //   TimeHour
    //   TimeHour : TimeMinute
    //   TimeHour TimeMinute
    //   TimeHour : TimeMinute : TimeSecond
    //   TimeHour TimeMinute TimeSecond
    //
    // with an optional `. Fraction` after the smallest component present.

    fn parse_time_spec<'i>(
        &self,
        input: &'i [u8],
    ) -> Result<Parsed<'i, Option<ParsedTime>>, Error> {
        // A date-only timestamp is fine.
        let Some((&first, tail)) = input.split_first() else {
            return Ok(Parsed { value: None, input });
        };
        // The designator is case sensitive and checked before anything
        // else in the segment, so a lowercase `t` or a space is reported
        // as a bad designator even when a perfectly good time follows it.
        if first != b'T' {
            return Err(Error::from(iso8601::Error::ExpectedTimeDesignator {
                byte: first,
            }));
        }
        let Parsed { value: time, input } =
            self.parse_time_body(tail).context(iso8601::Error::TimeShape)?;
        Ok(Parsed { value: Some(time), input })
    }

    fn parse_time_body<'i>(
        &self,
        input: &'i [u8],
    ) -> Result<Parsed<'i, ParsedTime>, Error> {
        let Parsed { value: hour, input } = self
            .parse_hour(input)
            .context(iso8601::Error::FailedHourInTime)?;
        let extended = input.starts_with(b":");

        let Parsed { value: has_minute, input } =
            self.parse_time_separator(input, extended)?;
        if !has_minute {
            let Parsed { value: fraction, input } = self
                .parse_fraction(input, Unit::Hour)
                .context(iso8601::Error::FailedFractionInTime)?;
            let value = ParsedTime::new(hour, None, None, fraction);
            return Ok(Parsed { value, input });
        }

        let Parsed { value: minute, input } = self
            .parse_minute(input)
            .context(iso8601::Error::FailedMinuteInTime)?;

        let Parsed { value: has_second, input } =
            self.parse_time_separator(input, extended)?;
        if !has_second {
            let Parsed { value: fraction, input } = self
                .parse_fraction(input, Unit::Minute)
                .context(iso8601::Error::FailedFractionInTime)?;
            let value = ParsedTime::new(hour, Some(minute), None, fraction);
            return Ok(Parsed { value, input });
        }

        let Parsed { value: second, input } = self
            .parse_second(input)
            .context(iso8601::Error::FailedSecondInTime)?;
        let Parsed { value: fraction, input } = self
            .parse_fraction(input, Unit::Second)
            .context(iso8601::Error::FailedFractionInTime)?;
        let value =
            ParsedTime::new(hour, Some(minute), Some(second), fraction);
        Ok(Parsed { value, input })
    }

    // DateYear :::
    //   DecimalDigit DecimalDigit DecimalDigit DecimalDigit

    fn parse_year<'i>(
        &self,
        input: &'i [u8],
    ) -> Result<Parsed<'i, i16>, Error> {
        let (year, input) = parse::split(input, 4)
            .ok_or(iso8601::Error::ExpectedFourDigitYear)?;
        let year =
            parse::i64(year).context(iso8601::Error::ParseYear)?;
        Ok(Parsed { value: year as i16, input })
    }

    // DateMonth :::
    //   DecimalDigit DecimalDigit

    fn parse_month<'i>(
        &self,
        input: &'i [u8],
    ) -> Result<Parsed<'i, i8>, Error> {
        let (month, input) = parse::split(input, 2)
            .ok_or(iso8601::Error::ExpectedTwoDigitMonth)?;
        let month =
            parse::i64(month).context(iso8601::Error::ParseMonth)?;
        Ok(Parsed { value: month as i8, input })
    }

    // DateDay :::
    //   DecimalDigit DecimalDigit

    fn parse_day<'i>(&self, input: &'i [u8]) -> Result<Parsed<'i, i8>, Error> {
        let (day, input) = parse::split(input, 2)
            .ok_or(iso8601::Error::ExpectedTwoDigitDay)?;
        let day = parse::i64(day).context(iso8601::Error::ParseDay)?;
        Ok(Parsed { value: day as i8, input })
    }

    // TimeHour :::
    //   DecimalDigit DecimalDigit

    fn parse_hour<'i>(
        &self,
        input: &'i [u8],
    ) -> Result<Parsed<'i, i8>, Error> {
        let (hour, input) = parse::split(input, 2)
            .ok_or(iso8601::Error::ExpectedTwoDigitHour)?;
        let hour = parse::i64(hour).context(iso8601::Error::ParseHour)?;
        Ok(Parsed { value: hour as i8, input })
    }

    // TimeMinute :::
    //   DecimalDigit DecimalDigit

    fn parse_minute<'i>(
        &self,
        input: &'i [u8],
    ) -> Result<Parsed<'i, i8>, Error> {
        let (minute, input) = parse::split(input, 2)
            .ok_or(iso8601::Error::ExpectedTwoDigitMinute)?;
        let minute =
            parse::i64(minute).context(iso8601::Error::ParseMinute)?;
        Ok(Parsed { value: minute as i8, input })
    }

    // TimeSecond :::
    //   DecimalDigit DecimalDigit

    fn parse_second<'i>(
        &self,
        input: &'i [u8],
    ) -> Result<Parsed<'i, i8>, Error> {
        let (second, input) = parse::split(input, 2)
            .ok_or(iso8601::Error::ExpectedTwoDigitSecond)?;
        let second =
            parse::i64(second).context(iso8601::Error::ParseSecond)?;
        Ok(Parsed { value: second as i8, input })
    }

    /// Parses the separator between date components.
    ///
    /// The form of the date is fixed by what follows its year: when in
    /// extended mode a `-` is required here, and when in basic mode a
    /// `-` is forbidden, since the two forms may not be mixed within one
    /// segment.
    fn parse_date_separator<'i>(
        &self,
        input: &'i [u8],
        extended: bool,
    ) -> Result<Parsed<'i, ()>, Error> {
        if !extended {
            // If we see a '-' when not in extended mode, then report a
            // mixed form rather than, e.g., "-1 isn't a valid day."
            if input.starts_with(b"-") {
                return Err(Error::from(
                    iso8601::Error::ExpectedNoDateSeparator,
                ));
            }
            return Ok(Parsed { value: (), input });
        }
        let (&first, input) = input
            .split_first()
            .ok_or(iso8601::Error::ExpectedDateSeparatorFoundEndOfInput)?;
        if first != b'-' {
            return Err(Error::from(iso8601::Error::ExpectedDateSeparator {
                byte: first,
            }));
        }
        Ok(Parsed { value: (), input })
    }

    /// Parses the separator between time components.
    ///
    /// When `true` is returned, another component must follow. When
    /// `false` is returned, the time segment has ended and the remaining
    /// input begins with a fraction, a timezone designator or garbage.
    ///
    /// As with dates, the form is fixed by what follows the hour: in
    /// extended mode a run of digits where a `:` belongs is an error,
    /// and in basic mode a `:` is an error.
    fn parse_time_separator<'i>(
        &self,
        input: &'i [u8],
        extended: bool,
    ) -> Result<Parsed<'i, bool>, Error> {
        if !extended {
            if input.starts_with(b":") {
                return Err(Error::from(
                    iso8601::Error::ExpectedNoTimeSeparator,
                ));
            }
            let expected = parse::split(input, 2).map_or(
                false,
                |(prefix, _)| prefix.iter().all(u8::is_ascii_digit),
            );
            return Ok(Parsed { value: expected, input });
        }
        if let Some(input) = input.strip_prefix(b":") {
            return Ok(Parsed { value: true, input });
        }
        // Two digits here would be switching to the truncated form in
        // the middle of the segment.
        let mixed = parse::split(input, 2)
            .map_or(false, |(prefix, _)| {
                prefix.iter().all(u8::is_ascii_digit)
            });
        if mixed {
            return Err(Error::from(iso8601::Error::ExpectedTimeSeparator));
        }
        Ok(Parsed { value: false, input })
    }

    // Fraction :::
    //   DecimalDigit{1,6}

    /// Parses an optional fraction of the smallest time component
    /// present.
    ///
    /// When the input does not begin with a `.`, nothing is consumed.
    /// Otherwise one to six decimal digits must follow, which become the
    /// numerator of an exact fraction with a power of ten denominator.
    fn parse_fraction<'i>(
        &self,
        input: &'i [u8],
        unit: Unit,
    ) -> Result<Parsed<'i, Option<Fraction>>, Error> {
        let Some(tail) = input.strip_prefix(b".") else {
            return Ok(Parsed { value: None, input });
        };
        let mkdigits = parse::slicer(tail);
        let mut input = tail;
        while mkdigits(input).len() < 6
            && input.first().map_or(false, u8::is_ascii_digit)
        {
            input = &input[1..];
        }
        let digits = mkdigits(input);
        if digits.is_empty() {
            return Err(Error::from(iso8601::Error::ExpectedFractionDigits));
        }
        if input.first().map_or(false, u8::is_ascii_digit) {
            return Err(Error::from(iso8601::Error::FractionTooLong));
        }
        let numerator = parse::i64(digits)?;
        let denominator = 10i64.pow(digits.len() as u32);
        let value = Some(Fraction::new(numerator, denominator, unit));
        Ok(Parsed { value, input })
    }
}

#[cfg(test)]
mod tests {
    use alloc::{format, string::ToString, vec::Vec};

    use crate::tz::Offset;

    use super::*;

    fn parse(input: &str) -> Result<Timestamp, Error> {
        parse_timestamp(input.as_bytes())
    }

    fn ok(input: &str) -> Timestamp {
        match parse(input) {
            Ok(ts) => ts,
            Err(err) => panic!("failed to parse {input:?}: {err}"),
        }
    }

    #[test]
    fn full_timestamp_with_offset() {
        let ts = ok("1902-08-02T12:30:24+01:15");
        assert_eq!(ts.datetime().date(), Date::constant(1902, 8, 2));
        assert_eq!(ts.datetime().time(), Time::constant(12, 30, 24, 0));
        assert_eq!(ts.offset().unwrap().seconds(), 4500);

        let ts = ok("2022-12-12T11:10:09Z");
        assert_eq!(ts.datetime().time(), Time::constant(11, 10, 9, 0));
        assert_eq!(ts.offset(), Some(Offset::Utc));
    }

    #[test]
    fn date_only_is_midnight_and_naive() {
        let ts = ok("1583-01-01");
        assert_eq!(ts.datetime().date(), Date::constant(1583, 1, 1));
        assert_eq!(ts.datetime().time(), Time::midnight());
        assert_eq!(ts.offset(), None);
    }

    #[test]
    fn truncated_forms() {
        assert_eq!(
            ok("19830201").datetime().date(),
            Date::constant(1983, 2, 1),
        );
        assert_eq!(
            ok("19830201T1230").datetime().time(),
            Time::constant(12, 30, 0, 0),
        );
        assert_eq!(
            ok("19830201T123015").datetime().time(),
            Time::constant(12, 30, 15, 0),
        );
        assert_eq!(
            ok("1983-02-01T12").datetime().time(),
            Time::constant(12, 0, 0, 0),
        );
    }

    #[test]
    fn missing_components_default_to_zero() {
        let ts = ok("2024-06-01T12");
        assert_eq!(ts.datetime().time(), Time::constant(12, 0, 0, 0));

        let ts = ok("2024-06-01T12:30");
        assert_eq!(ts.datetime().time(), Time::constant(12, 30, 0, 0));
    }

    #[test]
    fn fraction_of_second() {
        let ts = ok("2024-06-01T12:30:24.123456");
        assert_eq!(ts.datetime().time(), Time::constant(12, 30, 24, 123_456));

        // Fewer than six digits scale up, they do not left-pad.
        let ts = ok("2024-06-01T12:30:24.5");
        assert_eq!(ts.datetime().time(), Time::constant(12, 30, 24, 500_000));
    }

    #[test]
    fn fraction_of_minute() {
        let ts = ok("2024-06-01T12:30.5");
        assert_eq!(ts.datetime().time(), Time::constant(12, 30, 30, 0));

        let ts = ok("2024-06-01T1230.5");
        assert_eq!(ts.datetime().time(), Time::constant(12, 30, 30, 0));
    }

    // One microsecond worth of an hour comes out exact, not as the
    // 3599.9999... that floating point arithmetic would produce.
    #[test]
    fn fraction_of_hour_is_exact() {
        let ts = ok("1970-01-01T16.000001");
        assert_eq!(ts.datetime().time(), Time::constant(16, 0, 0, 3600));

        let ts = ok("1970-01-01T16.5");
        assert_eq!(ts.datetime().time(), Time::constant(16, 30, 0, 0));

        let ts = ok("1970-01-01T16.999999");
        assert_eq!(ts.datetime().time(), Time::constant(16, 59, 59, 996_400));
    }

    #[test]
    fn err_date_mixed_separators() {
        insta::assert_snapshot!(
            parse("2019-1012").unwrap_err(),
            @"the date of a timestamp must be formatted as YYYY-MM-DD or YYYYMMDD: failed to parse separator after month: expected `-` separator, but found `1`"
        );
        insta::assert_snapshot!(
            parse("201910-12").unwrap_err(),
            @"the date of a timestamp must be formatted as YYYY-MM-DD or YYYYMMDD: failed to parse separator after month: expected no separator since none was found after the year, but found a `-` separator"
        );
        assert!(parse("2019-1012").unwrap_err().is_date_format());
        assert!(parse("201910-12").unwrap_err().is_date_format());
    }

    #[test]
    fn err_date_malformed() {
        insta::assert_snapshot!(
            parse("").unwrap_err(),
            @"the date of a timestamp must be formatted as YYYY-MM-DD or YYYYMMDD: failed to parse year in date: expected four digit year, but found end of input"
        );
        insta::assert_snapshot!(
            parse("nonsense").unwrap_err(),
            @"the date of a timestamp must be formatted as YYYY-MM-DD or YYYYMMDD: failed to parse year in date: failed to parse four digit integer as year: invalid digit, expected a digit in 0-9"
        );
        insta::assert_snapshot!(
            parse("2024-06").unwrap_err(),
            @"the date of a timestamp must be formatted as YYYY-MM-DD or YYYYMMDD: failed to parse separator after month: expected `-` separator, but found end of input"
        );
        assert!(parse("").unwrap_err().is_date_format());
        assert!(parse("nonsense").unwrap_err().is_date_format());
        assert!(parse("2024-06").unwrap_err().is_date_format());
    }

    #[test]
    fn err_time_designator() {
        insta::assert_snapshot!(
            parse("1965-02-01t19:09:13").unwrap_err(),
            @"the date and time of a timestamp must be separated by a `T`, but found `t`"
        );
        insta::assert_snapshot!(
            parse("2019-10-01 12:23:34").unwrap_err(),
            @"the date and time of a timestamp must be separated by a `T`, but found ` `"
        );
        assert!(parse("1965-02-01t19:09:13").unwrap_err().is_time_separator());
        assert!(parse("2019-10-01 12:23:34").unwrap_err().is_time_separator());
        // The designator check wins even when the rest is garbage.
        assert!(parse("2019-10-01 garbage").unwrap_err().is_time_separator());
    }

    #[test]
    fn err_time_mixed_separators() {
        insta::assert_snapshot!(
            parse("1677-09-03T12:3105").unwrap_err(),
            @"the time of a timestamp must be formatted as HH[[:]MM[[:]SS]] with an optional fraction: expected `:` separator before next time component, but found digits"
        );
        insta::assert_snapshot!(
            parse("1677-09-03T1231:05").unwrap_err(),
            @"the time of a timestamp must be formatted as HH[[:]MM[[:]SS]] with an optional fraction: expected no separator since none was found after the hour, but found a `:` separator"
        );
        assert!(parse("1677-09-03T12:3105").unwrap_err().is_time_format());
        assert!(parse("1677-09-03T1231:05").unwrap_err().is_time_format());
    }

    #[test]
    fn err_time_malformed() {
        insta::assert_snapshot!(
            parse("2024-06-01T").unwrap_err(),
            @"the time of a timestamp must be formatted as HH[[:]MM[[:]SS]] with an optional fraction: failed to parse hour in time: expected two digit hour, but found end of input"
        );
        insta::assert_snapshot!(
            parse("2024-06-01T1x:30").unwrap_err(),
            @"the time of a timestamp must be formatted as HH[[:]MM[[:]SS]] with an optional fraction: failed to parse hour in time: failed to parse two digit integer as hour: invalid digit, expected a digit in 0-9"
        );
        assert!(parse("2024-06-01T").unwrap_err().is_time_format());
        assert!(parse("2024-06-01T1x:30").unwrap_err().is_time_format());
    }

    #[test]
    fn err_fraction() {
        insta::assert_snapshot!(
            parse("2024-06-01T12.").unwrap_err(),
            @"the time of a timestamp must be formatted as HH[[:]MM[[:]SS]] with an optional fraction: failed to parse fractional component in time: found decimal after the smallest time component, but did not find any decimal digits after it"
        );
        insta::assert_snapshot!(
            parse("2024-06-01T12:30:24.1234567").unwrap_err(),
            @"the time of a timestamp must be formatted as HH[[:]MM[[:]SS]] with an optional fraction: failed to parse fractional component in time: fractional component must have at most 6 digits (microsecond precision)"
        );
        assert!(parse("2024-06-01T12.").unwrap_err().is_time_format());
        assert!(
            parse("2024-06-01T12:30:24.1234567").unwrap_err().is_time_format()
        );
    }

    #[test]
    fn err_range() {
        insta::assert_snapshot!(
            parse("1989-13-01").unwrap_err(),
            @"parsed date is not valid: parameter 'month' with value 13 is not in the required range of 1..=12"
        );
        insta::assert_snapshot!(
            parse("2019-10-01T25").unwrap_err(),
            @"parsed time is not valid: parameter 'hour' with value 25 is not in the required range of 0..=23"
        );
        insta::assert_snapshot!(
            parse("2023-02-29").unwrap_err(),
            @"parsed date is not valid: parameter 'day' with value 29 is not in the required range of 1..=28"
        );
        insta::assert_snapshot!(
            parse("0000-01-01").unwrap_err(),
            @"parsed date is not valid: parameter 'year' with value 0 is not in the required range of 1..=9999"
        );
        insta::assert_snapshot!(
            parse("2024-06-01T23:59:60").unwrap_err(),
            @"parsed time is not valid: parameter 'second' with value 60 is not in the required range of 0..=59"
        );
        insta::assert_snapshot!(
            parse("2024-06-01T12:30+24:00").unwrap_err(),
            @"parsed UTC offset is not valid: parameter 'offset hours' with value 24 is not in the required range of 0..=23"
        );
        for input in
            ["1989-13-01", "2019-10-01T25", "2024-06-01T12:30+24:00"]
        {
            let err = parse(input).unwrap_err();
            assert!(err.is_range(), "{input}");
            assert!(!err.is_date_format(), "{input}");
            assert!(!err.is_time_format(), "{input}");
            assert!(!err.is_timezone_format(), "{input}");
        }
    }

    #[test]
    fn err_timezone() {
        insta::assert_snapshot!(
            parse("2022-12-12T11:10:09X").unwrap_err(),
            @"invalid timezone designator, expected `Z` or a signed numeric offset, but found `X`"
        );
        insta::assert_snapshot!(
            parse("2022-12-12T11:10:09+1").unwrap_err(),
            @"expected two digit hours after offset sign, but found end of input"
        );
        assert!(parse("2022-12-12T11:10:09X").unwrap_err().is_timezone_format());
        assert!(parse("2022-12-12T11:10:09+1").unwrap_err().is_timezone_format());
        // A date-only timestamp cannot carry a designator: anything after
        // the date is expected to be a time segment.
        assert!(parse("2022-12-12Z").unwrap_err().is_time_separator());
    }

    #[test]
    fn err_trailing() {
        insta::assert_snapshot!(
            parse("2022-12-12T11:10:09Zjunk").unwrap_err(),
            @"a valid timestamp was followed by unparseable characters beginning with `j`"
        );
        insta::assert_snapshot!(
            parse("2024-06-01T12:30+01:").unwrap_err(),
            @"a valid timestamp was followed by unparseable characters beginning with `:`"
        );
        assert!(
            parse("2022-12-12T11:10:09Zjunk")
                .unwrap_err()
                .is_trailing_characters()
        );
        assert!(
            parse("2024-06-01T12:30+01:")
                .unwrap_err()
                .is_trailing_characters()
        );
    }

    // A structural error anywhere always wins over a range error, since
    // range validation runs only after the whole input is consumed.
    #[test]
    fn structure_beats_range() {
        let err = parse("1989-13-01T12:30Zjunk").unwrap_err();
        assert!(err.is_trailing_characters());
        assert!(!err.is_range());
    }

    quickcheck::quickcheck! {
        fn prop_roundtrip(
            year: u16,
            month: u8,
            day: u8,
            hour: u8,
            minute: u8,
            second: u8,
            micro: u32
        ) -> bool {
            let year = i16::try_from(year % 9999 + 1).unwrap();
            let month = i8::try_from(month % 12 + 1).unwrap();
            let max_day = crate::util::common::days_in_month(year, month);
            let day = i8::try_from(day % (max_day as u8) + 1).unwrap();
            let hour = i8::try_from(hour % 24).unwrap();
            let minute = i8::try_from(minute % 60).unwrap();
            let second = i8::try_from(second % 60).unwrap();
            let micro = i32::try_from(micro % 1_000_000).unwrap();

            let input = format!(
                "{year:04}-{month:02}-{day:02}\
                 T{hour:02}:{minute:02}:{second:02}.{micro:06}",
            );
            let ts = parse_timestamp(input.as_bytes()).unwrap();
            ts.datetime().date() == Date::constant(year, month, day)
                && ts.datetime().time()
                    == Time::constant(hour, minute, second, micro)
        }

        fn prop_extended_and_basic_agree(
            year: u16,
            month: u8,
            day: u8,
            hour: u8,
            minute: u8,
            second: u8
        ) -> bool {
            let year = year % 9999 + 1;
            let month = month % 12 + 1;
            let day = day % 28 + 1;
            let (hour, minute, second) =
                (hour % 24, minute % 60, second % 60);

            let extended = format!(
                "{year:04}-{month:02}-{day:02}\
                 T{hour:02}:{minute:02}:{second:02}",
            );
            let basic = format!(
                "{year:04}{month:02}{day:02}T{hour:02}{minute:02}{second:02}",
            );
            parse_timestamp(extended.as_bytes()).unwrap()
                == parse_timestamp(basic.as_bytes()).unwrap()
        }

        fn prop_no_panic(bytes: Vec<u8>) -> bool {
            // Any outcome is fine as long as it is an outcome.
            let _ = parse_timestamp(&bytes);
            true
        }

        fn prop_exactly_one_category(bytes: Vec<u8>) -> bool {
            let Err(err) = parse_timestamp(&bytes) else { return true };
            let categories = [
                err.is_date_format(),
                err.is_time_separator(),
                err.is_time_format(),
                err.is_timezone_format(),
                err.is_trailing_characters(),
                err.is_range(),
            ];
            categories.iter().filter(|&&is| is).count() == 1
        }
    }

    // The error message for an unparsed input byte never echoes it raw.
    #[test]
    fn unprintable_input_is_escaped() {
        let err = parse_timestamp(b"2024-06-01\xff").unwrap_err();
        assert_eq!(
            err.to_string(),
            "the date and time of a timestamp must be separated by \
             a `T`, but found `\\xff`",
        );
    }
}
