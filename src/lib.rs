/*!
A parser for a restricted profile of [ISO 8601] calendar timestamps.

This crate does exactly one thing: it turns an untrusted string like
`2024-06-01T12:30:05.5-05:00` into a structured, validated [`Timestamp`],
or else a precise [`Error`] explaining why the string is not one. There is
no formatting, no arithmetic and no time zone database. If you need a full
datetime library, use one. If you need to know whether a string is one of
these timestamps and what its fields are, this crate is small and exact.

The accepted grammar is, informally:

```text
DATE ['T' TIME] [TIMEZONE]
DATE     = YYYY[-]MM[-]DD
TIME     = HH[[:]MM[[:]SS]][.fraction]
TIMEZONE = 'Z' | SIGN HH[[:]MM]
```

Dates and times may each be written in "extended" form (with `-` or `:`
separators) or "basic" form (without), but the two forms may not be mixed
within one segment. A decimal fraction of 1 to 6 digits may follow the
smallest time unit present, and is converted to exact integer amounts of
the smaller units with no floating point involved. The fields of a parse
result always reflect the literal digit groups in the input.

# Example

```
use isoparse::{tz::Offset, Timestamp};

let ts: Timestamp = "1902-08-02T12:30:24+01:15".parse()?;
assert_eq!(ts.date().year(), 1902);
assert_eq!(ts.time().second(), 24);
let Some(Offset::Fixed(offset)) = ts.offset() else { unreachable!() };
assert_eq!(offset.hours(), 1);
assert_eq!(offset.minutes(), 15);
# Ok::<(), isoparse::Error>(())
```

A fractional hour is converted exactly:

```
use isoparse::Timestamp;

let ts: Timestamp = "2024-06-01T16.000001".parse()?;
assert_eq!(ts.time().hour(), 16);
assert_eq!(ts.time().minute(), 0);
assert_eq!(ts.time().second(), 0);
assert_eq!(ts.time().microsecond(), 3600);
# Ok::<(), isoparse::Error>(())
```

And failures say what went wrong:

```
use isoparse::Timestamp;

let err = "1989-13-01".parse::<Timestamp>().unwrap_err();
assert!(err.is_range());

let err = "1965-02-01t19:09:13".parse::<Timestamp>().unwrap_err();
assert!(err.is_time_separator());
```

# Out of scope

Durations, intervals, week dates, ordinal dates, negative years and leap
seconds (a seconds value of `60` is rejected) are all unsupported, as is
formatting a `Timestamp` back to text.

# Crate features

* **std** (enabled by default) - Adds the `std::error::Error` trait impl
  for this crate's error type. Otherwise, this crate only depends on
  `core` and `alloc`.
* **logging** - Emits a few trace-level messages to the [`log`] crate
  while parsing. Useful for debugging, never required.

[ISO 8601]: https://www.iso.org/iso-8601-date-and-time-format.html
[`log`]: https://docs.rs/log
*/

#![no_std]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(missing_debug_implementations)]

#[cfg(any(test, feature = "std"))]
extern crate std;

extern crate alloc;

pub use crate::{error::Error, timestamp::Timestamp};

#[macro_use]
mod logging;

pub mod civil;
mod error;
mod fmt;
mod timestamp;
pub mod tz;
mod util;
