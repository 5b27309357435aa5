/*!
Plain calendar dates and clock times, with no timezone attached.

These are the validated value types that a successful parse produces. A
[`Date`] is always a real day of the proleptic Gregorian calendar, and a
[`Time`] is always a real 24-hour clock reading with microsecond
precision. Neither can be constructed in an invalid state.
*/

pub use self::{date::Date, datetime::DateTime, time::Time};

mod date;
mod datetime;
mod time;
