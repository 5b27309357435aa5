/*!
The incremental timestamp parser.

Parsing proceeds strictly left to right in a single pass: each stage
consumes a prefix of its input, returns the structured fields it
recognized inside a [`Parsed`] along with the unconsumed remainder, and
the next stage picks up from there. No stage looks past what it is asked
to consume and no backtracking occurs across stage boundaries.
*/

use crate::util::escape;

pub(crate) mod fraction;
pub(crate) mod iso8601;
pub(crate) mod offset;

/// The result of parsing a value out of a slice of bytes.
///
/// This contains both the parsed value and the unconsumed remainder of
/// the input. This makes it possible to parse, for example, a date as a
/// prefix of some larger string without knowing ahead of time where it
/// ends.
#[derive(Clone, Eq, PartialEq)]
pub(crate) struct Parsed<'i, V> {
    /// The value parsed.
    pub(crate) value: V,
    /// The remaining unparsed input.
    pub(crate) input: &'i [u8],
}

impl<'i, V: core::fmt::Debug> core::fmt::Debug for Parsed<'i, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("Parsed")
            .field("value", &self.value)
            .field("input", &escape::Bytes(self.input))
            .finish()
    }
}
