/*!
Convenience wrappers for showing raw input bytes in error messages.

The input to the parser is untrusted and need not be UTF-8, so anything
echoed back to a human goes through these types first.
*/

/// Provides a human readable `Display` implementation for a `u8`.
///
/// Printable ASCII is shown as-is. Everything else is shown as an escape
/// sequence, e.g. `\xFF`.
#[derive(Clone, Copy)]
pub(crate) struct Byte(pub(crate) u8);

impl core::fmt::Display for Byte {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if self.0 == b' ' {
            return write!(f, " ");
        }
        for b in core::ascii::escape_default(self.0) {
            write!(f, "{}", char::from(b))?;
        }
        Ok(())
    }
}

impl core::fmt::Debug for Byte {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "\"")?;
        core::fmt::Display::fmt(self, f)?;
        write!(f, "\"")
    }
}

/// Provides a human readable `Display` implementation for `&[u8]`.
///
/// This works best when the bytes are mostly ASCII, which is the expected
/// case for timestamp inputs, but it never panics on anything else.
#[derive(Clone, Copy)]
pub(crate) struct Bytes<'a>(pub(crate) &'a [u8]);

impl<'a> core::fmt::Display for Bytes<'a> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        for &b in self.0 {
            core::fmt::Display::fmt(&Byte(b), f)?;
        }
        Ok(())
    }
}

impl<'a> core::fmt::Debug for Bytes<'a> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "\"")?;
        core::fmt::Display::fmt(self, f)?;
        write!(f, "\"")
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn byte() {
        assert_eq!(Byte(b'T').to_string(), "T");
        assert_eq!(Byte(b' ').to_string(), " ");
        assert_eq!(Byte(b'\t').to_string(), "\\t");
        assert_eq!(Byte(0xFF).to_string(), "\\xff");
    }

    #[test]
    fn bytes() {
        assert_eq!(Bytes(b"2024-06-01").to_string(), "2024-06-01");
        assert_eq!(Bytes(b"a\xFFb").to_string(), "a\\xffb");
    }
}
