use alloc::sync::Arc;

pub(crate) mod iso8601;
pub(crate) mod offset;
pub(crate) mod util;

/// An error that can occur when parsing a timestamp.
///
/// Every error is terminal and non-retryable: when parsing fails, no
/// partial result is ever returned. The `Display` impl renders a chain of
/// human readable causes, from the highest level context down to the root
/// cause. For example, parsing `2019-10-01T25` produces:
///
/// ```text
/// parsed time is not valid: parameter 'hour' with value 25 is not in the required range of 0..=23
/// ```
///
/// # Introspection
///
/// This type is deliberately opaque. Instead of exposing its internal
/// structure, it provides one predicate per failure category of the
/// grammar: [`Error::is_date_format`], [`Error::is_time_separator`],
/// [`Error::is_time_format`], [`Error::is_timezone_format`],
/// [`Error::is_trailing_characters`] and [`Error::is_range`]. Exactly one
/// of these returns true for any error produced by parsing.
#[derive(Clone)]
pub struct Error {
    /// The internal representation of an error.
    ///
    /// This is in an `Arc` to make cloning cheap and the size of `Error`
    /// a single word, which matters because every parsing routine in this
    /// crate returns a `Result<T, Error>`.
    inner: Arc<ErrorInner>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Returns true when this error is a result of a structurally valid
    /// field that is not a valid calendar or clock value.
    ///
    /// Range validation is deferred to the very end of parsing, after all
    /// structural extraction succeeds. So for example, `1989-13-01` is
    /// shaped like a date but month `13` is out of range.
    ///
    /// # Example
    ///
    /// ```
    /// use isoparse::Timestamp;
    ///
    /// assert!("1989-13-01".parse::<Timestamp>().unwrap_err().is_range());
    /// assert!("2019-10-01T25".parse::<Timestamp>().unwrap_err().is_range());
    /// ```
    pub fn is_range(&self) -> bool {
        matches!(*self.root().kind(), ErrorKind::Range(_))
    }

    /// Returns true when this error is a result of a malformed or absent
    /// date at the start of the input.
    ///
    /// A date is always mandatory and always first, so this is the only
    /// failure that can occur before any time information is considered.
    ///
    /// # Example
    ///
    /// ```
    /// use isoparse::Timestamp;
    ///
    /// assert!("2019-1012".parse::<Timestamp>().unwrap_err().is_date_format());
    /// assert!("nonsense".parse::<Timestamp>().unwrap_err().is_date_format());
    /// ```
    pub fn is_date_format(&self) -> bool {
        !self.is_range()
            && self.chain().any(|err| match *err.kind() {
                ErrorKind::Iso8601(ref err) => err.is_date(),
                _ => false,
            })
    }

    /// Returns true when a time segment is present but is not introduced
    /// by the literal `T` delimiter.
    ///
    /// This is checked before the rest of the time segment is looked at,
    /// so it fires even when everything after the first character would
    /// otherwise be a valid time.
    ///
    /// # Example
    ///
    /// ```
    /// use isoparse::Timestamp;
    ///
    /// let err = "2019-10-01 12:23:34".parse::<Timestamp>().unwrap_err();
    /// assert!(err.is_time_separator());
    /// ```
    pub fn is_time_separator(&self) -> bool {
        self.chain().any(|err| match *err.kind() {
            ErrorKind::Iso8601(ref err) => err.is_time_designator(),
            _ => false,
        })
    }

    /// Returns true when this error is a result of a malformed time
    /// segment: inconsistent separator use, wrong digit counts or a
    /// malformed fraction.
    ///
    /// # Example
    ///
    /// ```
    /// use isoparse::Timestamp;
    ///
    /// let err = "1677-09-03T12:3105".parse::<Timestamp>().unwrap_err();
    /// assert!(err.is_time_format());
    /// ```
    pub fn is_time_format(&self) -> bool {
        !self.is_range()
            && !self.is_time_separator()
            && self.chain().any(|err| match *err.kind() {
                ErrorKind::Iso8601(ref err) => err.is_time(),
                _ => false,
            })
    }

    /// Returns true when whatever followed the date and time could not be
    /// recognized as a timezone designator.
    ///
    /// # Example
    ///
    /// ```
    /// use isoparse::Timestamp;
    ///
    /// let err = "2022-12-12T11:10:09X".parse::<Timestamp>().unwrap_err();
    /// assert!(err.is_timezone_format());
    /// ```
    pub fn is_timezone_format(&self) -> bool {
        !self.is_range()
            && self.chain().any(|err| match *err.kind() {
                ErrorKind::Offset(_) => true,
                _ => false,
            })
    }

    /// Returns true when an otherwise valid timestamp was followed by
    /// unconsumed input.
    ///
    /// # Example
    ///
    /// ```
    /// use isoparse::Timestamp;
    ///
    /// let err = "2022-12-12T11:10:09Zjunk".parse::<Timestamp>().unwrap_err();
    /// assert!(err.is_trailing_characters());
    /// ```
    pub fn is_trailing_characters(&self) -> bool {
        self.chain().any(|err| match *err.kind() {
            ErrorKind::Iso8601(ref err) => err.is_trailing(),
            _ => false,
        })
    }
}

impl Error {
    /// Creates a new error indicating that a `given` value is out of the
    /// specified `min..=max` range. The given `what` label is used in the
    /// error message as a human readable description of what exactly is
    /// out of range. (e.g., "month")
    #[inline(never)]
    #[cold]
    pub(crate) fn range(
        what: &'static str,
        given: impl Into<i64>,
        min: impl Into<i64>,
        max: impl Into<i64>,
    ) -> Error {
        Error::from(ErrorKind::Range(RangeError::new(what, given, min, max)))
    }

    pub(crate) fn context(self, consequent: impl IntoError) -> Error {
        consequent.into_error().caused_by(self)
    }

    #[inline(never)]
    #[cold]
    fn caused_by(mut self, cause: Error) -> Error {
        let inner = Arc::get_mut(&mut self.inner)
            .expect("cause must be attached to a freshly created error");
        assert!(inner.cause.is_none(), "cause of consequent must be `None`");
        inner.cause = Some(cause);
        self
    }

    /// Returns the root error in this chain.
    fn root(&self) -> &Error {
        // OK because `Error::chain` is guaranteed to return a non-empty
        // iterator.
        self.chain().last().unwrap()
    }

    /// Returns a chain of error values.
    ///
    /// This starts with the most recent error added to the chain. That
    /// is, the highest level context. The last error in the chain is
    /// always the root cause.
    ///
    /// The iterator returned is guaranteed to yield at least one error.
    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.cause.as_ref()?;
            Some(err)
        }))
    }

    /// Returns the kind of this error.
    fn kind(&self) -> &ErrorKind {
        &self.inner.kind
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            f.debug_struct("Error")
                .field("kind", &self.inner.kind)
                .field("cause", &self.inner.cause)
                .finish()
        }
    }
}

/// The underlying kind of a [`Error`].
#[derive(Debug)]
enum ErrorKind {
    Iso8601(self::iso8601::Error),
    Offset(self::offset::Error),
    ParseInt(self::util::ParseIntError),
    Range(RangeError),
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match *self {
            Iso8601(ref err) => err.fmt(f),
            Offset(ref err) => err.fmt(f),
            ParseInt(ref err) => err.fmt(f),
            Range(ref err) => err.fmt(f),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error { inner: Arc::new(ErrorInner { kind, cause: None }) }
    }
}

/// An error that occurs when an input value is out of bounds.
///
/// The error message produced by this type includes a name describing
/// which input was out of bounds, the value given and its minimum and
/// maximum allowed values.
#[derive(Debug)]
struct RangeError {
    what: &'static str,
    given: i64,
    min: i64,
    max: i64,
}

impl RangeError {
    fn new(
        what: &'static str,
        given: impl Into<i64>,
        min: impl Into<i64>,
        max: impl Into<i64>,
    ) -> RangeError {
        RangeError {
            what,
            given: given.into(),
            min: min.into(),
            max: max.into(),
        }
    }
}

impl core::fmt::Display for RangeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let RangeError { what, given, min, max } = *self;
        write!(
            f,
            "parameter '{what}' with value {given} \
             is not in the required range of {min}..={max}",
        )
    }
}

/// A simple trait to encapsulate automatic conversion to `Error`.
///
/// This exists so that `Error::context` and `ErrorContext` can accept any
/// of this crate's structured error types without public `From` impls.
pub(crate) trait IntoError {
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}

/// A trait for contextualizing error values.
///
/// This makes it easy to contextualize a `Result<T, Error>` without
/// calling `map_err` everywhere one wants to add context to an error.
///
/// This trick was borrowed from `anyhow`.
pub(crate) trait ErrorContext<T> {
    /// Contextualize the given consequent error with this (`self`) error
    /// as the cause.
    ///
    /// Note that this panics if the consequent error already has a cause,
    /// since the cause would otherwise be dropped. (An error causal chain
    /// is a linked list, not a tree.)
    fn context(self, consequent: impl IntoError) -> Result<T, Error>;
}

impl<T, E: IntoError> ErrorContext<T> for Result<T, E> {
    fn context(self, consequent: impl IntoError) -> Result<T, Error> {
        self.map_err(|err| err.into_error().context(consequent))
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    // We test that our 'Error' type is the size we expect. This isn't an
    // API guarantee, but if the size increases, we really want to make
    // sure we decide to do that intentionally. So this should be a speed
    // bump.
    #[test]
    fn error_size() {
        let expected_size = core::mem::size_of::<usize>();
        assert_eq!(expected_size, core::mem::size_of::<Error>());
    }

    #[test]
    fn display_chain() {
        let err = Error::range("month", 13, 1, 12)
            .context(iso8601::Error::InvalidDate);
        assert_eq!(
            err.to_string(),
            "parsed date is not valid: parameter 'month' with value 13 \
             is not in the required range of 1..=12",
        );
    }

    #[test]
    fn range_predicate() {
        let err = Error::range("hour", 25, 0, 23)
            .context(iso8601::Error::InvalidTime);
        assert!(err.is_range());
        assert!(!err.is_time_format());
        assert!(!err.is_date_format());
    }
}
