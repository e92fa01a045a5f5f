/// Represents a message that could not be built because one of its fields is out of range.
///
/// Errors are only produced while constructing messages.
/// Once a [`Message`](enum.Message.html) exists it is valid by construction, and turning it into
/// bytes cannot fail on its own (although the output sink might).
///
/// If the `std` feature is enabled, this type implements `std::error::Error`.
/// Otherwise it implements `core::error::Error`.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash, thiserror::Error)]
pub enum Error {
    /// A semantic argument fell outside of its legal inclusive range.
    #[error("{field} out of range: {value} is not within [{min}, {max}]")]
    OutOfRange {
        /// The name of the offending field, such as `"channel"` or `"velocity"`.
        field: &'static str,
        /// The value supplied by the caller.
        value: i32,
        /// Smallest legal value (inclusive).
        min: i32,
        /// Largest legal value (inclusive).
        max: i32,
    },
}
impl Error {
    /// Create an `OutOfRange` error.
    #[inline]
    pub const fn out_of_range(field: &'static str, value: i32, min: i32, max: i32) -> Error {
        Error::OutOfRange {
            field,
            value,
            min,
            max,
        }
    }

    /// The name of the field that failed validation.
    #[inline]
    pub fn field(&self) -> &'static str {
        match *self {
            Error::OutOfRange { field, .. } => field,
        }
    }

    /// The value that was rejected.
    #[inline]
    pub fn value(&self) -> i32 {
        match *self {
            Error::OutOfRange { value, .. } => value,
        }
    }

    /// The legal inclusive range for the rejected field.
    #[inline]
    pub fn bounds(&self) -> (i32, i32) {
        match *self {
            Error::OutOfRange { min, max, .. } => (min, max),
        }
    }
}

/// The result type used by message construction.
pub type Result<T> = StdResult<T, Error>;
pub(crate) use core::result::Result as StdResult;
