//! Error returned when an empty optional is used.

use std::fmt;

/// Represents an attempt to use the value of an empty [`Optional`](super::Optional).
///
/// Returned by [`Optional::use_value`](super::Optional::use_value) when there
/// is no value to hand to the procedure.
///
/// # Examples
///
/// ```rust
/// use pho::option::{EmptyError, Optional};
///
/// let empty: Optional<i32> = Optional::none();
/// assert_eq!(empty.use_value(|_| {}), Err(EmptyError));
/// assert_eq!(format!("{}", EmptyError), "empty");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EmptyError;

impl fmt::Display for EmptyError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("empty")
    }
}

impl std::error::Error for EmptyError {}
