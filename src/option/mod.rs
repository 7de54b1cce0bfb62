//! The optional container.
//!
//! [`Optional<T>`] represents a value that is either present (`Some`) or
//! absent (`None`). Absence is an ordinary value: [`Optional::map`] and
//! [`Optional::then`] skip their function once the chain is empty, and the
//! chain is resolved at the end with [`Optional::or_else`],
//! [`Optional::use_value`] or, after checking, [`Optional::unwrap`].
//!
//! `Optional` is not meant for failures that carry a reason. See
//! [`Outcome`](crate::result::Outcome) for that.
//!
//! # Examples
//!
//! ```rust
//! use pho::option::{self, Optional};
//!
//! let parsed = option::some("42")
//!     .then(|text| Optional::from(text.parse::<i32>().ok()))
//!     .map(|n| n + 1);
//! assert_eq!(parsed, Optional::some(43));
//!
//! let missing: Optional<i32> = option::none();
//! assert_eq!(missing.map(|n| n + 1).or_else(0), 0);
//! ```

mod error;
mod optional;

pub use error::EmptyError;
pub use optional::Optional;

/// Returns an [`Optional`] holding `value`.
///
/// # Examples
///
/// ```rust
/// use pho::option;
///
/// assert!(option::some(5).is_some());
/// ```
#[inline]
pub const fn some<T>(value: T) -> Optional<T> {
    Optional::Some(value)
}

/// Returns an empty [`Optional`].
///
/// # Examples
///
/// ```rust
/// use pho::option;
///
/// assert!(option::none::<i32>().is_none());
/// ```
#[inline]
pub const fn none<T>() -> Optional<T> {
    Optional::None
}
