//! The outcome container.
//!
//! [`Outcome<T, E>`] holds either a success value or an error. It adapts the
//! standard two-way `Result` returned by fallible calls at the boundary
//! ([`Outcome::wrap`]), lets a chain of fallible steps be written without
//! nested error checks ([`Outcome::then_wrap`], [`Outcome::then`]), and hands
//! the plain `Result` back with [`Outcome::into_result`].
//!
//! Use [`Optional`](crate::option::Optional) for values that may simply be
//! missing.
//!
//! # Examples
//!
//! ```rust
//! use pho::result::{self, Outcome};
//!
//! fn halve(n: i32) -> Result<i32, String> {
//!     if n % 2 == 0 { Ok(n / 2) } else { Err(format!("{n} is odd")) }
//! }
//!
//! let value = result::wrap(Ok::<_, String>(20))
//!     .then_wrap(halve)
//!     .then_wrap(halve)
//!     .map(|n| n * 3);
//! assert_eq!(value, Outcome::ok(15));
//!
//! let failed = result::ok::<i32, String>(6)
//!     .then_wrap(halve)
//!     .then_wrap(halve)
//!     .map_err(|error| format!("halving twice: {error}"));
//! assert_eq!(failed.into_result(), Err("halving twice: 3 is odd".to_string()));
//! ```

mod outcome;

pub use outcome::Outcome;

/// A type-erased error, the default error type of [`Outcome`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Returns a successful [`Outcome`].
#[inline]
pub const fn ok<T, E>(value: T) -> Outcome<T, E> {
    Outcome::Ok(value)
}

/// Returns a failed [`Outcome`].
#[inline]
pub const fn err<T, E>(error: E) -> Outcome<T, E> {
    Outcome::Err(error)
}

/// Wraps a standard `Result` into an [`Outcome`].
///
/// See [`Outcome::wrap`].
#[inline]
pub fn wrap<T, E>(result: Result<T, E>) -> Outcome<T, E> {
    Outcome::wrap(result)
}
