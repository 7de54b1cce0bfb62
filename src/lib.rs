//! # pho
//!
//! Composable containers and lazy streams.
//!
//! ## Overview
//!
//! This library provides three small abstractions that compose with each
//! other, plus a handful of eager helpers:
//!
//! - **Optional**: [`Optional<T>`](option::Optional), a value or nothing
//! - **Outcome**: [`Outcome<T, E>`](result::Outcome), a value or an error
//! - **Streams**: [`Source`](stream::Source), a pull-based, single-pass lazy
//!   sequence composed by wrapping (map, filter) and drained by `collect`
//! - **Slice helpers**: eager filter / map / flatten / find over slices
//!
//! ## Feature Flags
//!
//! - `option`: the optional container
//! - `result`: the outcome container
//! - `slice`: eager slice helpers (enables `option`)
//! - `stream`: lazy streams (enables `option`)
//! - `serde`: `Serialize`/`Deserialize` for the containers
//! - `tracing`: trace events from stream draining
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use pho::prelude::*;
//!
//! let strings = stream::slice(&[1, 2, 3, 4])
//!     .filter(|n| n % 2 == 0)
//!     .map(|n| n.to_string())
//!     .collect();
//! assert_eq!(strings, vec!["2".to_string(), "4".to_string()]);
//!
//! let halved = Outcome::<i32, String>::ok(10).then_wrap(|n| {
//!     if n % 2 == 0 { Ok(n / 2) } else { Err("odd".to_string()) }
//! });
//! assert_eq!(halved.or_else(0), 5);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

#[macro_use]
mod trace;

/// Prelude module for convenient imports.
///
/// Re-exports the container types, the [`Source`](stream::Source) trait and
/// the modules holding the free functions.
///
/// # Usage
///
/// ```rust
/// use pho::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "option")]
    pub use crate::option::{self, EmptyError, Optional};

    #[cfg(feature = "result")]
    pub use crate::result::{self, BoxError, Outcome};

    #[cfg(feature = "slice")]
    pub use crate::slice;

    #[cfg(feature = "stream")]
    pub use crate::stream::{self, Source, StreamState};
}

#[cfg(feature = "option")]
pub mod option;

#[cfg(feature = "result")]
pub mod result;

#[cfg(feature = "slice")]
pub mod slice;

#[cfg(feature = "stream")]
pub mod stream;
