//! Pull-based lazy streams.
//!
//! A stream is a [`Source`]: a single-pass producer whose
//! [`next`](Source::next) returns the following value as an
//! [`Optional`](crate::option::Optional), empty once the stream is exhausted.
//!
//! Pipelines are built by wrapping:
//!
//! - a concrete sequence becomes a source ([`slice`], [`from_vec`],
//!   [`from_iter`]),
//! - [`map`] and [`filter`] stages wrap a source and pull from it on demand,
//! - [`collect`] drains the pipeline into a `Vec`.
//!
//! No intermediate vectors are built and no function runs before the
//! terminal drain pulls the value through it.
//!
//! # Size Hints
//!
//! Every stream reports a [`size`](Source::size) hint used to presize the
//! buffer in [`collect`]. Sources report their remaining length, [`Map`]
//! passes its upstream's hint through unchanged and [`Filter`] reports `0`
//! ("unknown"). A hint is never trusted for correctness.
//!
//! # Examples
//!
//! ```rust
//! use pho::stream::{self, Source};
//!
//! let evens = stream::filter(stream::slice(&[1, 2, 3, 4]), |n| n % 2 == 0);
//! let strings = stream::map(evens, |n| n.to_string());
//! assert_eq!(stream::collect(strings), vec!["2", "4"]);
//!
//! // The same pipeline using the method syntax.
//! let strings = stream::slice(&[1, 2, 3, 4])
//!     .filter(|n| n % 2 == 0)
//!     .map(|n| n.to_string())
//!     .collect();
//! assert_eq!(strings, vec!["2", "4"]);
//! ```

mod source;
mod sources;
mod stages;

pub use source::{IntoIter, Source, StreamState, collect};
pub use sources::{IterSource, SliceSource, VecSource};
pub use stages::{Filter, Fuse, Map};

/// Wraps a borrowed slice into a stream of cloned elements.
#[inline]
pub const fn slice<T: Clone>(data: &[T]) -> SliceSource<'_, T> {
    SliceSource::new(data)
}

/// Wraps an owned vector into a stream that moves its elements out.
///
/// # Examples
///
/// ```rust
/// use pho::stream::{self, Source};
///
/// let names = vec!["ada".to_string(), "grace".to_string()];
/// let upper = stream::from_vec(names).map(|name| name.to_uppercase()).collect();
/// assert_eq!(upper, vec!["ADA", "GRACE"]);
/// ```
#[inline]
pub fn from_vec<T>(items: Vec<T>) -> VecSource<T> {
    VecSource::new(items)
}

/// Wraps any iterable into a stream.
///
/// # Examples
///
/// ```rust
/// use pho::stream::{self, Source};
///
/// let squares = stream::from_iter(1..=3).map(|n| n * n).collect();
/// assert_eq!(squares, vec![1, 4, 9]);
/// ```
#[inline]
pub fn from_iter<I: IntoIterator>(iterable: I) -> IterSource<I::IntoIter> {
    IterSource::new(iterable.into_iter())
}

/// Wraps `source` so each value is transformed by `function`.
///
/// Equivalent to [`Source::map`].
#[inline]
pub fn map<S, U, F>(source: S, function: F) -> Map<S, F>
where
    S: Source,
    F: FnMut(S::Item) -> U,
{
    source.map(function)
}

/// Wraps `source` so only values satisfying `predicate` come through.
///
/// Equivalent to [`Source::filter`].
#[inline]
pub fn filter<S, P>(source: S, predicate: P) -> Filter<S, P>
where
    S: Source,
    P: FnMut(&S::Item) -> bool,
{
    source.filter(predicate)
}
