//! The `Source` trait and the terminal drain.

use std::fmt;

use super::stages::{Filter, Fuse, Map};
use crate::option::Optional;

/// The lifecycle of a stream.
///
/// A stream starts `Active` and moves to `Exhausted` the first time a pull
/// comes back empty. There is no way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StreamState {
    /// The stream may still produce values.
    #[default]
    Active,
    /// The stream has reported its end; every further pull is empty.
    Exhausted,
}

impl StreamState {
    /// Returns `true` once the stream has ended.
    #[inline]
    pub const fn is_exhausted(self) -> bool {
        matches!(self, Self::Exhausted)
    }
}

impl fmt::Display for StreamState {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => formatter.write_str("active"),
            Self::Exhausted => formatter.write_str("exhausted"),
        }
    }
}

/// A single-pass, pull-based producer of values.
///
/// Each call to [`next`](Source::next) yields the following element, or an
/// empty [`Optional`] once the stream is exhausted. Exhaustion is terminal:
/// after the first empty pull, every later pull must be empty as well.
/// Sources that cannot promise this on their own can be wrapped with
/// [`fuse`](Source::fuse).
///
/// [`size`](Source::size) is a hint for presizing the buffer in
/// [`collect`](Source::collect). It is advisory only; `0` means "unknown".
///
/// Stages own their upstream by value, so a pipeline is a linear chain with
/// exactly one consumer at the end.
///
/// # Examples
///
/// ```rust
/// use pho::option::Optional;
/// use pho::stream::Source;
///
/// struct Countdown(u32);
///
/// impl Source for Countdown {
///     type Item = u32;
///
///     fn next(&mut self) -> Optional<u32> {
///         if self.0 == 0 {
///             return Optional::none();
///         }
///         self.0 -= 1;
///         Optional::some(self.0 + 1)
///     }
///
///     fn size(&self) -> usize {
///         self.0 as usize
///     }
/// }
///
/// assert_eq!(Countdown(3).map(|n| n * 10).collect(), vec![30, 20, 10]);
/// ```
pub trait Source {
    /// The type of the produced values.
    type Item;

    /// Pulls the next value, or an empty optional once the stream has ended.
    fn next(&mut self) -> Optional<Self::Item>;

    /// Returns an estimate of the remaining element count, `0` if unknown.
    fn size(&self) -> usize;

    /// Wraps this stream so each value is transformed by `function`.
    ///
    /// Nothing is evaluated until the resulting stream is pulled.
    #[inline]
    fn map<U, F>(self, function: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> U,
    {
        Map::new(self, function)
    }

    /// Wraps this stream so only values satisfying `predicate` come through.
    ///
    /// The resulting stream reports a size hint of `0`.
    #[inline]
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    /// Wraps this stream so it stays empty after the first empty pull.
    #[inline]
    fn fuse(self) -> Fuse<Self>
    where
        Self: Sized,
    {
        Fuse::new(self)
    }

    /// Drains the stream into a `Vec`. See [`collect`].
    #[inline]
    fn collect(self) -> Vec<Self::Item>
    where
        Self: Sized,
    {
        collect(self)
    }

    /// Adapts the stream into a standard [`Iterator`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pho::stream::{self, Source};
    ///
    /// let total: i32 = stream::slice(&[1, 2, 3]).into_iterator().sum();
    /// assert_eq!(total, 6);
    /// ```
    #[inline]
    fn into_iterator(self) -> IntoIter<Self>
    where
        Self: Sized,
    {
        IntoIter { source: self }
    }
}

impl<S: Source + ?Sized> Source for Box<S> {
    type Item = S::Item;

    #[inline]
    fn next(&mut self) -> Optional<Self::Item> {
        (**self).next()
    }

    #[inline]
    fn size(&self) -> usize {
        (**self).size()
    }
}

impl<S: Source + ?Sized> Source for &mut S {
    type Item = S::Item;

    #[inline]
    fn next(&mut self) -> Optional<Self::Item> {
        (**self).next()
    }

    #[inline]
    fn size(&self) -> usize {
        (**self).size()
    }
}

/// Upper bound on the capacity taken from a size hint before any value is
/// pulled.
const PRESIZE_LIMIT: usize = 4096;

/// Drains `source` into a `Vec`, front to back in pull order.
///
/// The buffer is presized from [`Source::size`], capped at a fixed limit,
/// and grows as needed, so an inaccurate hint only costs reallocations. The
/// stream is consumed.
///
/// # Examples
///
/// ```rust
/// use pho::stream;
///
/// let doubled = stream::collect(stream::map(stream::slice(&[1, 2, 3]), |n| n * 2));
/// assert_eq!(doubled, vec![2, 4, 6]);
/// ```
pub fn collect<S: Source>(mut source: S) -> Vec<S::Item> {
    let hint = source.size();
    let mut collected = Vec::with_capacity(hint.min(PRESIZE_LIMIT));
    while let Optional::Some(item) = source.next() {
        collected.push(item);
    }
    trace_event!(hint, collected = collected.len(), "drained stream");
    collected
}

/// An [`Iterator`] over the values of a [`Source`].
///
/// Created by [`Source::into_iterator`]. The size hint's lower bound is the
/// source's [`size`](Source::size), capped like the presize in [`collect`];
/// no upper bound is claimed.
#[derive(Debug, Clone)]
pub struct IntoIter<S> {
    source: S,
}

impl<S> IntoIter<S> {
    /// Returns the wrapped source.
    pub fn into_inner(self) -> S {
        self.source
    }
}

impl<S: Source> Iterator for IntoIter<S> {
    type Item = S::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.source.next().into_option()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.source.size().min(PRESIZE_LIMIT), None)
    }
}
