//! Transformation stages: map, filter and fuse.

use std::fmt;

use super::source::{Source, StreamState};
use crate::option::Optional;

// =============================================================================
// Map
// =============================================================================

/// A stream that transforms each upstream value with a function.
///
/// Created by [`Source::map`] or [`stream::map`](super::map). The element
/// count is preserved one to one, so the size hint is the upstream's.
#[derive(Clone)]
pub struct Map<S, F> {
    source: S,
    function: F,
}

impl<S, F> Map<S, F> {
    pub(crate) const fn new(source: S, function: F) -> Self {
        Self { source, function }
    }
}

impl<S, F, U> Source for Map<S, F>
where
    S: Source,
    F: FnMut(S::Item) -> U,
{
    type Item = U;

    #[inline]
    fn next(&mut self) -> Optional<U> {
        self.source.next().map(&mut self.function)
    }

    #[inline]
    fn size(&self) -> usize {
        self.source.size()
    }
}

impl<S: fmt::Debug, F> fmt::Debug for Map<S, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Map")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Filter
// =============================================================================

/// A stream that yields only the upstream values satisfying a predicate.
///
/// Created by [`Source::filter`] or [`stream::filter`](super::filter).
/// How many values remain cannot be known without consuming the upstream,
/// so the size hint is always `0` and [`collect`](super::collect) falls back
/// to ordinary growth.
#[derive(Clone)]
pub struct Filter<S, P> {
    source: S,
    predicate: P,
}

impl<S, P> Filter<S, P> {
    pub(crate) const fn new(source: S, predicate: P) -> Self {
        Self { source, predicate }
    }
}

impl<S, P> Source for Filter<S, P>
where
    S: Source,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn next(&mut self) -> Optional<S::Item> {
        while let Optional::Some(item) = self.source.next() {
            if (self.predicate)(&item) {
                return Optional::Some(item);
            }
        }
        Optional::None
    }

    #[inline]
    fn size(&self) -> usize {
        0
    }
}

impl<S: fmt::Debug, P> fmt::Debug for Filter<S, P> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Filter")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Fuse
// =============================================================================

/// A stream that stays exhausted once its upstream has reported its end.
///
/// Created by [`Source::fuse`]. The built-in sources and stages already
/// behave this way; `Fuse` is for hand-written sources that might resume,
/// and it exposes the [`StreamState`] it tracks.
///
/// # Examples
///
/// ```rust
/// use pho::option::Optional;
/// use pho::stream::{Source, StreamState};
///
/// // Alternates between a value and an empty pull forever.
/// struct Flicker(bool);
///
/// impl Source for Flicker {
///     type Item = u8;
///
///     fn next(&mut self) -> Optional<u8> {
///         self.0 = !self.0;
///         if self.0 { Optional::some(1) } else { Optional::none() }
///     }
///
///     fn size(&self) -> usize {
///         0
///     }
/// }
///
/// let mut fused = Flicker(false).fuse();
/// assert_eq!(fused.next(), Optional::some(1));
/// assert_eq!(fused.next(), Optional::none());
/// assert_eq!(fused.state(), StreamState::Exhausted);
/// assert_eq!(fused.next(), Optional::none());
/// ```
#[derive(Debug, Clone)]
pub struct Fuse<S> {
    source: S,
    state: StreamState,
}

impl<S> Fuse<S> {
    pub(crate) const fn new(source: S) -> Self {
        Self {
            source,
            state: StreamState::Active,
        }
    }

    /// Returns whether the stream is still active.
    #[inline]
    pub const fn state(&self) -> StreamState {
        self.state
    }
}

impl<S: Source> Source for Fuse<S> {
    type Item = S::Item;

    fn next(&mut self) -> Optional<S::Item> {
        if self.state.is_exhausted() {
            return Optional::None;
        }
        let pulled = self.source.next();
        if pulled.is_none() {
            trace_event!("stream exhausted");
            self.state = StreamState::Exhausted;
        }
        pulled
    }

    #[inline]
    fn size(&self) -> usize {
        match self.state {
            StreamState::Active => self.source.size(),
            StreamState::Exhausted => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::slice;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_map_is_lazy() {
        let calls = Cell::new(0);
        let mut mapped = slice(&[1, 2, 3]).map(|n| {
            calls.set(calls.get() + 1);
            n * 2
        });
        assert_eq!(calls.get(), 0);

        assert_eq!(mapped.next(), Optional::some(2));
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn test_map_size_follows_upstream() {
        let mut mapped = slice(&[1, 2, 3]).map(|n| n + 1);
        assert_eq!(mapped.size(), 3);
        let _ = mapped.next();
        assert_eq!(mapped.size(), 2);
    }

    #[rstest]
    fn test_filter_size_is_unknown() {
        let filtered = slice(&[2, 4, 6]).filter(|n| n % 2 == 0);
        assert_eq!(filtered.size(), 0);
        assert_eq!(filtered.collect(), vec![2, 4, 6]);
    }

    #[rstest]
    fn test_filter_pulls_past_rejected_values() {
        let mut filtered = slice(&[1, 3, 5, 6, 7]).filter(|n| n % 2 == 0);
        assert_eq!(filtered.next(), Optional::some(6));
        assert_eq!(filtered.next(), Optional::none());
        assert_eq!(filtered.next(), Optional::none());
    }

    #[rstest]
    fn test_fuse_reports_state() {
        let mut fused = slice(&[1]).fuse();
        assert_eq!(fused.state(), StreamState::Active);
        assert_eq!(fused.size(), 1);
        assert_eq!(fused.next(), Optional::some(1));
        assert_eq!(fused.state(), StreamState::Active);
        assert_eq!(fused.next(), Optional::none());
        assert_eq!(fused.state(), StreamState::Exhausted);
        assert_eq!(fused.size(), 0);
    }

    #[rstest]
    fn test_debug_omits_closures() {
        let mapped = slice(&[1]).map(|n| n);
        assert!(format!("{mapped:?}").starts_with("Map { source: SliceSource"));
    }
}
