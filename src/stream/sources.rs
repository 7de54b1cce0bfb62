//! Sources wrapping concrete sequences.

use std::iter::Fuse as FusedIter;

use super::source::Source;
use crate::option::Optional;

/// A stream over a borrowed slice, cloning each element as it is pulled.
///
/// Holds a 0-indexed cursor into the slice. The size hint is the number of
/// elements not yet pulled.
///
/// # Examples
///
/// ```rust
/// use pho::option::Optional;
/// use pho::stream::{self, Source};
///
/// let mut source = stream::slice(&["a", "b"]);
/// assert_eq!(source.size(), 2);
/// assert_eq!(source.next(), Optional::some("a"));
/// assert_eq!(source.size(), 1);
/// assert_eq!(source.next(), Optional::some("b"));
/// assert_eq!(source.next(), Optional::none());
/// ```
#[derive(Debug, Clone)]
pub struct SliceSource<'a, T> {
    data: &'a [T],
    cursor: usize,
}

impl<'a, T> SliceSource<'a, T> {
    pub(crate) const fn new(data: &'a [T]) -> Self {
        Self { data, cursor: 0 }
    }

    /// Returns the elements that have not been pulled yet.
    pub fn remaining(&self) -> &'a [T] {
        self.data.get(self.cursor..).unwrap_or_default()
    }
}

impl<T: Clone> Source for SliceSource<'_, T> {
    type Item = T;

    fn next(&mut self) -> Optional<T> {
        match self.data.get(self.cursor) {
            Some(item) => {
                self.cursor += 1;
                Optional::Some(item.clone())
            }
            None => Optional::None,
        }
    }

    #[inline]
    fn size(&self) -> usize {
        self.data.len().saturating_sub(self.cursor)
    }
}

/// A stream that takes ownership of a `Vec` and moves its elements out.
#[derive(Debug, Clone)]
pub struct VecSource<T> {
    items: std::vec::IntoIter<T>,
}

impl<T> VecSource<T> {
    pub(crate) fn new(items: Vec<T>) -> Self {
        Self {
            items: items.into_iter(),
        }
    }
}

impl<T> Source for VecSource<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Optional<T> {
        self.items.next().into()
    }

    #[inline]
    fn size(&self) -> usize {
        self.items.len()
    }
}

/// A stream over any standard iterator.
///
/// The iterator is fused, so the stream stays exhausted even if the
/// iterator would resume. The size hint is the iterator's lower bound.
#[derive(Debug, Clone)]
pub struct IterSource<I> {
    iterator: FusedIter<I>,
}

impl<I: Iterator> IterSource<I> {
    pub(crate) fn new(iterator: I) -> Self {
        Self {
            iterator: iterator.fuse(),
        }
    }
}

impl<I: Iterator> Source for IterSource<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Optional<I::Item> {
        self.iterator.next().into()
    }

    #[inline]
    fn size(&self) -> usize {
        self.iterator.size_hint().0
    }
}

static_assertions::assert_impl_all!(SliceSource<'static, i32>: Send, Sync);
static_assertions::assert_not_impl_any!(VecSource<std::rc::Rc<i32>>: Send, Sync);
