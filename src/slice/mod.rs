//! Eager helpers over slices.
//!
//! Every function here makes a single front-to-back pass (back-to-front for
//! [`find_last`]) over a finite slice and keeps the original relative order.
//! Results are fresh `Vec`s of cloned elements, and searches return an
//! [`Optional`](crate::option::Optional).
//!
//! For pipelines that should not build intermediate vectors, see the lazy
//! [`stream`](crate::stream) module.
//!
//! # Examples
//!
//! ```rust
//! use pho::slice;
//! use pho::option::Optional;
//!
//! let numbers = [1, 2, 3, 4];
//! assert_eq!(slice::filter(&numbers, |n| n % 2 == 0), vec![2, 4]);
//! assert_eq!(slice::find_last(&numbers, |n| n % 2 == 0), Optional::some(4));
//! assert_eq!(slice::flat_map(&numbers[..2], |n| vec![*n; 2]), vec![1, 1, 2, 2]);
//! ```

mod helpers;

pub use helpers::{filter, filter_nil, find_first, find_last, flat_map, flatten, for_each, map};
