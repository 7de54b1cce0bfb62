//! Eager filter / map / flatten / find functions.

use crate::option::Optional;

/// Returns the elements for which `predicate` holds, in their original order.
///
/// # Examples
///
/// ```rust
/// use pho::slice;
///
/// let words = ["apple", "", "pear"];
/// assert_eq!(slice::filter(&words, |word| !word.is_empty()), vec!["apple", "pear"]);
/// ```
pub fn filter<T, P>(slice: &[T], mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    let mut filtered = Vec::with_capacity(slice.len() / 2);
    for item in slice {
        if predicate(item) {
            filtered.push(item.clone());
        }
    }
    filtered
}

/// Drops the empty entries, unwrapping the rest.
///
/// # Examples
///
/// ```rust
/// use pho::slice;
///
/// assert_eq!(slice::filter_nil(&[Some(1), None, Some(3)]), vec![1, 3]);
/// ```
pub fn filter_nil<T: Clone>(slice: &[Option<T>]) -> Vec<T> {
    slice.iter().flatten().cloned().collect()
}

/// Returns the first element, scanning front to back, that satisfies `predicate`.
///
/// # Examples
///
/// ```rust
/// use pho::slice;
/// use pho::option::Optional;
///
/// assert_eq!(slice::find_first(&[1, 2, 3, 4], |n| n % 2 == 0), Optional::some(2));
/// assert_eq!(slice::find_first(&[1, 3, 5], |n| n % 2 == 0), Optional::none());
/// ```
pub fn find_first<T, P>(slice: &[T], mut predicate: P) -> Optional<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    for item in slice {
        if predicate(item) {
            return Optional::some(item.clone());
        }
    }
    Optional::none()
}

/// Returns the last element, scanning back to front, that satisfies `predicate`.
pub fn find_last<T, P>(slice: &[T], mut predicate: P) -> Optional<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    for item in slice.iter().rev() {
        if predicate(item) {
            return Optional::some(item.clone());
        }
    }
    Optional::none()
}

/// Applies `function` to every element, keeping length and order.
pub fn map<T, U, F>(slice: &[T], function: F) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    slice.iter().map(function).collect()
}

/// Concatenates the inner vectors in outer order.
///
/// # Examples
///
/// ```rust
/// use pho::slice;
///
/// assert_eq!(slice::flatten(&[vec![1, 2], vec![], vec![3]]), vec![1, 2, 3]);
/// ```
pub fn flatten<T: Clone>(slice: &[Vec<T>]) -> Vec<T> {
    let mut flattened = Vec::with_capacity(slice.iter().map(Vec::len).sum());
    for inner in slice {
        flattened.extend_from_slice(inner);
    }
    flattened
}

/// Equivalent to `flatten(&map(slice, function))`.
pub fn flat_map<T, U, F>(slice: &[T], mut function: F) -> Vec<U>
where
    F: FnMut(&T) -> Vec<U>,
{
    let mut flattened = Vec::with_capacity(slice.len());
    for item in slice {
        flattened.extend(function(item));
    }
    flattened
}

/// Calls `procedure` on each element in order.
pub fn for_each<T, F>(slice: &[T], procedure: F)
where
    F: FnMut(&T),
{
    slice.iter().for_each(procedure);
}
