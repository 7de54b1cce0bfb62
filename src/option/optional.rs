//! The `Optional<T>` type.

use std::fmt;

use super::EmptyError;

/// A value that may be absent.
///
/// `Optional<T>` is either `Some(T)`, holding exactly one value, or `None`.
/// It is a plain value type: constructed once and never mutated by the
/// combinators, which consume `self` and return a new container.
///
/// # Type Parameters
///
/// * `T` - The type of the held value
///
/// # Examples
///
/// ```rust
/// use pho::option::Optional;
///
/// let present = Optional::some(5);
/// let absent: Optional<i32> = Optional::none();
///
/// assert_eq!(present.map(|x| x * 2), Optional::some(10));
/// assert_eq!(absent.map(|x| x * 2), Optional::none());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Optional<T> {
    /// The empty variant.
    None,
    /// The populated variant.
    Some(T),
}

impl<T> Optional<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates an `Optional` holding `value`.
    #[inline]
    pub const fn some(value: T) -> Self {
        Self::Some(value)
    }

    /// Creates an empty `Optional`.
    #[inline]
    pub const fn none() -> Self {
        Self::None
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if a value is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pho::option::Optional;
    ///
    /// assert!(Optional::some(1).is_some());
    /// assert!(!Optional::<i32>::none().is_some());
    /// ```
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_none(&self) -> bool {
        !self.is_some()
    }

    // =========================================================================
    // Reference Access
    // =========================================================================

    /// Converts from `&Optional<T>` to `Optional<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Self::Some(value) => Optional::Some(value),
            Self::None => Optional::None,
        }
    }

    /// Converts from `&mut Optional<T>` to `Optional<&mut T>`.
    #[inline]
    pub fn as_mut(&mut self) -> Optional<&mut T> {
        match self {
            Self::Some(value) => Optional::Some(value),
            Self::None => Optional::None,
        }
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the held value, consuming the optional.
    ///
    /// Check [`is_some`](Self::is_some) first, or use
    /// [`or_else`](Self::or_else) to supply a default instead.
    ///
    /// # Panics
    ///
    /// Panics if the optional is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pho::option::Optional;
    ///
    /// assert_eq!(Optional::some("value").unwrap(), "value");
    /// ```
    ///
    /// ```rust,should_panic
    /// use pho::option::Optional;
    ///
    /// let empty: Optional<i32> = Optional::none();
    /// empty.unwrap(); // panics
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => panic!("called `Optional::unwrap()` on a `None` value"),
        }
    }

    /// Returns the held value, panicking with `message` if the optional is empty.
    ///
    /// # Panics
    ///
    /// Panics with `message` if the optional is empty.
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => panic!("{message}"),
        }
    }

    /// Returns the held value, or `default` if the optional is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pho::option::Optional;
    ///
    /// assert_eq!(Optional::some(3).or_else(7), 3);
    /// assert_eq!(Optional::none().or_else(7), 7);
    /// ```
    #[inline]
    pub fn or_else(self, default: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => default,
        }
    }

    /// Returns the held value, or computes one with `function` if empty.
    ///
    /// `function` is only called when the optional is empty.
    #[inline]
    pub fn or_else_with<F>(self, function: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(value) => value,
            Self::None => function(),
        }
    }

    /// Calls `procedure` with the held value.
    ///
    /// Returns [`EmptyError`] without calling `procedure` when the optional
    /// is empty.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyError`] if there is no value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pho::option::{EmptyError, Optional};
    ///
    /// let mut seen = Vec::new();
    /// assert_eq!(Optional::some(1).use_value(|x| seen.push(x)), Ok(()));
    /// assert_eq!(Optional::none().use_value(|x| seen.push(x)), Err(EmptyError));
    /// assert_eq!(seen, vec![1]);
    /// ```
    #[inline]
    pub fn use_value<F>(self, procedure: F) -> Result<(), EmptyError>
    where
        F: FnOnce(T),
    {
        match self {
            Self::Some(value) => {
                procedure(value);
                Ok(())
            }
            Self::None => Err(EmptyError),
        }
    }

    /// Converts into a standard library `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Some(value) => Some(value),
            Self::None => None,
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies `function` to the held value.
    ///
    /// Returns `Some(function(value))`, or `None` of the new type if empty.
    /// `function` is never called on an empty optional. Use
    /// [`then`](Self::then) when `function` itself returns an `Optional`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pho::option::Optional;
    ///
    /// assert_eq!(Optional::some(2).map(|x| x.to_string()), Optional::some("2".to_string()));
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => Optional::Some(function(value)),
            Self::None => Optional::None,
        }
    }

    /// Applies `function`, which returns an `Optional`, and flattens the result.
    ///
    /// Where [`map`](Self::map) would produce an `Optional<Optional<U>>`,
    /// `then` produces an `Optional<U>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pho::option::Optional;
    ///
    /// assert_eq!(Optional::some(5).then(|x| Optional::some(x + 1)), Optional::some(6));
    /// assert_eq!(Optional::some(5).then(|_| Optional::<i32>::none()), Optional::none());
    /// ```
    #[inline]
    pub fn then<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => Optional::None,
        }
    }

    /// Keeps the value only if `predicate` holds for it.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) if predicate(&value) => Self::Some(value),
            _ => Self::None,
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts the held value into a broader type.
    ///
    /// The target only needs to be reachable through [`Into`], so a
    /// narrow value can be handed to code expecting a wider one without a
    /// runtime check.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pho::option::Optional;
    ///
    /// let narrow: Optional<u8> = Optional::some(200);
    /// let wide: Optional<u32> = narrow.cast();
    /// assert_eq!(wide, Optional::some(200_u32));
    ///
    /// let boxed: Optional<Box<dyn std::error::Error>> = Optional::some("failure").cast();
    /// assert_eq!(boxed.unwrap().to_string(), "failure");
    /// ```
    #[inline]
    pub fn cast<U>(self) -> Optional<U>
    where
        T: Into<U>,
    {
        self.map(Into::into)
    }

    /// Attempts to convert the held value into another type.
    ///
    /// An empty optional converts to an empty optional of the target type.
    ///
    /// # Errors
    ///
    /// Returns the conversion error if the held value does not fit the target.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pho::option::Optional;
    ///
    /// assert_eq!(Optional::some(300_i32).try_cast::<u8>().is_err(), true);
    /// assert_eq!(Optional::some(30_i32).try_cast::<u8>(), Ok(Optional::some(30_u8)));
    /// ```
    pub fn try_cast<U>(self) -> Result<Optional<U>, <T as TryInto<U>>::Error>
    where
        T: TryInto<U>,
    {
        match self {
            Self::Some(value) => value.try_into().map(Optional::Some),
            Self::None => Ok(Optional::None),
        }
    }
}

// =============================================================================
// Default-based Operations
// =============================================================================

impl<T: Default> Optional<T> {
    /// Returns the held value, or `T::default()` if empty.
    #[inline]
    pub fn unwrap_or_default(self) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => T::default(),
        }
    }
}

impl<T> Default for Optional<T> {
    /// Returns an empty optional.
    fn default() -> Self {
        Self::None
    }
}

// =============================================================================
// Debug / Display Implementations
// =============================================================================

impl<T: fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => formatter.debug_tuple("Some").field(value).finish(),
            Self::None => formatter.write_str("None"),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => write!(formatter, "Some({value})"),
            Self::None => formatter.write_str("None"),
        }
    }
}

// =============================================================================
// From / IntoIterator Implementations
// =============================================================================

impl<T> From<Option<T>> for Optional<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Some(value),
            None => Self::None,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    #[inline]
    fn from(optional: Optional<T>) -> Self {
        optional.into_option()
    }
}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

// Thread-safety follows the held value; nothing is shared between instances.
static_assertions::assert_impl_all!(Optional<i32>: Send, Sync, Copy);
static_assertions::assert_not_impl_any!(Optional<std::rc::Rc<i32>>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_optional_some_construction() {
        let value = Optional::some(42);
        assert!(value.is_some());
        assert!(!value.is_none());
    }

    #[rstest]
    fn test_optional_none_construction() {
        let value: Optional<i32> = Optional::none();
        assert!(value.is_none());
        assert!(!value.is_some());
    }

    #[rstest]
    fn test_map_skips_function_on_none() {
        let calls = Cell::new(0);
        let result = Optional::<i32>::none().map(|x| {
            calls.set(calls.get() + 1);
            x + 1
        });
        assert_eq!(result, Optional::none());
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    #[case(Optional::some(4), Optional::some(4))]
    #[case(Optional::some(3), Optional::none())]
    #[case(Optional::none(), Optional::none())]
    fn test_filter_keeps_matching_value(
        #[case] input: Optional<i32>,
        #[case] expected: Optional<i32>,
    ) {
        assert_eq!(input.filter(|x| x % 2 == 0), expected);
    }

    #[rstest]
    fn test_option_conversion_roundtrip() {
        let optional: Optional<i32> = Some(7).into();
        assert_eq!(optional, Optional::some(7));
        let option: Option<i32> = optional.into();
        assert_eq!(option, Some(7));

        let empty: Optional<i32> = None.into();
        assert_eq!(Option::<i32>::from(empty), None);
    }

    #[rstest]
    #[case(None, Some(0))]
    #[case(Some(1), Some(2))]
    #[case(Some(3), None)]
    #[case(None, None)]
    fn test_ordering_matches_option(#[case] left: Option<i32>, #[case] right: Option<i32>) {
        assert_eq!(Optional::from(left).cmp(&Optional::from(right)), left.cmp(&right));
    }

    #[rstest]
    fn test_display_and_debug() {
        assert_eq!(format!("{}", Optional::some(1)), "Some(1)");
        assert_eq!(format!("{}", Optional::<i32>::none()), "None");
        assert_eq!(format!("{:?}", Optional::some("a")), "Some(\"a\")");
    }

    #[rstest]
    #[should_panic(expected = "called `Optional::unwrap()` on a `None` value")]
    fn test_unwrap_on_none_panics() {
        let _ = Optional::<i32>::none().unwrap();
    }
}
