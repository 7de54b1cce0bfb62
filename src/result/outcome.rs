//! The `Outcome<T, E>` type.

use std::fmt;

use super::BoxError;

/// A success value or an error.
///
/// `Outcome<T, E>` is either `Ok(T)` or `Err(E)`, never both. The error
/// type defaults to [`BoxError`] so that any error can be carried without
/// naming its type.
///
/// # Type Parameters
///
/// * `T` - The type of the success value
/// * `E` - The type of the error (defaults to [`BoxError`])
///
/// # Examples
///
/// ```rust
/// use pho::result::Outcome;
///
/// let parsed: Outcome<i32, std::num::ParseIntError> = Outcome::wrap("21".parse::<i32>());
/// assert_eq!(parsed.map(|n| n * 2).must_unwrap(), 42);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<T, E = BoxError> {
    /// The success variant.
    Ok(T),
    /// The failure variant.
    Err(E),
}

impl<T, E> Outcome<T, E> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a successful outcome.
    #[inline]
    pub const fn ok(value: T) -> Self {
        Self::Ok(value)
    }

    /// Creates a failed outcome.
    #[inline]
    pub const fn err(error: E) -> Self {
        Self::Err(error)
    }

    /// Wraps a standard `Result` into an outcome.
    ///
    /// This is the adapter for values coming from ordinary fallible calls.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pho::result::Outcome;
    ///
    /// let opened = Outcome::wrap(std::fs::File::open("/definitely/not/here"));
    /// assert!(opened.is_err());
    /// ```
    #[inline]
    pub fn wrap(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Err(error),
        }
    }

    /// Builds an outcome from a value and an optional error.
    ///
    /// If `error` is present the outcome is `Err(error)` and `value` is
    /// dropped; otherwise it is `Ok(value)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pho::result::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::from_pair(7, None), Outcome::Ok(7));
    /// assert_eq!(Outcome::from_pair(0, Some("broken")), Outcome::Err("broken"));
    /// ```
    #[inline]
    pub fn from_pair(value: T, error: Option<E>) -> Self {
        match error {
            Some(error) => Self::Err(error),
            None => Self::Ok(value),
        }
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a success.
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` if this is a failure.
    #[inline]
    pub const fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Converts from `&Outcome<T, E>` to `Outcome<&T, &E>`.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Converts the outcome back into a standard `Result`.
    ///
    /// This never fails: deciding what to do with an error is left to the
    /// caller.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pho::result::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::err("no".to_string());
    /// match outcome.into_result() {
    ///     Ok(value) => println!("{value}"),
    ///     Err(error) => assert_eq!(error, "no"),
    /// }
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(error) => Err(error),
        }
    }

    /// Returns the success value, if any, discarding the error.
    #[inline]
    pub fn ok_value(self) -> Option<T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(_) => None,
        }
    }

    /// Returns the error, if any, discarding the success value.
    #[inline]
    pub fn err_value(self) -> Option<E> {
        match self {
            Self::Ok(_) => None,
            Self::Err(error) => Some(error),
        }
    }

    /// Returns the success value, or `default` on failure.
    #[inline]
    pub fn or_else(self, default: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => default,
        }
    }

    /// Calls `procedure` with the success value.
    ///
    /// On failure `procedure` is not called and the stored error is returned.
    ///
    /// # Errors
    ///
    /// Returns the stored error if this is `Err`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pho::result::Outcome;
    ///
    /// let mut total = 0;
    /// assert_eq!(Outcome::<i32, &str>::ok(5).use_value(|n| total += n), Ok(()));
    /// assert_eq!(Outcome::<i32, &str>::err("bad").use_value(|n| total += n), Err("bad"));
    /// assert_eq!(total, 5);
    /// ```
    #[inline]
    pub fn use_value<F>(self, procedure: F) -> Result<(), E>
    where
        F: FnOnce(T),
    {
        match self {
            Self::Ok(value) => {
                procedure(value);
                Ok(())
            }
            Self::Err(error) => Err(error),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies `function` to the success value; errors pass through untouched.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(function(value)),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Applies `function` to the error, typically to attach context.
    ///
    /// A success passes through untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pho::result::Outcome;
    ///
    /// let failed: Outcome<i32, String> = Outcome::err("timeout".to_string());
    /// let described = failed.map_err(|error| format!("fetching config: {error}"));
    /// assert_eq!(described, Outcome::err("fetching config: timeout".to_string()));
    /// ```
    #[inline]
    pub fn map_err<E2, F>(self, function: F) -> Outcome<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(function(error)),
        }
    }

    /// Chains a fallible step written against the standard `Result`.
    ///
    /// On success `function` is called and its `Result` is wrapped into an
    /// outcome; on failure the original error is propagated and `function`
    /// is not called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pho::result::Outcome;
    ///
    /// let doubled = Outcome::<i32, String>::ok(5).then_wrap(|x| Ok(x * 2));
    /// assert_eq!(doubled, Outcome::ok(10));
    /// ```
    #[inline]
    pub fn then_wrap<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        match self {
            Self::Ok(value) => Outcome::wrap(function(value)),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Chains a step that returns an outcome, flattening the result.
    #[inline]
    pub fn then<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Ok(value) => function(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts the success value into a broader type.
    ///
    /// A failure short-circuits and keeps its original error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pho::result::Outcome;
    /// use std::error::Error;
    ///
    /// let message: Outcome<&str, std::io::Error> = Outcome::ok("not found");
    /// let boxed: Outcome<Box<dyn Error>, std::io::Error> = message.cast();
    /// assert_eq!(boxed.must_unwrap().to_string(), "not found");
    ///
    /// let small: Outcome<u16, String> = Outcome::ok(7);
    /// assert_eq!(small.cast::<u64>(), Outcome::ok(7));
    /// ```
    #[inline]
    pub fn cast<U>(self) -> Outcome<U, E>
    where
        T: Into<U>,
    {
        self.map(Into::into)
    }

    /// Attempts to convert the success value into another type.
    ///
    /// A failed conversion becomes an `Err` through `From` on the error
    /// type. A failure short-circuits and keeps its original error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pho::result::Outcome;
    ///
    /// let wide: Outcome<i64> = Outcome::ok(1_000);
    /// assert!(wide.try_cast::<u8>().is_err());
    /// ```
    pub fn try_cast<U>(self) -> Outcome<U, E>
    where
        T: TryInto<U>,
        E: From<<T as TryInto<U>>::Error>,
    {
        match self {
            Self::Ok(value) => match value.try_into() {
                Ok(converted) => Outcome::Ok(converted),
                Err(error) => Outcome::Err(E::from(error)),
            },
            Self::Err(error) => Outcome::Err(error),
        }
    }
}

// =============================================================================
// Panicking Extraction
// =============================================================================

impl<T, E: fmt::Debug> Outcome<T, E> {
    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics with the stored error as the cause if this is `Err`.
    ///
    /// # Examples
    ///
    /// ```rust,should_panic
    /// use pho::result::Outcome;
    ///
    /// let failed: Outcome<i32, &str> = Outcome::err("disk full");
    /// failed.must_unwrap(); // panics mentioning "disk full"
    /// ```
    #[inline]
    #[track_caller]
    pub fn must_unwrap(self) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => {
                panic!("called `Outcome::must_unwrap()` on an `Err` value: {error:?}")
            }
        }
    }
}

// =============================================================================
// Default-based Operations
// =============================================================================

impl<T: Default, E> Outcome<T, E> {
    /// Returns the success value, or `T::default()` on failure.
    #[inline]
    pub fn unwrap_or_default(self) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => T::default(),
        }
    }
}

// =============================================================================
// Debug / Display Implementations
// =============================================================================

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Outcome<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok(value) => formatter.debug_tuple("Ok").field(value).finish(),
            Self::Err(error) => formatter.debug_tuple("Err").field(error).finish(),
        }
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Outcome<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok(value) => write!(formatter, "Ok({value})"),
            Self::Err(error) => write!(formatter, "Err({error})"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        Self::wrap(result)
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

static_assertions::assert_impl_all!(Outcome<String>: Send, Sync);
static_assertions::assert_not_impl_any!(Outcome<std::rc::Rc<i32>>: Send, Sync);
