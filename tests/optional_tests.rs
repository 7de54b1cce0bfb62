//! Unit tests for the Optional<T> container.
//!
//! Optional represents a value that may be absent:
//! - `Some(T)`: exactly one value
//! - `None`: nothing
//!
//! Absence short-circuits `map`/`then` chains until it is resolved with
//! `or_else`, `use_value` or a checked `unwrap`.

#![cfg(feature = "option")]

use pho::option::{self, EmptyError, Optional};
use rstest::rstest;
use std::cell::Cell;

// =============================================================================
// Construction and Type Checking
// =============================================================================

#[rstest]
fn some_is_some() {
    let value = option::some(5);
    assert!(value.is_some());
    assert!(!value.is_none());
}

#[rstest]
fn none_is_none() {
    let value = option::none::<String>();
    assert!(value.is_none());
    assert!(!value.is_some());
}

#[rstest]
fn default_is_none() {
    assert_eq!(Optional::<u8>::default(), Optional::none());
}

// =============================================================================
// Value Extraction
// =============================================================================

#[rstest]
fn unwrap_returns_value() {
    assert_eq!(Optional::some("held").unwrap(), "held");
}

#[rstest]
#[should_panic(expected = "called `Optional::unwrap()` on a `None` value")]
fn unwrap_on_none_panics() {
    let _ = Optional::<i32>::none().unwrap();
}

#[rstest]
#[should_panic(expected = "configuration missing")]
fn expect_on_none_panics_with_message() {
    let _ = Optional::<i32>::none().expect("configuration missing");
}

#[rstest]
#[case(Optional::some(3), 3)]
#[case(Optional::none(), 9)]
fn or_else_defaults_when_empty(#[case] input: Optional<i32>, #[case] expected: i32) {
    assert_eq!(input.or_else(9), expected);
}

#[rstest]
fn or_else_with_is_lazy() {
    let calls = Cell::new(0);
    let compute = || {
        calls.set(calls.get() + 1);
        0
    };
    assert_eq!(Optional::some(1).or_else_with(compute), 1);
    assert_eq!(calls.get(), 0);
    assert_eq!(Optional::none().or_else_with(compute), 0);
    assert_eq!(calls.get(), 1);
}

#[rstest]
fn unwrap_or_default_on_none() {
    assert_eq!(Optional::<String>::none().unwrap_or_default(), String::new());
}

// =============================================================================
// Use
// =============================================================================

#[rstest]
fn use_value_invokes_procedure_when_present() {
    let seen = Cell::new(0);
    assert_eq!(Optional::some(4).use_value(|x| seen.set(x)), Ok(()));
    assert_eq!(seen.get(), 4);
}

#[rstest]
fn use_value_reports_empty_without_invoking() {
    let calls = Cell::new(0);
    let result = Optional::<i32>::none().use_value(|_| calls.set(calls.get() + 1));
    assert_eq!(result, Err(EmptyError));
    assert_eq!(calls.get(), 0);
    assert_eq!(result.unwrap_err().to_string(), "empty");
}

// =============================================================================
// Map and Then
// =============================================================================

#[rstest]
fn map_none_does_not_invoke_function() {
    let calls = Cell::new(0);
    let mapped = Optional::<i32>::none().map(|x| {
        calls.set(calls.get() + 1);
        x.to_string()
    });
    assert_eq!(mapped, Optional::<String>::none());
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn map_changes_type() {
    assert_eq!(Optional::some(12).map(|x| x.to_string()), Optional::some("12".to_string()));
}

#[rstest]
fn then_flattens_some() {
    assert_eq!(Optional::some(5).then(|x| Optional::some(x + 1)), Optional::some(6));
}

#[rstest]
fn then_flattens_none() {
    assert_eq!(Optional::some(5).then(|_| Optional::<i32>::none()), Optional::none());
}

#[rstest]
fn then_on_none_does_not_invoke_function() {
    let calls = Cell::new(0);
    let result = Optional::<i32>::none().then(|x| {
        calls.set(calls.get() + 1);
        Optional::some(x)
    });
    assert!(result.is_none());
    assert_eq!(calls.get(), 0);
}

// =============================================================================
// Cast
// =============================================================================

#[rstest]
fn cast_widens_value() {
    let narrow: Optional<u16> = Optional::some(65_000);
    assert_eq!(narrow.cast::<u64>(), Optional::some(65_000_u64));
}

#[rstest]
fn cast_none_stays_none() {
    assert_eq!(Optional::<u16>::none().cast::<u64>(), Optional::none());
}

#[rstest]
fn cast_to_trait_object() {
    let boxed: Optional<Box<dyn std::error::Error + Send + Sync>> =
        Optional::some(String::from("broken")).cast();
    assert_eq!(boxed.map(|error| error.to_string()), Optional::some("broken".to_string()));
}

#[rstest]
#[case(Optional::some(255_i32), Ok(Optional::some(255_u8)))]
#[case(Optional::none(), Ok(Optional::none()))]
fn try_cast_in_range(
    #[case] input: Optional<i32>,
    #[case] expected: Result<Optional<u8>, std::num::TryFromIntError>,
) {
    assert_eq!(input.try_cast::<u8>(), expected);
}

#[rstest]
fn try_cast_out_of_range() {
    assert!(Optional::some(256_i32).try_cast::<u8>().is_err());
}

// =============================================================================
// Conversions
// =============================================================================

#[rstest]
fn iterates_zero_or_one_values() {
    assert_eq!(Optional::some(1).into_iter().collect::<Vec<_>>(), vec![1]);
    assert_eq!(Optional::<i32>::none().into_iter().count(), 0);
}

#[rstest]
fn references_do_not_consume() {
    let mut value = Optional::some(String::from("a"));
    assert_eq!(value.as_ref().map(String::len), Optional::some(1));
    value.as_mut().use_value(|text| text.push('b')).unwrap();
    assert_eq!(value, Optional::some("ab".to_string()));
}
