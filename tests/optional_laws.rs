#![cfg(feature = "option")]
//! Property-based tests for Optional<T> laws.
//!
//! This module verifies that Optional satisfies:
//!
//! - **Functor Laws**: identity and composition for `map`
//! - **Monad Laws**: left identity, right identity, associativity for `then`
//! - **Defaulting**: `or_else` agrees with the standard `Option::unwrap_or`

use pho::option::Optional;
use proptest::prelude::*;

fn optional_i32() -> impl Strategy<Value = Optional<i32>> {
    any::<Option<i32>>().prop_map(Optional::from)
}

fn half_if_even(n: i32) -> Optional<i32> {
    if n % 2 == 0 { Optional::some(n / 2) } else { Optional::none() }
}

fn decrement_if_positive(n: i32) -> Optional<i32> {
    if n > 0 { Optional::some(n - 1) } else { Optional::none() }
}

// =============================================================================
// Functor Laws
// =============================================================================

proptest! {
    /// Identity Law: map with the identity function returns the original value
    #[test]
    fn prop_optional_identity_law(value in optional_i32()) {
        prop_assert_eq!(value.map(|x| x), value);
    }

    /// Composition Law: mapping composed functions equals composing maps
    #[test]
    fn prop_optional_composition_law(value in optional_i32()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let left = value.map(function1).map(function2);
        let right = value.map(|x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Monad Laws
// =============================================================================

proptest! {
    /// Left Identity: some(a).then(f) == f(a)
    #[test]
    fn prop_optional_left_identity(value in any::<i32>()) {
        prop_assert_eq!(Optional::some(value).then(half_if_even), half_if_even(value));
    }

    /// Right Identity: m.then(some) == m
    #[test]
    fn prop_optional_right_identity(value in optional_i32()) {
        prop_assert_eq!(value.then(Optional::some), value);
    }

    /// Associativity: m.then(f).then(g) == m.then(|x| f(x).then(g))
    #[test]
    fn prop_optional_associativity(value in optional_i32()) {
        let left = value.then(half_if_even).then(decrement_if_positive);
        let right = value.then(|x| half_if_even(x).then(decrement_if_positive));
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Agreement with Option
// =============================================================================

proptest! {
    /// or_else behaves like Option::unwrap_or
    #[test]
    fn prop_or_else_matches_unwrap_or(value in any::<Option<i32>>(), default in any::<i32>()) {
        prop_assert_eq!(Optional::from(value).or_else(default), value.unwrap_or(default));
    }
}
