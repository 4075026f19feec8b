//! Shared test utilities and strategies.

#![allow(dead_code)]

use proptest::prelude::*;
use requisite::{require_greater_than, Result};

// Re-export canonical test utilities from requisite::testing
pub use requisite::testing::{assert_invalid, assert_missing, message_of};

// ============================================================================
// STRATEGIES
// ============================================================================

/// Labels that pass `require_name`.
pub fn label_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z_]{0,11}").unwrap()
}

/// Labels that are empty or whitespace only.
pub fn blank_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ \t\n]{0,4}").unwrap()
}

/// A lower bound and an upper bound with `minimum <= maximum`.
pub fn ordered_pair_strategy() -> impl Strategy<Value = (i32, i32)> {
    (-1000i32..1000, 0i32..500).prop_map(|(minimum, width)| (minimum, minimum + width))
}

/// Unicode strings, including multi-byte scripts.
pub fn text_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::string::string_regex("[a-z ]{0,12}").unwrap(),
        prop::sample::select(vec![
            "café".to_string(),
            "naïve".to_string(),
            "తెలుగు".to_string(),
            "harīṣh".to_string(),
        ]),
    ]
}

// ============================================================================
// CHECKS
// ============================================================================

/// Element check used across aggregate tests.
pub fn greater_than_two(element: &i32) -> Result<i32> {
    require_greater_than(*element, 2, "number")
}
