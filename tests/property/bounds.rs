//! Boundary and partition properties of the ordered-bound checks.

use super::common::ordered_pair_strategy;
use proptest::prelude::*;
use requisite::{
    require_bound, require_bound_exclusive, require_bound_inclusive,
    require_bound_minimum_exclusive_maximum_inclusive,
    require_bound_minimum_inclusive_maximum_exclusive, require_equal, require_greater_than,
    require_greater_than_or_equal, require_less_than, require_less_than_or_equal, Bound,
};

// ============================================================================
// SINGLE-SIDED
// ============================================================================

proptest! {
    #[test]
    fn prop_single_sided_iff(v in any::<i32>(), b in any::<i32>()) {
        prop_assert_eq!(require_less_than(v, b, "v").is_ok(), v < b);
        prop_assert_eq!(require_less_than_or_equal(v, b, "v").is_ok(), v <= b);
        prop_assert_eq!(require_equal(v, b, "v").is_ok(), v == b);
        prop_assert_eq!(require_greater_than_or_equal(v, b, "v").is_ok(), v >= b);
        prop_assert_eq!(require_greater_than(v, b, "v").is_ok(), v > b);
    }

    /// Success hands back exactly the input.
    #[test]
    fn prop_success_is_identity(v in any::<i64>()) {
        prop_assert_eq!(require_less_than_or_equal(v, v, "v"), Ok(v));
        prop_assert_eq!(require_greater_than_or_equal(v, v, "v"), Ok(v));
        prop_assert_eq!(require_equal(v, v, "v"), Ok(v));
    }

    /// Strict and non-strict shapes differ only at the bound itself.
    #[test]
    fn prop_strict_excludes_bound(b in any::<i32>()) {
        prop_assert!(require_less_than(b, b, "v").is_err());
        prop_assert!(require_greater_than(b, b, "v").is_err());
        prop_assert!(require_less_than_or_equal(b, b, "v").is_ok());
        prop_assert!(require_greater_than_or_equal(b, b, "v").is_ok());
    }

    #[test]
    fn prop_failure_message_shows_value(v in 10i32..1000, b in -1000i32..10) {
        let error = require_less_than(v, b, "count").unwrap_err();
        prop_assert_eq!(
            error.to_string(),
            format!("count must be less than '{}'; it is '{}'.", b, v)
        );
    }
}

// ============================================================================
// TWO-SIDED
// ============================================================================

proptest! {
    #[test]
    fn prop_two_sided_iff(v in -2000i32..2000, (min, max) in ordered_pair_strategy()) {
        prop_assert_eq!(require_bound_exclusive(v, min, max, "v").is_ok(), min < v && v < max);
        prop_assert_eq!(require_bound_inclusive(v, min, max, "v").is_ok(), min <= v && v <= max);
        prop_assert_eq!(
            require_bound_minimum_exclusive_maximum_inclusive(v, min, max, "v").is_ok(),
            min < v && v <= max
        );
        prop_assert_eq!(
            require_bound_minimum_inclusive_maximum_exclusive(v, min, max, "v").is_ok(),
            min <= v && v < max
        );
    }

    /// below, within and above cover every value exactly once.
    #[test]
    fn prop_half_open_partitions_domain(v in -2000i32..2000, (min, max) in ordered_pair_strategy()) {
        let below = require_less_than(v, min, "v").is_ok();
        let within = require_bound_minimum_inclusive_maximum_exclusive(v, min, max, "v").is_ok();
        let above = require_greater_than_or_equal(v, max, "v").is_ok();

        prop_assert_eq!([below, within, above].iter().filter(|b| **b).count(), 1);
    }

    #[test]
    fn prop_inclusive_is_union_of_half_open(v in -2000i32..2000, (min, max) in ordered_pair_strategy()) {
        let inclusive = require_bound_inclusive(v, min, max, "v").is_ok();
        let left = require_bound_minimum_inclusive_maximum_exclusive(v, min, max, "v").is_ok();
        let right = require_bound_minimum_exclusive_maximum_inclusive(v, min, max, "v").is_ok();

        prop_assert_eq!(inclusive, left || right || v == min);
    }

    /// The named shapes agree with the generic `Bound` check.
    #[test]
    fn prop_named_shapes_match_bound(v in any::<i16>(), min in any::<i16>(), max in any::<i16>()) {
        prop_assert_eq!(
            require_bound_exclusive(v, min, max, "v"),
            require_bound(v, Bound::Exclusive { minimum: min, maximum: max }, "v")
        );
        prop_assert_eq!(
            require_bound_inclusive(v, min, max, "v"),
            require_bound(v, Bound::Inclusive { minimum: min, maximum: max }, "v")
        );
    }

    #[test]
    fn prop_floats_follow_partial_ord(v in -1e6f64..1e6, b in -1e6f64..1e6) {
        prop_assert_eq!(require_less_than(v, b, "x").is_ok(), v < b);
        prop_assert!(require_less_than(f64::NAN, b, "x").is_err());
        prop_assert!(require_greater_than_or_equal(f64::NAN, b, "x").is_err());
    }
}
