// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the ordered-bound checks.
//!
//! For any value and any (possibly inverted) pair of bounds, each check must
//! agree with the plain comparison it names, and the half-open shapes must
//! split the domain into below / within / above with no gap or overlap.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use requisite::{
    require_bound_exclusive, require_bound_inclusive,
    require_bound_minimum_exclusive_maximum_inclusive,
    require_bound_minimum_inclusive_maximum_exclusive, require_greater_than_or_equal,
    require_less_than,
};

#[derive(Debug, Arbitrary)]
struct Input {
    value: i64,
    minimum: i64,
    maximum: i64,
}

fuzz_target!(|input: Input| {
    let Input {
        value: v,
        minimum: min,
        maximum: max,
    } = input;

    assert_eq!(
        require_bound_exclusive(v, min, max, "v").is_ok(),
        min < v && v < max
    );
    assert_eq!(
        require_bound_inclusive(v, min, max, "v").is_ok(),
        min <= v && v <= max
    );
    assert_eq!(
        require_bound_minimum_exclusive_maximum_inclusive(v, min, max, "v").is_ok(),
        min < v && v <= max
    );

    let within = require_bound_minimum_inclusive_maximum_exclusive(v, min, max, "v");
    assert_eq!(within.is_ok(), min <= v && v < max);
    if let Ok(returned) = &within {
        assert_eq!(*returned, v);
    }

    // Only an ordered range partitions the domain.
    if min <= max {
        let below = require_less_than(v, min, "v").is_ok();
        let above = require_greater_than_or_equal(v, max, "v").is_ok();
        let regions = [below, within.is_ok(), above];
        assert_eq!(regions.iter().filter(|r| **r).count(), 1);
    }
});
