// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for `require_number`.
//!
//! Arbitrary text must parse or fail with `ArgumentInvalid`, never panic, and
//! a successful parse must agree with the type's own `FromStr`.

#![no_main]

use libfuzzer_sys::fuzz_target;
use requisite::{require_number, ErrorKind, Number};

fn check<N: Number + std::fmt::Debug>(text: &str) {
    match require_number::<N>(text, "value") {
        Ok(parsed) => {
            let expected = text.parse::<N>().ok();
            // NaN never equals itself; only compare comparable values.
            if parsed == parsed {
                assert_eq!(Some(parsed), expected, "parse disagreed for {:?}", text);
            }
        }
        Err(error) => {
            assert_eq!(error.kind(), ErrorKind::ArgumentInvalid);
            assert!(text.parse::<N>().is_err(), "rejected parsable {:?}", text);
            assert_eq!(
                error.to_string(),
                format!("value must be {}; it is '{}'.", N::type_phrase(), text)
            );
        }
    }
}

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    check::<i8>(text);
    check::<u16>(text);
    check::<i32>(text);
    check::<u64>(text);
    check::<i128>(text);
    check::<usize>(text);
    check::<f32>(text);
    check::<f64>(text);
    check::<rust_decimal::Decimal>(text);
});
