// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sign checks and text parsing for numbers.
//!
//! [`Number`] is implemented for every primitive integer and float, and for
//! `rust_decimal::Decimal` with the `decimal` feature. Values are compared by
//! reference, so a non-`Copy` type only needs `Clone`.
//!
//! ```
//! use requisite::number::{require_number, require_positive};
//!
//! let port: u16 = require_number("8080", "port").unwrap();
//! assert_eq!(require_positive(port, "port"), Ok(8080));
//!
//! let error = require_number::<i32>("1.1", "count").unwrap_err();
//! assert_eq!(error.to_string(), "count must be an i32; it is '1.1'.");
//! ```

use std::fmt;
use std::str::FromStr;

use crate::assertion::require_with;
use crate::error::{RequireError, Result};
use crate::name::{require_name, IntoName};

/// A number with a zero and a printable type name.
///
/// Comparison goes through `PartialOrd`, so a NaN float fails every sign
/// check.
pub trait Number: PartialOrd + fmt::Display + FromStr + Clone {
    /// Name used in parse failures, e.g. `"u8"`.
    const TYPE_NAME: &'static str;

    fn zero() -> Self;

    /// [`Self::TYPE_NAME`] with its indefinite article: `"an i32"`, `"a u8"`.
    fn type_phrase() -> String {
        format!("{} {}", indefinite_article(Self::TYPE_NAME), Self::TYPE_NAME)
    }
}

/// Article for a type name read aloud: `i`, `f` and other vowel-sounding
/// letters take "an"; `u` reads "you" and takes "a".
fn indefinite_article(type_name: &str) -> &'static str {
    match type_name.chars().next() {
        Some('a' | 'e' | 'i' | 'o' | 'f' | 'A' | 'E' | 'I' | 'O') => "an",
        _ => "a",
    }
}

macro_rules! impl_number {
    ($($ty:ty => $zero:expr),* $(,)?) => {
        $(
            impl Number for $ty {
                const TYPE_NAME: &'static str = stringify!($ty);

                fn zero() -> Self {
                    $zero
                }
            }
        )*
    };
}

impl_number! {
    i8 => 0, i16 => 0, i32 => 0, i64 => 0, i128 => 0, isize => 0,
    u8 => 0, u16 => 0, u32 => 0, u64 => 0, u128 => 0, usize => 0,
    f32 => 0.0, f64 => 0.0,
}

#[cfg(feature = "decimal")]
impl Number for rust_decimal::Decimal {
    const TYPE_NAME: &'static str = "Decimal";

    fn zero() -> Self {
        rust_decimal::Decimal::ZERO
    }
}

/// Shared shape of the five sign checks.
fn require_sign<'n, N: Number>(
    value: N,
    holds: impl FnOnce(&N) -> bool,
    wording: &str,
    name: impl IntoName<'n>,
) -> Result<N> {
    let name = require_name(name)?;

    let condition = holds(&value);
    require_with(condition, value, |v| {
        format!("{} must be {}; it is '{}'.", name, wording, v)
    })
}

pub fn require_positive<'n, N: Number>(value: N, name: impl IntoName<'n>) -> Result<N> {
    require_sign(value, |v| *v > N::zero(), "positive", name)
}

pub fn require_zero_or_positive<'n, N: Number>(value: N, name: impl IntoName<'n>) -> Result<N> {
    require_sign(value, |v| *v >= N::zero(), "zero or positive", name)
}

pub fn require_zero<'n, N: Number>(value: N, name: impl IntoName<'n>) -> Result<N> {
    require_sign(value, |v| *v == N::zero(), "zero", name)
}

pub fn require_zero_or_negative<'n, N: Number>(value: N, name: impl IntoName<'n>) -> Result<N> {
    require_sign(value, |v| *v <= N::zero(), "zero or negative", name)
}

pub fn require_negative<'n, N: Number>(value: N, name: impl IntoName<'n>) -> Result<N> {
    require_sign(value, |v| *v < N::zero(), "negative", name)
}

/// Parse `text` as an `N`.
///
/// Parsing is the type's own `FromStr`: no trimming, no locale handling, and
/// out-of-range integers fail.
///
/// # Errors
/// - label errors from [`require_name`]
/// - `ArgumentInvalid`: `"{name} must be {type_phrase}; it is '{text}'."`
pub fn require_number<'n, N: Number>(text: &str, name: impl IntoName<'n>) -> Result<N> {
    let name = require_name(name)?;

    text.parse::<N>().map_err(|_| {
        #[cfg(feature = "tracing")]
        tracing::trace!(label = name, text, type_name = N::TYPE_NAME, "number parse failed");

        RequireError::invalid(format!(
            "{} must be {}; it is '{}'.",
            name,
            N::type_phrase(),
            text
        ))
    })
}
