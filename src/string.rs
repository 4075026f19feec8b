// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! String checks: emptiness, blankness, pattern match and length.
//!
//! Everything is generic over `S: AsRef<str>`, so `&str`, `String`,
//! `Cow<str>` and friends all work and come back unchanged.
//!
//! Length is measured in Unicode scalar values (`chars().count()`), not bytes.
//! The nine length checks are bound accessor checks (`require_*_by`) with
//! [`length`] as the accessor and `"length"` as the field label.

use crate::assertion::require_with;
use crate::bound::{
    require_bound_exclusive_by, require_bound_inclusive_by,
    require_bound_minimum_exclusive_maximum_inclusive_by,
    require_bound_minimum_inclusive_maximum_exclusive_by, require_equal_by,
    require_greater_than_by, require_greater_than_or_equal_by, require_less_than_by,
    require_less_than_or_equal_by,
};
use crate::error::Result;
use crate::name::{is_blank, non_blank_message, require_name, IntoName};

#[cfg(feature = "regex")]
use crate::error::RequireError;
#[cfg(feature = "regex")]
use regex::Regex;

/// Field label used by the length checks.
const LENGTH: &str = "length";

/// Number of Unicode scalar values in `value`.
pub fn length<S: AsRef<str>>(value: &S) -> usize {
    value.as_ref().chars().count()
}

pub fn require_empty<'n, S: AsRef<str>>(value: S, name: impl IntoName<'n>) -> Result<S> {
    let name = require_name(name)?;

    let empty = value.as_ref().is_empty();
    require_with(empty, value, |v| {
        format!("{} must be empty; it is '{}'.", name, v.as_ref())
    })
}

pub fn require_non_empty<'n, S: AsRef<str>>(value: S, name: impl IntoName<'n>) -> Result<S> {
    let name = require_name(name)?;

    let empty = value.as_ref().is_empty();
    require_with(!empty, value, |_| format!("{} must be non-empty.", name))
}

/// Require that `value` is empty or whitespace only.
pub fn require_blank<'n, S: AsRef<str>>(value: S, name: impl IntoName<'n>) -> Result<S> {
    let name = require_name(name)?;

    let blank = is_blank(value.as_ref());
    require_with(blank, value, |v| {
        format!("{} must be blank; it is '{}'.", name, v.as_ref())
    })
}

/// Require that `value` contains at least one non-whitespace character.
pub fn require_non_blank<'n, S: AsRef<str>>(value: S, name: impl IntoName<'n>) -> Result<S> {
    let name = require_name(name)?;

    let blank = is_blank(value.as_ref());
    require_with(!blank, value, |v| non_blank_message(v.as_ref(), name))
}

/// Whether `pattern` matches all of `value`.
///
/// Uses `pattern` exactly as the caller built it, so `RegexBuilder` settings
/// (case folding, size limits, ...) apply. The leftmost-first match has to
/// start at zero and end at the last byte.
#[cfg(feature = "regex")]
fn spans_whole(pattern: &Regex, value: &str) -> bool {
    pattern
        .find(value)
        .is_some_and(|m| m.start() == 0 && m.end() == value.len())
}

/// Require that the whole of `value` matches `pattern`.
///
/// A pattern that only matches part of the value is not enough:
/// `a*` accepts `"aaa"` but rejects `"aab"`. Alternatives are tried
/// leftmost-first, so with overlapping alternatives such as `a|ab` anchor the
/// pattern yourself (`^(?:a|ab)$`) or use [`require_match_str`], which does.
///
/// ```
/// use regex::{Regex, RegexBuilder};
/// use requisite::string::require_match;
///
/// let pattern = Regex::new("a*").unwrap();
/// assert!(require_match("aaa", &pattern, "string").is_ok());
/// assert_eq!(
///     require_match("b", &pattern, "string").unwrap_err().to_string(),
///     "string must match 'a*'; it is 'b'."
/// );
///
/// let folded = RegexBuilder::new("abc").case_insensitive(true).build().unwrap();
/// assert!(require_match("ABC", &folded, "string").is_ok());
/// ```
#[cfg(feature = "regex")]
pub fn require_match<'n, S: AsRef<str>>(
    value: S,
    pattern: &Regex,
    name: impl IntoName<'n>,
) -> Result<S> {
    let name = require_name(name)?;

    let matched = spans_whole(pattern, value.as_ref());
    require_with(matched, value, |v| match_message(name, pattern.as_str(), v.as_ref()))
}

#[cfg(feature = "regex")]
fn match_message(name: &str, pattern: &str, value: &str) -> String {
    format!("{} must match '{}'; it is '{}'.", name, pattern, value)
}

/// Like [`require_match`], compiling `pattern` first.
///
/// The compiled pattern is anchored as `\A(?:pattern)\z`, so every
/// alternative is tried against the whole value: `a|ab` accepts `"ab"`.
///
/// # Errors
/// - `ArgumentInvalid` if `pattern` is empty or does not compile
#[cfg(feature = "regex")]
pub fn require_match_str<'n, S: AsRef<str>>(
    value: S,
    pattern: &str,
    name: impl IntoName<'n>,
) -> Result<S> {
    let pattern = require_non_empty(pattern, "regex")?;
    let name = require_name(name)?;

    let invalid = |e: regex::Error| {
        RequireError::invalid(format!("regex must be valid; it is '{}': {}", pattern, e))
    };
    // Compile the bare pattern first: wrapping can turn `a)(b` into valid syntax.
    Regex::new(pattern).map_err(invalid)?;
    let anchored = Regex::new(&format!(r"\A(?:{})\z", pattern)).map_err(invalid)?;

    let matched = anchored.is_match(value.as_ref());
    require_with(matched, value, |v| match_message(name, pattern, v.as_ref()))
}

// ============================================================================
// LENGTH
// ============================================================================

pub fn require_length_less_than<'n, S: AsRef<str>>(
    value: S,
    maximum: usize,
    name: impl IntoName<'n>,
) -> Result<S> {
    require_less_than_by(value, length, maximum, name, LENGTH)
}

pub fn require_length_less_than_or_equal<'n, S: AsRef<str>>(
    value: S,
    maximum: usize,
    name: impl IntoName<'n>,
) -> Result<S> {
    require_less_than_or_equal_by(value, length, maximum, name, LENGTH)
}

pub fn require_length<'n, S: AsRef<str>>(
    value: S,
    length_exact: usize,
    name: impl IntoName<'n>,
) -> Result<S> {
    require_equal_by(value, length, length_exact, name, LENGTH)
}

pub fn require_length_greater_than_or_equal<'n, S: AsRef<str>>(
    value: S,
    minimum: usize,
    name: impl IntoName<'n>,
) -> Result<S> {
    require_greater_than_or_equal_by(value, length, minimum, name, LENGTH)
}

pub fn require_length_greater_than<'n, S: AsRef<str>>(
    value: S,
    minimum: usize,
    name: impl IntoName<'n>,
) -> Result<S> {
    require_greater_than_by(value, length, minimum, name, LENGTH)
}

pub fn require_length_exclusive<'n, S: AsRef<str>>(
    value: S,
    minimum: usize,
    maximum: usize,
    name: impl IntoName<'n>,
) -> Result<S> {
    require_bound_exclusive_by(value, length, minimum, maximum, name, LENGTH)
}

pub fn require_length_inclusive<'n, S: AsRef<str>>(
    value: S,
    minimum: usize,
    maximum: usize,
    name: impl IntoName<'n>,
) -> Result<S> {
    require_bound_inclusive_by(value, length, minimum, maximum, name, LENGTH)
}

pub fn require_length_minimum_exclusive_maximum_inclusive<'n, S: AsRef<str>>(
    value: S,
    minimum: usize,
    maximum: usize,
    name: impl IntoName<'n>,
) -> Result<S> {
    require_bound_minimum_exclusive_maximum_inclusive_by(
        value, length, minimum, maximum, name, LENGTH,
    )
}

pub fn require_length_minimum_inclusive_maximum_exclusive<'n, S: AsRef<str>>(
    value: S,
    minimum: usize,
    maximum: usize,
    name: impl IntoName<'n>,
) -> Result<S> {
    require_bound_minimum_inclusive_maximum_exclusive_by(
        value, length, minimum, maximum, name, LENGTH,
    )
}
