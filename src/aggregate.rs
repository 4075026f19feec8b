// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Quantified checks over sequences.
//!
//! `require_for_all` passes when every element passes its check;
//! `require_there_exists` passes when at least one does. Both run the check on
//! every element, in order, exactly once, and keep each failure so the error
//! can list all of them:
//!
//! ```text
//! Every element of list must meet the requirement:
//! 0: number must be greater than '2'; it is '1'.
//! 1: number must be greater than '2'; it is '2'.
//! ```
//!
//! An empty sequence passes `for all` (nothing can fail) and fails
//! `there exists` (nothing can pass).
//!
//! This is the only place in the crate that swallows an error: each element's
//! `Err` is folded into the report instead of being returned directly.

use std::fmt;

use crate::error::{AggregateFailure, ElementFailure, Quantifier, RequireError, Result};
use crate::name::{require_name, IntoName};

/// Outcome of checking every item of a sequence.
struct Tally {
    checked: usize,
    failures: Vec<ElementFailure>,
}

impl Tally {
    /// True when at least one checked item did not fail.
    fn any_passed(&self) -> bool {
        self.failures.len() < self.checked
    }
}

/// Run `check` on every item and keep the failures, in order.
fn collect_failures<I, F, R, X>(items: I, mut check: F) -> Tally
where
    I: IntoIterator,
    F: FnMut(I::Item) -> std::result::Result<R, X>,
    X: fmt::Display,
{
    let mut tally = Tally {
        checked: 0,
        failures: Vec::new(),
    };

    for (index, item) in items.into_iter().enumerate() {
        tally.checked += 1;
        if let Err(error) = check(item) {
            tally.failures.push(ElementFailure {
                index,
                message: error.to_string(),
            });
        }
    }

    tally
}

fn aggregate_error(
    quantifier: Quantifier,
    parameter: &str,
    field: &str,
    failures: Vec<ElementFailure>,
) -> RequireError {
    RequireError::AggregateInvalid(AggregateFailure {
        quantifier,
        parameter: parameter.to_string(),
        field: field.to_string(),
        failures,
    })
}

/// Require that every element of `collection` passes `check`.
///
/// Elements are labelled `"element"` in the report.
///
/// ```
/// use requisite::{require_for_all, require_greater_than};
///
/// let list = vec![3, 4, 5];
/// assert!(require_for_all(&list, |n| require_greater_than(*n, 2, "number"), "list").is_ok());
///
/// let list = vec![1, 2, 3, 4];
/// let error = require_for_all(&list, |n| require_greater_than(*n, 2, "number"), "list")
///     .unwrap_err();
/// assert_eq!(
///     error.to_string(),
///     "Every element of list must meet the requirement:\n\
///      0: number must be greater than '2'; it is '1'.\n\
///      1: number must be greater than '2'; it is '2'."
/// );
/// ```
pub fn require_for_all<'a, 'n, C, F, R, X>(
    collection: &'a C,
    check: F,
    name: impl IntoName<'n>,
) -> Result<&'a C>
where
    C: ?Sized,
    &'a C: IntoIterator,
    F: FnMut(<&'a C as IntoIterator>::Item) -> std::result::Result<R, X>,
    X: fmt::Display,
{
    let name = require_name(name)?;

    require_for_all_by(collection, |c| c, check, name, "element")
}

/// Require that every item of the sequence derived by `get` passes `check`.
///
/// `get` is called once; `field` labels the items in the report
/// (`"key"`, `"value"`, ...).
pub fn require_for_all_by<'a, 'p, 'f, T, I, G, F, R, X>(
    value: &'a T,
    get: G,
    check: F,
    parameter: impl IntoName<'p>,
    field: impl IntoName<'f>,
) -> Result<&'a T>
where
    T: ?Sized,
    G: FnOnce(&'a T) -> I,
    I: IntoIterator,
    F: FnMut(I::Item) -> std::result::Result<R, X>,
    X: fmt::Display,
{
    let parameter = require_name(parameter)?;
    let field = require_name(field)?;

    let tally = collect_failures(get(value), check);

    #[cfg(feature = "tracing")]
    tracing::trace!(
        parameter,
        field,
        total = tally.checked,
        failed = tally.failures.len(),
        "for all check evaluated"
    );

    if tally.failures.is_empty() {
        Ok(value)
    } else {
        Err(aggregate_error(Quantifier::ForAll, parameter, field, tally.failures))
    }
}

/// Require that at least one element of `collection` passes `check`.
///
/// Fails for an empty collection.
pub fn require_there_exists<'a, 'n, C, F, R, X>(
    collection: &'a C,
    check: F,
    name: impl IntoName<'n>,
) -> Result<&'a C>
where
    C: ?Sized,
    &'a C: IntoIterator,
    F: FnMut(<&'a C as IntoIterator>::Item) -> std::result::Result<R, X>,
    X: fmt::Display,
{
    let name = require_name(name)?;

    require_there_exists_by(collection, |c| c, check, name, "element")
}

/// Require that at least one item of the sequence derived by `get` passes
/// `check`.
///
/// Every item is still checked so that, on failure, the report lists why each
/// one was rejected.
pub fn require_there_exists_by<'a, 'p, 'f, T, I, G, F, R, X>(
    value: &'a T,
    get: G,
    check: F,
    parameter: impl IntoName<'p>,
    field: impl IntoName<'f>,
) -> Result<&'a T>
where
    T: ?Sized,
    G: FnOnce(&'a T) -> I,
    I: IntoIterator,
    F: FnMut(I::Item) -> std::result::Result<R, X>,
    X: fmt::Display,
{
    let parameter = require_name(parameter)?;
    let field = require_name(field)?;

    let tally = collect_failures(get(value), check);

    #[cfg(feature = "tracing")]
    tracing::trace!(
        parameter,
        field,
        total = tally.checked,
        failed = tally.failures.len(),
        "there exists check evaluated"
    );

    if tally.any_passed() {
        Ok(value)
    } else {
        Err(aggregate_error(
            Quantifier::ThereExists,
            parameter,
            field,
            tally.failures,
        ))
    }
}
