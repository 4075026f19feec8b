// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ordered-bound checks.
//!
//! One generic pair does all the work: [`require_bound`] compares a value
//! against a [`Bound`], and [`require_bound_by`] first derives the compared
//! value through an accessor (a string's length, a collection's size). The
//! named functions below are one-line instantiations of that pair.
//!
//! | Function                                            | Holds when      |
//! |-----------------------------------------------------|-----------------|
//! | `require_less_than`                                 | v < max         |
//! | `require_less_than_or_equal`                        | v ≤ max         |
//! | `require_equal`                                     | v = target      |
//! | `require_greater_than_or_equal`                     | v ≥ min         |
//! | `require_greater_than`                              | v > min         |
//! | `require_bound_exclusive`                           | min < v < max   |
//! | `require_bound_inclusive`                           | min ≤ v ≤ max   |
//! | `require_bound_minimum_exclusive_maximum_inclusive` | min < v ≤ max   |
//! | `require_bound_minimum_inclusive_maximum_exclusive` | min ≤ v < max   |
//!
//! Every function has a `_by` twin taking an accessor plus a parameter label
//! and a field label, so that messages read "list size must be ...".
//!
//! Comparison uses the type's own `PartialOrd`. A value that is not comparable
//! with a bound (a NaN float) fails every shape.
//!
//! ```
//! use requisite::{require_bound_exclusive, require_less_than_by};
//!
//! assert_eq!(require_bound_exclusive('b', 'a', 'c', "letter"), Ok('b'));
//!
//! let error = require_bound_exclusive('d', 'a', 'c', "letter").unwrap_err();
//! assert_eq!(
//!     error.to_string(),
//!     "letter must be greater than 'a' and less than 'c'; it is 'd'."
//! );
//!
//! let list = vec![1, 2, 3];
//! let error = require_less_than_by(list, |l: &Vec<i32>| l.len(), 3, "list", "size").unwrap_err();
//! assert_eq!(error.to_string(), "list size must be less than '3'; it is '3'.");
//! ```

use std::fmt;

use crate::error::{RequireError, Result};
use crate::name::{require_name, IntoName};

/// A comparison point, or a pair of them, that a value must respect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bound<U> {
    LessThan(U),
    LessThanOrEqual(U),
    Equal(U),
    GreaterThanOrEqual(U),
    GreaterThan(U),
    /// `minimum < v < maximum`
    Exclusive { minimum: U, maximum: U },
    /// `minimum <= v <= maximum`
    Inclusive { minimum: U, maximum: U },
    /// `minimum < v <= maximum`
    MinimumExclusiveMaximumInclusive { minimum: U, maximum: U },
    /// `minimum <= v < maximum`
    MinimumInclusiveMaximumExclusive { minimum: U, maximum: U },
}

impl<U: PartialOrd> Bound<U> {
    /// Whether `value` lies inside this bound.
    pub fn contains(&self, value: &U) -> bool {
        match self {
            Bound::LessThan(maximum) => value < maximum,
            Bound::LessThanOrEqual(maximum) => value <= maximum,
            Bound::Equal(target) => value == target,
            Bound::GreaterThanOrEqual(minimum) => value >= minimum,
            Bound::GreaterThan(minimum) => value > minimum,
            Bound::Exclusive { minimum, maximum } => value > minimum && value < maximum,
            Bound::Inclusive { minimum, maximum } => value >= minimum && value <= maximum,
            Bound::MinimumExclusiveMaximumInclusive { minimum, maximum } => {
                value > minimum && value <= maximum
            }
            Bound::MinimumInclusiveMaximumExclusive { minimum, maximum } => {
                value >= minimum && value < maximum
            }
        }
    }
}

/// Renders the constraint as it appears after "must be".
impl<U: fmt::Display> fmt::Display for Bound<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::LessThan(maximum) => write!(f, "less than '{}'", maximum),
            Bound::LessThanOrEqual(maximum) => {
                write!(f, "less than or equal to '{}'", maximum)
            }
            Bound::Equal(target) => write!(f, "equal to '{}'", target),
            Bound::GreaterThanOrEqual(minimum) => {
                write!(f, "greater than or equal to '{}'", minimum)
            }
            Bound::GreaterThan(minimum) => write!(f, "greater than '{}'", minimum),
            Bound::Exclusive { minimum, maximum } => write!(
                f,
                "greater than '{}' and less than '{}'",
                minimum, maximum
            ),
            Bound::Inclusive { minimum, maximum } => write!(
                f,
                "greater than or equal to '{}' and less than or equal to '{}'",
                minimum, maximum
            ),
            Bound::MinimumExclusiveMaximumInclusive { minimum, maximum } => write!(
                f,
                "greater than '{}' and less than or equal to '{}'",
                minimum, maximum
            ),
            Bound::MinimumInclusiveMaximumExclusive { minimum, maximum } => write!(
                f,
                "greater than or equal to '{}' and less than '{}'",
                minimum, maximum
            ),
        }
    }
}

// ============================================================================
// GENERIC CHECKS
// ============================================================================

/// Return `value` if it lies inside `bound`.
///
/// # Errors
/// - label errors from [`require_name`]
/// - `ArgumentInvalid`: `"{name} must be {bound}; it is '{value}'."`
pub fn require_bound<'n, U>(value: U, bound: Bound<U>, name: impl IntoName<'n>) -> Result<U>
where
    U: PartialOrd + fmt::Display,
{
    let name = require_name(name)?;

    if bound.contains(&value) {
        Ok(value)
    } else {
        Err(RequireError::invalid(format!(
            "{} must be {}; it is '{}'.",
            name, bound, value
        )))
    }
}

/// Return `value` if `get(&value)` lies inside `bound`.
///
/// `get` is called exactly once.
///
/// # Errors
/// - label errors from [`require_name`], parameter first
/// - `ArgumentInvalid`: `"{parameter} {field} must be {bound}; it is '{derived}'."`
pub fn require_bound_by<'p, 'f, T, U, G>(
    value: T,
    get: G,
    bound: Bound<U>,
    parameter: impl IntoName<'p>,
    field: impl IntoName<'f>,
) -> Result<T>
where
    G: FnOnce(&T) -> U,
    U: PartialOrd + fmt::Display,
{
    let parameter = require_name(parameter)?;
    let field = require_name(field)?;

    let derived = get(&value);
    if bound.contains(&derived) {
        Ok(value)
    } else {
        Err(RequireError::invalid(format!(
            "{} {} must be {}; it is '{}'.",
            parameter, field, bound, derived
        )))
    }
}

// ============================================================================
// SINGLE-SIDED
// ============================================================================

pub fn require_less_than<'n, U>(value: U, maximum: U, name: impl IntoName<'n>) -> Result<U>
where
    U: PartialOrd + fmt::Display,
{
    require_bound(value, Bound::LessThan(maximum), name)
}

pub fn require_less_than_or_equal<'n, U>(
    value: U,
    maximum: U,
    name: impl IntoName<'n>,
) -> Result<U>
where
    U: PartialOrd + fmt::Display,
{
    require_bound(value, Bound::LessThanOrEqual(maximum), name)
}

pub fn require_equal<'n, U>(value: U, target: U, name: impl IntoName<'n>) -> Result<U>
where
    U: PartialOrd + fmt::Display,
{
    require_bound(value, Bound::Equal(target), name)
}

pub fn require_greater_than_or_equal<'n, U>(
    value: U,
    minimum: U,
    name: impl IntoName<'n>,
) -> Result<U>
where
    U: PartialOrd + fmt::Display,
{
    require_bound(value, Bound::GreaterThanOrEqual(minimum), name)
}

pub fn require_greater_than<'n, U>(value: U, minimum: U, name: impl IntoName<'n>) -> Result<U>
where
    U: PartialOrd + fmt::Display,
{
    require_bound(value, Bound::GreaterThan(minimum), name)
}

// ============================================================================
// TWO-SIDED
// ============================================================================

pub fn require_bound_exclusive<'n, U>(
    value: U,
    minimum: U,
    maximum: U,
    name: impl IntoName<'n>,
) -> Result<U>
where
    U: PartialOrd + fmt::Display,
{
    require_bound(value, Bound::Exclusive { minimum, maximum }, name)
}

pub fn require_bound_inclusive<'n, U>(
    value: U,
    minimum: U,
    maximum: U,
    name: impl IntoName<'n>,
) -> Result<U>
where
    U: PartialOrd + fmt::Display,
{
    require_bound(value, Bound::Inclusive { minimum, maximum }, name)
}

pub fn require_bound_minimum_exclusive_maximum_inclusive<'n, U>(
    value: U,
    minimum: U,
    maximum: U,
    name: impl IntoName<'n>,
) -> Result<U>
where
    U: PartialOrd + fmt::Display,
{
    require_bound(
        value,
        Bound::MinimumExclusiveMaximumInclusive { minimum, maximum },
        name,
    )
}

pub fn require_bound_minimum_inclusive_maximum_exclusive<'n, U>(
    value: U,
    minimum: U,
    maximum: U,
    name: impl IntoName<'n>,
) -> Result<U>
where
    U: PartialOrd + fmt::Display,
{
    require_bound(
        value,
        Bound::MinimumInclusiveMaximumExclusive { minimum, maximum },
        name,
    )
}

// ============================================================================
// ACCESSOR VARIANTS
// ============================================================================

pub fn require_less_than_by<'p, 'f, T, U, G>(
    value: T,
    get: G,
    maximum: U,
    parameter: impl IntoName<'p>,
    field: impl IntoName<'f>,
) -> Result<T>
where
    G: FnOnce(&T) -> U,
    U: PartialOrd + fmt::Display,
{
    require_bound_by(value, get, Bound::LessThan(maximum), parameter, field)
}

pub fn require_less_than_or_equal_by<'p, 'f, T, U, G>(
    value: T,
    get: G,
    maximum: U,
    parameter: impl IntoName<'p>,
    field: impl IntoName<'f>,
) -> Result<T>
where
    G: FnOnce(&T) -> U,
    U: PartialOrd + fmt::Display,
{
    require_bound_by(value, get, Bound::LessThanOrEqual(maximum), parameter, field)
}

pub fn require_equal_by<'p, 'f, T, U, G>(
    value: T,
    get: G,
    target: U,
    parameter: impl IntoName<'p>,
    field: impl IntoName<'f>,
) -> Result<T>
where
    G: FnOnce(&T) -> U,
    U: PartialOrd + fmt::Display,
{
    require_bound_by(value, get, Bound::Equal(target), parameter, field)
}

pub fn require_greater_than_or_equal_by<'p, 'f, T, U, G>(
    value: T,
    get: G,
    minimum: U,
    parameter: impl IntoName<'p>,
    field: impl IntoName<'f>,
) -> Result<T>
where
    G: FnOnce(&T) -> U,
    U: PartialOrd + fmt::Display,
{
    require_bound_by(value, get, Bound::GreaterThanOrEqual(minimum), parameter, field)
}

pub fn require_greater_than_by<'p, 'f, T, U, G>(
    value: T,
    get: G,
    minimum: U,
    parameter: impl IntoName<'p>,
    field: impl IntoName<'f>,
) -> Result<T>
where
    G: FnOnce(&T) -> U,
    U: PartialOrd + fmt::Display,
{
    require_bound_by(value, get, Bound::GreaterThan(minimum), parameter, field)
}

pub fn require_bound_exclusive_by<'p, 'f, T, U, G>(
    value: T,
    get: G,
    minimum: U,
    maximum: U,
    parameter: impl IntoName<'p>,
    field: impl IntoName<'f>,
) -> Result<T>
where
    G: FnOnce(&T) -> U,
    U: PartialOrd + fmt::Display,
{
    require_bound_by(
        value,
        get,
        Bound::Exclusive { minimum, maximum },
        parameter,
        field,
    )
}

pub fn require_bound_inclusive_by<'p, 'f, T, U, G>(
    value: T,
    get: G,
    minimum: U,
    maximum: U,
    parameter: impl IntoName<'p>,
    field: impl IntoName<'f>,
) -> Result<T>
where
    G: FnOnce(&T) -> U,
    U: PartialOrd + fmt::Display,
{
    require_bound_by(
        value,
        get,
        Bound::Inclusive { minimum, maximum },
        parameter,
        field,
    )
}

pub fn require_bound_minimum_exclusive_maximum_inclusive_by<'p, 'f, T, U, G>(
    value: T,
    get: G,
    minimum: U,
    maximum: U,
    parameter: impl IntoName<'p>,
    field: impl IntoName<'f>,
) -> Result<T>
where
    G: FnOnce(&T) -> U,
    U: PartialOrd + fmt::Display,
{
    require_bound_by(
        value,
        get,
        Bound::MinimumExclusiveMaximumInclusive { minimum, maximum },
        parameter,
        field,
    )
}

pub fn require_bound_minimum_inclusive_maximum_exclusive_by<'p, 'f, T, U, G>(
    value: T,
    get: G,
    minimum: U,
    maximum: U,
    parameter: impl IntoName<'p>,
    field: impl IntoName<'f>,
) -> Result<T>
where
    G: FnOnce(&T) -> U,
    U: PartialOrd + fmt::Display,
{
    require_bound_by(
        value,
        get,
        Bound::MinimumInclusiveMaximumExclusive { minimum, maximum },
        parameter,
        field,
    )
}
