// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Failure values returned by every check.
//!
//! A check either hands the value back or returns a [`RequireError`]. There are
//! two kinds callers care about:
//!
//! | Kind                   | Meaning                                             |
//! |------------------------|-----------------------------------------------------|
//! | `MissingRequiredValue` | an argument that must be present was absent         |
//! | `ArgumentInvalid`      | a present value failed the constraint it was checked against |
//!
//! Aggregate checks (`require_for_all`, `require_there_exists`) return the
//! [`RequireError::AggregateInvalid`] variant, which is an `ArgumentInvalid`
//! carrying every per-element failure instead of a single comparison.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for all checks in this crate.
pub type Result<T, E = RequireError> = std::result::Result<T, E>;

/// The two failure kinds a caller can distinguish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ErrorKind {
    /// A required argument (value or label) was absent.
    MissingRequiredValue,
    /// A present argument failed its constraint.
    ArgumentInvalid,
}

/// Error returned when a precondition does not hold.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RequireError {
    /// A required argument was absent. `name` is the argument's label.
    #[error("{name} must be present.")]
    MissingRequiredValue { name: String },

    /// A present argument failed its constraint.
    #[error("{message}")]
    ArgumentInvalid { message: String },

    /// One or more elements of a sequence failed a quantified check.
    #[error("{0}")]
    AggregateInvalid(AggregateFailure),
}

impl RequireError {
    /// Build a `MissingRequiredValue` for the argument called `name`.
    pub fn missing(name: impl Into<String>) -> Self {
        RequireError::MissingRequiredValue { name: name.into() }
    }

    /// Build an `ArgumentInvalid` carrying `message`.
    pub fn invalid(message: impl Into<String>) -> Self {
        RequireError::ArgumentInvalid {
            message: message.into(),
        }
    }

    /// The kind of this failure. Aggregate failures are `ArgumentInvalid`.
    pub fn kind(&self) -> ErrorKind {
        match self {
            RequireError::MissingRequiredValue { .. } => ErrorKind::MissingRequiredValue,
            RequireError::ArgumentInvalid { .. } | RequireError::AggregateInvalid(_) => {
                ErrorKind::ArgumentInvalid
            }
        }
    }

    pub fn is_missing(&self) -> bool {
        self.kind() == ErrorKind::MissingRequiredValue
    }

    pub fn is_invalid(&self) -> bool {
        self.kind() == ErrorKind::ArgumentInvalid
    }

    /// The per-element report, if this is an aggregate failure.
    pub fn aggregate(&self) -> Option<&AggregateFailure> {
        match self {
            RequireError::AggregateInvalid(failure) => Some(failure),
            _ => None,
        }
    }
}

/// Which quantifier an aggregate check applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Quantifier {
    /// Every element must pass.
    ForAll,
    /// At least one element must pass.
    ThereExists,
}

/// A single element that failed its check inside an aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ElementFailure {
    /// Zero-based position of the element in the checked sequence.
    pub index: usize,
    /// The element check's failure message.
    pub message: String,
}

impl fmt::Display for ElementFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.index, self.message)
    }
}

/// Combined report for a failed `for all` / `there exists` check.
///
/// Renders as a header line followed by one `{index}: {message}` line per
/// failing element, in sequence order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AggregateFailure {
    pub quantifier: Quantifier,
    /// Label of the checked value, e.g. `"list"`.
    pub parameter: String,
    /// Label of the element role, e.g. `"element"`, `"key"`.
    pub field: String,
    pub failures: Vec<ElementFailure>,
}

impl AggregateFailure {
    /// Indices of the failing elements, in order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.failures.iter().map(|failure| failure.index)
    }
}

impl fmt::Display for AggregateFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.quantifier {
            Quantifier::ForAll => write!(
                f,
                "Every {} of {} must meet the requirement:",
                self.field, self.parameter
            )?,
            Quantifier::ThereExists => write!(
                f,
                "At least one {} of {} must exist that meets the requirement:",
                self.field, self.parameter
            )?,
        }

        for failure in &self.failures {
            write!(f, "\n{}", failure)?;
        }

        Ok(())
    }
}
