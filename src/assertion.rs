// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The base assertion every other check is built on.
//!
//! `require(condition, value, failure)` returns `value` when `condition` holds
//! and `failure` otherwise. Returning the value makes checks usable inline:
//!
//! ```
//! use requisite::{require_message, Result};
//!
//! struct Port(u16);
//!
//! impl Port {
//!     fn new(port: u16) -> Result<Self> {
//!         Ok(Self(require_message(port != 0, port, "port must not be zero")?))
//!     }
//! }
//!
//! assert!(Port::new(8080).is_ok());
//! assert!(Port::new(0).is_err());
//! ```

use std::fmt;

use crate::error::{RequireError, Result};
use crate::name::{is_blank, non_blank_message, require_name, IntoName};

/// Shared by every check: render the message only when the condition fails.
#[inline]
pub(crate) fn require_with<T>(
    condition: bool,
    value: T,
    message: impl FnOnce(&T) -> String,
) -> Result<T> {
    if condition {
        Ok(value)
    } else {
        Err(RequireError::invalid(message(&value)))
    }
}

/// Return `value` if `condition` holds, otherwise return `on_failure`.
///
/// # Errors
/// - `MissingRequiredValue` naming `on_failure` if no failure was supplied
///   (checked before `condition`)
/// - `on_failure`, unchanged, if `condition` is false
pub fn require<T>(condition: bool, value: T, on_failure: Option<RequireError>) -> Result<T> {
    let on_failure = on_failure.ok_or_else(|| RequireError::missing("on_failure"))?;

    if condition {
        Ok(value)
    } else {
        Err(on_failure)
    }
}

/// Return `value` if `condition` holds, otherwise an `ArgumentInvalid`
/// carrying `message`.
///
/// The message is itself checked first: absent fails `MissingRequiredValue`,
/// blank fails `ArgumentInvalid`.
pub fn require_message<'a, T>(condition: bool, value: T, message: impl IntoName<'a>) -> Result<T> {
    let message = message
        .into_name()
        .ok_or_else(|| RequireError::missing("message"))?;

    if is_blank(message) {
        return Err(RequireError::invalid(non_blank_message(message, "message")));
    }

    require_with(condition, value, |_| message.to_string())
}

/// Unwrap a value that must be present.
///
/// # Errors
/// - `MissingRequiredValue` naming `name` if `value` is `None`
pub fn require_some<'a, T>(value: Option<T>, name: impl IntoName<'a>) -> Result<T> {
    let name = require_name(name)?;

    value.ok_or_else(|| RequireError::missing(name))
}

/// Require that a value is absent.
///
/// # Errors
/// - `ArgumentInvalid` if `value` is `Some`
pub fn require_none<'a, T: fmt::Display>(
    value: Option<T>,
    name: impl IntoName<'a>,
) -> Result<Option<T>> {
    let name = require_name(name)?;

    match value {
        None => Ok(None),
        Some(inner) => Err(RequireError::invalid(format!(
            "{} must be absent; it is '{}'.",
            name, inner
        ))),
    }
}
