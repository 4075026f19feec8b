// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Validation of the labels that appear in failure messages.
//!
//! Every check takes one or two labels ("count", "list", "length") and checks
//! them before it looks at the value. A bad label is a bug in the calling code,
//! so its failure wins over whatever the value would have produced.

use crate::error::{RequireError, Result};

/// Anything that can be passed where a label is expected.
///
/// `None` stands for an absent label and fails with
/// [`RequireError::MissingRequiredValue`].
pub trait IntoName<'a> {
    fn into_name(self) -> Option<&'a str>;
}

impl<'a> IntoName<'a> for &'a str {
    fn into_name(self) -> Option<&'a str> {
        Some(self)
    }
}

impl<'a> IntoName<'a> for &'a String {
    fn into_name(self) -> Option<&'a str> {
        Some(self.as_str())
    }
}

impl<'a> IntoName<'a> for Option<&'a str> {
    fn into_name(self) -> Option<&'a str> {
        self
    }
}

/// Message for a string that is empty or whitespace only.
pub(crate) fn non_blank_message(value: &str, name: &str) -> String {
    format!("{} must be non-blank; it is '{}'.", name, value)
}

pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Check a label and hand it back.
///
/// # Errors
/// - `MissingRequiredValue` naming `name` if the label is absent
/// - `ArgumentInvalid` if it is empty or whitespace only
///
/// ```
/// use requisite::require_name;
///
/// assert_eq!(require_name("count").unwrap(), "count");
/// assert!(require_name(None::<&str>).unwrap_err().is_missing());
/// assert!(require_name(" ").unwrap_err().is_invalid());
/// ```
pub fn require_name<'a>(name: impl IntoName<'a>) -> Result<&'a str> {
    let name = name.into_name().ok_or_else(|| RequireError::missing("name"))?;

    if is_blank(name) {
        return Err(RequireError::invalid(non_blank_message(name, "name")));
    }

    Ok(name)
}
