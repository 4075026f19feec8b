//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use std::fmt;

use crate::error::{ErrorKind, RequireError, Result};

/// Rendered failure message, panicking if the check passed.
pub fn message_of<T: fmt::Debug>(result: Result<T>) -> String {
    match result {
        Ok(value) => panic!("expected a failure, got Ok({:?})", value),
        Err(error) => error.to_string(),
    }
}

/// Assert that `result` failed because `name` was absent.
pub fn assert_missing<T: fmt::Debug>(result: Result<T>, name: &str) {
    match result {
        Err(RequireError::MissingRequiredValue { name: actual }) => assert_eq!(actual, name),
        other => panic!("expected MissingRequiredValue({}), got {:?}", name, other),
    }
}

/// Assert that `result` failed with `ArgumentInvalid` and return the message.
pub fn assert_invalid<T: fmt::Debug>(result: Result<T>) -> String {
    match result {
        Err(error) if error.kind() == ErrorKind::ArgumentInvalid => error.to_string(),
        other => panic!("expected ArgumentInvalid, got {:?}", other),
    }
}
