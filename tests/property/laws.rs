//! Base assertion and label properties.

use super::common::{blank_strategy, label_strategy};
use proptest::prelude::*;
use requisite::{
    require, require_less_than, require_message, require_name, require_some, ErrorKind,
    RequireError,
};

proptest! {
    /// A holding condition returns the value, whatever failure was supplied.
    #[test]
    fn prop_require_true_is_identity(value in any::<i64>(), message in "[a-z]{1,10}") {
        let failure = RequireError::invalid(message);
        prop_assert_eq!(require(true, value, Some(failure)), Ok(value));
    }

    /// A failing condition returns the supplied failure unchanged.
    #[test]
    fn prop_require_false_returns_failure(value in any::<i64>(), name in label_strategy()) {
        let failure = RequireError::missing(name);
        prop_assert_eq!(require(false, value, Some(failure.clone())), Err(failure));
    }

    #[test]
    fn prop_require_message_carries_message(value in any::<u8>(), message in "[a-z][a-z ]{0,20}") {
        let error = require_message(false, value, message.as_str()).unwrap_err();
        prop_assert_eq!(error, RequireError::invalid(message));
    }

    #[test]
    fn prop_valid_labels_round_trip(name in label_strategy()) {
        prop_assert_eq!(require_name(name.as_str()), Ok(name.as_str()));
    }

    /// Blank labels win over failing values.
    #[test]
    fn prop_blank_label_precedes_value(value in any::<i32>(), blank in blank_strategy()) {
        let error = require_less_than(value, i32::MIN, blank.as_str()).unwrap_err();
        prop_assert_eq!(error.kind(), ErrorKind::ArgumentInvalid);
        prop_assert!(error.to_string().starts_with("name must be non-blank"));
    }

    /// Absent labels win over failing values.
    #[test]
    fn prop_absent_label_precedes_value(value in any::<i32>()) {
        let error = require_less_than(value, i32::MIN, None::<&str>).unwrap_err();
        prop_assert_eq!(error, RequireError::missing("name"));
    }

    #[test]
    fn prop_require_some(value in any::<Option<i16>>(), name in label_strategy()) {
        match value {
            Some(inner) => prop_assert_eq!(require_some(value, name.as_str()), Ok(inner)),
            None => prop_assert_eq!(
                require_some(value, name.as_str()),
                Err(RequireError::missing(name.as_str()))
            ),
        }
    }
}
