//! Checks composed inside constructors, the way callers use them.

use std::collections::HashMap;

use super::common::assert_invalid;
use requisite::collection::{require_for_all_keys, require_non_empty};
use requisite::string::{require_length_inclusive, require_non_blank};
use requisite::{
    require, require_bound_inclusive, require_message, ErrorKind, RequireError, Result,
};

#[derive(Debug)]
struct Listing {
    title: String,
    price_cents: u32,
    tags: Vec<String>,
    attributes: HashMap<String, String>,
}

impl Listing {
    fn new(
        title: String,
        price_cents: u32,
        tags: Vec<String>,
        attributes: HashMap<String, String>,
    ) -> Result<Self> {
        let title = require_length_inclusive(require_non_blank(title, "title")?, 1, 80, "title")?;
        let price_cents = require_bound_inclusive(price_cents, 1, 1_000_000, "price_cents")?;
        let tags = require_non_empty(tags, "tags")?;
        require_for_all_keys(&attributes, |k| require_non_blank(k.as_str(), "key"), "attributes")?;

        Ok(Self {
            title,
            price_cents,
            tags,
            attributes,
        })
    }
}

fn attributes(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_valid_listing() {
    let listing = Listing::new(
        "Desk lamp".into(),
        2500,
        vec!["home".into()],
        attributes(&[("color", "black")]),
    )
    .unwrap();

    assert_eq!(listing.title, "Desk lamp");
    assert_eq!(listing.price_cents, 2500);
    assert_eq!(listing.tags, vec!["home".to_string()]);
    assert_eq!(listing.attributes.len(), 1);
}

#[test]
fn test_first_failure_is_reported() {
    // Title and price are both wrong; title is checked first.
    let message = assert_invalid(Listing::new(" ".into(), 0, vec![], HashMap::new()));
    assert_eq!(message, "title must be non-blank; it is ' '.");

    let message = assert_invalid(Listing::new("Lamp".into(), 0, vec![], HashMap::new()));
    assert!(message.starts_with("price_cents must be greater than or equal to '1'"));
}

#[test]
fn test_attribute_keys_are_checked() {
    let error = Listing::new(
        "Lamp".into(),
        100,
        vec!["home".into()],
        attributes(&[("", "x")]),
    )
    .unwrap_err();

    let report = error.aggregate().expect("aggregate failure");
    assert_eq!(report.field, "key");
    assert_eq!(report.parameter, "attributes");
}

#[test]
fn test_custom_failures_pass_through() {
    let failure = RequireError::invalid("port is reserved");
    let port = 22;
    assert_eq!(require(port > 1024, port, Some(failure.clone())), Err(failure));

    let error = require_message(false, 22, "port is reserved").unwrap_err();
    assert_eq!(error.kind(), ErrorKind::ArgumentInvalid);
    assert_eq!(error.to_string(), "port is reserved");
}

#[test]
fn test_errors_work_with_question_mark_into_box_dyn_error() {
    fn parse(text: &str) -> std::result::Result<i64, Box<dyn std::error::Error>> {
        Ok(requisite::require_number::<i64>(text, "value")?)
    }

    assert_eq!(parse("42").unwrap(), 42);
    assert_eq!(
        parse("forty-two").unwrap_err().to_string(),
        "value must be an i64; it is 'forty-two'."
    );
}
