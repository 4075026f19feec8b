//! Precondition checks that hand the value back or explain why they can't.
//!
//! Every check takes a value, some constraint, and one or two labels used in
//! the failure message. On success it returns the value unchanged, so checks
//! compose inline in constructors and builders:
//!
//! ```
//! use requisite::{require_bound_inclusive, Result};
//! use requisite::string::require_non_blank;
//!
//! struct Account {
//!     owner: String,
//!     age: u8,
//! }
//!
//! impl Account {
//!     fn new(owner: String, age: u8) -> Result<Self> {
//!         Ok(Self {
//!             owner: require_non_blank(owner, "owner")?,
//!             age: require_bound_inclusive(age, 18, 120, "age")?,
//!         })
//!     }
//! }
//!
//! let error = Account::new("  ".into(), 30).err().unwrap();
//! assert_eq!(error.to_string(), "owner must be non-blank; it is '  '.");
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌───────────────┐
//! │   error.rs   │◀────│  name.rs     │◀────│ assertion.rs  │
//! │ (RequireError│     │ (IntoName,   │     │ (require,     │
//! │  ErrorKind)  │     │ require_name)│     │  require_with)│
//! └──────────────┘     └──────────────┘     └───────────────┘
//!                             ▲                     ▲
//!                             │                     │
//!                      ┌──────┴───────┐     ┌───────┴───────┐
//!                      │   bound.rs   │     │ aggregate.rs  │
//!                      │ (Bound, nine │     │ (for all,     │
//!                      │  shapes, _by)│     │  there exists)│
//!                      └──────────────┘     └───────────────┘
//!                             ▲                     ▲
//!        ┌────────────────────┼─────────────────────┤
//!        │                    │                     │
//! ┌──────┴──────┐     ┌───────┴──────┐     ┌────────┴──────┐
//! │  string.rs  │     │  number.rs   │     │ collection.rs │
//! │  (length,   │     │ (sign, parse)│     │ (size, keys,  │
//! │   regex)    │     │              │     │  values)      │
//! └─────────────┘     └──────────────┘     └───────────────┘
//! ```
//!
//! # Failure kinds
//!
//! | Kind                   | Raised when                                        |
//! |------------------------|----------------------------------------------------|
//! | `MissingRequiredValue` | a label, message or `Option` value is absent       |
//! | `ArgumentInvalid`      | a label is blank or the value breaks its constraint |
//!
//! Labels are checked before values, so a bad label is always what gets
//! reported. Aggregate failures ([`AggregateFailure`]) are `ArgumentInvalid`
//! and list every failing element with its index.
//!
//! # Features
//!
//! | Feature   | Default | Effect                                          |
//! |-----------|---------|-------------------------------------------------|
//! | `regex`   | on      | `string::require_match` and `require_match_str` |
//! | `decimal` | on      | `Number` for `rust_decimal::Decimal`             |
//! | `serde`   | on      | serializable errors and failure reports          |
//! | `tracing` | off     | trace events from aggregate checks and parsing  |

// Module declarations
mod aggregate;
mod assertion;
mod bound;
mod error;
mod name;

pub mod collection;
pub mod number;
pub mod string;

#[doc(hidden)]
pub mod testing;

// Re-exports for public API
pub use aggregate::{
    require_for_all, require_for_all_by, require_there_exists, require_there_exists_by,
};
pub use assertion::{require, require_message, require_none, require_some};
pub use bound::{
    require_bound, require_bound_by, require_bound_exclusive, require_bound_exclusive_by,
    require_bound_inclusive, require_bound_inclusive_by,
    require_bound_minimum_exclusive_maximum_inclusive,
    require_bound_minimum_exclusive_maximum_inclusive_by,
    require_bound_minimum_inclusive_maximum_exclusive,
    require_bound_minimum_inclusive_maximum_exclusive_by, require_equal, require_equal_by,
    require_greater_than, require_greater_than_by, require_greater_than_or_equal,
    require_greater_than_or_equal_by, require_less_than, require_less_than_by,
    require_less_than_or_equal, require_less_than_or_equal_by, Bound,
};
pub use error::{AggregateFailure, ElementFailure, ErrorKind, Quantifier, RequireError, Result};
pub use name::{require_name, IntoName};
pub use number::{
    require_negative, require_number, require_positive, require_zero, require_zero_or_negative,
    require_zero_or_positive, Number,
};
