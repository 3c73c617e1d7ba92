//! Building blocks shared by every other layer.
//!
//! - **Values**: presence ([`value_exists`]) and truthiness ([`is_truthy`])
//!   over dynamic [`serde_json::Value`]s
//! - **Messages**: the fallback error texts callers may rely on verbatim
//! - **Errors**: [`SchemaError`] for schema construction failures
//!
//! Validation failures themselves are never Rust errors: a field is invalid
//! when its resolved message is non-empty.

pub mod error;
pub mod value;

pub use error::SchemaError;
pub use value::{is_truthy, value_exists};

/// Message used when a required field has no value and declares no error.
pub const DEFAULT_REQUIRED_ERROR: &str = "This field is required.";

/// Message used when a validator fails and declares no (or an empty) error.
pub const DEFAULT_INVALID_ERROR: &str = "This field is not valid.";

/// Presence test applied to string values: at least one non-whitespace character.
pub const PRESENCE_PATTERN: &str = r"\S";
