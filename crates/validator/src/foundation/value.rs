//! Value predicates
//!
//! Field values are dynamic JSON values. Two different notions of "has a
//! value" are used by the field validator:
//!
//! - [`value_exists`] drives the required check. `0`, `false`, `[]` and `{}`
//!   all exist; `null` and blank strings do not.
//! - [`is_truthy`] gates validator execution. `0`, `false`, `null` and `""`
//!   are falsy, so validators never see them.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use super::PRESENCE_PATTERN;

static PRESENCE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PRESENCE_PATTERN).expect("presence pattern is a valid regex"));

/// Returns `false` for `null` and for strings without a non-whitespace
/// character, `true` for everything else.
///
/// # Examples
///
/// ```rust
/// use formstate_validator::foundation::value_exists;
/// use serde_json::json;
///
/// assert!(value_exists(&json!(0)));
/// assert!(value_exists(&json!(false)));
/// assert!(!value_exists(&json!("   ")));
/// assert!(!value_exists(&json!(null)));
/// ```
#[must_use]
pub fn value_exists(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => PRESENCE_REGEX.is_match(s),
        _ => true,
    }
}

/// Truthiness of a dynamic value.
///
/// Numbers are truthy unless they equal zero; strings unless empty. Arrays
/// and objects are always truthy, even when empty.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
