//! Validator rules and error messages
//!
//! A [`Validator`] pairs a [`Rule`] (pass/fail) with an optional [`Message`]
//! (what to report on failure). Both sides are either static data or a
//! closure receiving the value under test and the whole [`FieldMap`], which
//! is how cross-field rules and messages are written.
//!
//! # Examples
//!
//! ```rust
//! use formstate_validator::rule::{Message, Rule, Validator};
//! use serde_json::{Value, json};
//!
//! let max_len = Validator::predicate(
//!     |value: &Value, _| value.as_str().is_some_and(|s| s.len() <= 125),
//!     Message::computed(|value: &Value, _| format!("{value} is longer than 125")),
//! );
//! let min_len = Validator::pattern(r"^.{3,}$", "Length must be greater than 3.").unwrap();
//! # let _ = (max_len, min_len);
//! ```

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use regex::Regex;
use serde_json::Value;

use crate::state::FieldMap;

/// Signature of a predicate over a field value and the full field map.
pub type PredicateFn = dyn Fn(&Value, &FieldMap) -> bool + Send + Sync;

/// Signature of a message computed from a field value and the full field map.
pub type MessageFn = dyn Fn(&Value, &FieldMap) -> String + Send + Sync;

// ============================================================================
// MESSAGE
// ============================================================================

/// An error message, either literal or computed on demand.
#[derive(Clone)]
pub enum Message {
    /// Returned verbatim.
    Literal(Cow<'static, str>),
    /// Invoked with `(value, fields)` only when the message is needed.
    Computed(Arc<MessageFn>),
}

impl Message {
    /// Creates a literal message.
    pub fn literal(text: impl Into<Cow<'static, str>>) -> Self {
        Self::Literal(text.into())
    }

    /// Creates a message computed from the value and field map.
    pub fn computed<F>(f: F) -> Self
    where
        F: Fn(&Value, &FieldMap) -> String + Send + Sync + 'static,
    {
        Self::Computed(Arc::new(f))
    }

    /// Produces the concrete message text.
    #[must_use]
    pub fn resolve(&self, value: &Value, fields: &FieldMap) -> String {
        match self {
            Self::Literal(text) => text.clone().into_owned(),
            Self::Computed(f) => f(value, fields),
        }
    }
}

impl fmt::Debug for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(text) => f.debug_tuple("Literal").field(text).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

impl From<&'static str> for Message {
    fn from(text: &'static str) -> Self {
        Self::Literal(Cow::Borrowed(text))
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Self::Literal(Cow::Owned(text))
    }
}

// ============================================================================
// RULE
// ============================================================================

/// The pass/fail half of a validator.
#[derive(Clone)]
pub enum Rule {
    /// Tested against string values only; any other value passes.
    Pattern(Regex),
    /// Called with `(value, fields)`; `true` means valid.
    Predicate(Arc<PredicateFn>),
}

impl Rule {
    /// Compiles a pattern rule.
    pub fn pattern(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self::Pattern(Regex::new(pattern)?))
    }

    /// Wraps a predicate rule.
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&Value, &FieldMap) -> bool + Send + Sync + 'static,
    {
        Self::Predicate(Arc::new(f))
    }

    /// Returns `true` if `value` satisfies the rule.
    ///
    /// Pattern rules never fail a non-string value; coercing numbers or
    /// other values to text is the caller's job.
    #[must_use]
    pub fn evaluate(&self, value: &Value, fields: &FieldMap) -> bool {
        match self {
            Self::Predicate(f) => f(value, fields),
            Self::Pattern(regex) => match value {
                Value::String(s) => regex.is_match(s),
                _ => true,
            },
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pattern(regex) => f.debug_tuple("Pattern").field(&regex.as_str()).finish(),
            Self::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

impl From<Regex> for Rule {
    fn from(regex: Regex) -> Self {
        Self::Pattern(regex)
    }
}

// ============================================================================
// VALIDATOR
// ============================================================================

/// A rule and the message reported when it fails.
#[derive(Debug, Clone)]
pub struct Validator {
    rule: Rule,
    error: Option<Message>,
}

impl Validator {
    /// Creates a validator with an error message.
    pub fn new(rule: Rule, error: impl Into<Message>) -> Self {
        Self {
            rule,
            error: Some(error.into()),
        }
    }

    /// Creates a validator that reports the default invalid message.
    pub fn without_message(rule: Rule) -> Self {
        Self { rule, error: None }
    }

    /// Creates a pattern validator.
    pub fn pattern(pattern: &str, error: impl Into<Message>) -> Result<Self, regex::Error> {
        Ok(Self::new(Rule::pattern(pattern)?, error))
    }

    /// Creates a predicate validator.
    pub fn predicate<F>(f: F, error: impl Into<Message>) -> Self
    where
        F: Fn(&Value, &FieldMap) -> bool + Send + Sync + 'static,
    {
        Self::new(Rule::predicate(f), error)
    }

    /// Returns the rule.
    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    /// Returns the declared error message, if any.
    pub fn error(&self) -> Option<&Message> {
        self.error.as_ref()
    }
}

// ============================================================================
// FREE FUNCTIONS
// ============================================================================

/// Turns a declared error into message text; no declaration yields `""`.
#[must_use]
pub fn resolve_error(value: &Value, fields: &FieldMap, error: Option<&Message>) -> String {
    error.map_or_else(String::new, |message| message.resolve(value, fields))
}

/// Runs a single rule against `value`; `true` means valid.
#[must_use]
pub fn evaluate_rule(rule: &Rule, value: &Value, fields: &FieldMap) -> bool {
    rule.evaluate(value, fields)
}

// ============================================================================
// TESTS
// ============================================================================
