//! Submit orchestration
//!
//! [`Form`] owns a schema and the current [`FieldMap`] and drives the
//! reducer the way a UI binding layer would: changes go through
//! [`Action::Change`], a submit validates the whole field set, stores the
//! result with [`Action::Validate`] and, when everything is valid, hands
//! the fields to a callback and optionally resets.
//!
//! No UI events are involved; extracting `(name, value)` from an input
//! event is the caller's concern.
//!
//! # Examples
//!
//! ```rust
//! use formstate_validator::prelude::*;
//! use serde_json::json;
//!
//! let schema = Schema::new([FieldDecl::new("name", json!("")).required(true)]).unwrap();
//! let mut form = Form::with_options(schema, FormOptions::default().with_reset_on_submit(true));
//!
//! assert_eq!(form.submit(|_| unreachable!()), SubmitOutcome::Rejected);
//! assert_eq!(form.field("name").unwrap().error, DEFAULT_REQUIRED_ERROR);
//!
//! form.change("name", "Ada");
//! let mut submitted = None;
//! assert!(form.submit(|fields| submitted = Some(fields.extract_values())).is_submitted());
//! assert_eq!(submitted.unwrap()["name"], json!("Ada"));
//! assert_eq!(form.field("name").unwrap().value, json!("")); // reset after submit
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::schema::Schema;
use crate::state::{Action, FieldMap, FieldState, initialize, reduce};
use crate::validate::validate_fields;

// ============================================================================
// OPTIONS
// ============================================================================

/// Behaviour switches for a [`Form`].
///
/// Deserializes from camelCase keys; missing keys take their defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormOptions {
    /// Reset every field to its initial value after a successful submit.
    pub reset_on_submit: bool,
}

impl FormOptions {
    /// Sets `reset_on_submit`.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_reset_on_submit(mut self, reset: bool) -> Self {
        self.reset_on_submit = reset;
        self
    }
}

// ============================================================================
// SUBMIT OUTCOME
// ============================================================================

/// What happened on [`Form::submit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every field was valid and the callback ran.
    Submitted,
    /// At least one field has an error; the callback did not run.
    Rejected,
}

impl SubmitOutcome {
    /// Returns `true` for [`SubmitOutcome::Submitted`].
    #[must_use]
    pub fn is_submitted(self) -> bool {
        matches!(self, Self::Submitted)
    }
}

// ============================================================================
// FORM
// ============================================================================

/// A schema plus the current field map.
#[derive(Debug, Clone)]
pub struct Form {
    schema: Schema,
    fields: FieldMap,
    options: FormOptions,
}

impl Form {
    /// Creates a form with default options.
    pub fn new(schema: Schema) -> Self {
        Self::with_options(schema, FormOptions::default())
    }

    /// Creates a form with explicit options.
    pub fn with_options(schema: Schema, options: FormOptions) -> Self {
        let fields = initialize(&schema);
        Self {
            schema,
            fields,
            options,
        }
    }

    /// The form's schema.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// The form's options.
    pub fn options(&self) -> FormOptions {
        self.options
    }

    /// The current field map.
    pub fn fields(&self) -> &FieldMap {
        &self.fields
    }

    /// The current state of one field.
    pub fn field(&self, name: &str) -> Option<&FieldState> {
        self.fields.get(name)
    }

    /// Current `name -> value` pairs.
    pub fn values(&self) -> Map<String, Value> {
        self.fields.extract_values()
    }

    /// Applies an action to the current field map.
    pub fn dispatch(&mut self, action: Action) {
        let current = std::mem::take(&mut self.fields);
        self.fields = reduce(current, action);
    }

    /// Sets a field's value, clearing its error.
    pub fn change(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.dispatch(Action::change(key, value));
    }

    /// Restores every field to its declared initial value.
    pub fn reset(&mut self) {
        self.dispatch(Action::Reset(self.schema.clone()));
    }

    /// Validates all fields and stores the result. Returns `true` if all are valid.
    pub fn validate(&mut self) -> bool {
        let outcome = validate_fields(&self.fields, &self.schema);
        self.dispatch(Action::Validate(outcome.validated_fields));
        outcome.all_valid
    }

    /// Validates, then runs `on_submit` with the validated fields if all are valid.
    ///
    /// With [`FormOptions::reset_on_submit`] the form is reset after the
    /// callback returns. A rejected submit never resets, so the errors stay
    /// visible.
    pub fn submit<F>(&mut self, on_submit: F) -> SubmitOutcome
    where
        F: FnOnce(&FieldMap),
    {
        if !self.validate() {
            tracing::debug!(outcome = "rejected", "form submit");
            return SubmitOutcome::Rejected;
        }

        on_submit(&self.fields);
        if self.options.reset_on_submit {
            self.reset();
        }
        tracing::debug!(
            outcome = "submitted",
            reset = self.options.reset_on_submit,
            "form submit"
        );
        SubmitOutcome::Submitted
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::DEFAULT_REQUIRED_ERROR;
    use crate::rule::Validator;
    use crate::schema::FieldDecl;
    use serde_json::json;

    fn schema() -> Schema {
        Schema::new([
            FieldDecl::new("title", "")
                .required(true)
                .validator(Validator::pattern(r"^.{3,}$", "too short").unwrap()),
            FieldDecl::new("count", 0),
        ])
        .unwrap()
    }

    #[test]
    fn test_new_form_is_initialized() {
        let form = Form::new(schema());
        assert_eq!(form.fields(), &initialize(&schema()));
        assert!(!form.options().reset_on_submit);
    }

    #[test]
    fn test_options_deserialize_with_defaults() {
        let options: FormOptions = serde_json::from_value(json!({})).unwrap();
        assert_eq!(options, FormOptions::default());

        let options: FormOptions = serde_json::from_value(json!({ "resetOnSubmit": true })).unwrap();
        assert!(options.reset_on_submit);
    }

    #[test]
    fn test_rejected_submit_keeps_errors() {
        let mut form = Form::with_options(schema(), FormOptions::default().with_reset_on_submit(true));
        form.change("title", "ab");

        let mut called = false;
        let outcome = form.submit(|_| called = true);

        assert_eq!(outcome, SubmitOutcome::Rejected);
        assert!(!called);
        assert_eq!(form.field("title"), Some(&FieldState::with_error("ab", "too short")));
    }

    #[test]
    fn test_change_after_rejection_clears_error() {
        let mut form = Form::new(schema());
        assert!(!form.validate());
        assert_eq!(form.field("title").unwrap().error, DEFAULT_REQUIRED_ERROR);

        form.change("title", "a");
        assert_eq!(form.field("title"), Some(&FieldState::new("a")));
    }

    #[test]
    fn test_successful_submit_without_reset() {
        let mut form = Form::new(schema());
        form.change("title", "hello");
        form.change("count", 3);

        let mut seen = None;
        let outcome = form.submit(|fields| seen = Some(fields.extract_values()));

        assert!(outcome.is_submitted());
        assert_eq!(
            Value::Object(seen.unwrap()),
            json!({ "title": "hello", "count": 3 })
        );
        assert_eq!(form.values()["title"], json!("hello"));
    }

    #[test]
    fn test_successful_submit_with_reset() {
        let mut form = Form::with_options(schema(), FormOptions { reset_on_submit: true });
        form.change("title", "hello");

        assert!(form.submit(|_| {}).is_submitted());
        assert_eq!(form.fields(), &initialize(&schema()));
    }

    #[test]
    fn test_submit_drops_undeclared_fields() {
        let mut form = Form::new(schema());
        form.change("title", "hello");
        form.change("scratch", true);
        assert!(form.fields().contains("scratch"));

        form.submit(|_| {});
        assert!(!form.fields().contains("scratch"));
    }

    #[test]
    fn test_noop_dispatch() {
        let mut form = Form::new(schema());
        form.change("title", "hey");
        let before = form.fields().clone();
        form.dispatch(Action::Noop);
        assert_eq!(form.fields(), &before);
    }
}
