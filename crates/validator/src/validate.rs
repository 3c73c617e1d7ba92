//! Field and field-set validation
//!
//! [`validate_field`] applies one declaration to one value; the first
//! applicable error wins. [`validate_fields`] runs it over every declared
//! field and never short-circuits, so the caller always gets a complete
//! picture of the form.
//!
//! # Examples
//!
//! ```rust
//! use formstate_validator::prelude::*;
//! use serde_json::json;
//!
//! let schema = Schema::new([FieldDecl::new("a", json!("")).required(true)]).unwrap();
//! let decl = schema.get("a").unwrap();
//! let fields = initialize(&schema);
//!
//! assert_eq!(validate_field(&json!(""), decl, &fields), DEFAULT_REQUIRED_ERROR);
//! assert_eq!(validate_field(&json!("x"), decl, &fields), "");
//! ```

use serde_json::Value;

use crate::foundation::{DEFAULT_INVALID_ERROR, DEFAULT_REQUIRED_ERROR, is_truthy, value_exists};
use crate::rule::{evaluate_rule, resolve_error};
use crate::schema::{FieldDecl, Schema};
use crate::state::{FieldMap, FieldState};

static MISSING: Value = Value::Null;

/// Result of validating a field map against a schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome {
    /// One entry per declared field, carrying its value and resolved error.
    pub validated_fields: FieldMap,
    /// `true` iff every entry's error is empty.
    pub all_valid: bool,
}

/// Validates a single value against its declaration.
///
/// In order:
/// 1. required and missing (per [`value_exists`]): the declared required
///    message, or [`DEFAULT_REQUIRED_ERROR`] when that resolves to `""`;
/// 2. truthy value with validators: the first failing validator's message,
///    or [`DEFAULT_INVALID_ERROR`] when that resolves to `""`;
/// 3. otherwise `""`.
///
/// Validators are skipped for falsy values (`0`, `false`, `""`, `null`) even
/// though some of those count as present for the required check.
#[must_use]
pub fn validate_field(value: &Value, decl: &FieldDecl, fields: &FieldMap) -> String {
    if decl.requirement().is_required(value, fields) && !value_exists(value) {
        let error = resolve_error(value, fields, decl.required_message());
        return or_default(error, DEFAULT_REQUIRED_ERROR);
    }

    if is_truthy(value) {
        let failed = decl
            .validators()
            .iter()
            .find(|validator| !evaluate_rule(validator.rule(), value, fields));
        if let Some(validator) = failed {
            let error = resolve_error(value, fields, validator.error());
            return or_default(error, DEFAULT_INVALID_ERROR);
        }
    }

    String::new()
}

/// Validates every field declared in `schema`.
///
/// The output map is rebuilt from the schema: fields present in `fields`
/// but not declared are dropped, and declared fields missing from `fields`
/// are validated as `null`.
#[must_use]
pub fn validate_fields(fields: &FieldMap, schema: &Schema) -> ValidationOutcome {
    let (validated_fields, all_valid) = schema.iter().fold(
        (FieldMap::new(), true),
        |(mut validated, all_valid), decl| {
            let value = fields.value(decl.name()).unwrap_or(&MISSING);
            let error = validate_field(value, decl, fields);
            tracing::trace!(field = decl.name(), invalid = !error.is_empty(), "validated field");

            let field_valid = error.is_empty();
            validated.insert(decl.name(), FieldState::with_error(value.clone(), error));
            (validated, all_valid && field_valid)
        },
    );

    tracing::debug!(
        fields = validated_fields.len(),
        invalid = validated_fields.iter().filter(|(_, s)| !s.is_valid()).count(),
        all_valid,
        "validated field set"
    );

    ValidationOutcome {
        validated_fields,
        all_valid,
    }
}

fn or_default(error: String, default: &str) -> String {
    if error.is_empty() {
        default.to_string()
    } else {
        error
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::{Message, Rule, Validator};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    const ERROR3: &str = "Length must be greater than 3.";
    const ERROR_REQUIRED: &str = "I do not like this.";

    fn field1() -> FieldDecl {
        FieldDecl::new("field1", "0112233")
            .required(true)
            .rule(Rule::pattern(r"^.{3,}$").unwrap(), ERROR3)
            .validator(Validator::predicate(
                |value, _| value.as_str().is_some_and(|s| s.len() <= 125),
                Message::computed(|value, _| format!("{value} length is not <= 125")),
            ))
            .validator(Validator::predicate(
                |value, _| value.as_str().is_some_and(|s| s.len() == 7),
                Message::computed(|value, _| format!("{value} length is not === 7")),
            ))
    }

    fn field2() -> FieldDecl {
        FieldDecl::new("field2", 96)
            .required_when(|_, _| true)
            .required_error(ERROR_REQUIRED)
    }

    fn field3() -> FieldDecl {
        FieldDecl::new("field3", "333333")
            .required_when(|_, fields| fields.value("field1").is_some_and(is_truthy))
            .required_error(ERROR_REQUIRED)
    }

    fn schema() -> Schema {
        Schema::new([field1(), field2(), field3()]).unwrap()
    }

    fn fields() -> FieldMap {
        crate::state::initialize(&schema())
    }

    #[test]
    fn test_no_rules_is_valid() {
        let decl = FieldDecl::new("field1", "");
        assert_eq!(validate_field(&json!(""), &decl, &fields()), "");
    }

    #[test]
    fn test_valid_value() {
        assert_eq!(validate_field(&json!("0112233"), &field1(), &fields()), "");
    }

    #[test]
    fn test_conditional_required_false() {
        let mut fields = fields();
        fields.insert("field1", FieldState::new(""));
        assert_eq!(validate_field(&json!("333333"), &field3(), &fields), "");
        assert_eq!(validate_field(&json!(""), &field3(), &fields), "");
    }

    #[test]
    fn test_default_required_error() {
        assert_eq!(validate_field(&json!(""), &field1(), &fields()), DEFAULT_REQUIRED_ERROR);

        let no_message = FieldDecl::new("field2", 96).required_when(|_, _| true);
        assert_eq!(validate_field(&json!(null), &no_message, &fields()), DEFAULT_REQUIRED_ERROR);
    }

    #[test]
    fn test_empty_required_message_falls_back() {
        let decl = FieldDecl::new("a", "").required(true).required_error("");
        assert_eq!(validate_field(&json!("  "), &decl, &fields()), DEFAULT_REQUIRED_ERROR);
    }

    #[test]
    fn test_user_required_error() {
        assert_eq!(validate_field(&json!(null), &field2(), &fields()), ERROR_REQUIRED);
        assert_eq!(validate_field(&json!(null), &field3(), &fields()), ERROR_REQUIRED);
    }

    #[test]
    fn test_first_failing_validator_wins() {
        assert_eq!(validate_field(&json!("12"), &field1(), &fields()), ERROR3);

        let long = "0112233".repeat(22);
        assert_eq!(
            validate_field(&json!(long), &field1(), &fields()),
            format!("\"{long}\" length is not <= 125")
        );
        assert_eq!(
            validate_field(&json!("00112233"), &field1(), &fields()),
            "\"00112233\" length is not === 7"
        );
    }

    #[test]
    fn test_failing_validator_without_message() {
        let decl = FieldDecl::new("a", "")
            .validator(Validator::new(Rule::pattern(r"^.{333,}$").unwrap(), ""));
        assert_eq!(validate_field(&json!("0112233"), &decl, &fields()), DEFAULT_INVALID_ERROR);

        let decl = FieldDecl::new("a", "")
            .validator(Validator::without_message(Rule::predicate(|_, _| false)));
        assert_eq!(validate_field(&json!("x"), &decl, &fields()), DEFAULT_INVALID_ERROR);
    }

    #[test]
    fn test_validators_skip_falsy_values() {
        let decl = FieldDecl::new("n", 0)
            .required(true)
            .validator(Validator::predicate(|_, _| false, "never valid"));

        // 0 and false exist, so the required check passes, and validators skip them.
        assert_eq!(validate_field(&json!(0), &decl, &fields()), "");
        assert_eq!(validate_field(&json!(false), &decl, &fields()), "");
        assert_eq!(validate_field(&json!(1), &decl, &fields()), "never valid");
    }

    #[test]
    fn test_validate_fields_empty_schema() {
        let outcome = validate_fields(&FieldMap::new(), &Schema::default());
        assert_eq!(
            outcome,
            ValidationOutcome {
                validated_fields: FieldMap::new(),
                all_valid: true
            }
        );
    }

    #[test]
    fn test_validate_fields_valid() {
        let outcome = validate_fields(&fields(), &schema());
        assert!(outcome.all_valid);
        assert_eq!(outcome.validated_fields, fields());
    }

    #[test]
    fn test_validate_fields_invalid() {
        let mut input = fields();
        input.insert("field1", FieldState::new("12"));

        let outcome = validate_fields(&input, &schema());

        let mut expected = fields();
        expected.insert("field1", FieldState::with_error("12", ERROR3));
        assert!(!outcome.all_valid);
        assert_eq!(outcome.validated_fields, expected);
    }

    #[test]
    fn test_validate_fields_does_not_short_circuit() {
        let schema = Schema::new([
            FieldDecl::new("a", "").required(true),
            FieldDecl::new("b", "").required(true).required_error("b missing"),
        ])
        .unwrap();

        let outcome = validate_fields(&crate::state::initialize(&schema), &schema);
        assert!(!outcome.all_valid);
        assert_eq!(outcome.validated_fields.error("a"), Some(DEFAULT_REQUIRED_ERROR));
        assert_eq!(outcome.validated_fields.error("b"), Some("b missing"));
    }

    #[test]
    fn test_validate_fields_drops_undeclared_and_fills_missing() {
        let schema = Schema::new([FieldDecl::new("a", "x").required(true)]).unwrap();
        let mut input = FieldMap::new();
        input.insert("stray", FieldState::new(1));

        let outcome = validate_fields(&input, &schema);
        assert!(!outcome.validated_fields.contains("stray"));
        assert_eq!(
            outcome.validated_fields["a"],
            FieldState::with_error(Value::Null, DEFAULT_REQUIRED_ERROR)
        );
    }
}
