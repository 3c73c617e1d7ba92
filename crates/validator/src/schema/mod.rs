//! Field declarations and the schema
//!
//! A [`Schema`] is an ordered, name-unique list of [`FieldDecl`]s. Each
//! declaration carries the field's initial value, its required policy and
//! an ordered list of [`Validator`]s.
//!
//! # Examples
//!
//! ```rust
//! use formstate_validator::prelude::*;
//! use serde_json::{Value, json};
//!
//! let schema = Schema::new([
//!     FieldDecl::new("email", json!("")).required(true),
//!     // Required only once an email has been entered.
//!     FieldDecl::new("confirm", json!(""))
//!         .required_when(|_: &Value, fields: &FieldMap| {
//!             fields.value("email").is_some_and(value_exists)
//!         })
//!         .required_error("Please confirm your email."),
//! ])
//! .unwrap();
//!
//! assert_eq!(schema.len(), 2);
//! ```

mod definition;

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::Value;
use smallvec::SmallVec;

use crate::foundation::SchemaError;
use crate::rule::{Message, PredicateFn, Rule, Validator};
use crate::state::FieldMap;

// ============================================================================
// REQUIREMENT
// ============================================================================

/// Whether a field must have a value.
#[derive(Clone, Default)]
pub enum Requirement {
    /// The field may be left empty.
    #[default]
    Never,
    /// The field must always have a value.
    Always,
    /// Decided per evaluation from the value and the full field map.
    When(Arc<PredicateFn>),
}

impl Requirement {
    /// Evaluates the policy for one validation pass.
    #[must_use]
    pub fn is_required(&self, value: &Value, fields: &FieldMap) -> bool {
        match self {
            Self::Never => false,
            Self::Always => true,
            Self::When(predicate) => predicate(value, fields),
        }
    }
}

impl From<bool> for Requirement {
    fn from(required: bool) -> Self {
        if required { Self::Always } else { Self::Never }
    }
}

impl fmt::Debug for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Never => f.write_str("Never"),
            Self::Always => f.write_str("Always"),
            Self::When(_) => f.write_str("When(..)"),
        }
    }
}

// ============================================================================
// FIELD DECLARATION
// ============================================================================

/// Declaration of a single field.
#[derive(Debug, Clone)]
pub struct FieldDecl {
    name: String,
    initial: Value,
    required: Requirement,
    required_error: Option<Message>,
    validators: SmallVec<[Validator; 2]>,
}

impl FieldDecl {
    /// Declares a field with its initial value. Not required, no validators.
    pub fn new(name: impl Into<String>, initial: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            initial: initial.into(),
            required: Requirement::Never,
            required_error: None,
            validators: SmallVec::new(),
        }
    }

    /// Sets a fixed required policy.
    #[must_use = "builder methods must be chained or built"]
    pub fn required(mut self, required: bool) -> Self {
        self.required = required.into();
        self
    }

    /// Makes the field required whenever `predicate` returns `true`.
    #[must_use = "builder methods must be chained or built"]
    pub fn required_when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&Value, &FieldMap) -> bool + Send + Sync + 'static,
    {
        self.required = Requirement::When(Arc::new(predicate));
        self
    }

    /// Sets the message reported when the field is required but missing.
    #[must_use = "builder methods must be chained or built"]
    pub fn required_error(mut self, error: impl Into<Message>) -> Self {
        self.required_error = Some(error.into());
        self
    }

    /// Sets a computed required message.
    #[must_use = "builder methods must be chained or built"]
    pub fn required_error_with<F>(mut self, f: F) -> Self
    where
        F: Fn(&Value, &FieldMap) -> String + Send + Sync + 'static,
    {
        self.required_error = Some(Message::computed(f));
        self
    }

    /// Appends a validator. Validators run in declaration order.
    #[must_use = "builder methods must be chained or built"]
    pub fn validator(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }

    /// Appends a validator built from a rule and its message.
    #[must_use = "builder methods must be chained or built"]
    pub fn rule(self, rule: Rule, error: impl Into<Message>) -> Self {
        self.validator(Validator::new(rule, error))
    }

    /// The field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The initial (and reset) value.
    pub fn initial_value(&self) -> &Value {
        &self.initial
    }

    /// The required policy.
    pub fn requirement(&self) -> &Requirement {
        &self.required
    }

    /// The declared required message, if any.
    pub fn required_message(&self) -> Option<&Message> {
        self.required_error.as_ref()
    }

    /// Validators in evaluation order.
    pub fn validators(&self) -> &[Validator] {
        &self.validators
    }
}

// ============================================================================
// SCHEMA
// ============================================================================

/// Ordered collection of field declarations with unique names.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: IndexMap<String, FieldDecl>,
}

impl Schema {
    /// Builds a schema, rejecting repeated field names.
    pub fn new(fields: impl IntoIterator<Item = FieldDecl>) -> Result<Self, SchemaError> {
        let mut schema = Self::default();
        for decl in fields {
            schema.push(decl)?;
        }
        Ok(schema)
    }

    /// Appends a declaration.
    pub fn push(&mut self, decl: FieldDecl) -> Result<(), SchemaError> {
        if self.fields.contains_key(decl.name()) {
            return Err(SchemaError::duplicate_field(decl.name()));
        }
        self.fields.insert(decl.name.clone(), decl);
        Ok(())
    }

    /// Loads a schema from a JSON document.
    ///
    /// The document is an array of `{ "field", "value", "required",
    /// "requiredError", "validators": [{ "pattern", "error" }] }` objects.
    /// Only literal messages and pattern rules can be expressed this way.
    pub fn from_json(source: &str) -> Result<Self, SchemaError> {
        let defs: Vec<definition::FieldDef> = serde_json::from_str(source)?;
        definition::build(defs)
    }

    /// Loads a schema from an already parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self, SchemaError> {
        let defs: Vec<definition::FieldDef> = serde_json::from_value(value)?;
        definition::build(defs)
    }

    /// Returns the declaration of `name`.
    pub fn get(&self, name: &str) -> Option<&FieldDecl> {
        self.fields.get(name)
    }

    /// Iterates declarations in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldDecl> {
        self.fields.values()
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if no fields are declared.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

// ============================================================================
// TESTS
// ============================================================================
