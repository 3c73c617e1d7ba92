//! Field map state machine
//!
//! The [`FieldMap`] is the entire state; there are no separate phases.
//! [`reduce`] consumes one version of the map together with an [`Action`]
//! and returns the next version, so a caller holding an older version never
//! observes a partial update.
//!
//! # Examples
//!
//! ```rust
//! use formstate_validator::prelude::*;
//! use serde_json::json;
//!
//! let schema = Schema::new([FieldDecl::new("title", json!(""))]).unwrap();
//! let fields = initialize(&schema);
//!
//! let fields = reduce(fields, Action::change("title", "Hello"));
//! assert_eq!(fields["title"], FieldState::new("Hello"));
//!
//! let fields = reduce(fields, Action::Reset(schema.clone()));
//! assert_eq!(fields, initialize(&schema));
//! ```

mod fields;

pub use fields::{FieldMap, FieldState};

use serde_json::Value;

use crate::schema::Schema;

// ============================================================================
// ACTIONS
// ============================================================================

/// A state transition consumed by [`reduce`].
#[derive(Debug, Clone)]
pub enum Action {
    /// Rebuild the map from the schema's initial values.
    Reset(Schema),
    /// Replace the map with an already validated one.
    Validate(FieldMap),
    /// Set one field's value and clear its error.
    Change {
        /// Field name; need not be declared in the schema.
        key: String,
        /// The new value.
        value: Value,
    },
    /// Identity transition.
    Noop,
}

impl Action {
    /// Creates a [`Action::Change`].
    pub fn change(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Change {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Short name of the action, used in log events.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Reset(_) => "reset",
            Self::Validate(_) => "validate",
            Self::Change { .. } => "change",
            Self::Noop => "noop",
        }
    }
}

// ============================================================================
// INITIALIZER
// ============================================================================

/// Builds a field map holding each declared field's initial value and no error.
#[must_use]
pub fn initialize(schema: &Schema) -> FieldMap {
    schema
        .iter()
        .map(|decl| {
            (
                decl.name().to_string(),
                FieldState::new(decl.initial_value().clone()),
            )
        })
        .collect()
}

// ============================================================================
// REDUCER
// ============================================================================

/// Applies `action` to `fields` and returns the next field map.
///
/// Never fails. A `Change` always clears the field's error, even when the
/// new value is still invalid; validity is only recomputed by validation.
#[must_use]
pub fn reduce(fields: FieldMap, action: Action) -> FieldMap {
    match action {
        Action::Reset(schema) => {
            tracing::debug!(action = "reset", fields = schema.len(), "resetting field map");
            initialize(&schema)
        }
        Action::Validate(validated) => {
            tracing::debug!(
                action = "validate",
                valid = validated.is_valid(),
                "applying validated field map"
            );
            validated
        }
        Action::Change { key, value } => {
            tracing::debug!(action = "change", field = %key, "changing field value");
            let mut next = fields;
            next.insert(key, FieldState::new(value));
            next
        }
        Action::Noop => fields,
    }
}

// ============================================================================
// TESTS
// ============================================================================
