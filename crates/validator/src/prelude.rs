//! Prelude module for convenient imports.
//!
//! Provides a single `use formstate_validator::prelude::*;` import that
//! brings in the schema builders, the state machine and the validators.
//!
//! # Examples
//!
//! ```rust
//! use formstate_validator::prelude::*;
//! use serde_json::json;
//!
//! let schema = Schema::new([FieldDecl::new("title", json!(""))]).unwrap();
//! let outcome = validate_fields(&initialize(&schema), &schema);
//! assert!(outcome.all_valid);
//! ```

// ============================================================================
// FOUNDATION: Value predicates, default messages, errors
// ============================================================================

pub use crate::foundation::{
    DEFAULT_INVALID_ERROR, DEFAULT_REQUIRED_ERROR, PRESENCE_PATTERN, SchemaError, is_truthy,
    value_exists,
};

// ============================================================================
// DECLARATIONS: Rules, messages, schema
// ============================================================================

pub use crate::rule::{Message, Rule, Validator, evaluate_rule, resolve_error};
pub use crate::schema::{FieldDecl, Requirement, Schema};

// ============================================================================
// STATE: Field map, actions, reducer
// ============================================================================

pub use crate::state::{Action, FieldMap, FieldState, initialize, reduce};

// ============================================================================
// VALIDATION AND SUBMIT
// ============================================================================

pub use crate::form::{Form, FormOptions, SubmitOutcome};
pub use crate::validate::{ValidationOutcome, validate_field, validate_fields};
