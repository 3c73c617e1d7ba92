//! # formstate-validator
//!
//! The validation and state-reduction core behind a declarative form:
//! a [`Schema`](schema::Schema) of named fields, a [`FieldMap`](state::FieldMap)
//! holding each field's current value and error, and pure functions that
//! validate and transition that map.
//!
//! ## Quick Start
//!
//! ```rust
//! use formstate_validator::prelude::*;
//! use serde_json::json;
//!
//! let schema = Schema::new([
//!     FieldDecl::new("title", json!(""))
//!         .required(true)
//!         .validator(Validator::pattern(r"^.{3,}$", "too short").unwrap()),
//! ])
//! .unwrap();
//!
//! let fields = initialize(&schema);
//! let fields = reduce(fields, Action::change("title", "ab"));
//!
//! let outcome = validate_fields(&fields, &schema);
//! assert!(!outcome.all_valid);
//! assert_eq!(outcome.validated_fields["title"].error, "too short");
//! ```
//!
//! ## Layers
//!
//! - [`foundation`]: value predicates, default messages, [`SchemaError`](foundation::SchemaError)
//! - [`rule`]: validator rules, error messages and their resolution
//! - [`schema`]: field declarations and the ordered schema
//! - [`state`]: the field map, initializer, actions and reducer
//! - [`validate`]: per-field and field-set validation
//! - [`form`]: submit orchestration over the reducer

pub mod form;
pub mod foundation;
pub mod prelude;
pub mod rule;
pub mod schema;
pub mod state;
pub mod validate;
