//! Schema construction errors
//!
//! Validation never fails with an error value: invalid fields are reported
//! as message strings. The only fallible operations are building a schema
//! (duplicate names, bad patterns) and loading one from JSON.

// ============================================================================
// SCHEMA ERROR
// ============================================================================

/// Error raised while building or loading a [`Schema`](crate::schema::Schema).
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SchemaError {
    /// Two declarations share a field name.
    #[error("field '{field}' is declared more than once")]
    DuplicateField {
        /// The repeated field name.
        field: String,
    },

    /// A validator pattern failed to compile.
    #[error("field '{field}' has an invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The field the pattern belongs to.
        field: String,
        /// The offending pattern source.
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The declarative schema document is not well formed.
    #[error("malformed schema definition: {0}")]
    Json(#[from] serde_json::Error),
}

impl SchemaError {
    /// Creates a duplicate field error.
    pub fn duplicate_field(field: impl Into<String>) -> Self {
        Self::DuplicateField {
            field: field.into(),
        }
    }

    /// Creates an invalid pattern error.
    pub fn invalid_pattern(
        field: impl Into<String>,
        pattern: impl Into<String>,
        source: regex::Error,
    ) -> Self {
        Self::InvalidPattern {
            field: field.into(),
            pattern: pattern.into(),
            source,
        }
    }

    /// Returns the field name this error refers to, if any.
    #[must_use]
    pub fn field_name(&self) -> Option<&str> {
        match self {
            Self::DuplicateField { field } | Self::InvalidPattern { field, .. } => Some(field),
            Self::Json(_) => None,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
