//! Field map: the runtime state of a form.

use std::ops::Index;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Current value and resolved error of one field.
///
/// `error` is empty when the field is valid (or has not been validated
/// since its last change).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldState {
    /// The field's current value.
    pub value: Value,
    /// The resolved error message, or `""`.
    pub error: String,
}

impl FieldState {
    /// Creates a state with no error.
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            error: String::new(),
        }
    }

    /// Creates a state carrying an error message.
    pub fn with_error(value: impl Into<Value>, error: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            error: error.into(),
        }
    }

    /// Returns `true` if no error is recorded.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.error.is_empty()
    }
}

/// Mapping from field name to [`FieldState`].
///
/// Lookup is by name; two maps are equal when they hold the same entries,
/// regardless of insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldMap(IndexMap<String, FieldState>);

impl FieldMap {
    /// Creates an empty field map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the state of `name`.
    pub fn get(&self, name: &str) -> Option<&FieldState> {
        self.0.get(name)
    }

    /// Returns the current value of `name`.
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.0.get(name).map(|state| &state.value)
    }

    /// Returns the current error of `name`.
    pub fn error(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(|state| state.error.as_str())
    }

    /// Returns `true` if `name` has an entry.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Inserts or replaces the entry for `name`, returning the previous state.
    pub fn insert(&mut self, name: impl Into<String>, state: FieldState) -> Option<FieldState> {
        self.0.insert(name.into(), state)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over `(name, state)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldState)> {
        self.0.iter().map(|(name, state)| (name.as_str(), state))
    }

    /// Returns `true` if every entry is error-free.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.0.values().all(FieldState::is_valid)
    }

    /// Collects `name -> value` pairs, dropping the error strings.
    ///
    /// This is the payload handed to a submit callback.
    #[must_use]
    pub fn extract_values(&self) -> Map<String, Value> {
        self.0
            .iter()
            .map(|(name, state)| (name.clone(), state.value.clone()))
            .collect()
    }
}

impl Index<&str> for FieldMap {
    type Output = FieldState;

    /// # Panics
    ///
    /// Panics if `name` has no entry.
    fn index(&self, name: &str) -> &FieldState {
        self.0
            .get(name)
            .unwrap_or_else(|| panic!("field '{name}' is not in the field map"))
    }
}

impl FromIterator<(String, FieldState)> for FieldMap {
    fn from_iter<I: IntoIterator<Item = (String, FieldState)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for FieldMap {
    type Item = (String, FieldState);
    type IntoIter = indexmap::map::IntoIter<String, FieldState>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
