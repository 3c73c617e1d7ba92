//! Declarative (JSON) schema documents.

use serde::Deserialize;
use serde_json::Value;

use super::{FieldDecl, Schema};
use crate::foundation::SchemaError;
use crate::rule::{Rule, Validator};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub(super) struct FieldDef {
    field: String,
    #[serde(default)]
    value: Value,
    #[serde(default)]
    required: bool,
    #[serde(default)]
    required_error: Option<String>,
    #[serde(default)]
    validators: Vec<ValidatorDef>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ValidatorDef {
    pattern: String,
    #[serde(default)]
    error: Option<String>,
}

fn into_decl(def: FieldDef) -> Result<FieldDecl, SchemaError> {
    let mut decl = FieldDecl::new(def.field, def.value).required(def.required);
    if let Some(error) = def.required_error {
        decl = decl.required_error(error);
    }
    for validator in def.validators {
        let rule = Rule::pattern(&validator.pattern).map_err(|source| {
            SchemaError::invalid_pattern(decl.name(), validator.pattern.as_str(), source)
        })?;
        decl = decl.validator(match validator.error {
            Some(error) => Validator::new(rule, error),
            None => Validator::without_message(rule),
        });
    }
    Ok(decl)
}

pub(super) fn build(defs: Vec<FieldDef>) -> Result<Schema, SchemaError> {
    let decls = defs
        .into_iter()
        .map(into_decl)
        .collect::<Result<Vec<_>, _>>()?;
    Schema::new(decls)
}
