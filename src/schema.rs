use jsonschema::{validator_for, Validator};
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("Schema parse error: {0}")]
    SchemaParse(#[from] serde_json::Error),
    #[error("Schema compile error: {0}")]
    SchemaCompile(String),
    #[error("Instance validation failed: {0}")]
    ValidationFailed(String),
}

/// Compile a JSON Schema (draft detected from `$schema`, 2020-12 otherwise).
pub fn compile(schema: &Value) -> Result<Validator, SchemaError> {
    validator_for(schema).map_err(|e| SchemaError::SchemaCompile(e.to_string()))
}

/// Check an instance against a compiled schema, reporting the first violation.
pub fn check(validator: &Validator, instance: &Value) -> Result<(), SchemaError> {
    validator
        .validate(instance)
        .map_err(|e| SchemaError::ValidationFailed(e.to_string()))
}

/// Validate a JSON instance against a JSON Schema, both given as text.
/// Returns Ok(()) if valid, Err otherwise.
pub fn validate_json(schema_str: &str, instance_str: &str) -> Result<(), SchemaError> {
    let schema_json: Value = serde_json::from_str(schema_str)?;
    let instance_json: Value = serde_json::from_str(instance_str)?;

    let validator = compile(&schema_json)?;
    check(&validator, &instance_json)
}
