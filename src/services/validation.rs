use std::collections::HashMap;

use jsonschema::JSONSchema;
use serde_json::Value;

use crate::error::AppError;

const ANNOTATIONS_SCHEMA: &str = include_str!("../../schemas/annotations.schema.json");
const ANNOTATION_SCHEMA: &str = include_str!("../../schemas/annotation.schema.json");

/// Named JSON schemas compiled once at startup, looked up by the
/// `Schema-Name` header on `/validate` and used internally by the merge
/// engine's full-replace write. Treated as a black box: this module does not
/// implement a validation algorithm, only the loading and lookup around one.
pub struct Validator {
    schemas: HashMap<&'static str, JSONSchema>,
}

impl Validator {
    pub fn load() -> Self {
        let mut schemas = HashMap::new();
        schemas.insert("annotations", compile("annotations", ANNOTATIONS_SCHEMA));
        schemas.insert("annotation", compile("annotation", ANNOTATION_SCHEMA));
        Self { schemas }
    }

    pub fn validate(&self, schema_name: &str, body: &Value) -> Result<(), AppError> {
        let schema = self.schemas.get(schema_name).ok_or_else(|| {
            AppError::InvalidRequest(format!("unknown schema '{schema_name}'"))
        })?;

        schema.validate(body).map_err(|errors| {
            let messages: Vec<String> = errors.map(|e| e.to_string()).collect();
            AppError::SchemaValidationFailed(messages.join("; "))
        })
    }
}

fn compile(name: &str, raw: &str) -> JSONSchema {
    let value: Value =
        serde_json::from_str(raw).unwrap_or_else(|e| panic!("schema '{name}' is not valid JSON: {e}"));
    JSONSchema::compile(&value).unwrap_or_else(|e| panic!("schema '{name}' failed to compile: {e}"))
}
