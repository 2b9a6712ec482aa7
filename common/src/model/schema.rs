use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::FormError;
use crate::model::field::FieldDescriptor;

/// Ordered list of fields making up one form. Serialized as a bare JSON array.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(transparent)]
pub struct FormSchema {
    pub fields: Vec<FieldDescriptor>,
}

impl FormSchema {
    pub fn new(fields: Vec<FieldDescriptor>) -> Self {
        Self { fields }
    }

    /// Decodes the body returned by the schema endpoint.
    ///
    /// The server sends the schema as a JSON string whose content is itself the JSON array,
    /// so the body is decoded twice. A body that is already a bare array is accepted as well.
    pub fn from_wire(body: &str) -> Result<Self, FormError> {
        let outer: Value = serde_json::from_str(body).map_err(FormError::schema_parse)?;
        match outer {
            Value::String(inner) => serde_json::from_str(&inner).map_err(FormError::schema_parse),
            array @ Value::Array(_) => {
                serde_json::from_value(array).map_err(FormError::schema_parse)
            }
            other => Err(FormError::SchemaParse {
                detail: format!("expected a JSON string or array, got {}", json_kind(&other)),
            }),
        }
    }

    /// Encodes the schema the way the schema endpoint sends it: a JSON string literal
    /// wrapping the JSON array.
    pub fn to_wire(&self) -> Result<String, serde_json::Error> {
        let inner = serde_json::to_string(self)?;
        serde_json::to_string(&inner)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
