//! JSON envelope decoder

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Extracts the entity array stored under `root_key`
#[derive(Debug, Clone, Copy)]
pub struct EnvelopeDecoder {
    root_key: &'static str,
}

impl EnvelopeDecoder {
    /// Create a decoder for the given envelope key
    pub const fn new(root_key: &'static str) -> Self {
        Self { root_key }
    }

    pub fn root_key(&self) -> &'static str {
        self.root_key
    }

    /// Decode the response body into entities, preserving their order
    pub fn decode<T: DeserializeOwned>(&self, body: &str) -> Result<Vec<T>> {
        let mut value: Value = serde_json::from_str(body)
            .map_err(|e| Error::decode(format!("Failed to parse JSON: {e}")))?;

        let records = match value.get_mut(self.root_key) {
            Some(Value::Array(items)) => Value::Array(std::mem::take(items)),
            Some(other) => {
                return Err(Error::decode(format!(
                    "Expected '{}' to be an array, found {}",
                    self.root_key,
                    json_type(other)
                )))
            }
            None => {
                return Err(Error::decode(format!(
                    "Response has no '{}' field",
                    self.root_key
                )))
            }
        };

        serde_json::from_value(records)
            .map_err(|e| Error::decode(format!("Invalid '{}' entry: {e}", self.root_key)))
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
