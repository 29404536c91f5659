//! Page decoder implementation

use crate::error::{Error, Result};
use serde_json::Value;

// ============================================================================
// Page Decoder
// ============================================================================

/// Decodes one page response into its item list
///
/// The records path must resolve to an array. A body that is not valid
/// JSON, a missing records field, or a non-array records field is a decode
/// failure, never an empty page: exhaustion is only ever signalled by a
/// present-but-empty item list.
#[derive(Debug, Clone)]
pub struct PageDecoder {
    /// Dot-notation (or JSONPath, for wildcard patterns) path to the item
    /// list in the response body
    records_path: String,
}

impl Default for PageDecoder {
    fn default() -> Self {
        Self::with_path("releases")
    }
}

impl PageDecoder {
    /// Create a decoder for the default `releases` item list
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a decoder with a custom records path
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            records_path: path.into(),
        }
    }

    /// The records path this decoder extracts
    pub fn records_path(&self) -> &str {
        &self.records_path
    }

    /// Decode a response body into its item list
    pub fn decode(&self, body: &str) -> Result<Vec<Value>> {
        let value = self.decode_raw(body)?;
        self.extract(&value)
    }

    /// Parse a response body into a JSON value without extracting items
    pub fn decode_raw(&self, body: &str) -> Result<Value> {
        serde_json::from_str(body).map_err(|e| Error::Decode {
            message: format!("Failed to parse JSON: {e}"),
        })
    }

    /// Extract the item list from a parsed response body
    pub fn extract(&self, value: &Value) -> Result<Vec<Value>> {
        // Wildcard patterns go through jsonpath; plain paths use dot
        // notation with optional array indexing
        if self.records_path.contains('*') {
            return extract_with_jsonpath(value, &self.records_path);
        }

        match extract_simple_path(value, &self.records_path) {
            Some(Value::Array(arr)) => Ok(arr),
            Some(other) => Err(Error::extraction(
                &self.records_path,
                format!("expected an array, got {}", value_kind(&other)),
            )),
            None => Err(Error::extraction(&self.records_path, "field not found")),
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Extract a value using simple dot-notation path
fn extract_simple_path(value: &Value, path: &str) -> Option<Value> {
    let path = path.strip_prefix("$.").unwrap_or(path);
    let parts: Vec<&str> = path.split('.').collect();

    let mut current = value;
    for part in parts {
        // Handle array indexing like "data[0]" or "items[-1]"
        if let Some(bracket_pos) = part.find('[') {
            let name = &part[..bracket_pos];
            let index_str = &part[bracket_pos + 1..part.len() - 1];

            if !name.is_empty() {
                current = current.get(name)?;
            }

            if let Ok(index) = index_str.parse::<i64>() {
                if let Value::Array(arr) = current {
                    #[allow(
                        clippy::cast_possible_truncation,
                        clippy::cast_sign_loss,
                        clippy::cast_possible_wrap
                    )]
                    let idx = if index < 0 {
                        (arr.len() as i64 + index) as usize
                    } else {
                        index as usize
                    };
                    current = arr.get(idx)?;
                } else {
                    return None;
                }
            } else {
                return None;
            }
        } else {
            current = current.get(part)?;
        }
    }

    Some(current.clone())
}

/// Extract records using jsonpath-rust
fn extract_with_jsonpath(value: &Value, path: &str) -> Result<Vec<Value>> {
    use jsonpath_rust::JsonPath;

    let jp = JsonPath::try_from(path).map_err(|e| Error::JsonPath {
        message: format!("Invalid JSONPath: {e}"),
    })?;

    match jp.find(value) {
        Value::Array(arr) => Ok(arr),
        Value::Null => Err(Error::extraction(path, "no match in response body")),
        other => Ok(vec![other]),
    }
}

/// A short label for a JSON value's kind, for error messages
fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
