use crate::{FetchError, config::ResponseExtraction};
use serde_json::Value;

/// Turns a parsed response payload into the text shown in the output box.
pub fn extract_output(
    extraction: ResponseExtraction,
    payload: &Value,
) -> std::result::Result<String, FetchError> {
    match extraction {
        ResponseExtraction::Whole => Ok(render_value(payload)),
        ResponseExtraction::Body => match payload {
            Value::Object(map) => map
                .get("body")
                .map(render_value)
                .ok_or_else(|| FetchError::shape("missing `body` field")),
            other => Err(FetchError::shape(format!(
                "expected a JSON object, got {}",
                kind_of(other)
            ))),
        },
    }
}

// Strings are shown without quotes; everything else as compact JSON.
fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
