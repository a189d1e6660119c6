//! Defensive parsing of generator output
//!
//! Generator output is text that usually happens to be JSON. Decoding runs
//! through an ordered list of strategies, each independently testable:
//!
//! 1. Strip markdown code fences
//! 2. Decode the whole payload as JSON
//! 3. If the value is an object, unwrap its first array-valued field
//! 4. Otherwise, decode the first `[` .. last `]` bracketed substring
//!
//! Structural validation is all-or-nothing: one malformed item fails the
//! whole call, naming the offending index. Error messages carry fragment
//! lengths rather than content, to bound error payload size.

use crate::faq::FaqPair;
use crate::SynthesizerError;
use serde_json::Value;

/// Parses raw generator output into validated question/answer pairs
///
/// # Arguments
///
/// * `raw` - The generator's text output, verbatim
///
/// # Errors
///
/// [`SynthesizerError::Parse`] when no strategy yields a JSON array, or
/// when any item fails structural validation.
pub fn parse_faq_response(raw: &str) -> Result<Vec<FaqPair>, SynthesizerError> {
    let stripped = strip_code_fences(raw);
    let value = decode_json(stripped)?;
    let items = unwrap_items(value, stripped.len())?;
    validate_items(&items)
}

/// Removes a wrapping markdown code fence, if present
///
/// Handles both ```` ```json ```` and bare ```` ``` ```` openers.
pub(crate) fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();

    if !trimmed.starts_with("```") {
        return trimmed;
    }

    // Drop the opening fence line, then a trailing fence if one exists
    let body = match trimmed.split_once('\n') {
        Some((_, rest)) => rest,
        None => return "",
    };

    let body = body.trim_end();
    body.strip_suffix("```").unwrap_or(body).trim()
}

/// Decodes the payload, falling back to the first bracketed substring
fn decode_json(text: &str) -> Result<Value, SynthesizerError> {
    if let Ok(value) = serde_json::from_str::<Value>(text) {
        return Ok(value);
    }

    if let (Some(start), Some(end)) = (text.find('['), text.rfind(']')) {
        if start < end {
            if let Ok(value) = serde_json::from_str::<Value>(&text[start..=end]) {
                tracing::warn!(
                    fragment_chars = end - start + 1,
                    "direct decode failed, recovered bracketed array"
                );
                return Ok(value);
            }
        }
    }

    Err(SynthesizerError::Parse(format!(
        "response is not decodable as JSON ({} chars)",
        text.len()
    )))
}

/// Accepts a bare array, or unwraps the first array-valued field of an
/// object wrapper such as `{"faqs": [...]}`
fn unwrap_items(value: Value, payload_len: usize) -> Result<Vec<Value>, SynthesizerError> {
    match value {
        Value::Array(items) => Ok(items),
        Value::Object(map) => map
            .into_iter()
            .find_map(|(_, field)| match field {
                Value::Array(items) => Some(items),
                _ => None,
            })
            .ok_or_else(|| {
                SynthesizerError::Parse(format!(
                    "JSON object has no array-valued field ({} chars)",
                    payload_len
                ))
            }),
        other => Err(SynthesizerError::Parse(format!(
            "expected a JSON array, got {} ({} chars)",
            json_type_name(&other),
            payload_len
        ))),
    }
}

/// Validates every item; any violation fails the whole call
fn validate_items(items: &[Value]) -> Result<Vec<FaqPair>, SynthesizerError> {
    let mut pairs = Vec::with_capacity(items.len());

    for (index, item) in items.iter().enumerate() {
        let object = item.as_object().ok_or_else(|| {
            SynthesizerError::Parse(format!("item {} is not an object", index))
        })?;

        let question = required_string(object, "question", index)?;
        let answer = required_string(object, "answer", index)?;

        pairs.push(FaqPair { question, answer });
    }

    Ok(pairs)
}

/// A non-empty trimmed string field, or a Parse error naming the index
fn required_string(
    object: &serde_json::Map<String, Value>,
    field: &str,
    index: usize,
) -> Result<String, SynthesizerError> {
    object
        .get(field)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .ok_or_else(|| {
            SynthesizerError::Parse(format!(
                "item {} has a missing or empty '{}' field",
                index, field
            ))
        })
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
