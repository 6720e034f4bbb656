//! Best-effort parsing of the language model's reply.
//!
//! The reply is free text. Each stage here is a pure function so the
//! repair rules can be exercised without a model.

use serde_json::{Map, Value};

use crate::domain::menu::errors::ResolutionFailure;

/// Answer used when the model only returned a list of ids.
pub const GENERIC_ANSWER: &str = "Here are some suggestions.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyShape {
    Object,
    IdList,
}

/// Structured reply before id coercion.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelReply {
    pub shape: ReplyShape,
    pub ids: Vec<Value>,
    pub answer: String,
}

/// Parses the text between the first `{` and the last `}` as a JSON object.
pub fn extract_json_object(text: &str) -> Option<Map<String, Value>> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }

    match serde_json::from_str::<Value>(&text[start..=end]) {
        Ok(Value::Object(object)) => Some(object),
        _ => None,
    }
}

/// Parses the text between the first `[` and the last `]` as a JSON array.
pub fn extract_json_array(text: &str) -> Option<Vec<Value>> {
    let start = text.find('[')?;
    let end = text.rfind(']')?;
    if end < start {
        return None;
    }

    match serde_json::from_str::<Value>(&text[start..=end]) {
        Ok(Value::Array(values)) => Some(values),
        _ => None,
    }
}

/// Object first, then bare array; anything else is malformed.
pub fn parse_model_reply(text: &str) -> Result<ModelReply, ResolutionFailure> {
    if let Some(object) = extract_json_object(text) {
        let ids = match object.get("ids") {
            Some(Value::Array(ids)) => ids.clone(),
            None | Some(Value::Null) => Vec::new(),
            Some(single) => vec![single.clone()],
        };
        let answer = match object.get("answer") {
            Some(Value::String(answer)) => answer.clone(),
            None | Some(Value::Null) => String::new(),
            Some(other) => other.to_string(),
        };

        return Ok(ModelReply {
            shape: ReplyShape::Object,
            ids,
            answer,
        });
    }

    if let Some(ids) = extract_json_array(text) {
        return Ok(ModelReply {
            shape: ReplyShape::IdList,
            ids,
            answer: GENERIC_ANSWER.to_string(),
        });
    }

    Err(ResolutionFailure::MalformedModelOutput(
        "no JSON object or array found in model reply".to_string(),
    ))
}

/// Keeps non-negative integers and all-digit strings; everything else is dropped.
pub fn coerce_ids(values: &[Value]) -> Vec<i32> {
    values
        .iter()
        .filter_map(|value| match value {
            Value::Number(number) => number.as_u64().and_then(|id| i32::try_from(id).ok()),
            Value::String(text) if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) => {
                text.parse::<i32>().ok()
            }
            _ => None,
        })
        .collect()
}
