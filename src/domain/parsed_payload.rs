use serde::Serialize;
use serde_json::Value;

pub const EXPECTED_PAYLOAD_KEYS: [&str; 4] = ["notes", "teacher_score", "flashcards", "quiz"];

/// JSON produced by the model. Only well-formedness is guaranteed; the field
/// layout is whatever the model returned.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ParsedPayload(Value);

impl ParsedPayload {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn missing_keys(&self) -> Vec<&'static str> {
        EXPECTED_PAYLOAD_KEYS
            .iter()
            .copied()
            .filter(|key| self.0.get(key).is_none())
            .collect()
    }
}
