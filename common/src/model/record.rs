use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::RecordError;

/// Resume data supplied by the caller of the form.
///
/// Keys keep their insertion order (`serde_json` is built with
/// `preserve_order`), which the backend relies on when it derives the column
/// list from the record. The form never mutates a record once it has been
/// handed over.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResumeRecord(Map<String, Value>);

impl ResumeRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Parses a record from JSON text. Anything but a JSON object is rejected.
    pub fn from_json_str(text: &str) -> Result<Self, RecordError> {
        match serde_json::from_str::<Value>(text)
            .map_err(|e| RecordError::InvalidJson(e.to_string()))?
        {
            Value::Object(fields) => Ok(Self(fields)),
            other => Err(RecordError::NotAnObject(json_kind(&other))),
        }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for ResumeRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_object_and_keeps_key_order() {
        let record =
            ResumeRecord::from_json_str(r#"{"name":"Ana","education":[],"id":"7"}"#).unwrap();
        let keys: Vec<&String> = record.keys().collect();
        assert_eq!(keys, ["name", "education", "id"]);
        assert_eq!(record.len(), 3);
    }

    #[test]
    fn rejects_non_object_json() {
        assert_eq!(
            ResumeRecord::from_json_str("[1, 2]"),
            Err(RecordError::NotAnObject("an array"))
        );
        assert!(matches!(
            ResumeRecord::from_json_str("{not json"),
            Err(RecordError::InvalidJson(_))
        ));
    }
}
