//! Request and response bodies of the `/api/db` endpoints.
//!
//! Both the frontend (as client) and the backend (as server) use these types,
//! so the field names below are the wire contract. Everything is camelCase on
//! the wire.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::model::record::ResumeRecord;

/// Body of `POST /api/db/table-metadata`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableMetadataRequest {
    pub resume_data: ResumeRecord,
}

/// Body of `POST /api/db/insert-resume`: the submission payload.
///
/// `data` holds one entry per form column. Structured columns carry parsed
/// JSON when the edited text was valid JSON, and the raw text otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertResumeRequest {
    pub table_name: String,
    pub data: Map<String, Value>,
}

/// Success body of `POST /api/db/insert-resume`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InsertResumeResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl InsertResumeResponse {
    /// Reads a success body leniently: a body that is empty or not the
    /// expected JSON still counts as success, just without a message.
    pub fn from_body(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }
}

/// Error body returned by the backend on any non-success status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

/// Extracts a human readable error text from a non-success response body.
///
/// Accepts `{"error": "..."}`, `{"detail": "..."}` and
/// `{"detail": {"error": "..."}}`. Returns `None` for anything else,
/// including bodies that are not JSON at all.
pub fn error_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let text = match (value.get("error"), value.get("detail")) {
        (Some(Value::String(error)), _) => error.as_str(),
        (_, Some(Value::String(detail))) => detail.as_str(),
        (_, Some(detail)) => detail.get("error")?.as_str()?,
        _ => return None,
    };
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn metadata_request_uses_camel_case() {
        let record = ResumeRecord::from_json_str(r#"{"name":"Ana"}"#).unwrap();
        let body = serde_json::to_value(TableMetadataRequest {
            resume_data: record,
        })
        .unwrap();
        assert_eq!(body, json!({ "resumeData": { "name": "Ana" } }));
    }

    #[test]
    fn insert_response_tolerates_missing_or_garbled_bodies() {
        assert_eq!(InsertResumeResponse::from_body("").message, None);
        assert_eq!(InsertResumeResponse::from_body("<html>").message, None);
        let parsed = InsertResumeResponse::from_body(r#"{"success":true,"message":"saved"}"#);
        assert_eq!(parsed.message.as_deref(), Some("saved"));
    }

    #[test]
    fn error_detail_reads_supported_shapes() {
        assert_eq!(error_detail(r#"{"error":"boom"}"#).as_deref(), Some("boom"));
        assert_eq!(error_detail(r#"{"detail":"bad table"}"#).as_deref(), Some("bad table"));
        assert_eq!(
            error_detail(r#"{"detail":{"error":"Failed to insert data","timestamp":"t"}}"#)
                .as_deref(),
            Some("Failed to insert data")
        );
    }

    #[test]
    fn error_detail_ignores_unusable_bodies() {
        assert_eq!(error_detail("Internal Server Error"), None);
        assert_eq!(error_detail(r#"{"error":"   "}"#), None);
        assert_eq!(error_detail(r#"{"detail":{"code":7}}"#), None);
        assert_eq!(error_detail(r#"{"message":"ok"}"#), None);
    }
}
