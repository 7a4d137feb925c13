//! Utility functions for the resume review form.
//!
//! - **Backend calls**: thin `gloo-net` wrappers for the metadata and insert
//!   endpoints that turn every failure into a `FormError`.
//! - **Labels and sizing**: human readable labels for camelCase column names
//!   and textarea heights that follow the content.
//! - **Index conversion**: UTF-16 selection offsets reported by the browser
//!   translated to UTF-8 byte offsets for string edits.

use common::config::ApiConfig;
use common::errors::FormError;
use common::model::schema::SchemaDescriptor;
use common::requests::{error_detail, InsertResumeRequest, InsertResumeResponse, TableMetadataRequest};
use gloo_net::http::Request;
use serde::Serialize;

const MIN_TEXTAREA_ROWS: usize = 3;
const MAX_TEXTAREA_ROWS: usize = 16;

/// Posts `body` as JSON and returns the raw response text of a success
/// status. Non-success statuses become `FormError::Status` carrying the
/// server's error text when the body has one.
async fn post_json<B: Serialize>(url: &str, body: &B) -> Result<String, FormError> {
    let response = Request::post(url)
        .json(body)
        .map_err(|e| FormError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| FormError::Network(e.to_string()))?;

    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| FormError::Decode(e.to_string()))?;

    if response.ok() {
        Ok(text)
    } else {
        Err(FormError::Status {
            status,
            detail: error_detail(&text),
        })
    }
}

pub async fn fetch_table_metadata(
    api: &ApiConfig,
    request: &TableMetadataRequest,
) -> Result<SchemaDescriptor, FormError> {
    let body = post_json(&api.table_metadata_url(), request).await?;
    serde_json::from_str(&body).map_err(|e| FormError::Decode(e.to_string()))
}

pub async fn insert_resume(
    api: &ApiConfig,
    payload: &InsertResumeRequest,
) -> Result<InsertResumeResponse, FormError> {
    let body = post_json(&api.insert_resume_url(), payload).await?;
    Ok(InsertResumeResponse::from_body(&body))
}

/// Turns a column name such as `technicalSkills` or `token_stats` into a
/// label like `Technical Skills` / `Token Stats`.
pub fn field_label(column: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();

    for ch in column.chars() {
        if ch == '_' || ch == '-' || ch.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
        } else if ch.is_uppercase() && !current.is_empty() {
            words.push(std::mem::take(&mut current));
            current.push(ch);
        } else {
            current.push(ch);
        }
    }
    if !current.is_empty() {
        words.push(current);
    }

    words
        .iter()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Number of visible rows for a multi-line value, clamped to a sane range.
pub fn textarea_rows(value: &str) -> usize {
    value
        .lines()
        .count()
        .clamp(MIN_TEXTAREA_ROWS, MAX_TEXTAREA_ROWS)
}

/// Converts a UTF-16 code unit index to its corresponding UTF-8 byte index.
///
/// Browser selection APIs report UTF-16 offsets. Offsets past the end map to
/// the end of the string.
pub fn utf16_to_byte_idx(s: &str, utf16_idx: usize) -> usize {
    let mut units = 0;
    for (byte_idx, ch) in s.char_indices() {
        if units >= utf16_idx {
            return byte_idx;
        }
        units += ch.len_utf16();
    }
    s.len()
}

/// Inserts a line break at the browser cursor position `cursor_utf16`.
pub fn insert_newline_at(text: &str, cursor_utf16: usize) -> String {
    let byte_idx = utf16_to_byte_idx(text, cursor_utf16);
    let mut result = String::with_capacity(text.len() + 1);
    result.push_str(&text[..byte_idx]);
    result.push('\n');
    result.push_str(&text[byte_idx..]);
    result
}
