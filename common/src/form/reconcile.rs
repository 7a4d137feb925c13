//! Conversion of the edited strings back into the insert payload.

use serde_json::{Map, Value};

use crate::model::field::FieldCategory;
use crate::requests::InsertResumeRequest;

use super::values::EditableValues;

/// Insert payload together with the structured columns that were sent as
/// raw text because their JSON no longer parses.
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciled {
    pub request: InsertResumeRequest,
    pub raw_columns: Vec<String>,
}

/// Parses `text` as JSON, handing the text back untouched when it is not
/// valid JSON.
pub fn try_parse_json(text: &str) -> Result<Value, &str> {
    serde_json::from_str(text).map_err(|_| text)
}

/// Builds the submission payload from a snapshot of the form values.
///
/// Structured columns are re-parsed with [`try_parse_json`]; a column whose
/// text no longer parses is sent as the raw string and listed in
/// `raw_columns`. All other columns are sent as strings.
pub fn reconcile(table_name: &str, values: &EditableValues) -> Reconciled {
    let mut data = Map::with_capacity(values.len());
    let mut raw_columns = Vec::new();
    for (column, text) in values.iter() {
        let value = if FieldCategory::of(column) == FieldCategory::Structured {
            match try_parse_json(text) {
                Ok(parsed) => parsed,
                Err(raw) => {
                    raw_columns.push(column.to_string());
                    Value::String(raw.to_string())
                }
            }
        } else {
            Value::String(text.to_string())
        };
        data.insert(column.to_string(), value);
    }

    Reconciled {
        request: InsertResumeRequest {
            table_name: table_name.to_string(),
            data,
        },
        raw_columns,
    }
}
