//! Initial values of the form, extracted from the input record.
//!
//! Every column is mapped exactly once, when its schema arrives. After that
//! the user edits the strings directly and the record is no longer consulted.

use serde_json::Value;

use crate::model::field::FieldCategory;
use crate::model::record::ResumeRecord;

use super::values::EditableValues;

/// Returns the initial editable text of `column` for `record`.
pub fn map_field(column: &str, record: &ResumeRecord) -> String {
    let category = FieldCategory::of(column);
    let Some(value) = record.get(column).filter(|value| !value.is_null()) else {
        return String::new();
    };

    match category {
        FieldCategory::Unknown => String::new(),
        FieldCategory::Scalar => verbatim(value),
        FieldCategory::Paragraphs | FieldCategory::SkillList => match value {
            Value::Array(items) => {
                let separator = category.list_separator().unwrap_or(", ");
                items.iter().map(verbatim).collect::<Vec<_>>().join(separator)
            }
            other => verbatim(other),
        },
        FieldCategory::Structured => match value {
            Value::String(text) if text.is_empty() => String::new(),
            other => other.to_string(),
        },
    }
}

/// Builds the editable value set for `columns`, one entry per distinct column.
pub fn initial_values(columns: &[String], record: &ResumeRecord) -> EditableValues {
    columns
        .iter()
        .map(|column| (column.clone(), map_field(column, record)))
        .collect()
}

fn verbatim(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> ResumeRecord {
        match value {
            Value::Object(fields) => ResumeRecord::new(fields),
            _ => panic!("test record must be an object"),
        }
    }

    #[test]
    fn scalar_fields_are_copied_verbatim() {
        let r = record(json!({ "name": "Ana", "title": "Engineer", "id": 42 }));
        assert_eq!(map_field("name", &r), "Ana");
        assert_eq!(map_field("title", &r), "Engineer");
        assert_eq!(map_field("id", &r), "42");
        assert_eq!(map_field("email", &r), "");
    }

    #[test]
    fn skill_lists_join_with_comma() {
        let r = record(json!({ "technicalSkills": ["Go", "SQL"], "softSkills": "Mentoring" }));
        assert_eq!(map_field("technicalSkills", &r), "Go, SQL");
        assert_eq!(map_field("softSkills", &r), "Mentoring");
    }

    #[test]
    fn summary_paragraphs_join_with_newline() {
        let r = record(json!({ "professionalSummary": ["Builds APIs.", "Leads teams."] }));
        assert_eq!(map_field("professionalSummary", &r), "Builds APIs.\nLeads teams.");
    }

    #[test]
    fn structured_fields_round_trip_through_json_text() {
        let history = json!([
            { "role": "Eng", "company": "Acme", "highlights": ["Shipped v2", "Cut costs"] },
            { "role": "Intern", "years": 1.5, "remote": true }
        ]);
        let stats = json!({ "prompt": 1200, "completion": 300, "model": null });
        let r = record(json!({ "employmentHistory": history.clone(), "tokenStats": stats.clone() }));

        let text = map_field("employmentHistory", &r);
        assert_eq!(serde_json::from_str::<Value>(&text).unwrap(), history);
        let text = map_field("tokenStats", &r);
        assert_eq!(serde_json::from_str::<Value>(&text).unwrap(), stats);
    }

    #[test]
    fn absent_null_and_unknown_fields_start_empty() {
        let r = record(json!({ "education": null, "hobbies": ["chess"] }));
        assert_eq!(map_field("education", &r), "");
        assert_eq!(map_field("certifications", &r), "");
        assert_eq!(map_field("hobbies", &r), "");
    }

    #[test]
    fn initial_values_cover_every_column_once() {
        let r = record(json!({ "name": "Ana" }));
        let columns = vec!["name".to_string(), "education".to_string(), "name".to_string()];
        let values = initial_values(&columns, &r);
        let keys: Vec<&str> = values.keys().collect();
        assert_eq!(keys, ["name", "education"]);
        assert_eq!(values.get("education"), Some(""));
    }
}
