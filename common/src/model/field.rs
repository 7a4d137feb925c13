use serde::{Deserialize, Serialize};

/// How a column's initial value is extracted from the input record, and
/// whether it is re-parsed as JSON on submission.
///
/// The category is decided purely by column name. Columns the form does not
/// know about fall into `Unknown` and start out empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldCategory {
    /// Plain text copied verbatim.
    Scalar,
    /// Paragraph lists, joined one paragraph per line.
    Paragraphs,
    /// Skill lists, joined with a comma and a space.
    SkillList,
    /// Nested data edited as JSON text and re-parsed before submission.
    Structured,
    Unknown,
}

pub const SCALAR_FIELDS: &[&str] = &["name", "title", "id", "email", "phone", "location"];

pub const PARAGRAPH_FIELDS: &[&str] = &["professionalSummary"];

pub const SKILL_LIST_FIELDS: &[&str] = &["technicalSkills", "softSkills"];

/// Columns whose edited text is parsed back into JSON on submission.
pub const STRUCTURED_FIELDS: &[&str] = &[
    "employmentHistory",
    "education",
    "skillCategories",
    "certifications",
    "summarySections",
    "tokenStats",
];

impl FieldCategory {
    pub fn of(column: &str) -> Self {
        if SCALAR_FIELDS.contains(&column) {
            FieldCategory::Scalar
        } else if PARAGRAPH_FIELDS.contains(&column) {
            FieldCategory::Paragraphs
        } else if SKILL_LIST_FIELDS.contains(&column) {
            FieldCategory::SkillList
        } else if STRUCTURED_FIELDS.contains(&column) {
            FieldCategory::Structured
        } else {
            FieldCategory::Unknown
        }
    }

    /// Separator used to join array values, for the list-like categories.
    pub fn list_separator(self) -> Option<&'static str> {
        match self {
            FieldCategory::Paragraphs => Some("\n"),
            FieldCategory::SkillList => Some(", "),
            _ => None,
        }
    }
}

/// Rendering mode of a field, derived from its current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderHint {
    SingleLine,
    MultiLine,
}

impl RenderHint {
    pub fn for_value(value: &str) -> Self {
        if value.contains('\n') {
            RenderHint::MultiLine
        } else {
            RenderHint::SingleLine
        }
    }
}
