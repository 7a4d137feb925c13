//! SQLite persistence for submitted resumes.
//!
//! Tables are created on first insert with one `TEXT` column per data key,
//! plus an `inserted_at` timestamp. Keys that appear in later submissions are
//! added as new columns. Table and column names come from the request, so
//! they are checked against a strict identifier pattern before being quoted
//! into SQL.

use std::collections::HashMap;

use regex::Regex;
use rusqlite::types::Value as SqlValue;
use rusqlite::{params_from_iter, Connection};
use serde_json::{Map, Value};

/// Bookkeeping column added to every table.
pub const INSERTED_AT_COLUMN: &str = "inserted_at";

/// Checks that `name` can be used as an unescaped SQL identifier.
pub fn validate_identifier(name: &str) -> Result<(), String> {
    let identifier_re =
        Regex::new(r"^[A-Za-z_][A-Za-z0-9_]{0,62}$").map_err(|e| format!("Regex error: {}", e))?;
    if identifier_re.is_match(name) {
        Ok(())
    } else {
        Err(format!(
            "'{}' is not a valid name (letters, digits and '_' only, not starting with a digit)",
            name
        ))
    }
}

/// Validates the table name and every data key of an insert request.
///
/// SQLite compares column names case-insensitively, so keys that differ only
/// in case are rejected.
pub fn validate_insert(table_name: &str, data: &Map<String, Value>) -> Result<(), String> {
    if table_name.trim().is_empty() {
        return Err("tableName is required".to_string());
    }
    if data.is_empty() {
        return Err("data object cannot be empty".to_string());
    }
    validate_identifier(table_name)?;
    let mut seen: HashMap<String, &str> = HashMap::with_capacity(data.len());
    for column in data.keys() {
        validate_identifier(column)?;
        if column.eq_ignore_ascii_case(INSERTED_AT_COLUMN) {
            return Err(format!("'{}' is a reserved column name", column));
        }
        if let Some(previous) = seen.insert(column.to_ascii_lowercase(), column) {
            return Err(format!(
                "columns '{}' and '{}' differ only in letter case",
                previous, column
            ));
        }
    }
    Ok(())
}

/// Lists the columns of `table`, or an empty list when the table is missing.
fn existing_columns(conn: &Connection, table: &str) -> Result<Vec<String>, String> {
    let mut stmt = conn
        .prepare(&format!("PRAGMA table_info(\"{}\")", table))
        .map_err(|e| e.to_string())?;
    let columns = stmt
        .query_map([], |row| row.get::<_, String>(1))
        .map_err(|e| e.to_string())?
        .filter_map(Result::ok)
        .collect();
    Ok(columns)
}

/// Creates `table` if it does not exist and adds any of `columns` it lacks.
///
/// Returns `true` when the table was created.
pub fn ensure_table(conn: &Connection, table: &str, columns: &[&str]) -> Result<bool, String> {
    let existing = existing_columns(conn, table)?;

    if existing.is_empty() {
        let mut definitions = vec![format!("\"{}\" TEXT NOT NULL", INSERTED_AT_COLUMN)];
        definitions.extend(columns.iter().map(|column| format!("\"{}\" TEXT", column)));
        conn.execute(
            &format!(
                "CREATE TABLE IF NOT EXISTS \"{}\" ({})",
                table,
                definitions.join(", ")
            ),
            [],
        )
            .map_err(|e| e.to_string())?;
        return Ok(true);
    }

    for column in columns {
        if !existing.iter().any(|e| e.eq_ignore_ascii_case(column)) {
            conn.execute(
                &format!("ALTER TABLE \"{}\" ADD COLUMN \"{}\" TEXT", table, column),
                [],
            )
                .map_err(|e| e.to_string())?;
        }
    }
    Ok(false)
}

/// Converts a submitted value to what is stored: strings verbatim, `null` as
/// SQL NULL, anything else as its JSON text.
fn to_sql_value(value: &Value) -> SqlValue {
    match value {
        Value::Null => SqlValue::Null,
        Value::String(text) => SqlValue::Text(text.clone()),
        other => SqlValue::Text(other.to_string()),
    }
}

/// Inserts one row and returns its rowid. The caller validates names first.
pub fn insert_row(
    conn: &Connection,
    table: &str,
    data: &Map<String, Value>,
    inserted_at: &str,
) -> Result<i64, String> {
    let columns: Vec<&str> = data.keys().map(String::as_str).collect();
    let created = ensure_table(conn, table, &columns)?;
    if created {
        log::info!("Created table '{}' with {} columns", table, columns.len());
    }

    let mut names = vec![format!("\"{}\"", INSERTED_AT_COLUMN)];
    names.extend(columns.iter().map(|column| format!("\"{}\"", column)));
    let placeholders: Vec<String> = (1..=names.len()).map(|i| format!("?{}", i)).collect();

    let mut values = vec![SqlValue::Text(inserted_at.to_string())];
    values.extend(data.values().map(to_sql_value));

    conn.execute(
        &format!(
            "INSERT INTO \"{}\" ({}) VALUES ({})",
            table,
            names.join(", "),
            placeholders.join(", ")
        ),
        params_from_iter(values.iter()),
    )
        .map_err(|e| e.to_string())?;

    Ok(conn.last_insert_rowid())
}
