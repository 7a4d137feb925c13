use serde::{Deserialize, Serialize};

/// Destination structure returned by `POST /api/db/table-metadata`.
///
/// The frontend receives one descriptor per input record and uses its
/// `columns` (in order) as the field set of the form. `table_name` is echoed
/// back unchanged in the insert request.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaDescriptor {
    pub table_name: String,
    pub columns: Vec<String>,
}

impl SchemaDescriptor {
    pub fn is_empty(&self) -> bool {
        self.table_name.is_empty() && self.columns.is_empty()
    }
}
