use actix_web::{web, HttpResponse, Responder};
use common::model::record::ResumeRecord;
use common::model::schema::SchemaDescriptor;
use common::requests::TableMetadataRequest;
use log::{error, info};

use crate::config::ServerConfig;

use super::error_response;

/// Actix handler for `POST /api/db/table-metadata`.
///
/// - `200 OK` with a `SchemaDescriptor` whose columns are the record's keys.
/// - `500 Internal Server Error` with an `ErrorResponse` when the record is empty.
pub async fn process(
    config: web::Data<ServerConfig>,
    payload: web::Json<TableMetadataRequest>,
) -> impl Responder {
    match table_metadata(&config.table_name, &payload.resume_data) {
        Ok(schema) => HttpResponse::Ok().json(schema),
        Err(e) => {
            error!("Error fetching table metadata: {}", e);
            error_response(
                HttpResponse::InternalServerError(),
                format!("Error fetching table metadata: {}", e),
            )
        }
    }
}

/// Derives the form schema from the submitted record, keeping key order.
pub fn table_metadata(table_name: &str, record: &ResumeRecord) -> Result<SchemaDescriptor, String> {
    if record.is_empty() {
        return Err("resumeData cannot be empty".to_string());
    }
    let columns: Vec<String> = record.keys().cloned().collect();
    info!(
        "Generated {} columns from resume data keys: {:?}",
        columns.len(),
        columns
    );
    Ok(SchemaDescriptor {
        table_name: table_name.to_string(),
        columns,
    })
}
