use actix_web::{web, HttpResponse, Responder};
use common::requests::{InsertResumeRequest, InsertResumeResponse};
use log::{error, info};
use rusqlite::Connection;

use crate::config::ServerConfig;

use super::{error_response, storage, timestamp};

/// Actix handler for `POST /api/db/insert-resume`.
///
/// - `200 OK` with an `InsertResumeResponse` once the row is stored.
/// - `400 Bad Request` when the table name or the data keys are unusable.
/// - `500 Internal Server Error` when SQLite fails.
pub async fn process(
    config: web::Data<ServerConfig>,
    payload: web::Json<InsertResumeRequest>,
) -> impl Responder {
    let request = payload.into_inner();
    info!("Received insert request for table '{}'", request.table_name);
    info!("Data keys: {:?}", request.data.keys().collect::<Vec<_>>());

    if let Err(e) = storage::validate_insert(&request.table_name, &request.data) {
        error!("Rejected insert request: {}", e);
        return error_response(
            HttpResponse::BadRequest(),
            format!("Failed to insert data: {}", e),
        );
    }

    let database_path = config.database_path.clone();
    let table_name = request.table_name.clone();
    let result = web::block(move || insert_resume(&database_path, &request)).await;

    match result {
        Ok(Ok(rowid)) => {
            info!("Data inserted into table '{}' as row {}", table_name, rowid);
            HttpResponse::Ok().json(InsertResumeResponse {
                success: true,
                message: Some(format!(
                    "Resume data successfully inserted into '{}' table",
                    table_name
                )),
                timestamp: Some(timestamp()),
            })
        }
        Ok(Err(e)) => {
            error!("Error inserting resume data: {}", e);
            error_response(
                HttpResponse::InternalServerError(),
                format!("Failed to insert data: {}", e),
            )
        }
        Err(e) => {
            error!("Insert task failed: {}", e);
            error_response(
                HttpResponse::InternalServerError(),
                format!("Failed to insert data: {}", e),
            )
        }
    }
}

/// Opens the database file and stores one submission.
pub fn insert_resume(database_path: &str, request: &InsertResumeRequest) -> Result<i64, String> {
    let conn = Connection::open(database_path).map_err(|e| e.to_string())?;
    storage::insert_row(&conn, &request.table_name, &request.data, &timestamp())
}
