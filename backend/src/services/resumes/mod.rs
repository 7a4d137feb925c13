//! # Resume Database Service
//!
//! Endpoints consumed by the resume review form, grouped under `/api/db`.
//!
//! *   **`POST /table-metadata`**: receives `{ resumeData }` and answers with
//!     the destination table name and the record's keys as the column list.
//!     The form renders one field per column.
//! *   **`POST /insert-resume`**: receives `{ tableName, data }` and stores
//!     the submission as one row of a SQLite table, creating the table or
//!     missing columns on the way.
//!
//! Errors are returned as `{ error, timestamp }` JSON bodies so the form can
//! show the server's own text.

mod insert;
mod storage;
mod table_metadata;

use actix_web::web::{post, scope};
use actix_web::{HttpResponse, HttpResponseBuilder, Scope};
use common::requests::ErrorResponse;

const API_PATH: &str = "/api/db";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/table-metadata", post().to(table_metadata::process))
        .route("/insert-resume", post().to(insert::process))
}

fn timestamp() -> String {
    chrono::Utc::now().to_rfc3339()
}

fn error_response(mut builder: HttpResponseBuilder, error: String) -> HttpResponse {
    builder.json(ErrorResponse {
        error,
        timestamp: Some(timestamp()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;
    use actix_web::{test, web, App};
    use common::model::schema::SchemaDescriptor;
    use rusqlite::Connection;
    use serde_json::{json, Value};
    use tempfile::TempDir;

    fn test_config(dir: &TempDir) -> ServerConfig {
        ServerConfig {
            database_path: dir
                .path()
                .join("resumes.sqlite")
                .to_string_lossy()
                .into_owned(),
            ..ServerConfig::default()
        }
    }

    #[actix_web::test]
    async fn table_metadata_lists_record_keys_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_config(&dir)))
                .service(configure_routes()),
        )
            .await;

        let req = test::TestRequest::post()
            .uri("/api/db/table-metadata")
            .set_json(json!({
                "resumeData": {
                    "name": "Ana",
                    "technicalSkills": ["Go", "Rust"],
                    "employmentHistory": [{ "role": "Eng" }]
                }
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let schema: SchemaDescriptor = test::read_body_json(resp).await;
        assert_eq!(schema.table_name, "resumes");
        assert_eq!(
            schema.columns,
            vec!["name", "technicalSkills", "employmentHistory"]
        );
    }

    #[actix_web::test]
    async fn table_metadata_rejects_empty_record() {
        let dir = tempfile::tempdir().unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_config(&dir)))
                .service(configure_routes()),
        )
            .await;

        let req = test::TestRequest::post()
            .uri("/api/db/table-metadata")
            .set_json(json!({ "resumeData": {} }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 500);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body["error"],
            "Error fetching table metadata: resumeData cannot be empty"
        );
    }

    #[actix_web::test]
    async fn insert_resume_stores_row() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(&dir);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(config.clone()))
                .service(configure_routes()),
        )
            .await;

        let req = test::TestRequest::post()
            .uri("/api/db/insert-resume")
            .set_json(json!({
                "tableName": "resumes",
                "data": {
                    "name": "Ana",
                    "technicalSkills": "Go, Rust",
                    "employmentHistory": [{ "role": "Eng" }]
                }
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(
            body["message"],
            "Resume data successfully inserted into 'resumes' table"
        );

        let conn = Connection::open(&config.database_path).unwrap();
        let (skills, history): (String, String) = conn
            .query_row(
                "SELECT technicalSkills, employmentHistory FROM resumes WHERE name = 'Ana'",
                [],
                |r| Ok((r.get(0)?, r.get(1)?)),
            )
            .unwrap();
        assert_eq!(skills, "Go, Rust");
        assert_eq!(history, r#"[{"role":"Eng"}]"#);
    }

    #[actix_web::test]
    async fn insert_resume_rejects_unsafe_table_name() {
        let dir = tempfile::tempdir().unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_config(&dir)))
                .service(configure_routes()),
        )
            .await;

        let req = test::TestRequest::post()
            .uri("/api/db/insert-resume")
            .set_json(json!({
                "tableName": "resumes; DROP TABLE resumes",
                "data": { "name": "Ana" }
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 400);

        let body: Value = test::read_body_json(resp).await;
        let error = body["error"].as_str().unwrap();
        assert!(error.starts_with("Failed to insert data:"));
    }

    #[actix_web::test]
    async fn insert_resume_rejects_empty_data() {
        let dir = tempfile::tempdir().unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_config(&dir)))
                .service(configure_routes()),
        )
            .await;

        let req = test::TestRequest::post()
            .uri("/api/db/insert-resume")
            .set_json(json!({ "tableName": "resumes", "data": {} }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 400);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body["error"],
            "Failed to insert data: data object cannot be empty"
        );
    }

    #[actix_web::test]
    async fn insert_resume_rejects_keys_differing_only_in_case() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(&dir);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(config.clone()))
                .service(configure_routes()),
        )
            .await;

        let req = test::TestRequest::post()
            .uri("/api/db/insert-resume")
            .set_json(json!({
                "tableName": "resumes",
                "data": { "name": "Ana", "Name": "ANA" }
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 400);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body["error"],
            "Failed to insert data: columns 'name' and 'Name' differ only in letter case"
        );
        assert!(!std::path::Path::new(&config.database_path).exists());
    }
}
