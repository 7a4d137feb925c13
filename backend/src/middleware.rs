use actix_cors::Cors;
use log::debug;

use crate::config::ServerConfig;

/// CORS policy for the `/api` routes. The frontend may be served from a
/// different origin than the API when `RESUME_API_BASE_URL` points elsewhere.
pub fn build_cors(config: &ServerConfig) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allow_any_header()
        .max_age(3600);

    if config.cors_origins.is_empty() {
        cors = cors.allow_any_origin();
        debug!("CORS: allowing any origin");
    } else {
        for origin in &config.cors_origins {
            cors = cors.allowed_origin(origin);
        }
        debug!("CORS: allowed origins {:?}", config.cors_origins);
    }
    cors
}
