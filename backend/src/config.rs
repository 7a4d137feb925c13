//! Server settings read from the environment at startup.

use std::env;

pub const DEFAULT_TABLE_NAME: &str = "resumes";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// SQLite file the insert endpoint writes to.
    pub database_path: String,
    /// Table name announced by the metadata endpoint.
    pub table_name: String,
    /// Origins allowed by CORS. Empty means any origin.
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            database_path: "resumes.sqlite".to_string(),
            table_name: DEFAULT_TABLE_NAME.to_string(),
            cors_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Reads `RESUME_API_HOST`, `RESUME_API_PORT`, `RESUME_DB_PATH`,
    /// `RESUME_TABLE_NAME` and `RESUME_CORS_ORIGINS`, falling back to the
    /// defaults for unset variables.
    pub fn from_env() -> Result<Self, String> {
        let defaults = Self::default();
        let port = match env::var("RESUME_API_PORT") {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| format!("RESUME_API_PORT must be a valid port number, got '{raw}'"))?,
            Err(_) => defaults.port,
        };

        Ok(Self {
            host: env::var("RESUME_API_HOST").unwrap_or(defaults.host),
            port,
            database_path: env::var("RESUME_DB_PATH").unwrap_or(defaults.database_path),
            table_name: env::var("RESUME_TABLE_NAME").unwrap_or(defaults.table_name),
            cors_origins: env::var("RESUME_CORS_ORIGINS")
                .map(|raw| parse_origins(&raw))
                .unwrap_or_default(),
        })
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect();
    if origins.iter().any(|origin| origin == "*") {
        Vec::new()
    } else {
        origins
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_or_blank_origins_allow_any() {
        assert!(parse_origins("").is_empty());
        assert!(parse_origins(" , ").is_empty());
        assert!(parse_origins("https://a.example, *").is_empty());
    }

    #[test]
    fn origins_are_trimmed() {
        assert_eq!(
            parse_origins(" https://a.example ,http://localhost:8081"),
            vec!["https://a.example", "http://localhost:8081"]
        );
    }
}
