//! Location of the backend API used by the form.
//!
//! The base URL is resolved once by the application and handed to the form
//! component explicitly. Construction validates it, so a missing value is
//! reported up front instead of producing requests to an undefined origin.

use crate::errors::ConfigError;

pub const TABLE_METADATA_PATH: &str = "/api/db/table-metadata";
pub const INSERT_RESUME_PATH: &str = "/api/db/insert-resume";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Builds the configuration from an optional raw value, typically an
    /// environment variable. Surrounding whitespace and trailing slashes are
    /// removed.
    pub fn new(base_url: Option<&str>) -> Result<Self, ConfigError> {
        let trimmed = base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .ok_or(ConfigError::MissingBaseUrl)?
            .trim_end_matches('/');

        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(trimmed.to_string()));
        }
        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn table_metadata_url(&self) -> String {
        format!("{}{}", self.base_url, TABLE_METADATA_PATH)
    }

    pub fn insert_resume_url(&self) -> String {
        format!("{}{}", self.base_url, INSERT_RESUME_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_endpoint_urls_without_double_slashes() {
        let config = ApiConfig::new(Some(" https://api.example.com/ ")).unwrap();
        assert_eq!(config.base_url(), "https://api.example.com");
        assert_eq!(
            config.table_metadata_url(),
            "https://api.example.com/api/db/table-metadata"
        );
        assert_eq!(
            config.insert_resume_url(),
            "https://api.example.com/api/db/insert-resume"
        );
    }

    #[test]
    fn rejects_missing_or_blank_base_url() {
        assert_eq!(ApiConfig::new(None), Err(ConfigError::MissingBaseUrl));
        assert_eq!(ApiConfig::new(Some("   ")), Err(ConfigError::MissingBaseUrl));
    }

    #[test]
    fn rejects_base_url_without_scheme() {
        assert_eq!(
            ApiConfig::new(Some("localhost:8080")),
            Err(ConfigError::InvalidBaseUrl("localhost:8080".to_string()))
        );
    }
}
