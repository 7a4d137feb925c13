use thiserror::Error;

/// Failure of one of the two HTTP calls the form makes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("network error: {0}")]
    Network(String),

    /// Non-success status. `detail` is the server-supplied error text, when
    /// the body carried one.
    #[error("server responded with status {status}")]
    Status { status: u16, detail: Option<String> },

    #[error("invalid response body: {0}")]
    Decode(String),
}

impl FormError {
    /// Text to show the user: the server's own error text if it sent one,
    /// otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            FormError::Status {
                detail: Some(detail),
                ..
            } if !detail.trim().is_empty() => detail.clone(),
            _ => fallback.to_string(),
        }
    }
}

/// Resume data that cannot be used as an input record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("Resume data is not valid JSON: {0}")]
    InvalidJson(String),

    #[error("Resume data must be a JSON object, found {0}")]
    NotAnObject(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("the API base URL is not configured")]
    MissingBaseUrl,

    #[error("the API base URL must start with http:// or https://, got '{0}'")]
    InvalidBaseUrl(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_prefers_server_detail() {
        let err = FormError::Status {
            status: 500,
            detail: Some("Failed to insert data: disk full".to_string()),
        };
        assert_eq!(err.user_message("generic"), "Failed to insert data: disk full");
    }

    #[test]
    fn user_message_falls_back_without_detail() {
        let blank = FormError::Status {
            status: 502,
            detail: Some("  ".to_string()),
        };
        assert_eq!(blank.user_message("generic"), "generic");
        assert_eq!(
            FormError::Network("offline".to_string()).user_message("generic"),
            "generic"
        );
    }

    #[test]
    fn record_errors_describe_the_input() {
        assert_eq!(
            RecordError::NotAnObject("an array").to_string(),
            "Resume data must be a JSON object, found an array"
        );
    }

    #[test]
    fn status_display_includes_detail() {
        let err = FormError::Status {
            status: 404,
            detail: None,
        };
        assert_eq!(err.to_string(), "server responded with status 404");
    }
}
