use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid endpoint URL: {url}")]
    InvalidEndpoint { url: String },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Foursquare API error {code} ({error_type}): {detail}")]
    Api {
        code: u16,
        error_type: String,
        detail: String,
    },

    #[error("Unexpected HTTP status {status}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("Malformed response: missing '{field}' field")]
    MissingField { field: &'static str },
}

/// Custom result type
pub type ApiResult<T> = Result<T, ApiError>;

/// Error helpers
impl ApiError {
    pub fn api(code: u16, error_type: &str, detail: &str) -> Self {
        Self::Api {
            code,
            error_type: error_type.to_string(),
            detail: detail.to_string(),
        }
    }

    pub fn invalid_endpoint(url: &str) -> Self {
        Self::InvalidEndpoint {
            url: url.to_string(),
        }
    }

    pub fn file_not_found(path: &str) -> Self {
        Self::FileNotFound {
            path: path.to_string(),
        }
    }

    /// The API rejected the request (HTTP 4xx).
    pub fn is_client_error(&self) -> bool {
        matches!(self, ApiError::Api { code, .. } if (400..500).contains(code))
    }

    /// The API itself failed (HTTP 5xx).
    pub fn is_server_error(&self) -> bool {
        matches!(self, ApiError::Api { code, .. } if (500..600).contains(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let error = ApiError::api(403, "rate_limit_exceeded", "Quota exceeded");
        assert_eq!(
            error.to_string(),
            "Foursquare API error 403 (rate_limit_exceeded): Quota exceeded"
        );
    }

    #[test]
    fn test_client_and_server_error_predicates() {
        let client = ApiError::api(404, "not_found", "Photo not found");
        let server = ApiError::api(500, "server_error", "Internal error");

        assert!(client.is_client_error());
        assert!(!client.is_server_error());
        assert!(server.is_server_error());
        assert!(!server.is_client_error());

        let unexpected = ApiError::UnexpectedStatus {
            status: 302,
            body: String::new(),
        };
        assert!(!unexpected.is_client_error());
        assert!(!unexpected.is_server_error());
    }
}
