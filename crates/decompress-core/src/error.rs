//! Error types for the decompression middleware

/// Result type alias using [`Error`]
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Main error type for the decompression middleware
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid HTTP request
    #[error("Invalid HTTP request: {0}")]
    InvalidRequest(String),

    /// Middleware error
    #[error("Middleware error: {0}")]
    Middleware(String),

    /// HTTP error
    #[error("HTTP error: {0}")]
    Http(#[from] http::Error),

    /// Internal error (should not happen in production)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Convert error to HTTP status code
    pub fn to_status_code(&self) -> http::StatusCode {
        use http::StatusCode;
        match self {
            Error::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            Error::InvalidRequest("bad body".to_string()).to_status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            Error::Internal("oops".to_string()).to_status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_display() {
        let err = Error::Middleware("decompression failed".to_string());
        assert!(err.to_string().contains("decompression failed"));
    }
}
