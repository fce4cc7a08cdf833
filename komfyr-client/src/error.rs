//! Error types for the Komfyrvakt client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when using the Komfyrvakt client
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request could not be completed at the transport level
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status
    ///
    /// `message` is the `detail` field of the error body when present,
    /// otherwise `HTTP <status>`.
    #[error("{message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message from the service
        message: String,
    },

    /// A successful response body could not be decoded
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// A response envelope did not carry its payload field
    #[error("Response is missing the '{0}' field")]
    MissingField(String),

    /// The request could not be built
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ClientError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// HTTP status of a service-reported failure
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Transport(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if this error is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { status: 404, .. })
    }

    /// Check if the service rejected the API key
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Api { status: 401 | 403, .. })
    }

    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Api { status, .. } if (400..500).contains(status))
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::Api { status, .. } if *status >= 500)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_displays_message_only() {
        let err = ClientError::api_error(401, "Invalid API key");
        assert_eq!(err.to_string(), "Invalid API key");
        assert_eq!(err.status(), Some(401));
        assert!(err.is_unauthorized());
        assert!(err.is_client_error());
        assert!(!err.is_server_error());
    }

    #[test]
    fn test_status_classification() {
        assert!(ClientError::api_error(404, "Log x not found").is_not_found());
        assert!(ClientError::api_error(500, "HTTP 500").is_server_error());
        assert!(!ClientError::MissingField("stats".into()).is_client_error());
        assert_eq!(ClientError::Decode("eof".into()).status(), None);
    }
}
