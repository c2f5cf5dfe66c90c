//! API Error Types
//!
//! Failure taxonomy for calls to the blog backend. Views never propagate
//! these; they turn them into a visible message via [`ApiError::user_message`].

use thiserror::Error;

/// Errors that can occur when talking to the blog backend
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// No response at all (connect failure, timeout, broken body)
    #[error("Network error: {0}")]
    Transport(String),

    /// The backend answered with `status: false`, or with a non-2xx envelope
    #[error("Request rejected: {}", .message.as_deref().unwrap_or("no message"))]
    Rejected { message: Option<String> },

    /// Non-2xx response without a readable envelope
    #[error("HTTP error {status}")]
    Http { status: u16 },

    /// 2xx response whose body is not a valid envelope
    #[error("Parse error: {0}")]
    Decode(String),

    /// Successful read that carried no `data`
    #[error("Response carried no data")]
    MissingData,
}

impl ApiError {
    /// The server's own message, when it sent a non-blank one
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { message: Some(message) } if !message.trim().is_empty() => {
                Some(message)
            }
            _ => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }

    /// Server message verbatim, or `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }
}

/// Result type for backend calls
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_server_text() {
        let err = ApiError::Rejected {
            message: Some("The title field is required.".to_string()),
        };
        assert_eq!(
            err.user_message("Failed to create blog"),
            "The title field is required."
        );
    }

    #[test]
    fn test_user_message_fallbacks() {
        let blank = ApiError::Rejected {
            message: Some("   ".to_string()),
        };
        assert_eq!(blank.user_message("Failed to delete blog"), "Failed to delete blog");

        let transport = ApiError::Transport("connection refused".to_string());
        assert!(transport.is_transport());
        assert_eq!(transport.user_message("Failed to fetch blogs"), "Failed to fetch blogs");

        let http = ApiError::Http { status: 500 };
        assert_eq!(http.to_string(), "HTTP error 500");
        assert_eq!(http.user_message("Failed to fetch blogs"), "Failed to fetch blogs");
    }
}
