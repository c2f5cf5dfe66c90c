//! Response envelope
//!
//! Every backend response is wrapped as `{status, message?, data?}`.

use serde::{Deserialize, Serialize};

use crate::api::ApiError;

/// The `{status, message, data}` wrapper used by every backend call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub status: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Successful envelope carrying only a message
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status: true,
            message: Some(message.into()),
            data: None,
        }
    }

    /// Successful envelope carrying a payload
    pub fn with_data(data: T) -> Self {
        Self {
            status: true,
            message: None,
            data: Some(data),
        }
    }

    /// Application-level failure
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            status: false,
            message: Some(message.into()),
            data: None,
        }
    }

    /// Unwrap a read response into its payload.
    pub fn into_data(self) -> Result<T, ApiError> {
        if !self.status {
            return Err(ApiError::Rejected {
                message: self.message,
            });
        }
        self.data.ok_or(ApiError::MissingData)
    }

    /// Unwrap a write response into the server's message.
    pub fn into_message(self) -> Result<Option<String>, ApiError> {
        if self.status {
            Ok(self.message)
        } else {
            Err(ApiError::Rejected {
                message: self.message,
            })
        }
    }
}
