use http::StatusCode;
use reqwest::Error as ReqwestError;
use serde_json::Error as SerdeJsonError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("{message}")]
    Validation {
        message: String,
        fields: Vec<String>,
    },

    #[error("Invalid private key: {0}")]
    KeyFormat(String),

    #[error("Failed to sign assertion: {0}")]
    Signing(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Malformed upstream response: {0}")]
    MalformedResponse(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] ReqwestError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] SerdeJsonError),
}

impl NotificationError {
    pub fn validation(message: impl Into<String>, fields: Vec<String>) -> Self {
        NotificationError::Validation {
            message: message.into(),
            fields,
        }
    }

    /// HTTP-equivalent status the shell should relay for this failure.
    pub fn status_code(&self) -> StatusCode {
        match self {
            NotificationError::Validation { .. } => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Caller mistakes are reported, not treated as server faults.
    pub fn is_client_error(&self) -> bool {
        matches!(self, NotificationError::Validation { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let err = NotificationError::validation("tripId is required", vec!["tripId".to_string()]);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert!(err.is_client_error());
        assert_eq!(err.to_string(), "tripId is required");
    }

    #[test]
    fn test_server_side_failures_map_to_internal_error() {
        let errors = vec![
            NotificationError::Configuration("FCM_PROJECT_ID not set".to_string()),
            NotificationError::KeyFormat("bad base64".to_string()),
            NotificationError::Authentication("no access token".to_string()),
            NotificationError::MalformedResponse("missing access_token".to_string()),
        ];

        for err in errors {
            assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR, "{:?}", err);
            assert!(!err.is_client_error());
        }
    }
}
