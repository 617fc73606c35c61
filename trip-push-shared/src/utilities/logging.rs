use serde_json::json;
use log::{info, warn, error};
use crate::utilities::fields::push::TOKEN_PREVIEW_LENGTH;

/// Logs an informational event to CloudWatch in JSON format.
pub fn log_info(event: &str, message: &str) {
    info!("{}", json!({
        "event": event,
        "message": message
    }));
}

/// Logs a warning event, used for expected failures such as bad caller input.
pub fn log_warn(event: &str, message: &str) {
    warn!("{}", json!({
        "event": event,
        "message": message
    }));
}

/// Logs an error event to CloudWatch in JSON format.
pub fn log_error(event: &str, error_message: &str) {
    error!("{}", json!({
        "event": event,
        "error": error_message
    }));
}

/// Bounded prefix of an untrusted token, safe to put in a log line.
pub fn token_preview(token: &str) -> String {
    token.chars().take(TOKEN_PREVIEW_LENGTH).collect()
}
