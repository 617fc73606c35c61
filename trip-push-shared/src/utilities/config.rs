use dotenv::dotenv;
use std::env;
use std::fs;
use std::time::Duration;
use crate::models::credentials::ServiceCredential;
use crate::models::errors::NotificationError;
use crate::utilities::fields::env::{
    CLIENT_EMAIL, PRIVATE_KEY, PROJECT_ID, REQUEST_TIMEOUT_SECS, SEND_BASE_URL, SERVICE_ACCOUNT_FILE, TOKEN_URI,
};

pub const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";
pub const DEFAULT_SEND_BASE_URL: &str = "https://fcm.googleapis.com/v1/projects";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Initialize dotenv (only needs to be called once at startup)
pub fn init() {
    if dotenv().is_ok() {
        log::info!("Loaded .env file");
    } else {
        log::info!("No .env file loaded, using process environment");
    }
}

/// Fetch an environment variable, treating blank values as unset.
pub fn get_optional_env_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Everything the notifier needs, built once at process start.
#[derive(Debug, Clone)]
pub struct NotifierConfig {
    pub credential: ServiceCredential,
    pub token_uri: String,
    pub send_base_url: String,
    pub request_timeout: Duration,
}

impl NotifierConfig {
    pub fn new(credential: ServiceCredential) -> Self {
        Self {
            credential,
            token_uri: DEFAULT_TOKEN_URI.to_string(),
            send_base_url: DEFAULT_SEND_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    pub fn with_token_uri(mut self, token_uri: impl Into<String>) -> Self {
        self.token_uri = token_uri.into();
        self
    }

    pub fn with_send_base_url(mut self, send_base_url: impl Into<String>) -> Self {
        self.send_base_url = send_base_url.into();
        self
    }

    pub fn with_request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }

    /// Reads the service account file (if any), then individual variables on top of it.
    /// Missing credentials are not an error here; see `missing_settings`.
    pub fn from_env() -> Result<Self, NotificationError> {
        let mut credential = ServiceCredential::default();
        let mut token_uri = None;

        if let Some(path) = get_optional_env_var(SERVICE_ACCOUNT_FILE) {
            let data = fs::read_to_string(&path)
                .map_err(|e| NotificationError::Configuration(format!("Unable to read key file at {}: {}", path, e)))?;
            (credential, token_uri) = ServiceCredential::from_service_account_json(&data)?;
        }

        if let Some(project_id) = get_optional_env_var(PROJECT_ID) {
            credential.project_id = project_id;
        }
        if let Some(client_email) = get_optional_env_var(CLIENT_EMAIL) {
            credential.client_email = client_email;
        }
        if let Some(private_key) = get_optional_env_var(PRIVATE_KEY) {
            credential.private_key_pem = private_key;
        }

        let token_uri = get_optional_env_var(TOKEN_URI)
            .or(token_uri)
            .unwrap_or_else(|| DEFAULT_TOKEN_URI.to_string());
        let send_base_url = get_optional_env_var(SEND_BASE_URL)
            .unwrap_or_else(|| DEFAULT_SEND_BASE_URL.to_string());
        let request_timeout = parse_timeout(get_optional_env_var(REQUEST_TIMEOUT_SECS).as_deref())?;

        Ok(Self {
            credential,
            token_uri,
            send_base_url: send_base_url.trim_end_matches('/').to_string(),
            request_timeout,
        })
    }

    /// Names of required settings that are still empty.
    pub fn missing_settings(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.credential.project_id.trim().is_empty() {
            missing.push(PROJECT_ID);
        }
        if self.credential.client_email.trim().is_empty() {
            missing.push(CLIENT_EMAIL);
        }
        if self.credential.private_key_pem.trim().is_empty() {
            missing.push(PRIVATE_KEY);
        }
        missing
    }

    pub fn send_url(&self) -> String {
        format!("{}/{}/messages:send", self.send_base_url, self.credential.project_id)
    }
}

fn parse_timeout(raw: Option<&str>) -> Result<Duration, NotificationError> {
    match raw {
        None => Ok(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS)),
        Some(value) => match value.trim().parse::<u64>() {
            Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
            _ => Err(NotificationError::Configuration(format!(
                "{} must be a positive number of seconds, got '{}'",
                REQUEST_TIMEOUT_SECS, value
            ))),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = NotifierConfig::new(ServiceCredential::new("a@b.c", "key", "trips"));
        assert_eq!(config.token_uri, DEFAULT_TOKEN_URI);
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert_eq!(config.send_url(), "https://fcm.googleapis.com/v1/projects/trips/messages:send");
    }

    #[test]
    fn test_missing_settings_lists_every_blank_value() {
        let config = NotifierConfig::new(ServiceCredential::new("", " ", ""));
        assert_eq!(config.missing_settings(), vec![PROJECT_ID, CLIENT_EMAIL, PRIVATE_KEY]);

        let complete = NotifierConfig::new(ServiceCredential::new("a@b.c", "key", "trips"));
        assert!(complete.missing_settings().is_empty());
    }

    #[test]
    fn test_parse_timeout() {
        assert_eq!(parse_timeout(None).unwrap(), Duration::from_secs(10));
        assert_eq!(parse_timeout(Some("3")).unwrap(), Duration::from_secs(3));
        assert!(matches!(parse_timeout(Some("0")), Err(NotificationError::Configuration(_))));
        assert!(matches!(parse_timeout(Some("soon")), Err(NotificationError::Configuration(_))));
    }
}
