use std::fmt;
use serde::Deserialize;
use crate::models::errors::NotificationError;

/// Service-account identity used to mint assertions. Loaded once at startup.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ServiceCredential {
    pub client_email: String,
    pub private_key_pem: String,
    pub project_id: String,
}

// The private key must never reach a log line, so Debug is written by hand.
impl fmt::Debug for ServiceCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceCredential")
            .field("client_email", &self.client_email)
            .field("private_key_pem", &"<redacted>")
            .field("project_id", &self.project_id)
            .finish()
    }
}

/// Subset of the Google service-account JSON file we care about.
#[derive(Deserialize, Debug, Default)]
pub struct ServiceAccountKey {
    #[serde(default)]
    pub private_key: String,
    #[serde(default)]
    pub client_email: String,
    #[serde(default)]
    pub project_id: String,
    pub token_uri: Option<String>,
}

impl ServiceCredential {
    pub fn new(client_email: impl Into<String>, private_key_pem: impl Into<String>, project_id: impl Into<String>) -> Self {
        Self {
            client_email: client_email.into(),
            private_key_pem: private_key_pem.into(),
            project_id: project_id.into(),
        }
    }

    /// Parses the JSON document downloaded from the Firebase console.
    pub fn from_service_account_json(data: &str) -> Result<(Self, Option<String>), NotificationError> {
        let key: ServiceAccountKey = serde_json::from_str(data)
            .map_err(|e| NotificationError::Configuration(format!("Invalid service account JSON: {}", e)))?;

        let credential = Self {
            client_email: key.client_email,
            private_key_pem: key.private_key,
            project_id: key.project_id,
        };

        Ok((credential, key.token_uri))
    }

    pub fn has_signing_identity(&self) -> bool {
        !self.client_email.trim().is_empty() && !self.private_key_pem.trim().is_empty()
    }
}
