use std::sync::Arc;
use async_trait::async_trait;
use serde_json::Value;
use crate::models::credentials::ServiceCredential;
use crate::models::errors::NotificationError;
use crate::services::assertion_services::create_assertion;
use crate::utilities::fields::oauth::{ACCESS_TOKEN_FIELD, JWT_BEARER_GRANT};
use crate::utilities::logging::{log_error, log_info};

/// Source of bearer tokens for the push endpoint.
///
/// `Ok(None)` means the token endpoint refused to issue one; callers treat it as an
/// authentication failure.
#[async_trait]
pub trait AccessTokenSource: Send + Sync {
    async fn fetch_access_token(&self) -> Result<Option<String>, NotificationError>;
}

/// Mints a fresh assertion and exchanges it on every call. Nothing is cached.
pub struct ServiceAccountTokenSource {
    credential: Arc<ServiceCredential>,
    token_uri: String,
    http_client: reqwest::Client,
}

impl ServiceAccountTokenSource {
    pub fn new(credential: Arc<ServiceCredential>, token_uri: impl Into<String>, http_client: reqwest::Client) -> Self {
        Self {
            credential,
            token_uri: token_uri.into(),
            http_client,
        }
    }
}

#[async_trait]
impl AccessTokenSource for ServiceAccountTokenSource {
    async fn fetch_access_token(&self) -> Result<Option<String>, NotificationError> {
        let assertion = create_assertion(&self.credential, &self.token_uri)?;
        log_info(
            "assertion_minted",
            &format!("Signed assertion for {}", self.credential.client_email),
        );

        exchange_for_access_token(&self.http_client, &self.token_uri, &assertion).await
    }
}

/// Exchanges a signed assertion for an OAuth2 access token using the JWT-bearer grant.
pub async fn exchange_for_access_token(
    client: &reqwest::Client,
    token_uri: &str,
    assertion: &str,
) -> Result<Option<String>, NotificationError> {
    let params = [
        ("grant_type", JWT_BEARER_GRANT),
        ("assertion", assertion),
    ];

    let res = client
        .post(token_uri)
        .form(&params)
        .send()
        .await?;

    let status = res.status();
    let body = res.text().await?;

    if !status.is_success() {
        log_error(
            "token_exchange_failed",
            &format!("OAuth token exchange failed with {}: {}", status, body),
        );
        return Ok(None);
    }

    let token_response: Value = serde_json::from_str(&body)
        .map_err(|e| NotificationError::MalformedResponse(format!("Token response is not JSON: {}", e)))?;

    match token_response.get(ACCESS_TOKEN_FIELD) {
        Some(Value::String(token)) => Ok(Some(token.clone())),
        Some(_) => Err(NotificationError::MalformedResponse(
            "access_token is not a string".to_string(),
        )),
        None => Err(NotificationError::MalformedResponse(
            "Token response has no access_token".to_string(),
        )),
    }
}
