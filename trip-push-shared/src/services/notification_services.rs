use std::sync::Arc;
use serde_json::Value;
use crate::models::errors::NotificationError;
use crate::models::notifications::{NotificationRequest, NotificationResult, PushMessage};
use crate::services::token_services::{AccessTokenSource, ServiceAccountTokenSource};
use crate::utilities::config::NotifierConfig;
use crate::utilities::logging::{log_error, log_info, log_warn, token_preview};

/// Sends trip notifications through the FCM HTTP v1 API.
///
/// Holds only immutable configuration and a pooled HTTP client, so one instance can serve
/// concurrent requests. A new access token is fetched for every send.
pub struct TripNotifier {
    config: Arc<NotifierConfig>,
    token_source: Arc<dyn AccessTokenSource>,
    http_client: reqwest::Client,
}

impl TripNotifier {
    pub fn new(config: NotifierConfig) -> Result<Self, NotificationError> {
        let http_client = build_http_client(&config)?;
        let token_source = Arc::new(ServiceAccountTokenSource::new(
            Arc::new(config.credential.clone()),
            config.token_uri.clone(),
            http_client.clone(),
        ));

        Ok(Self {
            config: Arc::new(config),
            token_source,
            http_client,
        })
    }

    pub fn with_token_source(
        config: NotifierConfig,
        token_source: Arc<dyn AccessTokenSource>,
    ) -> Result<Self, NotificationError> {
        let http_client = build_http_client(&config)?;

        Ok(Self {
            config: Arc::new(config),
            token_source,
            http_client,
        })
    }

    /// Never fails: every fault is folded into the returned result.
    pub async fn send_notification(&self, request: &NotificationRequest) -> NotificationResult {
        match self.try_send_notification(request).await {
            Ok(result) => result,
            Err(err) => {
                if err.is_client_error() {
                    log_warn("notification_rejected", &err.to_string());
                } else {
                    log_error("notification_failed", &err.to_string());
                }
                NotificationResult::from_error(&err)
            }
        }
    }

    /// Same pipeline as `send_notification`, but hands back the typed error.
    /// Provider rejections are still `Ok`, since they are a normal outcome.
    pub async fn try_send_notification(
        &self,
        request: &NotificationRequest,
    ) -> Result<NotificationResult, NotificationError> {
        let notification = request.validate()?;

        log_info(
            "device_token_received",
            &format!(
                "preview={} length={}",
                token_preview(&notification.device_token),
                notification.device_token.chars().count()
            ),
        );

        if self.config.credential.project_id.trim().is_empty() {
            return Err(NotificationError::Configuration("FCM_PROJECT_ID not set".to_string()));
        }

        let access_token = self
            .token_source
            .fetch_access_token()
            .await?
            .ok_or_else(|| NotificationError::Authentication("Could not obtain access_token".to_string()))?;

        log_info(
            "push_send",
            &format!("Calling FCM v1 API for project {}", self.config.credential.project_id),
        );

        let res = self
            .http_client
            .post(self.config.send_url())
            .bearer_auth(access_token)
            .json(&PushMessage::for_trip(&notification))
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;
        let provider_response: Option<Value> = serde_json::from_str(&body).ok();

        if !status.is_success() {
            log_warn(
                "push_rejected",
                &format!("FCM responded {} for trip {}: {}", status, notification.trip_id, body),
            );
            return Ok(NotificationResult::rejected(status.as_u16(), provider_response));
        }

        log_info(
            "push_delivered",
            &format!("FCM accepted notification for trip {}", notification.trip_id),
        );
        Ok(NotificationResult::delivered(provider_response))
    }
}

fn build_http_client(config: &NotifierConfig) -> Result<reqwest::Client, NotificationError> {
    Ok(reqwest::Client::builder()
        .timeout(config.request_timeout)
        .build()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use async_trait::async_trait;
    use crate::models::credentials::ServiceCredential;

    // Points at a port nothing listens on; any push attempt would fail loudly.
    const UNREACHABLE: &str = "http://127.0.0.1:9/v1/projects";

    struct MockTokenSource {
        token: Option<String>,
        calls: AtomicUsize,
    }

    impl MockTokenSource {
        fn new(token: Option<&str>) -> Arc<Self> {
            Arc::new(Self {
                token: token.map(str::to_string),
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl AccessTokenSource for MockTokenSource {
        async fn fetch_access_token(&self) -> Result<Option<String>, NotificationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.token.clone())
        }
    }

    fn notifier(project_id: &str, source: Arc<MockTokenSource>) -> TripNotifier {
        let config = NotifierConfig::new(ServiceCredential::new("a@b.c", "unused", project_id))
            .with_send_base_url(UNREACHABLE);
        TripNotifier::with_token_source(config, source).unwrap()
    }

    #[tokio::test]
    async fn test_invalid_request_never_fetches_token() {
        let source = MockTokenSource::new(Some("abc"));
        let notifier = notifier("trips", source.clone());

        let request = NotificationRequest::new("t-1", "Airport", "too-short");
        let result = notifier.send_notification(&request).await;

        assert!(!result.success);
        assert_eq!(result.http_status, 400);
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_missing_project_is_checked_before_signing() {
        let source = MockTokenSource::new(Some("abc"));
        let notifier = notifier("", source.clone());

        let request = NotificationRequest::new("t-1", "Airport", "x".repeat(25));
        let err = notifier.try_send_notification(&request).await.unwrap_err();

        assert!(matches!(err, NotificationError::Configuration(_)));
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_absent_token_is_authentication_failure() {
        let source = MockTokenSource::new(None);
        let notifier = notifier("trips", source.clone());

        let request = NotificationRequest::new("t-1", "Airport", "x".repeat(25));
        let err = notifier.try_send_notification(&request).await.unwrap_err();
        assert!(matches!(err, NotificationError::Authentication(_)));

        let result = notifier.send_notification(&request).await;
        assert_eq!(result.http_status, 500);
        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_transport_failure_becomes_internal_error() {
        let source = MockTokenSource::new(Some("abc"));
        let notifier = notifier("trips", source);

        let request = NotificationRequest::new("t-1", "Airport", "x".repeat(25));
        let result = notifier.send_notification(&request).await;

        assert!(!result.success);
        assert_eq!(result.http_status, 500);
        assert!(result.provider_response.is_none());
        assert!(result.error_message.is_some());
    }
}
