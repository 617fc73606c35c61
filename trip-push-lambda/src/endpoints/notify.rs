use http::StatusCode;
use lambda_http::{Body, Response};
use serde_json::Value;
use trip_push_shared::models::notifications::NotificationRequest;
use trip_push_shared::services::notification_services::TripNotifier;
use trip_push_shared::utilities::responses::response_with_code;

pub async fn handler(body: Value, notifier: &TripNotifier) -> Result<Response<Body>, lambda_http::Error> {
    let request = NotificationRequest::from_body(body);
    let result = notifier.send_notification(&request).await;

    let code = StatusCode::from_u16(result.http_status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    response_with_code(result, code)
}
