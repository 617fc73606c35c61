use http::StatusCode;
use lambda_http::{Body, Request, Response};
use serde_json::json;
use crate::endpoints::notify;
use trip_push_shared::services::notification_services::TripNotifier;
use trip_push_shared::utilities::requests::extract_body;
use trip_push_shared::utilities::responses::{preflight_response, response_with_code};

const OPTIONS: &str = "OPTIONS";
const POST: &str = "POST";

pub async fn handle_lambda(event: Request, notifier: &TripNotifier) -> Result<Response<Body>, lambda_http::Error> {
    log::info!("Received {} request for path: {}", event.method(), event.uri().path());

    match event.method().as_str() {
        OPTIONS => preflight_response(),
        POST => notify::handler(extract_body(&event), notifier).await,
        _ => response_with_code(json!({ "error": "Method not allowed" }), StatusCode::METHOD_NOT_ALLOWED),
    }
}
