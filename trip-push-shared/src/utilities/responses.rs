use http::StatusCode;
use http::response::Builder;
use lambda_http::{Response, Body};
use serde::Serialize;

pub const CORS_HEADERS: [(&str, &str); 3] = [
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Methods", "GET, POST, OPTIONS"),
    ("Access-Control-Allow-Headers", "Content-Type, Authorization"),
];

fn with_cors(builder: Builder) -> Builder {
    CORS_HEADERS
        .iter()
        .fold(builder, |builder, (name, value)| builder.header(*name, *value))
}

/// Empty 204 answer to a CORS preflight.
pub fn preflight_response() -> Result<Response<Body>, lambda_http::Error> {
    with_cors(Response::builder().status(StatusCode::NO_CONTENT))
        .body(Body::Empty)
        .map_err(|e| {
            log::error!("Failed to build preflight response: {:?}", e);
            lambda_http::Error::from("Failed to construct HTTP response")
        })
}

pub fn response_with_code<T: Serialize>(data: T, code: StatusCode) -> Result<Response<Body>, lambda_http::Error> {
    let body = serde_json::to_string(&data).map_err(|_| lambda_http::Error::from("Serialization error"))?;
    log::info!("Response Code:{}\nBody: {}", code, body);
    with_cors(Response::builder().status(code))
        .header("Content-Type", "application/json")
        .body(Body::Text(body))
        .map_err(|e| {
            log::error!("Failed to build response: {:?}", e);
            lambda_http::Error::from("Failed to construct HTTP response")
        })
}
