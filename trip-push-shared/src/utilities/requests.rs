use lambda_http::Request;
use serde_json::{json, Value};

/// Extracts the JSON body from a request. Unparseable bodies become an empty object.
pub fn extract_body(event: &Request) -> Value {
    serde_json::from_slice(event.body().as_ref()).unwrap_or_else(|_| json!({}))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lambda_http::Body;

    #[test]
    fn test_extract_body_parses_json() {
        let event = http::Request::builder()
            .method("POST")
            .uri("/")
            .body(Body::from(r#"{"tripId":"t-1"}"#))
            .unwrap();

        assert_eq!(extract_body(&event), json!({ "tripId": "t-1" }));
    }

    #[test]
    fn test_extract_body_tolerates_garbage() {
        let event = http::Request::builder()
            .method("POST")
            .uri("/")
            .body(Body::from("tripId=t-1"))
            .unwrap();

        assert_eq!(extract_body(&event), json!({}));
    }
}
