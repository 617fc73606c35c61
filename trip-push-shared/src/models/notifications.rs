use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::models::errors::NotificationError;
use crate::utilities::fields::push::{DESTINATION_PREFIX, MIN_DEVICE_TOKEN_LENGTH, NOTIFICATION_TITLE};
use crate::utilities::fields::request::{DESTINATION_FIELD, TOKEN_FIELD, TRIP_ID_FIELD};
use crate::utilities::logging::token_preview;

pub const ASSERTION_LIFETIME_SECS: i64 = 3600;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AssertionHeader<'a> {
    pub alg: &'a str,
    pub typ: &'a str,
}

pub const ASSERTION_HEADER: AssertionHeader<'static> = AssertionHeader {
    alg: "RS256",
    typ: "JWT",
};

#[derive(Serialize, Debug)]
pub struct AssertionClaims<'a> {
    pub iss: &'a str,
    pub scope: &'a str,
    pub aud: &'a str,
    pub iat: i64,
    pub exp: i64,
}

/// Inbound request as received from the HTTP shell. Fields stay untyped until validated.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct NotificationRequest {
    #[serde(rename = "tripId", default)]
    pub trip_id: Option<Value>,
    #[serde(default)]
    pub destination: Option<Value>,
    #[serde(rename = "token", default)]
    pub device_token: Option<Value>,
}

/// A request that passed validation; every field is a plain string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedNotification {
    pub trip_id: String,
    pub destination: String,
    pub device_token: String,
}

impl NotificationRequest {
    pub fn new(trip_id: impl Into<Value>, destination: impl Into<Value>, device_token: impl Into<Value>) -> Self {
        Self {
            trip_id: Some(trip_id.into()),
            destination: Some(destination.into()),
            device_token: Some(device_token.into()),
        }
    }

    /// Anything that is not a JSON object is treated as a request with every field missing.
    /// Fields are read one by one so an unexpected key never hides the others.
    pub fn from_body(body: Value) -> Self {
        match body {
            Value::Object(mut fields) => Self {
                trip_id: fields.remove(TRIP_ID_FIELD),
                destination: fields.remove(DESTINATION_FIELD),
                device_token: fields.remove(TOKEN_FIELD),
            },
            _ => Self::default(),
        }
    }

    pub fn validate(&self) -> Result<ValidatedNotification, NotificationError> {
        let missing: Vec<String> = [
            (TRIP_ID_FIELD, &self.trip_id),
            (DESTINATION_FIELD, &self.destination),
            (TOKEN_FIELD, &self.device_token),
        ]
            .into_iter()
            .filter(|(_, value)| is_missing(value))
            .map(|(name, _)| name.to_string())
            .collect();

        if !missing.is_empty() {
            return Err(NotificationError::validation(
                format!("{} required", missing.join(", ")),
                missing,
            ));
        }

        let device_token = match &self.device_token {
            Some(Value::String(token)) if token.chars().count() >= MIN_DEVICE_TOKEN_LENGTH => token.clone(),
            _ => {
                return Err(NotificationError::validation(
                    format!(
                        "Device token is invalid or too short (preview: {})",
                        token_preview(&as_text(&self.device_token))
                    ),
                    vec![TOKEN_FIELD.to_string()],
                ));
            }
        };

        Ok(ValidatedNotification {
            trip_id: as_text(&self.trip_id),
            destination: as_text(&self.destination),
            device_token,
        })
    }
}

// Absent, null, empty string, false and zero all count as "not provided".
fn is_missing(value: &Option<Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Bool(b)) => !b,
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(_) => false,
    }
}

fn as_text(value: &Option<Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

#[derive(Serialize, Debug)]
pub struct PushMessage<'a> {
    pub message: PushMessageContent<'a>,
}

#[derive(Serialize, Debug)]
pub struct PushMessageContent<'a> {
    pub token: &'a str,
    pub notification: PushNotification,
    pub data: PushData<'a>,
}

#[derive(Serialize, Debug)]
pub struct PushNotification {
    pub title: String,
    pub body: String,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PushData<'a> {
    pub trip_id: &'a str,
}

impl<'a> PushMessage<'a> {
    pub fn for_trip(notification: &'a ValidatedNotification) -> Self {
        Self {
            message: PushMessageContent {
                token: &notification.device_token,
                notification: PushNotification {
                    title: NOTIFICATION_TITLE.to_string(),
                    body: format!("{}{}", DESTINATION_PREFIX, notification.destination),
                },
                data: PushData {
                    trip_id: &notification.trip_id,
                },
            },
        }
    }
}

/// Outcome handed back to the shell. Always produced, whatever happened upstream.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationResult {
    pub success: bool,
    pub http_status: u16,
    pub provider_response: Option<Value>,
    pub error_message: Option<String>,
}

impl NotificationResult {
    pub fn delivered(provider_response: Option<Value>) -> Self {
        Self {
            success: true,
            http_status: 200,
            provider_response,
            error_message: None,
        }
    }

    pub fn rejected(http_status: u16, provider_response: Option<Value>) -> Self {
        Self {
            success: false,
            http_status,
            provider_response,
            error_message: None,
        }
    }

    pub fn from_error(err: &NotificationError) -> Self {
        Self {
            success: false,
            http_status: err.status_code().as_u16(),
            provider_response: None,
            error_message: Some(err.to_string()),
        }
    }
}
