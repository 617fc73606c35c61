pub mod request {
    pub const TRIP_ID_FIELD: &str = "tripId";
    pub const DESTINATION_FIELD: &str = "destination";
    pub const TOKEN_FIELD: &str = "token";
}

pub mod env {
    pub const SERVICE_ACCOUNT_FILE: &str = "FCM_SERVICE_ACCOUNT_FILE";
    pub const PROJECT_ID: &str = "FCM_PROJECT_ID";
    pub const CLIENT_EMAIL: &str = "FCM_CLIENT_EMAIL";
    pub const PRIVATE_KEY: &str = "FCM_PRIVATE_KEY";
    pub const TOKEN_URI: &str = "FCM_TOKEN_URI";
    pub const SEND_BASE_URL: &str = "FCM_SEND_BASE_URL";
    pub const REQUEST_TIMEOUT_SECS: &str = "FCM_REQUEST_TIMEOUT_SECS";
}

pub mod oauth {
    pub const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
    pub const MESSAGING_SCOPE: &str = "https://www.googleapis.com/auth/firebase.messaging";
    pub const ACCESS_TOKEN_FIELD: &str = "access_token";
}

pub mod push {
    pub const NOTIFICATION_TITLE: &str = "Nueva solicitud de viaje";
    pub const DESTINATION_PREFIX: &str = "Destino: ";
    pub const MIN_DEVICE_TOKEN_LENGTH: usize = 20;
    pub const TOKEN_PREVIEW_LENGTH: usize = 40;
}
