pub mod models {
    pub mod credentials;
    pub mod errors;
    pub mod notifications;
}

pub mod services {
    pub mod assertion_services;
    pub mod notification_services;
    pub mod token_services;
}

pub mod utilities {
    pub mod base64url;
    pub mod config;
    pub mod fields;
    pub mod logging;
    pub mod requests;
    pub mod responses;
}
