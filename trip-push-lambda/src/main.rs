use std::sync::Arc;
use lambda_http::{service_fn, Error, Request};
use crate::router::handle_lambda;
use trip_push_shared::services::notification_services::TripNotifier;
use trip_push_shared::utilities::config::{self, NotifierConfig};
use trip_push_shared::utilities::logging::log_error;

mod router;
mod endpoints;

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();

    std::panic::set_hook(Box::new(|info| {
        log::error!("Application panicked: {}", info);
    }));

    config::init();
    let notifier_config = NotifierConfig::from_env()?;

    // Keep serving; each request reports the configuration error on its own.
    let missing = notifier_config.missing_settings();
    if !missing.is_empty() {
        log_error("configuration_incomplete", &format!("Missing settings: {}", missing.join(", ")));
    }

    let notifier = Arc::new(TripNotifier::new(notifier_config)?);

    lambda_http::run(service_fn(move |event: Request| {
        let notifier = Arc::clone(&notifier);
        async move { handle_lambda(event, &notifier).await }
    }))
    .await?;
    Ok(())
}
