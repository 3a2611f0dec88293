//! Email delivery providers for contact notifications.

mod config;
mod logger;
mod resend;
mod smtp;

use std::sync::Arc;

use folio_contact::EmailDelivery;

pub use config::*;
pub use logger::LogDelivery;
pub use resend::ResendDelivery;
pub use smtp::SmtpDelivery;

/// Build the provider selected in configuration.
pub fn build_delivery(config: &EmailConfig) -> anyhow::Result<Arc<dyn EmailDelivery>> {
    let delivery: Arc<dyn EmailDelivery> = match config.provider {
        Provider::Log => Arc::new(LogDelivery),
        Provider::Smtp => Arc::new(SmtpDelivery::new(config)?),
        Provider::Resend => Arc::new(ResendDelivery::new(config)?),
    };

    tracing::info!(provider = delivery.name(), "Email delivery provider selected");

    Ok(delivery)
}
