//! Contact Notification Sink
//!
//! Where contact-form submissions go after validation. The only sink today
//! writes a structured log line; an email or queue sink plugs in behind the
//! same trait without changing the endpoint's contract.

use crate::models::ContactMessage;

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("notification sink unavailable: {0}")]
    Unavailable(String),
}

pub trait NotificationSink: Send + Sync {
    fn deliver(&self, message: &ContactMessage) -> Result<(), NotifyError>;
}

/// Logs each submission at `info`. Never fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl NotificationSink for LogSink {
    fn deliver(&self, message: &ContactMessage) -> Result<(), NotifyError> {
        tracing::info!(
            name = %message.name,
            email = %message.email,
            subject = %message.subject,
            "Contact form received"
        );
        Ok(())
    }
}
