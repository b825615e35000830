use async_trait::async_trait;
use tourbook_shared::models::BookingConfirmedEvent;

/// Delivers booking confirmations to customers.
#[async_trait]
pub trait BookingNotifier: Send + Sync {
    async fn send_confirmation(&self, event: &BookingConfirmedEvent) -> Result<(), NotifyError>;
}

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("Confirmation delivery failed: {0}")]
    DeliveryFailed(String),
}
