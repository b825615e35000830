use async_trait::async_trait;
use tracing::info;
use tourbook_core::notify::{BookingNotifier, NotifyError};
use tourbook_shared::models::BookingConfirmedEvent;

/// Stand-in for an email gateway: records each confirmation in the log instead of sending it.
#[derive(Clone, Default)]
pub struct LogNotifier;

impl LogNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl BookingNotifier for LogNotifier {
    async fn send_confirmation(&self, event: &BookingConfirmedEvent) -> Result<(), NotifyError> {
        info!(
            booking_id = event.booking_id,
            tour_id = event.tour_id,
            "Confirmation sent to {}",
            event.email.email_hint()
        );
        Ok(())
    }
}
