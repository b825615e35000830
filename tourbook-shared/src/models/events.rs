use crate::pii::Masked;

/// Emitted once a booking has been stored; consumed by confirmation notifiers.
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct BookingConfirmedEvent {
    pub booking_id: i64,
    pub tour_id: i64,
    pub email: Masked<String>,
    pub timestamp: i64,
}

impl BookingConfirmedEvent {
    pub fn new(booking_id: i64, tour_id: i64, email: impl Into<String>, booked_at: chrono::DateTime<chrono::Utc>) -> Self {
        Self {
            booking_id,
            tour_id,
            email: Masked(email.into()),
            timestamp: booked_at.timestamp(),
        }
    }

    /// Recipient address, unmasked.
    pub fn recipient(&self) -> &str {
        &self.email.0
    }
}
