use async_trait::async_trait;
use chrono::{DateTime, Utc};
use crate::models::{Booking, Tour};

/// Storage port for the tour catalog and the booking log.
///
/// Implementations never fail: the catalog is fixed and bookings are only ever appended.
#[async_trait]
pub trait TourRepository: Send + Sync {
    /// Full catalog in insertion order.
    async fn list_tours(&self) -> Vec<Tour>;

    /// Appends a booking with the next sequential id (existing count + 1) and returns the stored record.
    /// `tour_id` is not checked against the catalog.
    async fn add_booking(&self, tour_id: i64, email: &str, date: DateTime<Utc>) -> Booking;

    /// All bookings in insertion order.
    async fn list_bookings(&self) -> Vec<Booking>;
}
