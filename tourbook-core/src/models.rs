use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use crate::status::BookingStatus;

/// A catalog entry. `Tour::default()` is the zero-value tour embedded in views whose tour is unknown.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub transport: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: i64,
    pub tour_id: i64,
    pub email: String,
    pub date: DateTime<Utc>,
}

/// Booking joined with its tour and a status computed at read time. Never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingView {
    pub id: i64,
    pub tour: Tour,
    pub email: String,
    pub date: DateTime<Utc>,
    pub status: BookingStatus,
}

impl BookingView {
    pub fn new(booking: Booking, tour: Tour, now: DateTime<Utc>) -> Self {
        let status = BookingStatus::evaluate(booking.date, now);
        Self {
            id: booking.id,
            tour,
            email: booking.email,
            date: booking.date,
            status,
        }
    }
}

/// Body of `POST /book`. Absent fields decode to zero values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateBookingRequest {
    pub tour_id: i64,
    pub email: String,
}
