use serde::{Deserialize, Serialize};
use chrono::{DateTime, Duration, Utc};
use std::fmt;

/// Status label derived from the gap between a booking's stored date and the evaluation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStatus {
    Upcoming,
    Soon,
    Ongoing,
    Completed,
}

impl BookingStatus {
    /// Thresholds are strict: exactly 30 days ahead is `Soon`, exactly 7 days is `Ongoing`,
    /// and a date equal to `now` is `Completed`.
    pub fn evaluate(booking_date: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let diff = booking_date.signed_duration_since(now);

        if diff > Duration::days(30) {
            BookingStatus::Upcoming
        } else if diff > Duration::days(7) {
            BookingStatus::Soon
        } else if diff > Duration::zero() {
            BookingStatus::Ongoing
        } else {
            BookingStatus::Completed
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Upcoming => "Upcoming",
            BookingStatus::Soon => "Soon",
            BookingStatus::Ongoing => "Ongoing",
            BookingStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
