use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;
use tracing::debug;
use tourbook_core::models::{Booking, Tour};
use tourbook_core::repository::TourRepository;

/// Process-lifetime store: a fixed catalog plus an append-only booking log.
///
/// Every booking write goes through one mutex so id assignment and append are a single step.
pub struct InMemoryTourRepository {
    tours: Vec<Tour>,
    bookings: Mutex<Vec<Booking>>,
}

impl InMemoryTourRepository {
    pub fn new() -> Self {
        Self::with_catalog(seed_tours())
    }

    pub fn with_catalog(tours: Vec<Tour>) -> Self {
        Self {
            tours,
            bookings: Mutex::new(Vec::new()),
        }
    }
}

impl Default for InMemoryTourRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TourRepository for InMemoryTourRepository {
    async fn list_tours(&self) -> Vec<Tour> {
        self.tours.clone()
    }

    async fn add_booking(&self, tour_id: i64, email: &str, date: DateTime<Utc>) -> Booking {
        let mut bookings = self.bookings.lock().await;

        let booking = Booking {
            id: bookings.len() as i64 + 1,
            tour_id,
            email: email.to_string(),
            date,
        };
        bookings.push(booking.clone());
        debug!("Booking {} appended ({} total)", booking.id, bookings.len());

        booking
    }

    async fn list_bookings(&self) -> Vec<Booking> {
        self.bookings.lock().await.clone()
    }
}

/// Catalog loaded at startup.
pub fn seed_tours() -> Vec<Tour> {
    vec![
        Tour {
            id: 1,
            name: "Paris Adventure".to_string(),
            description: "Explore the City of Light".to_string(),
            price: 1000.0,
            transport: "Plane".to_string(),
        },
        Tour {
            id: 2,
            name: "Rome Getaway".to_string(),
            description: "Discover ancient history".to_string(),
            price: 1200.0,
            transport: "Train".to_string(),
        },
    ]
}
