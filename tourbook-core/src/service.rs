use std::sync::Arc;
use chrono::{DateTime, Utc};
use tracing::{info, warn};
use tourbook_shared::models::BookingConfirmedEvent;
use crate::models::{Booking, BookingView, Tour};
use crate::notify::BookingNotifier;
use crate::repository::TourRepository;
use crate::CoreResult;

/// Booking orchestration: creation, tour joins and status computation.
pub struct BookingService {
    repo: Arc<dyn TourRepository>,
    notifier: Arc<dyn BookingNotifier>,
}

impl BookingService {
    pub fn new(repo: Arc<dyn TourRepository>, notifier: Arc<dyn BookingNotifier>) -> Self {
        Self { repo, notifier }
    }

    pub async fn get_available_tours(&self) -> Vec<Tour> {
        self.repo.list_tours().await
    }

    /// Stores a booking stamped with the current time and sends the confirmation.
    ///
    /// Never fails today; the error channel is reserved for validating the tour id and email.
    pub async fn book_tour(&self, tour_id: i64, email: &str) -> CoreResult<Booking> {
        let booking = self.repo.add_booking(tour_id, email, Utc::now()).await;
        info!("Booking stored: id={} tour_id={}", booking.id, booking.tour_id);

        let event = BookingConfirmedEvent::new(booking.id, booking.tour_id, booking.email.clone(), booking.date);
        // Delivery problems must not undo a stored booking.
        if let Err(e) = self.notifier.send_confirmation(&event).await {
            warn!("Confirmation for booking {} not delivered: {}", booking.id, e);
        }

        Ok(booking)
    }

    pub async fn get_booked_tours(&self) -> Vec<BookingView> {
        self.get_booked_tours_at(Utc::now()).await
    }

    /// Booking views with statuses evaluated against `now`, in booking order.
    pub async fn get_booked_tours_at(&self, now: DateTime<Utc>) -> Vec<BookingView> {
        let tours = self.repo.list_tours().await;

        self.repo
            .list_bookings()
            .await
            .into_iter()
            .map(|booking| {
                let tour = find_tour(&tours, booking.tour_id);
                BookingView::new(booking, tour, now)
            })
            .collect()
    }
}

/// Linear scan; unknown ids yield the zero-value tour.
fn find_tour(tours: &[Tour], id: i64) -> Tour {
    tours.iter().find(|t| t.id == id).cloned().unwrap_or_default()
}
