use std::sync::Arc;
use tourbook_core::{BookingNotifier, BookingService, TourRepository};
use tourbook_store::{InMemoryTourRepository, LogNotifier};

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<BookingService>,
}

impl AppState {
    pub fn new(repo: Arc<dyn TourRepository>, notifier: Arc<dyn BookingNotifier>) -> Self {
        Self {
            service: Arc::new(BookingService::new(repo, notifier)),
        }
    }

    /// Seeded in-memory catalog with log-only confirmations.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryTourRepository::new()), Arc::new(LogNotifier::new()))
    }
}
