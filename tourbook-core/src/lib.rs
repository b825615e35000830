pub mod models;
pub mod status;
pub mod repository;
pub mod notify;
pub mod service;

pub use models::{Booking, BookingView, CreateBookingRequest, Tour};
pub use status::BookingStatus;
pub use repository::TourRepository;
pub use notify::{BookingNotifier, NotifyError};
pub use service::BookingService;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Internal service error: {0}")]
    InternalError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
