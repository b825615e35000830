use axum::{
    body::Bytes,
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Router,
};
use serde::Serialize;
use tracing::info;
use tourbook_core::{BookingView, CreateBookingRequest};
use crate::error::AppError;
use crate::state::AppState;

pub const BOOKED_MESSAGE: &str = "Tour booked successfully";

#[derive(Debug, Serialize)]
pub struct BookingInfoResponse {
    pub message: &'static str,
    pub example: &'static str,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/book",
            get(booking_info).post(book_tour).fallback(crate::not_found),
        )
        .route("/bookings", get(list_bookings).fallback(crate::not_found))
}

/// POST /book
///
/// The body is decoded by hand so every decode failure (bad syntax, wrong types, empty body,
/// missing content type) answers 400 with the decoder's message.
async fn book_tour(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let req: CreateBookingRequest = serde_json::from_slice(&body)
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let booking = state.service.book_tour(req.tour_id, &req.email).await?;
    info!("Booking confirmed: {} (tour {})", booking.id, booking.tour_id);

    Ok((StatusCode::CREATED, BOOKED_MESSAGE))
}

/// GET /book
/// Usage hint for clients that open the booking endpoint in a browser.
async fn booking_info() -> Json<BookingInfoResponse> {
    Json(BookingInfoResponse {
        message: "To book a tour, send a POST request with tour_id and email",
        example: r#"{"tour_id": 1, "email": "user@example.com"}"#,
    })
}

/// GET /bookings
async fn list_bookings(State(state): State<AppState>) -> Json<Vec<BookingView>> {
    Json(state.service.get_booked_tours().await)
}
