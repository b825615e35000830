use axum::{
    extract::{Json, State},
    routing::get,
    Router,
};
use tourbook_core::Tour;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/tours", get(list_tours).fallback(crate::not_found))
}

/// GET /tours
async fn list_tours(State(state): State<AppState>) -> Json<Vec<Tour>> {
    Json(state.service.get_available_tours().await)
}
