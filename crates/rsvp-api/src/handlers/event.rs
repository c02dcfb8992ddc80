//! Event handlers

use axum::{extract::State, Json};
use rsvp_service::dto::EventResponse;

use crate::state::AppState;

/// Event details shown on the invitation
///
/// GET /event
pub async fn get_event(State(state): State<AppState>) -> Json<EventResponse> {
    Json(EventResponse::from(state.service_context().event()))
}
