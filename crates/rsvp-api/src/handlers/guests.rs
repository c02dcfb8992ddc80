//! Guest list handlers
//!
//! Endpoints for the host's roster view and check-in.

use axum::{extract::State, Json};
use rsvp_service::dto::RosterResponse;

use crate::extractors::GuestIdPath;
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// Reload and return the guest list
///
/// GET /guests
pub async fn get_guest_list(State(state): State<AppState>) -> ApiResult<Json<RosterResponse>> {
    let mut session = state.roster().lock().await;
    let view = session.load(state.service_context()).await?;
    Ok(Json(RosterResponse::from(view)))
}

/// Check a guest in at the venue
///
/// POST /guests/{guest_id}/check-in
pub async fn check_in_guest(
    State(state): State<AppState>,
    GuestIdPath(guest_id): GuestIdPath,
) -> ApiResult<NoContent> {
    let mut session = state.roster().lock().await;
    session
        .mark_attended(state.service_context(), guest_id)
        .await?;
    Ok(NoContent)
}
