//! RSVP handlers
//!
//! Endpoint for guests replying to the invitation.

use axum::{extract::State, Json};
use rsvp_service::dto::{ConfirmationResponse, SubmitRsvpRequest};
use rsvp_service::RsvpService;

use crate::extractors::ValidatedJson;
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Submit an RSVP
///
/// POST /rsvp
pub async fn submit_rsvp(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<SubmitRsvpRequest>,
) -> ApiResult<Created<Json<ConfirmationResponse>>> {
    let service = RsvpService::new(state.service_context());
    let response = service.submit(request).await?;
    Ok(Created(Json(response)))
}
