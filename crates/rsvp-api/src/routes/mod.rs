//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{event, guests, health, rsvp};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        // API v1 endpoints
        .nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(rsvp_routes())
        .merge(guest_routes())
        .merge(event_routes())
}

/// Invitation replies
fn rsvp_routes() -> Router<AppState> {
    Router::new().route("/rsvp", post(rsvp::submit_rsvp))
}

/// Host guest list
fn guest_routes() -> Router<AppState> {
    Router::new()
        .route("/guests", get(guests::get_guest_list))
        .route("/guests/:guest_id/check-in", post(guests::check_in_guest))
}

/// Event details
fn event_routes() -> Router<AppState> {
    Router::new().route("/event", get(event::get_event))
}
