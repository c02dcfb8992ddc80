//! Path parameter extractors
//!
//! Type-safe extraction of guest ids from path parameters.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use rsvp_core::GuestId;

use crate::response::ApiError;

/// Guest id taken from the `:guest_id` path segment
#[derive(Debug, Clone, Copy)]
pub struct GuestIdPath(pub GuestId);

#[async_trait]
impl<S> FromRequestParts<S> for GuestIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.to_string()))?;

        let id = GuestId::parse(&raw)
            .map_err(|_| ApiError::invalid_path("Invalid guest_id format"))?;

        Ok(GuestIdPath(id))
    }
}
