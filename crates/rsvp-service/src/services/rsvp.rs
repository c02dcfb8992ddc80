//! RSVP service
//!
//! Validates a guest's reply and stores it as one new record.

use rsvp_core::{Email, GuestName, NewGuest, PartySize};
use tracing::{error, info, instrument};

use crate::dto::{ConfirmationResponse, GuestResponse, SubmitRsvpRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult, SUBMIT_FAILED_MESSAGE};

/// Confirmation for an accepted invitation
pub const ACCEPTED_MESSAGE: &str = "RSVP sent! See you at the party! 🎉";

/// Confirmation for a declined invitation
pub const DECLINED_MESSAGE: &str = "Thanks for letting us know! We'll miss you 😢";

/// RSVP submission service
pub struct RsvpService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RsvpService<'a> {
    /// Create a new RsvpService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Validate and store one RSVP
    ///
    /// Every check runs before the gateway is contacted, and at most one
    /// insert is issued. Repeated submissions create independent records.
    #[instrument(skip(self, request), fields(attending = request.is_attending()))]
    pub async fn submit(&self, request: SubmitRsvpRequest) -> ServiceResult<ConfirmationResponse> {
        let guest = Self::normalize(request)?;
        let attending = guest.is_attending();

        let record = self.ctx.guest_repo().insert(&guest).await.map_err(|e| {
            error!(error = %e, "Failed to store RSVP");
            ServiceError::Persistence(SUBMIT_FAILED_MESSAGE)
        })?;

        info!(
            guest_id = %record.id,
            attending,
            number_of_guests = record.number_of_guests,
            "RSVP stored"
        );

        Ok(ConfirmationResponse {
            success: true,
            message: if attending {
                ACCEPTED_MESSAGE
            } else {
                DECLINED_MESSAGE
            }
            .to_string(),
            guest: GuestResponse::from(record),
        })
    }

    /// Turn a raw request into a validated submission
    ///
    /// Fields are checked in order name, email, number of guests; the first
    /// failure is returned. A decline drops any headcount, and an accept
    /// drops any note.
    pub fn normalize(request: SubmitRsvpRequest) -> ServiceResult<NewGuest> {
        let attending = request.is_attending();

        let name = GuestName::parse(&request.name)?;

        let email = request
            .email
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .map(Email::parse)
            .transpose()?;

        let guest = if attending {
            let size = request
                .number_of_guests
                .as_ref()
                .ok_or_else(PartySize::missing)
                .and_then(PartySize::from_json)?;
            NewGuest::confirmed(name, email, request.phone, size)
        } else {
            NewGuest::declined(name, email, request.phone, request.comments)
        };

        Ok(guest)
    }
}
