//! Request DTOs for API endpoints
//!
//! Request DTOs implement `Deserialize` and `Validate`. `Validate` only checks
//! shape limits; the content rules live in the domain value objects.

use serde::Deserialize;
use serde_json::Value;
use validator::Validate;

/// RSVP submission
///
/// `attending` defaults to true when omitted. `number_of_guests` is kept as a
/// raw JSON value so a fractional, string or boolean headcount becomes a field
/// error instead of a decode error.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct SubmitRsvpRequest {
    #[serde(default)]
    #[validate(length(max = 100, message = "Name must be at most 100 characters"))]
    pub name: String,

    #[validate(length(max = 254, message = "Email must be at most 254 characters"))]
    pub email: Option<String>,

    #[validate(length(max = 32, message = "Phone must be at most 32 characters"))]
    pub phone: Option<String>,

    #[serde(default, alias = "numberOfGuests")]
    pub number_of_guests: Option<Value>,

    pub attending: Option<bool>,

    #[validate(length(max = 1000, message = "Comments must be at most 1000 characters"))]
    pub comments: Option<String>,
}

impl SubmitRsvpRequest {
    /// Whether this is an accept-flow submission
    pub fn is_attending(&self) -> bool {
        self.attending.unwrap_or(true)
    }
}
