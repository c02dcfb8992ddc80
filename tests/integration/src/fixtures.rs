//! Test fixtures and data generators
//!
//! Provides reusable request bodies and response shapes for integration tests.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// RSVP request body, as the invitation page sends it
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RsvpRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_guests: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attending: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
}

impl RsvpRequest {
    /// Accept for `guests` people
    pub fn accept(name: &str, guests: i64) -> Self {
        Self {
            name: name.to_string(),
            attending: Some(true),
            number_of_guests: Some(guests.into()),
            ..Default::default()
        }
    }

    /// Decline with an optional note
    pub fn decline(name: &str, comments: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            attending: Some(false),
            comments: comments.map(str::to_string),
            ..Default::default()
        }
    }

    /// Accept under a name nobody else in the table uses
    pub fn unique_accept(guests: i64) -> Self {
        Self::accept(&format!("Guest {}", unique_suffix()), guests)
    }
}

/// Guest record as returned by the API
#[derive(Debug, Clone, Deserialize)]
pub struct GuestResponse {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub number_of_guests: Option<i32>,
    pub attending: bool,
    pub attended: bool,
    pub comments: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Submission confirmation
#[derive(Debug, Deserialize)]
pub struct ConfirmationResponse {
    pub success: bool,
    pub message: String,
    pub guest: GuestResponse,
}

/// Roster aggregates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RosterStats {
    pub confirmed_count: i64,
    pub total_people: i64,
    pub checked_in_count: i64,
    pub checked_in_people: i64,
    pub declined_count: i64,
}

/// Guest list
#[derive(Debug, Deserialize)]
pub struct RosterResponse {
    pub attending: Vec<GuestResponse>,
    pub declined: Vec<GuestResponse>,
    pub stats: RosterStats,
}

impl RosterResponse {
    pub fn find(&self, id: &str) -> Option<&GuestResponse> {
        self.attending
            .iter()
            .chain(&self.declined)
            .find(|g| g.id == id)
    }
}

/// Error envelope
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}
