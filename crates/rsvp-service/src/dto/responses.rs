//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Guest Responses
// ============================================================================

/// One RSVP as shown to clients
#[derive(Debug, Clone, Serialize)]
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

/// Result of a successful submission
#[derive(Debug, Clone, Serialize)]
pub struct ConfirmationResponse {
    pub success: bool,
    pub message: String,
    pub guest: GuestResponse,
}

// ============================================================================
// Roster Responses
// ============================================================================

/// Aggregates over the guest list
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct RosterStatsResponse {
    pub confirmed_count: i64,
    pub total_people: i64,
    pub checked_in_count: i64,
    pub checked_in_people: i64,
    pub declined_count: i64,
}

/// Guest list partitioned into attending and declined, newest first
#[derive(Debug, Clone, Serialize)]
pub struct RosterResponse {
    pub attending: Vec<GuestResponse>,
    pub declined: Vec<GuestResponse>,
    pub stats: RosterStatsResponse,
}

// ============================================================================
// Event Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct EventResponse {
    pub title: String,
    pub host: String,
    pub date: String,
    pub starts_at: String,
    pub ends_at: String,
    pub time_range: String,
    pub venue: String,
    pub address: String,
    pub city: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maps_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue_social_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vibe: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dress_code: Option<String>,
    pub playlist_urls: Vec<String>,
}

// ============================================================================
// Health Check Responses
// ============================================================================

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub storage: String,
}

impl ReadinessResponse {
    pub fn ready(storage_healthy: bool) -> Self {
        Self {
            status: if storage_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                storage: if storage_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
