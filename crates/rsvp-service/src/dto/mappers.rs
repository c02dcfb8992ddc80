//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use rsvp_core::{EventDetails, GuestRecord, RosterStats, RosterView};

use super::responses::{EventResponse, GuestResponse, RosterResponse, RosterStatsResponse};

// ============================================================================
// Guest Mappers
// ============================================================================

impl From<&GuestRecord> for GuestResponse {
    fn from(guest: &GuestRecord) -> Self {
        Self {
            id: guest.id.to_string(),
            name: guest.name.clone(),
            email: guest.email.clone(),
            phone: guest.phone.clone(),
            number_of_guests: guest.number_of_guests,
            attending: guest.attending,
            attended: guest.attended,
            comments: guest.comments.clone(),
            created_at: guest.created_at,
        }
    }
}

impl From<GuestRecord> for GuestResponse {
    fn from(guest: GuestRecord) -> Self {
        Self::from(&guest)
    }
}

// ============================================================================
// Roster Mappers
// ============================================================================

impl From<RosterStats> for RosterStatsResponse {
    fn from(stats: RosterStats) -> Self {
        Self {
            confirmed_count: stats.confirmed_count,
            total_people: stats.total_people,
            checked_in_count: stats.checked_in_count,
            checked_in_people: stats.checked_in_people,
            declined_count: stats.declined_count,
        }
    }
}

impl From<&RosterView> for RosterResponse {
    fn from(view: &RosterView) -> Self {
        Self {
            attending: view.attending.iter().map(GuestResponse::from).collect(),
            declined: view.declined.iter().map(GuestResponse::from).collect(),
            stats: view.stats.into(),
        }
    }
}

// ============================================================================
// Event Mappers
// ============================================================================

impl From<&EventDetails> for EventResponse {
    fn from(event: &EventDetails) -> Self {
        Self {
            title: event.title.clone(),
            host: event.host.clone(),
            date: event.date.clone(),
            starts_at: event.starts_at.clone(),
            ends_at: event.ends_at.clone(),
            time_range: event.time_range(),
            venue: event.venue.clone(),
            address: event.address.clone(),
            city: event.city.clone(),
            location: event.location(),
            maps_url: event.maps_url.clone(),
            venue_social_url: event.venue_social_url.clone(),
            vibe: event.vibe.clone(),
            dress_code: event.dress_code.clone(),
            playlist_urls: event.playlist_urls.clone(),
        }
    }
}
