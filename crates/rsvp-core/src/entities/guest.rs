//! Guest entity - one row per RSVP response

use chrono::{DateTime, Utc};

use crate::value_objects::{Email, GuestId, GuestName, PartySize};

/// A persisted RSVP response
///
/// `id` and `created_at` are assigned by the guest gateway on insert and never
/// change afterwards. `number_of_guests` is present iff `attending` is true.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestRecord {
    pub id: GuestId,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub number_of_guests: Option<i32>,
    pub attending: bool,
    pub attended: bool,
    pub comments: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl GuestRecord {
    /// Materialize a record from a validated submission, as a gateway does on insert
    pub fn from_new(id: GuestId, guest: &NewGuest, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: guest.name().to_string(),
            email: guest.email().map(str::to_string),
            phone: guest.phone().map(str::to_string),
            number_of_guests: guest.number_of_guests(),
            attending: guest.is_attending(),
            attended: false,
            comments: guest.comments().map(str::to_string),
            created_at,
        }
    }

    /// People covered by this record (0 for a decline)
    #[inline]
    pub fn party_size(&self) -> i64 {
        if self.attending {
            i64::from(self.number_of_guests.unwrap_or(0))
        } else {
            0
        }
    }

    /// Whether the guest already checked in at the venue
    #[inline]
    pub fn is_checked_in(&self) -> bool {
        self.attended
    }

    /// Flip the check-in flag; it is never reset
    pub fn check_in(&mut self) {
        self.attended = true;
    }
}

/// A validated RSVP ready to be inserted
///
/// Only constructible through [`NewGuest::confirmed`] and [`NewGuest::declined`],
/// so a declined guest never carries a headcount and an accepted one always does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGuest {
    name: GuestName,
    email: Option<Email>,
    phone: Option<String>,
    party_size: Option<PartySize>,
    comments: Option<String>,
}

impl NewGuest {
    /// Accept the invitation for `party_size` people
    pub fn confirmed(
        name: GuestName,
        email: Option<Email>,
        phone: Option<String>,
        party_size: PartySize,
    ) -> Self {
        Self {
            name,
            email,
            phone: non_blank(phone),
            party_size: Some(party_size),
            comments: None,
        }
    }

    /// Decline the invitation, optionally leaving a note
    pub fn declined(
        name: GuestName,
        email: Option<Email>,
        phone: Option<String>,
        comments: Option<String>,
    ) -> Self {
        Self {
            name,
            email,
            phone: non_blank(phone),
            party_size: None,
            comments: non_blank(comments),
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_ref().map(Email::as_str)
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn number_of_guests(&self) -> Option<i32> {
        self.party_size.map(PartySize::get)
    }

    pub fn comments(&self) -> Option<&str> {
        self.comments.as_deref()
    }

    #[inline]
    pub fn is_attending(&self) -> bool {
        self.party_size.is_some()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
