//! Guest entity <-> model mapper

use rsvp_core::{GuestId, GuestRecord, NewGuest};

use crate::models::GuestModel;

/// Convert GuestModel to GuestRecord entity
impl From<GuestModel> for GuestRecord {
    fn from(model: GuestModel) -> Self {
        GuestRecord {
            id: GuestId::new(model.id),
            name: model.name,
            email: model.email,
            phone: model.phone,
            number_of_guests: model.number_of_guests,
            attending: model.attending,
            attended: model.attended,
            comments: model.comments,
            created_at: model.created_at,
        }
    }
}

/// Column values for inserting a validated submission
///
/// `id`, `attended` and `created_at` are left to the column defaults.
pub struct GuestInsert<'a> {
    pub name: &'a str,
    pub email: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub number_of_guests: Option<i32>,
    pub attending: bool,
    pub comments: Option<&'a str>,
}

impl<'a> GuestInsert<'a> {
    pub fn new(guest: &'a NewGuest) -> Self {
        Self {
            name: guest.name(),
            email: guest.email(),
            phone: guest.phone(),
            number_of_guests: guest.number_of_guests(),
            attending: guest.is_attending(),
            comments: guest.comments(),
        }
    }
}
