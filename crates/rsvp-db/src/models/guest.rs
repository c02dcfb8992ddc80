//! Guest database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the `guest_list` table
#[derive(Debug, Clone, FromRow)]
pub struct GuestModel {
    pub id: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub number_of_guests: Option<i32>,
    pub attending: bool,
    pub attended: bool,
    pub comments: Option<String>,
    pub created_at: DateTime<Utc>,
}
