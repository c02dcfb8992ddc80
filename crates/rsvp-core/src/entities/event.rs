//! Event details - static information about the single event being organized

/// Everything a guest needs to know before replying
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDetails {
    pub title: String,
    pub host: String,
    /// Human-readable date, e.g. "Saturday, March 21"
    pub date: String,
    pub starts_at: String,
    pub ends_at: String,
    pub venue: String,
    pub address: String,
    pub city: String,
    pub maps_url: Option<String>,
    pub venue_social_url: Option<String>,
    pub vibe: Option<String>,
    pub dress_code: Option<String>,
    pub playlist_urls: Vec<String>,
}

impl EventDetails {
    /// "18:00 - 21:00" style time range
    pub fn time_range(&self) -> String {
        format!("{} - {}", self.starts_at, self.ends_at)
    }

    /// Single-line location for listings
    pub fn location(&self) -> String {
        format!("{}, {}, {}", self.venue, self.address, self.city)
    }
}
