//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file if present).

use rsvp_core::EventDetails;
use serde::Deserialize;
use std::env;
use std::str::FromStr;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub storage: StorageBackend,
    /// Present whenever `DATABASE_URL` is set; required for the postgres backend
    pub database: Option<DatabaseConfig>,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
    pub event: EventConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "production" => Ok(Self::Production),
            "staging" => Ok(Self::Staging),
            "development" => Ok(Self::Development),
            other => Err(ConfigError::InvalidValue("APP_ENV", other.to_string())),
        }
    }
}

/// Where guest records are stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// PostgreSQL `guest_list` table
    #[default]
    Postgres,
    /// Process-local store, lost on restart
    Memory,
}

impl FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "memory" => Ok(Self::Memory),
            other => Err(ConfigError::InvalidValue("STORAGE_BACKEND", other.to_string())),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    /// Apply pending migrations on startup
    #[serde(default)]
    pub run_migrations: bool,
}

/// Rate limiting configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,
    #[serde(default = "default_burst")]
    pub burst: u32,
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

/// Details of the event, shown on the invitation
#[derive(Debug, Clone, Deserialize)]
pub struct EventConfig {
    pub title: String,
    pub host: String,
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
    #[serde(default)]
    pub playlist_urls: Vec<String>,
}

impl Default for EventConfig {
    fn default() -> Self {
        Self {
            title: "Ro's 30th".to_string(),
            host: "Rocío".to_string(),
            date: "Saturday, March 21".to_string(),
            starts_at: "18:00".to_string(),
            ends_at: "21:00".to_string(),
            venue: "Jummpark".to_string(),
            address: "24 de Septiembre 2150".to_string(),
            city: "Concepción, Tucumán".to_string(),
            maps_url: None,
            venue_social_url: None,
            vibe: Some("Jumps, music & fun. Food and soft drinks included".to_string()),
            dress_code: None,
            playlist_urls: Vec::new(),
        }
    }
}

impl EventConfig {
    /// Build the domain view of the event
    pub fn to_details(&self) -> EventDetails {
        EventDetails {
            title: self.title.clone(),
            host: self.host.clone(),
            date: self.date.clone(),
            starts_at: self.starts_at.clone(),
            ends_at: self.ends_at.clone(),
            venue: self.venue.clone(),
            address: self.address.clone(),
            city: self.city.clone(),
            maps_url: self.maps_url.clone(),
            venue_social_url: self.venue_social_url.clone(),
            vibe: self.vibe.clone(),
            dress_code: self.dress_code.clone(),
            playlist_urls: self.playlist_urls.clone(),
        }
    }
}

// Default value functions
fn default_app_name() -> String {
    "rsvp-server".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_requests_per_second() -> u32 {
    10
}

fn default_burst() -> u32 {
    50
}

fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn parse_bool(raw: &str) -> bool {
    matches!(raw.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let parsed = |key: &str| lookup(key).and_then(|s| s.trim().parse().ok());
        let event_defaults = EventConfig::default();
        let event_var = |key: &str, fallback: String| lookup(key).unwrap_or(fallback);

        let storage = match lookup("STORAGE_BACKEND") {
            Some(raw) => raw.parse()?,
            None => StorageBackend::default(),
        };

        let database = lookup("DATABASE_URL").map(|url| DatabaseConfig {
            url,
            max_connections: parsed("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(default_max_connections),
            min_connections: parsed("DATABASE_MIN_CONNECTIONS")
                .unwrap_or_else(default_min_connections),
            run_migrations: lookup("DATABASE_RUN_MIGRATIONS")
                .is_some_and(|s| parse_bool(&s)),
        });

        if storage == StorageBackend::Postgres && database.is_none() {
            return Err(ConfigError::MissingVar("DATABASE_URL"));
        }

        Ok(Self {
            app: AppSettings {
                name: lookup("APP_NAME").unwrap_or_else(default_app_name),
                env: match lookup("APP_ENV") {
                    Some(raw) => raw.parse()?,
                    None => default_env(),
                },
            },
            api: ServerConfig {
                host: lookup("API_HOST").unwrap_or_else(default_host),
                port: match lookup("API_PORT") {
                    Some(raw) => raw
                        .trim()
                        .parse()
                        .map_err(|_| ConfigError::InvalidValue("API_PORT", raw))?,
                    None => default_port(),
                },
            },
            storage,
            database,
            rate_limit: RateLimitConfig {
                requests_per_second: parsed("RATE_LIMIT_REQUESTS_PER_SECOND")
                    .unwrap_or_else(default_requests_per_second),
                burst: parsed("RATE_LIMIT_BURST").unwrap_or_else(default_burst),
            },
            cors: CorsConfig {
                allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                    .map(|s| parse_list(&s))
                    .unwrap_or_default(),
            },
            event: EventConfig {
                title: event_var("EVENT_TITLE", event_defaults.title),
                host: event_var("EVENT_HOST", event_defaults.host),
                date: event_var("EVENT_DATE", event_defaults.date),
                starts_at: event_var("EVENT_STARTS_AT", event_defaults.starts_at),
                ends_at: event_var("EVENT_ENDS_AT", event_defaults.ends_at),
                venue: event_var("EVENT_VENUE", event_defaults.venue),
                address: event_var("EVENT_ADDRESS", event_defaults.address),
                city: event_var("EVENT_CITY", event_defaults.city),
                maps_url: lookup("EVENT_MAPS_URL").or(event_defaults.maps_url),
                venue_social_url: lookup("EVENT_VENUE_SOCIAL_URL")
                    .or(event_defaults.venue_social_url),
                vibe: lookup("EVENT_VIBE").or(event_defaults.vibe),
                dress_code: lookup("EVENT_DRESS_CODE").or(event_defaults.dress_code),
                playlist_urls: lookup("EVENT_PLAYLIST_URLS")
                    .map(|s| parse_list(&s))
                    .unwrap_or(event_defaults.playlist_urls),
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
