//! Application state
//!
//! Holds the shared state for the Axum application including
//! the service context, configuration, and the host's roster session.

use std::sync::Arc;

use rsvp_common::AppConfig;
use rsvp_service::{RosterSession, ServiceContext};
use tokio::sync::Mutex;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Service context containing all dependencies
    service_context: Arc<ServiceContext>,
    /// Application configuration
    config: Arc<AppConfig>,
    /// Guest list snapshot behind the roster endpoints
    roster: Arc<Mutex<RosterSession>>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(service_context: ServiceContext, config: AppConfig) -> Self {
        Self {
            service_context: Arc::new(service_context),
            config: Arc::new(config),
            roster: Arc::new(Mutex::new(RosterSession::new())),
        }
    }

    /// Get the service context
    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get the roster session
    pub fn roster(&self) -> &Mutex<RosterSession> {
        &self.roster
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &"ServiceContext")
            .field("config", &"AppConfig")
            .field("roster", &"RosterSession")
            .finish()
    }
}
