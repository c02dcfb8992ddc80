//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers and making HTTP requests.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use rsvp_api::{create_app, create_app_state, create_app_state_with_repo};
use rsvp_common::AppConfig;
use rsvp_db::MemoryGuestRepository;
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    /// Present when the server runs on the in-memory store
    pub store: Option<MemoryGuestRepository>,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a server backed by a fresh in-memory store
    pub async fn start() -> Result<Self> {
        let store = MemoryGuestRepository::new();
        let config = memory_config()?;
        let state = create_app_state_with_repo(config, Arc::new(store.clone()))?;
        Self::serve(create_app(state)?, Some(store)).await
    }

    /// Start a server with custom config, e.g. against PostgreSQL
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        let state = create_app_state(config).await?;
        Self::serve(create_app(state)?, None).await
    }

    async fn serve(app: axum::Router, store: Option<MemoryGuestRepository>) -> Result<Self> {
        // Port 0 lets the OS pick a free port
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr,
            client,
            store,
            _handle: handle,
        })
    }

    /// The in-memory store, for fault injection
    ///
    /// # Panics
    /// Panics when the server was started against another backend.
    pub fn store(&self) -> &MemoryGuestRepository {
        self.store
            .as_ref()
            .expect("server was not started with the in-memory store")
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).json(body).send().await?)
    }

    /// Make a POST request without a body
    pub async fn post_empty(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).send().await?)
    }
}

/// Configuration for a server on the in-memory store
pub fn memory_config() -> Result<AppConfig> {
    AppConfig::from_lookup(|key| match key {
        "STORAGE_BACKEND" => Some("memory".to_string()),
        "RATE_LIMIT_BURST" => Some("1000".to_string()),
        _ => None,
    })
    .map_err(|e| anyhow::anyhow!("Config error: {e}"))
}

/// Configuration for a server on PostgreSQL, if DATABASE_URL is set
pub fn postgres_config() -> Option<AppConfig> {
    dotenvy::dotenv().ok();

    let url = std::env::var("DATABASE_URL").ok()?;
    AppConfig::from_lookup(|key| match key {
        "STORAGE_BACKEND" => Some("postgres".to_string()),
        "DATABASE_URL" => Some(url.clone()),
        "DATABASE_RUN_MIGRATIONS" => Some("true".to_string()),
        "RATE_LIMIT_BURST" => Some("1000".to_string()),
        _ => None,
    })
    .ok()
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(response: Response, expected_status: StatusCode) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}
