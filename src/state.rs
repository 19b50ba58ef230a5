//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each
//! request handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

use crate::config::UpstreamConfig;

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `reqwest::Client` uses an `Arc` internally
/// - `UpstreamConfig` holds a handful of short strings
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// HTTP client for upstream flight API requests.
    ///
    /// Configured with no redirects and a request timeout so a hung upstream
    /// call cannot stall a request indefinitely.
    pub http_client: reqwest::Client,

    /// Base URL and credentials for the upstream flight API.
    pub upstream: UpstreamConfig,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// Called once during server startup after all dependencies have been
    /// initialized; the resulting state is provided to the Axum router.
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        upstream: UpstreamConfig,
    ) -> Self {
        Self {
            db,
            http_client,
            upstream,
        }
    }
}
