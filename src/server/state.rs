//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Token authority for signing and verifying bearer tokens
//! - Revocation store holding logged-out tokens
//! - Keyed locks serializing balance and capacity changes
//! - Runtime settings read from configuration

use std::{sync::Arc, time::Duration};

use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    service::auth::{revocation::RevocationStore, token::TokenAuthority},
    util::lock::{KeyedLocks, LockKey},
};

/// Tunables consulted by the service layer on every request.
#[derive(Debug, Clone, Copy)]
pub struct ServiceSettings {
    /// Upper bound on any single store interaction.
    pub store_timeout: Duration,
    /// Balance credited to accounts created through sign-up.
    pub starting_balance: i64,
    /// Reject placements on inactive or expired collections.
    pub enforce_collection_window: bool,
}

impl ServiceSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            store_timeout: config.store_timeout,
            starting_balance: config.starting_balance,
            enforce_collection_window: config.enforce_collection_window,
        }
    }
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            store_timeout: Duration::from_secs(5),
            starting_balance: 0,
            enforce_collection_window: false,
        }
    }
}

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `TokenAuthority` holds only key material
/// - `Arc<dyn RevocationStore>` and `KeyedLocks` share their inner maps
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Issues and verifies bearer tokens.
    pub tokens: TokenAuthority,

    /// Denylist consulted on every authenticated request.
    pub revocations: Arc<dyn RevocationStore>,

    /// Per-account and per-collection mutexes.
    pub locks: KeyedLocks<LockKey>,

    pub settings: ServiceSettings,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `tokens` - Token authority configured with the signing secret
    /// - `revocations` - Revocation store selected by configuration
    /// - `settings` - Runtime settings
    pub fn new(
        db: DatabaseConnection,
        tokens: TokenAuthority,
        revocations: Arc<dyn RevocationStore>,
        settings: ServiceSettings,
    ) -> Self {
        Self {
            db,
            tokens,
            revocations,
            locks: KeyedLocks::new(),
            settings,
        }
    }
}

#[cfg(test)]
impl AppState {
    /// State over `db` with an in-memory revocation store and a fixed signing secret.
    pub fn for_test(db: DatabaseConnection) -> Self {
        use crate::server::service::auth::revocation::MemoryRevocationStore;

        Self::new(
            db,
            TokenAuthority::new(
                b"test-signing-secret",
                jsonwebtoken::Algorithm::HS256,
                chrono::Duration::minutes(30),
            ),
            Arc::new(MemoryRevocationStore::new()),
            ServiceSettings::default(),
        )
    }
}
