//! Denylist of bearer tokens revoked before their natural expiry.
//!
//! Every entry lives exactly as long as the token it names: the TTL passed to `revoke`
//! is the token's remaining lifetime, and lookups treat entries at or past their
//! deadline as absent even before `prune` removes them.

use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, Instant},
};

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::DatabaseConnection;
use sha2::{Digest, Sha256};
use tokio::sync::RwLock;

use crate::server::{
    data::revoked_token::RevokedTokenRepository,
    error::{internal::InternalError, AppError},
};

#[async_trait]
pub trait RevocationStore: Send + Sync {
    /// Marks `token` as revoked for `ttl`. A zero TTL stores nothing.
    async fn revoke(&self, token: &str, ttl: Duration) -> Result<(), AppError>;

    /// Checks whether `token` is currently revoked.
    async fn is_revoked(&self, token: &str) -> Result<bool, AppError>;

    /// Removes expired entries, returning how many were dropped.
    async fn prune(&self) -> Result<u64, AppError>;
}

/// Hash a token for storage so raw credentials never reach the database.
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Process-local revocation store.
///
/// Entries are lost on restart; tokens revoked before a restart become usable again
/// until they expire. Use `DatabaseRevocationStore` when that matters.
#[derive(Clone, Default)]
pub struct MemoryRevocationStore {
    entries: Arc<RwLock<HashMap<String, Instant>>>,
}

impl MemoryRevocationStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}

#[async_trait]
impl RevocationStore for MemoryRevocationStore {
    async fn revoke(&self, token: &str, ttl: Duration) -> Result<(), AppError> {
        if ttl.is_zero() {
            return Ok(());
        }

        let deadline = Instant::now() + ttl;
        let mut entries = self.entries.write().await;
        let slot = entries.entry(token.to_string()).or_insert(deadline);
        if *slot < deadline {
            *slot = deadline;
        }

        Ok(())
    }

    async fn is_revoked(&self, token: &str) -> Result<bool, AppError> {
        let entries = self.entries.read().await;

        Ok(entries
            .get(token)
            .is_some_and(|deadline| Instant::now() < *deadline))
    }

    async fn prune(&self) -> Result<u64, AppError> {
        let now = Instant::now();
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, deadline| now < *deadline);

        Ok((before - entries.len()) as u64)
    }
}

/// Revocation store backed by the `revoked_token` table, shared by every process using
/// the same database.
#[derive(Clone)]
pub struct DatabaseRevocationStore {
    db: DatabaseConnection,
}

impl DatabaseRevocationStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RevocationStore for DatabaseRevocationStore {
    async fn revoke(&self, token: &str, ttl: Duration) -> Result<(), AppError> {
        if ttl.is_zero() {
            return Ok(());
        }

        let ttl = chrono::Duration::from_std(ttl).map_err(InternalError::from)?;

        RevokedTokenRepository::new(&self.db)
            .upsert(hash_token(token), Utc::now() + ttl)
            .await?;

        Ok(())
    }

    async fn is_revoked(&self, token: &str) -> Result<bool, AppError> {
        let revoked = RevokedTokenRepository::new(&self.db)
            .is_active(&hash_token(token), Utc::now())
            .await?;

        Ok(revoked)
    }

    async fn prune(&self) -> Result<u64, AppError> {
        let removed = RevokedTokenRepository::new(&self.db)
            .delete_expired(Utc::now())
            .await?;

        Ok(removed)
    }
}
