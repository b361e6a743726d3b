//! In-process async mutexes looked up by key.
//!
//! Placement and top-up hold the lock for an account (and, for placement, the
//! collection) while their database transaction runs, so competing requests in this
//! process queue up instead of racing for the same rows. Locks are always taken before a
//! database connection is checked out.

use std::{hash::Hash, sync::Arc};

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Map of lazily created per-key mutexes.
///
/// Cloning shares the underlying map.
pub struct KeyedLocks<K> {
    locks: Arc<DashMap<K, Arc<Mutex<()>>>>,
}

impl<K> Clone for KeyedLocks<K> {
    fn clone(&self) -> Self {
        Self {
            locks: self.locks.clone(),
        }
    }
}

impl<K: Eq + Hash + Clone> KeyedLocks<K> {
    pub fn new() -> Self {
        Self {
            locks: Arc::new(DashMap::new()),
        }
    }

    /// Waits for and acquires the mutex for `key`.
    ///
    /// The returned guard releases the lock when dropped.
    pub async fn lock(&self, key: K) -> OwnedMutexGuard<()> {
        // Clone the Arc out so the shard lock is not held across the await.
        let mutex = self
            .locks
            .entry(key)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();

        mutex.lock_owned().await
    }

    /// Drops mutexes that nobody holds or waits on.
    ///
    /// # Returns
    /// - Number of entries removed
    pub fn prune(&self) -> usize {
        let before = self.locks.len();
        self.locks.retain(|_, mutex| Arc::strong_count(mutex) > 1);
        before.saturating_sub(self.locks.len())
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.locks.len()
    }
}

impl<K: Eq + Hash + Clone> Default for KeyedLocks<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Key space for the locks taken by the ledger and placement workflows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LockKey {
    Account(i32),
    Collection(i32),
}
