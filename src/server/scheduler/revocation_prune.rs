use std::sync::Arc;

use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    error::AppError,
    service::auth::revocation::RevocationStore,
    util::lock::{KeyedLocks, LockKey},
};

/// Starts the housekeeping scheduler
///
/// Runs every minute and:
/// - Drops revocation entries whose token has expired
/// - Releases per-account and per-collection locks nobody is holding or waiting on
///
/// Lookups already ignore expired revocations, so a missed run only delays reclaiming
/// memory or rows.
pub async fn start_scheduler(
    revocations: Arc<dyn RevocationStore>,
    locks: KeyedLocks<LockKey>,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async("0 * * * * *", move |_uuid, _lock| {
        let revocations = revocations.clone();
        let locks = locks.clone();

        Box::pin(async move {
            prune(revocations.as_ref(), &locks).await;
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Revocation prune scheduler started");

    Ok(scheduler)
}

async fn prune(revocations: &dyn RevocationStore, locks: &KeyedLocks<LockKey>) {
    match revocations.prune().await {
        Ok(0) => {}
        Ok(removed) => tracing::debug!("Pruned {} expired revocation entries", removed),
        Err(e) => tracing::error!("Error pruning revocation entries: {}", e),
    }

    let released = locks.prune();
    if released > 0 {
        tracing::debug!("Released {} idle locks", released);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::server::service::auth::revocation::MemoryRevocationStore;

    /// Tests one housekeeping pass over a store with a lapsed entry and an idle lock.
    ///
    /// Expected: the lapsed entry and the idle lock are removed, the live entry and the
    /// held lock survive
    #[tokio::test]
    async fn prunes_lapsed_entries_and_idle_locks() {
        let store = MemoryRevocationStore::new();
        store
            .revoke("short-lived", Duration::from_millis(10))
            .await
            .unwrap();
        store
            .revoke("long-lived", Duration::from_secs(600))
            .await
            .unwrap();

        let locks = KeyedLocks::new();
        drop(locks.lock(LockKey::Account(1)).await);
        let _held = locks.lock(LockKey::Collection(1)).await;

        tokio::time::sleep(Duration::from_millis(30)).await;
        prune(&store, &locks).await;

        assert_eq!(store.len().await, 1);
        assert!(store.is_revoked("long-lived").await.unwrap());
        assert_eq!(locks.len(), 1);
    }
}
