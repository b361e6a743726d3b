use std::{future::Future, time::Duration};

use crate::server::error::AppError;

/// Runs `fut` and fails with `AppError::Timeout` if it does not finish within `limit`.
///
/// The future is dropped on expiry, which rolls back any transaction it had open.
pub async fn bounded<T, F>(limit: Duration, fut: F) -> Result<T, AppError>
where
    F: Future<Output = Result<T, AppError>>,
{
    match tokio::time::timeout(limit, fut).await {
        Ok(result) => result,
        Err(_) => {
            tracing::warn!("Store operation exceeded {:?}", limit);
            Err(AppError::Timeout)
        }
    }
}

/// Attempts a balance write gets before giving up on a balance that keeps changing.
pub const MAX_BALANCE_WRITE_ATTEMPTS: usize = 3;

/// Runs `attempt` until it yields a value, at most `max_attempts` times.
///
/// `Ok(None)` from an attempt means its compare-and-set missed and it may be repeated.
/// Running out of attempts fails with `AppError::Timeout`, the same as a store that
/// never answers.
pub async fn retry_missed<T, F, Fut>(max_attempts: usize, mut attempt: F) -> Result<T, AppError>
where
    F: FnMut(usize) -> Fut,
    Fut: Future<Output = Result<Option<T>, AppError>>,
{
    for n in 1..=max_attempts {
        if let Some(value) = attempt(n).await? {
            return Ok(value);
        }

        tracing::debug!("Compare-and-set missed (attempt {} of {})", n, max_attempts);
    }

    Err(AppError::Timeout)
}
