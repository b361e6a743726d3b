//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a funded account and an active collection ready to receive bids.
///
/// # Arguments
/// - `db` - Database connection
/// - `balance` - Starting balance of the account
///
/// # Returns
/// - `Ok((account, collection))` - The created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_bidding_dependencies(
    db: &DatabaseConnection,
    balance: i64,
) -> Result<(entity::account::Model, entity::collection::Model), DbErr> {
    let account = crate::factory::account::AccountFactory::new(db)
        .balance(balance)
        .build()
        .await?;
    let collection = crate::factory::collection::create_collection(db).await?;

    Ok((account, collection))
}
