//! Capacity-checked bid placement and bid administration.
//!
//! Placement is race-free at three levels:
//!
//! 1. Keyed locks for the account and then the collection, taken before a database
//!    connection is checked out, serialize placements inside this process.
//! 2. A transaction that locks the collection row and re-reads the account before the
//!    bid count is taken.
//! 3. The debit is a compare-and-set on the balance read in step 2; a miss means another
//!    process changed the balance and the attempt is rolled back and retried.
//!
//! A rejected or abandoned attempt drops its transaction, which rolls it back, so no
//! partial debit or orphan bid is ever visible.

use chrono::Utc;
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::server::{
    data::{account::AccountRepository, bid::BidRepository, collection::CollectionRepository},
    error::{auth::AuthError, rule::RuleError, AppError},
    model::{
        account::Account,
        bid::{Bid, UpdateBidParams, BID_CAPACITY},
    },
    service::collection::collection_not_found,
    state::ServiceSettings,
    util::{
        lock::{KeyedLocks, LockKey},
        timeout::{bounded, retry_missed, MAX_BALANCE_WRITE_ATTEMPTS},
    },
};

pub struct BidService<'a> {
    db: &'a DatabaseConnection,
    locks: &'a KeyedLocks<LockKey>,
    settings: ServiceSettings,
}

impl<'a> BidService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        locks: &'a KeyedLocks<LockKey>,
        settings: ServiceSettings,
    ) -> Self {
        Self {
            db,
            locks,
            settings,
        }
    }

    /// Places one bid by `account_id` on `game_id`, debiting the account by 1.
    ///
    /// Checks, in order:
    /// - the collection exists (`AppError::NotFound`)
    /// - the account's persisted balance is positive (`RuleError::InsufficientFunds`)
    /// - the collection holds fewer than `BID_CAPACITY` bids (`RuleError::CollectionFull`)
    /// - when the collection window is enforced, the collection is active and unexpired
    ///   (`RuleError::CollectionClosed`)
    ///
    /// # Returns
    /// - `Ok(Bid)` - The recorded bid; the debit is committed with it
    /// - `Err(AppError::Timeout)` - The unit did not finish within the store timeout
    pub async fn place(&self, game_id: i32, account_id: i32) -> Result<Bid, AppError> {
        let bid = bounded(self.settings.store_timeout, async {
            let _account_guard = self.locks.lock(LockKey::Account(account_id)).await;
            let _collection_guard = self.locks.lock(LockKey::Collection(game_id)).await;

            retry_missed(MAX_BALANCE_WRITE_ATTEMPTS, move |_| async move {
                let txn = self.db.begin().await?;

                match self.try_place(&txn, game_id, account_id).await? {
                    Some(bid) => {
                        txn.commit().await?;
                        Ok(Some(bid))
                    }
                    None => {
                        txn.rollback().await?;
                        Ok(None)
                    }
                }
            })
            .await
        })
        .await?;

        tracing::info!(
            "Account {} placed bid {} on collection {}",
            account_id,
            bid.id,
            game_id
        );

        Ok(bid)
    }

    /// Runs the checks and effects of one placement inside `txn`.
    ///
    /// Returns `Ok(None)` when the compare-and-set debit missed; the caller rolls back.
    async fn try_place(
        &self,
        txn: &DatabaseTransaction,
        game_id: i32,
        account_id: i32,
    ) -> Result<Option<Bid>, AppError> {
        let collection = CollectionRepository::new(txn)
            .find_by_id_for_update(game_id)
            .await?
            .ok_or_else(collection_not_found)?;

        let accounts = AccountRepository::new(txn);
        let account: Account = accounts
            .find_by_id(account_id)
            .await?
            .ok_or(AuthError::Unauthorized)?;

        if account.balance <= 0 {
            return Err(RuleError::InsufficientFunds.into());
        }

        let bids = BidRepository::new(txn);
        if bids.count_by_collection(game_id).await? >= BID_CAPACITY {
            return Err(RuleError::CollectionFull.into());
        }

        if self.settings.enforce_collection_window && !collection.is_open_at(Utc::now()) {
            return Err(RuleError::CollectionClosed.into());
        }

        if !accounts
            .compare_and_set_balance(account_id, account.balance, account.balance - 1)
            .await?
        {
            return Ok(None);
        }

        Ok(Some(bids.create(game_id, account_id).await?))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Bid, AppError> {
        let repo = BidRepository::new(self.db);

        bounded(self.settings.store_timeout, async {
            Ok(repo.find_by_id(id).await?)
        })
        .await?
        .ok_or_else(bid_not_found)
    }

    pub async fn get_all(&self, skip: u64, limit: u64) -> Result<Vec<Bid>, AppError> {
        let repo = BidRepository::new(self.db);

        bounded(self.settings.store_timeout, async {
            Ok(repo.get_all_paginated(skip, limit).await?)
        })
        .await
    }

    /// Applies an administrative correction to a bid.
    ///
    /// Moving a bid requires the target collection to exist and have free capacity;
    /// the check and the move share one transaction under the target's lock.
    pub async fn update(&self, id: i32, params: UpdateBidParams) -> Result<Bid, AppError> {
        let Some(target) = params.game_id else {
            return self.get_by_id(id).await;
        };

        let bid = bounded(self.settings.store_timeout, async {
            let _collection_guard = self.locks.lock(LockKey::Collection(target)).await;
            let txn = self.db.begin().await?;

            let bids = BidRepository::new(&txn);
            let current = bids.find_by_id(id).await?.ok_or_else(bid_not_found)?;
            if current.game_id == target {
                return Ok(current);
            }

            CollectionRepository::new(&txn)
                .find_by_id_for_update(target)
                .await?
                .ok_or_else(collection_not_found)?;

            if bids.count_by_collection(target).await? >= BID_CAPACITY {
                return Err(RuleError::CollectionFull.into());
            }

            let updated = bids
                .update_collection(id, target)
                .await?
                .ok_or_else(bid_not_found)?;
            txn.commit().await?;

            Ok(updated)
        })
        .await?;

        tracing::info!("Bid {} moved to collection {}", bid.id, bid.game_id);

        Ok(bid)
    }

    /// Deletes a bid owned by `caller`, or any bid when `caller` is a superuser.
    pub async fn delete(&self, id: i32, caller: &Account) -> Result<(), AppError> {
        let repo = BidRepository::new(self.db);

        bounded(self.settings.store_timeout, async {
            let bid = repo.find_by_id(id).await?.ok_or_else(bid_not_found)?;

            if bid.player_id != caller.id && !caller.is_superuser {
                return Err(AuthError::AccessDenied(
                    caller.id,
                    format!("attempted to delete bid {} owned by account {}", id, bid.player_id),
                )
                .into());
            }

            repo.delete(id).await?;
            Ok(())
        })
        .await?;

        tracing::info!("Bid {} deleted by account {}", id, caller.id);

        Ok(())
    }
}

fn bid_not_found() -> AppError {
    AppError::NotFound("Bidding basket not found".to_string())
}
