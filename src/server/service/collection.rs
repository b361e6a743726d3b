//! Collection lifecycle and read models.
//!
//! Mutations here are reached only through admin-guarded routes. Status toggles take the
//! collection's keyed lock so two concurrent toggles always flip twice.

use chrono::{DateTime, Utc};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{bid::BidRepository, collection::CollectionRepository},
    error::AppError,
    model::collection::{Collection, Countdown, CreateCollectionParams, UserCollection},
    state::ServiceSettings,
    util::{
        lock::{KeyedLocks, LockKey},
        timeout::bounded,
    },
};

pub struct CollectionService<'a> {
    db: &'a DatabaseConnection,
    locks: &'a KeyedLocks<LockKey>,
    settings: ServiceSettings,
}

impl<'a> CollectionService<'a> {
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

    /// Creates a new collection
    pub async fn create(&self, params: CreateCollectionParams) -> Result<Collection, AppError> {
        let name = params.name.trim();
        if name.is_empty() {
            return Err(AppError::BadRequest(
                "Game name must not be empty".to_string(),
            ));
        }

        let repo = CollectionRepository::new(self.db);
        let params = CreateCollectionParams {
            name: name.to_string(),
            ..params
        };

        let collection = bounded(self.settings.store_timeout, async {
            Ok(repo.create(params).await?)
        })
        .await?;

        tracing::info!(
            "Collection {} '{}' created ({})",
            collection.game_id,
            collection.name,
            collection.status
        );

        Ok(collection)
    }

    pub async fn get_by_id(&self, game_id: i32) -> Result<Collection, AppError> {
        let repo = CollectionRepository::new(self.db);

        bounded(self.settings.store_timeout, async {
            Ok(repo.find_by_id(game_id).await?)
        })
        .await?
        .ok_or_else(collection_not_found)
    }

    pub async fn get_all(&self, skip: u64, limit: u64) -> Result<Vec<Collection>, AppError> {
        let repo = CollectionRepository::new(self.db);

        bounded(self.settings.store_timeout, async {
            Ok(repo.get_all_paginated(skip, limit).await?)
        })
        .await
    }

    /// Flips the collection between active and inactive.
    pub async fn toggle_status(&self, game_id: i32) -> Result<Collection, AppError> {
        let repo = CollectionRepository::new(self.db);

        let collection = bounded(self.settings.store_timeout, async {
            let _guard = self.locks.lock(LockKey::Collection(game_id)).await;

            let current = repo
                .find_by_id(game_id)
                .await?
                .ok_or_else(collection_not_found)?;

            repo.update_status(game_id, current.status.toggled())
                .await?
                .ok_or_else(collection_not_found)
        })
        .await?;

        tracing::info!(
            "Collection {} is now {}",
            collection.game_id,
            collection.status
        );

        Ok(collection)
    }

    pub async fn set_expiry(
        &self,
        game_id: i32,
        expires_at: DateTime<Utc>,
    ) -> Result<Collection, AppError> {
        let repo = CollectionRepository::new(self.db);

        let collection = bounded(self.settings.store_timeout, async {
            repo.update_expiry(game_id, expires_at)
                .await?
                .ok_or_else(collection_not_found)
        })
        .await?;

        tracing::info!(
            "Collection {} expiry set to {}",
            collection.game_id,
            expires_at
        );

        Ok(collection)
    }

    /// Deletes a collection and every bid placed against it.
    pub async fn delete(&self, game_id: i32) -> Result<Collection, AppError> {
        let collection = bounded(self.settings.store_timeout, async {
            let _guard = self.locks.lock(LockKey::Collection(game_id)).await;

            let txn = self.db.begin().await?;
            let deleted = CollectionRepository::new(&txn)
                .delete(game_id)
                .await?
                .ok_or_else(collection_not_found)?;
            txn.commit().await?;

            Ok(deleted)
        })
        .await?;

        tracing::info!("Collection {} deleted", collection.game_id);

        Ok(collection)
    }

    /// Lists active collections with the caller's enrolment, fill level and countdown.
    pub async fn get_user_collections(
        &self,
        account_id: i32,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<UserCollection>, AppError> {
        let collection_repo = CollectionRepository::new(self.db);
        let bid_repo = BidRepository::new(self.db);
        let now = Utc::now();

        bounded(self.settings.store_timeout, async {
            let collections = collection_repo.get_active_paginated(skip, limit).await?;

            let mut result = Vec::with_capacity(collections.len());
            for collection in collections {
                let bid_count = bid_repo.count_by_collection(collection.game_id).await?;
                let enrolled = bid_repo
                    .exists_for_player(collection.game_id, account_id)
                    .await?;
                let countdown = collection
                    .expires_at
                    .map(|expires_at| Countdown::until(expires_at, now));

                result.push(UserCollection {
                    collection,
                    bid_count,
                    enrolled,
                    countdown,
                });
            }

            Ok(result)
        })
        .await
    }
}

pub(crate) fn collection_not_found() -> AppError {
    AppError::NotFound("Collection not found".to_string())
}
