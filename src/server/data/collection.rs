//! Collection data repository for database operations.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbBackend, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::collection::{Collection, CollectionStatus, CreateCollectionParams};

pub struct CollectionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CollectionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new collection.
    pub async fn create(&self, params: CreateCollectionParams) -> Result<Collection, DbErr> {
        let entity = entity::collection::ActiveModel {
            name: ActiveValue::Set(params.name),
            status: ActiveValue::Set(params.status.to_string()),
            expires_at: ActiveValue::Set(params.expires_at),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Collection::from_entity(entity)
    }

    /// Gets a collection by ID.
    pub async fn find_by_id(&self, game_id: i32) -> Result<Option<Collection>, DbErr> {
        entity::prelude::Collection::find_by_id(game_id)
            .one(self.db)
            .await?
            .map(Collection::from_entity)
            .transpose()
    }

    /// Gets a collection by ID and locks its row until the surrounding transaction ends.
    ///
    /// Uses `SELECT ... FOR UPDATE` on PostgreSQL and MySQL. SQLite has no row locks; its
    /// write transactions are already serialized by the database lock.
    pub async fn find_by_id_for_update(&self, game_id: i32) -> Result<Option<Collection>, DbErr> {
        let query = entity::prelude::Collection::find_by_id(game_id);

        let entity = match self.db.get_database_backend() {
            DbBackend::Sqlite => query.one(self.db).await?,
            _ => query.lock_exclusive().one(self.db).await?,
        };

        entity.map(Collection::from_entity).transpose()
    }

    /// Gets collections ordered by ID using offset pagination.
    pub async fn get_all_paginated(
        &self,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<Collection>, DbErr> {
        entity::prelude::Collection::find()
            .order_by_asc(entity::collection::Column::GameId)
            .offset(skip)
            .limit(limit)
            .all(self.db)
            .await?
            .into_iter()
            .map(Collection::from_entity)
            .collect()
    }

    /// Gets active collections ordered by ID using offset pagination.
    pub async fn get_active_paginated(
        &self,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<Collection>, DbErr> {
        entity::prelude::Collection::find()
            .filter(entity::collection::Column::Status.eq(CollectionStatus::Active.as_str()))
            .order_by_asc(entity::collection::Column::GameId)
            .offset(skip)
            .limit(limit)
            .all(self.db)
            .await?
            .into_iter()
            .map(Collection::from_entity)
            .collect()
    }

    /// Sets the collection status.
    ///
    /// # Returns
    /// - `Ok(Some(Collection))` - The updated collection
    /// - `Ok(None)` - No collection with this ID
    pub async fn update_status(
        &self,
        game_id: i32,
        status: CollectionStatus,
    ) -> Result<Option<Collection>, DbErr> {
        let Some(entity) = entity::prelude::Collection::find_by_id(game_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.status = ActiveValue::Set(status.to_string());
        let updated = active.update(self.db).await?;

        Collection::from_entity(updated).map(Some)
    }

    /// Sets the collection expiry.
    pub async fn update_expiry(
        &self,
        game_id: i32,
        expires_at: DateTime<Utc>,
    ) -> Result<Option<Collection>, DbErr> {
        let Some(entity) = entity::prelude::Collection::find_by_id(game_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.expires_at = ActiveValue::Set(Some(expires_at));
        let updated = active.update(self.db).await?;

        Collection::from_entity(updated).map(Some)
    }

    /// Deletes a collection and all of its bids.
    ///
    /// Run inside a transaction to make the two deletes atomic.
    ///
    /// # Returns
    /// - `Ok(Some(Collection))` - The deleted collection
    /// - `Ok(None)` - No collection with this ID
    pub async fn delete(&self, game_id: i32) -> Result<Option<Collection>, DbErr> {
        let Some(entity) = entity::prelude::Collection::find_by_id(game_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        entity::prelude::Bid::delete_many()
            .filter(entity::bid::Column::GameId.eq(game_id))
            .exec(self.db)
            .await?;

        entity::prelude::Collection::delete_by_id(game_id)
            .exec(self.db)
            .await?;

        Collection::from_entity(entity).map(Some)
    }
}
