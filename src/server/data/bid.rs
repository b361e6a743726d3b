//! Bid data repository for database operations.
//!
//! Inserting a bid here performs no balance or capacity checks; callers go through
//! `BidService::place` which wraps `create` in a guarded transaction.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::bid::Bid;

pub struct BidRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BidRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records a bid by `player_id` against `game_id`.
    pub async fn create(&self, game_id: i32, player_id: i32) -> Result<Bid, DbErr> {
        let entity = entity::bid::ActiveModel {
            game_id: ActiveValue::Set(game_id),
            player_id: ActiveValue::Set(player_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Bid::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Bid>, DbErr> {
        let entity = entity::prelude::Bid::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Bid::from_entity))
    }

    /// Gets bids ordered by ID using offset pagination.
    pub async fn get_all_paginated(&self, skip: u64, limit: u64) -> Result<Vec<Bid>, DbErr> {
        let entities = entity::prelude::Bid::find()
            .order_by_asc(entity::bid::Column::Id)
            .offset(skip)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Bid::from_entity).collect())
    }

    /// Counts the bids placed against a collection.
    pub async fn count_by_collection(&self, game_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Bid::find()
            .filter(entity::bid::Column::GameId.eq(game_id))
            .count(self.db)
            .await
    }

    /// Checks whether the account holds at least one bid in the collection.
    pub async fn exists_for_player(&self, game_id: i32, player_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Bid::find()
            .filter(entity::bid::Column::GameId.eq(game_id))
            .filter(entity::bid::Column::PlayerId.eq(player_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Moves a bid to another collection.
    ///
    /// # Returns
    /// - `Ok(Some(Bid))` - The updated bid
    /// - `Ok(None)` - No bid with this ID
    pub async fn update_collection(&self, id: i32, game_id: i32) -> Result<Option<Bid>, DbErr> {
        let Some(entity) = entity::prelude::Bid::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.game_id = ActiveValue::Set(game_id);
        let updated = active.update(self.db).await?;

        Ok(Some(Bid::from_entity(updated)))
    }

    /// Deletes a bid.
    ///
    /// # Returns
    /// - `Ok(true)` - The bid was deleted
    /// - `Ok(false)` - No bid with this ID
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Bid::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
