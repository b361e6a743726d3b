//! Bid factory for creating test bid entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bids.
///
/// Inserts the bid row directly, bypassing balance and capacity checks, so tests
/// can seed a collection to any fill level.
pub struct BidFactory<'a> {
    db: &'a DatabaseConnection,
    game_id: i32,
    player_id: i32,
}

impl<'a> BidFactory<'a> {
    /// Creates a new BidFactory for the given collection and account.
    pub fn new(db: &'a DatabaseConnection, game_id: i32, player_id: i32) -> Self {
        Self {
            db,
            game_id,
            player_id,
        }
    }

    /// Builds and inserts the bid entity into the database.
    pub async fn build(self) -> Result<entity::bid::Model, DbErr> {
        entity::bid::ActiveModel {
            id: ActiveValue::NotSet,
            game_id: ActiveValue::Set(self.game_id),
            player_id: ActiveValue::Set(self.player_id),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a single bid.
pub async fn create_bid(
    db: &DatabaseConnection,
    game_id: i32,
    player_id: i32,
) -> Result<entity::bid::Model, DbErr> {
    BidFactory::new(db, game_id, player_id).build().await
}

/// Creates `count` bids by the same account against one collection.
pub async fn create_bids(
    db: &DatabaseConnection,
    game_id: i32,
    player_id: i32,
    count: usize,
) -> Result<Vec<entity::bid::Model>, DbErr> {
    let mut bids = Vec::with_capacity(count);
    for _ in 0..count {
        bids.push(create_bid(db, game_id, player_id).await?);
    }
    Ok(bids)
}
