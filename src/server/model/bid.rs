//! Bid domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::bid::{BidDto, UpdateBidDto};

/// Maximum number of bids a single collection accepts.
pub const BID_CAPACITY: u64 = 100;

/// One unit of stake placed by an account against a collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Bid {
    pub id: i32,
    pub game_id: i32,
    pub player_id: i32,
    pub created_at: DateTime<Utc>,
}

impl Bid {
    pub fn from_entity(entity: entity::bid::Model) -> Self {
        Self {
            id: entity.id,
            game_id: entity.game_id,
            player_id: entity.player_id,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> BidDto {
        BidDto {
            id: self.id,
            game_id: self.game_id,
            player_id: self.player_id,
            created_at: self.created_at,
        }
    }
}

/// Fields an administrator may change on an existing bid.
///
/// `None` leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateBidParams {
    /// Collection the bid is moved to. Must exist and have free capacity.
    pub game_id: Option<i32>,
}

impl UpdateBidParams {
    pub fn from_dto(dto: UpdateBidDto) -> Self {
        Self {
            game_id: dto.game_id,
        }
    }
}
