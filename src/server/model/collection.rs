//! Collection domain models and parameters.
//!
//! A collection is a game listing that accepts bids up to a fixed capacity. Its
//! status is stored as text and parsed into `CollectionStatus` at the repository
//! boundary so an unexpected value surfaces as a database error rather than being
//! silently treated as inactive.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::model::collection::{CollectionDto, CountdownDto, UserCollectionDto};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionStatus {
    Active,
    Inactive,
}

impl CollectionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }

    /// Returns the opposite status.
    pub fn toggled(self) -> Self {
        match self {
            Self::Active => Self::Inactive,
            Self::Inactive => Self::Active,
        }
    }

    pub fn from_active_flag(active: bool) -> Self {
        if active {
            Self::Active
        } else {
            Self::Inactive
        }
    }
}

impl fmt::Display for CollectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CollectionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            other => Err(format!("unknown collection status '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Collection {
    pub game_id: i32,
    pub name: String,
    pub status: CollectionStatus,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Collection {
    /// Converts an entity model to a collection domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Collection)` - The converted domain model
    /// - `Err(DbErr::Custom)` - Stored status is not `active` or `inactive`
    pub fn from_entity(entity: entity::collection::Model) -> Result<Self, DbErr> {
        let status = entity.status.parse::<CollectionStatus>().map_err(|e| {
            DbErr::Custom(format!("Collection {}: {}", entity.game_id, e))
        })?;

        Ok(Self {
            game_id: entity.game_id,
            name: entity.name,
            status,
            expires_at: entity.expires_at,
            created_at: entity.created_at,
        })
    }

    /// Whether bids may be placed at `now`: active and not past its expiry.
    pub fn is_open_at(&self, now: DateTime<Utc>) -> bool {
        self.status == CollectionStatus::Active && self.expires_at.map_or(true, |exp| exp > now)
    }

    pub fn into_dto(self) -> CollectionDto {
        CollectionDto {
            game_id: self.game_id,
            game_name: self.name,
            game_status: self.status.to_string(),
            expires_at: self.expires_at,
            created_at: self.created_at,
        }
    }
}

/// Parameters for creating a collection.
#[derive(Debug, Clone)]
pub struct CreateCollectionParams {
    pub name: String,
    pub status: CollectionStatus,
    pub expires_at: Option<DateTime<Utc>>,
}

impl CreateCollectionParams {
    pub fn from_dto(dto: crate::model::collection::CreateCollectionFormDto) -> Self {
        Self {
            name: dto.game_name,
            status: CollectionStatus::from_active_flag(dto.active_game),
            expires_at: dto.expires_at,
        }
    }
}

/// Whole days and remaining hours until a collection expires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
}

impl Countdown {
    /// Time remaining from `now` until `expires_at`, clamped at zero once expired.
    pub fn until(expires_at: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let remaining = (expires_at - now).num_seconds().max(0);

        Self {
            days: remaining / 86_400,
            hours: (remaining % 86_400) / 3_600,
        }
    }
}

/// Active collection enriched with the calling account's view of it.
#[derive(Debug, Clone, PartialEq)]
pub struct UserCollection {
    pub collection: Collection,
    /// Number of bids currently placed against the collection.
    pub bid_count: u64,
    /// Whether the caller already holds at least one bid in it.
    pub enrolled: bool,
    pub countdown: Option<Countdown>,
}

impl UserCollection {
    pub fn into_dto(self) -> UserCollectionDto {
        UserCollectionDto {
            id: self.collection.game_id,
            name: self.collection.name,
            status: self.collection.status.to_string(),
            enrolled_user: self.enrolled,
            capacity: self.bid_count,
            countdown: self.countdown.map(|c| CountdownDto {
                days: c.days,
                hours: c.hours,
            }),
        }
    }
}
