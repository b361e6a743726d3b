use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CollectionDto {
    pub game_id: i32,
    pub game_name: String,
    pub game_status: String,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Form body of `POST /add-game`.
#[derive(Deserialize, Debug, ToSchema)]
pub struct CreateCollectionFormDto {
    pub game_name: String,
    #[serde(default)]
    pub active_game: bool,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize, Debug, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UpdateExpiryQuery {
    pub new_expiry: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CountdownDto {
    pub days: i64,
    pub hours: i64,
}

/// Active collection as seen by the calling account.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UserCollectionDto {
    pub id: i32,
    pub name: String,
    pub status: String,
    pub enrolled_user: bool,
    pub capacity: u64,
    pub countdown: Option<CountdownDto>,
}
