use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BidDto {
    pub id: i32,
    pub game_id: i32,
    pub player_id: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Deserialize, Debug, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PlaceBidQuery {
    pub game_id: i32,
}

/// Admin correction of an existing bid. Only the listed fields may be changed.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateBidDto {
    #[serde(default)]
    pub game_id: Option<i32>,
}
