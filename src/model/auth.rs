use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Form body of `POST /login`. `username` carries the account email.
#[derive(Deserialize, Debug, ToSchema)]
pub struct LoginFormDto {
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct TokenDto {
    pub access_token: String,
    pub token_type: String,
    /// Moment the token stops being accepted.
    pub expires_at: DateTime<Utc>,
}
