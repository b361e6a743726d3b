use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AccountDto {
    pub id: i32,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub balance: i64,
    pub is_superuser: bool,
    pub created_at: DateTime<Utc>,
}

/// Sign-up payload. Privilege and balance are never read from the request.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct SignUpDto {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

#[derive(Deserialize, Debug, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ChangeEmailQuery {
    pub new_email: String,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ChangePasswordDto {
    pub new_password: String,
}

#[derive(Deserialize, Debug, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TopUpQuery {
    pub amount: i64,
}
