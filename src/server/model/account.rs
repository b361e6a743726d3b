//! Account domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::account::AccountDto;

/// Account holding a spendable balance.
///
/// `password_hash` is an argon2 PHC string and never leaves the server.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub id: i32,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub password_hash: String,
    /// Never negative; changed only by bid placement and top-up.
    pub balance: i64,
    pub is_superuser: bool,
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Converts an entity model to an account domain model at the repository boundary.
    pub fn from_entity(entity: entity::account::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            first_name: entity.first_name,
            last_name: entity.last_name,
            password_hash: entity.password,
            balance: entity.balance,
            is_superuser: entity.is_superuser,
            created_at: entity.created_at,
        }
    }

    /// Converts the account to a DTO for API responses, dropping the password hash.
    pub fn into_dto(self) -> AccountDto {
        AccountDto {
            id: self.id,
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            balance: self.balance,
            is_superuser: self.is_superuser,
            created_at: self.created_at,
        }
    }
}

/// Parameters for inserting a new account.
///
/// The password must already be hashed.
#[derive(Debug, Clone)]
pub struct CreateAccountParams {
    pub email: String,
    pub password_hash: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub balance: i64,
    pub is_superuser: bool,
}

/// Parameters for a self-service sign-up, before the password is hashed.
#[derive(Debug, Clone)]
pub struct SignUpParams {
    pub email: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl SignUpParams {
    pub fn from_dto(dto: crate::model::account::SignUpDto) -> Self {
        Self {
            email: dto.email,
            password: dto.password,
            first_name: dto.first_name,
            last_name: dto.last_name,
        }
    }
}
