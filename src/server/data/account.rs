//! Account data repository for database operations.
//!
//! Provides the `AccountRepository` for managing account records. Balance changes go
//! exclusively through `compare_and_set_balance`, which only writes when the stored
//! balance still equals the value the caller read.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::account::{Account, CreateAccountParams};

/// Repository providing database operations for account management.
pub struct AccountRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AccountRepository<'a, C> {
    /// Creates a new AccountRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new account.
    ///
    /// # Returns
    /// - `Ok(Account)` - The created account
    /// - `Err(DbErr)` - Database error, including unique violation on email
    pub async fn create(&self, params: CreateAccountParams) -> Result<Account, DbErr> {
        let entity = entity::account::ActiveModel {
            email: ActiveValue::Set(params.email),
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            password: ActiveValue::Set(params.password_hash),
            balance: ActiveValue::Set(params.balance),
            is_superuser: ActiveValue::Set(params.is_superuser),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Account::from_entity(entity))
    }

    /// Finds an account by ID.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Account>, DbErr> {
        let entity = entity::prelude::Account::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Account::from_entity))
    }

    /// Finds an account by its email address.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DbErr> {
        let entity = entity::prelude::Account::find()
            .filter(entity::account::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(Account::from_entity))
    }

    /// Gets accounts ordered by ID using offset pagination.
    ///
    /// # Arguments
    /// - `skip` - Number of accounts to skip
    /// - `limit` - Maximum number of accounts to return
    pub async fn get_all_paginated(&self, skip: u64, limit: u64) -> Result<Vec<Account>, DbErr> {
        let entities = entity::prelude::Account::find()
            .order_by_asc(entity::account::Column::Id)
            .offset(skip)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Account::from_entity).collect())
    }

    /// Replaces the account's email.
    ///
    /// # Returns
    /// - `Ok(Some(Account))` - The updated account
    /// - `Ok(None)` - No account with this ID
    /// - `Err(DbErr)` - Database error, including unique violation on email
    pub async fn update_email(&self, id: i32, email: String) -> Result<Option<Account>, DbErr> {
        let Some(entity) = entity::prelude::Account::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.email = ActiveValue::Set(email);
        let updated = active.update(self.db).await?;

        Ok(Some(Account::from_entity(updated)))
    }

    /// Replaces the account's password hash.
    pub async fn update_password(
        &self,
        id: i32,
        password_hash: String,
    ) -> Result<Option<Account>, DbErr> {
        let Some(entity) = entity::prelude::Account::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.password = ActiveValue::Set(password_hash);
        let updated = active.update(self.db).await?;

        Ok(Some(Account::from_entity(updated)))
    }

    /// Writes `new_balance` only if the stored balance still equals `expected`.
    ///
    /// # Returns
    /// - `Ok(true)` - Exactly one row was updated
    /// - `Ok(false)` - Account missing or its balance changed since it was read
    pub async fn compare_and_set_balance(
        &self,
        id: i32,
        expected: i64,
        new_balance: i64,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::Account::update_many()
            .col_expr(entity::account::Column::Balance, Expr::value(new_balance))
            .filter(entity::account::Column::Id.eq(id))
            .filter(entity::account::Column::Balance.eq(expected))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Deletes an account together with every bid it placed.
    ///
    /// Run inside a transaction to make the two deletes atomic.
    ///
    /// # Returns
    /// - `Ok(Some(Account))` - The deleted account as it was before removal
    /// - `Ok(None)` - No account with this ID
    pub async fn delete(&self, id: i32) -> Result<Option<Account>, DbErr> {
        let Some(entity) = entity::prelude::Account::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        entity::prelude::Bid::delete_many()
            .filter(entity::bid::Column::PlayerId.eq(id))
            .exec(self.db)
            .await?;

        entity::prelude::Account::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(Some(Account::from_entity(entity)))
    }
}
