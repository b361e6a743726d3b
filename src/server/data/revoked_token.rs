//! Persistence for revoked bearer tokens.
//!
//! Tokens are stored by SHA-256 digest, never in raw form. Rows past their expiry are
//! ignored by lookups and removed by `delete_expired`.

use chrono::{DateTime, Utc};
use migration::OnConflict;
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};

pub struct RevokedTokenRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RevokedTokenRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records a token digest, extending the expiry if the digest is already present.
    pub async fn upsert(&self, token_hash: String, expires_at: DateTime<Utc>) -> Result<(), DbErr> {
        entity::prelude::RevokedToken::insert(entity::revoked_token::ActiveModel {
            token_hash: sea_orm::ActiveValue::Set(token_hash),
            expires_at: sea_orm::ActiveValue::Set(expires_at),
        })
        .on_conflict(
            OnConflict::column(entity::revoked_token::Column::TokenHash)
                .update_column(entity::revoked_token::Column::ExpiresAt)
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    /// Checks whether the digest is stored and still before its expiry at `now`.
    pub async fn is_active(&self, token_hash: &str, now: DateTime<Utc>) -> Result<bool, DbErr> {
        let count = entity::prelude::RevokedToken::find()
            .filter(entity::revoked_token::Column::TokenHash.eq(token_hash))
            .filter(entity::revoked_token::Column::ExpiresAt.gt(now))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Removes every row whose expiry is at or before `now`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows removed
    pub async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::RevokedToken::delete_many()
            .filter(entity::revoked_token::Column::ExpiresAt.lte(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
