//! Account ledger and account management.
//!
//! Balance credits take the account's keyed lock and write through a compare-and-set, the
//! same way bid placement debits, so concurrent top-ups and placements never lose an
//! update.

use sea_orm::{DatabaseConnection, DbErr, SqlErr, TransactionTrait};

use crate::server::{
    config::AdminBootstrap,
    data::account::AccountRepository,
    error::{rule::RuleError, AppError},
    model::account::{Account, CreateAccountParams, SignUpParams},
    service::auth::password,
    state::ServiceSettings,
    util::{
        lock::{KeyedLocks, LockKey},
        timeout::{bounded, retry_missed, MAX_BALANCE_WRITE_ATTEMPTS},
    },
};

pub struct AccountService<'a> {
    db: &'a DatabaseConnection,
    locks: &'a KeyedLocks<LockKey>,
    settings: ServiceSettings,
}

impl<'a> AccountService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        locks: &'a KeyedLocks<LockKey>,
        settings: ServiceSettings,
    ) -> Self {
        Self {
            db,
            locks,
            settings,
        }
    }

    /// Registers a regular account credited with the configured starting balance.
    ///
    /// # Returns
    /// - `Ok(Account)` - The new account
    /// - `Err(AppError::BadRequest)` - Email already registered
    pub async fn sign_up(&self, params: SignUpParams) -> Result<Account, AppError> {
        let email = normalize_email(&params.email)?;
        if params.password.is_empty() {
            return Err(AppError::BadRequest("Password must not be empty".to_string()));
        }

        let repo = AccountRepository::new(self.db);
        if bounded(self.settings.store_timeout, async {
            Ok(repo.find_by_email(&email).await?)
        })
        .await?
        .is_some()
        {
            return Err(email_taken());
        }

        let password_hash = password::hash(params.password).await?;

        let account = bounded(self.settings.store_timeout, async {
            repo.create(CreateAccountParams {
                email,
                password_hash,
                first_name: params.first_name,
                last_name: params.last_name,
                balance: self.settings.starting_balance,
                is_superuser: false,
            })
            .await
            .map_err(map_unique_email)
        })
        .await?;

        tracing::info!("Account {} created", account.id);

        Ok(account)
    }

    /// Creates the configured superuser unless an account with that email already exists.
    ///
    /// # Returns
    /// - `Ok(Some(Account))` - The superuser was created
    /// - `Ok(None)` - The email was already registered; nothing changed
    pub async fn ensure_admin(&self, admin: &AdminBootstrap) -> Result<Option<Account>, AppError> {
        let email = normalize_email(&admin.email)?;
        let repo = AccountRepository::new(self.db);

        if repo.find_by_email(&email).await?.is_some() {
            return Ok(None);
        }

        let password_hash = password::hash(admin.password.clone()).await?;
        let account = repo
            .create(CreateAccountParams {
                email,
                password_hash,
                first_name: admin.first_name.clone(),
                last_name: admin.last_name.clone(),
                balance: 0,
                is_superuser: true,
            })
            .await?;

        tracing::info!("Bootstrapped superuser account {}", account.id);

        Ok(Some(account))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Account, AppError> {
        let repo = AccountRepository::new(self.db);

        bounded(self.settings.store_timeout, async {
            Ok(repo.find_by_id(id).await?)
        })
        .await?
        .ok_or_else(account_not_found)
    }

    pub async fn get_by_email(&self, email: &str) -> Result<Account, AppError> {
        let email = normalize_email(email)?;
        let repo = AccountRepository::new(self.db);

        bounded(self.settings.store_timeout, async {
            Ok(repo.find_by_email(&email).await?)
        })
        .await?
        .ok_or_else(account_not_found)
    }

    pub async fn get_all(&self, skip: u64, limit: u64) -> Result<Vec<Account>, AppError> {
        let repo = AccountRepository::new(self.db);

        bounded(self.settings.store_timeout, async {
            Ok(repo.get_all_paginated(skip, limit).await?)
        })
        .await
    }

    /// Changes an account's email.
    ///
    /// # Returns
    /// - `Ok(Account)` - The updated account
    /// - `Err(AppError::NotFound)` - No account with this ID
    /// - `Err(AppError::BadRequest)` - Email is malformed or belongs to another account
    pub async fn change_email(&self, id: i32, new_email: &str) -> Result<Account, AppError> {
        let email = normalize_email(new_email)?;
        let repo = AccountRepository::new(self.db);

        let account = bounded(self.settings.store_timeout, async {
            if let Some(existing) = repo.find_by_email(&email).await? {
                if existing.id != id {
                    return Err(email_taken());
                }
            }

            repo.update_email(id, email.clone())
                .await
                .map_err(map_unique_email)?
                .ok_or_else(account_not_found)
        })
        .await?;

        tracing::info!("Account {} changed email", account.id);

        Ok(account)
    }

    pub async fn change_password(&self, id: i32, new_password: String) -> Result<Account, AppError> {
        if new_password.is_empty() {
            return Err(AppError::BadRequest("Password must not be empty".to_string()));
        }

        let password_hash = password::hash(new_password).await?;
        let repo = AccountRepository::new(self.db);

        let account = bounded(self.settings.store_timeout, async {
            repo.update_password(id, password_hash)
                .await?
                .ok_or_else(account_not_found)
        })
        .await?;

        tracing::info!("Account {} changed password", account.id);

        Ok(account)
    }

    /// Credits `amount` to the account balance.
    ///
    /// # Returns
    /// - `Ok(Account)` - The account with its new balance
    /// - `Err(RuleError::InvalidAmount)` - Amount is zero, negative, or would overflow
    /// - `Err(AppError::NotFound)` - No account with this ID
    /// - `Err(AppError::Timeout)` - The balance kept changing underneath every attempt
    pub async fn top_up(&self, id: i32, amount: i64) -> Result<Account, AppError> {
        if amount <= 0 {
            return Err(RuleError::InvalidAmount.into());
        }

        let repo = &AccountRepository::new(self.db);

        let account = bounded(self.settings.store_timeout, async {
            let _guard = self.locks.lock(LockKey::Account(id)).await;

            // The keyed lock only covers this process; retry if another writer slipped in.
            retry_missed(MAX_BALANCE_WRITE_ATTEMPTS, move |_| async move {
                let account = repo.find_by_id(id).await?.ok_or_else(account_not_found)?;
                let new_balance = account
                    .balance
                    .checked_add(amount)
                    .ok_or(RuleError::InvalidAmount)?;

                let written = repo
                    .compare_and_set_balance(id, account.balance, new_balance)
                    .await?;

                Ok(written.then(|| Account {
                    balance: new_balance,
                    ..account
                }))
            })
            .await
        })
        .await?;

        tracing::info!(
            "Account {} topped up by {} (balance {})",
            account.id,
            amount,
            account.balance
        );

        Ok(account)
    }

    /// Deletes an account together with all of its bids.
    pub async fn delete(&self, id: i32) -> Result<Account, AppError> {
        let account = bounded(self.settings.store_timeout, async {
            let _guard = self.locks.lock(LockKey::Account(id)).await;

            let txn = self.db.begin().await?;
            let deleted = AccountRepository::new(&txn)
                .delete(id)
                .await?
                .ok_or_else(account_not_found)?;
            txn.commit().await?;

            Ok(deleted)
        })
        .await?;

        tracing::info!("Account {} deleted", account.id);

        Ok(account)
    }
}

fn account_not_found() -> AppError {
    AppError::NotFound("User not found".to_string())
}

fn email_taken() -> AppError {
    AppError::BadRequest("Email already registered".to_string())
}

/// Maps a unique-constraint violation on insert/update to the duplicate-email error.
fn map_unique_email(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => email_taken(),
        _ => err.into(),
    }
}

/// Trims and lowercases an email, rejecting values that cannot be an address.
fn normalize_email(email: &str) -> Result<String, AppError> {
    let email = email.trim().to_lowercase();

    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(email),
        _ => Err(AppError::BadRequest(format!("Invalid email address '{}'", email))),
    }
}

#[cfg(test)]
mod test;
