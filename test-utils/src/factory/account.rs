//! Account factory for creating test account entities.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Placeholder stored when a test does not need to log in.
///
/// Hashing with argon2 is deliberately slow, so factories only hash when
/// `password()` is called.
const UNUSABLE_PASSWORD: &str = "!unusable";

/// Factory for creating test accounts with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let account = AccountFactory::new(&db)
///     .email("player@example.com")
///     .balance(10)
///     .build()
///     .await?;
/// ```
pub struct AccountFactory<'a> {
    db: &'a DatabaseConnection,
    email: String,
    first_name: Option<String>,
    last_name: Option<String>,
    password: String,
    balance: i64,
    is_superuser: bool,
}

impl<'a> AccountFactory<'a> {
    /// Creates a new AccountFactory with default values.
    ///
    /// Defaults:
    /// - email: `"account{id}@example.com"` where id is auto-incremented
    /// - first_name: `"Player"`, last_name: `"{id}"`
    /// - password: unusable placeholder
    /// - balance: `0`
    /// - is_superuser: `false`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            email: format!("account{}@example.com", id),
            first_name: Some("Player".to_string()),
            last_name: Some(id.to_string()),
            password: UNUSABLE_PASSWORD.to_string(),
            balance: 0,
            is_superuser: false,
        }
    }

    /// Sets the email for the account.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Hashes and sets the password for the account.
    ///
    /// # Panics
    /// Panics if argon2 fails to hash, which only happens on invalid parameters.
    pub fn password(mut self, password: &str) -> Self {
        let salt = SaltString::generate(&mut OsRng);
        self.password = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .expect("argon2 hashing with default parameters")
            .to_string();
        self
    }

    /// Sets the starting balance for the account.
    pub fn balance(mut self, balance: i64) -> Self {
        self.balance = balance;
        self
    }

    /// Sets the superuser flag for the account.
    pub fn superuser(mut self, is_superuser: bool) -> Self {
        self.is_superuser = is_superuser;
        self
    }

    /// Builds and inserts the account entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::account::Model)` - Created account entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::account::Model, DbErr> {
        entity::account::ActiveModel {
            id: ActiveValue::NotSet,
            email: ActiveValue::Set(self.email),
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            password: ActiveValue::Set(self.password),
            balance: ActiveValue::Set(self.balance),
            is_superuser: ActiveValue::Set(self.is_superuser),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an account with default values.
///
/// Shorthand for `AccountFactory::new(db).build().await`.
pub async fn create_account(db: &DatabaseConnection) -> Result<entity::account::Model, DbErr> {
    AccountFactory::new(db).build().await
}

/// Creates a superuser account with default values.
pub async fn create_admin(db: &DatabaseConnection) -> Result<entity::account::Model, DbErr> {
    AccountFactory::new(db).superuser(true).build().await
}
