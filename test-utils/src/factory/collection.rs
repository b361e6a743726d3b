//! Collection factory for creating test collection entities.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test collections with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let collection = CollectionFactory::new(&db)
///     .status("inactive")
///     .expires_at(None)
///     .build()
///     .await?;
/// ```
pub struct CollectionFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    status: String,
    expires_at: Option<DateTime<Utc>>,
}

impl<'a> CollectionFactory<'a> {
    /// Creates a new CollectionFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Game {id}"`
    /// - status: `"active"`
    /// - expires_at: 7 days from now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Game {}", id),
            status: "active".to_string(),
            expires_at: Some(Utc::now() + Duration::days(7)),
        }
    }

    /// Sets the collection name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the raw status string (`"active"` or `"inactive"`).
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Sets the expiry timestamp.
    pub fn expires_at(mut self, expires_at: Option<DateTime<Utc>>) -> Self {
        self.expires_at = expires_at;
        self
    }

    /// Builds and inserts the collection entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::collection::Model)` - Created collection entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::collection::Model, DbErr> {
        entity::collection::ActiveModel {
            game_id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            status: ActiveValue::Set(self.status),
            expires_at: ActiveValue::Set(self.expires_at),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active collection with default values.
pub async fn create_collection(
    db: &DatabaseConnection,
) -> Result<entity::collection::Model, DbErr> {
    CollectionFactory::new(db).build().await
}
