use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::{
    config::{Config, RevocationBackend},
    error::AppError,
    service::{
        account::AccountService,
        auth::revocation::{DatabaseRevocationStore, MemoryRevocationStore, RevocationStore},
    },
    state::ServiceSettings,
    util::lock::{KeyedLocks, LockKey},
};

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// runs all pending SeaORM migrations so the schema is up-to-date before any request is
/// served. Acquiring a pooled connection is bounded by the configured store timeout;
/// callers that hit the bound receive a 503 rather than waiting indefinitely.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL and store timeout
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.connect_timeout(config.store_timeout)
        .acquire_timeout(config.store_timeout)
        .sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the superuser named by `ADMIN_USER_*` if it does not exist yet.
///
/// Does nothing when no admin is configured. An existing account with the configured
/// email is left untouched, including its password.
pub async fn bootstrap_admin(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    let Some(admin) = &config.admin else {
        tracing::debug!("No admin account configured; skipping bootstrap");
        return Ok(());
    };

    let locks = KeyedLocks::<LockKey>::new();
    let service = AccountService::new(db, &locks, ServiceSettings::from_config(config));

    if service.ensure_admin(admin).await?.is_none() {
        tracing::info!("Admin account {} already exists", admin.email);
    }

    Ok(())
}

/// Builds the revocation store selected by `REVOCATION_STORE`.
pub fn build_revocation_store(config: &Config, db: &DatabaseConnection) -> Arc<dyn RevocationStore> {
    match config.revocation_backend {
        RevocationBackend::Memory => {
            tracing::info!("Using in-memory token revocation store");
            Arc::new(MemoryRevocationStore::new())
        }
        RevocationBackend::Database => {
            tracing::info!("Using database token revocation store");
            Arc::new(DatabaseRevocationStore::new(db.clone()))
        }
    }
}
