pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_account_table;
mod m20260301_000002_create_collection_table;
mod m20260301_000003_create_bid_table;
mod m20260302_000004_create_revoked_token_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_account_table::Migration),
            Box::new(m20260301_000002_create_collection_table::Migration),
            Box::new(m20260301_000003_create_bid_table::Migration),
            Box::new(m20260302_000004_create_revoked_token_table::Migration),
        ]
    }
}
