use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Collection::Table)
                    .if_not_exists()
                    .col(pk_auto(Collection::GameId))
                    .col(string(Collection::Name))
                    .col(string_len(Collection::Status, 16).default("inactive"))
                    .col(timestamp_with_time_zone_null(Collection::ExpiresAt))
                    .col(
                        timestamp_with_time_zone(Collection::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Collection::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Collection {
    Table,
    GameId,
    Name,
    Status,
    ExpiresAt,
    CreatedAt,
}
