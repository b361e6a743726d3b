use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000001_create_account_table::Account,
    m20260301_000002_create_collection_table::Collection,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bid::Table)
                    .if_not_exists()
                    .col(pk_auto(Bid::Id))
                    .col(integer(Bid::GameId))
                    .col(integer(Bid::PlayerId))
                    .col(
                        timestamp_with_time_zone(Bid::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bid_game_id")
                            .from(Bid::Table, Bid::GameId)
                            .to(Collection::Table, Collection::GameId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bid_player_id")
                            .from(Bid::Table, Bid::PlayerId)
                            .to(Account::Table, Account::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Placement counts bids per collection on every request
        manager
            .create_index(
                Index::create()
                    .name("idx_bid_game_id")
                    .table(Bid::Table)
                    .col(Bid::GameId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Bid::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Bid {
    Table,
    Id,
    GameId,
    PlayerId,
    CreatedAt,
}
