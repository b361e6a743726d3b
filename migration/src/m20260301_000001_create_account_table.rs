use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Account::Table)
                    .if_not_exists()
                    .col(pk_auto(Account::Id))
                    .col(string_uniq(Account::Email))
                    .col(string_len_null(Account::FirstName, 150))
                    .col(string_len_null(Account::LastName, 150))
                    .col(string(Account::Password))
                    .col(big_integer(Account::Balance).default(0))
                    .col(boolean(Account::IsSuperuser).default(false))
                    .col(
                        timestamp_with_time_zone(Account::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Account::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Account {
    Table,
    Id,
    Email,
    FirstName,
    LastName,
    Password,
    Balance,
    IsSuperuser,
    CreatedAt,
}
