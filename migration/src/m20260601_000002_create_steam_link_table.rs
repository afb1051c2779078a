use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SteamLink::Table)
                    .if_not_exists()
                    .col(string(SteamLink::DiscordId).primary_key())
                    .col(string(SteamLink::SteamId))
                    .col(string(SteamLink::VerificationCode))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SteamLink::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum SteamLink {
    Table,
    DiscordId,
    SteamId,
    VerificationCode,
}
