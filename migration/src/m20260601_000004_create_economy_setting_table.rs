use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EconomySetting::Table)
                    .if_not_exists()
                    .col(string(EconomySetting::Key).primary_key())
                    .col(string(EconomySetting::Value))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EconomySetting::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum EconomySetting {
    Table,
    Key,
    Value,
}
