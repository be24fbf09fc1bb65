use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Boat::Table)
                    .if_not_exists()
                    .col(pk_auto(Boat::Id))
                    .col(string(Boat::Name))
                    .col(string(Boat::Class))
                    .col(string_uniq(Boat::SailNumber))
                    .col(timestamp_with_time_zone(Boat::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Boat::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum Boat {
    Table,
    Id,
    Name,
    Class,
    SailNumber,
    CreatedAt,
}
