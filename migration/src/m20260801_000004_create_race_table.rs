use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260801_000001_create_user_table::User;

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Race::Table)
                    .if_not_exists()
                    .col(pk_auto(Race::Id))
                    .col(string(Race::Name))
                    .col(string(Race::Location))
                    .col(string_null(Race::Description))
                    .col(timestamp_with_time_zone(Race::StartsAt))
                    .col(integer_null(Race::OrganizerId))
                    .col(timestamp_with_time_zone(Race::CreatedAt))
                    .col(timestamp_with_time_zone(Race::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_race_organizer")
                            .from(Race::Table, Race::OrganizerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Race::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum Race {
    Table,
    Id,
    Name,
    Location,
    Description,
    StartsAt,
    OrganizerId,
    CreatedAt,
    UpdatedAt,
}
