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
                    .table(Trail::Table)
                    .if_not_exists()
                    .col(pk_auto(Trail::Id))
                    .col(integer_null(Trail::UserId))
                    .col(string(Trail::Name))
                    .col(timestamp_with_time_zone(Trail::StartedAt))
                    .col(timestamp_with_time_zone_null(Trail::EndedAt))
                    .col(timestamp_with_time_zone(Trail::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trail_user")
                            .from(Trail::Table, Trail::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Trail::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum Trail {
    Table,
    Id,
    UserId,
    Name,
    StartedAt,
    EndedAt,
    CreatedAt,
}
