use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260801_000001_create_user_table::User, m20260801_000002_create_boat_table::Boat,
};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserBoat::Table)
                    .if_not_exists()
                    .col(pk_auto(UserBoat::Id))
                    .col(integer(UserBoat::UserId))
                    .col(integer(UserBoat::BoatId))
                    .col(timestamp_with_time_zone(UserBoat::CreatedAt))
                    .col(timestamp_with_time_zone_null(UserBoat::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_boat_user")
                            .from(UserBoat::Table, UserBoat::UserId)
                            .to(User::Table, User::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_boat_boat")
                            .from(UserBoat::Table, UserBoat::BoatId)
                            .to(Boat::Table, Boat::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_user_boat_user_boat")
                    .table(UserBoat::Table)
                    .col(UserBoat::UserId)
                    .col(UserBoat::BoatId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserBoat::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum UserBoat {
    Table,
    Id,
    UserId,
    BoatId,
    CreatedAt,
    DeletedAt,
}
