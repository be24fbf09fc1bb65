use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260801_000005_create_trail_table::Trail;

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TrailPoint::Table)
                    .if_not_exists()
                    .col(pk_auto(TrailPoint::Id))
                    .col(integer(TrailPoint::TrailId))
                    .col(double(TrailPoint::Latitude))
                    .col(double(TrailPoint::Longitude))
                    .col(timestamp_with_time_zone(TrailPoint::RecordedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trail_point_trail")
                            .from(TrailPoint::Table, TrailPoint::TrailId)
                            .to(Trail::Table, Trail::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TrailPoint::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum TrailPoint {
    Table,
    Id,
    TrailId,
    Latitude,
    Longitude,
    RecordedAt,
}
