use crate::{
    data::race::RaceRepository,
    model::race::{CreateRaceParam, UpdateRaceParam},
};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod create;
mod detach_organizer;
mod update;
