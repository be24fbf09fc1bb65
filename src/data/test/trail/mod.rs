use crate::{
    data::trail::TrailRepository,
    model::trail::{LogTrailParam, LogTrailPointParam},
};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod create;
mod detach_user;
