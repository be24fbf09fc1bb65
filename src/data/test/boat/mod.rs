use crate::data::boat::BoatRepository;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod get_boats_for_user;
mod register;
