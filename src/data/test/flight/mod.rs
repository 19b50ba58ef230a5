use crate::data::flight::FlightRepository;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod exists;
mod insert;
