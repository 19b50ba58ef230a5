use crate::data::reservation::ReservationRepository;
use crate::model::reservation::InsertReservationParam;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory::{flight::FlightFactory, user::UserFactory};

mod get_all;
mod get_by_user;
mod insert;
