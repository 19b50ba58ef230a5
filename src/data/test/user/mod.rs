use crate::data::user::UserRepository;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod exists;
mod insert;
