use crate::data::player::PlayerRepository;
use crate::error::AppError;
use test_utils::builder::TestBuilder;
use test_utils::factory;

mod get_or_create;
mod get_top;
mod set_points;
mod update_name;
