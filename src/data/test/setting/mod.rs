use crate::data::setting::EconomySettingRepository;
use crate::error::AppError;
use test_utils::builder::TestBuilder;

mod get;
mod set;
