use crate::data::steam_link::SteamLinkRepository;
use crate::error::AppError;
use test_utils::builder::TestBuilder;

mod find_steam_id;
mod link;
