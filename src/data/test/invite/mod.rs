use crate::data::invite::InviteRepository;
use crate::error::AppError;
use test_utils::builder::TestBuilder;
use test_utils::factory::invite::InviteFactory;

mod get_top;
