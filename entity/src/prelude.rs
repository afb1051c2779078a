pub use super::economy_setting::Entity as EconomySetting;
pub use super::invite::Entity as Invite;
pub use super::player::Entity as Player;
pub use super::steam_link::Entity as SteamLink;
