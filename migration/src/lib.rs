pub use sea_orm_migration::prelude::*;

mod m20260601_000001_create_player_table;
mod m20260601_000002_create_steam_link_table;
mod m20260601_000003_create_invite_table;
mod m20260601_000004_create_economy_setting_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260601_000001_create_player_table::Migration),
            Box::new(m20260601_000002_create_steam_link_table::Migration),
            Box::new(m20260601_000003_create_invite_table::Migration),
            Box::new(m20260601_000004_create_economy_setting_table::Migration),
        ]
    }
}
