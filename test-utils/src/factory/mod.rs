//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let player = factory::player::create_player(&db).await?;
//!     let invite = factory::invite::create_invite(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let player = factory::player::PlayerFactory::new(&db)
//!     .discord_id("987654321")
//!     .name("CustomPlayer")
//!     .points(500)
//!     .build()
//!     .await?;
//!
//! factory::setting::set_setting(&db, "daily_reward", serde_json::json!(250)).await?;
//! ```
//!
//! # Available Factories
//!
//! - `player` - Create player balance entities
//! - `invite` - Create invite count entities
//! - `setting` - Insert economy setting rows
//! - `helpers` - Shared id generation utilities

pub mod helpers;
pub mod invite;
pub mod player;
pub mod setting;

// Re-export commonly used factory functions for concise usage
pub use invite::create_invite;
pub use player::{create_player, create_player_with_points};
pub use setting::set_setting;
