//! Error types for the application.
//!
//! This module provides the application's error hierarchy. The `AppError` enum serves
//! as the top-level error type that wraps infrastructure errors and the economy domain
//! errors. Most variants use `#[from]` for automatic conversion with `?`.
//!
//! Errors that reach the command dispatcher boundary are logged server-side with their
//! full details; users only ever see the safe messages the command layer renders.

pub mod config;
pub mod economy;

use thiserror::Error;

use crate::error::{config::ConfigError, economy::EconomyError};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application. Domain
/// errors (`EconomyError`) carry enough data for the command layer to render a
/// user-facing reply; everything else is treated as internal and surfaced to users
/// as a generic failure message.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Economy domain error (insufficient funds, active cooldown).
    ///
    /// User-visible: the command layer maps these to friendly replies instead
    /// of letting them reach the generic failure path.
    #[error(transparent)]
    EconomyErr(#[from] EconomyError),

    /// Database operation error from SeaORM.
    ///
    /// Surfaced to users as a generic failure; details are logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Internal error with custom message.
    ///
    /// Indicates unexpected behavior and possible bugs. The message is logged
    /// but never shown to users.
    ///
    /// # Fields
    /// - Detailed error message for server-side logging
    #[error("{0}")]
    InternalError(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
