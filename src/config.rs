use crate::error::{config::ConfigError, AppError};

pub struct Config {
    pub database_url: String,

    pub discord_bot_token: String,

    /// Custom activity text shown under the bot's name, if configured.
    pub bot_activity: Option<String>,

    /// Guild IDs the bot is allowed to stay in. `None` disables pruning.
    pub guild_whitelist: Option<Vec<u64>>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let guild_whitelist = match std::env::var("GUILD_WHITELIST") {
            Ok(raw) => Some(parse_guild_whitelist(&raw)?),
            Err(_) => None,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            discord_bot_token: std::env::var("DISCORD_BOT_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?,
            bot_activity: std::env::var("BOT_ACTIVITY").ok(),
            guild_whitelist,
        })
    }
}

/// Parses the comma-separated `GUILD_WHITELIST` value into guild IDs.
///
/// Empty segments are skipped so trailing commas are harmless; anything that
/// is not a valid ID is rejected rather than silently dropped.
///
/// # Arguments
/// - `raw` - Raw environment variable value
///
/// # Returns
/// - `Ok(Vec<u64>)` - Parsed guild IDs
/// - `Err(ConfigError::InvalidGuildWhitelist)` - A segment failed to parse
fn parse_guild_whitelist(raw: &str) -> Result<Vec<u64>, ConfigError> {
    raw.split(',')
        .map(|segment| segment.trim())
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            segment
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidGuildWhitelist(segment.to_string()))
        })
        .collect()
}
