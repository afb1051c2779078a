use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// documentation or `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// `GUILD_WHITELIST` contained a segment that is not a valid guild ID.
    #[error("Invalid guild ID in GUILD_WHITELIST: '{0}'")]
    InvalidGuildWhitelist(String),
}
