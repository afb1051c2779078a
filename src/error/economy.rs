use chrono::Duration;
use thiserror::Error;

/// Economy domain errors surfaced to users by the command layer.
#[derive(Error, Debug)]
pub enum EconomyError {
    /// Transfer amount exceeds the sender's balance.
    ///
    /// Non-retryable: the user has to pick a smaller amount.
    ///
    /// # Fields
    /// - `balance` - The sender's current balance
    /// - `requested` - The amount the sender tried to move
    #[error("insufficient funds: balance {balance}, requested {requested}")]
    InsufficientFunds { balance: i64, requested: i64 },

    /// A cooldown-gated action was claimed again before its interval elapsed.
    ///
    /// Retryable once `remaining` has passed. The duration is a plain value;
    /// rendering ("Xh Ym") is left to the command layer.
    #[error("cooldown active for another {}s", remaining.num_seconds())]
    CooldownActive { remaining: Duration },
}
