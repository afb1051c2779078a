//! Duration rendering for command replies.

use chrono::Duration;

/// Renders a configured cooldown length for display.
///
/// Durations under an hour render as whole minutes ("5 minutes"); anything
/// longer renders as hours and minutes ("24 hours 0 minutes").
///
/// # Arguments
/// - `seconds` - Cooldown length in seconds
///
/// # Returns
/// - `String` - Human-readable duration
pub fn format_cooldown(seconds: i64) -> String {
    if seconds < 3600 {
        return format!("{} minutes", seconds / 60);
    }

    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;

    format!("{} hours {} minutes", hours, minutes)
}

/// Renders the remaining wait on an active cooldown as "Xh Ym".
///
/// Negative durations clamp to zero so a cooldown that expired between check
/// and render never shows a nonsense value.
///
/// # Arguments
/// - `remaining` - Remaining wait reported by the engine
///
/// # Returns
/// - `String` - Remaining wait as "Xh Ym"
pub fn format_remaining(remaining: Duration) -> String {
    let total_seconds = remaining.num_seconds().max(0);
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;

    format!("{}h {}m", hours, minutes)
}
