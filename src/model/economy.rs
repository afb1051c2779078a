//! Economy configuration snapshot.
//!
//! The engine publishes one immutable `EconomyConfig` at a time; handlers read a
//! snapshot and never observe partial updates. Values come from the economy
//! settings table as loosely-typed JSON (operators edit these rows by hand, and
//! numbers sometimes arrive as strings), so parsing is forgiving: anything
//! missing or malformed falls back to the documented default, and out-of-range
//! values are clamped rather than rejected so a bad row cannot take the economy
//! down until the next reload repairs it.

use std::collections::HashMap;

use serde_json::Value;

/// Setting keys under which the economy tunables are stored.
pub mod setting_keys {
    pub const CURRENCY_NAME: &str = "currency_name";
    pub const WORK_REWARD_MIN: &str = "work_reward_min";
    pub const WORK_REWARD_MAX: &str = "work_reward_max";
    pub const WORK_DESCRIPTION: &str = "work_description";
    pub const WORK_TIMER: &str = "work_timer";
    pub const DAILY_REWARD: &str = "daily_reward";
    pub const DAILY_TIMER: &str = "daily_timer";
    pub const ROLE_BONUSES: &str = "role_bonuses";
}

const DEFAULT_CURRENCY_NAME: &str = "points";
const DEFAULT_WORK_MIN: i64 = 1;
const DEFAULT_WORK_MAX: i64 = 10;
const DEFAULT_WORK_COOLDOWN_SECS: i64 = 60;
const DEFAULT_DAILY_REWARD: i64 = 100;
const DEFAULT_DAILY_COOLDOWN_SECS: i64 = 86_400;
const DEFAULT_WORK_DESCRIPTION: &str = "You worked and earned {earned_points} {currency}.";

/// Raw setting values fetched from the store, one per tunable key.
///
/// `None` means the key is absent and the default applies. Values are kept as
/// JSON so `EconomyConfig::from_raw` owns all parsing and clamping in one place.
#[derive(Debug, Clone, Default)]
pub struct RawEconomySettings {
    pub currency_name: Option<Value>,
    pub work_reward_min: Option<Value>,
    pub work_reward_max: Option<Value>,
    pub work_descriptions: Option<Value>,
    pub work_cooldown_secs: Option<Value>,
    pub daily_reward: Option<Value>,
    pub daily_cooldown_secs: Option<Value>,
    pub role_bonuses: Option<Value>,
}

/// Complete set of economy tunables as of the last successful reload.
///
/// Immutable once published; the engine swaps the whole snapshot atomically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EconomyConfig {
    /// Display name of the currency.
    pub currency_name: String,
    /// Minimum work reward (inclusive).
    pub work_min: i64,
    /// Maximum work reward (inclusive). Never below `work_min`.
    pub work_max: i64,
    /// Seconds a user must wait between `/work` claims.
    pub work_cooldown_secs: i64,
    /// Fixed `/daily` reward before bonus.
    pub daily_reward: i64,
    /// Seconds a user must wait between `/daily` claims.
    pub daily_cooldown_secs: i64,
    /// Flavor templates for `/work` replies. Never empty; templates carry
    /// `{earned_points}` and `{currency}` substitution tokens.
    pub work_descriptions: Vec<String>,
    /// Role name to bonus percentage. A caller's best matching role applies.
    pub role_bonuses: HashMap<String, u32>,
}

impl Default for EconomyConfig {
    fn default() -> Self {
        Self {
            currency_name: DEFAULT_CURRENCY_NAME.to_string(),
            work_min: DEFAULT_WORK_MIN,
            work_max: DEFAULT_WORK_MAX,
            work_cooldown_secs: DEFAULT_WORK_COOLDOWN_SECS,
            daily_reward: DEFAULT_DAILY_REWARD,
            daily_cooldown_secs: DEFAULT_DAILY_COOLDOWN_SECS,
            work_descriptions: vec![DEFAULT_WORK_DESCRIPTION.to_string()],
            role_bonuses: HashMap::new(),
        }
    }
}

impl EconomyConfig {
    /// Builds a normalized configuration from raw store values.
    ///
    /// Absent or unparseable values fall back to defaults. Negative rewards and
    /// cooldowns are clamped to zero and an inverted work range is raised to
    /// `work_min`, each with a warning, so operators can spot the bad row.
    ///
    /// # Arguments
    /// - `raw` - Raw setting values fetched from the store
    ///
    /// # Returns
    /// - `EconomyConfig` - Normalized snapshot ready to publish
    pub fn from_raw(raw: RawEconomySettings) -> Self {
        let defaults = Self::default();

        let currency_name = raw
            .currency_name
            .as_ref()
            .and_then(as_string)
            .unwrap_or(defaults.currency_name);

        let mut work_min = raw
            .work_reward_min
            .as_ref()
            .and_then(as_i64)
            .unwrap_or(DEFAULT_WORK_MIN);
        let mut work_max = raw
            .work_reward_max
            .as_ref()
            .and_then(as_i64)
            .unwrap_or(DEFAULT_WORK_MAX);

        if work_min < 0 {
            tracing::warn!("work_reward_min {} is negative, clamping to 0", work_min);
            work_min = 0;
        }
        if work_max < work_min {
            tracing::warn!(
                "work_reward_max {} is below work_reward_min {}, raising to {}",
                work_max,
                work_min,
                work_min
            );
            work_max = work_min;
        }

        let work_cooldown_secs = clamp_non_negative(
            setting_keys::WORK_TIMER,
            raw.work_cooldown_secs
                .as_ref()
                .and_then(as_i64)
                .unwrap_or(DEFAULT_WORK_COOLDOWN_SECS),
        );
        let daily_reward = clamp_non_negative(
            setting_keys::DAILY_REWARD,
            raw.daily_reward
                .as_ref()
                .and_then(as_i64)
                .unwrap_or(DEFAULT_DAILY_REWARD),
        );
        let daily_cooldown_secs = clamp_non_negative(
            setting_keys::DAILY_TIMER,
            raw.daily_cooldown_secs
                .as_ref()
                .and_then(as_i64)
                .unwrap_or(DEFAULT_DAILY_COOLDOWN_SECS),
        );

        let work_descriptions = raw
            .work_descriptions
            .as_ref()
            .and_then(as_string_list)
            .unwrap_or(defaults.work_descriptions);

        let role_bonuses = raw
            .role_bonuses
            .as_ref()
            .and_then(as_bonus_map)
            .unwrap_or_default();

        Self {
            currency_name,
            work_min,
            work_max,
            work_cooldown_secs,
            daily_reward,
            daily_cooldown_secs,
            work_descriptions,
            role_bonuses,
        }
    }

    /// Returns the best bonus percentage among the caller's roles.
    ///
    /// # Arguments
    /// - `role_names` - Names of the roles the caller holds
    ///
    /// # Returns
    /// - `u32` - Maximum matching percentage, or 0 when nothing matches or the
    ///   bonus map is empty
    pub fn bonus_percentage(&self, role_names: &[String]) -> u32 {
        role_names
            .iter()
            .filter_map(|role| self.role_bonuses.get(role))
            .copied()
            .max()
            .unwrap_or(0)
    }

    /// Applies the caller's best role bonus to a base reward.
    ///
    /// The bonus is `base_points * percentage / 100` with integer (floor)
    /// division, added on top of the base.
    ///
    /// # Arguments
    /// - `base_points` - Reward before bonus
    /// - `role_names` - Names of the roles the caller holds
    ///
    /// # Returns
    /// - `i64` - Reward including the bonus
    pub fn apply_bonus(&self, base_points: i64, role_names: &[String]) -> i64 {
        let percentage = self.bonus_percentage(role_names) as i64;

        base_points + base_points * percentage / 100
    }
}

fn clamp_non_negative(key: &str, value: i64) -> i64 {
    if value < 0 {
        tracing::warn!("{} {} is negative, clamping to 0", key, value);
        return 0;
    }
    value
}

fn as_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn as_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        _ => None,
    }
}

/// Accepts either a single template string or an array of them. An array with
/// no usable strings counts as absent so the default template still applies.
fn as_string_list(value: &Value) -> Option<Vec<String>> {
    match value {
        Value::String(s) => Some(vec![s.clone()]),
        Value::Array(items) => {
            let list: Vec<String> = items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect();

            if list.is_empty() {
                None
            } else {
                Some(list)
            }
        }
        _ => None,
    }
}

fn as_bonus_map(value: &Value) -> Option<HashMap<String, u32>> {
    match value {
        Value::Object(map) => Some(
            map.iter()
                .filter_map(|(role, pct)| as_i64(pct).map(|pct| (role.clone(), pct.max(0) as u32)))
                .collect(),
        ),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn roles(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    /// Tests that an empty store yields the documented defaults.
    ///
    /// Expected: currency "points", work range 1-10, cooldowns 60s/86400s,
    /// daily reward 100, one default work template, no role bonuses
    #[test]
    fn empty_settings_yield_defaults() {
        let config = EconomyConfig::from_raw(RawEconomySettings::default());

        assert_eq!(config.currency_name, "points");
        assert_eq!(config.work_min, 1);
        assert_eq!(config.work_max, 10);
        assert_eq!(config.work_cooldown_secs, 60);
        assert_eq!(config.daily_reward, 100);
        assert_eq!(config.daily_cooldown_secs, 86_400);
        assert_eq!(config.work_descriptions.len(), 1);
        assert!(config.role_bonuses.is_empty());
    }

    /// Tests that numeric settings stored as strings still parse.
    ///
    /// Expected: string-encoded numbers accepted for rewards and timers
    #[test]
    fn parses_string_encoded_numbers() {
        let config = EconomyConfig::from_raw(RawEconomySettings {
            work_reward_min: Some(json!("5")),
            work_reward_max: Some(json!("25")),
            work_cooldown_secs: Some(json!("120")),
            ..Default::default()
        });

        assert_eq!(config.work_min, 5);
        assert_eq!(config.work_max, 25);
        assert_eq!(config.work_cooldown_secs, 120);
    }

    /// Tests that an inverted work range is raised to the minimum.
    ///
    /// Expected: work_max raised to work_min instead of failing the load
    #[test]
    fn raises_inverted_work_range() {
        let config = EconomyConfig::from_raw(RawEconomySettings {
            work_reward_min: Some(json!(20)),
            work_reward_max: Some(json!(5)),
            ..Default::default()
        });

        assert_eq!(config.work_min, 20);
        assert_eq!(config.work_max, 20);
    }

    /// Tests that negative rewards and cooldowns clamp to zero.
    ///
    /// Expected: all negative values clamped, range stays consistent
    #[test]
    fn clamps_negative_values() {
        let config = EconomyConfig::from_raw(RawEconomySettings {
            work_reward_min: Some(json!(-5)),
            daily_reward: Some(json!(-100)),
            daily_cooldown_secs: Some(json!(-1)),
            ..Default::default()
        });

        assert_eq!(config.work_min, 0);
        assert_eq!(config.daily_reward, 0);
        assert_eq!(config.daily_cooldown_secs, 0);
    }

    /// Tests that a single template string becomes a one-element list.
    ///
    /// Expected: string accepted, array of strings accepted, empty array
    /// falls back to the default template
    #[test]
    fn accepts_single_or_multiple_work_templates() {
        let single = EconomyConfig::from_raw(RawEconomySettings {
            work_descriptions: Some(json!("You mined {earned_points} {currency}.")),
            ..Default::default()
        });
        assert_eq!(single.work_descriptions.len(), 1);

        let multiple = EconomyConfig::from_raw(RawEconomySettings {
            work_descriptions: Some(json!(["a {earned_points} {currency}", "b"])),
            ..Default::default()
        });
        assert_eq!(multiple.work_descriptions.len(), 2);

        let empty = EconomyConfig::from_raw(RawEconomySettings {
            work_descriptions: Some(json!([])),
            ..Default::default()
        });
        assert_eq!(empty.work_descriptions.len(), 1);
    }

    /// Tests the documented bonus example: 10% VIP bonus on 100 points.
    ///
    /// Expected: 110 with the VIP role, 100 without a matching role
    #[test]
    fn applies_best_matching_role_bonus() {
        let config = EconomyConfig::from_raw(RawEconomySettings {
            role_bonuses: Some(json!({"VIP": 10})),
            ..Default::default()
        });

        assert_eq!(config.apply_bonus(100, &roles(&["VIP"])), 110);
        assert_eq!(config.apply_bonus(100, &roles(&["Member"])), 100);
        assert_eq!(config.apply_bonus(100, &roles(&[])), 100);
    }

    /// Tests that the highest percentage wins when several roles match.
    ///
    /// Expected: 25% applied, not 10%
    #[test]
    fn picks_maximum_bonus_across_roles() {
        let config = EconomyConfig::from_raw(RawEconomySettings {
            role_bonuses: Some(json!({"VIP": 10, "Booster": 25})),
            ..Default::default()
        });

        assert_eq!(config.bonus_percentage(&roles(&["VIP", "Booster"])), 25);
    }

    /// Tests that an empty bonus map always yields zero.
    ///
    /// Expected: 0 regardless of the caller's roles
    #[test]
    fn empty_bonus_map_yields_zero() {
        let config = EconomyConfig::default();

        assert_eq!(config.bonus_percentage(&roles(&["VIP", "Admin"])), 0);
    }

    /// Tests that the bonus uses floor division.
    ///
    /// Expected: 7 + floor(7 * 50 / 100) = 10
    #[test]
    fn bonus_uses_floor_division() {
        let config = EconomyConfig::from_raw(RawEconomySettings {
            role_bonuses: Some(json!({"Half": 50})),
            ..Default::default()
        });

        assert_eq!(config.apply_bonus(7, &roles(&["Half"])), 10);
    }
}
