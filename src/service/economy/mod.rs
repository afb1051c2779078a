//! The economy engine: configuration snapshots, cooldowns, and reward math.
//!
//! The engine owns the in-memory state of the economy feature: the current
//! configuration snapshot and the per-action cooldown gates. Command handlers
//! call into it to check cooldowns and compute rewards, then persist balances
//! through the repositories and commit the claim ticket. Configuration is
//! reloaded from the settings store once a minute by the scheduler; handlers
//! always read a complete snapshot and never a half-updated one.

pub mod cooldown;

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use sea_orm::DatabaseConnection;

use crate::{
    data::setting::EconomySettingRepository,
    error::{economy::EconomyError, AppError},
    model::economy::{setting_keys, EconomyConfig, RawEconomySettings},
    service::economy::cooldown::{ClaimTicket, CooldownGate},
};

/// A successful `/work` claim awaiting persistence.
pub struct WorkClaim<'a> {
    /// Random draw from the configured reward range, before bonus.
    pub base_points: i64,
    /// Reward after the caller's best role bonus.
    pub earned_points: i64,
    /// Flavor text with the amount and currency substituted in.
    pub description: String,
    /// Commit after the new balance has been persisted.
    pub ticket: ClaimTicket<'a>,
}

/// A successful `/daily` claim awaiting persistence.
pub struct DailyClaim<'a> {
    /// Fixed daily reward after the caller's best role bonus.
    pub earned_points: i64,
    /// Commit after the new balance has been persisted.
    pub ticket: ClaimTicket<'a>,
}

/// Shared state of the economy feature.
///
/// The configuration snapshot is swapped atomically on reload; cooldown state
/// lives purely in memory and resets on restart. Lock holds are short map and
/// pointer operations, never spanning an await point.
pub struct EconomyEngine {
    config: RwLock<Arc<EconomyConfig>>,
    work_gate: CooldownGate,
    daily_gate: CooldownGate,
}

impl EconomyEngine {
    /// Creates an engine with the built-in default configuration.
    ///
    /// Call `reload` before serving traffic to pick up stored settings.
    pub fn new() -> Self {
        Self {
            config: RwLock::new(Arc::new(EconomyConfig::default())),
            work_gate: CooldownGate::new(),
            daily_gate: CooldownGate::new(),
        }
    }

    /// Returns the current configuration snapshot.
    ///
    /// The snapshot is immutable; a reload publishes a new one rather than
    /// mutating it, so callers can hold it across awaits safely.
    pub fn config(&self) -> Arc<EconomyConfig> {
        self.read_config().clone()
    }

    /// Reloads the configuration from the settings store.
    ///
    /// Fetches every tunable by key, applies defaults for absent keys, and
    /// publishes the normalized snapshot in one atomic swap. On a store error
    /// nothing is published and the previous snapshot stays in effect; the
    /// caller decides whether to log or propagate.
    ///
    /// # Arguments
    /// - `db` - Database connection for the settings store
    ///
    /// # Returns
    /// - `Ok(())` - New snapshot published
    /// - `Err(AppError)` - Store unavailable; previous snapshot retained
    pub async fn reload(&self, db: &DatabaseConnection) -> Result<(), AppError> {
        let settings = EconomySettingRepository::new(db);

        let raw = RawEconomySettings {
            currency_name: settings.get(setting_keys::CURRENCY_NAME).await?,
            work_reward_min: settings.get(setting_keys::WORK_REWARD_MIN).await?,
            work_reward_max: settings.get(setting_keys::WORK_REWARD_MAX).await?,
            work_descriptions: settings.get(setting_keys::WORK_DESCRIPTION).await?,
            work_cooldown_secs: settings.get(setting_keys::WORK_TIMER).await?,
            daily_reward: settings.get(setting_keys::DAILY_REWARD).await?,
            daily_cooldown_secs: settings.get(setting_keys::DAILY_TIMER).await?,
            role_bonuses: settings.get(setting_keys::ROLE_BONUSES).await?,
        };

        self.publish(EconomyConfig::from_raw(raw));

        Ok(())
    }

    /// Returns the best bonus percentage among the caller's roles.
    ///
    /// # Arguments
    /// - `role_names` - Names of the roles the caller holds
    ///
    /// # Returns
    /// - `u32` - Maximum matching percentage, or 0 when nothing matches
    pub fn compute_bonus_percentage(&self, role_names: &[String]) -> u32 {
        self.read_config().bonus_percentage(role_names)
    }

    /// Applies the caller's best role bonus to a base reward.
    ///
    /// # Arguments
    /// - `base_points` - Reward before bonus
    /// - `role_names` - Names of the roles the caller holds
    ///
    /// # Returns
    /// - `i64` - Reward including the bonus
    pub fn apply_bonus(&self, base_points: i64, role_names: &[String]) -> i64 {
        self.read_config().apply_bonus(base_points, role_names)
    }

    /// Attempts a `/work` claim for a user.
    ///
    /// On success the base reward is drawn uniformly from the configured range
    /// (inclusive on both ends), the role bonus is applied, and a flavor
    /// template is picked at random. The cooldown only starts when the caller
    /// commits the ticket after persisting the balance.
    ///
    /// # Arguments
    /// - `user_id` - Discord user ID claiming the reward
    /// - `role_names` - Names of the roles the caller holds
    /// - `now` - Current time, injected for testability
    ///
    /// # Returns
    /// - `Ok(WorkClaim)` - Reward computed and slot reserved
    /// - `Err(EconomyError::CooldownActive)` - Work cooldown still running
    pub fn try_work(
        &self,
        user_id: u64,
        role_names: &[String],
        now: DateTime<Utc>,
    ) -> Result<WorkClaim<'_>, EconomyError> {
        let config = self.config();

        let ticket = self.work_gate.try_acquire(
            user_id,
            now,
            Duration::seconds(config.work_cooldown_secs),
        )?;

        let mut rng = rand::rng();
        let base_points = rng.random_range(config.work_min..=config.work_max);
        let earned_points = config.apply_bonus(base_points, role_names);

        let template = &config.work_descriptions[rng.random_range(0..config.work_descriptions.len())];
        let description = template
            .replace("{earned_points}", &earned_points.to_string())
            .replace("{currency}", &config.currency_name);

        Ok(WorkClaim {
            base_points,
            earned_points,
            description,
            ticket,
        })
    }

    /// Attempts a `/daily` claim for a user.
    ///
    /// The base amount is the fixed daily reward; only the role bonus varies.
    /// Cooldown discipline matches `try_work`: the claim commits after the
    /// caller persists the balance.
    ///
    /// # Arguments
    /// - `user_id` - Discord user ID claiming the reward
    /// - `role_names` - Names of the roles the caller holds
    /// - `now` - Current time, injected for testability
    ///
    /// # Returns
    /// - `Ok(DailyClaim)` - Reward computed and slot reserved
    /// - `Err(EconomyError::CooldownActive)` - Daily cooldown still running
    pub fn try_daily(
        &self,
        user_id: u64,
        role_names: &[String],
        now: DateTime<Utc>,
    ) -> Result<DailyClaim<'_>, EconomyError> {
        let config = self.config();

        let ticket = self.daily_gate.try_acquire(
            user_id,
            now,
            Duration::seconds(config.daily_cooldown_secs),
        )?;

        let earned_points = config.apply_bonus(config.daily_reward, role_names);

        Ok(DailyClaim {
            earned_points,
            ticket,
        })
    }

    /// Publishes a new configuration snapshot.
    fn publish(&self, config: EconomyConfig) {
        *self.write_config() = Arc::new(config);
    }

    fn read_config(&self) -> RwLockReadGuard<'_, Arc<EconomyConfig>> {
        self.config.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_config(&self) -> RwLockWriteGuard<'_, Arc<EconomyConfig>> {
        self.config.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for EconomyEngine {
    fn default() -> Self {
        Self::new()
    }
}
