//! Periodic economy settings refresh.
//!
//! Settings are edited directly in the store, so the engine's snapshot is
//! refreshed on a fixed interval rather than on demand. A failed refresh keeps
//! the last-known-good snapshot in effect.

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{error::AppError, service::economy::EconomyEngine};

/// Registers the settings refresh job, running every minute.
///
/// # Arguments
/// - `scheduler` - Scheduler to register the job with
/// - `db` - Database connection
/// - `engine` - Economy engine to refresh
///
/// # Returns
/// - `Ok(())` - Job registered
/// - `Err(AppError)` - Failed to create or register the job
pub async fn schedule(
    scheduler: &JobScheduler,
    db: DatabaseConnection,
    engine: Arc<EconomyEngine>,
) -> Result<(), AppError> {
    let job = Job::new_async("0 * * * * *", move |_uuid, _lock| {
        let db = db.clone();
        let engine = engine.clone();

        Box::pin(async move {
            if let Err(e) = engine.reload(&db).await {
                tracing::warn!(
                    "Economy settings refresh failed, keeping previous snapshot: {}",
                    e
                );
            }
        })
    })?;

    scheduler.add(job).await?;

    Ok(())
}
