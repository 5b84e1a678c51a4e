//! Background task evicting inactive participants.

use std::{sync::Arc, time::Duration};

use thiserror::Error;
use tokio::task::JoinHandle;

use crate::usecase::SweepInactiveParticipantsUseCase;

/// Sweeper start-up errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SweeperError {
    #[error("sweep interval must be greater than zero")]
    ZeroPeriod,
}

/// Start the periodic sweep of inactive participants.
///
/// The first sweep runs one full `period` after start. A failed cycle is
/// logged and skipped; the next cycle runs on schedule.
///
/// # Arguments
///
/// * `usecase` - The sweep use case to run on each tick
/// * `period` - Interval between two sweeps
///
/// # Errors
///
/// Returns `SweeperError::ZeroPeriod` if `period` is zero.
pub fn spawn_sweeper(
    usecase: Arc<SweepInactiveParticipantsUseCase>,
    period: Duration,
) -> Result<JoinHandle<()>, SweeperError> {
    if period.is_zero() {
        return Err(SweeperError::ZeroPeriod);
    }

    Ok(tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);

        // Skip the first immediate tick
        interval.tick().await;

        loop {
            interval.tick().await;

            match usecase.execute().await {
                Ok(evicted) if !evicted.is_empty() => {
                    tracing::info!(
                        evicted_count = evicted.len(),
                        "Evicted inactive participants"
                    );
                }
                Ok(_) => tracing::debug!("No inactive participants to evict"),
                Err(e) => tracing::warn!(error = %e, "Sweep cycle skipped"),
            }
        }
    }))
}
