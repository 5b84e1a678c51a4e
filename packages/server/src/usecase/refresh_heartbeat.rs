//! UseCase: ハートビート更新

use std::sync::Arc;

use batepapo_shared::time::Clock;

use crate::domain::{ParticipantName, ParticipantRepository, Timestamp};

use super::error::RefreshHeartbeatError;

/// ハートビート更新のユースケース
pub struct RefreshHeartbeatUseCase {
    participant_repository: Arc<dyn ParticipantRepository>,
    clock: Arc<dyn Clock>,
}

impl RefreshHeartbeatUseCase {
    pub fn new(
        participant_repository: Arc<dyn ParticipantRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            participant_repository,
            clock,
        }
    }

    /// 参加者のハートビート時刻を現在時刻に更新する
    pub async fn execute(&self, name: ParticipantName) -> Result<(), RefreshHeartbeatError> {
        let now = Timestamp::new(self.clock.now_millis());
        self.participant_repository.touch(&name, now).await?;
        tracing::debug!("Heartbeat refreshed for '{}'", name);
        Ok(())
    }
}
