//! UseCase: 参加者一覧取得

use std::sync::Arc;

use crate::domain::{Participant, ParticipantRepository};

use super::error::ListParticipantsError;

/// 参加者一覧取得のユースケース
pub struct ListParticipantsUseCase {
    participant_repository: Arc<dyn ParticipantRepository>,
}

impl ListParticipantsUseCase {
    pub fn new(participant_repository: Arc<dyn ParticipantRepository>) -> Self {
        Self {
            participant_repository,
        }
    }

    /// 登録中の全参加者を登録順で返す
    pub async fn execute(&self) -> Result<Vec<Participant>, ListParticipantsError> {
        Ok(self.participant_repository.list().await?)
    }
}
