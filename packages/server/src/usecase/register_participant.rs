//! UseCase: 参加者登録処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - RegisterParticipantUseCase::execute() メソッド
//! - 参加者の登録（重複チェック、入室通知の追加）
//!
//! ### どのような状況を想定しているか
//! - 正常系：新規参加者の登録
//! - 異常系：既に登録されている名前での登録試行、ストア障害

use std::sync::Arc;

use batepapo_shared::time::Clock;

use crate::domain::{
    ChatMessage, ClockTime, MessageIdFactory, MessageRepository, Participant, ParticipantName,
    ParticipantRepository, RepositoryError, Timestamp,
};

use super::error::RegisterParticipantError;

/// 参加者登録のユースケース
pub struct RegisterParticipantUseCase {
    participant_repository: Arc<dyn ParticipantRepository>,
    message_repository: Arc<dyn MessageRepository>,
    clock: Arc<dyn Clock>,
}

impl RegisterParticipantUseCase {
    /// 新しい RegisterParticipantUseCase を作成
    pub fn new(
        participant_repository: Arc<dyn ParticipantRepository>,
        message_repository: Arc<dyn MessageRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            participant_repository,
            message_repository,
            clock,
        }
    }

    /// 参加者登録を実行
    ///
    /// # Returns
    ///
    /// * `Ok(Participant)` - 登録された参加者（ハートビート時刻は登録時刻）
    /// * `Err(RegisterParticipantError)` - 登録失敗
    pub async fn execute(
        &self,
        name: ParticipantName,
    ) -> Result<Participant, RegisterParticipantError> {
        let now = Timestamp::new(self.clock.now_millis());
        let participant = Participant::new(name.clone(), now);

        // 1. 参加者を追加（重複チェックはストアがアトミックに行う）
        self.participant_repository
            .insert(participant.clone())
            .await
            .map_err(|e| match e {
                RepositoryError::DuplicateParticipant(name) => {
                    RegisterParticipantError::DuplicateName(name)
                }
                other => RegisterParticipantError::Repository(other),
            })?;

        // 2. 入室通知を追加
        let notice = ChatMessage::join_notice(
            MessageIdFactory::generate(),
            name,
            ClockTime::from_timestamp(now),
        );
        self.message_repository.append(notice).await?;

        tracing::info!("Participant '{}' joined the room", participant.name);

        Ok(participant)
    }
}
