//! UseCase: 非アクティブ参加者のスイープ
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - SweepInactiveParticipantsUseCase::execute() メソッド
//! - タイムアウトを超えた参加者の削除と退室通知の追加
//!
//! ### なぜこのテストが必要か
//! - ハートビートが途絶えた参加者が残り続けないことを保証
//! - スイープ直前にハートビートを送った参加者が削除されないことを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：古い参加者のみ削除される
//! - エッジケース：タイムアウトちょうどの参加者は残る
//! - 異常系：ストア障害（サイクルはスキップされる）

use std::{sync::Arc, time::Duration};

use batepapo_shared::time::Clock;

use crate::domain::{
    ChatMessage, ClockTime, MessageIdFactory, MessageRepository, Participant,
    ParticipantRepository, Timestamp,
};

use super::error::SweepError;

/// 非アクティブ参加者スイープのユースケース
pub struct SweepInactiveParticipantsUseCase {
    participant_repository: Arc<dyn ParticipantRepository>,
    message_repository: Arc<dyn MessageRepository>,
    clock: Arc<dyn Clock>,
    /// この時間を超えてハートビートがない参加者を削除する
    inactivity_timeout: Duration,
}

impl SweepInactiveParticipantsUseCase {
    /// 新しい SweepInactiveParticipantsUseCase を作成
    pub fn new(
        participant_repository: Arc<dyn ParticipantRepository>,
        message_repository: Arc<dyn MessageRepository>,
        clock: Arc<dyn Clock>,
        inactivity_timeout: Duration,
    ) -> Self {
        Self {
            participant_repository,
            message_repository,
            clock,
            inactivity_timeout,
        }
    }

    /// スイープを 1 回実行
    ///
    /// `now - last_heartbeat > inactivity_timeout` の参加者をアトミックに削除し、
    /// 削除した参加者ごとに退室通知を追加する。
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<Participant>)` - 削除された参加者
    /// * `Err(SweepError)` - 参加者ストアの操作に失敗（何も削除されていない）
    pub async fn execute(&self) -> Result<Vec<Participant>, SweepError> {
        let now = Timestamp::new(self.clock.now_millis());
        let timeout_millis = i64::try_from(self.inactivity_timeout.as_millis()).unwrap_or(i64::MAX);
        let cutoff = now.saturating_sub_millis(timeout_millis);

        // 1. 判定と削除を一度に行う
        let evicted = self.participant_repository.remove_inactive(cutoff).await?;

        // 2. 退室通知を追加（1 件の失敗で他の通知を止めない）
        let time = ClockTime::from_timestamp(now);
        for participant in &evicted {
            let notice = ChatMessage::leave_notice(
                MessageIdFactory::generate(),
                participant.name.clone(),
                time.clone(),
            );
            if let Err(e) = self.message_repository.append(notice).await {
                tracing::warn!(
                    "Failed to store leave notice for '{}': {}",
                    participant.name,
                    e
                );
            }
            tracing::info!(
                "Participant '{}' evicted after {} ms of inactivity",
                participant.name,
                now.value() - participant.last_heartbeat.value()
            );
        }

        Ok(evicted)
    }
}
