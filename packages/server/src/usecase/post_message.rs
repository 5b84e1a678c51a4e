//! UseCase: メッセージ送信処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - PostMessageUseCase::execute() メソッド
//! - 送信者の登録確認とメッセージ履歴への追加
//!
//! ### どのような状況を想定しているか
//! - 正常系：全員宛て・個人宛てメッセージの送信
//! - 異常系：未登録の送信者、ストア障害

use std::sync::Arc;

use batepapo_shared::time::Clock;

use crate::domain::{
    ChatMessage, ClockTime, MessageDraft, MessageIdFactory, MessageRepository, ParticipantName,
    ParticipantRepository, Timestamp,
};

use super::error::PostMessageError;

/// メッセージ送信のユースケース
pub struct PostMessageUseCase {
    participant_repository: Arc<dyn ParticipantRepository>,
    message_repository: Arc<dyn MessageRepository>,
    clock: Arc<dyn Clock>,
}

impl PostMessageUseCase {
    /// 新しい PostMessageUseCase を作成
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

    /// メッセージ送信を実行
    ///
    /// # Arguments
    ///
    /// * `from` - 送信者（登録済みである必要がある）
    /// * `draft` - 宛先・本文・種別（バリデーション済み）
    ///
    /// # Returns
    ///
    /// * `Ok(ChatMessage)` - 保存されたメッセージ
    /// * `Err(PostMessageError)` - 送信失敗
    pub async fn execute(
        &self,
        from: ParticipantName,
        draft: MessageDraft,
    ) -> Result<ChatMessage, PostMessageError> {
        // 1. 送信者が登録済みかチェック
        if self.participant_repository.find(&from).await?.is_none() {
            return Err(PostMessageError::SenderNotRegistered(from.into_string()));
        }

        // 2. メッセージを履歴に追加
        let time = ClockTime::from_timestamp(Timestamp::new(self.clock.now_millis()));
        let message = ChatMessage::new(
            MessageIdFactory::generate(),
            from,
            draft.to,
            draft.text,
            draft.kind,
            time,
        );
        self.message_repository.append(message.clone()).await?;

        tracing::debug!(
            "Message '{}' from '{}' to '{}' stored",
            message.id,
            message.from,
            message.to.as_str()
        );

        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MessageKind, RepositoryError, repository::MockParticipantRepository};
    use crate::usecase::test_support::{NOW, Stores, clock_at, draft, name};

    fn usecase(stores: &Stores) -> PostMessageUseCase {
        PostMessageUseCase::new(
            stores.participants.clone(),
            stores.messages.clone(),
            clock_at(NOW),
        )
    }

    #[tokio::test]
    async fn test_post_broadcast_message() {
        // テスト項目: 登録済みの送信者のメッセージが履歴に追加される
        // given (前提条件):
        let stores = Stores::new();
        stores.join("alice", NOW).await;
        let usecase = usecase(&stores);

        // when (操作):
        let result = usecase
            .execute(name("alice"), draft("Todos", "hi", MessageKind::Message))
            .await;

        // then (期待する結果):
        let message = result.unwrap();
        assert_eq!(message.from, name("alice"));
        assert!(message.to.is_broadcast());
        assert_eq!(message.time, ClockTime::from_timestamp(Timestamp::new(NOW)));

        let stored = stores.messages.list().await.unwrap();
        assert_eq!(stored, vec![message]);
    }

    #[tokio::test]
    async fn test_post_private_message_to_unregistered_recipient() {
        // テスト項目: 宛先が未登録でも個人メッセージは送信できる
        // given (前提条件):
        let stores = Stores::new();
        stores.join("alice", NOW).await;
        let usecase = usecase(&stores);

        // when (操作):
        let result = usecase
            .execute(
                name("alice"),
                draft("carol", "psst", MessageKind::PrivateMessage),
            )
            .await;

        // then (期待する結果):
        let message = result.unwrap();
        assert_eq!(message.to.as_str(), "carol");
        assert_eq!(message.kind, MessageKind::PrivateMessage);
    }

    #[tokio::test]
    async fn test_post_message_from_unregistered_sender() {
        // テスト項目: 未登録の送信者からのメッセージは拒否される
        // given (前提条件):
        let stores = Stores::new();
        let usecase = usecase(&stores);

        // when (操作):
        let result = usecase
            .execute(name("mallory"), draft("Todos", "hi", MessageKind::Message))
            .await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(PostMessageError::SenderNotRegistered("mallory".to_string()))
        );
        assert!(stores.messages.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_post_message_participant_store_failure() {
        // テスト項目: 送信者の確認に失敗した場合は Repository エラーになる
        // given (前提条件):
        let stores = Stores::new();
        let mut participants = MockParticipantRepository::new();
        participants
            .expect_find()
            .returning(|_| Err(RepositoryError::Unavailable("down".to_string())));
        let usecase = PostMessageUseCase::new(
            Arc::new(participants),
            stores.messages.clone(),
            clock_at(NOW),
        );

        // when (操作):
        let result = usecase
            .execute(name("alice"), draft("Todos", "hi", MessageKind::Message))
            .await;

        // then (期待する結果):
        assert!(matches!(result, Err(PostMessageError::Repository(_))));
    }
}
