//! UseCase: メッセージ取得処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - GetMessagesUseCase::execute() メソッド
//! - 閲覧ルール（送信者本人・全員宛て・本人宛て）と limit の適用
//!
//! ### どのような状況を想定しているか
//! - 正常系：limit なし / あり
//! - 異常系：未登録の参加者からの取得（フィルタ前に失敗する）

use std::sync::Arc;

use crate::domain::{
    ChatMessage, MessageRepository, ParticipantName, ParticipantRepository, visible_messages,
};

use super::error::GetMessagesError;

/// メッセージ取得のユースケース
pub struct GetMessagesUseCase {
    participant_repository: Arc<dyn ParticipantRepository>,
    message_repository: Arc<dyn MessageRepository>,
}

impl GetMessagesUseCase {
    /// 新しい GetMessagesUseCase を作成
    pub fn new(
        participant_repository: Arc<dyn ParticipantRepository>,
        message_repository: Arc<dyn MessageRepository>,
    ) -> Self {
        Self {
            participant_repository,
            message_repository,
        }
    }

    /// メッセージ取得を実行
    ///
    /// # Arguments
    ///
    /// * `requester` - 取得する参加者（登録済みである必要がある）
    /// * `limit` - 指定された場合、閲覧可能な最新 `limit` 件のみ返す
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<ChatMessage>)` - 閲覧可能なメッセージ（古い順）
    /// * `Err(GetMessagesError)` - 取得失敗
    pub async fn execute(
        &self,
        requester: ParticipantName,
        limit: Option<usize>,
    ) -> Result<Vec<ChatMessage>, GetMessagesError> {
        // 1. 参加者が登録済みかチェック
        if self.participant_repository.find(&requester).await?.is_none() {
            return Err(GetMessagesError::NotRegistered(requester.into_string()));
        }

        // 2. 閲覧可能なメッセージを抽出
        let messages = self.message_repository.list().await?;
        Ok(visible_messages(&messages, &requester, limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repository::MockMessageRepository;
    use crate::usecase::test_support::{NOW, Stores, message, name};

    fn usecase(stores: &Stores) -> GetMessagesUseCase {
        GetMessagesUseCase::new(stores.participants.clone(), stores.messages.clone())
    }

    fn texts(messages: &[ChatMessage]) -> Vec<&str> {
        messages.iter().map(|m| m.text.as_str()).collect()
    }

    #[tokio::test]
    async fn test_get_messages_applies_visibility() {
        // テスト項目: 第三者間の個人メッセージは返されない
        // given (前提条件):
        let stores = Stores::new();
        stores.join("dave", NOW).await;
        stores.post(message("alice", "Todos", "hello all")).await;
        stores.post(message("alice", "carol", "secret")).await;
        stores.post(message("carol", "dave", "for dave")).await;

        // when (操作):
        let result = usecase(&stores).execute(name("dave"), None).await.unwrap();

        // then (期待する結果):
        assert_eq!(texts(&result), vec!["hello all", "for dave"]);
    }

    #[tokio::test]
    async fn test_get_messages_with_limit() {
        // テスト項目: limit 指定時は最新 N 件が古い順で返される
        // given (前提条件):
        let stores = Stores::new();
        stores.join("alice", NOW).await;
        for text in ["1", "2", "3", "4"] {
            stores.post(message("bob", "Todos", text)).await;
        }

        // when (操作):
        let result = usecase(&stores)
            .execute(name("alice"), Some(2))
            .await
            .unwrap();

        // then (期待する結果):
        assert_eq!(texts(&result), vec!["3", "4"]);
    }

    #[tokio::test]
    async fn test_get_messages_unregistered_requester_fails_before_filtering() {
        // テスト項目: 未登録の参加者は NotRegistered になり、メッセージストアは参照されない
        // given (前提条件):
        let stores = Stores::new();
        let mut messages = MockMessageRepository::new();
        messages.expect_list().never();
        let usecase = GetMessagesUseCase::new(stores.participants.clone(), Arc::new(messages));

        // when (操作):
        let result = usecase.execute(name("ghost"), None).await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(GetMessagesError::NotRegistered("ghost".to_string()))
        );
    }
}
