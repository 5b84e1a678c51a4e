//! UseCase: メッセージ編集
//!
//! 編集できるのは登録済みの送信者本人だけです。宛先・本文・種別が置き換わり、
//! ID・送信者・送信時刻は変わりません。

use std::sync::Arc;

use crate::domain::{
    ChatMessage, MessageDraft, MessageId, MessageRepository, ParticipantName,
    ParticipantRepository,
};

use super::error::EditMessageError;

/// メッセージ編集のユースケース
pub struct EditMessageUseCase {
    participant_repository: Arc<dyn ParticipantRepository>,
    message_repository: Arc<dyn MessageRepository>,
}

impl EditMessageUseCase {
    pub fn new(
        participant_repository: Arc<dyn ParticipantRepository>,
        message_repository: Arc<dyn MessageRepository>,
    ) -> Self {
        Self {
            participant_repository,
            message_repository,
        }
    }

    /// メッセージ編集を実行
    ///
    /// # Returns
    ///
    /// * `Ok(ChatMessage)` - 編集後のメッセージ
    /// * `Err(EditMessageError)` - 編集失敗
    pub async fn execute(
        &self,
        id: MessageId,
        requester: ParticipantName,
        draft: MessageDraft,
    ) -> Result<ChatMessage, EditMessageError> {
        // 1. 編集者が登録済みかチェック
        let registered = self
            .participant_repository
            .find(&requester)
            .await
            .map_err(EditMessageError::Repository)?;
        if registered.is_none() {
            return Err(EditMessageError::RequesterNotRegistered(
                requester.into_string(),
            ));
        }

        // 2. 対象メッセージの存在と送信者をチェック
        let mut message = self
            .message_repository
            .find(&id)
            .await?
            .ok_or_else(|| EditMessageError::MessageNotFound(id.as_str().to_string()))?;
        if !message.is_sent_by(&requester) {
            return Err(EditMessageError::NotSender(requester.into_string()));
        }

        // 3. 編集内容を適用して保存
        message.apply(draft);
        self.message_repository.update(message.clone()).await?;
        tracing::info!("Message '{}' edited by '{}'", id, requester);

        Ok(message)
    }
}
