//! UseCase: メッセージ削除
//!
//! メッセージを削除できるのは送信者本人だけです。

use std::sync::Arc;

use crate::domain::{MessageId, MessageRepository, ParticipantName};

use super::error::DeleteMessageError;

/// メッセージ削除のユースケース
pub struct DeleteMessageUseCase {
    message_repository: Arc<dyn MessageRepository>,
}

impl DeleteMessageUseCase {
    pub fn new(message_repository: Arc<dyn MessageRepository>) -> Self {
        Self { message_repository }
    }

    /// メッセージ削除を実行
    ///
    /// # Returns
    ///
    /// * `Err(DeleteMessageError::MessageNotFound)` - メッセージが存在しない
    /// * `Err(DeleteMessageError::NotSender)` - 削除を要求したのが送信者ではない
    pub async fn execute(
        &self,
        id: MessageId,
        requester: ParticipantName,
    ) -> Result<(), DeleteMessageError> {
        let message = self
            .message_repository
            .find(&id)
            .await?
            .ok_or_else(|| DeleteMessageError::MessageNotFound(id.as_str().to_string()))?;

        if !message.is_sent_by(&requester) {
            return Err(DeleteMessageError::NotSender(requester.into_string()));
        }

        self.message_repository.remove(&id).await?;
        tracing::info!("Message '{}' deleted by '{}'", id, requester);
        Ok(())
    }
}
