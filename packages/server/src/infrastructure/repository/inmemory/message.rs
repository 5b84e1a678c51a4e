//! InMemory Message Repository 実装

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{ChatMessage, MessageId, MessageRepository, RepositoryError};

/// インメモリ Message Repository 実装
///
/// メッセージを挿入順に保持します。
#[derive(Default)]
pub struct InMemoryMessageRepository {
    messages: Mutex<Vec<ChatMessage>>,
}

impl InMemoryMessageRepository {
    /// 新しい InMemoryMessageRepository を作成
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MessageRepository for InMemoryMessageRepository {
    async fn append(&self, message: ChatMessage) -> Result<(), RepositoryError> {
        let mut messages = self.messages.lock().await;
        messages.push(message);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<ChatMessage>, RepositoryError> {
        let messages = self.messages.lock().await;
        Ok(messages.clone())
    }

    async fn find(&self, id: &MessageId) -> Result<Option<ChatMessage>, RepositoryError> {
        let messages = self.messages.lock().await;
        Ok(messages.iter().find(|m| &m.id == id).cloned())
    }

    async fn update(&self, message: ChatMessage) -> Result<(), RepositoryError> {
        let mut messages = self.messages.lock().await;
        let slot = messages
            .iter_mut()
            .find(|m| m.id == message.id)
            .ok_or_else(|| RepositoryError::MessageNotFound(message.id.as_str().to_string()))?;
        *slot = message;
        Ok(())
    }

    async fn remove(&self, id: &MessageId) -> Result<(), RepositoryError> {
        let mut messages = self.messages.lock().await;
        let index = messages
            .iter()
            .position(|m| &m.id == id)
            .ok_or_else(|| RepositoryError::MessageNotFound(id.as_str().to_string()))?;
        messages.remove(index);
        Ok(())
    }
}
