//! InMemory Participant Repository 実装
//!
//! ドメイン層が定義する ParticipantRepository trait の具体的な実装。
//! 全ての操作は単一の Mutex の下で行われるため、各メソッドはアトミックです。

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{Participant, ParticipantName, ParticipantRepository, RepositoryError, Timestamp};

/// インメモリ Participant Repository 実装
///
/// 参加者を登録順に保持します。
#[derive(Default)]
pub struct InMemoryParticipantRepository {
    participants: Mutex<Vec<Participant>>,
}

impl InMemoryParticipantRepository {
    /// 新しい InMemoryParticipantRepository を作成
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ParticipantRepository for InMemoryParticipantRepository {
    async fn insert(&self, participant: Participant) -> Result<(), RepositoryError> {
        let mut participants = self.participants.lock().await;
        if participants.iter().any(|p| p.name == participant.name) {
            return Err(RepositoryError::DuplicateParticipant(
                participant.name.into_string(),
            ));
        }
        participants.push(participant);
        Ok(())
    }

    async fn find(&self, name: &ParticipantName) -> Result<Option<Participant>, RepositoryError> {
        let participants = self.participants.lock().await;
        Ok(participants.iter().find(|p| &p.name == name).cloned())
    }

    async fn list(&self) -> Result<Vec<Participant>, RepositoryError> {
        let participants = self.participants.lock().await;
        Ok(participants.clone())
    }

    async fn touch(&self, name: &ParticipantName, at: Timestamp) -> Result<(), RepositoryError> {
        let mut participants = self.participants.lock().await;
        let participant = participants
            .iter_mut()
            .find(|p| &p.name == name)
            .ok_or_else(|| RepositoryError::ParticipantNotFound(name.as_str().to_string()))?;
        participant.last_heartbeat = at;
        Ok(())
    }

    async fn remove_inactive(&self, cutoff: Timestamp) -> Result<Vec<Participant>, RepositoryError> {
        let mut participants = self.participants.lock().await;
        let (inactive, active): (Vec<Participant>, Vec<Participant>) = participants
            .drain(..)
            .partition(|p| p.is_inactive_since(cutoff));
        *participants = active;
        Ok(inactive)
    }
}
