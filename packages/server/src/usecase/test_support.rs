//! UseCase テスト用のヘルパー

use std::sync::Arc;

use batepapo_shared::time::{Clock, FixedClock};

use crate::{
    domain::{
        ChatMessage, ClockTime, MessageDraft, MessageIdFactory, MessageKind, MessageRepository,
        MessageText, Participant, ParticipantName, ParticipantRepository, Recipient, Timestamp,
    },
    infrastructure::repository::{InMemoryMessageRepository, InMemoryParticipantRepository},
};

/// テストで使う「現在時刻」
pub const NOW: i64 = 1_700_000_000_000;

pub fn name(value: &str) -> ParticipantName {
    ParticipantName::new(value.to_string()).unwrap()
}

pub fn clock_at(millis: i64) -> Arc<dyn Clock> {
    Arc::new(FixedClock::new(millis))
}

pub fn draft(to: &str, text: &str, kind: MessageKind) -> MessageDraft {
    MessageDraft {
        to: Recipient::new(to.to_string()).unwrap(),
        text: MessageText::new(text.to_string()).unwrap(),
        kind,
    }
}

pub fn message(from: &str, to: &str, text: &str) -> ChatMessage {
    let d = draft(to, text, MessageKind::Message);
    ChatMessage::new(
        MessageIdFactory::generate(),
        name(from),
        d.to,
        d.text,
        d.kind,
        ClockTime::from_timestamp(Timestamp::new(NOW)),
    )
}

pub struct Stores {
    pub participants: Arc<InMemoryParticipantRepository>,
    pub messages: Arc<InMemoryMessageRepository>,
}

impl Stores {
    pub fn new() -> Self {
        Self {
            participants: Arc::new(InMemoryParticipantRepository::new()),
            messages: Arc::new(InMemoryMessageRepository::new()),
        }
    }

    /// 指定したハートビート時刻で参加者を登録する
    pub async fn join(&self, who: &str, last_heartbeat: i64) {
        self.participants
            .insert(Participant::new(name(who), Timestamp::new(last_heartbeat)))
            .await
            .unwrap();
    }

    pub async fn post(&self, message: ChatMessage) {
        self.messages.append(message).await.unwrap();
    }

    pub async fn texts(&self) -> Vec<String> {
        self.messages
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.text.into_string())
            .collect()
    }
}
