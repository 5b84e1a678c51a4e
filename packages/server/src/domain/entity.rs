//! Domain entities.

use super::value_object::{
    ClockTime, MessageId, MessageKind, MessageText, ParticipantName, Recipient, Timestamp,
};

/// 入室通知の本文
pub const JOIN_NOTICE_TEXT: &str = "entra na sala...";
/// 退室通知の本文
pub const LEAVE_NOTICE_TEXT: &str = "sai da sala...";

/// チャットルームの参加者
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub name: ParticipantName,
    /// 最後にハートビートを受け取った時刻
    pub last_heartbeat: Timestamp,
}

impl Participant {
    pub fn new(name: ParticipantName, last_heartbeat: Timestamp) -> Self {
        Self {
            name,
            last_heartbeat,
        }
    }

    /// `cutoff` より前からハートビートが途絶えているか
    pub fn is_inactive_since(&self, cutoff: Timestamp) -> bool {
        self.last_heartbeat < cutoff
    }
}

/// チャットメッセージ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: MessageId,
    pub from: ParticipantName,
    pub to: Recipient,
    pub text: MessageText,
    pub kind: MessageKind,
    pub time: ClockTime,
}

impl ChatMessage {
    pub fn new(
        id: MessageId,
        from: ParticipantName,
        to: Recipient,
        text: MessageText,
        kind: MessageKind,
        time: ClockTime,
    ) -> Self {
        Self {
            id,
            from,
            to,
            text,
            kind,
            time,
        }
    }

    /// 入室通知（全員宛ての status メッセージ）
    pub fn join_notice(id: MessageId, name: ParticipantName, time: ClockTime) -> Self {
        Self::notice(id, name, JOIN_NOTICE_TEXT, time)
    }

    /// 退室通知（全員宛ての status メッセージ）
    pub fn leave_notice(id: MessageId, name: ParticipantName, time: ClockTime) -> Self {
        Self::notice(id, name, LEAVE_NOTICE_TEXT, time)
    }

    fn notice(id: MessageId, name: ParticipantName, text: &'static str, time: ClockTime) -> Self {
        Self {
            id,
            from: name,
            to: Recipient::everyone(),
            text: MessageText::fixed(text),
            kind: MessageKind::Status,
            time,
        }
    }

    /// 送信者本人・全員宛て・本人宛てのいずれかであれば閲覧できる
    pub fn is_visible_to(&self, requester: &ParticipantName) -> bool {
        &self.from == requester || self.to.is_broadcast() || self.to.is(requester)
    }

    pub fn is_sent_by(&self, name: &ParticipantName) -> bool {
        &self.from == name
    }

    /// 編集内容を適用する（ID・送信者・送信時刻は変わらない）
    pub fn apply(&mut self, draft: MessageDraft) {
        self.to = draft.to;
        self.text = draft.text;
        self.kind = draft.kind;
    }
}

/// 利用者が送信・編集するメッセージの内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageDraft {
    pub to: Recipient,
    pub text: MessageText,
    pub kind: MessageKind,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BROADCAST_RECIPIENT as BROADCAST, MessageIdFactory};

    fn name(value: &str) -> ParticipantName {
        ParticipantName::new(value.to_string()).unwrap()
    }

    fn message(from: &str, to: &str, kind: MessageKind) -> ChatMessage {
        ChatMessage::new(
            MessageIdFactory::generate(),
            name(from),
            Recipient::new(to.to_string()).unwrap(),
            MessageText::new("hi".to_string()).unwrap(),
            kind,
            ClockTime::from_timestamp(Timestamp::new(0)),
        )
    }

    #[test]
    fn test_participant_inactivity_is_strict() {
        // テスト項目: cutoff と同時刻のハートビートは非アクティブとみなされない
        // given (前提条件):
        let participant = Participant::new(name("alice"), Timestamp::new(10_000));

        // when (操作) / then (期待する結果):
        assert!(!participant.is_inactive_since(Timestamp::new(10_000)));
        assert!(participant.is_inactive_since(Timestamp::new(10_001)));
    }

    #[test]
    fn test_notices_are_broadcast_status_messages() {
        // テスト項目: 入退室通知は全員宛ての status メッセージになる
        // given (前提条件):
        let time = ClockTime::from_timestamp(Timestamp::new(0));

        // when (操作):
        let join =
            ChatMessage::join_notice(MessageIdFactory::generate(), name("alice"), time.clone());
        let leave = ChatMessage::leave_notice(MessageIdFactory::generate(), name("alice"), time);

        // then (期待する結果):
        assert_eq!(join.kind, MessageKind::Status);
        assert!(join.to.is_broadcast());
        assert_eq!(join.text.as_str(), JOIN_NOTICE_TEXT);
        assert_eq!(leave.kind, MessageKind::Status);
        assert_eq!(leave.text.as_str(), LEAVE_NOTICE_TEXT);
        assert_eq!(leave.from, name("alice"));
    }

    #[test]
    fn test_visibility_rule() {
        // テスト項目: 送信者・宛先・全員宛ての閲覧ルール
        // given (前提条件):
        let private = message("alice", "carol", MessageKind::PrivateMessage);
        let broadcast = message("alice", BROADCAST, MessageKind::Message);

        // when (操作) / then (期待する結果):
        assert!(private.is_visible_to(&name("alice")));
        assert!(private.is_visible_to(&name("carol")));
        assert!(!private.is_visible_to(&name("dave")));
        assert!(broadcast.is_visible_to(&name("dave")));
    }

    #[test]
    fn test_apply_draft_keeps_identity() {
        // テスト項目: 編集しても ID・送信者・時刻は変わらない
        // given (前提条件):
        let mut msg = message("alice", BROADCAST, MessageKind::Message);
        let original = msg.clone();
        let draft = MessageDraft {
            to: Recipient::new("bob".to_string()).unwrap(),
            text: MessageText::new("edited".to_string()).unwrap(),
            kind: MessageKind::PrivateMessage,
        };

        // when (操作):
        msg.apply(draft);

        // then (期待する結果):
        assert_eq!(msg.id, original.id);
        assert_eq!(msg.from, original.from);
        assert_eq!(msg.time, original.time);
        assert_eq!(msg.to.as_str(), "bob");
        assert_eq!(msg.text.as_str(), "edited");
        assert_eq!(msg.kind, MessageKind::PrivateMessage);
    }
}
