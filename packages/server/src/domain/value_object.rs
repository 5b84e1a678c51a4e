//! Value objects for the chat domain.
//!
//! 値オブジェクトは生成時にバリデーションを行い、不正な値を持つインスタンスは
//! 存在しないことを保証します。

use std::fmt;

use uuid::Uuid;

use super::error::ValidationError;

/// 全員宛て（ブロードキャスト）を表す宛先
pub const BROADCAST_RECIPIENT: &str = "Todos";

/// 参加者名
///
/// 空文字列でない、ASCII 英数字のみの文字列。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParticipantName(String);

impl ParticipantName {
    pub fn new(value: String) -> Result<Self, ValidationError> {
        if value.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if !value.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ValidationError::NonAlphanumericName);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for ParticipantName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for ParticipantName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// メッセージの宛先
///
/// 参加者名、または `BROADCAST_RECIPIENT`（全員宛て）。
/// 宛先が登録済みかどうかは検証しません。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipient(String);

impl Recipient {
    pub fn new(value: String) -> Result<Self, ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::EmptyRecipient);
        }
        Ok(Self(value))
    }

    pub fn everyone() -> Self {
        Self(BROADCAST_RECIPIENT.to_string())
    }

    pub fn is_broadcast(&self) -> bool {
        self.0 == BROADCAST_RECIPIENT
    }

    /// 宛先が指定した参加者本人かどうか
    pub fn is(&self, name: &ParticipantName) -> bool {
        self.0 == name.as_str()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// メッセージ本文
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageText(String);

impl MessageText {
    pub fn new(value: String) -> Result<Self, ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::EmptyText);
        }
        Ok(Self(value))
    }

    /// システムが生成する定型文（空でないことが呼び出し側で保証されている）
    pub(crate) fn fixed(value: &'static str) -> Self {
        Self(value.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// メッセージ種別
///
/// `Status` は入退室通知としてシステムだけが生成します。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Message,
    PrivateMessage,
    Status,
}

impl MessageKind {
    /// 利用者が送信できる種別（`message` / `private_message`）をパースする
    pub fn parse_user_kind(value: &str) -> Result<Self, ValidationError> {
        match value {
            "message" => Ok(Self::Message),
            "private_message" => Ok(Self::PrivateMessage),
            other => Err(ValidationError::InvalidMessageKind(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Message => "message",
            Self::PrivateMessage => "private_message",
            Self::Status => "status",
        }
    }
}

/// Unix タイムスタンプ（ミリ秒）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn new(millis: i64) -> Self {
        Self(millis)
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    /// 指定したミリ秒だけ前のタイムスタンプ
    pub fn saturating_sub_millis(&self, millis: i64) -> Self {
        Self(self.0.saturating_sub(millis))
    }
}

/// 送信時刻の表示用文字列（`HH:MM:SS`）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockTime(String);

impl ClockTime {
    pub fn from_timestamp(timestamp: Timestamp) -> Self {
        Self(batepapo_shared::time::format_clock_time(timestamp.value()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// メッセージ ID
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MessageId(String);

impl MessageId {
    pub fn new(value: String) -> Result<Self, ValidationError> {
        if value.is_empty() {
            return Err(ValidationError::EmptyMessageId);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// MessageId の生成器（UUID v4）
pub struct MessageIdFactory;

impl MessageIdFactory {
    pub fn generate() -> MessageId {
        MessageId(Uuid::new_v4().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_participant_name_accepts_alphanumeric() {
        // テスト項目: 英数字のみの名前は受け入れられる
        // given (前提条件):
        let raw = "alice42".to_string();

        // when (操作):
        let result = ParticipantName::new(raw);

        // then (期待する結果):
        assert_eq!(result.unwrap().as_str(), "alice42");
    }

    #[test]
    fn test_participant_name_rejects_empty() {
        // テスト項目: 空の名前は拒否される
        // given (前提条件):
        let raw = String::new();

        // when (操作):
        let result = ParticipantName::new(raw);

        // then (期待する結果):
        assert_eq!(result, Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_participant_name_rejects_symbols_and_spaces() {
        // テスト項目: 記号や空白を含む名前は拒否される
        // given (前提条件):
        let inputs = ["alice bob", "alice!", "ção", " alice"];

        for raw in inputs {
            // when (操作):
            let result = ParticipantName::new(raw.to_string());

            // then (期待する結果):
            assert_eq!(
                result,
                Err(ValidationError::NonAlphanumericName),
                "input: {raw:?}"
            );
        }
    }

    #[test]
    fn test_recipient_broadcast_detection() {
        // テスト項目: "Todos" 宛てのみブロードキャストと判定される
        // given (前提条件):
        let everyone = Recipient::everyone();
        let lower = Recipient::new("todos".to_string()).unwrap();
        let carol = Recipient::new("carol".to_string()).unwrap();

        // when (操作) / then (期待する結果):
        assert!(everyone.is_broadcast());
        assert!(!lower.is_broadcast());
        assert!(!carol.is_broadcast());
        assert!(carol.is(&ParticipantName::new("carol".to_string()).unwrap()));
    }

    #[test]
    fn test_recipient_and_text_reject_blank() {
        // テスト項目: 空白のみの宛先・本文は拒否される
        // given (前提条件):
        let blank = "   ".to_string();

        // when (操作):
        let to = Recipient::new(blank.clone());
        let text = MessageText::new(blank);

        // then (期待する結果):
        assert_eq!(to, Err(ValidationError::EmptyRecipient));
        assert_eq!(text, Err(ValidationError::EmptyText));
    }

    #[test]
    fn test_message_kind_rejects_status_from_users() {
        // テスト項目: 利用者は status 種別を送信できない
        // given (前提条件):
        let raw = "status";

        // when (操作):
        let result = MessageKind::parse_user_kind(raw);

        // then (期待する結果):
        assert_eq!(
            result,
            Err(ValidationError::InvalidMessageKind("status".to_string()))
        );
        assert_eq!(
            MessageKind::parse_user_kind("private_message"),
            Ok(MessageKind::PrivateMessage)
        );
    }

    #[test]
    fn test_message_id_factory_generates_unique_ids() {
        // テスト項目: 生成される MessageId が一意である
        // given (前提条件):

        // when (操作):
        let a = MessageIdFactory::generate();
        let b = MessageIdFactory::generate();

        // then (期待する結果):
        assert_ne!(a, b);
        assert!(!a.as_str().is_empty());
    }

    #[test]
    fn test_timestamp_saturating_sub() {
        // テスト項目: タイムスタンプの減算がオーバーフローしない
        // given (前提条件):
        let ts = Timestamp::new(i64::MIN + 5);

        // when (操作):
        let result = ts.saturating_sub_millis(10);

        // then (期待する結果):
        assert_eq!(result, Timestamp::new(i64::MIN));
        assert_eq!(
            Timestamp::new(20_000).saturating_sub_millis(10_000),
            Timestamp::new(10_000)
        );
    }
}
