//! Domain error types.

use thiserror::Error;

/// 値オブジェクトの生成時に発生するバリデーションエラー
///
/// `Display` の文言はそのまま HTTP レスポンスのエラーリストに載ります。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("\"name\" is not allowed to be empty")]
    EmptyName,

    #[error("\"name\" must only contain alpha-numeric characters")]
    NonAlphanumericName,

    #[error("\"to\" is not allowed to be empty")]
    EmptyRecipient,

    #[error("\"text\" is not allowed to be empty")]
    EmptyText,

    #[error("\"type\" must be one of [message, private_message]")]
    InvalidMessageKind(String),

    #[error("message id is not allowed to be empty")]
    EmptyMessageId,
}

/// Repository 操作で発生するエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// 同名の参加者が既に存在する
    #[error("Participant '{0}' already exists")]
    DuplicateParticipant(String),

    /// 参加者が存在しない
    #[error("Participant '{0}' not found")]
    ParticipantNotFound(String),

    /// メッセージが存在しない
    #[error("Message '{0}' not found")]
    MessageNotFound(String),

    /// データストアに到達できない
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}
