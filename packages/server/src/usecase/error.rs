//! UseCase error types.

use thiserror::Error;

use crate::domain::RepositoryError;

/// 参加者登録のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegisterParticipantError {
    #[error("Participant '{0}' is already registered")]
    DuplicateName(String),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// 参加者一覧取得のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListParticipantsError {
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// メッセージ送信のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PostMessageError {
    #[error("Sender '{0}' is not registered")]
    SenderNotRegistered(String),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// メッセージ取得のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GetMessagesError {
    #[error("Requester '{0}' is not registered")]
    NotRegistered(String),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// ハートビート更新のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RefreshHeartbeatError {
    #[error("Participant '{0}' not found")]
    ParticipantNotFound(String),

    #[error("Repository error: {0}")]
    Repository(RepositoryError),
}

impl From<RepositoryError> for RefreshHeartbeatError {
    fn from(e: RepositoryError) -> Self {
        match e {
            RepositoryError::ParticipantNotFound(name) => Self::ParticipantNotFound(name),
            other => Self::Repository(other),
        }
    }
}

/// メッセージ削除のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeleteMessageError {
    #[error("Message '{0}' not found")]
    MessageNotFound(String),

    #[error("'{0}' is not the sender of the message")]
    NotSender(String),

    #[error("Repository error: {0}")]
    Repository(RepositoryError),
}

impl From<RepositoryError> for DeleteMessageError {
    fn from(e: RepositoryError) -> Self {
        match e {
            RepositoryError::MessageNotFound(id) => Self::MessageNotFound(id),
            other => Self::Repository(other),
        }
    }
}

/// メッセージ編集のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditMessageError {
    #[error("Requester '{0}' is not registered")]
    RequesterNotRegistered(String),

    #[error("Message '{0}' not found")]
    MessageNotFound(String),

    #[error("'{0}' is not the sender of the message")]
    NotSender(String),

    #[error("Repository error: {0}")]
    Repository(RepositoryError),
}

impl From<RepositoryError> for EditMessageError {
    fn from(e: RepositoryError) -> Self {
        match e {
            RepositoryError::MessageNotFound(id) => Self::MessageNotFound(id),
            other => Self::Repository(other),
        }
    }
}

/// 非アクティブ参加者のスイープのエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SweepError {
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}
