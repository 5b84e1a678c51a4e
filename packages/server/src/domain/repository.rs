//! Repository trait 定義
//!
//! ドメイン層が必要とするデータアクセスのインターフェースを定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。
//!
//! 各メソッドはそのストアに対してアトミックに実行されることを前提とします。
//! 複数のストアをまたぐトランザクションはありません。

use async_trait::async_trait;

use super::{
    ChatMessage, MessageId, Participant, ParticipantName, RepositoryError, Timestamp,
};

/// Participant Repository trait
///
/// UseCase 層はこの trait に依存し、Infrastructure 層の具体的な実装には依存しない。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ParticipantRepository: Send + Sync {
    /// 参加者を追加（同名が存在する場合は `DuplicateParticipant`）
    async fn insert(&self, participant: Participant) -> Result<(), RepositoryError>;

    /// 名前で参加者を取得
    async fn find(&self, name: &ParticipantName) -> Result<Option<Participant>, RepositoryError>;

    /// 全参加者を登録順で取得
    async fn list(&self) -> Result<Vec<Participant>, RepositoryError>;

    /// ハートビート時刻を更新（存在しない場合は `ParticipantNotFound`）
    async fn touch(&self, name: &ParticipantName, at: Timestamp) -> Result<(), RepositoryError>;

    /// `last_heartbeat < cutoff` の参加者を削除し、削除した参加者を返す
    ///
    /// 判定と削除は一度の操作で行われるため、判定後に届いたハートビートで
    /// 更新された参加者が削除されることはない。
    async fn remove_inactive(&self, cutoff: Timestamp) -> Result<Vec<Participant>, RepositoryError>;
}

/// Message Repository trait
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// メッセージを末尾に追加
    async fn append(&self, message: ChatMessage) -> Result<(), RepositoryError>;

    /// 全メッセージを挿入順で取得
    async fn list(&self) -> Result<Vec<ChatMessage>, RepositoryError>;

    /// ID でメッセージを取得
    async fn find(&self, id: &MessageId) -> Result<Option<ChatMessage>, RepositoryError>;

    /// 同じ ID のメッセージを置き換える（存在しない場合は `MessageNotFound`）
    async fn update(&self, message: ChatMessage) -> Result<(), RepositoryError>;

    /// メッセージを削除（存在しない場合は `MessageNotFound`）
    async fn remove(&self, id: &MessageId) -> Result<(), RepositoryError>;
}
