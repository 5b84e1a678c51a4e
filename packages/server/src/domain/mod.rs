//! Domain layer: value objects, entities, visibility rules and repository traits.
//!
//! ドメイン層は他のどの層にも依存しません。
//! データストアへのアクセスは `repository` の trait 経由で行われ、
//! 具体的な実装は Infrastructure 層が提供します。

pub mod entity;
pub mod error;
pub mod repository;
pub mod value_object;
pub mod visibility;

pub use entity::{ChatMessage, MessageDraft, Participant};
pub use error::{RepositoryError, ValidationError};
pub use repository::{MessageRepository, ParticipantRepository};
pub use value_object::{
    BROADCAST_RECIPIENT, ClockTime, MessageId, MessageIdFactory, MessageKind, MessageText,
    ParticipantName, Recipient, Timestamp,
};
pub use visibility::visible_messages;
