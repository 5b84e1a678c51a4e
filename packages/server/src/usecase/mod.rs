//! UseCase layer: one struct per operation.
//!
//! 各 UseCase は Repository trait（`Arc<dyn ...>`）と Clock に依存し、
//! Infrastructure 層の具体的な実装には依存しません。

mod delete_message;
mod edit_message;
pub mod error;
mod get_messages;
mod list_participants;
mod post_message;
mod refresh_heartbeat;
mod register_participant;
mod sweep_inactive;

pub use delete_message::DeleteMessageUseCase;
pub use edit_message::EditMessageUseCase;
pub use error::{
    DeleteMessageError, EditMessageError, GetMessagesError, ListParticipantsError,
    PostMessageError, RefreshHeartbeatError, RegisterParticipantError, SweepError,
};
pub use get_messages::GetMessagesUseCase;
pub use list_participants::ListParticipantsUseCase;
pub use post_message::PostMessageUseCase;
pub use refresh_heartbeat::RefreshHeartbeatUseCase;
pub use register_participant::RegisterParticipantUseCase;
pub use sweep_inactive::SweepInactiveParticipantsUseCase;

#[cfg(test)]
mod test_support;
