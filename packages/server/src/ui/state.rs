//! Shared application state.

use std::sync::Arc;

use batepapo_shared::time::Clock;

use crate::{
    domain::{MessageRepository, ParticipantRepository},
    usecase::{
        DeleteMessageUseCase, EditMessageUseCase, GetMessagesUseCase, ListParticipantsUseCase,
        PostMessageUseCase, RefreshHeartbeatUseCase, RegisterParticipantUseCase,
    },
};

/// Shared application state
pub struct AppState {
    /// RegisterParticipantUseCase（参加者登録のユースケース）
    pub register_participant_usecase: Arc<RegisterParticipantUseCase>,
    /// ListParticipantsUseCase（参加者一覧取得のユースケース）
    pub list_participants_usecase: Arc<ListParticipantsUseCase>,
    /// PostMessageUseCase（メッセージ送信のユースケース）
    pub post_message_usecase: Arc<PostMessageUseCase>,
    /// GetMessagesUseCase（メッセージ取得のユースケース）
    pub get_messages_usecase: Arc<GetMessagesUseCase>,
    /// RefreshHeartbeatUseCase（ハートビート更新のユースケース）
    pub refresh_heartbeat_usecase: Arc<RefreshHeartbeatUseCase>,
    /// DeleteMessageUseCase（メッセージ削除のユースケース）
    pub delete_message_usecase: Arc<DeleteMessageUseCase>,
    /// EditMessageUseCase（メッセージ編集のユースケース）
    pub edit_message_usecase: Arc<EditMessageUseCase>,
}

impl AppState {
    /// Wire every HTTP use case to the given stores and clock.
    pub fn new(
        participant_repository: Arc<dyn ParticipantRepository>,
        message_repository: Arc<dyn MessageRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            register_participant_usecase: Arc::new(RegisterParticipantUseCase::new(
                participant_repository.clone(),
                message_repository.clone(),
                clock.clone(),
            )),
            list_participants_usecase: Arc::new(ListParticipantsUseCase::new(
                participant_repository.clone(),
            )),
            post_message_usecase: Arc::new(PostMessageUseCase::new(
                participant_repository.clone(),
                message_repository.clone(),
                clock.clone(),
            )),
            get_messages_usecase: Arc::new(GetMessagesUseCase::new(
                participant_repository.clone(),
                message_repository.clone(),
            )),
            refresh_heartbeat_usecase: Arc::new(RefreshHeartbeatUseCase::new(
                participant_repository.clone(),
                clock,
            )),
            delete_message_usecase: Arc::new(DeleteMessageUseCase::new(
                message_repository.clone(),
            )),
            edit_message_usecase: Arc::new(EditMessageUseCase::new(
                participant_repository,
                message_repository,
            )),
        }
    }
}
