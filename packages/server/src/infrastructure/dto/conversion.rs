//! Conversion logic between DTOs and domain entities.

use crate::domain::{
    MessageDraft, MessageKind, MessageText, Participant, ParticipantName, Recipient,
    ValidationError, entity::ChatMessage,
};
use crate::infrastructure::dto::http as dto;

// ========================================
// DTO → Domain
// ========================================
//
// Every failing field is reported, not only the first one.

fn required(field: &str, value: Option<String>, errors: &mut Vec<String>) -> Option<String> {
    if value.is_none() {
        errors.push(format!("\"{field}\" is required"));
    }
    value
}

fn check<T>(result: Result<T, ValidationError>, errors: &mut Vec<String>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            errors.push(e.to_string());
            None
        }
    }
}

impl TryFrom<dto::RegisterParticipantRequest> for ParticipantName {
    type Error = Vec<String>;

    fn try_from(request: dto::RegisterParticipantRequest) -> Result<Self, Self::Error> {
        let mut errors = Vec::new();
        let name = required("name", request.name, &mut errors)
            .and_then(|raw| check(ParticipantName::new(raw), &mut errors));
        name.ok_or(errors)
    }
}

impl TryFrom<dto::MessagePayloadRequest> for MessageDraft {
    type Error = Vec<String>;

    fn try_from(request: dto::MessagePayloadRequest) -> Result<Self, Self::Error> {
        let mut errors = Vec::new();
        let to = required("to", request.to, &mut errors)
            .and_then(|raw| check(Recipient::new(raw), &mut errors));
        let text = required("text", request.text, &mut errors)
            .and_then(|raw| check(MessageText::new(raw), &mut errors));
        let kind = required("type", request.kind, &mut errors)
            .and_then(|raw| check(MessageKind::parse_user_kind(&raw), &mut errors));

        match (to, text, kind) {
            (Some(to), Some(text), Some(kind)) => Ok(MessageDraft { to, text, kind }),
            _ => Err(errors),
        }
    }
}

// ========================================
// Domain Entity → DTO
// ========================================

impl From<Participant> for dto::ParticipantDto {
    fn from(model: Participant) -> Self {
        Self {
            name: model.name.into_string(),
            last_status: model.last_heartbeat.value(),
        }
    }
}

impl From<ChatMessage> for dto::MessageDto {
    fn from(model: ChatMessage) -> Self {
        Self {
            id: model.id.into_string(),
            from: model.from.into_string(),
            to: model.to.into_string(),
            text: model.text.into_string(),
            kind: model.kind.as_str().to_string(),
            time: model.time.into_string(),
        }
    }
}
