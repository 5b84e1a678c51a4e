//! Message endpoints.

use std::sync::Arc;

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{HeaderMap, StatusCode},
};

use crate::{
    domain::{MessageDraft, MessageId, ParticipantName},
    infrastructure::dto::http::{MessageDto, MessagePayloadRequest, MessagesQuery},
    ui::{error::ApiError, state::AppState},
};

use super::{USER_HEADER, requester, user_header};

/// Validate the `user` header and the message body together, so every
/// failing rule is reported at once.
fn validate_message_request(
    headers: &HeaderMap,
    payload: Result<Json<MessagePayloadRequest>, JsonRejection>,
) -> Result<(String, MessageDraft), ApiError> {
    let Json(request) = payload?;

    let user = user_header(headers);
    let draft = MessageDraft::try_from(request);

    match (user, draft) {
        (Some(user), Ok(draft)) => Ok((user, draft)),
        (user, draft) => {
            let mut errors = Vec::new();
            if user.is_none() {
                errors.push(format!("\"{USER_HEADER}\" header is required"));
            }
            if let Err(draft_errors) = draft {
                errors.extend(draft_errors);
            }
            tracing::warn!("Rejected message payload: {:?}", errors);
            Err(ApiError::Validation(errors))
        }
    }
}

/// `POST /messages`
pub async fn post_message(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    payload: Result<Json<MessagePayloadRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageDto>), ApiError> {
    let (user, draft) = validate_message_request(&headers, payload)?;

    // A malformed name can never be registered
    let from = ParticipantName::new(user.clone()).map_err(|_| ApiError::NotRegistered(user))?;

    let message = state.post_message_usecase.execute(from, draft).await?;

    Ok((StatusCode::CREATED, Json(message.into())))
}

/// `GET /messages?limit=N`
pub async fn get_messages(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Vec<MessageDto>>, ApiError> {
    // An unreadable query string is treated like an absent one
    let query = pairs
        .map(|Query(pairs)| MessagesQuery::from(pairs))
        .unwrap_or_default();

    let requester = requester(&headers)
        .ok_or_else(|| ApiError::NotRegistered(user_header(&headers).unwrap_or_default()))?;

    let messages = state
        .get_messages_usecase
        .execute(requester, query.limit())
        .await?;

    Ok(Json(messages.into_iter().map(Into::into).collect()))
}

/// `DELETE /messages/{id}`
pub async fn delete_message(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = MessageId::new(id).map_err(|_| ApiError::NotFound)?;
    // Nobody without a well-formed name can be the sender
    let requester = requester(&headers).ok_or(ApiError::Unauthorized)?;

    state.delete_message_usecase.execute(id, requester).await?;

    Ok(StatusCode::OK)
}

/// `PUT /messages/{id}`
pub async fn edit_message(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
    payload: Result<Json<MessagePayloadRequest>, JsonRejection>,
) -> Result<Json<MessageDto>, ApiError> {
    let (user, draft) = validate_message_request(&headers, payload)?;
    let id = MessageId::new(id).map_err(|_| ApiError::NotFound)?;
    let requester =
        ParticipantName::new(user.clone()).map_err(|_| ApiError::NotRegistered(user))?;

    let message = state
        .edit_message_usecase
        .execute(id, requester, draft)
        .await?;

    Ok(Json(message.into()))
}
