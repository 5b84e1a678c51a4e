//! Mapping of use case errors to HTTP responses.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::usecase::{
    DeleteMessageError, EditMessageError, GetMessagesError, ListParticipantsError,
    PostMessageError, RefreshHeartbeatError, RegisterParticipantError,
};

/// HTTP API error
///
/// Validation failures carry the list of failing rules; not-found,
/// unauthorized and conflict map to bare status codes.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("validation failed: {0:?}")]
    Validation(Vec<String>),

    #[error("'{0}' is not registered")]
    NotRegistered(String),

    #[error("conflict")]
    Conflict,

    #[error("not found")]
    NotFound,

    #[error("unauthorized")]
    Unauthorized,

    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => {
                (StatusCode::UNPROCESSABLE_ENTITY, Json(errors)).into_response()
            }
            ApiError::NotRegistered(name) => {
                tracing::warn!(
                    participant = %name,
                    "Rejected request from unregistered participant"
                );
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(serde_json::json!({"message": "participant is not registered"})),
                )
                    .into_response()
            }
            ApiError::Conflict => StatusCode::CONFLICT.into_response(),
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED.into_response(),
            ApiError::Internal(detail) => {
                tracing::error!("Store error: {}", detail);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(vec![rejection.body_text()])
    }
}

impl From<RegisterParticipantError> for ApiError {
    fn from(e: RegisterParticipantError) -> Self {
        match e {
            RegisterParticipantError::DuplicateName(_) => ApiError::Conflict,
            RegisterParticipantError::Repository(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<ListParticipantsError> for ApiError {
    fn from(e: ListParticipantsError) -> Self {
        match e {
            ListParticipantsError::Repository(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<PostMessageError> for ApiError {
    fn from(e: PostMessageError) -> Self {
        match e {
            PostMessageError::SenderNotRegistered(name) => ApiError::NotRegistered(name),
            PostMessageError::Repository(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<GetMessagesError> for ApiError {
    fn from(e: GetMessagesError) -> Self {
        match e {
            GetMessagesError::NotRegistered(name) => ApiError::NotRegistered(name),
            GetMessagesError::Repository(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<RefreshHeartbeatError> for ApiError {
    fn from(e: RefreshHeartbeatError) -> Self {
        match e {
            RefreshHeartbeatError::ParticipantNotFound(_) => ApiError::NotFound,
            RefreshHeartbeatError::Repository(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<DeleteMessageError> for ApiError {
    fn from(e: DeleteMessageError) -> Self {
        match e {
            DeleteMessageError::MessageNotFound(_) => ApiError::NotFound,
            DeleteMessageError::NotSender(_) => ApiError::Unauthorized,
            DeleteMessageError::Repository(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<EditMessageError> for ApiError {
    fn from(e: EditMessageError) -> Self {
        match e {
            EditMessageError::RequesterNotRegistered(name) => ApiError::NotRegistered(name),
            EditMessageError::MessageNotFound(_) => ApiError::NotFound,
            EditMessageError::NotSender(_) => ApiError::Unauthorized,
            EditMessageError::Repository(e) => ApiError::Internal(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RepositoryError;

    #[test]
    fn test_status_codes() {
        // テスト項目: 各エラーが固定のステータスコードに変換される
        // given (前提条件):
        let cases = [
            (ApiError::Validation(vec!["x".to_string()]), StatusCode::UNPROCESSABLE_ENTITY),
            (ApiError::NotRegistered("a".to_string()), StatusCode::UNPROCESSABLE_ENTITY),
            (ApiError::Conflict, StatusCode::CONFLICT),
            (ApiError::NotFound, StatusCode::NOT_FOUND),
            (ApiError::Unauthorized, StatusCode::UNAUTHORIZED),
            (ApiError::Internal("boom".to_string()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, expected) in cases {
            // when (操作):
            let response = error.into_response();

            // then (期待する結果):
            assert_eq!(response.status(), expected);
        }
    }

    #[test]
    fn test_usecase_errors_map_to_api_errors() {
        // テスト項目: UseCase のエラーが対応する ApiError に変換される
        // given (前提条件) / when (操作) / then (期待する結果):
        assert!(matches!(
            ApiError::from(RegisterParticipantError::DuplicateName("a".to_string())),
            ApiError::Conflict
        ));
        assert!(matches!(
            ApiError::from(DeleteMessageError::NotSender("a".to_string())),
            ApiError::Unauthorized
        ));
        assert!(matches!(
            ApiError::from(EditMessageError::MessageNotFound("1".to_string())),
            ApiError::NotFound
        ));
        assert!(matches!(
            ApiError::from(RefreshHeartbeatError::ParticipantNotFound("a".to_string())),
            ApiError::NotFound
        ));
        assert!(matches!(
            ApiError::from(GetMessagesError::Repository(RepositoryError::Unavailable(
                "down".to_string()
            ))),
            ApiError::Internal(_)
        ));
    }

    #[tokio::test]
    async fn test_not_registered_response_body() {
        // テスト項目: 未登録エラーは 422 と固定メッセージを返し、名前は本文に含めない
        // given (前提条件):
        let error = ApiError::NotRegistered("ghost".to_string());

        // when (操作):
        let response = error.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        // then (期待する結果):
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body,
            serde_json::json!({"message": "participant is not registered"})
        );
    }
}
