//! Participant endpoints.

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::{
    domain::ParticipantName,
    infrastructure::dto::http::{ParticipantDto, RegisterParticipantRequest},
    ui::{error::ApiError, state::AppState},
};

/// `POST /participants`
pub async fn register_participant(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RegisterParticipantRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ParticipantDto>), ApiError> {
    let Json(request) = payload?;

    // Convert DTO -> ParticipantName (Domain Model)
    let name = ParticipantName::try_from(request).map_err(|errors| {
        tracing::warn!("Rejected registration: {:?}", errors);
        ApiError::Validation(errors)
    })?;

    let participant = state
        .register_participant_usecase
        .execute(name)
        .await
        .inspect_err(|e| tracing::warn!("Registration failed: {}", e))?;

    Ok((StatusCode::CREATED, Json(participant.into())))
}

/// `GET /participants`
pub async fn list_participants(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ParticipantDto>>, ApiError> {
    let participants = state.list_participants_usecase.execute().await?;
    Ok(Json(participants.into_iter().map(Into::into).collect()))
}
