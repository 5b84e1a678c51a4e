//! Heartbeat endpoint.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
};

use crate::ui::{error::ApiError, state::AppState};

use super::requester;

/// `POST /status`
///
/// Refreshes the heartbeat of the participant named in the `user` header.
pub async fn refresh_status(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<StatusCode, ApiError> {
    // A missing or malformed name can never be registered
    let name = requester(&headers).ok_or(ApiError::NotFound)?;

    state.refresh_heartbeat_usecase.execute(name).await?;

    Ok(StatusCode::OK)
}
