//! Field selection handler.

use axum::{Json, extract::State};
use serde::Deserialize;

use crate::server::error::ApiError;
use crate::server::handlers::StateResponse;
use crate::server::state::AppState;

/// Request body for the key selection endpoint.
#[derive(Deserialize)]
pub struct KeysRequest {
    pub expected_key: Option<String>,
    pub actual_key: Option<String>,
}

/// Change the expected/actual field selection.
///
/// No reload happens; the response carries rows and summary recomputed
/// against the dataset already in the session.
pub async fn set_keys(
    State(state): State<AppState>,
    Json(request): Json<KeysRequest>,
) -> Result<Json<StateResponse>, ApiError> {
    if request.expected_key.is_none() && request.actual_key.is_none() {
        return Err(ApiError::BadRequest(
            "expected_key or actual_key required".to_string(),
        ));
    }

    let mut session = state.session.write().await;
    if let Some(key) = request.expected_key {
        session.set_expected_key(key);
    }
    if let Some(key) = request.actual_key {
        session.set_actual_key(key);
    }
    Ok(Json(StateResponse::from_session(&session)))
}
