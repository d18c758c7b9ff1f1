//! Dataset load handlers.
//!
//! Both entry points run through the session's epoch guard: the token is
//! taken before any I/O, and a completion whose token has been superseded
//! by a newer load leaves the session untouched.

use axum::{Json, extract::State};
use matchlens::parse_records;
use serde::Deserialize;

use crate::server::error::ApiError;
use crate::server::handlers::StateResponse;
use crate::server::state::AppState;
use crate::source::load_source;

/// Request body for the load endpoint.
#[derive(Deserialize)]
pub struct LoadRequest {
    /// URL or path of the mappings file.
    pub source: String,
}

/// Load a dataset from a URL or server-local path.
pub async fn load_dataset(
    State(state): State<AppState>,
    Json(request): Json<LoadRequest>,
) -> Result<Json<StateResponse>, ApiError> {
    let token = state.session.write().await.begin_load();

    let resolved = state.resolve_source(&request.source);
    let outcome = tokio::task::spawn_blocking(move || {
        load_source(&resolved).map(|(records, _metadata)| records)
    })
    .await
    .map_err(|e| ApiError::Internal(e.to_string()))?;

    let mut session = state.session.write().await;
    session.complete(token, outcome);
    Ok(Json(StateResponse::from_session(&session)))
}

/// Install an uploaded file's content as the dataset.
///
/// The body is the file's full text; parsing is synchronous and cheap
/// enough to run inline.
pub async fn upload_dataset(
    State(state): State<AppState>,
    body: String,
) -> Json<StateResponse> {
    let mut session = state.session.write().await;
    let token = session.begin_load();
    session.complete(token, parse_records(&body));
    Json(StateResponse::from_session(&session))
}
