//! Session state handler.

use axum::{Json, extract::State};
use matchlens::{ComparisonRow, LoadState, Session, Summary};
use serde::Serialize;

use crate::server::state::AppState;

/// Everything the renderer needs, rebuilt from the session per request so
/// it can never be stale.
#[derive(Serialize)]
pub struct StateResponse {
    /// Selectable field names (first record's keys, in order).
    pub keys: Vec<String>,
    /// Currently selected expected-side field.
    pub expected_key: String,
    /// Currently selected actual-side field.
    pub actual_key: String,
    /// Per-record comparison results, in dataset order.
    pub rows: Vec<ComparisonRow>,
    /// Aggregate match counts.
    pub summary: Summary,
    /// Error text of the last failed load, if any.
    pub error: Option<String>,
    /// Whether a load is in flight.
    pub loading: bool,
    /// Whether no load has been attempted yet (drives the UI's one-shot
    /// default load).
    pub idle: bool,
}

impl StateResponse {
    pub fn from_session(session: &Session) -> Self {
        let rows = session.rows();
        let summary = matchlens::summarize(&rows);
        Self {
            keys: session.keys(),
            expected_key: session.expected_key().to_string(),
            actual_key: session.actual_key().to_string(),
            rows,
            summary,
            error: session.error().map(str::to_string),
            loading: session.is_loading(),
            idle: *session.state() == LoadState::Idle,
        }
    }
}

/// Get the current session state.
pub async fn get_state(State(state): State<AppState>) -> Json<StateResponse> {
    let session = state.session.read().await;
    Json(StateResponse::from_session(&session))
}
