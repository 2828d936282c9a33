//! Score endpoints

use axum::{extract::State, Json};

use crate::error::Result;
use crate::models::*;
use crate::AppState;

/// GET /api/score
pub async fn summary(State(state): State<AppState>) -> Result<Json<ScoreSummary>> {
    let session = state.session()?;
    Ok(Json(session.score()))
}

/// DELETE /api/score
pub async fn reset(State(state): State<AppState>) -> Result<Json<ScoreSummary>> {
    let mut session = state.session()?;
    session.reset_score();
    Ok(Json(session.score()))
}

/// GET /api/score/errors
pub async fn errors(State(state): State<AppState>) -> Result<Json<ErrorLogResponse>> {
    let session = state.session()?;
    Ok(Json(ErrorLogResponse {
        errors: session.error_log().to_vec(),
    }))
}
