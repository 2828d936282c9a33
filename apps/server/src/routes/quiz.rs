//! Question and answer endpoints

use axum::{extract::State, Json};

use crate::error::Result;
use crate::models::*;
use crate::AppState;

/// POST /api/quiz/next
pub async fn next(State(state): State<AppState>) -> Result<Json<Step>> {
    let mut session = state.session()?;
    let step = session.next_question()?;
    Ok(Json(step))
}

/// POST /api/quiz/answer
pub async fn answer(
    State(state): State<AppState>,
    Json(payload): Json<AnswerRequest>,
) -> Result<Json<AnswerOutcome>> {
    let mut session = state.session()?;
    let outcome = session.submit_answer(&payload.answer)?;
    Ok(Json(outcome))
}
