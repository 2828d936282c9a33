//! Category selection and direction endpoints

use axum::{extract::State, Json};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// PUT /api/session/categories
pub async fn select(
    State(state): State<AppState>,
    Json(payload): Json<SelectCategoriesRequest>,
) -> Result<Json<SelectionResponse>> {
    let mut session = state.session()?;
    if payload.all {
        if !payload.categories.is_empty() {
            return Err(ApiError::BadRequest(
                "either list categories or set all, not both".to_string(),
            ));
        }
        session.select_all();
    } else {
        session.select_categories(payload.categories)?;
    }
    Ok(Json(SelectionResponse {
        selection: session.selection().clone(),
    }))
}

/// DELETE /api/session/categories
pub async fn clear(State(state): State<AppState>) -> Result<Json<SelectionResponse>> {
    let mut session = state.session()?;
    session.clear_categories();
    Ok(Json(SelectionResponse {
        selection: session.selection().clone(),
    }))
}

/// PUT /api/session/direction
pub async fn direction(
    State(state): State<AppState>,
    Json(payload): Json<DirectionRequest>,
) -> Result<Json<DirectionResponse>> {
    let mut session = state.session()?;
    let direction = match payload.direction {
        Some(direction) => {
            session.set_direction(direction);
            direction
        }
        None => session.toggle_direction(),
    };
    Ok(Json(DirectionResponse { direction }))
}
