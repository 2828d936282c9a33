//! Category and item endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// GET /api/categories
pub async fn list(State(state): State<AppState>) -> Result<Json<CategoryListResponse>> {
    let session = state.session()?;
    let categories = session
        .catalog()
        .summaries()
        .into_iter()
        .map(|c| CategoryView {
            active: session.selection().includes(&c.name),
            name: c.name,
            item_count: c.item_count,
        })
        .collect();
    Ok(Json(CategoryListResponse { categories }))
}

/// POST /api/categories
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CreateCategoryRequest>,
) -> Result<Json<MutationResponse>> {
    let mut session = state.session()?;
    let persisted = session.add_category(&payload.name)?;
    tracing::info!(category = %payload.name, "category added");
    Ok(Json(persisted.into()))
}

/// PUT /api/categories/:name
pub async fn rename(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(payload): Json<RenameCategoryRequest>,
) -> Result<Json<MutationResponse>> {
    let mut session = state.session()?;
    let persisted = session.rename_category(&name, &payload.new_name)?;
    tracing::info!(from = %name, to = %payload.new_name, "category renamed");
    Ok(Json(persisted.into()))
}

/// GET /api/categories/:name/items
pub async fn items(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ItemListResponse>> {
    let session = state.session()?;
    let items = session
        .catalog()
        .items(&name)
        .ok_or_else(|| ApiError::from(quiz_core::QuizError::NotFound(name.clone())))?
        .to_vec();
    Ok(Json(ItemListResponse {
        category: name,
        items,
    }))
}

/// POST /api/categories/:name/items
pub async fn add_item(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(payload): Json<NewItemRequest>,
) -> Result<Json<MutationResponse>> {
    let mut session = state.session()?;
    let persisted = session.add_item(&name, payload.into_item(&name))?;
    Ok(Json(persisted.into()))
}

/// PUT /api/categories/:name/items/:index
pub async fn edit_item(
    State(state): State<AppState>,
    Path((name, index)): Path<(String, usize)>,
    Json(patch): Json<ItemPatch>,
) -> Result<Json<MutationResponse>> {
    let mut session = state.session()?;
    let persisted = session.edit_item(&name, index, &patch)?;
    Ok(Json(persisted.into()))
}
