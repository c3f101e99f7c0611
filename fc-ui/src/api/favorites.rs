//! Favorites endpoints, scoped to the active identity (or guest)

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use fc_common::db;

use crate::api::auth::active_scope;
use crate::api::ApiError;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct FavoritesResponse {
    pub favorites: Vec<String>,
}

/// GET /api/favorites
pub async fn list_favorites(
    State(state): State<AppState>,
) -> Result<Json<FavoritesResponse>, ApiError> {
    let scope = active_scope(&state.db).await?;
    let favorites = db::get_favorites(&state.db, &scope).await?;
    Ok(Json(FavoritesResponse { favorites }))
}

#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    pub family: String,
}

#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    /// True when the family was added, false when removed
    pub favorited: bool,
    pub favorites: Vec<String>,
}

/// POST /api/favorites
pub async fn toggle_favorite(
    State(state): State<AppState>,
    Json(req): Json<ToggleRequest>,
) -> Result<Json<ToggleResponse>, ApiError> {
    let scope = active_scope(&state.db).await?;
    let favorited = db::toggle_favorite(&state.db, &scope, &req.family).await?;
    let favorites = db::get_favorites(&state.db, &scope).await?;
    Ok(Json(ToggleResponse {
        favorited,
        favorites,
    }))
}
