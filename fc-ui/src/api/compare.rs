//! Comparison set endpoints
//!
//! The set lives in process memory and is never persisted; capacity
//! rejections surface as 409 with the set unchanged.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use fc_common::catalog::FontRecord;
use fc_common::compare::{ToggleOutcome, MAX_COMPARE_FONTS};
use fc_common::{db, Error};

use crate::api::ApiError;
use crate::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResponse {
    pub fonts: Vec<FontRecord>,
    pub is_full: bool,
    pub capacity: usize,
}

/// GET /api/compare
pub async fn get_comparison(State(state): State<AppState>) -> Json<ComparisonResponse> {
    let set = state.compare.lock().await;
    Json(ComparisonResponse {
        fonts: set.fonts().to_vec(),
        is_full: set.is_full(),
        capacity: MAX_COMPARE_FONTS,
    })
}

#[derive(Debug, Deserialize)]
pub struct CompareToggleRequest {
    pub family: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareToggleResponse {
    /// True when the font was added, false when removed
    pub added: bool,
    pub fonts: Vec<FontRecord>,
    pub is_full: bool,
}

/// POST /api/compare/toggle
///
/// Looks the family up in the merged catalog first; toggling an unknown
/// family is 404 rather than silently adding a stub record.
pub async fn toggle_comparison(
    State(state): State<AppState>,
    Json(req): Json<CompareToggleRequest>,
) -> Result<Json<CompareToggleResponse>, ApiError> {
    let catalog = db::get_all_fonts(&state.db).await?;
    let font = catalog
        .into_iter()
        .find(|f| f.family == req.family)
        .ok_or_else(|| Error::NotFound(format!("Font '{}'", req.family)))?;

    let mut set = state.compare.lock().await;
    let outcome = set.toggle(font)?;

    Ok(Json(CompareToggleResponse {
        added: outcome == ToggleOutcome::Added,
        fonts: set.fonts().to_vec(),
        is_full: set.is_full(),
    }))
}

/// DELETE /api/compare/:family
pub async fn remove_from_comparison(
    State(state): State<AppState>,
    Path(family): Path<String>,
) -> Json<Value> {
    let mut set = state.compare.lock().await;
    set.remove(&family);
    Json(json!({ "remaining": set.len() }))
}

/// DELETE /api/compare
pub async fn clear_comparison(State(state): State<AppState>) -> Json<Value> {
    state.compare.lock().await.clear();
    Json(json!({ "cleared": true }))
}
