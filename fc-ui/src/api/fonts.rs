//! Catalog endpoints: querying, overlay CRUD, display order, reset

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::HashSet;

use fc_common::catalog::{FontRecord, Language};
use fc_common::query::{run_query, source_labels, FontQuery, SortKey};
use fc_common::{db, Error};

use crate::api::auth::active_scope;
use crate::api::ApiError;
use crate::AppState;

/// Wire form of the filter/sort spec. Wildcards arrive as the literal
/// "All"/"all" or are simply omitted.
#[derive(Debug, Default, Deserialize)]
pub struct FontListParams {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub subset: Option<String>,
    #[serde(default)]
    pub license: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub favorites_only: Option<bool>,
    #[serde(default)]
    pub sort: Option<String>,
}

impl FontListParams {
    fn into_query(self) -> Result<FontQuery, Error> {
        let category = match self.category.as_deref() {
            None | Some("All") => None,
            Some(c) => Some(c.parse()?),
        };
        let language = match self.language.as_deref() {
            None | Some("all") => Language::All,
            Some("zh") => Language::Zh,
            Some("en") => Language::En,
            Some(other) => {
                return Err(Error::Validation(format!("Unknown language: {}", other)))
            }
        };
        let sort = match self.sort.as_deref() {
            None | Some("default") => SortKey::Default,
            Some("alphabetical") => SortKey::Alphabetical,
            Some("newest") => SortKey::Newest,
            Some("variants") => SortKey::Variants,
            Some(other) => return Err(Error::Validation(format!("Unknown sort key: {}", other))),
        };
        let wildcard = |v: Option<String>| v.filter(|s| s != "All" && !s.is_empty());

        Ok(FontQuery {
            search: self.search.unwrap_or_default(),
            category,
            language,
            subset: wildcard(self.subset),
            license: wildcard(self.license),
            source: wildcard(self.source),
            favorites_only: self.favorites_only.unwrap_or(false),
            sort,
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FontListResponse {
    pub total: usize,
    pub fonts: Vec<FontRecord>,
    /// Distinct brand labels over the whole catalog, for the filter row
    pub sources: Vec<String>,
}

/// GET /api/fonts
///
/// Derives the visible list from the merged catalog, the query spec and the
/// active scope's favorites.
pub async fn list_fonts(
    State(state): State<AppState>,
    Query(params): Query<FontListParams>,
) -> Result<Json<FontListResponse>, ApiError> {
    let query = params.into_query()?;

    let catalog = db::get_all_fonts(&state.db).await?;
    let scope = active_scope(&state.db).await?;
    let favorites: HashSet<String> = db::get_favorites(&state.db, &scope)
        .await?
        .into_iter()
        .collect();

    let sources = source_labels(&catalog);
    let fonts = run_query(&catalog, &query, &favorites);

    Ok(Json(FontListResponse {
        total: fonts.len(),
        fonts,
        sources,
    }))
}

/// POST /api/fonts
///
/// Insert or replace an overlay record by family.
pub async fn save_font(
    State(state): State<AppState>,
    Json(font): Json<FontRecord>,
) -> Result<Json<Value>, ApiError> {
    if font.family.trim().is_empty() {
        return Err(Error::Validation("Family name must not be empty".to_string()).into());
    }
    if font.variants.is_empty() {
        return Err(Error::Validation(format!(
            "Font '{}' must have at least one variant",
            font.family
        ))
        .into());
    }

    db::save_font(&state.db, &font).await?;
    Ok(Json(json!({ "saved": font.family })))
}

/// DELETE /api/fonts/:family
///
/// Built-in-only families cannot be deleted; unknown families are 404.
pub async fn delete_font(
    State(state): State<AppState>,
    Path(family): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let in_overlay = db::overlay_contains(&state.db, &family).await?;

    if !in_overlay {
        if db::builtin_contains(&family) {
            return Err(Error::Validation(format!(
                "Built-in font '{}' cannot be deleted",
                family
            ))
            .into());
        }
        return Err(Error::NotFound(format!("Font '{}'", family)).into());
    }

    db::delete_font(&state.db, &family).await?;

    // Drop it from the comparison set too; a removed record must not linger
    state.compare.lock().await.remove(&family);

    Ok(Json(json!({ "deleted": family })))
}

#[derive(Debug, Deserialize)]
pub struct FontOrderRequest {
    pub order: Vec<String>,
}

/// PUT /api/fonts/order
///
/// Replace the custom display order wholesale.
pub async fn set_font_order(
    State(state): State<AppState>,
    Json(req): Json<FontOrderRequest>,
) -> Result<Json<Value>, ApiError> {
    db::save_font_order(&state.db, &req.order).await?;
    Ok(Json(json!({ "ordered": req.order.len() })))
}

/// POST /api/fonts/reset
///
/// Clear overlay and display order; built-ins remain.
pub async fn reset_fonts(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    db::reset_database(&state.db).await?;
    state.compare.lock().await.clear();
    Ok(Json(json!({ "reset": true })))
}
