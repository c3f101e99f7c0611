//! Preference endpoints: grid columns (per scope) and theme (global)

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use fc_common::catalog::AppStyle;
use fc_common::{db, Error};

use crate::api::auth::active_scope;
use crate::api::ApiError;
use crate::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrefsResponse {
    pub grid_cols: i64,
    pub app_style: AppStyle,
}

/// GET /api/prefs
pub async fn get_prefs(State(state): State<AppState>) -> Result<Json<PrefsResponse>, ApiError> {
    let scope = active_scope(&state.db).await?;
    Ok(Json(PrefsResponse {
        grid_cols: db::get_grid_cols(&state.db, &scope).await?,
        app_style: db::get_app_style(&state.db).await?,
    }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrefsUpdate {
    #[serde(default)]
    pub grid_cols: Option<i64>,
    #[serde(default)]
    pub app_style: Option<AppStyle>,
}

/// PUT /api/prefs
pub async fn update_prefs(
    State(state): State<AppState>,
    Json(req): Json<PrefsUpdate>,
) -> Result<Json<PrefsResponse>, ApiError> {
    let scope = active_scope(&state.db).await?;

    if let Some(cols) = req.grid_cols {
        if !(1..=4).contains(&cols) {
            return Err(Error::Validation(format!(
                "Grid columns must be between 1 and 4, got {}",
                cols
            ))
            .into());
        }
        db::set_grid_cols(&state.db, &scope, cols).await?;
    }

    if let Some(style) = req.app_style {
        db::set_app_style(&state.db, style).await?;
    }

    Ok(Json(PrefsResponse {
        grid_cols: db::get_grid_cols(&state.db, &scope).await?,
        app_style: db::get_app_style(&state.db).await?,
    }))
}
