//! Full-catalog JSON export

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use fc_common::db;

use crate::api::ApiError;
use crate::AppState;

/// GET /api/fonts/export
///
/// Pretty-printed dump of the merged catalog, named with the current date,
/// e.g. `fontcanvas_db_2026-08-30.json`.
pub async fn export_catalog(State(state): State<AppState>) -> Result<Response, ApiError> {
    let fonts = db::get_all_fonts(&state.db).await?;
    let body = serde_json::to_vec_pretty(&fonts).map_err(fc_common::Error::from)?;

    let filename = format!(
        "fontcanvas_db_{}.json",
        chrono::Local::now().format("%Y-%m-%d")
    );

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        body,
    )
        .into_response())
}
