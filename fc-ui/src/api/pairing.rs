//! AI pairing and discovery endpoints
//!
//! Always respond 200: the client degrades to fixed fallbacks on any
//! remote failure, so these handlers never surface a hard error.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::services::pairing::{DiscoveredFont, FontPairing};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct PromptRequest {
    pub prompt: String,
}

/// POST /api/ai/pairing
pub async fn font_pairing(
    State(state): State<AppState>,
    Json(req): Json<PromptRequest>,
) -> Json<FontPairing> {
    Json(state.pairing.get_font_pairing(&req.prompt).await)
}

/// POST /api/ai/discover
pub async fn discover_fonts(
    State(state): State<AppState>,
    Json(req): Json<PromptRequest>,
) -> Json<Vec<DiscoveredFont>> {
    Json(state.pairing.discover_fonts(&req.prompt).await)
}
