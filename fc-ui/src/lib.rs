//! fc-ui library - FontCanvas user-facing module
//!
//! HTTP surface over the shared catalog, query, account and preference
//! logic, plus the AI pairing/discovery proxy. Holds the process-wide
//! comparison set (bounded, in-memory, never persisted).

use axum::Router;
use sqlx::SqlitePool;
use std::sync::Arc;
use tokio::sync::Mutex;

use fc_common::compare::ComparisonSet;

pub mod api;
pub mod services;

use services::pairing::PairingClient;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
    /// AI suggestion client (degrades to fixed fallbacks on failure)
    pub pairing: PairingClient,
    /// Current comparison set; one per process, mirroring the
    /// single-session model of the UI
    pub compare: Arc<Mutex<ComparisonSet>>,
}

impl AppState {
    /// Create new application state
    pub fn new(db: SqlitePool, pairing: PairingClient) -> Self {
        Self {
            db,
            pairing,
            compare: Arc::new(Mutex::new(ComparisonSet::new())),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{delete, get, post, put};

    Router::new()
        .route("/health", get(api::health::health))
        .route("/api/fonts", get(api::fonts::list_fonts).post(api::fonts::save_font))
        .route("/api/fonts/order", put(api::fonts::set_font_order))
        .route("/api/fonts/reset", post(api::fonts::reset_fonts))
        .route("/api/fonts/export", get(api::export::export_catalog))
        .route("/api/fonts/:family", delete(api::fonts::delete_font))
        .route("/api/auth/register", post(api::auth::register))
        .route("/api/auth/login", post(api::auth::login))
        .route("/api/auth/logout", post(api::auth::logout))
        .route("/api/auth/session", get(api::auth::session))
        .route(
            "/api/favorites",
            get(api::favorites::list_favorites).post(api::favorites::toggle_favorite),
        )
        .route(
            "/api/prefs",
            get(api::prefs::get_prefs).put(api::prefs::update_prefs),
        )
        .route(
            "/api/compare",
            get(api::compare::get_comparison).delete(api::compare::clear_comparison),
        )
        .route("/api/compare/toggle", post(api::compare::toggle_comparison))
        .route("/api/compare/:family", delete(api::compare::remove_from_comparison))
        .route("/api/ai/pairing", post(api::pairing::font_pairing))
        .route("/api/ai/discover", post(api::pairing::discover_fonts))
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .with_state(state)
}
