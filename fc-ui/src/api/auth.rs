//! Account endpoints: register, login, logout, session introspection
//!
//! The active identity is persisted in settings so the session survives a
//! restart, matching the source's behavior of keeping the logged-in user in
//! durable storage. At most one identity is active; everything else is the
//! guest scope.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use sqlx::SqlitePool;
use tracing::info;

use fc_common::db;
use fc_common::session::{Scope, UserIdentity};

use crate::api::ApiError;
use crate::AppState;

/// Scope of the active identity, or guest
pub async fn active_scope(pool: &SqlitePool) -> fc_common::Result<Scope> {
    Ok(match db::get_active_user(pool).await? {
        Some(username) => Scope::User(username),
        None => Scope::Guest,
    })
}

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
    /// Merge the guest favorites into the account on login. The UI asks the
    /// user first; the merge itself happens here.
    #[serde(default)]
    pub merge_favorites: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub user: Option<UserIdentity>,
    pub favorites: Vec<String>,
    pub grid_cols: i64,
}

async fn session_snapshot(pool: &SqlitePool) -> fc_common::Result<SessionResponse> {
    let scope = active_scope(pool).await?;
    let user = match &scope {
        Scope::User(name) => db::get_identity(pool, name).await?,
        Scope::Guest => None,
    };
    let favorites = db::get_favorites(pool, &scope).await?;
    let grid_cols = db::get_grid_cols(pool, &scope).await?;
    Ok(SessionResponse {
        user,
        favorites,
        grid_cols,
    })
}

/// POST /api/auth/register
///
/// Creates the account and logs it in.
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    let user = db::register(&state.db, &req.username, &req.password).await?;
    db::set_active_user(&state.db, Some(&user.username)).await?;
    info!("Registered account '{}'", user.username);

    Ok(Json(session_snapshot(&state.db).await?))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    let user = db::authenticate(&state.db, &req.username, &req.password).await?;

    if req.merge_favorites {
        let guest_favorites = db::get_favorites(&state.db, &Scope::Guest).await?;
        if !guest_favorites.is_empty() {
            let merged = db::merge_guest_favorites(&state.db, &user.username).await?;
            info!(
                "Merged {} guest favorites into '{}' ({} total)",
                guest_favorites.len(),
                user.username,
                merged.len()
            );
        }
    }

    db::set_active_user(&state.db, Some(&user.username)).await?;
    info!("User '{}' logged in", user.username);

    Ok(Json(session_snapshot(&state.db).await?))
}

/// POST /api/auth/logout
///
/// Clears the active identity; favorites revert to the guest scope.
pub async fn logout(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    db::set_active_user(&state.db, None).await?;
    Ok(Json(json!({ "loggedOut": true })))
}

/// GET /api/auth/session
pub async fn session(State(state): State<AppState>) -> Result<Json<SessionResponse>, ApiError> {
    Ok(Json(session_snapshot(&state.db).await?))
}
