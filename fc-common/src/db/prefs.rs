//! Per-scope preferences: favorites, grid columns, theme, active identity

use crate::catalog::AppStyle;
use crate::db::init::{get_setting, remove_setting, set_setting};
use crate::session::{merge_favorites, Scope};
use crate::Result;
use sqlx::SqlitePool;

/// Default grid column count when a scope has no stored preference
pub const DEFAULT_GRID_COLS: i64 = 3;

const ACTIVE_USER_KEY: &str = "active_user";
const APP_STYLE_KEY: &str = "app_style";

/// Favorites of a scope, in insertion order
pub async fn get_favorites(pool: &SqlitePool, scope: &Scope) -> Result<Vec<String>> {
    let families: Vec<String> =
        sqlx::query_scalar("SELECT family FROM favorites WHERE scope = ? ORDER BY rowid")
            .bind(scope.key())
            .fetch_all(pool)
            .await?;
    Ok(families)
}

/// Toggle membership; returns true when the family was added
pub async fn toggle_favorite(pool: &SqlitePool, scope: &Scope, family: &str) -> Result<bool> {
    let removed = sqlx::query("DELETE FROM favorites WHERE scope = ? AND family = ?")
        .bind(scope.key())
        .bind(family)
        .execute(pool)
        .await?
        .rows_affected();

    if removed > 0 {
        return Ok(false);
    }

    sqlx::query("INSERT INTO favorites (scope, family) VALUES (?, ?)")
        .bind(scope.key())
        .bind(family)
        .execute(pool)
        .await?;
    Ok(true)
}

/// Replace a scope's favorites wholesale, preserving list order
pub async fn set_favorites(pool: &SqlitePool, scope: &Scope, families: &[String]) -> Result<()> {
    let mut tx = pool.begin().await?;
    sqlx::query("DELETE FROM favorites WHERE scope = ?")
        .bind(scope.key())
        .execute(&mut *tx)
        .await?;
    for family in families {
        sqlx::query("INSERT OR IGNORE INTO favorites (scope, family) VALUES (?, ?)")
            .bind(scope.key())
            .bind(family)
            .execute(&mut *tx)
            .await?;
    }
    tx.commit().await?;
    Ok(())
}

/// Drop all favorites of a scope
pub async fn clear_favorites(pool: &SqlitePool, scope: &Scope) -> Result<()> {
    sqlx::query("DELETE FROM favorites WHERE scope = ?")
        .bind(scope.key())
        .execute(pool)
        .await?;
    Ok(())
}

/// Merge guest favorites into an account scope (union, account order first),
/// then clear the guest scope. Returns the merged list.
pub async fn merge_guest_favorites(pool: &SqlitePool, username: &str) -> Result<Vec<String>> {
    let guest_scope = Scope::Guest;
    let user_scope = Scope::User(username.to_string());

    let guest = get_favorites(pool, &guest_scope).await?;
    let account = get_favorites(pool, &user_scope).await?;
    let merged = merge_favorites(&guest, &account);

    set_favorites(pool, &user_scope, &merged).await?;
    clear_favorites(pool, &guest_scope).await?;
    Ok(merged)
}

/// Grid column preference for a scope (1-4, default 3)
pub async fn get_grid_cols(pool: &SqlitePool, scope: &Scope) -> Result<i64> {
    let value = get_setting(pool, &scope.pref_key("grid_cols")).await?;
    Ok(value
        .and_then(|v| v.parse::<i64>().ok())
        .unwrap_or(DEFAULT_GRID_COLS))
}

pub async fn set_grid_cols(pool: &SqlitePool, scope: &Scope, cols: i64) -> Result<()> {
    set_setting(pool, &scope.pref_key("grid_cols"), &cols.to_string()).await
}

/// Global UI theme
pub async fn get_app_style(pool: &SqlitePool) -> Result<AppStyle> {
    let value = get_setting(pool, APP_STYLE_KEY).await?;
    Ok(value
        .map(|v| AppStyle::parse_or_default(&v))
        .unwrap_or_default())
}

pub async fn set_app_style(pool: &SqlitePool, style: AppStyle) -> Result<()> {
    set_setting(pool, APP_STYLE_KEY, style.as_str()).await
}

/// Username of the active identity, if any
pub async fn get_active_user(pool: &SqlitePool) -> Result<Option<String>> {
    get_setting(pool, ACTIVE_USER_KEY).await
}

/// Persist or clear the active identity
pub async fn set_active_user(pool: &SqlitePool, username: Option<&str>) -> Result<()> {
    match username {
        Some(name) => set_setting(pool, ACTIVE_USER_KEY, name).await,
        None => remove_setting(pool, ACTIVE_USER_KEY).await,
    }
}
