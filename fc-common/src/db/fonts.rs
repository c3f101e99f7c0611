//! Overlay catalog and display-order storage
//!
//! The visible catalog is the built-in set merged with the user overlay by
//! family name (overlay wins), then reordered by the optional custom display
//! order. All mutations here are idempotent at the key level.

use crate::catalog::{builtin_fonts, FontRecord};
use crate::db::models::OverlayFontRow;
use crate::Result;
use sqlx::SqlitePool;
use tracing::warn;

/// Load the full merged catalog.
///
/// Overlay records replace built-ins of the same family in place; overlay
/// records with new families append in insertion order. The stored display
/// order is then applied: listed families first (unknown entries ignored),
/// remaining catalog members appended in catalog order. Corrupt overlay rows
/// are skipped with a warning rather than failing the whole load.
pub async fn get_all_fonts(pool: &SqlitePool) -> Result<Vec<FontRecord>> {
    let rows: Vec<OverlayFontRow> = sqlx::query_as(
        "SELECT family, chinese_name, category, variants, subsets, version,
                last_modified, license, source, designer, copyright,
                description, features, scenarios
         FROM font_overlay
         ORDER BY created_at, rowid",
    )
    .fetch_all(pool)
    .await?;

    let mut catalog = builtin_fonts();
    for row in rows {
        let family = row.family.clone();
        match row.into_record() {
            Ok(record) => {
                if let Some(existing) = catalog.iter_mut().find(|f| f.family == record.family) {
                    *existing = record;
                } else {
                    catalog.push(record);
                }
            }
            Err(e) => {
                warn!("Skipping corrupt overlay record '{}': {}", family, e);
            }
        }
    }

    let order = load_font_order(pool).await?;
    Ok(apply_display_order(catalog, &order))
}

/// Reorder a catalog by an explicit family list: listed members first in
/// list order, everything else appended in catalog order. Pure.
pub fn apply_display_order(catalog: Vec<FontRecord>, order: &[String]) -> Vec<FontRecord> {
    if order.is_empty() {
        return catalog;
    }

    let mut remaining: Vec<Option<FontRecord>> = catalog.into_iter().map(Some).collect();
    let mut result = Vec::with_capacity(remaining.len());

    for family in order {
        let pos = remaining
            .iter()
            .position(|f| f.as_ref().is_some_and(|r| &r.family == family));
        if let Some(pos) = pos {
            if let Some(record) = remaining[pos].take() {
                result.push(record);
            }
        }
    }
    result.extend(remaining.into_iter().flatten());
    result
}

/// Insert or replace an overlay record by family
pub async fn save_font(pool: &SqlitePool, font: &FontRecord) -> Result<()> {
    let variants = serde_json::to_string(&font.variants)?;
    let subsets = serde_json::to_string(&font.subsets)?;

    sqlx::query(
        "INSERT INTO font_overlay (
            family, chinese_name, category, variants, subsets, version,
            last_modified, license, source, designer, copyright,
            description, features, scenarios
         ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
         ON CONFLICT(family) DO UPDATE SET
            chinese_name = excluded.chinese_name,
            category = excluded.category,
            variants = excluded.variants,
            subsets = excluded.subsets,
            version = excluded.version,
            last_modified = excluded.last_modified,
            license = excluded.license,
            source = excluded.source,
            designer = excluded.designer,
            copyright = excluded.copyright,
            description = excluded.description,
            features = excluded.features,
            scenarios = excluded.scenarios,
            updated_at = CURRENT_TIMESTAMP",
    )
    .bind(&font.family)
    .bind(&font.chinese_name)
    .bind(font.category.as_str())
    .bind(&variants)
    .bind(&subsets)
    .bind(&font.version)
    .bind(&font.last_modified)
    .bind(&font.license)
    .bind(&font.source)
    .bind(&font.designer)
    .bind(&font.copyright)
    .bind(&font.description)
    .bind(&font.features)
    .bind(&font.scenarios)
    .execute(pool)
    .await?;

    Ok(())
}

/// Remove a family from the overlay and prune it from the display order.
///
/// A family that only exists in the built-in set is a storage no-op here;
/// callers reject such deletions before reaching this layer.
pub async fn delete_font(pool: &SqlitePool, family: &str) -> Result<()> {
    sqlx::query("DELETE FROM font_overlay WHERE family = ?")
        .bind(family)
        .execute(pool)
        .await?;
    sqlx::query("DELETE FROM font_order WHERE family = ?")
        .bind(family)
        .execute(pool)
        .await?;
    Ok(())
}

/// Whether the overlay holds a record for this family
pub async fn overlay_contains(pool: &SqlitePool, family: &str) -> Result<bool> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM font_overlay WHERE family = ?")
        .bind(family)
        .fetch_one(pool)
        .await?;
    Ok(count > 0)
}

/// Whether the built-in set holds this family
pub fn builtin_contains(family: &str) -> bool {
    builtin_fonts().iter().any(|f| f.family == family)
}

/// Replace the custom display order wholesale
pub async fn save_font_order(pool: &SqlitePool, order: &[String]) -> Result<()> {
    let mut tx = pool.begin().await?;
    sqlx::query("DELETE FROM font_order").execute(&mut *tx).await?;
    for (position, family) in order.iter().enumerate() {
        sqlx::query("INSERT INTO font_order (position, family) VALUES (?, ?)")
            .bind(position as i64)
            .bind(family)
            .execute(&mut *tx)
            .await?;
    }
    tx.commit().await?;
    Ok(())
}

/// Load the stored display order (empty when never customized)
pub async fn load_font_order(pool: &SqlitePool) -> Result<Vec<String>> {
    let order: Vec<String> =
        sqlx::query_scalar("SELECT family FROM font_order ORDER BY position")
            .fetch_all(pool)
            .await?;
    Ok(order)
}

/// Factory reset: clear the overlay and the display order. Built-ins,
/// accounts and preferences remain.
pub async fn reset_database(pool: &SqlitePool) -> Result<()> {
    sqlx::query("DELETE FROM font_overlay").execute(pool).await?;
    sqlx::query("DELETE FROM font_order").execute(pool).await?;
    Ok(())
}
