//! Stored-payload schema versioning
//!
//! The browser-storage ancestor of this data had no version field at all, so
//! the on-disk shape is versioned explicitly here. Version 1 is the baseline;
//! future shape changes add a numbered migration step.

use crate::Result;
use sqlx::SqlitePool;
use tracing::info;

/// Current stored schema version
pub const CURRENT_SCHEMA_VERSION: i64 = 1;

/// Read the stored schema version (0 when the table is empty)
pub async fn get_schema_version(pool: &SqlitePool) -> Result<i64> {
    let version: Option<i64> = sqlx::query_scalar("SELECT MAX(version) FROM schema_version")
        .fetch_one(pool)
        .await?;
    Ok(version.unwrap_or(0))
}

async fn set_schema_version(pool: &SqlitePool, version: i64) -> Result<()> {
    // Replace atomically; a partial write would read back as version 0
    let mut tx = pool.begin().await?;
    sqlx::query("DELETE FROM schema_version").execute(&mut *tx).await?;
    sqlx::query("INSERT INTO schema_version (version) VALUES (?)")
        .bind(version)
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;
    Ok(())
}

/// Apply any pending migrations (idempotent)
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    let mut version = get_schema_version(pool).await?;

    if version == 0 {
        // Fresh database, or one predating the version table: the baseline
        // tables were just created, so only the marker is needed.
        set_schema_version(pool, 1).await?;
        version = 1;
        info!("Stored schema initialized at version 1");
    }

    // Future migrations chain from here:
    // if version == 1 { ...; set_schema_version(pool, 2).await?; version = 2; }

    if version != CURRENT_SCHEMA_VERSION {
        return Err(crate::Error::Config(format!(
            "Unsupported stored schema version {} (expected {})",
            version, CURRENT_SCHEMA_VERSION
        )));
    }

    Ok(())
}
