//! Database row models

use crate::catalog::{Category, FontRecord};
use crate::Result;

/// One row of the `font_overlay` table. List-valued fields are JSON text.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct OverlayFontRow {
    pub family: String,
    pub chinese_name: Option<String>,
    pub category: String,
    pub variants: String,
    pub subsets: String,
    pub version: String,
    pub last_modified: String,
    pub license: Option<String>,
    pub source: Option<String>,
    pub designer: Option<String>,
    pub copyright: Option<String>,
    pub description: Option<String>,
    pub features: Option<String>,
    pub scenarios: Option<String>,
}

impl OverlayFontRow {
    /// Decode the row into a catalog record. Fails on an unknown category or
    /// malformed JSON list; callers treat a failed row as corrupt and skip it.
    pub fn into_record(self) -> Result<FontRecord> {
        let category: Category = self.category.parse()?;
        let variants: Vec<String> = serde_json::from_str(&self.variants)?;
        let subsets: Vec<String> = serde_json::from_str(&self.subsets)?;
        Ok(FontRecord {
            family: self.family,
            chinese_name: self.chinese_name,
            category,
            variants,
            subsets,
            version: self.version,
            last_modified: self.last_modified,
            license: self.license,
            source: self.source,
            designer: self.designer,
            copyright: self.copyright,
            description: self.description,
            features: self.features,
            scenarios: self.scenarios,
        })
    }
}

/// One row of the `accounts` table (credential digest included; never
/// serialized out of the storage layer)
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AccountRow {
    pub guid: String,
    pub username: String,
    pub password_hash: String,
    pub avatar_color: String,
    pub created_at: String,
}
