//! Pure query engine: derives an ordered display list from the merged
//! catalog and a filter/sort specification.
//!
//! No side effects and no storage access; the same inputs always produce the
//! same output, so callers can re-derive the view at will.

use crate::catalog::{Category, FontRecord, Language};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Sort order for the derived list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Catalog order (post display-order application)
    #[default]
    Default,
    /// Ascending, case-insensitive compare on family name
    Alphabetical,
    /// Descending by parsed last-modified date; unparseable dates sort last
    Newest,
    /// Descending by variant count
    Variants,
}

/// Filter specification. All active axes are ANDed together; the default
/// value of every axis matches everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FontQuery {
    /// Case-insensitive substring over family + chinese name
    #[serde(default)]
    pub search: String,
    /// Exact category, None = All
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub language: Language,
    /// Record's subsets must contain this tag, None = All
    #[serde(default)]
    pub subset: Option<String>,
    /// Substring match against the license label, None = All
    #[serde(default)]
    pub license: Option<String>,
    /// Exact match against the source label, None = All
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub favorites_only: bool,
    #[serde(default)]
    pub sort: SortKey,
}

impl FontQuery {
    fn matches(&self, font: &FontRecord, favorites: &HashSet<String>) -> bool {
        if !self.search.is_empty() {
            let haystack = format!(
                "{}{}",
                font.family,
                font.chinese_name.as_deref().unwrap_or("")
            )
            .to_lowercase();
            if !haystack.contains(&self.search.to_lowercase()) {
                return false;
            }
        }
        if let Some(category) = self.category {
            if font.category != category {
                return false;
            }
        }
        match self.language {
            Language::All => {}
            Language::Zh => {
                if !font.is_chinese() {
                    return false;
                }
            }
            Language::En => {
                if font.is_chinese() {
                    return false;
                }
            }
        }
        if let Some(subset) = &self.subset {
            if !font.subsets.iter().any(|s| s == subset) {
                return false;
            }
        }
        if let Some(license) = &self.license {
            if !font.license_label().contains(license.as_str()) {
                return false;
            }
        }
        if let Some(source) = &self.source {
            if font.source_label() != source {
                return false;
            }
        }
        if self.favorites_only && !favorites.contains(&font.family) {
            return false;
        }
        true
    }
}

/// Apply filters then sort, returning a fresh ordered list.
///
/// Sorting is stable: records comparing equal keep their relative catalog
/// order. The input order is the catalog order, so `SortKey::Default` is a
/// plain filter pass.
pub fn run_query(
    catalog: &[FontRecord],
    query: &FontQuery,
    favorites: &HashSet<String>,
) -> Vec<FontRecord> {
    let mut result: Vec<FontRecord> = catalog
        .iter()
        .filter(|f| query.matches(f, favorites))
        .cloned()
        .collect();

    match query.sort {
        SortKey::Default => {}
        SortKey::Alphabetical => {
            result.sort_by(|a, b| a.family.to_lowercase().cmp(&b.family.to_lowercase()));
        }
        SortKey::Newest => {
            // None (unparseable) sorts after every real date under reverse order
            result.sort_by(|a, b| b.modified_date().cmp(&a.modified_date()));
        }
        SortKey::Variants => {
            result.sort_by(|a, b| b.variants.len().cmp(&a.variants.len()));
        }
    }

    result
}

/// Distinct source labels present in the catalog, in first-seen order, with
/// the fallback label applied. Drives the brand filter row in the UI.
pub fn source_labels(catalog: &[FontRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut labels = Vec::new();
    for font in catalog {
        let label = font.source_label();
        if seen.insert(label.to_string()) {
            labels.push(label.to_string());
        }
    }
    labels
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin_fonts;

    fn font(family: &str, chinese_name: Option<&str>, category: Category, modified: &str) -> FontRecord {
        FontRecord {
            family: family.to_string(),
            chinese_name: chinese_name.map(String::from),
            category,
            variants: vec!["400".to_string()],
            subsets: vec!["latin".to_string()],
            version: "v1".to_string(),
            last_modified: modified.to_string(),
            license: None,
            source: None,
            designer: None,
            copyright: None,
            description: None,
            features: None,
            scenarios: None,
        }
    }

    fn sample_catalog() -> Vec<FontRecord> {
        vec![
            font("Roboto", None, Category::SansSerif, "2024-01-01"),
            font("Noto Serif SC", Some("思源宋体"), Category::Serif, "2025-03-01"),
        ]
    }

    #[test]
    fn language_filter_uses_chinese_name_presence() {
        let catalog = sample_catalog();
        let query = FontQuery {
            language: Language::Zh,
            ..Default::default()
        };
        let result = run_query(&catalog, &query, &HashSet::new());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].family, "Noto Serif SC");
    }

    #[test]
    fn newest_sorts_descending_by_date() {
        let catalog = sample_catalog();
        let query = FontQuery {
            sort: SortKey::Newest,
            ..Default::default()
        };
        let result = run_query(&catalog, &query, &HashSet::new());
        let families: Vec<&str> = result.iter().map(|f| f.family.as_str()).collect();
        assert_eq!(families, vec!["Noto Serif SC", "Roboto"]);
    }

    #[test]
    fn search_matches_chinese_name_case_insensitively() {
        let catalog = sample_catalog();
        let mut query = FontQuery {
            search: "思源".to_string(),
            ..Default::default()
        };
        assert_eq!(run_query(&catalog, &query, &HashSet::new()).len(), 1);

        query.search = "roBOto".to_string();
        let result = run_query(&catalog, &query, &HashSet::new());
        assert_eq!(result[0].family, "Roboto");
    }

    #[test]
    fn alphabetical_sort_is_idempotent() {
        let catalog = builtin_fonts();
        let query = FontQuery {
            sort: SortKey::Alphabetical,
            ..Default::default()
        };
        let once = run_query(&catalog, &query, &HashSet::new());
        let twice = run_query(&once, &query, &HashSet::new());
        let a: Vec<&str> = once.iter().map(|f| f.family.as_str()).collect();
        let b: Vec<&str> = twice.iter().map(|f| f.family.as_str()).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn filtering_is_monotonic_under_stricter_predicates() {
        let catalog = builtin_fonts();
        let favorites: HashSet<String> = ["Roboto".to_string()].into_iter().collect();

        let loose = FontQuery::default();
        let strict = FontQuery {
            favorites_only: true,
            ..Default::default()
        };
        let loose_count = run_query(&catalog, &loose, &favorites).len();
        let strict_count = run_query(&catalog, &strict, &favorites).len();
        assert!(strict_count <= loose_count);
        assert_eq!(strict_count, 1);
    }

    #[test]
    fn query_is_referentially_transparent() {
        let catalog = builtin_fonts();
        let query = FontQuery {
            category: Some(Category::Handwriting),
            language: Language::Zh,
            sort: SortKey::Variants,
            ..Default::default()
        };
        let favorites = HashSet::new();
        let a = run_query(&catalog, &query, &favorites);
        let b = run_query(&catalog, &query, &favorites);
        let fa: Vec<&str> = a.iter().map(|f| f.family.as_str()).collect();
        let fb: Vec<&str> = b.iter().map(|f| f.family.as_str()).collect();
        assert_eq!(fa, fb);
    }

    #[test]
    fn variants_sort_is_descending_by_count() {
        let mut catalog = vec![
            font("One Variant", None, Category::SansSerif, "2024-01-01"),
            font("Three Variants", None, Category::SansSerif, "2024-01-01"),
            font("Two Variants", None, Category::SansSerif, "2024-01-01"),
        ];
        catalog[1].variants = vec!["300".to_string(), "400".to_string(), "700".to_string()];
        catalog[2].variants = vec!["400".to_string(), "700".to_string()];

        let query = FontQuery {
            sort: SortKey::Variants,
            ..Default::default()
        };
        let result = run_query(&catalog, &query, &HashSet::new());
        let families: Vec<&str> = result.iter().map(|f| f.family.as_str()).collect();
        assert_eq!(families, vec!["Three Variants", "Two Variants", "One Variant"]);
    }

    #[test]
    fn variants_sort_keeps_catalog_order_for_ties() {
        let catalog = vec![
            font("B Font", None, Category::SansSerif, "2024-01-01"),
            font("A Font", None, Category::SansSerif, "2024-01-01"),
        ];
        let query = FontQuery {
            sort: SortKey::Variants,
            ..Default::default()
        };
        let result = run_query(&catalog, &query, &HashSet::new());
        // Both have one variant; stable sort keeps catalog order
        assert_eq!(result[0].family, "B Font");
        assert_eq!(result[1].family, "A Font");
    }

    #[test]
    fn license_filter_matches_substring_with_default() {
        let mut catalog = sample_catalog();
        catalog[0].license = Some("Apache-2.0".to_string());
        let query = FontQuery {
            license: Some("OFL".to_string()),
            ..Default::default()
        };
        let result = run_query(&catalog, &query, &HashSet::new());
        // Noto Serif SC has no license, so the OFL default applies
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].family, "Noto Serif SC");
    }

    #[test]
    fn source_labels_deduplicate_in_first_seen_order() {
        let mut catalog = sample_catalog();
        catalog[0].source = Some("Google Fonts".to_string());
        let labels = source_labels(&catalog);
        assert_eq!(labels, vec!["Google Fonts".to_string(), "其他".to_string()]);
    }
}
