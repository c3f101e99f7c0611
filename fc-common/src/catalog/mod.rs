//! Font data model and built-in catalog

mod builtins;

pub use builtins::builtin_fonts;

use serde::{Deserialize, Serialize};

/// Family-name keywords marking a font as Chinese when no localized name is set.
///
/// Known-incomplete heuristic carried over from the catalog curation rules;
/// unlisted Chinese families without a `chinese_name` will be misclassified.
pub const CHINESE_FAMILY_KEYWORDS: &[&str] =
    &["SC", "ZCOOL", "Ma Shan", "Zhi Mang", "Long Cang", "Liu Jian"];

/// Display label used when a record carries no license text
pub const DEFAULT_LICENSE: &str = "OFL";

/// Display label used when a record carries no source/brand
pub const DEFAULT_SOURCE: &str = "其他";

/// Font classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    SansSerif,
    Serif,
    Display,
    Handwriting,
    Monospace,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::SansSerif => "sans-serif",
            Category::Serif => "serif",
            Category::Display => "display",
            Category::Handwriting => "handwriting",
            Category::Monospace => "monospace",
        }
    }
}

impl std::str::FromStr for Category {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s {
            "sans-serif" => Ok(Category::SansSerif),
            "serif" => Ok(Category::Serif),
            "display" => Ok(Category::Display),
            "handwriting" => Ok(Category::Handwriting),
            "monospace" => Ok(Category::Monospace),
            other => Err(crate::Error::Validation(format!(
                "Unknown category: {}",
                other
            ))),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Language bucket for catalog filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    All,
    Zh,
    En,
}

/// Overall UI theme, persisted globally (not per scope)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppStyle {
    #[default]
    Classic,
    Midnight,
    Frosted,
    Nostalgic,
}

impl AppStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppStyle::Classic => "classic",
            AppStyle::Midnight => "midnight",
            AppStyle::Frosted => "frosted",
            AppStyle::Nostalgic => "nostalgic",
        }
    }

    /// Parse a stored theme value, defaulting to Classic for unknown input
    pub fn parse_or_default(s: &str) -> Self {
        match s {
            "midnight" => AppStyle::Midnight,
            "frosted" => AppStyle::Frosted,
            "nostalgic" => AppStyle::Nostalgic,
            _ => AppStyle::Classic,
        }
    }
}

/// A single catalog entry. `family` is the sole identity: two records with
/// the same family are the same logical entity, and a user-supplied record
/// overrides a built-in record of the same family.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontRecord {
    pub family: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chinese_name: Option<String>,
    pub category: Category,
    /// Style-weight identifiers, e.g. "400", "700italic". At least one entry.
    pub variants: Vec<String>,
    /// Supported character-set tags, e.g. "latin", "chinese-simplified"
    pub subsets: Vec<String>,
    pub version: String,
    /// Parseable as YYYY-MM-DD for newest-first sorting
    pub last_modified: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub designer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scenarios: Option<String>,
}

impl FontRecord {
    /// Whether this record counts as a Chinese font: localized name present,
    /// or the family name contains one of the fixed keywords.
    pub fn is_chinese(&self) -> bool {
        self.chinese_name.is_some()
            || CHINESE_FAMILY_KEYWORDS
                .iter()
                .any(|k| self.family.contains(k))
    }

    /// License text with the default applied for absent values
    pub fn license_label(&self) -> &str {
        self.license.as_deref().unwrap_or(DEFAULT_LICENSE)
    }

    /// Source/brand text with the fallback applied for absent values
    pub fn source_label(&self) -> &str {
        self.source.as_deref().unwrap_or(DEFAULT_SOURCE)
    }

    /// Variants ordered by ascending numeric weight, italics grouped with
    /// their base weight. Variants without digits count as weight 400.
    pub fn sorted_variants(&self) -> Vec<String> {
        let mut variants = self.variants.clone();
        variants.sort_by_key(|v| variant_weight(v));
        variants
    }

    /// Date parsed from `last_modified`, None when unparseable
    pub fn modified_date(&self) -> Option<chrono::NaiveDate> {
        chrono::NaiveDate::parse_from_str(&self.last_modified, "%Y-%m-%d").ok()
    }
}

/// Numeric weight of a variant token ("700italic" -> 700, "italic" -> 400)
pub fn variant_weight(variant: &str) -> u32 {
    let digits: String = variant.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(400)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(family: &str, chinese_name: Option<&str>) -> FontRecord {
        FontRecord {
            family: family.to_string(),
            chinese_name: chinese_name.map(String::from),
            category: Category::SansSerif,
            variants: vec!["400".to_string()],
            subsets: vec!["latin".to_string()],
            version: "v1".to_string(),
            last_modified: "2024-01-01".to_string(),
            license: None,
            source: None,
            designer: None,
            copyright: None,
            description: None,
            features: None,
            scenarios: None,
        }
    }

    #[test]
    fn chinese_detection_by_name_and_keyword() {
        assert!(record("Noto Serif SC", Some("思源宋体")).is_chinese());
        assert!(record("ZCOOL KuaiLe", None).is_chinese());
        assert!(record("Ma Shan Zheng", None).is_chinese());
        assert!(!record("Roboto", None).is_chinese());
    }

    #[test]
    fn variant_sorting_groups_italics_with_base_weight() {
        let mut r = record("Lora", None);
        r.variants = vec![
            "700italic".to_string(),
            "400".to_string(),
            "italic".to_string(),
            "700".to_string(),
            "300".to_string(),
        ];
        let sorted = r.sorted_variants();
        assert_eq!(sorted, vec!["300", "400", "italic", "700italic", "700"]);
    }

    #[test]
    fn variant_sorting_is_stable_for_equal_weights() {
        let mut r = record("Lora", None);
        r.variants = vec!["400".to_string(), "regular".to_string(), "italic".to_string()];
        assert_eq!(r.sorted_variants(), vec!["400", "regular", "italic"]);
    }

    #[test]
    fn fallback_labels() {
        let r = record("Roboto", None);
        assert_eq!(r.license_label(), "OFL");
        assert_eq!(r.source_label(), "其他");
    }

    #[test]
    fn category_round_trip() {
        let json = serde_json::to_string(&Category::SansSerif).unwrap();
        assert_eq!(json, "\"sans-serif\"");
        let parsed: Category = serde_json::from_str("\"handwriting\"").unwrap();
        assert_eq!(parsed, Category::Handwriting);
    }

    #[test]
    fn record_serializes_with_camel_case_keys() {
        let r = record("Noto Sans SC", Some("思源黑体"));
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["chineseName"], "思源黑体");
        assert_eq!(json["lastModified"], "2024-01-01");
    }
}
