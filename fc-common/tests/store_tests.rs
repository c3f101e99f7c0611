//! Integration tests for the overlay catalog and display-order storage

use fc_common::catalog::{builtin_fonts, Category, FontRecord};
use fc_common::db;

fn custom_font(family: &str) -> FontRecord {
    FontRecord {
        family: family.to_string(),
        chinese_name: None,
        category: Category::Display,
        variants: vec!["400".to_string(), "700".to_string()],
        subsets: vec!["latin".to_string()],
        version: "v1".to_string(),
        last_modified: "2025-06-01".to_string(),
        license: Some("OFL".to_string()),
        source: Some("User Upload".to_string()),
        designer: None,
        copyright: None,
        description: Some("custom record".to_string()),
        features: None,
        scenarios: None,
    }
}

#[tokio::test]
async fn overlay_record_overrides_builtin_exactly_once() {
    let pool = db::init_memory_database().await.unwrap();

    let mut roboto = custom_font("Roboto");
    roboto.description = Some("edited by user".to_string());
    db::save_font(&pool, &roboto).await.unwrap();

    let fonts = db::get_all_fonts(&pool).await.unwrap();
    let matches: Vec<&FontRecord> = fonts.iter().filter(|f| f.family == "Roboto").collect();
    assert_eq!(matches.len(), 1, "override must not duplicate the family");
    assert_eq!(matches[0].description.as_deref(), Some("edited by user"));
    assert_eq!(matches[0].category, Category::Display);

    // Overridden record keeps the built-in's catalog position
    let builtin_pos = builtin_fonts().iter().position(|f| f.family == "Roboto");
    let merged_pos = fonts.iter().position(|f| f.family == "Roboto");
    assert_eq!(builtin_pos, merged_pos);
}

#[tokio::test]
async fn new_overlay_families_append_in_insertion_order() {
    let pool = db::init_memory_database().await.unwrap();

    db::save_font(&pool, &custom_font("First Custom")).await.unwrap();
    db::save_font(&pool, &custom_font("Second Custom")).await.unwrap();

    let fonts = db::get_all_fonts(&pool).await.unwrap();
    let n = fonts.len();
    assert_eq!(fonts[n - 2].family, "First Custom");
    assert_eq!(fonts[n - 1].family, "Second Custom");
}

#[tokio::test]
async fn save_font_is_an_upsert_by_family() {
    let pool = db::init_memory_database().await.unwrap();

    let mut font = custom_font("My Font");
    db::save_font(&pool, &font).await.unwrap();

    font.version = "v2".to_string();
    db::save_font(&pool, &font).await.unwrap();

    let fonts = db::get_all_fonts(&pool).await.unwrap();
    let saved: Vec<&FontRecord> = fonts.iter().filter(|f| f.family == "My Font").collect();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].version, "v2");
}

#[tokio::test]
async fn reset_restores_builtins_in_builtin_order() {
    let pool = db::init_memory_database().await.unwrap();

    db::save_font(&pool, &custom_font("My Font")).await.unwrap();
    db::save_font_order(&pool, &["My Font".to_string(), "Roboto".to_string()])
        .await
        .unwrap();

    db::reset_database(&pool).await.unwrap();

    let fonts = db::get_all_fonts(&pool).await.unwrap();
    let families: Vec<&str> = fonts.iter().map(|f| f.family.as_str()).collect();
    let builtin_families: Vec<String> = builtin_fonts().iter().map(|f| f.family.clone()).collect();
    assert_eq!(families, builtin_families);
}

#[tokio::test]
async fn display_order_puts_listed_families_first() {
    let pool = db::init_memory_database().await.unwrap();

    db::save_font_order(
        &pool,
        &[
            "Lora".to_string(),
            "Ghost Family".to_string(), // not in the catalog: ignored
            "Roboto".to_string(),
        ],
    )
    .await
    .unwrap();

    let fonts = db::get_all_fonts(&pool).await.unwrap();
    assert_eq!(fonts[0].family, "Lora");
    assert_eq!(fonts[1].family, "Roboto");
    assert_eq!(fonts.len(), builtin_fonts().len());

    // Remainder keeps catalog order
    let rest: Vec<&str> = fonts[2..].iter().map(|f| f.family.as_str()).collect();
    let expected: Vec<String> = builtin_fonts()
        .iter()
        .filter(|f| f.family != "Lora" && f.family != "Roboto")
        .map(|f| f.family.clone())
        .collect();
    assert_eq!(rest, expected);
}

#[tokio::test]
async fn save_font_order_replaces_wholesale() {
    let pool = db::init_memory_database().await.unwrap();

    db::save_font_order(&pool, &["Lora".to_string(), "Roboto".to_string()])
        .await
        .unwrap();
    db::save_font_order(&pool, &["Inter".to_string()]).await.unwrap();

    assert_eq!(db::load_font_order(&pool).await.unwrap(), vec!["Inter"]);
}

#[tokio::test]
async fn delete_prunes_overlay_and_display_order() {
    let pool = db::init_memory_database().await.unwrap();

    db::save_font(&pool, &custom_font("My Font")).await.unwrap();
    db::save_font_order(&pool, &["My Font".to_string(), "Roboto".to_string()])
        .await
        .unwrap();

    db::delete_font(&pool, "My Font").await.unwrap();

    assert!(!db::overlay_contains(&pool, "My Font").await.unwrap());
    assert_eq!(db::load_font_order(&pool).await.unwrap(), vec!["Roboto"]);
    assert!(db::get_all_fonts(&pool)
        .await
        .unwrap()
        .iter()
        .all(|f| f.family != "My Font"));
}

#[tokio::test]
async fn deleting_builtin_only_family_is_storage_noop() {
    let pool = db::init_memory_database().await.unwrap();

    assert!(db::builtin_contains("Roboto"));
    db::delete_font(&pool, "Roboto").await.unwrap();

    let fonts = db::get_all_fonts(&pool).await.unwrap();
    assert!(fonts.iter().any(|f| f.family == "Roboto"));
}

#[tokio::test]
async fn corrupt_overlay_row_is_skipped_not_fatal() {
    let pool = db::init_memory_database().await.unwrap();

    // Malformed variants JSON and an unknown category, inserted behind the
    // typed API's back
    sqlx::query(
        "INSERT INTO font_overlay (family, category, variants, subsets, version, last_modified)
         VALUES ('Broken Font', 'not-a-category', 'oops', '[]', 'v1', '2025-01-01')",
    )
    .execute(&pool)
    .await
    .unwrap();

    db::save_font(&pool, &custom_font("Good Font")).await.unwrap();

    let fonts = db::get_all_fonts(&pool).await.unwrap();
    assert!(fonts.iter().all(|f| f.family != "Broken Font"));
    assert!(fonts.iter().any(|f| f.family == "Good Font"));
}
