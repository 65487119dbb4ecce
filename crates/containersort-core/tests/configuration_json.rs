//! Integration tests for the `config.json` document shape.
//!
//! These tests feed hand-written JSON, as an operator would leave it after
//! editing, through the public `containersort_core` API.

use std::collections::HashMap;

use containersort_core::{Configuration, ContainerSortProperty, PropertyTable};

const HAND_EDITED: &str = r#"{
  "pluginVersion": "2.3.1",
  "excludedWorlds": ["world_nether", "event_arena"],
  "trackedContainerTypes": ["chest", "barrel"],
  "properties": {
    "sort_on_close": false,
    "sign_keyword": "[sorter]",
    "experimental_stack_merge": true
  },
  "displayLines": ["&f[&6Sorter&f]", "&7by &e%sign_owner_name%", "%container_sort_type%", ""]
}"#;

#[test]
fn test_hand_edited_file_deserializes() {
    // Arrange / Act
    let cfg: Configuration = serde_json::from_str(HAND_EDITED).expect("deserialize");

    // Assert
    assert!(cfg.is_current("2.3.1"));
    assert!(cfg.is_world_excluded("event_arena"));
    assert!(!cfg.tracks_container("shulker_box"));
    assert!(!cfg.properties.bool(ContainerSortProperty::SortOnClose));
    assert_eq!(cfg.properties.string(ContainerSortProperty::SignKeyword), "[sorter]");
    // Not present in the file, so the documented default applies.
    assert_eq!(cfg.properties.integer(ContainerSortProperty::SortCooldownMillis), 500);
}

#[test]
fn test_hand_edited_file_survives_rewrite() {
    // Arrange
    let cfg: Configuration = serde_json::from_str(HAND_EDITED).expect("deserialize");

    // Act
    let rewritten = serde_json::to_string_pretty(&cfg).expect("serialize");
    let reread: Configuration = serde_json::from_str(&rewritten).expect("deserialize again");

    // Assert
    assert_eq!(reread, cfg);
    assert_eq!(
        reread.properties.raw("experimental_stack_merge"),
        Some(&serde_json::Value::Bool(true))
    );
}

#[test]
fn test_missing_properties_object_uses_default_table() {
    let cfg: Configuration =
        serde_json::from_str(r#"{ "pluginVersion": "1.0", "displayLines": [] }"#)
            .expect("deserialize");

    assert_eq!(cfg.properties, PropertyTable::defaults());
    // Present but empty stays empty.
    assert!(cfg.display_lines.is_empty());
}

#[test]
fn test_missing_list_keys_use_default_lists() {
    // Arrange: a current file that only records its version
    let json = r#"{ "pluginVersion": "9.9" }"#;

    // Act
    let cfg: Configuration = serde_json::from_str(json).expect("deserialize");

    // Assert
    assert!(cfg.tracks_container("chest"));
    assert!(cfg.tracks_container("shulker_box"));
    assert!(cfg.is_world_excluded("world_nether"));
    assert_eq!(cfg, Configuration::defaults("9.9"));
    let placeholders = HashMap::from([
        ("sign_owner_name", "Steve"),
        ("container_sort_type", "ALPHABETICAL"),
    ]);
    assert_eq!(
        cfg.render_display_lines(&placeholders),
        vec!["&f[&6ContainerSort&f]", "&eSteve", "ALPHABETICAL", " "]
    );
}

#[test]
fn test_wrong_field_type_is_a_deserialization_error() {
    // A list where a string belongs cannot be read as a configuration; the
    // configuration service treats this as "needs migration".
    let result = serde_json::from_str::<Configuration>(r#"{ "pluginVersion": [1] }"#);
    assert!(result.is_err());
}

#[test]
fn test_rendering_hand_edited_lines() {
    let cfg: Configuration = serde_json::from_str(HAND_EDITED).expect("deserialize");
    let placeholders = HashMap::from([
        ("sign_owner_name", "Alex"),
        ("container_sort_type", "AMOUNT"),
    ]);

    let lines = cfg.render_display_lines(&placeholders);

    assert_eq!(lines, vec!["&f[&6Sorter&f]", "&7by &eAlex", "AMOUNT", ""]);
}
