// Host-side tests for configuration loading, the built-in catalog and inline
// style composition.

use projects_gallery::catalog::default_gallery;
use projects_gallery::config::*;
use projects_gallery::parallax::Role;
use projects_gallery::scene::Layer;
use projects_gallery::style::*;

const PAGE_JSON: &str = r#"{
    "projects": [
        {"key": "/projects/one", "src": "/one.png", "value": 3, "title": "One", "subtitle": "first",
         "styles": {"left": "10%", "width": 140}},
        {"key": "/projects/two", "imageSource": "/two.png", "weight": 1.5}
    ],
    "doodles": [
        {"key": "cloud", "src": "/cloud.png", "value": 8, "styles": {"marginLeft": 20, "zIndex": 3}}
    ]
}"#;

fn get<'a>(list: &'a StyleList, property: &str) -> Option<&'a str> {
    list.iter()
        .find(|(p, _)| p == property)
        .map(|(_, v)| v.as_str())
}

#[test]
fn parses_page_tables_with_aliases() {
    let config = GalleryConfig::from_json(PAGE_JSON).unwrap();
    assert_eq!(config.len(), 3);
    let one = &config.projects[0];
    assert_eq!(one.image_source, "/one.png");
    assert_eq!(one.weight, 3.0);
    assert_eq!(one.title.as_deref(), Some("One"));
    assert_eq!(
        one.style_overrides.get("width"),
        Some(&StyleValue::Number(140.0))
    );
    let two = &config.projects[1];
    assert_eq!(two.image_source, "/two.png");
    assert_eq!(two.weight, 1.5);
    assert_eq!(two.title, None);
    assert_eq!(config.doodles[0].key, "cloud");
}

#[test]
fn missing_fields_degrade_to_defaults() {
    let config = GalleryConfig::from_json(r#"{"projects": [{"key": "/p"}]}"#).unwrap();
    let p = &config.projects[0];
    assert_eq!(p.image_source, "");
    assert_eq!(p.weight, 0.0);
    assert!(p.style_overrides.is_empty());
    assert!(config.doodles.is_empty());
}

#[test]
fn rejects_duplicate_keys_across_layers() {
    let json = r#"{"projects": [{"key": "x"}], "doodles": [{"key": "x"}]}"#;
    match GalleryConfig::from_json(json) {
        Err(ConfigError::DuplicateKey(key)) => assert_eq!(key, "x"),
        other => panic!("expected duplicate key error, got {:?}", other),
    }
}

#[test]
fn rejects_malformed_json() {
    assert!(matches!(
        GalleryConfig::from_json("{ projects: "),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn load_falls_back_to_catalog() {
    let builtin = default_gallery();
    assert_eq!(load_or_default(None), builtin);
    assert_eq!(load_or_default(Some("   ")), builtin);
    assert_eq!(load_or_default(Some("not json")), builtin);
    let loaded = load_or_default(Some(PAGE_JSON));
    assert_eq!(loaded.projects.len(), 2);
}

#[test]
fn builtin_catalog_is_valid() {
    let builtin = default_gallery();
    assert!(!builtin.projects.is_empty());
    assert!(!builtin.doodles.is_empty());
    assert!(builtin.validate().is_ok());
    for p in &builtin.projects {
        assert!(p.key.starts_with('/'));
        assert!(p.title.is_some() && p.subtitle.is_some());
        assert!(p.weight > 0.0);
    }
    for d in &builtin.doodles {
        assert!(d.title.is_none());
    }
}

#[test]
fn property_names_become_kebab_case() {
    assert_eq!(css_property_name("marginTop"), "margin-top");
    assert_eq!(css_property_name("zIndex"), "z-index");
    assert_eq!(css_property_name("left"), "left");
    assert_eq!(css_property_name("margin-left"), "margin-left");
}

#[test]
fn numeric_values_get_px_unless_unitless() {
    assert_eq!(css_value("width", &StyleValue::Number(140.0)), "140px");
    assert_eq!(css_value("z-index", &StyleValue::Number(3.0)), "3");
    assert_eq!(css_value("opacity", &StyleValue::Number(0.5)), "0.5");
    assert_eq!(css_value("left", &StyleValue::Text("10%".into())), "10%");
}

#[test]
fn project_style_stacks_and_applies_overrides() {
    let config = GalleryConfig::from_json(PAGE_JSON).unwrap();
    let style = element_style(&config.projects[0], Layer::Projects, 0, Role::Foreground);
    assert_eq!(get(&style, "z-index"), Some("100"));
    assert_eq!(get(&style, "opacity"), Some("1"));
    assert_eq!(get(&style, "margin-top"), Some("9vh"));
    assert_eq!(get(&style, "left"), Some("10%"));
    assert_eq!(get(&style, "width"), Some("140px"));

    let style = element_style(&config.projects[1], Layer::Projects, 1, Role::Background);
    assert_eq!(get(&style, "opacity"), Some("0.2"));
    assert_eq!(get(&style, "margin-top"), Some("18vh"));
}

#[test]
fn doodle_style_uses_its_own_step_and_overrides_win() {
    let config = GalleryConfig::from_json(PAGE_JSON).unwrap();
    let style = element_style(&config.doodles[0], Layer::Doodles, 2, Role::Background);
    assert_eq!(get(&style, "margin-top"), Some("21vh"));
    assert_eq!(get(&style, "margin-left"), Some("20px"));
    assert_eq!(get(&style, "z-index"), Some("3"));
    assert_eq!(style.iter().filter(|(p, _)| p == "z-index").count(), 1);
}

#[test]
fn image_and_thumb_styles() {
    assert_eq!(get(&image_style(Role::Foreground), "cursor"), Some("pointer"));
    assert_eq!(get(&image_style(Role::Background), "cursor"), Some("initial"));
    assert_eq!(get(&thumb_style(-5.0), "left"), Some("-5px"));
    assert_eq!(get(&thumb_style(15.0), "left"), Some("15px"));
    assert_eq!(get(&page_style(0.0), "opacity"), Some("0"));
    assert_eq!(get(&caption_style(), "display"), Some("none"));
}

#[test]
fn string_weight_is_parsed_and_bad_style_values_are_dropped() {
    let json = r#"{
        "projects": [{"key": "/p/real", "value": "3", "title": "Real"}],
        "doodles": [{"key": "d", "styles": {"left": null, "top": "4vh", "flip": true}}]
    }"#;
    let loaded = load_or_default(Some(json));
    assert_ne!(loaded, default_gallery());
    assert_eq!(loaded.projects[0].key, "/p/real");
    assert_eq!(loaded.projects[0].weight, 3.0);
    assert_eq!(loaded.projects[0].title.as_deref(), Some("Real"));
    let styles = &loaded.doodles[0].style_overrides;
    assert_eq!(styles.len(), 1);
    assert_eq!(styles.get("top"), Some(&StyleValue::Text("4vh".into())));
}

#[test]
fn unusable_weights_read_as_zero() {
    let json = r#"{"projects": [
        {"key": "a", "value": null},
        {"key": "b", "value": "heavy"},
        {"key": "c", "weight": [1]},
        {"key": "d", "value": " 2.5 "}
    ]}"#;
    let config = GalleryConfig::from_json(json).unwrap();
    let weights: Vec<f32> = config.projects.iter().map(|p| p.weight).collect();
    assert_eq!(weights, vec![0.0, 0.0, 0.0, 2.5]);
}

#[test]
fn ill_typed_fields_and_entries_degrade_individually() {
    let json = r#"{
        "projects": [
            {"key": "/p/one", "src": null, "title": 42, "subtitle": false, "styles": "wide"},
            null,
            "not an entry",
            {"key": "/p/two"}
        ],
        "doodles": {"oops": true}
    }"#;
    let config = GalleryConfig::from_json(json).unwrap();
    let keys: Vec<&str> = config.projects.iter().map(|p| p.key.as_str()).collect();
    assert_eq!(keys, vec!["/p/one", "/p/two"]);
    let one = &config.projects[0];
    assert_eq!(one.image_source, "");
    assert_eq!(one.title.as_deref(), Some("42"));
    assert_eq!(one.subtitle, None);
    assert!(one.style_overrides.is_empty());
    assert!(config.doodles.is_empty());
}

#[test]
fn only_unparsable_json_falls_back_to_catalog() {
    assert_eq!(load_or_default(Some("{\"projects\": [")), default_gallery());
    assert_ne!(load_or_default(Some("{\"projects\": []}")), default_gallery());
}

#[test]
fn vendor_and_custom_property_names() {
    assert_eq!(css_property_name("msTransform"), "-ms-transform");
    assert_eq!(css_property_name("WebkitTransform"), "-webkit-transform");
    assert_eq!(css_property_name("--accentColor"), "--accentColor");
}

#[test]
fn stacking_offset_grows_with_index() {
    let entry = GalleryEntry::new("/p", "/p.png", 1.0);
    let style = element_style(&entry, Layer::Projects, 99, Role::Foreground);
    assert_eq!(get(&style, "margin-top"), Some("900vh"));
}
