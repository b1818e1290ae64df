//! Gallery configuration tables.
//!
//! Tables are read from JSON embedded in the host page. Fields are read
//! leniently: a missing or ill-typed field falls back to its default, a bad
//! style override is dropped, and a non-object entry is skipped, so one broken
//! field never costs the rest of the table. Only JSON that does not parse at
//! all and duplicate keys are rejected; callers then fall back to the built-in
//! catalog.

use crate::catalog;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::{BTreeMap, HashSet};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("gallery config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate gallery key `{0}`")]
    DuplicateKey(String),
}

/// Inline style value as written in the tables: either a CSS string or a bare
/// number (unit applied per property when rendered).
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum StyleValue {
    Text(String),
    Number(f64),
}

/// One project or doodle. Projects carry a caption and use `key` as their
/// navigation path; doodles leave `title`/`subtitle` unset.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct GalleryEntry {
    #[serde(deserialize_with = "lenient_text")]
    pub key: String,
    #[serde(alias = "src", deserialize_with = "lenient_text")]
    pub image_source: String,
    #[serde(alias = "value", deserialize_with = "lenient_weight")]
    pub weight: f32,
    #[serde(alias = "styles", deserialize_with = "lenient_styles")]
    pub style_overrides: BTreeMap<String, StyleValue>,
    #[serde(deserialize_with = "lenient_caption")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient_caption")]
    pub subtitle: Option<String>,
}

fn text_of(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn lenient_text<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(text_of(Value::deserialize(d)?).unwrap_or_default())
}

fn lenient_caption<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(text_of(Value::deserialize(d)?))
}

/// Numbers or numeric strings (weights used to live in DOM attributes);
/// anything else reads as 0.
fn lenient_weight<'de, D: Deserializer<'de>>(d: D) -> Result<f32, D::Error> {
    let weight = match Value::deserialize(d)? {
        Value::Number(n) => n.as_f64().unwrap_or(0.0) as f32,
        Value::String(s) => s.trim().parse::<f32>().unwrap_or(0.0),
        _ => 0.0,
    };
    Ok(if weight.is_finite() { weight } else { 0.0 })
}

/// Keeps string and number overrides; drops `null`, booleans, arrays and
/// objects. A non-object `styles` reads as no overrides.
fn lenient_styles<'de, D: Deserializer<'de>>(
    d: D,
) -> Result<BTreeMap<String, StyleValue>, D::Error> {
    let Value::Object(map) = Value::deserialize(d)? else {
        return Ok(BTreeMap::new());
    };
    Ok(map
        .into_iter()
        .filter_map(|(name, value)| {
            let value = match value {
                Value::String(s) => StyleValue::Text(s),
                Value::Number(n) => StyleValue::Number(n.as_f64()?),
                _ => return None,
            };
            Some((name, value))
        })
        .collect())
}

/// Skips entries that are not objects; a non-array layer reads as empty.
fn lenient_entries<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<GalleryEntry>, D::Error> {
    let Value::Array(items) = Value::deserialize(d)? else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .filter(Value::is_object)
        .filter_map(|item| GalleryEntry::deserialize(item).ok())
        .collect())
}

impl GalleryEntry {
    pub fn new(key: &str, image_source: &str, weight: f32) -> Self {
        Self {
            key: key.to_string(),
            image_source: image_source.to_string(),
            weight,
            ..Self::default()
        }
    }

    pub fn with_caption(mut self, title: &str, subtitle: &str) -> Self {
        self.title = Some(title.to_string());
        self.subtitle = Some(subtitle.to_string());
        self
    }

    pub fn with_style(mut self, property: &str, value: StyleValue) -> Self {
        self.style_overrides.insert(property.to_string(), value);
        self
    }
}

/// Both layers in display order.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct GalleryConfig {
    #[serde(deserialize_with = "lenient_entries")]
    pub projects: Vec<GalleryEntry>,
    #[serde(deserialize_with = "lenient_entries")]
    pub doodles: Vec<GalleryEntry>,
}

impl GalleryConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GalleryConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Keys double as DOM ids, so they must be unique across both layers.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for entry in self.projects.iter().chain(self.doodles.iter()) {
            if !seen.insert(entry.key.as_str()) {
                return Err(ConfigError::DuplicateKey(entry.key.clone()));
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.projects.len() + self.doodles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Parse the page-supplied tables, or fall back to the built-in catalog.
pub fn load_or_default(json: Option<&str>) -> GalleryConfig {
    match json.map(str::trim).filter(|s| !s.is_empty()) {
        Some(text) => match GalleryConfig::from_json(text) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("[config] {}; using built-in catalog", e);
                catalog::default_gallery()
            }
        },
        None => catalog::default_gallery(),
    }
}
