use crate::config::{GalleryEntry, StyleValue};
use crate::constants::{
    DOODLE_MARGIN_STEP_VH, PAGE_FADE_TRANSITION, PROJECT_MARGIN_STEP_VH, PROJECT_Z_INDEX,
};
use crate::parallax::Role;
use crate::scene::Layer;

/// Ordered inline declarations; later entries win when written out.
pub type StyleList = Vec<(String, String)>;

// Properties that take bare numbers; everything else gets `px`.
const UNITLESS_PROPERTIES: &[&str] = &[
    "opacity",
    "z-index",
    "font-weight",
    "flex",
    "flex-grow",
    "flex-shrink",
    "line-height",
    "order",
    "zoom",
];

/// `marginTop` -> `margin-top`, `msTransform` -> `-ms-transform`; names
/// already in CSS form and custom properties (`--accentColor`) pass through.
pub fn css_property_name(name: &str) -> String {
    if name.starts_with("--") {
        return name.to_string();
    }
    let mut out = String::with_capacity(name.len() + 4);
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    if out.starts_with("ms-") {
        out.insert(0, '-');
    }
    out
}

pub fn css_value(property: &str, value: &StyleValue) -> String {
    match value {
        StyleValue::Text(text) => text.clone(),
        StyleValue::Number(n) if UNITLESS_PROPERTIES.contains(&property) => format!("{}", n),
        StyleValue::Number(n) => format!("{}px", n),
    }
}

fn set(list: &mut StyleList, property: &str, value: String) {
    match list.iter_mut().find(|(p, _)| p == property) {
        Some(slot) => slot.1 = value,
        None => list.push((property.to_string(), value)),
    }
}

/// Wrapper style for one gallery element: role opacity and stacking offset,
/// then the entry's own overrides on top.
pub fn element_style(entry: &GalleryEntry, layer: Layer, index: usize, role: Role) -> StyleList {
    let step = match layer {
        Layer::Projects => PROJECT_MARGIN_STEP_VH,
        Layer::Doodles => DOODLE_MARGIN_STEP_VH,
    };
    let mut list = StyleList::new();
    if layer == Layer::Projects {
        set(&mut list, "z-index", PROJECT_Z_INDEX.to_string());
    }
    set(&mut list, "opacity", format!("{}", role.opacity()));
    set(&mut list, "margin-top", format!("{}vh", (index + 1) * step));
    for (name, value) in &entry.style_overrides {
        let property = css_property_name(name);
        let value = css_value(&property, value);
        set(&mut list, &property, value);
    }
    list
}

pub fn image_style(role: Role) -> StyleList {
    vec![
        ("width".into(), "100%".into()),
        ("height".into(), "100%".into()),
        ("cursor".into(), role.cursor().into()),
    ]
}

pub fn caption_style() -> StyleList {
    vec![
        ("display".into(), "none".into()),
        ("position".into(), "absolute".into()),
        ("top".into(), "0".into()),
        ("left".into(), "100%".into()),
        ("margin-left".into(), "10px".into()),
        ("width".into(), "300%".into()),
        ("z-index".into(), "-10".into()),
    ]
}

pub fn page_style(opacity: f64) -> StyleList {
    vec![
        ("width".into(), "calc(100vw - 100px)".into()),
        ("transition".into(), PAGE_FADE_TRANSITION.into()),
        ("opacity".into(), format!("{}", opacity)),
    ]
}

pub fn thumb_style(position: f32) -> StyleList {
    vec![("left".into(), format!("{}px", position))]
}
