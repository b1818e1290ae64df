use crate::config::{GalleryConfig, GalleryEntry, StyleValue};

// Built-in tables used when the host page does not embed its own.
// (path, image, weight, left offset, title, subtitle)
const PROJECTS: [(&str, &str, f32, &str, &str, &str); 4] = [
    (
        "/projects/wavelet",
        "/images/projects/wavelet.png",
        4.0,
        "12%",
        "Wavelet",
        "Generative audio toy in the browser",
    ),
    (
        "/projects/inkwell",
        "/images/projects/inkwell.png",
        3.0,
        "46%",
        "Inkwell",
        "Markdown notebook with live preview",
    ),
    (
        "/projects/tidepool",
        "/images/projects/tidepool.png",
        5.0,
        "24%",
        "Tidepool",
        "Aquarium simulation on a canvas",
    ),
    (
        "/projects/lantern",
        "/images/projects/lantern.png",
        2.0,
        "58%",
        "Lantern",
        "Static site generator for photo essays",
    ),
];

// (name, image, weight, left offset, width px)
const DOODLES: [(&str, &str, f32, &str, f64); 5] = [
    ("cactus", "/images/doodles/cactus.png", 6.0, "8%", 60.0),
    ("comet", "/images/doodles/comet.png", 9.0, "70%", 80.0),
    ("teacup", "/images/doodles/teacup.png", 4.0, "35%", 50.0),
    ("paper-plane", "/images/doodles/paper-plane.png", 7.0, "82%", 70.0),
    ("snail", "/images/doodles/snail.png", 3.0, "52%", 45.0),
];

pub fn default_gallery() -> GalleryConfig {
    let projects = PROJECTS
        .iter()
        .map(|&(path, src, weight, left, title, subtitle)| {
            GalleryEntry::new(path, src, weight)
                .with_caption(title, subtitle)
                .with_style("left", StyleValue::Text(left.to_string()))
                .with_style("width", StyleValue::Number(120.0))
        })
        .collect();
    let doodles = DOODLES
        .iter()
        .map(|&(name, src, weight, left, width)| {
            GalleryEntry::new(name, src, weight)
                .with_style("left", StyleValue::Text(left.to_string()))
                .with_style("width", StyleValue::Number(width))
        })
        .collect();
    GalleryConfig { projects, doodles }
}
