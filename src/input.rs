use glam::Vec2;
use web_sys as web;

// Space bar; "Spacebar" is what older engines report.
#[inline]
pub fn is_toggle_key(key: &str) -> bool {
    matches!(key, " " | "Spacebar")
}

#[inline]
pub fn pointer_page_position(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.page_x() as f32, ev.page_y() as f32)
}

/// Inner window size; zero if the window or its dimensions are unavailable.
pub fn viewport_size() -> Vec2 {
    let Some(window) = web::window() else {
        return Vec2::ZERO;
    };
    let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Vec2::new(w as f32, h as f32)
}
