/// Layering and parallax tuning constants.
///
/// These express the visual contract of the gallery (scales, opacities,
/// divisors, timings) and keep magic numbers out of the view code.
// Foreground/background emphasis
pub const FOREGROUND_SCALE: f32 = 1.5;
pub const BACKGROUND_SCALE: f32 = 1.0;
pub const FOREGROUND_OPACITY: f32 = 1.0;
pub const BACKGROUND_OPACITY: f32 = 0.2;

// Parallax arithmetic
pub const BACKGROUND_WEIGHT_DIVISOR: f32 = 10.0; // background elements drift ten times less
pub const PARALLAX_DIVISOR: f32 = 90.0; // px of pointer travel per px of shift

// Vertical stacking (vh per index step)
pub const PROJECT_MARGIN_STEP_VH: usize = 9;
pub const DOODLE_MARGIN_STEP_VH: usize = 7;
pub const PROJECT_Z_INDEX: i32 = 100;

// Toggler thumb offsets (px)
pub const THUMB_POSITION_PROJECTS: f32 = -5.0;
pub const THUMB_POSITION_DOODLES: f32 = 15.0;

// Page transition
pub const NAVIGATION_DELAY_MS: u32 = 700;
pub const PAGE_FADE_TRANSITION: &str = "0.75s ease-out";
pub const PAGE_OPACITY_HIDDEN: f64 = 0.0;

// Class names shared with the stylesheet / animate.css
pub const SHAKE_CLASS: &str = "shake";
pub const FADE_IN_CLASS: &str = "fadeIn";
pub const FADE_OUT_CLASS: &str = "fadeOut";
pub const ANIMATED_CLASS: &str = "animate__animated";
pub const PARALLAX_ELEMENT_CLASS: &str = "parallax-element";
pub const PARALLAX_CHILD_CLASS: &str = "parallax-children";
pub const CAPTION_CLASS: &str = "sliding-text";

// Host page hooks
pub const ROOT_ELEMENT_ID: &str = "projects-root";
pub const CONFIG_ELEMENT_ID: &str = "gallery-config";
pub const ELEMENT_ID_PREFIX: &str = "parallax-";
