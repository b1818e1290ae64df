//! Explicit visual state of the gallery.
//!
//! Every rendered element has an [`ElementVisual`] record here; event handlers
//! mutate these records and the browser layer writes them out afterwards, so
//! nothing reaches into rendered nodes to compute state.

use crate::config::{GalleryConfig, GalleryEntry};
use crate::constants::{
    FADE_IN_CLASS, FADE_OUT_CLASS, THUMB_POSITION_DOODLES, THUMB_POSITION_PROJECTS,
};
use crate::parallax::{parallax_transform, Role, Transform};
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    Projects,
    Doodles,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaptionState {
    Hidden,
    Shown,
    FadingOut,
}

impl CaptionState {
    #[inline]
    pub fn display(self) -> &'static str {
        match self {
            CaptionState::Hidden => "none",
            CaptionState::Shown | CaptionState::FadingOut => "inline",
        }
    }

    /// Animation class to add; the other one is removed.
    #[inline]
    pub fn animation_class(self) -> Option<&'static str> {
        match self {
            CaptionState::Hidden => None,
            CaptionState::Shown => Some(FADE_IN_CLASS),
            CaptionState::FadingOut => Some(FADE_OUT_CLASS),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ElementVisual {
    pub key: String,
    pub layer: Layer,
    pub index: usize,
    pub weight: f32,
    pub transform: Transform,
    pub shaking: bool,
    /// `None` for elements without a caption (doodles).
    pub caption: Option<CaptionState>,
}

pub struct GalleryScene {
    config: GalleryConfig,
    projects_foreground: bool,
    thumb_position: f32,
    last_pointer: Option<Vec2>,
    elements: Vec<ElementVisual>,
}

#[inline]
fn role_for(projects_foreground: bool, layer: Layer) -> Role {
    match layer {
        Layer::Projects => Role::from_foreground(projects_foreground),
        Layer::Doodles => Role::from_foreground(!projects_foreground),
    }
}

#[inline]
fn thumb_position_for(projects_foreground: bool) -> f32 {
    if projects_foreground {
        THUMB_POSITION_PROJECTS
    } else {
        THUMB_POSITION_DOODLES
    }
}

fn visual_for(entry: &GalleryEntry, layer: Layer, index: usize, role: Role) -> ElementVisual {
    ElementVisual {
        key: entry.key.clone(),
        layer,
        index,
        weight: entry.weight,
        transform: Transform::rest(role),
        shaking: role.is_foreground(),
        caption: match layer {
            Layer::Projects => Some(CaptionState::Hidden),
            Layer::Doodles => None,
        },
    }
}

impl GalleryScene {
    /// Projects start in the foreground.
    pub fn new(config: GalleryConfig) -> Self {
        let projects_foreground = true;
        let projects = config.projects.iter().enumerate().map(|(i, e)| {
            visual_for(e, Layer::Projects, i, role_for(projects_foreground, Layer::Projects))
        });
        let doodles = config.doodles.iter().enumerate().map(|(i, e)| {
            visual_for(e, Layer::Doodles, i, role_for(projects_foreground, Layer::Doodles))
        });
        let elements = projects.chain(doodles).collect();
        Self {
            config,
            projects_foreground,
            thumb_position: thumb_position_for(projects_foreground),
            last_pointer: None,
            elements,
        }
    }

    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    #[inline]
    pub fn projects_foreground(&self) -> bool {
        self.projects_foreground
    }

    #[inline]
    pub fn foreground(&self) -> Layer {
        if self.projects_foreground {
            Layer::Projects
        } else {
            Layer::Doodles
        }
    }

    #[inline]
    pub fn role_of(&self, layer: Layer) -> Role {
        role_for(self.projects_foreground, layer)
    }

    #[inline]
    pub fn thumb_position(&self) -> f32 {
        self.thumb_position
    }

    #[inline]
    pub fn last_pointer(&self) -> Option<Vec2> {
        self.last_pointer
    }

    pub fn elements(&self) -> &[ElementVisual] {
        &self.elements
    }

    pub fn element(&self, key: &str) -> Option<&ElementVisual> {
        self.elements.iter().find(|e| e.key == key)
    }

    fn element_mut(&mut self, key: &str) -> Option<&mut ElementVisual> {
        self.elements.iter_mut().find(|e| e.key == key)
    }

    /// Swap foreground and background layers.
    ///
    /// Elements snap to their new role's rest transform; elements that were in
    /// the background pick up the attention marker and the former foreground
    /// loses it.
    pub fn toggle(&mut self) {
        let before = self.projects_foreground;
        for el in &mut self.elements {
            let was_foreground = role_for(before, el.layer).is_foreground();
            el.transform = Transform::rest(Role::from_foreground(!was_foreground));
            el.shaking = !was_foreground;
        }
        self.projects_foreground = !before;
        self.thumb_position = thumb_position_for(self.projects_foreground);
    }

    /// Recompute every element's parallax transform for a pointer at `pointer`
    /// (page coordinates) inside a viewport of size `viewport`.
    pub fn pointer_moved(&mut self, pointer: Vec2, viewport: Vec2) {
        self.last_pointer = Some(pointer);
        let projects_foreground = self.projects_foreground;
        for el in &mut self.elements {
            let role = role_for(projects_foreground, el.layer);
            el.transform = parallax_transform(el.weight, role, pointer, viewport);
        }
    }

    /// Reveal the caption of a marked element. Returns whether anything changed.
    pub fn hover_enter(&mut self, key: &str) -> bool {
        let Some(el) = self.element_mut(key) else {
            return false;
        };
        if !el.shaking {
            return false;
        }
        match el.caption {
            Some(state) if state != CaptionState::Shown => {
                el.caption = Some(CaptionState::Shown);
                true
            }
            _ => false,
        }
    }

    /// Start fading out a visible caption. The caption stays displayed until
    /// [`GalleryScene::caption_animation_ended`] reports the fade finished.
    ///
    /// Unlike [`GalleryScene::hover_enter`], this does not require the
    /// attention marker: a toggle while the pointer rests on a project removes
    /// the marker but leaves its caption shown, and leaving must still fade it.
    pub fn hover_leave(&mut self, key: &str) -> bool {
        let Some(el) = self.element_mut(key) else {
            return false;
        };
        match el.caption {
            Some(CaptionState::Shown) => {
                el.caption = Some(CaptionState::FadingOut);
                true
            }
            _ => false,
        }
    }

    /// Hide a caption whose fade-out animation completed. Ignored if the
    /// pointer came back and the caption is fading in again.
    pub fn caption_animation_ended(&mut self, key: &str) -> bool {
        let Some(el) = self.element_mut(key) else {
            return false;
        };
        match el.caption {
            Some(CaptionState::FadingOut) => {
                el.caption = Some(CaptionState::Hidden);
                true
            }
            _ => false,
        }
    }

    /// Path to navigate to when `key` is clicked; only projects navigate.
    pub fn navigation_target(&self, key: &str) -> Option<&str> {
        self.config
            .projects
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.key.as_str())
    }
}
