use crate::constants::{
    BACKGROUND_OPACITY, BACKGROUND_SCALE, BACKGROUND_WEIGHT_DIVISOR, FOREGROUND_OPACITY,
    FOREGROUND_SCALE, PARALLAX_DIVISOR,
};
use glam::Vec2;

/// Whether an element currently belongs to the emphasized (interactive) layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Foreground,
    Background,
}

impl Role {
    #[inline]
    pub fn from_foreground(is_foreground: bool) -> Self {
        if is_foreground {
            Role::Foreground
        } else {
            Role::Background
        }
    }

    #[inline]
    pub fn is_foreground(self) -> bool {
        self == Role::Foreground
    }

    #[inline]
    pub fn scale(self) -> f32 {
        match self {
            Role::Foreground => FOREGROUND_SCALE,
            Role::Background => BACKGROUND_SCALE,
        }
    }

    #[inline]
    pub fn opacity(self) -> f32 {
        match self {
            Role::Foreground => FOREGROUND_OPACITY,
            Role::Background => BACKGROUND_OPACITY,
        }
    }

    #[inline]
    pub fn cursor(self) -> &'static str {
        match self {
            Role::Foreground => "pointer",
            Role::Background => "initial",
        }
    }
}

/// Uniform scale followed by a pixel translation, as applied to one element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub scale: f32,
    pub translate: Vec2,
}

impl Transform {
    /// Transform an element settles to right after a toggle: role scale, no shift.
    #[inline]
    pub fn rest(role: Role) -> Self {
        Self {
            scale: role.scale(),
            translate: Vec2::ZERO,
        }
    }

    pub fn to_css(&self) -> String {
        format!(
            "scale({s}, {s}) translateX({x}px) translateY({y}px)",
            s = self.scale,
            x = self.translate.x,
            y = self.translate.y
        )
    }
}

#[inline]
pub fn effective_weight(weight: f32, role: Role) -> f32 {
    match role {
        Role::Foreground => weight,
        Role::Background => weight / BACKGROUND_WEIGHT_DIVISOR,
    }
}

/// Shift for one element given the pointer's page position and the viewport size.
///
/// `(viewport - pointer * weight) / 90`, with background weights divided by ten.
#[inline]
pub fn parallax_offset(weight: f32, role: Role, pointer: Vec2, viewport: Vec2) -> Vec2 {
    let position = effective_weight(weight, role);
    (viewport - pointer * position) / PARALLAX_DIVISOR
}

#[inline]
pub fn parallax_transform(weight: f32, role: Role, pointer: Vec2, viewport: Vec2) -> Transform {
    Transform {
        scale: role.scale(),
        translate: parallax_offset(weight, role, pointer, viewport),
    }
}
