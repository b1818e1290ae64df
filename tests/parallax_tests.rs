// Host-side tests for the parallax arithmetic.

use glam::Vec2;
use projects_gallery::parallax::*;

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn foreground_offset_uses_full_weight() {
    let pointer = Vec2::new(400.0, 300.0);
    let viewport = Vec2::new(1280.0, 720.0);
    let offset = parallax_offset(2.0, Role::Foreground, pointer, viewport);
    assert!(close(offset.x, (1280.0 - 400.0 * 2.0) / 90.0));
    assert!(close(offset.y, (720.0 - 300.0 * 2.0) / 90.0));
}

#[test]
fn background_offset_divides_weight_by_ten() {
    let pointer = Vec2::new(400.0, 300.0);
    let viewport = Vec2::new(1280.0, 720.0);
    let offset = parallax_offset(5.0, Role::Background, pointer, viewport);
    assert!(close(offset.x, (1280.0 - 400.0 * 0.5) / 90.0));
    assert!(close(offset.y, (720.0 - 300.0 * 0.5) / 90.0));
}

#[test]
fn pointer_at_origin_shifts_by_viewport_only() {
    let viewport = Vec2::new(900.0, 450.0);
    for role in [Role::Foreground, Role::Background] {
        let offset = parallax_offset(7.0, role, Vec2::ZERO, viewport);
        assert!(close(offset.x, 10.0));
        assert!(close(offset.y, 5.0));
    }
}

#[test]
fn heavier_elements_move_further_per_pixel() {
    let viewport = Vec2::new(1000.0, 1000.0);
    let a = Vec2::new(100.0, 100.0);
    let b = Vec2::new(200.0, 100.0);
    let light = parallax_offset(1.0, Role::Foreground, b, viewport).x
        - parallax_offset(1.0, Role::Foreground, a, viewport).x;
    let heavy = parallax_offset(4.0, Role::Foreground, b, viewport).x
        - parallax_offset(4.0, Role::Foreground, a, viewport).x;
    assert!(heavy.abs() > light.abs());
}

#[test]
fn transform_scale_follows_role() {
    let t = parallax_transform(3.0, Role::Foreground, Vec2::ZERO, Vec2::ZERO);
    assert_eq!(t.scale, 1.5);
    let t = parallax_transform(3.0, Role::Background, Vec2::ZERO, Vec2::ZERO);
    assert_eq!(t.scale, 1.0);
}

#[test]
fn rest_transform_css() {
    assert_eq!(
        Transform::rest(Role::Foreground).to_css(),
        "scale(1.5, 1.5) translateX(0px) translateY(0px)"
    );
    assert_eq!(
        Transform::rest(Role::Background).to_css(),
        "scale(1, 1) translateX(0px) translateY(0px)"
    );
}

#[test]
fn moving_transform_css() {
    let t = Transform {
        scale: 1.5,
        translate: Vec2::new(-4.5, 2.0),
    };
    assert_eq!(t.to_css(), "scale(1.5, 1.5) translateX(-4.5px) translateY(2px)");
}

#[test]
fn role_affordances() {
    assert_eq!(Role::Foreground.opacity(), 1.0);
    assert_eq!(Role::Background.opacity(), 0.2);
    assert_eq!(Role::Foreground.cursor(), "pointer");
    assert_eq!(Role::Background.cursor(), "initial");
    assert_eq!(Role::from_foreground(true), Role::Foreground);
    assert_eq!(Role::from_foreground(false), Role::Background);
    assert_eq!(effective_weight(8.0, Role::Background), 0.8);
}
