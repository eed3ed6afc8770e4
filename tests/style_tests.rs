// Host-side tests for the CSS value builders.

#![allow(dead_code)]
mod style {
    include!("../src/style.rs");
}

use glam::Vec2;
use style::*;
use zerog_core::{ClipInset, ObjectId, RenderedTransform};

fn rendered(position: Vec2, depth: f32, scale: f32) -> RenderedTransform {
    RenderedTransform {
        id: ObjectId(0),
        position,
        depth,
        rotation_deg: -6.0,
        scale,
        opacity: 1.0,
        z_index: 20,
        width_px: 320.0,
    }
}

#[test]
fn lengths_are_fixed_precision_and_finite() {
    assert_eq!(px(12.0), "12.00px");
    assert_eq!(px(-0.126), "-0.13px");
    assert_eq!(px(f32::NAN), "0.00px");
    assert_eq!(px(f32::INFINITY), "0.00px");
}

#[test]
fn opacity_is_clamped() {
    assert_eq!(opacity(0.5), "0.500");
    assert_eq!(opacity(1.7), "1.000");
    assert_eq!(opacity(-0.2), "0.000");
    assert_eq!(opacity(f32::NAN), "0.000");
}

#[test]
fn content_translation() {
    assert_eq!(
        translate(Vec2::new(0.0, -500.0)),
        "translate3d(0.00px, -500.00px, 0px)"
    );
}

#[test]
fn clip_path_lists_sides_clockwise_from_top() {
    let clip = ClipInset {
        top: -10000.0,
        right: -10000.0,
        bottom: 100.0,
        left: -10000.0,
    };
    assert_eq!(
        clip_inset(&clip),
        "inset(-10000.00px -10000.00px 100.00px -10000.00px)"
    );
}

#[test]
fn card_transform_centers_on_position() {
    let t = rendered(Vec2::new(230.5, 208.0), -1200.0, 0.05);
    assert_eq!(
        card_transform(&t),
        "translate3d(230.50px, 208.00px, -1200.00px) translate(-50%, -50%) rotate(-6.00deg) scale(0.050)"
    );
}

#[test]
fn negative_scale_is_floored() {
    let t = rendered(Vec2::ZERO, 0.0, -0.3);
    assert!(card_transform(&t).ends_with("scale(0.000)"));
    assert_eq!(scale(1.25), "scale(1.250)");
    assert_eq!(scale(-2.0), "scale(0.000)");
}

#[test]
fn colors_and_gradients() {
    assert_eq!(rgb([4, 6, 14]), "rgb(4, 6, 14)");
    assert_eq!(rgba([40, 22, 6], 0.25), "rgba(40, 22, 6, 0.250)");
    let v = vignette_gradient([8, 8, 12]);
    assert!(v.starts_with("radial-gradient("));
    assert!(v.contains("rgba(8, 8, 12, 0.000) 35%"));
    assert!(v.contains("rgba(8, 8, 12, 1.000) 75%"));
    assert!(glow_gradient([1, 2, 3]).contains("rgba(1, 2, 3, 0.600) 0%"));
}
