// CSS value builders. Pure string formatting, no DOM access, so they can be
// exercised from host tests.

use glam::Vec2;
use zerog_core::{ClipInset, RenderedTransform};

#[inline]
pub fn px(v: f32) -> String {
    format!("{:.2}px", finite_or_zero(v))
}

#[inline]
fn finite_or_zero(v: f32) -> f32 {
    if v.is_finite() {
        v
    } else {
        0.0
    }
}

/// Opacity clamped to \[0, 1\] with three decimals.
#[inline]
pub fn opacity(v: f32) -> String {
    format!("{:.3}", finite_or_zero(v).clamp(0.0, 1.0))
}

pub fn translate(offset: Vec2) -> String {
    format!("translate3d({}, {}, 0px)", px(offset.x), px(offset.y))
}

/// `clip-path` value for the fixed surface.
pub fn clip_inset(clip: &ClipInset) -> String {
    format!(
        "inset({} {} {} {})",
        px(clip.top),
        px(clip.right),
        px(clip.bottom),
        px(clip.left)
    )
}

/// Card transform: the rendered position is the card center.
pub fn card_transform(t: &RenderedTransform) -> String {
    format!(
        "translate3d({}, {}, {}) translate(-50%, -50%) rotate({:.2}deg) scale({:.3})",
        px(t.position.x),
        px(t.position.y),
        px(t.depth),
        finite_or_zero(t.rotation_deg),
        finite_or_zero(t.scale).max(0.0)
    )
}

pub fn scale(s: f32) -> String {
    format!("scale({:.3})", finite_or_zero(s).max(0.0))
}

pub fn rgb(c: [u8; 3]) -> String {
    format!("rgb({}, {}, {})", c[0], c[1], c[2])
}

pub fn rgba(c: [u8; 3], alpha: f32) -> String {
    format!("rgba({}, {}, {}, {})", c[0], c[1], c[2], opacity(alpha))
}

/// Transparent center fading to `tint` at the rim.
pub fn vignette_gradient(tint: [u8; 3]) -> String {
    format!(
        "radial-gradient(circle at 50% 50%, {} 35%, {} 75%)",
        rgba(tint, 0.0),
        rgba(tint, 1.0)
    )
}

/// Bright core fading out; used for the energy field.
pub fn glow_gradient(tint: [u8; 3]) -> String {
    format!(
        "radial-gradient(circle at 50% 50%, {} 0%, {} 60%)",
        rgba(tint, 0.6),
        rgba(tint, 0.0)
    )
}
