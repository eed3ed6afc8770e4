//! Toroidal play surface.
//!
//! Positions are filtered every frame into `[-buffer, dimension + buffer)` per
//! axis, so anything pushed past one edge comes back from the opposite one
//! once it is fully out of sight. The vertical axis additionally never rests
//! lower than `height - bottom_margin`.

use crate::constants::{BOTTOM_MARGIN_PX, WRAP_BUFFER_PX};
use glam::Vec2;

/// Map `value` into `[min, max)` cyclically.
///
/// Values already inside the range are returned untouched, which makes the
/// function exactly idempotent. A degenerate range or a non-finite value is
/// passed through.
pub fn wrap(min: f32, max: f32, value: f32) -> f32 {
    let range = max - min;
    if !(range > 0.0) || !value.is_finite() {
        return value;
    }
    if value >= min && value < max {
        return value;
    }
    let wrapped = min + (value - min).rem_euclid(range);
    if wrapped >= max {
        min
    } else {
        wrapped.max(min)
    }
}

/// Measured size of the play area in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlayArea {
    pub width: f32,
    pub height: f32,
}

impl PlayArea {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WrapBounds {
    pub buffer: f32,
    pub bottom_margin: f32,
}

impl Default for WrapBounds {
    fn default() -> Self {
        Self {
            buffer: WRAP_BUFFER_PX,
            bottom_margin: BOTTOM_MARGIN_PX,
        }
    }
}

impl WrapBounds {
    pub fn wrap_x(&self, x: f32, width: f32) -> f32 {
        if !(width > 0.0) {
            return x;
        }
        wrap(-self.buffer, width + self.buffer, x)
    }

    pub fn wrap_y(&self, y: f32, height: f32) -> f32 {
        if !(height > 0.0) {
            return y;
        }
        let floor = (height - self.bottom_margin).max(-self.buffer);
        wrap(-self.buffer, height + self.buffer, y).min(floor)
    }

    pub fn apply(&self, position: Vec2, area: PlayArea) -> Vec2 {
        Vec2::new(
            self.wrap_x(position.x, area.width),
            self.wrap_y(position.y, area.height),
        )
    }
}
