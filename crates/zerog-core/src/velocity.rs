//! Per-drag velocity estimation.
//!
//! A [`DragSession`] lives from press to release. Each move sample carries the
//! pointer delta since the previous sample; the session turns it into an
//! instantaneous velocity (px/ms) and blends it into a running estimate:
//!
//! `velocity = velocity * alpha + instant * (1 - alpha)`
//!
//! The estimate starts at zero, so it always lies between zero and the
//! extremes of the observed instantaneous velocities.

use crate::constants::VELOCITY_SMOOTHING_ALPHA;
use glam::Vec2;

#[derive(Clone, Debug)]
pub struct DragSession {
    pub start_ms: f64,
    last_sample_ms: f64,
    velocity: Vec2,
    alpha: f32,
    last_delta: Vec2,
    travelled: Vec2,
}

impl DragSession {
    pub fn begin(now_ms: f64) -> Self {
        Self::with_alpha(now_ms, VELOCITY_SMOOTHING_ALPHA)
    }

    pub fn with_alpha(now_ms: f64, alpha: f32) -> Self {
        Self {
            start_ms: now_ms,
            last_sample_ms: now_ms,
            velocity: Vec2::ZERO,
            alpha: alpha.clamp(0.0, 1.0),
            last_delta: Vec2::ZERO,
            travelled: Vec2::ZERO,
        }
    }

    /// Feed one move sample. Returns `false` when the sample shares its
    /// timestamp with the previous one; the delta is still recorded.
    pub fn sample(&mut self, delta: Vec2, now_ms: f64) -> bool {
        let dt = now_ms - self.last_sample_ms;
        self.last_delta = delta;
        self.travelled += delta;
        self.last_sample_ms = now_ms;
        if dt <= 0.0 {
            return false;
        }
        let instant = delta / dt as f32;
        self.velocity = self.velocity * self.alpha + instant * (1.0 - self.alpha);
        true
    }

    /// Smoothed velocity in px/ms.
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn last_delta(&self) -> Vec2 {
        self.last_delta
    }

    pub fn last_sample_ms(&self) -> f64 {
        self.last_sample_ms
    }

    /// Total pointer travel since press.
    pub fn travelled(&self) -> Vec2 {
        self.travelled
    }

    /// End the session, yielding the release velocity.
    pub fn finish(self) -> Vec2 {
        self.velocity
    }
}
