//! Release physics: turning a release velocity into a decelerating slide.

use crate::constants::{
    SLIDE_FACTOR, SLIDE_MAX_DURATION_SEC, SLIDE_MIN_DURATION_SEC, SLIDE_SPEED_TO_SECONDS,
};
use crate::easing::Ease;
use crate::tween::Tween;
use glam::Vec2;

/// Knobs for the release slide. `Default` matches the shipped feel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlideTuning {
    pub slide_factor: f32,
    pub speed_to_seconds: f32,
    pub min_duration_sec: f32,
    pub max_duration_sec: f32,
}

impl Default for SlideTuning {
    fn default() -> Self {
        Self {
            slide_factor: SLIDE_FACTOR,
            speed_to_seconds: SLIDE_SPEED_TO_SECONDS,
            min_duration_sec: SLIDE_MIN_DURATION_SEC,
            max_duration_sec: SLIDE_MAX_DURATION_SEC,
        }
    }
}

#[inline]
fn sanitize(v: Vec2) -> Vec2 {
    Vec2::new(
        if v.x.is_finite() { v.x } else { 0.0 },
        if v.y.is_finite() { v.y } else { 0.0 },
    )
}

/// `clamp(|v| * speed_to_seconds, min, max)`; faster flicks coast longer.
pub fn slide_duration_sec(velocity: Vec2, tuning: &SlideTuning) -> f32 {
    let speed = sanitize(velocity).length();
    (speed * tuning.speed_to_seconds).clamp(tuning.min_duration_sec, tuning.max_duration_sec)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlidePlan {
    pub displacement: Vec2,
    pub duration_sec: f32,
}

impl SlidePlan {
    pub fn from_release(velocity: Vec2, tuning: &SlideTuning) -> Self {
        let velocity = sanitize(velocity);
        Self {
            displacement: velocity * tuning.slide_factor,
            duration_sec: slide_duration_sec(velocity, tuning),
        }
    }
}

/// The post-release coast. Movement follows a cubic ease-out from `origin`
/// to `origin + displacement`.
#[derive(Clone, Debug)]
pub struct SlideTween {
    origin: Vec2,
    plan: SlidePlan,
    progress: Tween,
}

impl SlideTween {
    pub fn start(origin: Vec2, plan: SlidePlan, now_ms: f64) -> Self {
        Self {
            origin,
            plan,
            progress: Tween::new(0.0, 1.0, now_ms, plan.duration_sec, Ease::Power3Out),
        }
    }

    pub fn position(&self, now_ms: f64) -> Vec2 {
        self.origin + self.plan.displacement * self.progress.value(now_ms)
    }

    pub fn target(&self) -> Vec2 {
        self.origin + self.plan.displacement
    }

    pub fn is_complete(&self, now_ms: f64) -> bool {
        self.progress.is_complete(now_ms)
    }
}
