//! Entry pop-in, idle drift and the space's own fade-in.

use crate::constants::*;
use crate::easing::Ease;
use crate::object::Placement;
use crate::tween::Tween;
use glam::Vec2;
use rand::Rng;

/// Resting scale for the current viewport width.
pub fn rest_scale(viewport_width: f32, small_max_width: f32, small_scale: f32) -> f32 {
    if viewport_width > 0.0 && viewport_width <= small_max_width {
        small_scale
    } else {
        1.0
    }
}

/// Configured delay, or a short randomized stagger.
pub fn entry_delay_sec(placement: &Placement, rng: &mut impl Rng) -> f32 {
    match placement.entry_delay_sec {
        Some(d) => d.max(0.0),
        None => ENTRY_DELAY_BASE_SEC + rng.gen::<f32>() * ENTRY_DELAY_JITTER_SEC,
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EntrySample {
    pub depth: f32,
    pub scale: f32,
    pub opacity: f32,
}

/// Fly-in from deep negative depth, near-zero scale and zero opacity.
#[derive(Clone, Debug)]
pub struct EntryTween {
    depth: Tween,
    scale: Tween,
    opacity: Tween,
}

impl EntryTween {
    pub fn new(now_ms: f64, delay_sec: f32, rest_scale: f32) -> Self {
        let ease = Ease::BackOut(ENTRY_OVERSHOOT);
        Self {
            depth: Tween::new(ENTRY_DEPTH_PX, 0.0, now_ms, ENTRY_DURATION_SEC, Ease::Power3Out)
                .with_delay(delay_sec),
            scale: Tween::new(ENTRY_SCALE, rest_scale, now_ms, ENTRY_DURATION_SEC, ease)
                .with_delay(delay_sec),
            opacity: Tween::new(0.0, 1.0, now_ms, ENTRY_DURATION_SEC, Ease::Power2Out)
                .with_delay(delay_sec),
        }
    }

    pub fn sample(&self, now_ms: f64) -> EntrySample {
        EntrySample {
            depth: self.depth.value(now_ms),
            scale: self.scale.value(now_ms),
            opacity: self.opacity.value(now_ms).clamp(0.0, 1.0),
        }
    }

    pub fn is_complete(&self, now_ms: f64) -> bool {
        self.scale.is_complete(now_ms)
            && self.depth.is_complete(now_ms)
            && self.opacity.is_complete(now_ms)
    }
}

/// Small reversing drift around the offset at which it was started. Rotation
/// always swings around the placement angle, never around wherever a previous
/// drift happened to stop.
#[derive(Clone, Debug)]
pub struct IdleDrift {
    anchor: Vec2,
    base_rotation: f32,
    dx: Tween,
    dy: Tween,
    rotation: Tween,
}

impl IdleDrift {
    /// `current_rotation` is where the object is drawn now; the rotation
    /// channel starts there and swings to a fresh target within
    /// `DRIFT_ROTATION_DEG` of `base_rotation`.
    pub fn random(
        anchor: Vec2,
        base_rotation: f32,
        current_rotation: f32,
        now_ms: f64,
        rng: &mut impl Rng,
    ) -> Self {
        let period = DRIFT_MIN_PERIOD_SEC + rng.gen::<f32>() * DRIFT_PERIOD_JITTER_SEC;
        let delay = rng.gen::<f32>() * DRIFT_MAX_DELAY_SEC;
        let tx = rng.gen_range(-DRIFT_OFFSET_PX..=DRIFT_OFFSET_PX);
        let ty = rng.gen_range(-DRIFT_OFFSET_PX..=DRIFT_OFFSET_PX);
        let tr = rng.gen_range(-DRIFT_ROTATION_DEG..=DRIFT_ROTATION_DEG);
        let channel = |from: f32, to: f32| {
            Tween::new(from, to, now_ms, period, Ease::SineInOut)
                .with_delay(delay)
                .yoyo_forever()
        };
        let start_dev = if current_rotation.is_finite() {
            (current_rotation - base_rotation).clamp(-DRIFT_ROTATION_DEG, DRIFT_ROTATION_DEG)
        } else {
            0.0
        };
        Self {
            anchor,
            base_rotation,
            dx: channel(0.0, tx),
            dy: channel(0.0, ty),
            rotation: channel(start_dev, tr),
        }
    }

    /// `(offset, rotation_deg)` at `now_ms`.
    pub fn sample(&self, now_ms: f64) -> (Vec2, f32) {
        let offset = self.anchor + Vec2::new(self.dx.value(now_ms), self.dy.value(now_ms));
        (offset, self.base_rotation + self.rotation.value(now_ms))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ChromeState {
    pub container_opacity: f32,
    pub caption_opacity: f32,
    pub caption_offset_y: f32,
}

/// Fade-in of the space container and its caption.
#[derive(Clone, Debug)]
pub struct SpaceChrome {
    container: Tween,
    caption_opacity: Tween,
    caption_rise: Tween,
}

impl SpaceChrome {
    pub fn new(now_ms: f64) -> Self {
        Self {
            container: Tween::new(0.0, 1.0, now_ms, SPACE_FADE_SEC, Ease::Power2InOut),
            caption_opacity: Tween::new(0.0, 1.0, now_ms, CAPTION_FADE_SEC, Ease::Power2Out)
                .with_delay(CAPTION_DELAY_SEC),
            caption_rise: Tween::new(CAPTION_RISE_PX, 0.0, now_ms, CAPTION_FADE_SEC, Ease::Power2Out)
                .with_delay(CAPTION_DELAY_SEC),
        }
    }

    pub fn sample(&self, now_ms: f64) -> ChromeState {
        ChromeState {
            container_opacity: self.container.value(now_ms),
            caption_opacity: self.caption_opacity.value(now_ms),
            caption_offset_y: self.caption_rise.value(now_ms),
        }
    }
}
