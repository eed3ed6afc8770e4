//! Easing curves used by every tween in the engine.
//!
//! All curves map normalized time `t` in \[0, 1\] to progress, with `ease(0) == 0`
//! and `ease(1) == 1`. `BackOut` overshoots past 1 before settling.

use std::f32::consts::PI;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Ease {
    Linear,
    Power2Out,
    Power2InOut,
    /// Cubic ease-out: fast start, smooth stop.
    Power3Out,
    SineInOut,
    /// Overshoot-and-settle with the given overshoot amount.
    BackOut(f32),
}

impl Ease {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power2Out => 1.0 - (1.0 - t).powi(2),
            Ease::Power2InOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Ease::Power3Out => 1.0 - (1.0 - t).powi(3),
            Ease::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
            Ease::BackOut(s) => {
                let u = t - 1.0;
                u * u * ((s + 1.0) * u + s) + 1.0
            }
        }
    }
}
