//! Time-keyed choreography for scripted tracks.
//!
//! Everything here is a pure function of playback position: the same
//! `current_time` always yields the same [`ScriptedState`].

use crate::constants::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptedWindow {
    pub start_sec: f64,
    pub end_sec: f64,
}

impl ScriptedWindow {
    pub fn new(start_sec: f64, end_sec: f64) -> Self {
        Self { start_sec, end_sec }
    }

    /// Half-open: `[start, end)`.
    pub fn contains(&self, t: f64) -> bool {
        t >= self.start_sec && t < self.end_sec
    }

    /// Linear progress through the window, clamped to \[0, 1\].
    pub fn progress(&self, t: f64) -> f32 {
        let span = self.end_sec - self.start_sec;
        if span <= 0.0 {
            return 1.0;
        }
        ((t - self.start_sec) / span).clamp(0.0, 1.0) as f32
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CueTimeline {
    pub build: ScriptedWindow,
    pub full_dark: ScriptedWindow,
    pub reveal: ScriptedWindow,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScriptPhase {
    Inactive,
    Build,
    FullDark,
    Reveal,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScriptedState {
    pub phase: ScriptPhase,
    pub darkness: f32,
    pub parasite_opacity: f32,
    /// How far the vignette has closed in, \[0, 1\].
    pub closure: f32,
    /// Multiplier applied to continuous flash/energy effects.
    pub flicker_suppression: f32,
}

impl ScriptedState {
    pub const INACTIVE: ScriptedState = ScriptedState {
        phase: ScriptPhase::Inactive,
        darkness: 0.0,
        parasite_opacity: 0.0,
        closure: 0.0,
        flicker_suppression: 1.0,
    };

    pub fn vignette_opacity(&self) -> f32 {
        self.closure
    }

    pub fn vignette_scale(&self) -> f32 {
        VIGNETTE_OPEN_SCALE + (VIGNETTE_CLOSED_SCALE - VIGNETTE_OPEN_SCALE) * self.closure
    }
}

impl CueTimeline {
    pub fn evaluate(&self, t: f64) -> ScriptedState {
        if self.build.contains(t) {
            let p = self.build.progress(t);
            let flicker = if p <= FLICKER_HOLD_PROGRESS {
                1.0
            } else {
                (1.0 - (p - FLICKER_HOLD_PROGRESS) / (1.0 - FLICKER_HOLD_PROGRESS)).max(0.0)
            };
            ScriptedState {
                phase: ScriptPhase::Build,
                darkness: (p * BUILD_DARKNESS_RATE).min(FULL_DARKNESS),
                parasite_opacity: (p * BUILD_PARASITE_RATE).min(1.0),
                closure: p,
                flicker_suppression: flicker,
            }
        } else if self.full_dark.contains(t) {
            ScriptedState {
                phase: ScriptPhase::FullDark,
                darkness: FULL_DARKNESS,
                parasite_opacity: 1.0,
                closure: 1.0,
                flicker_suppression: 0.0,
            }
        } else if self.reveal.contains(t) {
            let p = self.reveal.progress(t);
            ScriptedState {
                phase: ScriptPhase::Reveal,
                darkness: FULL_DARKNESS * (1.0 - p),
                parasite_opacity: 1.0 - p,
                closure: 1.0 - p,
                flicker_suppression: p,
            }
        } else {
            ScriptedState::INACTIVE
        }
    }
}

/// Scripted state for an optional timeline.
pub fn evaluate(timeline: Option<&CueTimeline>, t: f64) -> ScriptedState {
    match timeline {
        Some(tl) if t.is_finite() => tl.evaluate(t),
        _ => ScriptedState::INACTIVE,
    }
}

/// Opacity multiplier for the last seconds of a track.
pub fn end_fade(current_time: f64, duration: f64) -> f32 {
    if !(duration.is_finite() && duration > 0.0 && current_time.is_finite()) {
        return 1.0;
    }
    let remaining = duration - current_time;
    if remaining < END_FADE_SEC {
        (remaining / END_FADE_SEC).clamp(0.0, 1.0) as f32
    } else {
        1.0
    }
}
