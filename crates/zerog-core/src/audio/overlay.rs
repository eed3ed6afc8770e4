//! Full-screen audio-reactive layer.
//!
//! Two signals drive the layer. The continuous one comes from spectral
//! analysis (energy field plus bass-hit flashes) and is optional: without an
//! analyser it is simply zero. The scripted one is keyed by playback position
//! and keeps working regardless.

use crate::audio::spectrum::AudioLevels;
use crate::audio::timeline::{self, ScriptPhase};
use crate::config::{TrackCue, TrackTheme};
use crate::constants::*;
use crate::easing::Ease;
use crate::tween::Tween;
use fnv::{FnvHashMap, FnvHashSet};
use smallvec::SmallVec;

/// Snapshot of the playing audio element for one frame.
#[derive(Clone, Copy, Debug)]
pub struct AudioCue<'a> {
    pub track_id: &'a str,
    pub current_time: f64,
    pub duration: f64,
    pub playing: bool,
    /// `None` when spectral analysis is unavailable.
    pub levels: Option<AudioLevels>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitTier {
    Hard,
    Soft,
}

#[derive(Clone, Debug, PartialEq)]
pub enum OverlayEvent {
    Hit(HitTier),
    /// One-time strike on entering a track's full-dark window.
    Strike { track_id: String },
}

#[derive(Clone, Debug, PartialEq)]
pub struct OverlayFrame {
    pub phase: ScriptPhase,
    pub darkness: f32,
    pub parasite_opacity: f32,
    pub vignette_opacity: f32,
    pub vignette_scale: f32,
    pub energy_opacity: f32,
    pub energy_scale: f32,
    pub flash_opacity: f32,
    pub strike_opacity: f32,
    pub flicker_suppression: f32,
    pub theme: TrackTheme,
    pub events: SmallVec<[OverlayEvent; 2]>,
}

impl OverlayFrame {
    pub fn is_blank(&self) -> bool {
        [
            self.darkness,
            self.parasite_opacity,
            self.vignette_opacity,
            self.energy_opacity,
            self.flash_opacity,
            self.strike_opacity,
        ]
        .iter()
        .all(|v| *v <= 0.0)
    }
}

#[derive(Clone, Debug)]
struct Flash {
    tier: HitTier,
    decay: Tween,
}

#[derive(Debug, Default)]
pub struct AudioReactiveOverlay {
    tracks: FnvHashMap<String, TrackCue>,
    fired: FnvHashSet<String>,
    flash: Option<Flash>,
    strike: Option<Tween>,
    prev_bass: Option<f32>,
}

impl AudioReactiveOverlay {
    pub fn new(tracks: &[TrackCue]) -> Self {
        Self {
            tracks: tracks.iter().map(|t| (t.id.clone(), t.clone())).collect(),
            ..Self::default()
        }
    }

    pub fn has_fired(&self, track_id: &str) -> bool {
        self.fired.contains(track_id)
    }

    /// Drop all transient state (flashes, guards). Track table is kept.
    pub fn reset(&mut self) {
        self.fired.clear();
        self.flash = None;
        self.strike = None;
        self.prev_bass = None;
    }

    pub fn update(&mut self, cue: &AudioCue<'_>, now_ms: f64) -> OverlayFrame {
        let mut events: SmallVec<[OverlayEvent; 2]> = SmallVec::new();
        let track = self.tracks.get(cue.track_id);
        let theme = track.map(|t| t.theme).unwrap_or_default();
        let cue_timeline = track.and_then(|t| t.timeline.as_ref());
        let scripted = timeline::evaluate(cue_timeline, cue.current_time);

        if let Some(tl) = cue_timeline {
            if cue.current_time < tl.full_dark.start_sec {
                self.fired.remove(cue.track_id);
            } else if cue.playing
                && tl.full_dark.contains(cue.current_time)
                && self.fired.insert(cue.track_id.to_string())
            {
                self.strike = Some(Tween::new(1.0, 0.0, now_ms, STRIKE_DECAY_SEC, Ease::Power2Out));
                events.push(OverlayEvent::Strike {
                    track_id: cue.track_id.to_string(),
                });
                log::debug!("[overlay] strike on `{}` at {:.2}s", cue.track_id, cue.current_time);
            }
        }

        let suppression = scripted.flicker_suppression;
        let (mut energy_opacity, mut energy_scale) = (0.0, 1.0);
        match (cue.playing, cue.levels) {
            (true, Some(levels)) => {
                if let Some(tier) = self.detect_hit(levels.bass) {
                    if self.start_flash(tier, now_ms) {
                        events.push(OverlayEvent::Hit(tier));
                    }
                }
                self.prev_bass = Some(levels.bass);
                energy_opacity = (levels.energy * ENERGY_OPACITY_GAIN).clamp(0.0, 1.0) * suppression;
                energy_scale = 1.0 + levels.bass * ENERGY_SCALE_GAIN;
            }
            _ => self.prev_bass = None,
        }

        if self.flash.as_ref().map_or(false, |f| f.decay.is_complete(now_ms)) {
            self.flash = None;
        }
        if self.strike.as_ref().map_or(false, |s| s.is_complete(now_ms)) {
            self.strike = None;
        }
        let flash_opacity = self
            .flash
            .as_ref()
            .map_or(0.0, |f| f.decay.value(now_ms) * suppression);
        let strike_opacity = self.strike.as_ref().map_or(0.0, |s| s.value(now_ms));

        let fade = timeline::end_fade(cue.current_time, cue.duration);
        OverlayFrame {
            phase: scripted.phase,
            darkness: scripted.darkness * fade,
            parasite_opacity: scripted.parasite_opacity * fade,
            vignette_opacity: scripted.vignette_opacity() * fade,
            vignette_scale: scripted.vignette_scale(),
            energy_opacity: energy_opacity * fade,
            energy_scale,
            flash_opacity: flash_opacity * fade,
            strike_opacity: strike_opacity * fade,
            flicker_suppression: suppression,
            theme,
            events,
        }
    }

    fn detect_hit(&self, bass: f32) -> Option<HitTier> {
        let rise = bass - self.prev_bass?;
        if rise < HIT_MIN_RISE {
            return None;
        }
        if bass >= HARD_HIT_THRESHOLD {
            Some(HitTier::Hard)
        } else if bass >= SOFT_HIT_THRESHOLD {
            Some(HitTier::Soft)
        } else {
            None
        }
    }

    /// Start a flash unless a brighter one is still showing.
    fn start_flash(&mut self, tier: HitTier, now_ms: f64) -> bool {
        let (peak, decay_sec, ease) = match tier {
            HitTier::Hard => (HARD_FLASH_PEAK, HARD_FLASH_DECAY_SEC, Ease::Power3Out),
            HitTier::Soft => (SOFT_FLASH_PEAK, SOFT_FLASH_DECAY_SEC, Ease::SineInOut),
        };
        if let Some(current) = &self.flash {
            if !current.decay.is_complete(now_ms) && current.decay.value(now_ms) > peak {
                return false;
            }
        }
        self.flash = Some(Flash {
            tier,
            decay: Tween::new(peak, 0.0, now_ms, decay_sec, ease),
        });
        true
    }

    pub fn current_flash_tier(&self) -> Option<HitTier> {
        self.flash.as_ref().map(|f| f.tier)
    }
}
