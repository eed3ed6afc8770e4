pub mod overlay;
pub mod spectrum;
pub mod timeline;

pub use overlay::{AudioCue, AudioReactiveOverlay, HitTier, OverlayEvent, OverlayFrame};
pub use spectrum::AudioLevels;
pub use timeline::{end_fade, CueTimeline, ScriptPhase, ScriptedState, ScriptedWindow};
