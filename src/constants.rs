// DOM layout constants for the zero-gravity surface.
//
// Engine tuning lives in `zerog_core::constants`; these only describe how the
// web layer builds and stacks its elements.
// Element ids created on activation
pub const SURFACE_ID: &str = "zerog-surface";
pub const CONTENT_ID: &str = "zerog-content";
pub const CAPTION_ID: &str = "zerog-caption";
pub const AUDIO_LAYER_ID: &str = "zerog-audio-overlay";

// Stacking: the card surface floats over later page sections, the audio
// layer sits above the cards but never takes input.
pub const SURFACE_Z_INDEX: i32 = 40;
pub const AUDIO_LAYER_Z_INDEX: i32 = 60;

// Depth perspective for the entry fly-in
pub const PERSPECTIVE_PX: f32 = 1000.0;

pub const CAPTION_TEXT: &str = "Drag anything. Fling it off an edge.";

// Card class names (styled by the host page)
pub const CARD_CLASS: &str = "zerog-card";
pub const CARD_DRAGGING_CLASS: &str = "zerog-card--dragging";

// Frequency-data buffer used before the analyser reports its bin count
pub const DEFAULT_BIN_COUNT: usize = 128;
