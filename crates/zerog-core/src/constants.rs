// Tuning constants shared by the engine and its web front-end.

// Velocity estimation
pub const VELOCITY_SMOOTHING_ALPHA: f32 = 0.5; // weight kept from the previous estimate

// Release slide
pub const SLIDE_FACTOR: f32 = 300.0; // px/ms of release velocity -> px of slide
pub const SLIDE_SPEED_TO_SECONDS: f32 = 20.0; // |v| (px/ms) -> slide seconds before clamping
pub const SLIDE_MIN_DURATION_SEC: f32 = 1.0;
pub const SLIDE_MAX_DURATION_SEC: f32 = 2.5;

// Wrap-around play surface
pub const WRAP_BUFFER_PX: f32 = 300.0; // how far past an edge an object travels before wrapping
pub const BOTTOM_MARGIN_PX: f32 = 50.0; // lowest resting point is height - margin

// Press feedback
pub const PRESS_LIFT_SCALE: f32 = 1.05;
pub const PRESS_LIFT_SEC: f32 = 0.2;

// Entry choreography
pub const ENTRY_DEPTH_PX: f32 = -1200.0; // starting depth (negative = away from the viewer)
pub const ENTRY_SCALE: f32 = 0.05;
pub const ENTRY_DURATION_SEC: f32 = 0.8;
pub const ENTRY_OVERSHOOT: f32 = 1.7; // back-out overshoot
pub const ENTRY_DELAY_BASE_SEC: f32 = 0.5;
pub const ENTRY_DELAY_JITTER_SEC: f32 = 0.5;

// Space container chrome
pub const SPACE_FADE_SEC: f32 = 1.5;
pub const CAPTION_DELAY_SEC: f32 = 0.5;
pub const CAPTION_FADE_SEC: f32 = 1.0;
pub const CAPTION_RISE_PX: f32 = 50.0;

// Small viewports
pub const SMALL_VIEWPORT_MAX_WIDTH_PX: f32 = 768.0;
pub const SMALL_VIEWPORT_SCALE: f32 = 0.7;

// Idle drift
pub const DRIFT_OFFSET_PX: f32 = 30.0; // max |dx|, |dy|
pub const DRIFT_ROTATION_DEG: f32 = 5.0; // max |rotation|
pub const DRIFT_MIN_PERIOD_SEC: f32 = 4.0;
pub const DRIFT_PERIOD_JITTER_SEC: f32 = 4.0;
pub const DRIFT_MAX_DELAY_SEC: f32 = 2.0;

// Spectrum analysis
pub const BASS_BIN_COUNT: usize = 12; // lowest bins averaged into bass energy
pub const ANALYSER_FFT_SIZE: u32 = 256;

// Continuous flash tiers
pub const HARD_HIT_THRESHOLD: f32 = 0.82;
pub const SOFT_HIT_THRESHOLD: f32 = 0.6;
pub const HIT_MIN_RISE: f32 = 0.08; // bass must jump by this much since the previous sample
pub const HARD_FLASH_PEAK: f32 = 1.0;
pub const HARD_FLASH_DECAY_SEC: f32 = 0.18;
pub const SOFT_FLASH_PEAK: f32 = 0.45;
pub const SOFT_FLASH_DECAY_SEC: f32 = 0.6;
pub const STRIKE_DECAY_SEC: f32 = 0.6;

// Continuous energy field
pub const ENERGY_OPACITY_GAIN: f32 = 0.8;
pub const ENERGY_SCALE_GAIN: f32 = 0.5;

// Scripted sequence
pub const FULL_DARKNESS: f32 = 0.92;
pub const BUILD_DARKNESS_RATE: f32 = 1.1; // darkness per unit of build progress
pub const BUILD_PARASITE_RATE: f32 = 1.5; // parasite opacity per unit of build progress
pub const FLICKER_HOLD_PROGRESS: f32 = 0.5; // flicker untouched until this much of the build
pub const VIGNETTE_OPEN_SCALE: f32 = 1.8;
pub const VIGNETTE_CLOSED_SCALE: f32 = 1.0;

// End-of-track fade
pub const END_FADE_SEC: f64 = 5.0;
