use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("object {index}: {field} = {value} is out of range")]
    PlacementOutOfRange {
        index: usize,
        field: &'static str,
        value: f32,
    },

    #[error("track at index {0} has an empty id")]
    EmptyTrackId(usize),

    #[error("track `{0}` is defined more than once")]
    DuplicateTrack(String),

    #[error("track `{track}`: window `{window}` is empty or inverted ({start}..{end})")]
    InvalidWindow {
        track: String,
        window: &'static str,
        start: f64,
        end: f64,
    },

    #[error("track `{0}`: build, full-dark and reveal windows must not overlap and must be in order")]
    WindowOrder(String),

    #[error("tuning: {0}")]
    Tuning(&'static str),
}
