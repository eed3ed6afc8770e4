use crate::constants::BASS_BIN_COUNT;

/// Analyser floor used to map decibel bins onto \[0, 1\].
pub const DB_FLOOR: f32 = -100.0;
pub const DB_SPAN: f32 = 100.0;

/// Normalized spectral metrics for one analyser sample.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AudioLevels {
    /// Mean magnitude over every bin.
    pub energy: f32,
    /// Mean magnitude over the lowest bins.
    pub bass: f32,
    /// Largest single-bin magnitude.
    pub peak: f32,
}

#[inline]
pub fn db_to_unit(db: f32) -> f32 {
    if !db.is_finite() {
        return 0.0;
    }
    ((db - DB_FLOOR) / DB_SPAN).clamp(0.0, 1.0)
}

impl AudioLevels {
    /// From float frequency data in decibels (`getFloatFrequencyData`).
    pub fn from_db_bins(bins: &[f32]) -> Self {
        Self::from_unit_iter(bins.iter().map(|v| db_to_unit(*v)), bins.len())
    }

    fn from_unit_iter(values: impl Iterator<Item = f32>, len: usize) -> Self {
        if len == 0 {
            return Self::default();
        }
        let bass_bins = len.min(BASS_BIN_COUNT);
        let mut total = 0.0f32;
        let mut bass = 0.0f32;
        let mut peak = 0.0f32;
        for (i, v) in values.enumerate() {
            total += v;
            if i < bass_bins {
                bass += v;
            }
            peak = peak.max(v);
        }
        Self {
            energy: total / len as f32,
            bass: bass / bass_bins as f32,
            peak,
        }
    }
}
