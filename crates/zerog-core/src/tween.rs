use crate::easing::Ease;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Repeat {
    Once,
    /// Play forward, then backward, forever.
    YoyoForever,
}

/// A single scalar animation sampled against the frame clock (milliseconds).
///
/// Tweens hold no reference to what they animate; the owner samples `value`
/// each frame and writes the result where it belongs. Dropping a tween is
/// the same as killing it.
#[derive(Clone, Debug)]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    start_ms: f64,
    delay_ms: f64,
    duration_ms: f64,
    ease: Ease,
    repeat: Repeat,
}

impl Tween {
    pub fn new(from: f32, to: f32, start_ms: f64, duration_sec: f32, ease: Ease) -> Self {
        Self {
            from,
            to,
            start_ms,
            delay_ms: 0.0,
            duration_ms: (duration_sec.max(0.0) as f64) * 1000.0,
            ease,
            repeat: Repeat::Once,
        }
    }

    pub fn with_delay(mut self, delay_sec: f32) -> Self {
        self.delay_ms = (delay_sec.max(0.0) as f64) * 1000.0;
        self
    }

    pub fn yoyo_forever(mut self) -> Self {
        self.repeat = Repeat::YoyoForever;
        self
    }

    pub fn duration_sec(&self) -> f32 {
        (self.duration_ms / 1000.0) as f32
    }

    /// Linear progress in \[0, 1\] for the current cycle, before easing.
    pub fn progress(&self, now_ms: f64) -> f32 {
        let elapsed = now_ms - self.start_ms - self.delay_ms;
        if elapsed <= 0.0 {
            return 0.0;
        }
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        let cycles = elapsed / self.duration_ms;
        match self.repeat {
            Repeat::Once => cycles.min(1.0) as f32,
            Repeat::YoyoForever => {
                let phase = cycles.fract();
                if (cycles.floor() as u64) % 2 == 0 {
                    phase as f32
                } else {
                    (1.0 - phase) as f32
                }
            }
        }
    }

    pub fn value(&self, now_ms: f64) -> f32 {
        let eased = self.ease.apply(self.progress(now_ms));
        self.from + (self.to - self.from) * eased
    }

    pub fn is_complete(&self, now_ms: f64) -> bool {
        match self.end_ms() {
            Some(end) => now_ms >= end,
            None => false,
        }
    }

    /// Clock value at which a one-shot tween finishes; `None` for endless tweens.
    pub fn end_ms(&self) -> Option<f64> {
        match self.repeat {
            Repeat::Once => Some(self.start_ms + self.delay_ms + self.duration_ms),
            Repeat::YoyoForever => None,
        }
    }
}
