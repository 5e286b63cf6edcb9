use crate::constants::INDICATOR_TRANSITION_SEC;

/// Quadratic ease-out on [0, 1].
#[inline]
pub fn ease_out_quad(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * (2.0 - t)
}

/// Time-based eased transition of a single scalar.
///
/// The value is a pure function of the sampled time, so starting a new
/// transition simply overwrites the old one, beginning from wherever the
/// previous one had got to.
#[derive(Clone, Debug)]
pub struct IndicatorAnimator {
    from: f32,
    to: f32,
    start_sec: f64,
    duration_sec: f64,
}

impl IndicatorAnimator {
    pub fn new(value: f32) -> Self {
        Self::with_duration(value, INDICATOR_TRANSITION_SEC)
    }

    pub fn with_duration(value: f32, duration_sec: f64) -> Self {
        Self {
            from: value,
            to: value,
            start_sec: f64::NEG_INFINITY,
            duration_sec,
        }
    }

    pub fn animate_to(&mut self, to: f32, now_sec: f64) {
        self.from = self.value(now_sec);
        self.to = to;
        self.start_sec = now_sec;
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    fn progress(&self, now_sec: f64) -> f32 {
        if self.duration_sec <= 0.0 {
            return 1.0;
        }
        ((now_sec - self.start_sec) / self.duration_sec).clamp(0.0, 1.0) as f32
    }

    pub fn value(&self, now_sec: f64) -> f32 {
        self.from + (self.to - self.from) * ease_out_quad(self.progress(now_sec))
    }

    pub fn is_animating(&self, now_sec: f64) -> bool {
        self.progress(now_sec) < 1.0
    }
}
