// File: crates/chart-core/src/animation.rs
// Summary: Entrance ("appear") animation timing with cubic ease-out.

use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Appear {
    pub duration: Duration,
    pub delay: Duration,
}

impl Appear {
    pub fn new(duration_ms: u64, delay_ms: u64) -> Self {
        Self { duration: Duration::from_millis(duration_ms), delay: Duration::from_millis(delay_ms) }
    }

    /// Eased progress in `[0, 1]` at `elapsed` since the animation started.
    pub fn progress(&self, elapsed: Duration) -> f32 {
        let Some(t) = elapsed.checked_sub(self.delay) else { return 0.0 };
        if self.duration.is_zero() { return 1.0; }
        let t = (t.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0) as f32;
        1.0 - (1.0 - t).powi(3)
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.delay + self.duration
    }
}

impl Default for Appear {
    fn default() -> Self { Self::new(1000, 100) }
}
