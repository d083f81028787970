//! Pacing provider for the sequencer.
//!
//! Pauses exist purely for human-perceivable pacing; shortening or eliding
//! them never changes what is rendered. Tests substitute [`NullClock`] so
//! runs take no wall-clock time and timestamps stay fixed.

use std::thread;
use std::time::Duration;

use chrono::Local;
use rand::Rng;

/// Sleep and timestamp provider.
pub trait Clock {
    /// Pause for roughly the given duration.
    fn pause(&self, delay: Duration);

    /// Current time of day as `HH:MM:SS`.
    fn timestamp(&self) -> String;
}

/// Real-time clock backed by `thread::sleep`.
///
/// An optional jitter fraction varies each pause by up to ±fraction for a
/// less mechanical feel. Jitter only affects sleep length, never output.
pub struct WallClock {
    jitter: f64,
}

impl WallClock {
    /// A clock that sleeps exactly the requested delays.
    pub fn new() -> Self {
        Self { jitter: 0.0 }
    }

    /// A clock that varies each pause by up to ±`jitter` (0.0..1.0).
    pub fn with_jitter(jitter: f64) -> Self {
        Self {
            jitter: jitter.clamp(0.0, 1.0),
        }
    }
}

impl Default for WallClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for WallClock {
    fn pause(&self, delay: Duration) {
        if delay.is_zero() {
            return;
        }
        let delay = if self.jitter > 0.0 {
            let roll = rand::thread_rng().gen_range(0.0..1.0);
            apply_jitter(delay, self.jitter, roll)
        } else {
            delay
        };
        thread::sleep(delay);
    }

    fn timestamp(&self) -> String {
        Local::now().format("%H:%M:%S").to_string()
    }
}

/// No-op clock for tests: zero elapsed time, fixed timestamp.
pub struct NullClock;

impl Clock for NullClock {
    fn pause(&self, _delay: Duration) {}

    fn timestamp(&self) -> String {
        "00:00:00".to_string()
    }
}

/// Scale a delay by `1 + jitter * (2*roll - 1)` for a roll in [0, 1).
fn apply_jitter(delay: Duration, jitter: f64, roll: f64) -> Duration {
    let factor = 1.0 + jitter * (2.0 * roll - 1.0);
    delay.mul_f64(factor.max(0.0))
}
