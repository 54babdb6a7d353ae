use sheen_attitude::Attitude;
use std::time::Instant;

/// Source of raw device attitude samples.
///
/// `MotionManager` polls `read_attitude` once per update interval while
/// tracking. Implementations wrap a platform sensor, a recording or a
/// synthetic signal.
pub trait MotionProvider: Send {
    /// Whether this device can produce motion samples at all.
    fn is_available(&self) -> bool;

    /// Latest sample, or `None` if any of the three angles is not ready.
    fn read_attitude(&mut self) -> Option<Attitude>;

    /// Called when updates start.
    fn start(&mut self) {}

    /// Called when updates stop.
    fn stop(&mut self) {}
}

/// Provider that always reports the same attitude.
pub struct StaticMotion {
    attitude: Option<Attitude>,
    available: bool,
}

impl StaticMotion {
    pub fn new(attitude: Attitude) -> Self {
        Self {
            attitude: Some(attitude),
            available: true,
        }
    }

    /// A device without motion sensors.
    pub fn unavailable() -> Self {
        Self {
            attitude: None,
            available: false,
        }
    }

    /// An available sensor that has not produced a sample yet.
    pub fn pending() -> Self {
        Self {
            attitude: None,
            available: true,
        }
    }

    pub fn set_attitude(&mut self, attitude: Option<Attitude>) {
        self.attitude = attitude;
    }
}

impl MotionProvider for StaticMotion {
    fn is_available(&self) -> bool {
        self.available
    }

    fn read_attitude(&mut self) -> Option<Attitude> {
        self.attitude
    }
}

/// Slow sinusoidal sway, for running the effect without a real sensor.
pub struct SyntheticMotion {
    started: Instant,
    /// Peak angle per axis, radians.
    pub amplitude: Attitude,
    /// Sway period in seconds.
    pub period_secs: f64,
}

impl SyntheticMotion {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            amplitude: Attitude::new(0.35, 0.2, 0.5),
            period_secs: 4.0,
        }
    }

    /// Attitude at `t` seconds after start.
    pub fn sample_at(&self, t: f64) -> Attitude {
        let phase = std::f64::consts::TAU * t / self.period_secs;
        Attitude {
            pitch: self.amplitude.pitch * phase.sin(),
            yaw: self.amplitude.yaw * (phase * 0.5).sin(),
            // Quarter period behind pitch so the highlight traces an ellipse.
            roll: self.amplitude.roll * phase.cos(),
        }
    }
}

impl Default for SyntheticMotion {
    fn default() -> Self {
        Self::new()
    }
}

impl MotionProvider for SyntheticMotion {
    fn is_available(&self) -> bool {
        true
    }

    fn read_attitude(&mut self) -> Option<Attitude> {
        Some(self.sample_at(self.started.elapsed().as_secs_f64()))
    }

    fn start(&mut self) {
        self.started = Instant::now();
    }
}
