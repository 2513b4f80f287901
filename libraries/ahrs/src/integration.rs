use hal::Vector3d;
use std::time::Instant;

/// Accumulated gyroscope angles (x, y, z) in degrees
pub type IntegratedAngles = Vector3d;

/// Rectangular integrator for angular rate
///
/// Accumulates `rate * dt` per axis without wraparound, so the angles drift
/// with any residual bias and may exceed ±360°.
#[derive(Debug, Clone)]
pub struct GyroIntegrator {
    angles: IntegratedAngles,
    last_time: Instant,
}

impl GyroIntegrator {
    /// Start integrating from zero angles at `start`
    pub fn new(start: Instant) -> Self {
        Self {
            angles: IntegratedAngles::zeros(),
            last_time: start,
        }
    }

    /// Advance the accumulator to `now` with `rate` in degrees/second
    ///
    /// A tick with `now <= last_time` changes nothing.
    pub fn integrate(&mut self, rate: &Vector3d, now: Instant) -> IntegratedAngles {
        if let Some(dt) = self.elapsed(now) {
            self.last_time = now;
            self.angles += rate * dt;
        }
        self.angles
    }

    /// Seconds from the last accepted tick to `now`, `None` if not positive
    pub fn elapsed(&self, now: Instant) -> Option<f32> {
        now.checked_duration_since(self.last_time)
            .filter(|dt| !dt.is_zero())
            .map(|dt| dt.as_secs_f32())
    }

    /// Move the time base to `now`, keeping the accumulated angles
    pub fn restart(&mut self, now: Instant) {
        self.last_time = now;
    }

    pub fn angles(&self) -> IntegratedAngles {
        self.angles
    }

    pub fn last_time(&self) -> Instant {
        self.last_time
    }
}
