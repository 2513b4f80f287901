// Test doubles for the estimator: a scripted IMU and a manually driven clock

use crate::clock::Clock;
use hal::{ImuSensor, Vector3d};
use std::cell::Cell;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Error raised by [`ScriptedImu`] once told to fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptedFault;

/// IMU that returns programmed readings
///
/// Queued gyro readings are consumed first; after that every read returns
/// the steady value.
pub struct ScriptedImu {
    accel: Vector3d,
    gyro: Vector3d,
    queued_gyro: VecDeque<Vector3d>,
    gyro_reads: usize,
    fail_gyro_after: Option<usize>,
    fail_accel: bool,
}

impl ScriptedImu {
    /// Flat, motionless sensor: gravity along +z, no rotation
    pub fn at_rest() -> Self {
        Self {
            accel: Vector3d::new(0.0, 0.0, 1.0),
            gyro: Vector3d::zeros(),
            queued_gyro: VecDeque::new(),
            gyro_reads: 0,
            fail_gyro_after: None,
            fail_accel: false,
        }
    }

    pub fn set_accel(&mut self, accel: Vector3d) {
        self.accel = accel;
    }

    pub fn set_gyro(&mut self, gyro: Vector3d) {
        self.gyro = gyro;
    }

    pub fn push_gyro(&mut self, gyro: Vector3d) {
        self.queued_gyro.push_back(gyro);
    }

    /// Let `count` more gyro reads succeed, fail every one after
    pub fn fail_gyro_after(&mut self, count: usize) {
        self.fail_gyro_after = Some(self.gyro_reads + count);
    }

    pub fn fail_accel(&mut self, fail: bool) {
        self.fail_accel = fail;
    }

    /// Gyro reads attempted so far, failed ones included
    pub fn gyro_reads(&self) -> usize {
        self.gyro_reads
    }
}

impl ImuSensor for ScriptedImu {
    type Error = ScriptedFault;

    fn read_accel(&mut self) -> Result<Vector3d, Self::Error> {
        if self.fail_accel {
            return Err(ScriptedFault);
        }
        Ok(self.accel)
    }

    fn read_gyro(&mut self) -> Result<Vector3d, Self::Error> {
        self.gyro_reads += 1;
        if matches!(self.fail_gyro_after, Some(limit) if self.gyro_reads > limit) {
            return Err(ScriptedFault);
        }
        Ok(self.queued_gyro.pop_front().unwrap_or(self.gyro))
    }
}

/// Clock that only moves when told to; `sleep` advances it
pub struct ManualClock {
    now: Cell<Instant>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Cell::new(Instant::now()),
        }
    }

    pub fn advance(&self, duration: Duration) {
        self.now.set(self.now.get() + duration);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }

    fn sleep(&self, duration: Duration) {
        self.advance(duration);
    }
}
