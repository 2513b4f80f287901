use crate::clock::Clock;
use crate::error::{helpers, AhrsResult, SensorType};
use hal::{ImuSensor, Vector3d};
use log::{debug, info};
use std::time::Duration;

/// Default delay between calibration samples
pub const DEFAULT_SAMPLE_DELAY: Duration = Duration::from_millis(10);

/// Per-axis gyroscope bias in degrees/second
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CalibrationOffsets {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl CalibrationOffsets {
    /// Offsets as a vector (x, y, z)
    pub fn to_vector(&self) -> Vector3d {
        Vector3d::new(self.x, self.y, self.z)
    }
}

impl From<Vector3d> for CalibrationOffsets {
    fn from(v: Vector3d) -> Self {
        Self { x: v.x, y: v.y, z: v.z }
    }
}

/// Estimate the gyroscope bias from a stationary sensor
///
/// Takes `sample_count` raw gyroscope readings, sleeping `sample_delay` after
/// each, and returns the per-axis mean. The first failed read aborts the
/// whole run; nothing collected up to that point is returned.
pub fn calibrate<S: ImuSensor, C: Clock>(
    sensor: &mut S,
    clock: &C,
    sample_count: usize,
    sample_delay: Duration,
) -> AhrsResult<CalibrationOffsets, S::Error> {
    if sample_count == 0 {
        return Err(helpers::config_error("at least one sample is required", "sample_count").into());
    }

    info!("Calibrating gyroscope over {} samples, keep the sensor still", sample_count);

    let mut sum = Vector3d::zeros();
    for _ in 0..sample_count {
        let rate = sensor
            .read_gyro()
            .map_err(|e| helpers::sensor_error(SensorType::Gyroscope, e))?;
        sum += rate;
        clock.sleep(sample_delay);
    }

    let offsets = CalibrationOffsets::from(sum / sample_count as f32);
    info!("Gyroscope calibration complete");
    debug!("Gyro offsets: x={:.4} y={:.4} z={:.4} °/s", offsets.x, offsets.y, offsets.z);
    Ok(offsets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AhrsError;
    use crate::testing::{ManualClock, ScriptedImu};

    #[test]
    fn test_mean_of_constant_stream() {
        let mut imu = ScriptedImu::at_rest();
        imu.set_gyro(Vector3d::new(2.0, -1.0, 0.5));
        let clock = ManualClock::new();

        let offsets = calibrate(&mut imu, &clock, 50, DEFAULT_SAMPLE_DELAY).expect("Calibration should succeed");

        assert_eq!(offsets, CalibrationOffsets { x: 2.0, y: -1.0, z: 0.5 }, "Mean of a constant stream is the constant");
        assert_eq!(imu.gyro_reads(), 50, "One gyro read per sample");
    }

    #[test]
    fn test_sleeps_between_samples() {
        let mut imu = ScriptedImu::at_rest();
        let clock = ManualClock::new();
        let start = clock.now();

        calibrate(&mut imu, &clock, 20, DEFAULT_SAMPLE_DELAY).expect("Calibration should succeed");

        assert_eq!(clock.now() - start, Duration::from_millis(200), "20 samples at 10 ms each");
    }

    #[test]
    fn test_mean_of_varying_stream() {
        let mut imu = ScriptedImu::at_rest();
        imu.push_gyro(Vector3d::new(1.0, 0.0, -4.0));
        imu.push_gyro(Vector3d::new(3.0, 2.0, 0.0));
        let clock = ManualClock::new();

        let offsets = calibrate(&mut imu, &clock, 2, Duration::ZERO).expect("Calibration should succeed");

        assert_eq!(offsets, CalibrationOffsets { x: 2.0, y: 1.0, z: -2.0 });
    }

    #[test]
    fn test_read_failure_aborts() {
        let mut imu = ScriptedImu::at_rest();
        imu.fail_gyro_after(5);
        let clock = ManualClock::new();

        let result = calibrate(&mut imu, &clock, 10, DEFAULT_SAMPLE_DELAY);

        match result {
            Err(AhrsError::SensorError { sensor_type, .. }) => assert_eq!(sensor_type, SensorType::Gyroscope),
            other => panic!("Expected a gyroscope sensor error, got {:?}", other),
        }
        assert_eq!(imu.gyro_reads(), 6, "Calibration should stop at the first failed read");
    }

    #[test]
    fn test_zero_samples_rejected() {
        let mut imu = ScriptedImu::at_rest();
        let clock = ManualClock::new();

        let result = calibrate(&mut imu, &clock, 0, DEFAULT_SAMPLE_DELAY);

        assert!(matches!(result, Err(AhrsError::ConfigurationError(_))), "Zero samples is a configuration error");
        assert_eq!(imu.gyro_reads(), 0, "No reads should be issued");
    }
}
