use crate::calibration::{self, CalibrationOffsets};
use crate::clock::{Clock, SystemClock};
use crate::error::{helpers, AhrsResult, ConfigError, SensorType};
use crate::fusion::{self, FusedOrientation};
use crate::integration::{GyroIntegrator, IntegratedAngles};
use crate::tilt::{self, Tilt};
use crate::utils::apply_dead_zone;
use crate::EstimatorConfig;
use hal::{ImuSensor, Vector3d};
use log::debug;

/// Number of intervals to keep for update-rate calculation
const DEFAULT_RATE_WINDOW_SIZE: usize = 10;

/// Complementary-filter orientation estimator over a single IMU
///
/// Owns the sensor, the calibration offsets and the integrator state. Every
/// state change goes through `&mut self`, so callers sharing an estimator
/// across threads must wrap it in their own lock.
pub struct OrientationEstimator<S: ImuSensor, C: Clock = SystemClock> {
    /// Sensor the estimator reads from
    sensor: S,

    /// Time source for integration and calibration delays
    clock: C,

    /// System configuration
    config: EstimatorConfig,

    /// Gyroscope bias, zero until calibration succeeds
    offsets: CalibrationOffsets,

    /// Whether a calibration run has completed
    calibrated: bool,

    /// Gyro angle accumulator and its time base
    integrator: GyroIntegrator,

    /// Recent update intervals for rate calculation (seconds)
    update_intervals: Vec<f32>,

    /// Number of intervals to keep for rate calculation
    rate_window_size: usize,
}

impl<S: ImuSensor> OrientationEstimator<S, SystemClock> {
    /// Create an estimator reading wall-clock time from the system
    pub fn new(sensor: S, config: EstimatorConfig) -> Result<Self, ConfigError> {
        Self::with_clock(sensor, SystemClock, config)
    }
}

impl<S: ImuSensor, C: Clock> OrientationEstimator<S, C> {
    /// Create an estimator with an explicit time source
    ///
    /// The integrator starts at zero angles with its time base at
    /// `clock.now()`.
    pub fn with_clock(sensor: S, clock: C, config: EstimatorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let integrator = GyroIntegrator::new(clock.now());

        Ok(Self {
            sensor,
            clock,
            config,
            offsets: CalibrationOffsets::default(),
            calibrated: false,
            integrator,
            update_intervals: Vec::with_capacity(DEFAULT_RATE_WINDOW_SIZE),
            rate_window_size: DEFAULT_RATE_WINDOW_SIZE,
        })
    }

    /// Measure the gyroscope bias over `sample_count` stationary samples
    ///
    /// On success the offsets replace the current ones and the integration
    /// time base moves to the end of the run, so the calibration period is
    /// not integrated. On failure the estimator is left exactly as it was.
    pub fn calibrate(&mut self, sample_count: usize) -> AhrsResult<CalibrationOffsets, S::Error> {
        let offsets = calibration::calibrate(
            &mut self.sensor,
            &self.clock,
            sample_count,
            self.config.calibration_delay,
        )?;

        self.offsets = offsets;
        self.calibrated = true;
        self.integrator.restart(self.clock.now());
        Ok(offsets)
    }

    /// Calibrate with the configured sample count
    pub fn calibrate_default(&mut self) -> AhrsResult<CalibrationOffsets, S::Error> {
        self.calibrate(self.config.calibration_samples)
    }

    /// Accelerometer reading in g, uncorrected
    pub fn read_accel(&mut self) -> AhrsResult<Vector3d, S::Error> {
        self.sensor
            .read_accel()
            .map_err(|e| helpers::sensor_error(SensorType::Accelerometer, e))
    }

    /// Gyroscope rate in °/s with the bias removed and the noise gate applied
    pub fn read_gyro(&mut self) -> AhrsResult<Vector3d, S::Error> {
        let raw = self
            .sensor
            .read_gyro()
            .map_err(|e| helpers::sensor_error(SensorType::Gyroscope, e))?;
        let corrected = raw - self.offsets.to_vector();
        Ok(apply_dead_zone(&corrected, self.config.noise_threshold))
    }

    /// Roll/pitch from a fresh accelerometer reading alone
    pub fn tilt(&mut self) -> AhrsResult<Tilt, S::Error> {
        let accel = self.read_accel()?;
        Ok(tilt::tilt_from_accel(&accel))
    }

    /// Run one estimation cycle and return the fused orientation
    ///
    /// Reads the accelerometer, then the gyroscope, integrates the gyro
    /// rate up to now and blends roll/pitch with the accelerometer tilt.
    /// A failed read leaves the integrator untouched.
    pub fn update(&mut self) -> AhrsResult<FusedOrientation, S::Error> {
        let accel = self.read_accel()?;
        let rate = self.read_gyro()?;

        let now = self.clock.now();
        if let Some(interval) = self.integrator.elapsed(now) {
            self.update_intervals.push(interval);
            // Keep only the window size number of intervals
            if self.update_intervals.len() > self.rate_window_size {
                self.update_intervals.remove(0);
            }
        }

        let angles = self.integrator.integrate(&rate, now);
        let tilt = tilt::tilt_from_accel(&accel);
        let orientation = fusion::fuse(&angles, &tilt, self.config.alpha);

        debug!(
            "roll={:.2} pitch={:.2} yaw={:.2} (gyro {:.2},{:.2},{:.2} °/s)",
            orientation.roll, orientation.pitch, orientation.yaw, rate.x, rate.y, rate.z
        );
        Ok(orientation)
    }

    /// Average update rate in Hz over the recent window
    ///
    /// Returns `None` until at least one positive interval has been seen.
    pub fn update_rate(&self) -> Option<f32> {
        if self.update_intervals.is_empty() {
            return None;
        }

        let sum: f32 = self.update_intervals.iter().sum();
        let avg_interval = sum / self.update_intervals.len() as f32;

        if avg_interval > 0.0 {
            Some(1.0 / avg_interval)
        } else {
            None
        }
    }

    pub fn offsets(&self) -> CalibrationOffsets {
        self.offsets
    }

    pub fn is_calibrated(&self) -> bool {
        self.calibrated
    }

    pub fn integrated_angles(&self) -> IntegratedAngles {
        self.integrator.angles()
    }

    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Direct access to the sensor, e.g. for driver-specific diagnostics
    pub fn sensor_mut(&mut self) -> &mut S {
        &mut self.sensor
    }

    /// Consume the estimator and return the sensor
    pub fn into_inner(self) -> S {
        self.sensor
    }
}
