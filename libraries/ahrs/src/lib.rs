// ### AHRS Module with Complementary-Filter Orientation Estimation

// The **Attitude and Heading Reference System (AHRS) module** turns raw 6-DOF IMU readings into a
// roll/pitch/yaw estimate. Gyroscope rates are bias-corrected, gated against rest noise and
// integrated over wall-clock time; the accelerometer's gravity vector supplies a drift-free roll and
// pitch reference, and a complementary filter blends the two.

// #### **Key Features:**
// - **Gyroscope bias calibration** from a stationary sensor (mean of N samples).
// - **Noise gate** that holds the integrator still while the sensor is at rest.
// - **Accelerometer tilt** for absolute roll and pitch.
// - **Complementary filter** with a configurable gyro weight (0.98 by default).
// - **Yaw** from gyro integration only; it drifts, as nothing observes heading.

//! # AHRS - Attitude and Heading Reference System
//!
//! Orientation estimation for a 6-DOF IMU implementing [`hal::ImuSensor`].
//!
//! ```no_run
//! # fn run<S: hal::ImuSensor>(sensor: S) -> Result<(), Box<dyn std::error::Error>>
//! # where S::Error: 'static {
//! use ahrs::{EstimatorConfig, OrientationEstimator};
//!
//! let mut estimator = OrientationEstimator::new(sensor, EstimatorConfig::default())?;
//! estimator.calibrate(100)?;
//! let orientation = estimator.update()?;
//! println!("roll {:.1} pitch {:.1} yaw {:.1}", orientation.roll, orientation.pitch, orientation.yaw);
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

pub mod calibration;
pub mod clock;
pub mod error;
pub mod estimator;
pub mod fusion;
pub mod integration;
pub mod tilt;
pub mod utils;

#[cfg(test)]
mod testing;

pub use calibration::CalibrationOffsets;
pub use clock::{Clock, SystemClock};
pub use error::{AhrsError, AhrsResult, ConfigError, SensorType};
pub use estimator::OrientationEstimator;
pub use fusion::FusedOrientation;
pub use integration::IntegratedAngles;
pub use tilt::Tilt;

use error::helpers::config_error;

/// Gyro rates below this magnitude (degrees/second) are treated as rest noise
pub const DEFAULT_NOISE_THRESHOLD: f32 = 1.0;

/// Number of gyro samples averaged by a default calibration run
pub const DEFAULT_CALIBRATION_SAMPLES: usize = 100;

/// Configuration for the orientation estimator
#[derive(Debug, Clone)]
pub struct EstimatorConfig {
    /// Complementary filter weight of the integrated gyro angle, in [0, 1]
    pub alpha: f32,

    /// Dead-zone half-width applied to bias-corrected gyro rates (°/s)
    pub noise_threshold: f32,

    /// Samples averaged by [`OrientationEstimator::calibrate_default`]
    pub calibration_samples: usize,

    /// Delay between calibration samples
    pub calibration_delay: Duration,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            alpha: fusion::DEFAULT_ALPHA,
            noise_threshold: DEFAULT_NOISE_THRESHOLD,
            calibration_samples: DEFAULT_CALIBRATION_SAMPLES,
            calibration_delay: calibration::DEFAULT_SAMPLE_DELAY,
        }
    }
}

impl EstimatorConfig {
    /// Check every parameter is within its valid range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.alpha.is_finite() || !(0.0..=1.0).contains(&self.alpha) {
            return Err(config_error(format!("alpha {} must be within [0, 1]", self.alpha), "alpha"));
        }
        if !self.noise_threshold.is_finite() || self.noise_threshold < 0.0 {
            return Err(config_error(
                format!("noise threshold {} must be a non-negative number", self.noise_threshold),
                "noise_threshold",
            ));
        }
        if self.calibration_samples == 0 {
            return Err(config_error("at least one calibration sample is required", "calibration_samples"));
        }
        Ok(())
    }
}
