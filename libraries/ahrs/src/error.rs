use thiserror::Error;
use std::fmt;

/// Primary error type for the AHRS crate
///
/// `E` is the transport error of the sensor the estimator reads from.
#[derive(Error, Debug)]
pub enum AhrsError<E: fmt::Debug> {
    /// A sensor read failed; the bus error is carried unchanged
    #[error("Sensor error ({sensor_type}): {cause:?}")]
    SensorError {
        /// The sensor that caused the error
        sensor_type: SensorType,
        /// Error reported by the sensor
        cause: E,
    },

    /// Configuration errors
    #[error(transparent)]
    ConfigurationError(#[from] ConfigError),
}

impl<E: fmt::Debug> AhrsError<E> {
    /// Sensor that failed, if this is a sensor error
    pub fn sensor_type(&self) -> Option<SensorType> {
        match self {
            AhrsError::SensorError { sensor_type, .. } => Some(*sensor_type),
            AhrsError::ConfigurationError(_) => None,
        }
    }
}

/// Invalid estimator setting
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Configuration error: {message} (parameter `{parameter}`)")]
pub struct ConfigError {
    /// Detailed error message
    pub message: String,
    /// Configuration parameter that caused the error
    pub parameter: &'static str,
}

/// Types of sensors that could generate errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorType {
    /// Accelerometer half of the IMU
    Accelerometer,
    /// Gyroscope half of the IMU
    Gyroscope,
}

impl fmt::Display for SensorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SensorType::Accelerometer => write!(f, "Accelerometer"),
            SensorType::Gyroscope => write!(f, "Gyroscope"),
        }
    }
}

/// Helper functions for creating common errors
pub mod helpers {
    use super::*;

    /// Create a sensor error
    pub fn sensor_error<E: fmt::Debug>(sensor_type: SensorType, cause: E) -> AhrsError<E> {
        AhrsError::SensorError { sensor_type, cause }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>, parameter: &'static str) -> ConfigError {
        ConfigError {
            message: message.into(),
            parameter,
        }
    }
}

/// Type alias for Result with AhrsError
pub type AhrsResult<T, E> = Result<T, AhrsError<E>>;
