use std::env;
use std::time::Duration;

use ahrs::EstimatorConfig;
use anyhow::{bail, Context};
use driver::Mpu6050Config;

/// Host-side settings for the polling loop
#[derive(Debug, Clone)]
pub struct BoardConfig {
    /// I2C character device the sensor sits on
    pub i2c_path: String,

    /// Sensor driver settings
    pub sensor: Mpu6050Config,

    /// Delay between estimation cycles
    pub poll_interval: Duration,

    /// Estimator settings
    pub estimator: EstimatorConfig,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            i2c_path: "/dev/i2c-1".to_string(),
            sensor: Mpu6050Config::default(),
            poll_interval: Duration::from_secs(1),
            estimator: EstimatorConfig::default(),
        }
    }
}

impl BoardConfig {
    /// Defaults overridden by `IMU_I2C_PATH`, `IMU_ADDRESS`, `IMU_POLL_MS`
    /// and `IMU_CALIBRATION_SAMPLES`
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Ok(path) = env::var("IMU_I2C_PATH") {
            config.i2c_path = path;
        }
        if let Ok(address) = env::var("IMU_ADDRESS") {
            config.sensor.address = parse_address(&address)?;
        }
        if let Ok(ms) = env::var("IMU_POLL_MS") {
            let ms: u64 = ms.parse().with_context(|| format!("IMU_POLL_MS `{ms}` is not a number"))?;
            config.poll_interval = Duration::from_millis(ms);
        }
        if let Ok(samples) = env::var("IMU_CALIBRATION_SAMPLES") {
            config.estimator.calibration_samples = samples
                .parse()
                .with_context(|| format!("IMU_CALIBRATION_SAMPLES `{samples}` is not a number"))?;
        }

        config.estimator.validate()?;
        Ok(config)
    }
}

/// Parse a 7-bit device address given as hex (`0x68`) or decimal (`104`)
fn parse_address(text: &str) -> anyhow::Result<u8> {
    let value = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => text.parse(),
    }
    .with_context(|| format!("IMU_ADDRESS `{text}` is not a valid address"))?;

    if value > 0x7F {
        bail!("IMU_ADDRESS {value:#04x} is outside the 7-bit range");
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_address() {
        assert_eq!(parse_address("0x68").unwrap(), 0x68);
        assert_eq!(parse_address("0X69").unwrap(), 0x69);
        assert_eq!(parse_address("104").unwrap(), 0x68);
        assert!(parse_address("0x80").is_err(), "8-bit addresses should be rejected");
        assert!(parse_address("imu").is_err(), "Garbage should be rejected");
    }

    #[test]
    fn test_defaults() {
        let config = BoardConfig::default();
        assert_eq!(config.i2c_path, "/dev/i2c-1");
        assert_eq!(config.sensor.address, 0x68);
        assert_eq!(config.poll_interval, Duration::from_secs(1), "Default cadence is one cycle per second");
    }
}
