use std::thread;

use ahrs::tilt::tilt_from_accel;
use ahrs::OrientationEstimator;
use anyhow::{anyhow, Context};
use driver::{I2cBus, Mpu6050};
use hal::ImuSensor;
use linux_embedded_hal::I2cdev;
use log::{debug, info, warn};

mod config;

use config::BoardConfig;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = BoardConfig::from_env()?;
    info!("Opening {} (device {:#04x})", config.i2c_path, config.sensor.address);

    let i2c = I2cdev::new(&config.i2c_path).with_context(|| format!("Failed to open {}", config.i2c_path))?;
    let mut sensor = Mpu6050::new(I2cBus::new(i2c), config.sensor)
        .map_err(|err| anyhow!("Failed to wake the MPU-6050: {err}"))?;

    match sensor.self_test() {
        Ok(true) => debug!("MPU-6050 chip ID verified"),
        Ok(false) => warn!("Unexpected WHO_AM_I value, continuing anyway"),
        Err(err) => warn!("WHO_AM_I read failed: {err}"),
    }

    let mut estimator = OrientationEstimator::new(sensor, config.estimator.clone())?;
    estimator
        .calibrate_default()
        .map_err(|err| anyhow!("Gyroscope calibration failed: {err}"))?;

    loop {
        report_raw(&mut estimator);

        match estimator.update() {
            Ok(orientation) => info!(
                "Orientation (°): roll {:.3}, pitch {:.3}, yaw {:.3}",
                orientation.roll, orientation.pitch, orientation.yaw
            ),
            Err(err) => warn!("Update cycle failed: {err}"),
        }

        if let Some(rate) = estimator.update_rate() {
            debug!("Update rate: {:.2} Hz", rate);
        }

        thread::sleep(config.poll_interval);
    }
}

/// Log the corrected gyro rate, raw acceleration and accelerometer tilt
fn report_raw<S: ImuSensor>(estimator: &mut OrientationEstimator<S>) {
    if !log::log_enabled!(log::Level::Debug) {
        return;
    }

    match (estimator.read_gyro(), estimator.read_accel()) {
        (Ok(gyro), Ok(accel)) => {
            let tilt = tilt_from_accel(&accel);
            debug!("Gyroscope (°/s): X {:.3}, Y {:.3}, Z {:.3}", gyro.x, gyro.y, gyro.z);
            debug!("Accelerometer (g): X {:.3}, Y {:.3}, Z {:.3}", accel.x, accel.y, accel.z);
            debug!("Tilt (°): roll {:.3}, pitch {:.3}", tilt.roll, tilt.pitch);
        }
        (Err(err), _) | (_, Err(err)) => warn!("Sensor report failed: {err}"),
    }
}
