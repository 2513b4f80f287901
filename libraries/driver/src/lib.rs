//! # Driver - sensor drivers over the hal bus traits
//!
//! Register-level drivers for the inertial sensors used by the estimator,
//! written against [`hal::RegisterBus`] so they run on any SMBus/I2C host.

pub mod bus;
pub mod error;
pub mod imu;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use bus::I2cBus;
pub use error::DriverError;
pub use imu::{decode_word, Mpu6050, Mpu6050Config};
