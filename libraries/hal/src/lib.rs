//! Hardware abstraction for the orientation estimator
//!
//! Two seams: [`RegisterBus`] is what sensor drivers consume, [`ImuSensor`]
//! is what the estimator consumes.
#![no_std]
extern crate nalgebra;

mod bus;
mod imu;

pub use bus::*;
pub use imu::*;

/// 3D vector representation using nalgebra
pub type Vector3d = nalgebra::Vector3<f32>;
