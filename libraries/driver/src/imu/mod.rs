// IMU driver module
//
// Register-level drivers for 6-DOF inertial sensors. Every driver reads its
// axis registers as big-endian two's-complement words through `decode_word`.

pub mod mpu6050;

pub use self::mpu6050::{Mpu6050, Mpu6050Config};

/// Combine a high/low register pair into a signed 16-bit value
///
/// The pair is first assembled into `v = (high << 8) | low`; values at or
/// above 0x8000 are sign-extended as `v - 65536`.
pub fn decode_word(high: u8, low: u8) -> i16 {
    let value = ((high as u16) << 8) | low as u16;
    if value >= 0x8000 {
        (value as i32 - 0x1_0000) as i16
    } else {
        value as i16
    }
}
