use crate::integration::IntegratedAngles;
use crate::tilt::Tilt;

/// Default gyroscope weight for the complementary filter
pub const DEFAULT_ALPHA: f32 = 0.98;

/// Orientation estimate in degrees
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FusedOrientation {
    pub roll: f32,
    pub pitch: f32,
    /// Gyro-only; drifts without bound
    pub yaw: f32,
}

/// Complementary filter over roll and pitch
///
/// `alpha` weights the integrated gyro angle, `1 - alpha` the accelerometer
/// tilt. Gravity carries no heading information, so yaw is the integrated
/// z angle unchanged.
pub fn fuse(gyro: &IntegratedAngles, tilt: &Tilt, alpha: f32) -> FusedOrientation {
    FusedOrientation {
        roll: alpha * gyro.x + (1.0 - alpha) * tilt.roll,
        pitch: alpha * gyro.y + (1.0 - alpha) * tilt.pitch,
        yaw: gyro.z,
    }
}
