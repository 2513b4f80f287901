/// IMU (Inertial Measurement Unit) sensor interface
use crate::Vector3d;

/// 6-DOF IMU interface
///
/// Each read is a single blocking transaction against the sensor and returns
/// the three axes in physical units. Implementations apply no bias
/// correction; that belongs to the estimator consuming the readings.
pub trait ImuSensor {
    /// Transport error raised when the underlying bus transaction fails
    type Error: core::fmt::Debug;

    /// Get acceleration data (in g)
    fn read_accel(&mut self) -> Result<Vector3d, Self::Error>;

    /// Get gyroscope data (in degrees/second)
    fn read_gyro(&mut self) -> Result<Vector3d, Self::Error>;
}

impl<T: ImuSensor + ?Sized> ImuSensor for &mut T {
    type Error = T::Error;

    fn read_accel(&mut self) -> Result<Vector3d, Self::Error> {
        (**self).read_accel()
    }

    fn read_gyro(&mut self) -> Result<Vector3d, Self::Error> {
        (**self).read_gyro()
    }
}
