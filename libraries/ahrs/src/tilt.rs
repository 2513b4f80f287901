use hal::Vector3d;

/// Roll and pitch derived from the gravity vector, in degrees
///
/// Axis convention: x forward, y left, z up. Positive roll lifts the
/// y-axis, positive pitch lifts the x-axis (nose up).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Tilt {
    pub roll: f32,
    pub pitch: f32,
}

/// Estimate roll/pitch from an accelerometer reading in g
///
/// Only meaningful while the sensor experiences no linear acceleration.
pub fn tilt_from_accel(accel: &Vector3d) -> Tilt {
    let roll = accel.y.atan2(dist(accel.x, accel.z));
    let pitch = -accel.x.atan2(dist(accel.y, accel.z));
    Tilt {
        roll: roll.to_degrees(),
        pitch: pitch.to_degrees(),
    }
}

fn dist(a: f32, b: f32) -> f32 {
    (a * a + b * b).sqrt()
}
