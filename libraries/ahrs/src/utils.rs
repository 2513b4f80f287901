use hal::Vector3d;

/// Zero every axis whose magnitude is below `threshold`
///
/// Values at or above the threshold pass through unchanged.
pub fn apply_dead_zone(value: &Vector3d, threshold: f32) -> Vector3d {
    value.map(|v| if v.abs() < threshold { 0.0 } else { v })
}
