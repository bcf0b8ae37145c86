/// Orientation controller: yaw/pitch to front/up basis.

use glam::Vec3;
use super::camera::Camera;

/// Pitch is held within ±89° so `front` never reaches a pole.
pub const PITCH_LIMIT_DEGREES: f32 = 89.0;

/// Orthonormal `(front, up)` basis for the given angles in degrees.
///
/// Left-handed: `front.z` is negated relative to the usual spherical
/// formula, so yaw 90° looks down -Z. `up` is recomputed from `front` and
/// its horizontal perpendicular every time rather than cached.
pub fn basis_from_angles(pitch_degrees: f32, yaw_degrees: f32) -> (Vec3, Vec3) {
    let (yaw_sin, yaw_cos) = yaw_degrees.to_radians().sin_cos();
    let (pitch_sin, pitch_cos) = pitch_degrees.to_radians().sin_cos();

    let front = Vec3::new(yaw_cos * pitch_cos, pitch_sin, -yaw_sin * pitch_cos).normalize();

    // Orthogonal to front, in the XZ plane
    let xz = Vec3::new(front.z, 0.0, -front.x);
    let up = front.cross(xz).normalize();

    (front, up)
}

impl Camera {
    /// Apply a look delta: `yaw += dx * sensitivity`, `pitch -= dy * sensitivity`.
    ///
    /// Non-finite deltas, or a delta that would push yaw to infinity, are
    /// ignored and leave the orientation unchanged.
    pub fn change_direction(&mut self, dx: f32, dy: f32) {
        if !dx.is_finite() || !dy.is_finite() {
            return;
        }
        let yaw = self.yaw + dx * self.sensitivity;
        if !yaw.is_finite() {
            return;
        }
        self.yaw = yaw;
        self.pitch -= dy * self.sensitivity;
        self.rebuild_basis();
    }

    /// Assign the angles directly (initialization, teleports).
    pub fn set_pitch_and_yaw(&mut self, pitch: f32, yaw: f32) {
        self.pitch = pitch;
        self.yaw = yaw;
        self.rebuild_basis();
    }

    fn rebuild_basis(&mut self) {
        self.pitch = self.pitch.clamp(-PITCH_LIMIT_DEGREES, PITCH_LIMIT_DEGREES);
        let (front, up) = basis_from_angles(self.pitch, self.yaw);
        self.front = front;
        self.up = up;
    }
}

#[cfg(test)]
#[path = "orientation_tests.rs"]
mod tests;
