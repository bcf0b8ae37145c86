/// Movement integrator.
///
/// Each move scales a unit direction by `elapsed_ms * speed`, where elapsed
/// time is measured from the tick baseline set by the last `mark_frame`.
/// A bounded camera is clamped into its box after every step.

use bitflags::bitflags;
use glam::Vec3;
use crate::error::Result;
use super::camera::Camera;

bitflags! {
    /// Directional intents gathered by the input layer for one frame.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct MoveIntent: u8 {
        const FORWARD  = 1 << 0;
        const BACKWARD = 1 << 1;
        const LEFT     = 1 << 2;
        const RIGHT    = 1 << 3;
    }
}

impl Camera {
    /// Strafe toward the camera's left (`front × up`).
    pub fn move_left(&mut self) -> Result<()> {
        let distance = self.step_distance();
        let left = self.front.cross(self.up).normalize();
        self.translate(left * distance)
    }

    /// Strafe toward the camera's right.
    pub fn move_right(&mut self) -> Result<()> {
        let distance = self.step_distance();
        let left = self.front.cross(self.up).normalize();
        self.translate(-left * distance)
    }

    /// Advance along `front`.
    pub fn move_forward(&mut self) -> Result<()> {
        let distance = self.step_distance();
        self.translate(self.front * distance)
    }

    /// Retreat along `front`.
    pub fn move_backward(&mut self) -> Result<()> {
        let distance = self.step_distance();
        self.translate(-self.front * distance)
    }

    /// Move along an arbitrary direction (normalized here).
    ///
    /// A zero-length or non-finite `dir` is a no-op: nothing changes, not
    /// even the tick baseline.
    pub fn move_in_direction(&mut self, dir: Vec3) -> Result<()> {
        let Some(dir) = dir.try_normalize() else {
            return Ok(());
        };
        let distance = self.step_distance();
        self.translate(dir * distance)
    }

    /// Apply every intent in `intents` (forward, backward, left, right order).
    ///
    /// All steps share the current frame's elapsed time. Stops at the first
    /// error.
    pub fn apply_intents(&mut self, intents: MoveIntent) -> Result<()> {
        if intents.contains(MoveIntent::FORWARD) {
            self.move_forward()?;
        }
        if intents.contains(MoveIntent::BACKWARD) {
            self.move_backward()?;
        }
        if intents.contains(MoveIntent::LEFT) {
            self.move_left()?;
        }
        if intents.contains(MoveIntent::RIGHT) {
            self.move_right()?;
        }
        Ok(())
    }

    fn step_distance(&mut self) -> f32 {
        self.elapsed_ms() as f32 * self.speed
    }

    /// Add `delta`, clamp into the box, then commit if the invariant holds.
    fn translate(&mut self, delta: Vec3) -> Result<()> {
        let mut next = self.position + delta;
        if let Some(bounds) = &self.bounds {
            next = bounds.clamp(next);
        }
        self.check_in_bounds(next)?;
        self.position = next;
        Ok(())
    }
}

#[cfg(test)]
#[path = "movement_tests.rs"]
mod tests;
