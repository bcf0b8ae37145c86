/// BoundBox: horizontal confinement region for a bounded camera.
///
/// X increases toward the box's left edge: `x` is the maximum X and
/// `x - width` the minimum. Z runs from `z` up to `z + height`.
/// Y is never confined.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use crate::error::{Error, Result};

/// Axis-aligned rectangle in the XZ plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundBox {
    /// Maximum X (left edge)
    pub x: f32,
    /// Minimum Z
    pub z: f32,
    /// Extent along -X
    pub width: f32,
    /// Extent along +Z
    pub height: f32,
}

impl BoundBox {
    pub fn new(x: f32, z: f32, width: f32, height: f32) -> Self {
        Self { x, z, width, height }
    }

    pub fn min_x(&self) -> f32 {
        self.x - self.width
    }

    pub fn max_x(&self) -> f32 {
        self.x
    }

    pub fn min_z(&self) -> f32 {
        self.z
    }

    pub fn max_z(&self) -> f32 {
        self.z + self.height
    }

    /// Whether `position.x` and `position.z` lie inside the box (edges included).
    pub fn contains(&self, position: Vec3) -> bool {
        (position.x <= self.max_x() && position.x >= self.min_x())
            && (position.z >= self.min_z() && position.z <= self.max_z())
    }

    /// Clamp `position.x` and `position.z` into the box; `y` is kept.
    pub fn clamp(&self, position: Vec3) -> Vec3 {
        Vec3::new(
            position.x.min(self.max_x()).max(self.min_x()),
            position.y,
            position.z.max(self.min_z()).min(self.max_z()),
        )
    }

    /// Reject boxes that could never hold a position.
    pub fn validate(&self) -> Result<()> {
        let finite = self.x.is_finite()
            && self.z.is_finite()
            && self.width.is_finite()
            && self.height.is_finite();
        if !finite {
            return Err(Error::InvalidBounds(format!("non-finite box {:?}", self)));
        }
        if self.width < 0.0 || self.height < 0.0 {
            return Err(Error::InvalidBounds(format!(
                "negative extent {}x{}", self.width, self.height
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "bound_box_tests.rs"]
mod tests;
