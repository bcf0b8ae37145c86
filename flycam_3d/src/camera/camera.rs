/// Camera: free-flying viewpoint state.
///
/// Owns position, the front/up basis derived from yaw/pitch, the speed and
/// sensitivity scalars, the optional confinement box, and the tick baseline
/// used by movement integration. Movement lives in `movement.rs`, look input
/// in `orientation.rs`, matrices in `transform.rs`.
///
/// Bounds invariant: while a box is set, `position.x` and `position.z` lie
/// inside it after every mutation. Mutations that would break it are
/// rejected with `Error::BoundsViolation` and leave the camera unchanged.

use std::fmt;
use glam::Vec3;
use crate::config::CameraConfig;
use crate::error::{Error, Result};
use crate::time::{TimeSource, SystemClock};
use crate::{engine_bail, engine_debug, engine_err};
use super::bound_box::BoundBox;

/// Yaw of a fresh camera: looking down -Z.
const INITIAL_YAW_DEGREES: f32 = 90.0;

/// Free-flying camera. One instance per logical viewpoint, owned by the caller.
pub struct Camera {
    pub(super) config: CameraConfig,

    pub(super) speed: f32,
    pub(super) sensitivity: f32,

    pub(super) position: Vec3,
    pub(super) front: Vec3,
    pub(super) up: Vec3,

    pub(super) pitch: f32,
    pub(super) yaw: f32,

    pub(super) last_tick_ms: Option<u32>,

    pub(super) bounds: Option<BoundBox>,

    pub(super) clock: Box<dyn TimeSource>,
}

impl Camera {
    /// Create a camera at the origin looking down -Z.
    ///
    /// Speed and sensitivity start at the config values.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if the config fails validation.
    pub fn new<C: TimeSource + 'static>(config: CameraConfig, clock: C) -> Result<Self> {
        config.validate()?;

        let mut camera = Self {
            config,
            speed: config.speed,
            sensitivity: config.sensitivity,
            position: Vec3::ZERO,
            front: Vec3::NEG_Z,
            up: Vec3::Y,
            pitch: 0.0,
            yaw: INITIAL_YAW_DEGREES,
            last_tick_ms: None,
            bounds: None,
            clock: Box::new(clock),
        };
        camera.set_pitch_and_yaw(0.0, INITIAL_YAW_DEGREES);
        Ok(camera)
    }

    /// Create a camera driven by the wall clock.
    pub fn with_system_clock(config: CameraConfig) -> Result<Self> {
        Self::new(config, SystemClock::new())
    }

    // ===== GETTERS =====

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Height above the XZ plane (`position.y`).
    pub fn height(&self) -> f32 {
        self.position.y
    }

    /// Unit view direction.
    pub fn front(&self) -> Vec3 {
        self.front
    }

    /// Unit up vector, orthogonal to `front`.
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Unit screen-right vector (`up × front`, left-handed).
    pub fn right(&self) -> Vec3 {
        self.up.cross(self.front).normalize()
    }

    /// Pitch in degrees, always within ±`PITCH_LIMIT_DEGREES`.
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Yaw in degrees.
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Translation speed in world units per millisecond.
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Look sensitivity in degrees per input unit.
    pub fn sensitivity(&self) -> f32 {
        self.sensitivity
    }

    /// Tick of the last `mark_frame`, if any.
    pub fn last_tick_ms(&self) -> Option<u32> {
        self.last_tick_ms
    }

    pub fn is_restricted(&self) -> bool {
        self.bounds.is_some()
    }

    /// Active confinement box, if restricted.
    pub fn bounds(&self) -> Option<&BoundBox> {
        self.bounds.as_ref()
    }

    // ===== SETTERS =====

    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` for a non-finite speed; the old speed is kept.
    pub fn set_speed(&mut self, speed: f32) -> Result<()> {
        if !speed.is_finite() {
            engine_bail!("flycam::Camera", Error::InvalidConfig(format!(
                "speed must be finite, got {}", speed
            )));
        }
        self.speed = speed;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` for a non-finite sensitivity.
    pub fn set_sensitivity(&mut self, sensitivity: f32) -> Result<()> {
        if !sensitivity.is_finite() {
            engine_bail!("flycam::Camera", Error::InvalidConfig(format!(
                "sensitivity must be finite, got {}", sensitivity
            )));
        }
        self.sensitivity = sensitivity;
        Ok(())
    }

    /// Teleport to `position` without integration or clamping.
    ///
    /// # Errors
    ///
    /// Returns `Error::BoundsViolation` if the camera is restricted and
    /// `position` lies outside the box; the camera does not move.
    pub fn set_position(&mut self, position: Vec3) -> Result<()> {
        self.check_in_bounds(position)?;
        self.position = position;
        Ok(())
    }

    /// Confine the camera's horizontal position to `bounds`.
    ///
    /// # Errors
    ///
    /// - `Error::InvalidBounds` for a negative or non-finite box
    /// - `Error::BoundsViolation` if the current position lies outside `bounds`
    ///
    /// On error the previous restriction (if any) stays in place.
    pub fn restrict_to_box(&mut self, bounds: BoundBox) -> Result<()> {
        bounds.validate()
            .map_err(|e| engine_err!("flycam::Camera", e))?;
        if !bounds.contains(self.position) {
            return Err(report_violation(self.position, bounds));
        }

        self.bounds = Some(bounds);
        engine_debug!(
            "flycam::Camera",
            "Restricted to x [{}, {}] z [{}, {}]",
            bounds.min_x(), bounds.max_x(), bounds.min_z(), bounds.max_z()
        );
        Ok(())
    }

    /// Remove the confinement box.
    pub fn unrestrict(&mut self) {
        if self.bounds.take().is_some() {
            engine_debug!("flycam::Camera", "Position restriction released");
        }
    }

    // ===== TICK BASELINE =====

    /// Record the current tick as the movement baseline.
    ///
    /// This is the only operation that advances an existing baseline; the
    /// `finalize_*` calls invoke it once per frame, so every movement call
    /// within a frame integrates against the same elapsed time.
    pub fn mark_frame(&mut self) {
        self.last_tick_ms = Some(self.clock.now_ms());
    }

    /// Forget the baseline. The next movement call moves by zero.
    pub fn reset_tick(&mut self) {
        self.last_tick_ms = None;
    }

    /// Milliseconds since the baseline, establishing it if unset.
    pub(super) fn elapsed_ms(&mut self) -> u32 {
        let now = self.clock.now_ms();
        let last = *self.last_tick_ms.get_or_insert(now);
        now.wrapping_sub(last)
    }

    pub(super) fn check_in_bounds(&self, position: Vec3) -> Result<()> {
        match self.bounds {
            Some(bounds) if !bounds.contains(position) => Err(report_violation(position, bounds)),
            _ => Ok(()),
        }
    }
}

/// Build, log, and (with `strict-invariants`) assert on a bounds violation.
fn report_violation(position: Vec3, bounds: BoundBox) -> Error {
    let err = Error::BoundsViolation { position, bounds };
    #[cfg(feature = "strict-invariants")]
    debug_assert!(false, "camera invariant violated: {}", err);
    engine_err!("flycam::Camera", err)
}

impl fmt::Debug for Camera {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Camera")
            .field("position", &self.position)
            .field("front", &self.front)
            .field("up", &self.up)
            .field("pitch", &self.pitch)
            .field("yaw", &self.yaw)
            .field("speed", &self.speed)
            .field("sensitivity", &self.sensitivity)
            .field("last_tick_ms", &self.last_tick_ms)
            .field("bounds", &self.bounds)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
