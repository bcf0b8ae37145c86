//! Camera configuration with TOML persistence.
//!
//! Projection constants (field of view, clip distances) and the default
//! movement scalars live here. Partial TOML files fall back to defaults.

use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::error::{Error, Result};
use crate::{engine_bail, engine_err, engine_info};

/// Projection constants and movement scalars for a camera.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    /// Near clipping plane distance.
    pub near: f32,
    /// Far clipping plane (draw) distance.
    pub draw_distance: f32,
    /// Translation speed in world units per millisecond.
    pub speed: f32,
    /// Look sensitivity in degrees per input unit.
    pub sensitivity: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 45.0,
            near: 0.1,
            draw_distance: 1000.0,
            speed: 0.05,
            sensitivity: 0.05,
        }
    }
}

impl CameraConfig {
    /// Vertical field of view in radians.
    pub fn fov_radians(&self) -> f32 {
        self.fov_degrees.to_radians()
    }

    /// Check every value is in range.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if !(self.fov_degrees > 0.0 && self.fov_degrees < 180.0) {
            engine_bail!("flycam::CameraConfig", Error::InvalidConfig(format!(
                "fov_degrees must be in (0, 180), got {}", self.fov_degrees
            )));
        }
        if !(self.near > 0.0 && self.near.is_finite()) {
            engine_bail!("flycam::CameraConfig", Error::InvalidConfig(format!(
                "near must be positive, got {}", self.near
            )));
        }
        if !(self.draw_distance > self.near && self.draw_distance.is_finite()) {
            engine_bail!("flycam::CameraConfig", Error::InvalidConfig(format!(
                "draw_distance must exceed near ({}), got {}", self.near, self.draw_distance
            )));
        }
        if !self.speed.is_finite() || !self.sensitivity.is_finite() {
            engine_bail!("flycam::CameraConfig", Error::InvalidConfig(
                "speed and sensitivity must be finite".to_string()
            ));
        }
        Ok(())
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| engine_err!("flycam::CameraConfig", Error::ConfigParse(e.to_string())))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty-printed TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| engine_err!("flycam::CameraConfig", Error::ConfigParse(e.to_string())))
    }

    /// Load config from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| engine_err!("flycam::CameraConfig", Error::Io(e.to_string())))?;
        let config = Self::from_toml_str(&content)?;
        engine_info!("flycam::CameraConfig", "Loaded camera config from {}", path.display());
        Ok(config)
    }

    /// Save config to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = self.to_toml_string()?;
        std::fs::write(path, content)
            .map_err(|e| engine_err!("flycam::CameraConfig", Error::Io(e.to_string())))?;
        engine_info!("flycam::CameraConfig", "Saved camera config to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
