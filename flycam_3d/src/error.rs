//! Error types for the Flycam3D camera core
//!
//! Every camera failure is a precondition violation. Operations that could
//! break an invariant report it here instead of committing the bad state.

use std::fmt;
use glam::Vec3;
use crate::camera::BoundBox;

/// Result type for Flycam3D operations
pub type Result<T> = std::result::Result<T, Error>;

/// Flycam3D errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Position lies outside the confinement box of a bounded camera
    BoundsViolation {
        /// Offending position
        position: Vec3,
        /// Active confinement box
        bounds: BoundBox,
    },

    /// Confinement box with negative or non-finite extent
    InvalidBounds(String),

    /// Viewport with a zero dimension (no aspect ratio)
    InvalidViewport {
        /// Viewport width in pixels
        width: u32,
        /// Viewport height in pixels
        height: u32,
    },

    /// Degenerate projection extent (zero width or height)
    InvalidProjection(String),

    /// Configuration value out of range
    InvalidConfig(String),

    /// Config file could not be read or written
    Io(String),

    /// Config file could not be parsed or serialized
    ConfigParse(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BoundsViolation { position, bounds } => write!(
                f,
                "Bounds violation: position ({}, {}, {}) outside x [{}, {}] z [{}, {}]",
                position.x, position.y, position.z,
                bounds.min_x(), bounds.max_x(), bounds.min_z(), bounds.max_z()
            ),
            Error::InvalidBounds(msg) => write!(f, "Invalid bounds: {}", msg),
            Error::InvalidViewport { width, height } => {
                write!(f, "Invalid viewport: {}x{}", width, height)
            }
            Error::InvalidProjection(msg) => write!(f, "Invalid projection: {}", msg),
            Error::InvalidConfig(msg) => write!(f, "Invalid config: {}", msg),
            Error::Io(msg) => write!(f, "I/O error: {}", msg),
            Error::ConfigParse(msg) => write!(f, "Config parse error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// Log an error at ERROR severity (with file:line) and evaluate to it.
///
/// # Example
///
/// ```no_run
/// # use flycam_3d::{engine_err, flycam::Error};
/// let err = engine_err!("flycam::Camera", Error::InvalidConfig("near <= 0".to_string()));
/// ```
#[macro_export]
macro_rules! engine_err {
    ($source:expr, $err:expr) => {{
        let err = $err;
        $crate::engine_error!($source, "{}", err);
        err
    }};
}

/// Log an error and return it from the enclosing function.
#[macro_export]
macro_rules! engine_bail {
    ($source:expr, $err:expr) => {
        return Err($crate::engine_err!($source, $err))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
