/*!
# Flycam 3D

Free-flying camera core for a real-time rendering loop.

This crate tracks a camera's position and orientation, integrates movement
over elapsed time, optionally confines the camera to a horizontal box, derives
view/projection transforms for a graphics backend, and extracts the six-plane
view frustum used by visibility culling.

## Architecture

- **Camera**: owned, caller-managed camera state (no global instance)
- **TimeSource**: monotonic millisecond ticks driving movement integration
- **GraphicsBackend**: receives finished view/projection matrices
- **Frustum**: corners and inward-facing planes derived from a camera pose
- **CameraConfig**: field of view, clip distances, speed and sensitivity

The world uses a left-handed convention: X increases toward the camera's left
when looking down -Z, and `right = up × front`.
*/

// Internal modules
mod error;
mod engine;
mod config;
mod time;
pub mod log;
pub mod backend;
pub mod camera;

// Main flycam namespace module
pub mod flycam {
    // Error types
    pub use crate::error::{Error, Result};

    // Logger owner
    pub use crate::engine::Engine;

    // Configuration
    pub use crate::config::CameraConfig;

    // Time sources
    pub use crate::time::{TimeSource, SystemClock, ManualClock};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Graphics backend seam
    pub mod backend {
        pub use crate::backend::*;
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }
}

// Re-export math library at crate root
pub use glam;
