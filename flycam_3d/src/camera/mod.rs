//! Camera module: free-flying camera, confinement box, and frustum.
//!
//! A `Camera` is owned and driven by the caller: one instance per logical
//! viewpoint, touched once per frame by the render/input thread. Nothing
//! here is global and nothing is implicitly shared.
//!
//! Per frame: look input → `change_direction`, movement input → `move_*`,
//! then `finalize_perspective` / `finalize_orthographic` pushes the matrices
//! and advances the tick baseline, then optionally `make_frustum` for culling.

mod bound_box;
mod camera;
mod movement;
mod orientation;
mod transform;
mod frustum;

pub use bound_box::BoundBox;
pub use camera::Camera;
pub use movement::MoveIntent;
pub use orientation::{basis_from_angles, PITCH_LIMIT_DEGREES};
pub use frustum::{
    Frustum, FrustumTest, PerspectiveParams, Plane, AABB,
    PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP, PLANE_NEAR, PLANE_FAR,
    PLANE_TOLERANCE,
};
