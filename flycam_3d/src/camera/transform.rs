/// Transform builder: view/projection matrices and the per-frame finalize.
///
/// `build_*` are pure. `finalize_*` push the matrices to the backend and
/// then call `mark_frame`, tying the movement baseline to the render cadence.

use glam::{Mat4, Vec2};
use crate::backend::{CameraUniforms, GraphicsBackend, Viewport};
use crate::error::{Error, Result};
use crate::engine_err;
use super::camera::Camera;
use super::frustum::{Frustum, PerspectiveParams};

impl Camera {
    /// Left-handed look-at from `position` toward `position + front`.
    pub fn build_view_matrix(&self) -> Mat4 {
        Mat4::look_at_lh(self.position, self.position + self.front, self.up)
    }

    /// Projection parameters for `viewport`, from the config's fov and clip distances.
    pub fn perspective_params(&self, viewport: Viewport) -> Result<PerspectiveParams> {
        let aspect_ratio = viewport.aspect_ratio()
            .map_err(|e| engine_err!("flycam::Camera", e))?;
        Ok(PerspectiveParams {
            fov_y_radians: self.config.fov_radians(),
            aspect_ratio,
            near: self.config.near,
            far: self.config.draw_distance,
        })
    }

    /// Perspective projection for `viewport`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidViewport` for a zero-sized viewport.
    pub fn build_proj_matrix(&self, viewport: Viewport) -> Result<Mat4> {
        let params = self.perspective_params(viewport)?;
        Ok(Mat4::perspective_lh(params.fov_y_radians, params.aspect_ratio, params.near, params.far))
    }

    /// Orthographic projection over `[bottom_left, top_right]` with the
    /// config's near/draw distance range.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidProjection` if the extent has zero width or height.
    pub fn build_ortho_matrix(&self, bottom_left: Vec2, top_right: Vec2) -> Result<Mat4> {
        if bottom_left.x == top_right.x || bottom_left.y == top_right.y {
            return Err(engine_err!("flycam::Camera", Error::InvalidProjection(format!(
                "empty orthographic extent {:?} .. {:?}", bottom_left, top_right
            ))));
        }
        Ok(Mat4::orthographic_lh(
            bottom_left.x, top_right.x,
            bottom_left.y, top_right.y,
            self.config.near, self.config.draw_distance,
        ))
    }

    /// View frustum for the current pose and `viewport`.
    pub fn make_frustum(&self, viewport: Viewport) -> Result<Frustum> {
        let params = self.perspective_params(viewport)?;
        Ok(Frustum::from_pose(self.position, self.front, self.up, &params))
    }

    /// Uniform block for the current view and the given projection.
    pub fn uniforms(&self, projection: &Mat4) -> CameraUniforms {
        CameraUniforms::new(&self.build_view_matrix(), projection, self.position)
    }

    /// Push view + perspective projection to `backend`, then `mark_frame`.
    ///
    /// On error nothing is pushed and the baseline is left untouched.
    pub fn finalize_perspective(&mut self, backend: &mut dyn GraphicsBackend) -> Result<()> {
        let projection = self.build_proj_matrix(backend.viewport())?;
        self.push(backend, &projection);
        Ok(())
    }

    /// Push view + orthographic projection to `backend`, then `mark_frame`.
    pub fn finalize_orthographic(
        &mut self,
        backend: &mut dyn GraphicsBackend,
        bottom_left: Vec2,
        top_right: Vec2,
    ) -> Result<()> {
        let projection = self.build_ortho_matrix(bottom_left, top_right)?;
        self.push(backend, &projection);
        Ok(())
    }

    fn push(&mut self, backend: &mut dyn GraphicsBackend, projection: &Mat4) {
        let view = self.build_view_matrix();
        backend.set_view(&view, self.position);
        backend.set_projection(projection);
        self.mark_frame();
    }
}

#[cfg(test)]
#[path = "transform_tests.rs"]
mod tests;
