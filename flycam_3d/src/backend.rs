/// Graphics backend seam.
///
/// The camera never draws. It hands finished view/projection matrices to a
/// `GraphicsBackend` and reads the current viewport size back for the aspect
/// ratio. `CameraUniforms` is the GPU-ready layout for backends that upload
/// camera data to a uniform buffer.

use glam::{Mat4, Vec3, Vec4};
use winit::dpi::PhysicalSize;
use crate::error::{Error, Result};

/// Viewport dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width divided by height.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidViewport` if either dimension is zero
    /// (minimized window).
    pub fn aspect_ratio(&self) -> Result<f32> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidViewport { width: self.width, height: self.height });
        }
        Ok(self.width as f32 / self.height as f32)
    }
}

impl From<PhysicalSize<u32>> for Viewport {
    fn from(size: PhysicalSize<u32>) -> Self {
        Self { width: size.width, height: size.height }
    }
}

/// Receiver of per-frame camera transforms.
pub trait GraphicsBackend {
    /// Current viewport size.
    fn viewport(&self) -> Viewport;

    /// Upload the view matrix and the eye position (for fog, lighting, ...).
    fn set_view(&mut self, view: &Mat4, position: Vec3);

    /// Upload the projection matrix.
    fn set_projection(&mut self, projection: &Mat4);
}

/// Camera data laid out for a uniform buffer (std140 compatible).
///
/// glam's column-major `Mat4` and 16-byte `Vec4` match the GPU layout
/// directly, so the block is `Pod` without padding.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniforms {
    pub view: Mat4,
    pub projection: Mat4,
    /// Eye position (w = 1)
    pub position: Vec4,
}

impl CameraUniforms {
    pub fn new(view: &Mat4, projection: &Mat4, position: Vec3) -> Self {
        Self {
            view: *view,
            projection: *projection,
            position: position.extend(1.0),
        }
    }

    /// Raw bytes for a buffer upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

/// Backend that records what the camera pushed (no GPU required)
#[cfg(test)]
#[derive(Debug)]
pub struct RecordingBackend {
    pub viewport: Viewport,
    pub view: Option<Mat4>,
    pub position: Option<Vec3>,
    pub projection: Option<Mat4>,
    pub view_uploads: usize,
    pub projection_uploads: usize,
}

#[cfg(test)]
impl RecordingBackend {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            viewport: Viewport::new(width, height),
            view: None,
            position: None,
            projection: None,
            view_uploads: 0,
            projection_uploads: 0,
        }
    }
}

#[cfg(test)]
impl GraphicsBackend for RecordingBackend {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn set_view(&mut self, view: &Mat4, position: Vec3) {
        self.view = Some(*view);
        self.position = Some(position);
        self.view_uploads += 1;
    }

    fn set_projection(&mut self, projection: &Mat4) {
        self.projection = Some(*projection);
        self.projection_uploads += 1;
    }
}

#[cfg(test)]
#[path = "backend_tests.rs"]
mod tests;
