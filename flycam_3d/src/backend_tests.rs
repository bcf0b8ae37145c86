use glam::{Mat4, Vec3, Vec4};
use winit::dpi::PhysicalSize;
use super::*;

#[test]
fn test_viewport_aspect_ratio() {
    let viewport = Viewport::new(1920, 1080);
    assert!((viewport.aspect_ratio().unwrap() - 16.0 / 9.0).abs() < 1e-6);
}

#[test]
fn test_viewport_zero_dimension() {
    assert!(matches!(
        Viewport::new(800, 0).aspect_ratio(),
        Err(Error::InvalidViewport { width: 800, height: 0 })
    ));
    assert!(Viewport::new(0, 600).aspect_ratio().is_err());
}

#[test]
fn test_viewport_from_physical_size() {
    let viewport: Viewport = PhysicalSize::new(1280u32, 720u32).into();
    assert_eq!(viewport, Viewport::new(1280, 720));
}

#[test]
fn test_camera_uniforms_layout() {
    assert_eq!(std::mem::size_of::<CameraUniforms>(), (16 + 16 + 4) * 4);

    let view = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
    let uniforms = CameraUniforms::new(&view, &Mat4::IDENTITY, Vec3::new(4.0, 5.0, 6.0));

    assert_eq!(uniforms.view.w_axis, Vec4::new(1.0, 2.0, 3.0, 1.0));
    assert_eq!(uniforms.projection, Mat4::IDENTITY);
    assert_eq!(uniforms.position, Vec4::new(4.0, 5.0, 6.0, 1.0));

    // Translation sits in the fourth column, floats 12..15 of the view block
    let floats: &[f32] = bytemuck::cast_slice(uniforms.as_bytes());
    assert_eq!(floats.len(), 16 + 16 + 4);
    assert_eq!(&floats[12..15], &[1.0, 2.0, 3.0]);
    assert_eq!(&floats[32..36], &[4.0, 5.0, 6.0, 1.0]);
}

#[test]
fn test_recording_backend_counts_uploads() {
    let mut backend = RecordingBackend::new(640, 480);
    backend.set_view(&Mat4::IDENTITY, Vec3::ZERO);
    backend.set_projection(&Mat4::IDENTITY);
    backend.set_projection(&Mat4::IDENTITY);

    assert_eq!(backend.view_uploads, 1);
    assert_eq!(backend.projection_uploads, 2);
    assert_eq!(backend.viewport(), Viewport::new(640, 480));
}
