use glam::Vec3;
use crate::config::CameraConfig;
use crate::time::ManualClock;
use super::super::BoundBox;
use super::*;

/// Camera at the origin looking down -Z, speed 0.05/ms, baseline at t=1000.
fn create_test_camera() -> (Camera, ManualClock) {
    let clock = ManualClock::new(1000);
    let mut camera = Camera::new(CameraConfig::default(), clock.clone()).unwrap();
    camera.mark_frame();
    (camera, clock)
}

fn assert_vec_near(actual: Vec3, expected: Vec3) {
    assert!(
        (actual - expected).length() < 1e-4,
        "expected {:?}, got {:?}", expected, actual
    );
}

// ============================================================================
// Elapsed-time baseline
// ============================================================================

#[test]
fn test_first_move_without_baseline_is_zero() {
    let clock = ManualClock::new(5000);
    let mut camera = Camera::new(CameraConfig::default(), clock.clone()).unwrap();

    camera.move_forward().unwrap();

    assert_eq!(camera.position(), Vec3::ZERO);
    assert_eq!(camera.last_tick_ms(), Some(5000));
}

#[test]
fn test_move_after_reset_tick_is_zero() {
    let (mut camera, clock) = create_test_camera();
    clock.advance(100);
    camera.reset_tick();

    camera.move_forward().unwrap();
    assert_eq!(camera.position(), Vec3::ZERO);
}

#[test]
fn test_move_forward_scales_by_elapsed_and_speed() {
    let (mut camera, clock) = create_test_camera();
    clock.advance(100);

    camera.move_forward().unwrap();

    // 100ms * 0.05 = 5 units along -Z
    assert_vec_near(camera.position(), Vec3::new(0.0, 0.0, -5.0));
}

#[test]
fn test_moves_within_a_frame_share_the_baseline() {
    let (mut camera, clock) = create_test_camera();
    clock.advance(100);

    camera.move_forward().unwrap();
    camera.move_forward().unwrap();

    assert_vec_near(camera.position(), Vec3::new(0.0, 0.0, -10.0));
    assert_eq!(camera.last_tick_ms(), Some(1000));
}

#[test]
fn test_elapsed_across_tick_wrap() {
    let clock = ManualClock::new(u32::MAX - 9);
    let mut camera = Camera::new(CameraConfig::default(), clock.clone()).unwrap();
    camera.mark_frame();
    clock.advance(20);

    camera.move_forward().unwrap();
    assert_vec_near(camera.position(), Vec3::new(0.0, 0.0, -1.0));
}

// ============================================================================
// Directions
// ============================================================================

#[test]
fn test_move_backward() {
    let (mut camera, clock) = create_test_camera();
    clock.advance(100);
    camera.move_backward().unwrap();
    assert_vec_near(camera.position(), Vec3::new(0.0, 0.0, 5.0));
}

#[test]
fn test_move_left_increases_x() {
    let (mut camera, clock) = create_test_camera();
    clock.advance(100);
    camera.move_left().unwrap();
    assert_vec_near(camera.position(), Vec3::new(5.0, 0.0, 0.0));
}

#[test]
fn test_move_right_decreases_x() {
    let (mut camera, clock) = create_test_camera();
    clock.advance(100);
    camera.move_right().unwrap();
    assert_vec_near(camera.position(), Vec3::new(-5.0, 0.0, 0.0));
    assert_vec_near(camera.position().normalize(), camera.right());
}

#[test]
fn test_move_in_direction_normalizes() {
    let (mut camera, clock) = create_test_camera();
    clock.advance(100);
    camera.move_in_direction(Vec3::new(30.0, 0.0, 40.0)).unwrap();
    assert_vec_near(camera.position(), Vec3::new(3.0, 0.0, 4.0));
}

#[test]
fn test_move_in_direction_zero_is_noop() {
    let clock = ManualClock::new(777);
    let mut camera = Camera::new(CameraConfig::default(), clock.clone()).unwrap();
    camera.set_position(Vec3::new(1.0, 2.0, 3.0)).unwrap();

    camera.move_in_direction(Vec3::ZERO).unwrap();

    assert_eq!(camera.position(), Vec3::new(1.0, 2.0, 3.0));
    // Not even the baseline is established
    assert!(camera.last_tick_ms().is_none());
}

#[test]
fn test_move_in_direction_non_finite_is_noop() {
    let (mut camera, clock) = create_test_camera();
    clock.advance(100);
    camera.move_in_direction(Vec3::new(f32::NAN, 0.0, 1.0)).unwrap();
    assert_eq!(camera.position(), Vec3::ZERO);
}

#[test]
fn test_move_follows_orientation() {
    let (mut camera, clock) = create_test_camera();
    camera.set_pitch_and_yaw(0.0, 0.0); // front = +X
    clock.advance(100);

    camera.move_forward().unwrap();
    assert_vec_near(camera.position(), Vec3::new(5.0, 0.0, 0.0));
}

// ============================================================================
// Intents
// ============================================================================

#[test]
fn test_apply_intents() {
    let (mut camera, clock) = create_test_camera();
    clock.advance(100);

    camera.apply_intents(MoveIntent::FORWARD | MoveIntent::LEFT).unwrap();
    assert_vec_near(camera.position(), Vec3::new(5.0, 0.0, -5.0));
}

#[test]
fn test_apply_opposite_intents_cancel() {
    let (mut camera, clock) = create_test_camera();
    clock.advance(100);

    camera.apply_intents(MoveIntent::all()).unwrap();
    assert_vec_near(camera.position(), Vec3::ZERO);
}

#[test]
fn test_apply_empty_intents() {
    let (mut camera, clock) = create_test_camera();
    clock.advance(100);
    camera.apply_intents(MoveIntent::empty()).unwrap();
    assert_eq!(camera.position(), Vec3::ZERO);
}

// ============================================================================
// Bounds
// ============================================================================

#[test]
fn test_bounded_move_clamps() {
    let (mut camera, clock) = create_test_camera();
    camera.restrict_to_box(BoundBox::new(10.0, -10.0, 20.0, 20.0)).unwrap();
    clock.advance(1000); // 50 units

    camera.move_forward().unwrap();
    assert_vec_near(camera.position(), Vec3::new(0.0, 0.0, -10.0));

    camera.move_left().unwrap();
    assert_vec_near(camera.position(), Vec3::new(10.0, 0.0, -10.0));
}

#[test]
fn test_bounded_move_keeps_height_free() {
    let (mut camera, clock) = create_test_camera();
    camera.restrict_to_box(BoundBox::new(1.0, -1.0, 2.0, 2.0)).unwrap();
    clock.advance(200);

    camera.move_in_direction(Vec3::Y).unwrap();
    assert_vec_near(camera.position(), Vec3::new(0.0, 10.0, 0.0));
}

#[test]
fn test_bounds_hold_after_every_move() {
    let (mut camera, clock) = create_test_camera();
    let bounds = BoundBox::new(25.0, -30.0, 40.0, 45.0);
    camera.restrict_to_box(bounds).unwrap();
    camera.set_speed(0.2).unwrap();

    let intents = [
        MoveIntent::FORWARD,
        MoveIntent::LEFT,
        MoveIntent::FORWARD | MoveIntent::RIGHT,
        MoveIntent::BACKWARD,
        MoveIntent::RIGHT,
    ];

    for step in 0..200u32 {
        clock.advance(7 + step % 13);
        camera.change_direction((step % 17) as f32 * 20.0, (step % 5) as f32 * 10.0 - 20.0);

        camera.apply_intents(intents[step as usize % intents.len()]).unwrap();
        assert!(bounds.contains(camera.position()), "step {}: {:?}", step, camera.position());

        camera.move_in_direction(Vec3::new(1.0, 0.5, -1.0)).unwrap();
        assert!(bounds.contains(camera.position()), "step {}: {:?}", step, camera.position());

        if step % 3 == 0 {
            camera.mark_frame();
        }
    }
}
