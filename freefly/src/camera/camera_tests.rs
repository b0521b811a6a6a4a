use glam::{Mat4, Vec3};
use super::*;

const EPS: f32 = 1e-5;

fn assert_vec3_near(actual: Vec3, expected: Vec3, eps: f32) {
    assert!(
        (actual - expected).length() < eps,
        "expected {:?}, got {:?}",
        expected,
        actual
    );
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_default_camera() {
    let camera = Camera::default();

    assert_eq!(camera.position(), Vec3::ZERO);
    assert_eq!(camera.world_up(), Vec3::Y);
    assert_eq!(camera.yaw(), DEFAULT_YAW);
    assert_eq!(camera.pitch(), DEFAULT_PITCH);
    assert_eq!(camera.movement_speed(), DEFAULT_SPEED);
    assert_eq!(camera.mouse_sensitivity(), DEFAULT_SENSITIVITY);
    assert_eq!(camera.zoom(), DEFAULT_ZOOM);
    assert!(camera.zoom_limits().is_none());

    // yaw = -90, pitch = 0 faces down -Z
    assert_vec3_near(camera.front(), Vec3::NEG_Z, EPS);
    assert_vec3_near(camera.right(), Vec3::X, EPS);
    assert_vec3_near(camera.up(), Vec3::Y, EPS);
}

#[test]
fn test_new_derives_basis_immediately() {
    let camera = Camera::new(Vec3::new(0.0, 0.0, 3.0), Vec3::Y, DEFAULT_YAW, DEFAULT_PITCH);

    assert_eq!(camera.position(), Vec3::new(0.0, 0.0, 3.0));
    assert_vec3_near(camera.front(), Vec3::NEG_Z, EPS);
}

#[test]
fn test_from_components_matches_vector_constructor() {
    let a = Camera::new(Vec3::new(1.0, 2.0, 3.0), Vec3::Y, -45.0, 10.0);
    let b = Camera::from_components(1.0, 2.0, 3.0, 0.0, 1.0, 0.0, -45.0, 10.0);

    assert_eq!(a.position(), b.position());
    assert_vec3_near(a.front(), b.front(), EPS);
    assert_vec3_near(a.right(), b.right(), EPS);
    assert_vec3_near(a.up(), b.up(), EPS);
    assert_eq!(a.yaw(), b.yaw());
    assert_eq!(a.pitch(), b.pitch());
}

#[test]
fn test_new_with_nonzero_pitch() {
    let camera = Camera::new(Vec3::ZERO, Vec3::Y, -90.0, 45.0);

    // front = (cos(-90)cos(45), sin(45), sin(-90)cos(45))
    let expected = Vec3::new(0.0, 45.0_f32.to_radians().sin(), -(45.0_f32.to_radians().cos()));
    assert_vec3_near(camera.front(), expected.normalize(), EPS);
}

// ============================================================================
// process_keyboard
// ============================================================================

#[test]
fn test_keyboard_forward_moves_along_front() {
    let mut camera = Camera::default();
    camera.process_keyboard(CameraMovement::Forward, 1.0);

    // Default front is -Z, speed 2.5
    assert_vec3_near(camera.position(), Vec3::new(0.0, 0.0, -2.5), EPS);
}

#[test]
fn test_keyboard_velocity_scales_with_delta_time() {
    let mut camera = Camera::default();
    camera.process_keyboard(CameraMovement::Forward, 0.016);

    assert_vec3_near(camera.position(), Vec3::new(0.0, 0.0, -2.5 * 0.016), EPS);
}

#[test]
fn test_keyboard_forward_backward_are_inverses() {
    let mut camera = Camera::new(Vec3::new(1.0, 2.0, 3.0), Vec3::Y, -60.0, 15.0);
    let start = camera.position();

    camera.process_keyboard(CameraMovement::Forward, 0.25);
    camera.process_keyboard(CameraMovement::Backward, 0.25);

    assert_vec3_near(camera.position(), start, EPS);
}

#[test]
fn test_keyboard_left_right_are_inverses() {
    let mut camera = Camera::new(Vec3::new(1.0, 2.0, 3.0), Vec3::Y, -60.0, 15.0);
    let start = camera.position();

    camera.process_keyboard(CameraMovement::Left, 0.25);
    camera.process_keyboard(CameraMovement::Right, 0.25);

    assert_vec3_near(camera.position(), start, EPS);
}

#[test]
fn test_keyboard_strafe_moves_along_right() {
    let mut camera = Camera::default();
    camera.process_keyboard(CameraMovement::Right, 1.0);

    // Default right is +X
    assert_vec3_near(camera.position(), Vec3::new(2.5, 0.0, 0.0), EPS);
}

#[test]
fn test_keyboard_does_not_change_orientation() {
    let mut camera = Camera::default();
    camera.process_keyboard(CameraMovement::Forward, 0.5);
    camera.process_keyboard(CameraMovement::Left, 0.5);

    assert_vec3_near(camera.front(), Vec3::NEG_Z, EPS);
    assert_eq!(camera.yaw(), DEFAULT_YAW);
    assert_eq!(camera.pitch(), DEFAULT_PITCH);
}

#[test]
fn test_keyboard_negative_delta_time_reverses_motion() {
    // Negative time steps are deliberately not rejected; the motion
    // just runs opposite to the named direction.
    let mut camera = Camera::default();
    camera.process_keyboard(CameraMovement::Forward, -1.0);

    assert_vec3_near(camera.position(), Vec3::new(0.0, 0.0, 2.5), EPS);
}

#[test]
fn test_keyboard_respects_movement_speed() {
    let mut camera = Camera::default();
    camera.set_movement_speed(10.0);
    camera.process_keyboard(CameraMovement::Forward, 1.0);

    assert_vec3_near(camera.position(), Vec3::new(0.0, 0.0, -10.0), EPS);
}

// ============================================================================
// process_mouse_movement
// ============================================================================

#[test]
fn test_mouse_movement_yaw_scenario() {
    // From (0,0,3) looking down -Z, a +90 x-offset at sensitivity 0.1
    // turns yaw to -81 degrees.
    let mut camera = Camera::new(Vec3::new(0.0, 0.0, 3.0), Vec3::Y, -90.0, 0.0);
    assert_vec3_near(camera.front(), Vec3::NEG_Z, EPS);

    camera.process_mouse_movement(90.0, 0.0, true);

    assert!((camera.yaw() - (-81.0)).abs() < EPS);

    let yaw = (-81.0_f32).to_radians();
    let expected = Vec3::new(yaw.cos(), 0.0, yaw.sin()).normalize();
    assert_vec3_near(camera.front(), expected, EPS);
    // cos(-81°) ≈ 0.156
    assert!((camera.front().x - 0.15643).abs() < 1e-4);
    assert!((camera.front().z - (-0.98769)).abs() < 1e-4);
}

#[test]
fn test_mouse_movement_scales_by_sensitivity() {
    let mut camera = Camera::default();
    camera.set_mouse_sensitivity(0.5);

    camera.process_mouse_movement(10.0, 4.0, true);

    assert!((camera.yaw() - (DEFAULT_YAW + 5.0)).abs() < EPS);
    assert!((camera.pitch() - 2.0).abs() < EPS);
}

#[test]
fn test_pitch_clamped_at_upper_bound() {
    let mut camera = Camera::default();
    // sensitivity 0.1 → offset 2000 would push pitch to 200
    camera.process_mouse_movement(0.0, 2000.0, true);

    assert_eq!(camera.pitch(), 89.0);
}

#[test]
fn test_pitch_clamped_at_lower_bound() {
    let mut camera = Camera::default();
    camera.process_mouse_movement(0.0, -2000.0, true);

    assert_eq!(camera.pitch(), -89.0);
}

#[test]
fn test_pitch_clamp_is_idempotent() {
    let mut camera = Camera::default();
    camera.process_mouse_movement(0.0, 2000.0, true);
    assert_eq!(camera.pitch(), 89.0);

    // Re-applying the same excessive offset leaves pitch at the bound
    camera.process_mouse_movement(0.0, 2000.0, true);
    assert_eq!(camera.pitch(), 89.0);
}

#[test]
fn test_pitch_unconstrained_when_disabled() {
    let mut camera = Camera::default();
    camera.process_mouse_movement(0.0, 2000.0, false);

    assert!((camera.pitch() - 200.0).abs() < EPS);
}

#[test]
fn test_mouse_movement_rebuilds_basis() {
    let mut camera = Camera::default();
    let front_before = camera.front();

    camera.process_mouse_movement(450.0, 0.0, true);

    // Yaw moved 45 degrees; front must have rotated with it
    assert!((camera.front() - front_before).length() > 0.1);
}

#[test]
fn test_basis_orthonormal_across_pitch_range() {
    // For all yaw/pitch within the clamped range the basis stays
    // mutually orthogonal and unit length.
    for yaw_steps in 0..12 {
        for pitch_steps in 0..9 {
            let yaw = -180.0 + 30.0 * yaw_steps as f32;
            let pitch = -88.0 + 22.0 * pitch_steps as f32;
            let camera = Camera::new(Vec3::ZERO, Vec3::Y, yaw, pitch.min(88.0));

            assert!((camera.front().length() - 1.0).abs() < EPS);
            assert!((camera.right().length() - 1.0).abs() < EPS);
            assert!((camera.up().length() - 1.0).abs() < EPS);

            assert!(camera.front().dot(camera.right()).abs() < EPS);
            assert!(camera.front().dot(camera.up()).abs() < EPS);
            assert!(camera.right().dot(camera.up()).abs() < EPS);
        }
    }
}

// ============================================================================
// process_mouse_scroll
// ============================================================================

#[test]
fn test_scroll_decreases_zoom() {
    let mut camera = Camera::default();
    camera.process_mouse_scroll(5.0);

    assert_eq!(camera.zoom(), 40.0);
}

#[test]
fn test_scroll_unclamped_by_default() {
    // Without a policy the zoom runs free; clamping is the caller's job.
    let mut camera = Camera::default();
    camera.process_mouse_scroll(100.0);
    assert_eq!(camera.zoom(), -55.0);

    camera.process_mouse_scroll(-1000.0);
    assert_eq!(camera.zoom(), 945.0);
}

#[test]
fn test_scroll_clamped_with_zoom_limits() {
    let limits = ZoomLimits::new(1.0, 45.0).unwrap();
    let mut camera = Camera::default().with_zoom_limits(limits);

    camera.process_mouse_scroll(100.0);
    assert_eq!(camera.zoom(), 1.0);

    camera.process_mouse_scroll(-1000.0);
    assert_eq!(camera.zoom(), 45.0);

    camera.process_mouse_scroll(5.0);
    assert_eq!(camera.zoom(), 40.0);
}

#[test]
fn test_with_zoom_limits_clamps_current_zoom() {
    let limits = ZoomLimits::new(10.0, 30.0).unwrap();
    let camera = Camera::default().with_zoom_limits(limits);

    // Default zoom 45 is pulled into range on attach
    assert_eq!(camera.zoom(), 30.0);
}

#[test]
fn test_zoom_limits_rejects_bad_ranges() {
    assert!(ZoomLimits::new(0.0, 45.0).is_err());
    assert!(ZoomLimits::new(-1.0, 45.0).is_err());
    assert!(ZoomLimits::new(45.0, 45.0).is_err());
    assert!(ZoomLimits::new(50.0, 45.0).is_err());

    let limits = ZoomLimits::new(1.0, 45.0).unwrap();
    assert_eq!(limits.min(), 1.0);
    assert_eq!(limits.max(), 45.0);
}

// ============================================================================
// view_matrix / projection_matrix
// ============================================================================

#[test]
fn test_view_matrix_matches_look_at() {
    let camera = Camera::new(Vec3::new(0.0, 0.0, 3.0), Vec3::Y, DEFAULT_YAW, DEFAULT_PITCH);

    let expected = Mat4::look_at_rh(
        Vec3::new(0.0, 0.0, 3.0),
        Vec3::new(0.0, 0.0, 3.0) + camera.front(),
        camera.up(),
    );
    assert_eq!(camera.view_matrix(), expected);
}

#[test]
fn test_view_matrix_is_deterministic() {
    let camera = Camera::new(Vec3::new(1.0, 2.0, 3.0), Vec3::Y, -120.0, 30.0);

    // Two calls with no state change in between return identical matrices
    assert_eq!(camera.view_matrix(), camera.view_matrix());
}

#[test]
fn test_view_matrix_reflects_position_change() {
    let mut camera = Camera::default();
    let before = camera.view_matrix();

    camera.process_keyboard(CameraMovement::Forward, 1.0);

    assert_ne!(camera.view_matrix(), before);
}

#[test]
fn test_projection_matrix_uses_zoom_as_fov() {
    let mut camera = Camera::default();
    let wide = camera.projection_matrix(16.0 / 9.0, 0.1, 100.0);

    camera.process_mouse_scroll(20.0); // zoom 45 → 25

    let narrow = camera.projection_matrix(16.0 / 9.0, 0.1, 100.0);
    let expected = Mat4::perspective_rh_gl(25.0_f32.to_radians(), 16.0 / 9.0, 0.1, 100.0);

    assert_ne!(wide, narrow);
    assert_eq!(narrow, expected);
}

// ============================================================================
// Clone
// ============================================================================

#[test]
fn test_camera_clone() {
    let mut camera = Camera::new(Vec3::new(1.0, 2.0, 3.0), Vec3::Y, -45.0, 20.0);
    camera.process_mouse_scroll(5.0);

    let cloned = camera.clone();

    assert_eq!(cloned.position(), camera.position());
    assert_eq!(cloned.yaw(), camera.yaw());
    assert_eq!(cloned.pitch(), camera.pitch());
    assert_eq!(cloned.zoom(), camera.zoom());
    assert_eq!(cloned.view_matrix(), camera.view_matrix());
}
