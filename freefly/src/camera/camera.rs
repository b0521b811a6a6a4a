/// Free-fly camera — yaw/pitch Euler camera driven by abstracted input.
///
/// Converts discrete movement commands and continuous pointer deltas
/// into an eye position and a right-handed orthonormal basis, decoupled
/// from any windowing or input API, and produces the corresponding view
/// transform on demand.
///
/// The caller owns the instance and mutates it once per frame: keyboard
/// and pointer handlers first, then `view_matrix()`.

use glam::{Mat4, Vec3};

use crate::error::{FreeflyError, FreeflyResult};

/// Default yaw in degrees (facing down -Z).
pub const DEFAULT_YAW: f32 = -90.0;
/// Default pitch in degrees.
pub const DEFAULT_PITCH: f32 = 0.0;
/// Default movement speed in world units per second.
pub const DEFAULT_SPEED: f32 = 2.5;
/// Default mouse sensitivity applied to pointer offsets.
pub const DEFAULT_SENSITIVITY: f32 = 0.1;
/// Default vertical field of view ("zoom") in degrees.
pub const DEFAULT_ZOOM: f32 = 45.0;

/// Pitch clamp bound in degrees, kept short of ±90 so the basis cannot
/// flip at the poles.
const PITCH_LIMIT: f32 = 89.0;

/// Discrete movement commands.
///
/// Abstracts the camera away from window-system key codes; the closed
/// variant set makes invalid directions unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraMovement {
    /// Move along the front vector
    Forward,
    /// Move against the front vector
    Backward,
    /// Strafe against the right vector
    Left,
    /// Strafe along the right vector
    Right,
}

/// Inclusive zoom (vertical FoV) clamp range in degrees.
///
/// Scrolling is unclamped by default and the caller clamps before
/// building a projection matrix. Attach a range via
/// [`Camera::with_zoom_limits`] to clamp inside
/// [`Camera::process_mouse_scroll`] instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomLimits {
    min: f32,
    max: f32,
}

impl ZoomLimits {
    /// Create a clamp range. `min` must be positive and below `max`.
    pub fn new(min: f32, max: f32) -> FreeflyResult<Self> {
        if min <= 0.0 || min >= max {
            return Err(FreeflyError::InvalidTuning(format!(
                "zoom limits must satisfy 0 < min < max, got [{}, {}]",
                min, max
            )));
        }
        Ok(Self { min, max })
    }

    /// Lower bound in degrees.
    pub fn min(&self) -> f32 {
        self.min
    }

    /// Upper bound in degrees.
    pub fn max(&self) -> f32 {
        self.max
    }

    fn apply(&self, zoom: f32) -> f32 {
        zoom.clamp(self.min, self.max)
    }
}

/// Free-fly camera.
///
/// `front` and `right` are derived from the Euler angles; `up` is
/// re-derived on every basis rebuild from the fixed `world_up`
/// reference, which is what keeps the basis orthonormal and prevents
/// roll from accumulating.
#[derive(Debug, Clone)]
pub struct Camera {
    // Position and orientation basis (world space, unit vectors)
    position: Vec3,
    front: Vec3,
    up: Vec3,
    right: Vec3,
    world_up: Vec3,
    // Euler angles in degrees
    yaw: f32,
    pitch: f32,
    // Tuning
    movement_speed: f32,
    mouse_sensitivity: f32,
    zoom: f32,
    zoom_limits: Option<ZoomLimits>,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::Y, DEFAULT_YAW, DEFAULT_PITCH)
    }
}

impl Camera {
    /// Create a camera from a position, a world-up reference, and Euler
    /// angles in degrees. The orientation basis is derived immediately.
    ///
    /// `world_up` is stored unchanged and reused for every basis
    /// rebuild. A `world_up` (anti-)parallel to the derived front
    /// direction degenerates the cross products and yields a non-unit
    /// basis; that case is left unguarded.
    pub fn new(position: Vec3, world_up: Vec3, yaw: f32, pitch: f32) -> Self {
        let mut camera = Self {
            position,
            front: Vec3::NEG_Z,
            up: world_up,
            right: Vec3::X,
            world_up,
            yaw,
            pitch,
            movement_speed: DEFAULT_SPEED,
            mouse_sensitivity: DEFAULT_SENSITIVITY,
            zoom: DEFAULT_ZOOM,
            zoom_limits: None,
        };
        camera.update_vectors();
        camera
    }

    /// Scalar-argument equivalent of [`Camera::new`]; identical
    /// post-condition.
    #[allow(clippy::too_many_arguments)]
    pub fn from_components(
        pos_x: f32,
        pos_y: f32,
        pos_z: f32,
        up_x: f32,
        up_y: f32,
        up_z: f32,
        yaw: f32,
        pitch: f32,
    ) -> Self {
        Self::new(
            Vec3::new(pos_x, pos_y, pos_z),
            Vec3::new(up_x, up_y, up_z),
            yaw,
            pitch,
        )
    }

    /// Attach a zoom clamp range (applied immediately and on every
    /// scroll). Without one, scrolling is unclamped.
    pub fn with_zoom_limits(mut self, limits: ZoomLimits) -> Self {
        self.zoom = limits.apply(self.zoom);
        self.zoom_limits = Some(limits);
        self
    }

    // ===== PER-FRAME INPUT =====

    /// Move the camera along its basis for one frame.
    ///
    /// `velocity = movement_speed * delta_time`. Forward/Backward move
    /// along the front vector, Left/Right along the right vector. A
    /// negative `delta_time` is not rejected and moves the camera
    /// opposite to the named direction.
    pub fn process_keyboard(&mut self, direction: CameraMovement, delta_time: f32) {
        let velocity = self.movement_speed * delta_time;
        match direction {
            CameraMovement::Forward => self.position += self.front * velocity,
            CameraMovement::Backward => self.position -= self.front * velocity,
            CameraMovement::Left => self.position -= self.right * velocity,
            CameraMovement::Right => self.position += self.right * velocity,
        }
    }

    /// Apply a pointer delta to the Euler angles and rebuild the basis.
    ///
    /// Both offsets are scaled by the mouse sensitivity before being
    /// added to yaw and pitch. With `constrain_pitch`, pitch is clamped
    /// to ±89° after the update; re-applying the same excessive offset
    /// leaves it exactly at the bound.
    pub fn process_mouse_movement(&mut self, x_offset: f32, y_offset: f32, constrain_pitch: bool) {
        self.yaw += x_offset * self.mouse_sensitivity;
        self.pitch += y_offset * self.mouse_sensitivity;

        if constrain_pitch {
            self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }

        self.update_vectors();
    }

    /// Apply a scroll-wheel delta to the zoom (vertical FoV in degrees).
    ///
    /// `zoom` decreases by `y_offset`. Unclamped unless a
    /// [`ZoomLimits`] policy is attached; without one the caller is
    /// responsible for clamping before building a projection matrix.
    pub fn process_mouse_scroll(&mut self, y_offset: f32) {
        self.zoom -= y_offset;
        if let Some(limits) = self.zoom_limits {
            self.zoom = limits.apply(self.zoom);
        }
    }

    // ===== MATRICES =====

    /// View transform: look-at from the eye toward `position + front`
    /// with the derived up vector. Pure function of the current state.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// Perspective projection using the current zoom as vertical FoV,
    /// in the OpenGL clip-space convention.
    pub fn projection_matrix(&self, aspect: f32, z_near: f32, z_far: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.zoom.to_radians(), aspect, z_near, z_far)
    }

    // ===== GETTERS =====

    /// Eye position in world space.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Unit front vector.
    pub fn front(&self) -> Vec3 {
        self.front
    }

    /// Unit up vector (re-derived, not the world-up reference).
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Unit right vector.
    pub fn right(&self) -> Vec3 {
        self.right
    }

    /// Fixed world-up reference supplied at construction.
    pub fn world_up(&self) -> Vec3 {
        self.world_up
    }

    /// Yaw in degrees.
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Pitch in degrees.
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Zoom (vertical FoV) in degrees.
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Movement speed in world units per second.
    pub fn movement_speed(&self) -> f32 {
        self.movement_speed
    }

    /// Mouse sensitivity applied to pointer offsets.
    pub fn mouse_sensitivity(&self) -> f32 {
        self.mouse_sensitivity
    }

    /// Zoom clamp policy, if attached.
    pub fn zoom_limits(&self) -> Option<ZoomLimits> {
        self.zoom_limits
    }

    // ===== TUNING SETTERS =====

    /// Set the movement speed.
    pub fn set_movement_speed(&mut self, speed: f32) {
        self.movement_speed = speed;
    }

    /// Set the mouse sensitivity.
    pub fn set_mouse_sensitivity(&mut self, sensitivity: f32) {
        self.mouse_sensitivity = sensitivity;
    }

    /// Rebuild the orthonormal basis from the current Euler angles.
    ///
    /// Front comes from yaw/pitch trigonometry; right and up are then
    /// re-derived through cross products against the fixed world-up
    /// reference. The front → right → up order keeps the triple
    /// orthonormal even though `world_up` itself need not be orthogonal
    /// to `front`.
    fn update_vectors(&mut self) {
        let yaw = self.yaw.to_radians();
        let pitch = self.pitch.to_radians();

        let front = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        );
        self.front = front.normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
