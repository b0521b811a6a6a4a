use bytemuck::{Pod, Zeroable};
use glam::Mat4;

use super::camera::{Camera, DEFAULT_ZOOM};

/// GPU uniform block holding the camera matrices and metadata.
///
/// std140-compatible: two column-major matrices followed by the eye
/// position and vertical FoV packed into a single vec4 slot. Render
/// loops refresh it once per frame, after all input has been applied,
/// and upload it as raw bytes.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct CameraUniform {
    /// View matrix.
    pub view: [[f32; 4]; 4],
    /// Projection matrix.
    pub projection: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Identity matrices, origin eye, default FoV.
    pub fn new() -> Self {
        Self {
            view: Mat4::IDENTITY.to_cols_array_2d(),
            projection: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            fov_y_degrees: DEFAULT_ZOOM,
        }
    }

    /// Refresh every field from the camera's current state.
    pub fn update(&mut self, camera: &Camera, aspect: f32, z_near: f32, z_far: f32) {
        self.view = camera.view_matrix().to_cols_array_2d();
        self.projection = camera
            .projection_matrix(aspect, z_near, z_far)
            .to_cols_array_2d();
        self.position = camera.position().to_array();
        self.fov_y_degrees = camera.zoom();
    }
}

#[cfg(test)]
#[path = "uniform_tests.rs"]
mod tests;
