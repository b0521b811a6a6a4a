/// ShaderProgram and ShaderBackend traits.
///
/// The seam between the camera toolkit and whatever graphics API the
/// caller renders with. A backend compiles and links a GLSL source pair
/// into a program handle; the program exposes the typed uniform setters
/// the frame loop uploads matrices through.

use glam::{Mat4, Vec3};

use crate::error::FreeflyResult;
use super::source::ProgramDesc;

/// A uniform value as uploaded through [`ShaderProgram`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    /// Integer uniform (sampler bindings, flags)
    I32(i32),
    /// Float uniform
    F32(f32),
    /// vec3 uniform
    Vec3(Vec3),
    /// 4×4 matrix uniform
    Mat4(Mat4),
}

/// Linked shader program exposing typed uniform setters.
///
/// Implemented by backend-specific program types. The program handle is
/// destroyed when dropped.
pub trait ShaderProgram {
    /// Upload an integer uniform.
    fn set_i32(&mut self, name: &str, value: i32) -> FreeflyResult<()>;

    /// Upload a float uniform.
    fn set_f32(&mut self, name: &str, value: f32) -> FreeflyResult<()>;

    /// Upload a vec3 uniform.
    fn set_vec3(&mut self, name: &str, value: Vec3) -> FreeflyResult<()>;

    /// Upload a 4×4 matrix uniform (view, projection, model).
    fn set_mat4(&mut self, name: &str, value: &Mat4) -> FreeflyResult<()>;
}

/// Factory for shader programs.
///
/// Compiles and links a source pair into a program. Compile failures
/// surface the backend's info log through
/// [`FreeflyError::ShaderCompilation`]; link failures through
/// [`FreeflyError::ShaderLink`].
///
/// [`FreeflyError::ShaderCompilation`]: crate::FreeflyError::ShaderCompilation
/// [`FreeflyError::ShaderLink`]: crate::FreeflyError::ShaderLink
pub trait ShaderBackend {
    /// Create a program from a vertex/fragment source pair.
    fn create_program(&mut self, desc: &ProgramDesc<'_>) -> FreeflyResult<Box<dyn ShaderProgram>>;
}
