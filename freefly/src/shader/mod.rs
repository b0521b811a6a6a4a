//! Shader module — backend-agnostic shader program surface.
//!
//! The toolkit never talks to a GPU. It defines the source descriptors
//! and the uniform-upload call surface a render loop consumes; concrete
//! GL or Vulkan backends implement the traits outside this crate, and a
//! recording implementation backs tests and headless runs.

mod program;
mod recording;
mod source;

pub use program::{ShaderBackend, ShaderProgram, UniformValue};
pub use recording::{RecordingBackend, RecordingProgram};
pub use source::{ProgramDesc, ShaderStage};
