/*!
# Freefly

First-person "free-fly" camera toolkit for interactive 3D viewers.

The core is a yaw/pitch Euler camera driven by abstracted keyboard and
mouse input. Around it sit the pieces a frame loop needs to drive the
camera without committing to a graphics API: an input-state accumulator
for window events, an explicit frame clock, and a backend-agnostic
shader-program surface for uploading the resulting matrices.

## Architecture

- **Camera**: orthonormal-basis camera producing view and projection
  matrices on demand; owned and mutated by the caller's frame loop
- **InputState / MovementSet**: window events mapped onto the camera's
  command surface
- **FrameClock**: delta-time source owned by the loop, not a global
- **ShaderBackend / ShaderProgram**: uniform-upload traits; concrete
  GPU backends are external, a recording implementation backs tests
  and headless runs

This crate is not a renderer. It never touches a GPU, window, or file;
the demo member shows how a real loop wires everything together.
*/

// Internal modules
mod error;

pub mod camera;
pub mod input;
pub mod log;
pub mod shader;
pub mod time;

// Error types
pub use error::{FreeflyError, FreeflyResult};

// Re-export math library at crate root
pub use glam;
