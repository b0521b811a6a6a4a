//! Input module — window-event accumulation for the camera.
//!
//! Maps raw key and pointer events onto the camera's abstracted command
//! surface. The frame loop feeds events in as they arrive, drains the
//! accumulated state once per frame, and calls `begin_frame` afterwards.

mod input_state;

pub use input_state::{InputState, MovementSet};

// Re-export the key code type callers feed into InputState
pub use winit::keyboard::KeyCode;
