/// Input accumulation for the per-frame camera update.
///
/// Pressed keys persist across frames; pointer and scroll deltas
/// accumulate until the loop consumes them and calls `begin_frame`.

use glam::Vec2;
use rustc_hash::FxHashSet;
use winit::keyboard::KeyCode;

use crate::camera::CameraMovement;

bitflags::bitflags! {
    /// Set of movement directions active in one frame.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct MovementSet: u8 {
        /// Forward movement key held
        const FORWARD = 1 << 0;
        /// Backward movement key held
        const BACKWARD = 1 << 1;
        /// Left strafe key held
        const LEFT = 1 << 2;
        /// Right strafe key held
        const RIGHT = 1 << 3;
    }
}

impl MovementSet {
    /// The active directions, in the fixed order forward, backward,
    /// left, right.
    pub fn directions(self) -> impl Iterator<Item = CameraMovement> {
        [
            (Self::FORWARD, CameraMovement::Forward),
            (Self::BACKWARD, CameraMovement::Backward),
            (Self::LEFT, CameraMovement::Left),
            (Self::RIGHT, CameraMovement::Right),
        ]
        .into_iter()
        .filter_map(move |(flag, movement)| self.contains(flag).then_some(movement))
    }
}

/// Tracks keyboard and pointer state between frames.
#[derive(Debug, Default)]
pub struct InputState {
    pressed_keys: FxHashSet<KeyCode>,
    cursor_position: Option<Vec2>,
    cursor_delta: Vec2,
    scroll_delta: f32,
}

impl InputState {
    /// Create an empty input state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the per-frame deltas. Call once per frame after the camera
    /// update has consumed them; pressed keys persist.
    pub fn begin_frame(&mut self) {
        self.cursor_delta = Vec2::ZERO;
        self.scroll_delta = 0.0;
    }

    /// Handle a key press event.
    pub fn on_key_pressed(&mut self, key: KeyCode) {
        self.pressed_keys.insert(key);
    }

    /// Handle a key release event.
    pub fn on_key_released(&mut self, key: KeyCode) {
        self.pressed_keys.remove(&key);
    }

    /// Accumulate a cursor move, in window coordinates.
    ///
    /// The vertical delta is inverted (screen Y grows downward, pitch
    /// grows upward). The first event after creation only seeds the
    /// reference position, so a cursor entering the window does not
    /// produce a view jump.
    pub fn on_cursor_moved(&mut self, x: f32, y: f32) {
        let position = Vec2::new(x, y);
        if let Some(last) = self.cursor_position {
            self.cursor_delta += Vec2::new(position.x - last.x, last.y - position.y);
        }
        self.cursor_position = Some(position);
    }

    /// Accumulate a vertical scroll delta.
    pub fn on_scroll(&mut self, y: f32) {
        self.scroll_delta += y;
    }

    /// Check if a key is currently pressed.
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.pressed_keys.contains(&key)
    }

    /// Movement directions mapped from W/S/A/D and the arrow keys.
    pub fn movement(&self) -> MovementSet {
        let mut set = MovementSet::empty();
        if self.is_key_pressed(KeyCode::KeyW) || self.is_key_pressed(KeyCode::ArrowUp) {
            set |= MovementSet::FORWARD;
        }
        if self.is_key_pressed(KeyCode::KeyS) || self.is_key_pressed(KeyCode::ArrowDown) {
            set |= MovementSet::BACKWARD;
        }
        if self.is_key_pressed(KeyCode::KeyA) || self.is_key_pressed(KeyCode::ArrowLeft) {
            set |= MovementSet::LEFT;
        }
        if self.is_key_pressed(KeyCode::KeyD) || self.is_key_pressed(KeyCode::ArrowRight) {
            set |= MovementSet::RIGHT;
        }
        set
    }

    /// Pointer delta accumulated since the last `begin_frame`, with
    /// the vertical axis already inverted for pitch.
    pub fn cursor_delta(&self) -> Vec2 {
        self.cursor_delta
    }

    /// Scroll delta accumulated since the last `begin_frame`.
    pub fn scroll_delta(&self) -> f32 {
        self.scroll_delta
    }
}

#[cfg(test)]
#[path = "input_state_tests.rs"]
mod tests;
