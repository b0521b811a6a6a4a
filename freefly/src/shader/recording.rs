/// Recording shader backend (no GPU required).
///
/// Stands in for a real backend in unit tests and headless runs:
/// programs validate their sources on creation and remember every
/// uniform upload in call order.

use glam::{Mat4, Vec3};

use crate::error::FreeflyResult;
use super::program::{ShaderBackend, ShaderProgram, UniformValue};
use super::source::ProgramDesc;

/// Program that records uniform uploads instead of driving a GPU.
#[derive(Debug, Default)]
pub struct RecordingProgram {
    uploads: Vec<(String, UniformValue)>,
}

impl RecordingProgram {
    /// Create an empty recording program.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every upload, in call order.
    pub fn uploads(&self) -> &[(String, UniformValue)] {
        &self.uploads
    }

    /// Most recent value uploaded under `name`.
    pub fn last_upload(&self, name: &str) -> Option<&UniformValue> {
        self.uploads
            .iter()
            .rev()
            .find(|(uniform, _)| uniform == name)
            .map(|(_, value)| value)
    }

    /// Forget all recorded uploads.
    pub fn clear(&mut self) {
        self.uploads.clear();
    }
}

impl ShaderProgram for RecordingProgram {
    fn set_i32(&mut self, name: &str, value: i32) -> FreeflyResult<()> {
        self.uploads.push((name.to_string(), UniformValue::I32(value)));
        Ok(())
    }

    fn set_f32(&mut self, name: &str, value: f32) -> FreeflyResult<()> {
        self.uploads.push((name.to_string(), UniformValue::F32(value)));
        Ok(())
    }

    fn set_vec3(&mut self, name: &str, value: Vec3) -> FreeflyResult<()> {
        self.uploads.push((name.to_string(), UniformValue::Vec3(value)));
        Ok(())
    }

    fn set_mat4(&mut self, name: &str, value: &Mat4) -> FreeflyResult<()> {
        self.uploads.push((name.to_string(), UniformValue::Mat4(*value)));
        Ok(())
    }
}

/// Backend producing [`RecordingProgram`]s.
///
/// Tracks how many programs it has created, the way a real backend
/// tracks live GPU handles.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    created_programs: usize,
}

impl RecordingBackend {
    /// Create a new recording backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of programs created so far.
    pub fn created_programs(&self) -> usize {
        self.created_programs
    }
}

impl ShaderBackend for RecordingBackend {
    fn create_program(&mut self, desc: &ProgramDesc<'_>) -> FreeflyResult<Box<dyn ShaderProgram>> {
        desc.validate()?;
        self.created_programs += 1;
        Ok(Box::new(RecordingProgram::new()))
    }
}

#[cfg(test)]
#[path = "recording_tests.rs"]
mod tests;
