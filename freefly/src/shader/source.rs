/// Shader source descriptors and validation.

use std::fmt;

use crate::error::{FreeflyError, FreeflyResult};

/// Shader stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    /// Vertex shader
    Vertex,
    /// Fragment/Pixel shader
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => write!(f, "vertex"),
            ShaderStage::Fragment => write!(f, "fragment"),
        }
    }
}

/// Descriptor for creating a shader program from a GLSL source pair
#[derive(Debug, Clone)]
pub struct ProgramDesc<'a> {
    /// Vertex stage source
    pub vertex: &'a str,
    /// Fragment stage source
    pub fragment: &'a str,
}

impl ProgramDesc<'_> {
    /// Reject sources any backend compiler would reject outright.
    ///
    /// Backends still run the real compile and surface their info log;
    /// this catches empty sources before they reach a driver.
    pub fn validate(&self) -> FreeflyResult<()> {
        for (stage, code) in [
            (ShaderStage::Vertex, self.vertex),
            (ShaderStage::Fragment, self.fragment),
        ] {
            if code.trim().is_empty() {
                return Err(FreeflyError::ShaderCompilation {
                    stage,
                    log: "empty source".to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
