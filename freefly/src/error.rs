//! Error types for the freefly toolkit
//!
//! Camera operations are total and never fail; errors only arise on the
//! fallible edges (shader creation, tuning validation, window setup).

use std::fmt;

use crate::shader::ShaderStage;

/// Result type for freefly operations
pub type FreeflyResult<T> = Result<T, FreeflyError>;

/// Freefly toolkit errors
#[derive(Debug, Clone)]
pub enum FreeflyError {
    /// A shader stage failed to compile (carries the backend's info log)
    ShaderCompilation {
        /// Stage that failed
        stage: ShaderStage,
        /// Compiler info log
        log: String,
    },

    /// Shader program linking failed
    ShaderLink(String),

    /// Invalid tuning parameters (zoom limits, speeds)
    InvalidTuning(String),

    /// Window or event-loop creation failed
    WindowCreation(String),
}

impl fmt::Display for FreeflyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FreeflyError::ShaderCompilation { stage, log } => {
                write!(f, "Failed to compile {} shader: {}", stage, log)
            }
            FreeflyError::ShaderLink(msg) => write!(f, "Failed to link shader program: {}", msg),
            FreeflyError::InvalidTuning(msg) => write!(f, "Invalid tuning: {}", msg),
            FreeflyError::WindowCreation(msg) => write!(f, "Window creation failed: {}", msg),
        }
    }
}

impl std::error::Error for FreeflyError {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
