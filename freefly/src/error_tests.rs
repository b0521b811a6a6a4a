//! Unit tests for error.rs
//!
//! Tests all FreeflyError variants and their implementations (Display,
//! Debug, Clone, std::error::Error).

use crate::error::{FreeflyError, FreeflyResult};
use crate::shader::ShaderStage;

// ============================================================================
// ERROR DISPLAY TESTS
// ============================================================================

#[test]
fn test_shader_compilation_display() {
    let err = FreeflyError::ShaderCompilation {
        stage: ShaderStage::Vertex,
        log: "0:12: 'vec4' : syntax error".to_string(),
    };
    let display = format!("{}", err);
    assert!(display.contains("Failed to compile vertex shader"));
    assert!(display.contains("syntax error"));
}

#[test]
fn test_shader_compilation_display_fragment_stage() {
    let err = FreeflyError::ShaderCompilation {
        stage: ShaderStage::Fragment,
        log: "undeclared identifier".to_string(),
    };
    let display = format!("{}", err);
    assert!(display.contains("fragment shader"));
    assert!(display.contains("undeclared identifier"));
}

#[test]
fn test_shader_link_display() {
    let err = FreeflyError::ShaderLink("varying TexCoord not written".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Failed to link"));
    assert!(display.contains("TexCoord"));
}

#[test]
fn test_invalid_tuning_display() {
    let err = FreeflyError::InvalidTuning("zoom limits must satisfy 0 < min < max".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Invalid tuning"));
    assert!(display.contains("0 < min < max"));
}

#[test]
fn test_window_creation_display() {
    let err = FreeflyError::WindowCreation("no display server".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Window creation failed"));
    assert!(display.contains("no display server"));
}

// ============================================================================
// ERROR TRAIT IMPLEMENTATIONS
// ============================================================================

#[test]
fn test_error_is_std_error() {
    let err = FreeflyError::ShaderLink("test".to_string());
    // Verify FreeflyError implements std::error::Error trait
    let _: &dyn std::error::Error = &err;
}

#[test]
fn test_error_debug() {
    let err1 = FreeflyError::ShaderCompilation {
        stage: ShaderStage::Vertex,
        log: "test".to_string(),
    };
    assert!(format!("{:?}", err1).contains("ShaderCompilation"));

    let err2 = FreeflyError::ShaderLink("test".to_string());
    assert!(format!("{:?}", err2).contains("ShaderLink"));

    let err3 = FreeflyError::InvalidTuning("test".to_string());
    assert!(format!("{:?}", err3).contains("InvalidTuning"));

    let err4 = FreeflyError::WindowCreation("test".to_string());
    assert!(format!("{:?}", err4).contains("WindowCreation"));
}

#[test]
fn test_error_clone() {
    let err1 = FreeflyError::ShaderCompilation {
        stage: ShaderStage::Fragment,
        log: "log".to_string(),
    };
    let err2 = err1.clone();
    assert_eq!(format!("{}", err1), format!("{}", err2));

    let err3 = FreeflyError::InvalidTuning("tuning".to_string());
    let err4 = err3.clone();
    assert_eq!(format!("{}", err3), format!("{}", err4));
}

// ============================================================================
// RESULT TYPE TESTS
// ============================================================================

#[test]
fn test_result_type_ok() {
    fn returns_ok() -> FreeflyResult<i32> {
        Ok(42)
    }

    let result = returns_ok();
    assert!(result.is_ok());
    assert_eq!(result.unwrap(), 42);
}

#[test]
fn test_result_type_err() {
    fn returns_error() -> FreeflyResult<i32> {
        Err(FreeflyError::ShaderLink("unresolved symbol".to_string()))
    }

    let result = returns_error();
    assert!(result.is_err());

    if let Err(e) = result {
        assert!(format!("{}", e).contains("unresolved symbol"));
    }
}

#[test]
fn test_error_propagation_with_question_mark() {
    fn inner() -> FreeflyResult<i32> {
        Err(FreeflyError::InvalidTuning("bad range".to_string()))
    }

    fn outer() -> FreeflyResult<i32> {
        inner()?;
        Ok(42)
    }

    let result = outer();
    assert!(result.is_err());
}
