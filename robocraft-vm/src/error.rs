//! Interpreter error types
//!
//! Re-exports robocraft-error and adds interpreter-specific constructors.

pub use robocraft_error::{Error, ErrorKind, ErrorStatus, Result};

/// Create an InvalidArgument error for an unrecognised generation name
pub fn unknown_generation(name: impl Into<String>) -> Error {
    let name = name.into();
    Error::invalid_argument(format!("unknown robot generation '{}'", name))
        .with_operation("control::parse_generation")
        .with_context("generation", name)
        .with_context("expected", "mk1, mk2, mk3")
}

/// Create a ConfigInvalid error
pub fn config_invalid(field: &'static str, reason: impl Into<String>) -> Error {
    Error::config_invalid(reason)
        .with_operation("config::validate")
        .with_context("field", field)
}

/// Create a SerializationFailed error
pub fn serialization_error(message: impl Into<String>) -> Error {
    Error::new(ErrorKind::SerializationFailed, message)
}
