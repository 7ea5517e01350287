//! # robocraft-error
//!
//! Unified error handling for robocraft.
//!
//! Interpreting instructions never fails: unknown characters are warnings or
//! silent no-ops and out-of-range moves are clamped. Errors only come from the
//! surroundings of the interpreter - parsing a generation name, loading and
//! validating configuration, reading instruction scripts.
//!
//! - **ErrorKind**: what went wrong (e.g. `InvalidArgument`, `ConfigInvalid`)
//! - **ErrorStatus**: whether retrying can help
//! - **Context**: key-value pairs that help locate the cause
//! - **Source**: the wrapped underlying error, never leaked as a raw type
//!
//! ## Usage
//!
//! ```rust
//! use robocraft_error::{Error, ErrorKind};
//!
//! fn example() -> Result<(), Error> {
//!     Err(Error::new(ErrorKind::InvalidArgument, "unknown generation 'mk9'")
//!         .with_operation("control::parse_generation")
//!         .with_context("input", "mk9"))
//! }
//! ```

mod error;
mod kind;
mod status;

pub use error::Error;
pub use kind::ErrorKind;
pub use status::ErrorStatus;

/// Result type alias using robocraft Error
pub type Result<T> = std::result::Result<T, Error>;
