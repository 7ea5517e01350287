//! # robocraft VM
//!
//! A deterministic interpreter for robot instruction strings.
//!
//! ## Core Concepts
//! - **Instructions**: one character each - `F`, `B`, `L`, `R`, and on Mk3 a
//!   boost digit `0`-`9`
//! - **Robots**: three generations with growing capabilities (orientation,
//!   clamping to the non-negative quadrant, fuel-limited boosts)
//! - **Control**: construct a robot, interpret a string, read back its
//!   position
//!
//! ```rust
//! use robocraft_vm::{control, Generation, Position};
//!
//! assert_eq!(control(Generation::Mk3, 0, 0, "R5F"), Position::new(5, 0));
//! ```

pub mod config;
pub mod control;
pub mod error;
pub mod opcode;
pub mod orientation;
pub mod robot;

pub use config::RobotConfig;
pub use control::{control, control_with_config, run, spawn, Generation, Run};
pub use error::{Error, ErrorKind, ErrorStatus, Result};
pub use opcode::Instruction;
pub use orientation::Orientation;
pub use robot::{
    ExecutionReport, ExecutionStep, Position, Robot, RobotMk1, RobotMk2, RobotMk3, Warning,
};
