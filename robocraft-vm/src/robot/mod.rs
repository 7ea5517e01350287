//! # Robots
//!
//! Three independent robot generations behind one [`Robot`] trait:
//!
//! - [`RobotMk1`]: moves on fixed axes, no orientation, no bounds
//! - [`RobotMk2`]: turns, moves along its facing, never leaves the quadrant
//! - [`RobotMk3`]: Mk2 plus fuel-limited boosts on forward moves
//!
//! Interpretation never fails. Each call returns an [`ExecutionReport`]
//! describing what was executed, skipped or warned about.

mod mk1;
mod mk2;
mod mk3;

pub use mk1::RobotMk1;
pub use mk2::RobotMk2;
pub use mk3::RobotMk3;

use crate::config::RobotConfig;
use crate::control::Generation;
use crate::opcode::Instruction;
use crate::orientation::Orientation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A point on the grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

impl Position {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Move by `(dx, dy)`, saturating at the integer bounds
    pub fn offset(self, dx: i64, dy: i64) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }

    /// Truncate negative coordinates to zero
    pub fn clamped(self) -> Self {
        Self {
            x: self.x.max(0),
            y: self.y.max(0),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Move `distance` units along `orientation`, then clamp into the quadrant.
///
/// A negative distance moves backwards.
pub(crate) fn drive(position: Position, orientation: Orientation, distance: i64) -> Position {
    let (dx, dy) = orientation.delta();
    position
        .offset(dx.saturating_mul(distance), dy.saturating_mul(distance))
        .clamped()
}

/// A character a robot could not interpret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    /// Character index within the instruction string
    pub index: usize,
    pub character: char,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bad instruction {:?} at index {}", self.character, self.index)
    }
}

/// Robot state right after one instruction executed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionStep {
    pub index: usize,
    pub instruction: Instruction,
    pub position: Position,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel: Option<u32>,
}

/// What happened during one `execute` call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionReport {
    /// Instructions that were recognised and applied
    pub executed: usize,
    /// Instructions outside this generation's instruction set
    pub ignored: usize,
    /// Only Mk1 reports ignored characters as warnings
    pub warnings: Vec<Warning>,
    /// Empty unless `RobotConfig::record_trace` is set
    pub steps: Vec<ExecutionStep>,
}

impl ExecutionReport {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub(crate) fn record(&mut self, trace: bool, step: ExecutionStep) {
        self.executed += 1;
        if trace {
            self.steps.push(step);
        }
    }

    pub(crate) fn skip(&mut self) {
        self.ignored += 1;
    }

    pub(crate) fn warn(&mut self, warning: Warning) {
        self.ignored += 1;
        self.warnings.push(warning);
    }
}

/// A robot that interprets instruction strings.
///
/// State persists across `execute` calls on the same robot.
pub trait Robot {
    /// Build a robot at `position`
    fn spawn(position: Position, config: &RobotConfig) -> Self
    where
        Self: Sized;

    fn generation(&self) -> Generation;

    fn position(&self) -> Position;

    /// Facing direction, for generations that have one
    fn orientation(&self) -> Option<Orientation> {
        None
    }

    /// Remaining fuel, for generations that carry it
    fn fuel(&self) -> Option<u32> {
        None
    }

    /// Interpret `instructions` left to right
    fn execute(&mut self, instructions: &str) -> ExecutionReport;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_saturates() {
        let p = Position::new(i64::MAX, i64::MIN).offset(1, -1);
        assert_eq!(p, Position::new(i64::MAX, i64::MIN));
    }

    #[test]
    fn test_clamped() {
        assert_eq!(Position::new(-3, 4).clamped(), Position::new(0, 4));
        assert_eq!(Position::new(2, -1).clamped(), Position::new(2, 0));
        assert_eq!(Position::new(5, 6).clamped(), Position::new(5, 6));
    }

    #[test]
    fn test_drive() {
        let origin = Position::default();
        assert_eq!(drive(origin, Orientation::Forward, 3), Position::new(0, 3));
        assert_eq!(drive(origin, Orientation::Right, 2), Position::new(2, 0));
        // overshoot is truncated, not reflected
        assert_eq!(drive(Position::new(1, 1), Orientation::Left, 5), Position::new(0, 1));
        assert_eq!(drive(Position::new(1, 4), Orientation::Forward, -1), Position::new(1, 3));
    }

    #[test]
    fn test_report_counts() {
        let mut report = ExecutionReport::default();
        let step = ExecutionStep {
            index: 0,
            instruction: Instruction::Forward,
            position: Position::new(1, 0),
            orientation: None,
            fuel: None,
        };
        report.record(false, step);
        report.record(true, step);
        report.skip();
        report.warn(Warning { index: 3, character: 'x' });

        assert_eq!(report.executed, 2);
        assert_eq!(report.steps.len(), 1);
        assert_eq!(report.ignored, 2);
        assert!(report.has_warnings());
        assert_eq!(report.warnings[0].to_string(), "bad instruction 'x' at index 3");
    }

    #[test]
    fn test_position_json() {
        let json = serde_json::to_value(Position::new(21, 1)).unwrap();
        assert_eq!(json, serde_json::json!({"x": 21, "y": 1}));
    }
}
