//! Mk2 - turns in place and never leaves the non-negative quadrant

use super::{drive, ExecutionReport, ExecutionStep, Position, Robot};
use crate::config::RobotConfig;
use crate::control::Generation;
use crate::opcode::{self, Instruction};
use crate::orientation::Orientation;
use tracing::{debug, trace};

/// Second generation robot.
///
/// `L`/`R` turn, `F`/`B` move one unit along the facing direction. After
/// every move negative coordinates are clamped to zero. Other characters,
/// digits included, are ignored without a warning.
#[derive(Debug, Clone)]
pub struct RobotMk2 {
    position: Position,
    orientation: Orientation,
    record_trace: bool,
}

impl RobotMk2 {
    pub fn new(x: i64, y: i64) -> Self {
        Self::spawn(Position::new(x, y), &RobotConfig::default())
    }
}

impl Default for RobotMk2 {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl Robot for RobotMk2 {
    fn spawn(position: Position, config: &RobotConfig) -> Self {
        Self {
            position: position.clamped(),
            orientation: Orientation::default(),
            record_trace: config.record_trace,
        }
    }

    fn generation(&self) -> Generation {
        Generation::Mk2
    }

    fn position(&self) -> Position {
        self.position
    }

    fn orientation(&self) -> Option<Orientation> {
        Some(self.orientation)
    }

    fn execute(&mut self, instructions: &str) -> ExecutionReport {
        let mut report = ExecutionReport::default();

        for (index, instruction) in opcode::decode(instructions) {
            match instruction {
                Instruction::Left => self.orientation = self.orientation.rotate_left(),
                Instruction::Right => self.orientation = self.orientation.rotate_right(),
                Instruction::Forward => {
                    self.position = drive(self.position, self.orientation, 1)
                }
                Instruction::Backward => {
                    self.position = drive(self.position, self.orientation, -1)
                }
                Instruction::Boost { .. } | Instruction::Unknown { .. } => {
                    report.skip();
                    continue;
                }
            }

            trace!(
                index,
                %instruction,
                position = %self.position,
                orientation = %self.orientation,
                "mk2 step"
            );
            report.record(
                self.record_trace,
                ExecutionStep {
                    index,
                    instruction,
                    position: self.position,
                    orientation: Some(self.orientation),
                    fuel: None,
                },
            );
        }

        debug!(
            executed = report.executed,
            ignored = report.ignored,
            position = %self.position,
            orientation = %self.orientation,
            "mk2 executed instructions"
        );
        report
    }
}
