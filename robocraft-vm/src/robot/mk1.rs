//! Mk1 - fixed axes, no orientation, no bounds

use super::{ExecutionReport, ExecutionStep, Position, Robot, Warning};
use crate::config::RobotConfig;
use crate::control::Generation;
use crate::opcode::{self, Instruction};
use tracing::{debug, trace, warn};

/// First generation robot.
///
/// `F`/`B` move along x, `L`/`R` along y. Coordinates may go negative.
/// Anything else is reported as a warning and otherwise ignored.
#[derive(Debug, Clone)]
pub struct RobotMk1 {
    position: Position,
    record_trace: bool,
}

impl RobotMk1 {
    pub fn new(x: i64, y: i64) -> Self {
        Self::spawn(Position::new(x, y), &RobotConfig::default())
    }
}

impl Default for RobotMk1 {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl Robot for RobotMk1 {
    fn spawn(position: Position, config: &RobotConfig) -> Self {
        Self {
            position,
            record_trace: config.record_trace,
        }
    }

    fn generation(&self) -> Generation {
        Generation::Mk1
    }

    fn position(&self) -> Position {
        self.position
    }

    fn execute(&mut self, instructions: &str) -> ExecutionReport {
        let mut report = ExecutionReport::default();

        for (index, instruction) in opcode::decode(instructions) {
            let (dx, dy) = match instruction {
                Instruction::Forward => (1, 0),
                Instruction::Backward => (-1, 0),
                Instruction::Left => (0, 1),
                Instruction::Right => (0, -1),
                Instruction::Boost { .. } | Instruction::Unknown { .. } => {
                    let character = instruction.as_char();
                    warn!(index, ?character, "bad instruction");
                    report.warn(Warning { index, character });
                    continue;
                }
            };

            self.position = self.position.offset(dx, dy);
            trace!(index, %instruction, position = %self.position, "mk1 step");
            report.record(
                self.record_trace,
                ExecutionStep {
                    index,
                    instruction,
                    position: self.position,
                    orientation: None,
                    fuel: None,
                },
            );
        }

        debug!(
            executed = report.executed,
            warnings = report.warnings.len(),
            position = %self.position,
            "mk1 executed instructions"
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(x: i64, y: i64, instructions: &str) -> Position {
        let mut robot = RobotMk1::new(x, y);
        robot.execute(instructions);
        robot.position()
    }

    #[test]
    fn test_axes() {
        assert_eq!(run(0, 0, "F"), Position::new(1, 0));
        assert_eq!(run(0, 0, "B"), Position::new(-1, 0));
        assert_eq!(run(0, 0, "L"), Position::new(0, 1));
        assert_eq!(run(0, 0, "R"), Position::new(0, -1));
    }

    #[test]
    fn test_follows_instructions() {
        assert_eq!(run(0, 0, "FBLR"), Position::new(0, 0));
        assert_eq!(
            run(0, 0, "FRFRFFFFFFFLLLLFFFFFRFFFFLFFLRRF"),
            Position::new(21, 1)
        );
        assert_eq!(
            run(3, 6, "FFFFFFFFRRRRRRRFFFFLLLBBRRRRRLLLLLLLLLRFFF"),
            Position::new(16, 5)
        );
        assert_eq!(
            run(0, 7, "RRRRRRRRFFFFFFFFFFFLLLBBBBBRRRLLLLLFFLR"),
            Position::new(8, 4)
        );
    }

    #[test]
    fn test_no_bounds() {
        assert_eq!(run(0, 0, "BBBRR"), Position::new(-3, -2));
    }

    #[test]
    fn test_forward_backward_inverse() {
        for (x, y) in [(0, 0), (-4, 2), (7, -7)] {
            assert_eq!(run(x, y, "FB"), Position::new(x, y));
            assert_eq!(run(x, y, "BF"), Position::new(x, y));
            assert_eq!(run(x, y, "LR"), Position::new(x, y));
        }
    }

    #[test]
    fn test_unknown_characters_warn() {
        let mut robot = RobotMk1::default();
        let report = robot.execute("Fx5F");

        assert_eq!(robot.position(), Position::new(2, 0));
        assert_eq!(report.executed, 2);
        assert_eq!(report.ignored, 2);
        assert_eq!(
            report.warnings,
            vec![
                Warning { index: 1, character: 'x' },
                Warning { index: 2, character: '5' },
            ]
        );
    }

    #[test]
    fn test_trace() {
        let config = RobotConfig::default().with_trace(true);
        let mut robot = RobotMk1::spawn(Position::default(), &config);
        let report = robot.execute("FL?");

        assert_eq!(report.steps.len(), 2);
        assert_eq!(report.steps[1].index, 1);
        assert_eq!(report.steps[1].position, Position::new(1, 1));
        assert_eq!(report.steps[1].orientation, None);
        assert!(robot.orientation().is_none());
        assert!(robot.fuel().is_none());
    }

    #[test]
    fn test_state_persists_across_calls() {
        let mut robot = RobotMk1::default();
        robot.execute("FF");
        robot.execute("L");
        assert_eq!(robot.position(), Position::new(2, 1));
    }
}
