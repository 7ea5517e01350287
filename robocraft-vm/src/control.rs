//! # Control Entry Point
//!
//! Build a robot, feed it one instruction string, read back where it ended
//! up. [`control`] is the whole public contract; [`control_with_config`]
//! also returns orientation, fuel and the execution report.

use crate::config::RobotConfig;
use crate::error::{self, Error, Result};
use crate::orientation::Orientation;
use crate::robot::{ExecutionReport, Position, Robot, RobotMk1, RobotMk2, RobotMk3};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Robot generation selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Generation {
    Mk1,
    Mk2,
    Mk3,
}

impl Generation {
    pub fn all() -> [Generation; 3] {
        [Generation::Mk1, Generation::Mk2, Generation::Mk3]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Generation::Mk1 => "mk1",
            Generation::Mk2 => "mk2",
            Generation::Mk3 => "mk3",
        }
    }

    /// `(character, effect)` rows describing what this generation understands
    pub fn instruction_table(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Generation::Mk1 => &[
                ("F", "x += 1"),
                ("B", "x -= 1"),
                ("L", "y += 1"),
                ("R", "y -= 1"),
                ("other", "ignored with a warning"),
            ],
            Generation::Mk2 => &[
                ("F", "move 1 along facing, clamp to x >= 0, y >= 0"),
                ("B", "move 1 against facing, clamp to x >= 0, y >= 0"),
                ("L", "turn counter-clockwise"),
                ("R", "turn clockwise"),
                ("other", "ignored"),
            ],
            Generation::Mk3 => &[
                ("0-9", "boost the next F, capped at max_boost and fuel; fuel spent now"),
                ("F", "move 1 (or the pending boost) along facing, clamp"),
                ("B", "move 1 against facing, clamp"),
                ("L", "turn counter-clockwise"),
                ("R", "turn clockwise"),
                ("other", "ignored"),
            ],
        }
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Generation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mk1" | "1" => Ok(Generation::Mk1),
            "mk2" | "2" => Ok(Generation::Mk2),
            "mk3" | "3" => Ok(Generation::Mk3),
            _ => Err(error::unknown_generation(s)),
        }
    }
}

/// Outcome of one control call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    pub generation: Generation,
    pub position: Position,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel: Option<u32>,
    pub report: ExecutionReport,
}

impl Run {
    /// Snapshot a robot after it produced `report`
    pub fn capture(robot: &dyn Robot, report: ExecutionReport) -> Self {
        Self {
            generation: robot.generation(),
            position: robot.position(),
            orientation: robot.orientation(),
            fuel: robot.fuel(),
            report,
        }
    }
}

/// Build a robot of the given generation
pub fn spawn(generation: Generation, position: Position, config: &RobotConfig) -> Box<dyn Robot> {
    match generation {
        Generation::Mk1 => Box::new(RobotMk1::spawn(position, config)),
        Generation::Mk2 => Box::new(RobotMk2::spawn(position, config)),
        Generation::Mk3 => Box::new(RobotMk3::spawn(position, config)),
    }
}

/// Run `instructions` on a fresh robot starting at `(x, y)` and return where
/// it ends up.
pub fn control(generation: Generation, x: i64, y: i64, instructions: &str) -> Position {
    let mut robot = spawn(generation, Position::new(x, y), &RobotConfig::default());
    robot.execute(instructions);
    robot.position()
}

/// Like [`control`], but with an explicit config and the full outcome
pub fn control_with_config(
    generation: Generation,
    config: &RobotConfig,
    x: i64,
    y: i64,
    instructions: &str,
) -> Result<Run> {
    config.validate()?;
    let mut robot = spawn(generation, Position::new(x, y), config);
    let report = robot.execute(instructions);
    Ok(Run::capture(robot.as_ref(), report))
}

/// Generic form of [`control`] for a statically chosen robot type
pub fn run<R: Robot>(x: i64, y: i64, instructions: &str) -> Position {
    let mut robot = R::spawn(Position::new(x, y), &RobotConfig::default());
    robot.execute(instructions);
    robot.position()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_scenarios() {
        assert_eq!(control(Generation::Mk1, 0, 0, "FBLR"), Position::new(0, 0));
        assert_eq!(control(Generation::Mk2, 0, 0, "FFFF"), Position::new(0, 4));
        assert_eq!(control(Generation::Mk2, 0, 0, "LF"), Position::new(0, 0));
        assert_eq!(control(Generation::Mk3, 0, 0, "5F"), Position::new(0, 5));
        assert_eq!(control(Generation::Mk3, 0, 0, "R5F"), Position::new(5, 0));
    }

    #[test]
    fn test_generic_run_matches_dispatch() {
        let instructions = "FRFRFFFFFFFLLLLFFFFFRFFFFLFFLRRF";
        assert_eq!(
            run::<RobotMk1>(0, 0, instructions),
            control(Generation::Mk1, 0, 0, instructions)
        );
        assert_eq!(run::<RobotMk1>(0, 0, instructions), Position::new(21, 1));
        assert_eq!(run::<RobotMk2>(3, 3, "RF"), Position::new(4, 3));
        assert_eq!(run::<RobotMk3>(0, 0, "2F"), Position::new(0, 2));
    }

    #[test]
    fn test_generations_diverge() {
        assert_eq!(control(Generation::Mk1, 0, 0, "LF"), Position::new(1, 1));
        assert_eq!(control(Generation::Mk2, 0, 0, "LF"), Position::new(0, 0));
        assert_eq!(control(Generation::Mk1, 0, 0, "3F"), Position::new(1, 0));
        assert_eq!(control(Generation::Mk2, 0, 0, "3F"), Position::new(0, 1));
        assert_eq!(control(Generation::Mk3, 0, 0, "3F"), Position::new(0, 3));
    }

    #[test]
    fn test_control_with_config() {
        let config = RobotConfig::default().with_trace(true);
        let run = control_with_config(Generation::Mk3, &config, 0, 0, "5F").unwrap();

        assert_eq!(run.generation, Generation::Mk3);
        assert_eq!(run.position, Position::new(0, 5));
        assert_eq!(run.orientation, Some(Orientation::Forward));
        assert_eq!(run.fuel, Some(25));
        assert_eq!(run.report.steps.len(), 2);
    }

    #[test]
    fn test_control_with_invalid_config() {
        let config = RobotConfig {
            max_boost: 10,
            ..RobotConfig::default()
        };
        let err = control_with_config(Generation::Mk3, &config, 0, 0, "5F").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    }

    #[test]
    fn test_run_json() {
        let run = control_with_config(Generation::Mk1, &RobotConfig::default(), 0, 0, "F?").unwrap();
        let json = serde_json::to_value(&run).unwrap();

        assert_eq!(json["generation"], "mk1");
        assert_eq!(json["position"], serde_json::json!({"x": 1, "y": 0}));
        assert!(json.get("orientation").is_none());
        assert!(json.get("fuel").is_none());
        assert_eq!(json["report"]["warnings"][0]["character"], "?");
    }

    #[test]
    fn test_parse_generation() {
        assert_eq!("mk1".parse::<Generation>().unwrap(), Generation::Mk1);
        assert_eq!("MK2".parse::<Generation>().unwrap(), Generation::Mk2);
        assert_eq!(" 3 ".parse::<Generation>().unwrap(), Generation::Mk3);

        let err = "mk4".parse::<Generation>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(err.message().contains("mk4"));
    }

    #[test]
    fn test_generation_round_trips_through_display() {
        for generation in Generation::all() {
            assert_eq!(generation.to_string().parse::<Generation>().unwrap(), generation);
            assert!(!generation.instruction_table().is_empty());
        }
    }
}
