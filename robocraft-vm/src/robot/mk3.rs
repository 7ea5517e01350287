//! Mk3 - Mk2 with fuel-limited forward boosts

use super::{drive, ExecutionReport, ExecutionStep, Position, Robot};
use crate::config::RobotConfig;
use crate::control::Generation;
use crate::opcode::{self, Instruction};
use crate::orientation::Orientation;
use tracing::{debug, trace};

/// Boost bookkeeping for a single `execute` call.
///
/// Never stored on the robot: every call starts unboosted.
#[derive(Debug, Clone, Copy, Default)]
struct BoostState {
    /// Set by the first digit of the call and never cleared afterwards
    boosting: bool,
    /// Distance of the next forward move while boosting
    magnitude: u32,
}

impl BoostState {
    /// Burn fuel for a boost of `requested`, capped at `max_boost` and at the
    /// fuel left. Fuel is spent now, whether or not a forward move follows.
    fn engage(&mut self, requested: u32, max_boost: u32, fuel: &mut u32) {
        let magnitude = requested.min(max_boost).min(*fuel);
        *fuel -= magnitude;
        self.boosting = true;
        self.magnitude = magnitude;
    }

    fn forward_distance(&self) -> u32 {
        if self.boosting {
            self.magnitude
        } else {
            1
        }
    }

    /// Any move uses up the pending boost
    fn settle(&mut self) {
        self.magnitude = 1;
    }
}

/// Third generation robot.
///
/// Behaves like Mk2, plus a digit before `F` boosts that move. Boosting
/// burns one fuel per unit of distance. Backward moves are never boosted.
#[derive(Debug, Clone)]
pub struct RobotMk3 {
    position: Position,
    orientation: Orientation,
    fuel: u32,
    max_boost: u32,
    record_trace: bool,
}

impl RobotMk3 {
    pub fn new(x: i64, y: i64) -> Self {
        Self::spawn(Position::new(x, y), &RobotConfig::default())
    }
}

impl Default for RobotMk3 {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl Robot for RobotMk3 {
    fn spawn(position: Position, config: &RobotConfig) -> Self {
        Self {
            position: position.clamped(),
            orientation: Orientation::default(),
            fuel: config.initial_fuel,
            max_boost: config.max_boost,
            record_trace: config.record_trace,
        }
    }

    fn generation(&self) -> Generation {
        Generation::Mk3
    }

    fn position(&self) -> Position {
        self.position
    }

    fn orientation(&self) -> Option<Orientation> {
        Some(self.orientation)
    }

    fn fuel(&self) -> Option<u32> {
        Some(self.fuel)
    }

    fn execute(&mut self, instructions: &str) -> ExecutionReport {
        let mut report = ExecutionReport::default();
        let mut boost = BoostState::default();
        let fuel_before = self.fuel;

        for (index, instruction) in opcode::decode(instructions) {
            match instruction {
                Instruction::Boost { value } => {
                    boost.engage(u32::from(value), self.max_boost, &mut self.fuel);
                }
                Instruction::Left => self.orientation = self.orientation.rotate_left(),
                Instruction::Right => self.orientation = self.orientation.rotate_right(),
                Instruction::Forward => {
                    let distance = i64::from(boost.forward_distance());
                    self.position = drive(self.position, self.orientation, distance);
                    boost.settle();
                }
                Instruction::Backward => {
                    self.position = drive(self.position, self.orientation, -1);
                    boost.settle();
                }
                Instruction::Unknown { .. } => {
                    report.skip();
                    continue;
                }
            }

            trace!(
                index,
                %instruction,
                position = %self.position,
                orientation = %self.orientation,
                fuel = self.fuel,
                "mk3 step"
            );
            report.record(
                self.record_trace,
                ExecutionStep {
                    index,
                    instruction,
                    position: self.position,
                    orientation: Some(self.orientation),
                    fuel: Some(self.fuel),
                },
            );
        }

        debug!(
            executed = report.executed,
            ignored = report.ignored,
            position = %self.position,
            fuel_used = fuel_before - self.fuel,
            fuel = self.fuel,
            "mk3 executed instructions"
        );
        report
    }
}
