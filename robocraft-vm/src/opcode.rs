//! # Robot Instructions
//!
//! The instruction set understood by the robot interpreters.
//!
//! Every character of an instruction string decodes to exactly one
//! [`Instruction`]. Decoding never fails: characters outside the instruction
//! set become [`Instruction::Unknown`], and each robot generation decides
//! whether that is worth a warning or is silently skipped.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single decoded instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Instruction {
    // =========================================================================
    // MOTION
    // =========================================================================
    /// `F` - move forward one unit (or by the pending boost on Mk3)
    Forward,

    /// `B` - move backward one unit
    Backward,

    // =========================================================================
    // STEERING
    // =========================================================================
    /// `L` - on Mk1 a sideways step, on Mk2+ a counter-clockwise turn
    Left,

    /// `R` - on Mk1 a sideways step, on Mk2+ a clockwise turn
    Right,

    // =========================================================================
    // FUEL
    // =========================================================================
    /// `0`-`9` - request a boost for the next forward move (Mk3 only)
    Boost {
        /// Requested magnitude, before clamping to the boost ceiling and fuel
        value: u8,
    },

    /// Any character outside the instruction set
    Unknown {
        /// The offending character
        character: char,
    },
}

impl Instruction {
    /// Decode a single character
    pub fn decode(c: char) -> Self {
        match c {
            'F' => Instruction::Forward,
            'B' => Instruction::Backward,
            'L' => Instruction::Left,
            'R' => Instruction::Right,
            '0'..='9' => Instruction::Boost {
                value: c as u8 - b'0',
            },
            character => Instruction::Unknown { character },
        }
    }

    /// The character this instruction was decoded from
    pub fn as_char(&self) -> char {
        match self {
            Instruction::Forward => 'F',
            Instruction::Backward => 'B',
            Instruction::Left => 'L',
            Instruction::Right => 'R',
            Instruction::Boost { value } => char::from(b'0' + value),
            Instruction::Unknown { character } => *character,
        }
    }

    pub fn mnemonic(&self) -> &'static str {
        match self {
            Instruction::Forward => "FORWARD",
            Instruction::Backward => "BACKWARD",
            Instruction::Left => "LEFT",
            Instruction::Right => "RIGHT",
            Instruction::Boost { .. } => "BOOST",
            Instruction::Unknown { .. } => "UNKNOWN",
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Boost { value } => write!(f, "{} {}", self.mnemonic(), value),
            Instruction::Unknown { character } => {
                write!(f, "{} {:?}", self.mnemonic(), character)
            }
            _ => write!(f, "{}", self.mnemonic()),
        }
    }
}

/// Decode an instruction string left to right.
///
/// Yields the character index (not the byte offset) with each instruction.
pub fn decode(instructions: &str) -> impl Iterator<Item = (usize, Instruction)> + '_ {
    instructions.chars().map(Instruction::decode).enumerate()
}
