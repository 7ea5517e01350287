//! Facing direction for robots that can turn (Mk2 and later)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which way the robot is facing.
///
/// Forward is the +y axis, Right is +x, Backward is -y, Left is -x.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Forward,
    Backward,
    Left,
    Right,
}

impl Orientation {
    /// Turn counter-clockwise: F -> L -> B -> R -> F
    pub fn rotate_left(self) -> Self {
        match self {
            Orientation::Forward => Orientation::Left,
            Orientation::Left => Orientation::Backward,
            Orientation::Backward => Orientation::Right,
            Orientation::Right => Orientation::Forward,
        }
    }

    /// Turn clockwise: F -> R -> B -> L -> F
    pub fn rotate_right(self) -> Self {
        match self {
            Orientation::Forward => Orientation::Right,
            Orientation::Right => Orientation::Backward,
            Orientation::Backward => Orientation::Left,
            Orientation::Left => Orientation::Forward,
        }
    }

    /// Unit step `(dx, dy)` taken when moving forward while facing this way
    pub fn delta(self) -> (i64, i64) {
        match self {
            Orientation::Forward => (0, 1),
            Orientation::Right => (1, 0),
            Orientation::Backward => (0, -1),
            Orientation::Left => (-1, 0),
        }
    }

    pub fn all() -> [Orientation; 4] {
        [
            Orientation::Forward,
            Orientation::Right,
            Orientation::Backward,
            Orientation::Left,
        ]
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Orientation::Forward => "forward",
            Orientation::Backward => "backward",
            Orientation::Left => "left",
            Orientation::Right => "right",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_is_four_cycle() {
        for start in Orientation::all() {
            let mut left = start;
            let mut right = start;
            for _ in 0..4 {
                left = left.rotate_left();
                right = right.rotate_right();
            }
            assert_eq!(left, start);
            assert_eq!(right, start);
        }
    }

    #[test]
    fn test_left_and_right_are_inverse() {
        for o in Orientation::all() {
            assert_eq!(o.rotate_left().rotate_right(), o);
            assert_eq!(o.rotate_right().rotate_left(), o);
        }
    }

    #[test]
    fn test_rotate_left_cycle() {
        let o = Orientation::Forward.rotate_left();
        assert_eq!(o, Orientation::Left);
        let o = o.rotate_left();
        assert_eq!(o, Orientation::Backward);
        let o = o.rotate_left();
        assert_eq!(o, Orientation::Right);
    }

    #[test]
    fn test_delta_is_unit_and_opposites_cancel() {
        for o in Orientation::all() {
            let (dx, dy) = o.delta();
            assert_eq!(dx.abs() + dy.abs(), 1);

            let (ox, oy) = o.rotate_left().rotate_left().delta();
            assert_eq!((dx + ox, dy + oy), (0, 0));
        }
        assert_eq!(Orientation::Forward.delta(), (0, 1));
        assert_eq!(Orientation::Right.delta(), (1, 0));
    }

    #[test]
    fn test_default_and_serde() {
        assert_eq!(Orientation::default(), Orientation::Forward);
        assert_eq!(
            serde_json::to_value(Orientation::Backward).unwrap(),
            serde_json::json!("backward")
        );
    }
}
