//! A rotation or lateral direction that can never be zero.

use std::fmt;

/// `+1` or `-1`, as a type.
///
/// Used for the lateral movement flag and for sensor sweep directions.  The
/// zero case is unrepresentable, so "which way next" is always answerable.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// `+1` - clockwise for rotations.
    #[default]
    Positive,
    /// `-1` - counter-clockwise for rotations.
    Negative,
}

impl Direction {
    /// Direction of a signed value, or `None` for zero (and NaN).
    #[inline]
    pub fn from_sign(value: f64) -> Option<Direction> {
        if value > 0.0 {
            Some(Direction::Positive)
        } else if value < 0.0 {
            Some(Direction::Negative)
        } else {
            None
        }
    }

    /// Direction of a signed integer, or `None` for zero.
    #[inline]
    pub fn from_int(value: i32) -> Option<Direction> {
        match value.signum() {
            1  => Some(Direction::Positive),
            -1 => Some(Direction::Negative),
            _  => None,
        }
    }

    #[inline]
    pub fn reversed(self) -> Direction {
        match self {
            Direction::Positive => Direction::Negative,
            Direction::Negative => Direction::Positive,
        }
    }

    /// `1` or `-1`.
    #[inline]
    pub fn as_i32(self) -> i32 {
        match self {
            Direction::Positive => 1,
            Direction::Negative => -1,
        }
    }

    /// `1.0` or `-1.0`, for multiplying angles and speeds.
    #[inline]
    pub fn as_f64(self) -> f64 {
        self.as_i32() as f64
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Positive => "+1",
            Direction::Negative => "-1",
        })
    }
}
