//! Arena coordinates.
//!
//! The arena is a flat plane measured in host units (pixels in most hosts).
//! `Point2` uses `f64` because bearings derived from it feed straight into
//! sensor rotation commands, where single precision drifts visibly over a
//! long round.

use crate::angle::normal_absolute_angle;

/// A position on the arena floor.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const ORIGIN: Point2 = Point2 { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance.
    #[inline]
    pub fn distance_to(self, other: Point2) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Compass bearing from `self` to `other`, in `[0, 2π)`.
    ///
    /// `0` is straight up the `+y` axis and angles grow clockwise.
    #[inline]
    pub fn bearing_to(self, other: Point2) -> f64 {
        normal_absolute_angle((other.x - self.x).atan2(other.y - self.y))
    }

    /// The point `distance` away along compass heading `angle`.
    #[inline]
    pub fn project(self, angle: f64, distance: f64) -> Point2 {
        Point2 {
            x: self.x + angle.sin() * distance,
            y: self.y + angle.cos() * distance,
        }
    }

    /// Clamp into the rectangle `[min, max]` on both axes.
    #[inline]
    pub fn clamp(self, min: Point2, max: Point2) -> Point2 {
        Point2 {
            x: self.x.clamp(min.x, max.x),
            y: self.y.clamp(min.y, max.y),
        }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl std::fmt::Display for Point2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}
