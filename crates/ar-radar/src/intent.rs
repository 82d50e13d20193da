//! Commands a radar controller asks the host to perform.

use ar_core::Direction;

/// One request from a radar controller to the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RadarIntent {
    /// Rotate the sensor by this many radians from its current heading,
    /// positive clockwise.  Replaces any unfinished rotation.
    ///
    /// `±f64::INFINITY` means "as far as the host allows in this direction"
    /// and is the only non-finite value a controller emits.
    Rotate(f64),

    /// Start reporting "sweep complete" whenever a commanded rotation ends.
    WatchSweepComplete,

    /// Keep the sensor's world heading independent of body and turret turns.
    AdjustForTurretTurn(bool),
}

impl RadarIntent {
    /// Unbounded rotation in `direction`.
    #[inline]
    pub fn spin(direction: Direction) -> RadarIntent {
        RadarIntent::Rotate(direction.as_f64() * f64::INFINITY)
    }

    /// The rotation carried by this intent, if it is a `Rotate`.
    #[inline]
    pub fn rotation(self) -> Option<f64> {
        match self {
            RadarIntent::Rotate(angle) => Some(angle),
            _ => None,
        }
    }
}
