//! Raw sensor observations delivered by the host.

use ar_core::{Point2, Tick};

/// One opponent seen by the sensor during one tick.
///
/// The host produces at most one `SensorHit` per opponent per sweep
/// position.  `bearing` is relative to the agent's body heading at the
/// moment of the hit; `heading`, `velocity` and `energy` describe the
/// opponent itself and are carried along for movement and firing modules.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensorHit {
    pub name:     String,
    pub bearing:  f64,
    pub position: Point2,
    pub tick:     Tick,
    pub heading:  f64,
    pub velocity: f64,
    pub energy:   f64,
}

impl SensorHit {
    /// A hit with only the fields the radar controllers need; kinematics
    /// default to a stationary opponent at full energy.
    pub fn new(name: impl Into<String>, bearing: f64, position: Point2, tick: Tick) -> Self {
        Self {
            name: name.into(),
            bearing,
            position,
            tick,
            heading:  0.0,
            velocity: 0.0,
            energy:   100.0,
        }
    }

    pub fn with_motion(mut self, heading: f64, velocity: f64) -> Self {
        self.heading = heading;
        self.velocity = velocity;
        self
    }

    pub fn with_energy(mut self, energy: f64) -> Self {
        self.energy = energy;
        self
    }
}
