//! Arena settings.

use ar_core::Point2;

use crate::{ArenaError, ArenaResult};

/// Everything the harness needs to lay out and run an arena.
///
/// The agent itself never moves; only its sensor turns.  Opponents walk at
/// `opponent_speed` units per tick, bouncing off the walls.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArenaConfig {
    pub width:  f64,
    pub height: f64,

    /// Ticks per round.
    pub total_ticks: u64,

    /// Rounds played by [`Arena::run`][crate::Arena::run].
    pub rounds: u32,

    /// Master seed; every opponent's walk is derived from it.
    pub seed: u64,

    pub opponent_speed: f64,

    /// Opponents farther than this are invisible to the sensor.
    pub sensor_range: f64,

    pub agent_position: Point2,

    /// Body heading, compass radians.  Also the sensor heading at round start.
    pub agent_heading: f64,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width:          800.0,
            height:         600.0,
            total_ticks:    500,
            rounds:         1,
            seed:           42,
            opponent_speed: 8.0,
            sensor_range:   1200.0,
            agent_position: Point2::new(400.0, 300.0),
            agent_heading:  0.0,
        }
    }
}

impl ArenaConfig {
    #[inline]
    pub fn min_corner(&self) -> Point2 {
        Point2::ORIGIN
    }

    #[inline]
    pub fn max_corner(&self) -> Point2 {
        Point2::new(self.width, self.height)
    }

    /// `true` when `p` lies on the arena floor (walls included).
    pub fn contains(&self, p: Point2) -> bool {
        p.is_finite() && p.clamp(self.min_corner(), self.max_corner()) == p
    }

    pub fn validate(&self) -> ArenaResult<()> {
        for (name, value) in [
            ("width",        self.width),
            ("height",       self.height),
            ("sensor_range", self.sensor_range),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ArenaError::Config(format!(
                    "{name} must be finite and positive, got {value}"
                )));
            }
        }
        if !self.opponent_speed.is_finite() || self.opponent_speed < 0.0 {
            return Err(ArenaError::Config(format!(
                "opponent_speed must be finite and non-negative, got {}",
                self.opponent_speed
            )));
        }
        if !self.agent_heading.is_finite() {
            return Err(ArenaError::Config("agent_heading must be finite".into()));
        }
        if !self.contains(self.agent_position) {
            return Err(ArenaError::Config(format!(
                "agent position {} is outside the arena", self.agent_position
            )));
        }
        if self.rounds == 0 {
            return Err(ArenaError::Config("rounds must be at least 1".into()));
        }
        Ok(())
    }
}
