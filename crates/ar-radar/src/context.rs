//! Read-only view of the agent passed to every radar callback.

use ar_core::{Point2, Tick};

/// What the host reports about the agent at the moment of an event.
///
/// The agent core refreshes this once per tick from the host's status
/// report and hands the same value to every callback of that tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RadarContext {
    pub tick: Tick,

    /// Body heading, compass radians.
    pub agent_heading: f64,

    pub agent_position: Point2,

    /// Sensor heading, compass radians.
    pub sensor_heading: f64,

    /// Opponents still alive according to the host.
    pub living_opponents: usize,
}

impl RadarContext {
    #[inline]
    pub fn new(
        tick:             Tick,
        agent_heading:    f64,
        sensor_heading:   f64,
        living_opponents: usize,
    ) -> Self {
        Self {
            tick,
            agent_heading,
            agent_position: Point2::ORIGIN,
            sensor_heading,
            living_opponents,
        }
    }

    pub fn at(mut self, agent_position: Point2) -> Self {
        self.agent_position = agent_position;
        self
    }
}
