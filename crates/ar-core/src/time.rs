//! Simulation time model.
//!
//! # Design
//!
//! The host advances time in whole ticks, and every decision in this
//! workspace is made once per tick, so time is a `Tick` counter and nothing
//! else.  Ticks restart at zero every round; `RoundClock` pairs the tick with
//! the round number so logs stay unambiguous across a multi-round match.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// A simulation tick within one round.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Ticks elapsed from `earlier` to `self`, saturating at zero.
    ///
    /// Observations are stamped by the host, so an `earlier` that is in fact
    /// later (a stale clock after a round reset) counts as "just now".
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0.saturating_sub(earlier.0)
    }

    #[inline]
    pub fn next(self) -> Tick {
        Tick(self.0 + 1)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── RoundClock ────────────────────────────────────────────────────────────────

/// Round number plus the current tick inside that round.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundClock {
    pub round: u32,
    pub tick:  Tick,
}

impl RoundClock {
    #[inline]
    pub fn advance(&mut self) {
        self.tick = self.tick.next();
    }

    /// Start the next round at tick zero.
    pub fn next_round(&mut self) {
        self.round += 1;
        self.tick = Tick::ZERO;
    }
}

impl fmt::Display for RoundClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}:{}", self.round, self.tick)
    }
}
