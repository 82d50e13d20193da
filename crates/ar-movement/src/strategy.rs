//! Movement strategy tags and their priorities.
//!
//! The tag enum carries no ordering of its own.  Precedence lives in a
//! [`PriorityTable`] so it can be tested and overridden independently of the
//! variant list; the arbiter holds one table for its whole lifetime, which
//! keeps the ordering static within a match.

use std::fmt;

/// Identifies one movement behavior.  `None` means no behavior is steering.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveStrategy {
    #[default]
    None,
    /// Unpredictable jitter while nothing better applies.
    Random,
    /// Back-and-forth strafing perpendicular to the nearest opponent.
    Oscillate,
    /// Drift away from the weighted mass of all opponents.
    AntiGravity,
    /// Dodge incoming fire by surfing its expected wavefront.
    WaveSurf,
    /// Drive straight at a weakened opponent.
    Ram,
    /// Steer off a wall before the body hits it.
    AvoidWall,
}

impl MoveStrategy {
    pub const COUNT: usize = 7;

    pub const ALL: [MoveStrategy; MoveStrategy::COUNT] = [
        MoveStrategy::None,
        MoveStrategy::Random,
        MoveStrategy::Oscillate,
        MoveStrategy::AntiGravity,
        MoveStrategy::WaveSurf,
        MoveStrategy::Ram,
        MoveStrategy::AvoidWall,
    ];

    /// Dense index into per-strategy tables.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            MoveStrategy::None        => 0,
            MoveStrategy::Random      => 1,
            MoveStrategy::Oscillate   => 2,
            MoveStrategy::AntiGravity => 3,
            MoveStrategy::WaveSurf    => 4,
            MoveStrategy::Ram         => 5,
            MoveStrategy::AvoidWall   => 6,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MoveStrategy::None        => "none",
            MoveStrategy::Random      => "random",
            MoveStrategy::Oscillate   => "oscillate",
            MoveStrategy::AntiGravity => "anti_gravity",
            MoveStrategy::WaveSurf    => "wave_surf",
            MoveStrategy::Ram         => "ram",
            MoveStrategy::AvoidWall   => "avoid_wall",
        }
    }
}

impl fmt::Display for MoveStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── PriorityTable ─────────────────────────────────────────────────────────────

/// Integer precedence for every [`MoveStrategy`].  Lower value, lower
/// precedence.
///
/// The defaults rank reactive, safety-driven behaviors above ambient ones,
/// with `None` below everything so any behavior may start from idle.
/// Behaviors that want a different ranking build their own table:
///
/// ```rust
/// use ar_movement::{MoveStrategy, PriorityTable};
///
/// let table = PriorityTable::default().with_priority(MoveStrategy::Ram, 5);
/// assert!(table.priority(MoveStrategy::Ram) < table.priority(MoveStrategy::Oscillate));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriorityTable {
    priorities: [i32; MoveStrategy::COUNT],
}

impl Default for PriorityTable {
    fn default() -> Self {
        let mut priorities = [0; MoveStrategy::COUNT];
        for strategy in MoveStrategy::ALL {
            priorities[strategy.index()] = match strategy {
                MoveStrategy::None        => 0,
                MoveStrategy::Random      => 10,
                MoveStrategy::Oscillate   => 20,
                MoveStrategy::AntiGravity => 30,
                MoveStrategy::WaveSurf    => 40,
                MoveStrategy::Ram         => 50,
                MoveStrategy::AvoidWall   => 90,
            };
        }
        Self { priorities }
    }
}

impl PriorityTable {
    #[inline]
    pub fn priority(&self, strategy: MoveStrategy) -> i32 {
        self.priorities[strategy.index()]
    }

    /// Builder-style override of one entry.
    pub fn with_priority(mut self, strategy: MoveStrategy, priority: i32) -> Self {
        self.priorities[strategy.index()] = priority;
        self
    }

    /// Strategies sorted by ascending priority (ties keep declaration order).
    pub fn ranked(&self) -> Vec<MoveStrategy> {
        let mut ranked = MoveStrategy::ALL.to_vec();
        ranked.sort_by_key(|s| self.priority(*s));
        ranked
    }
}
