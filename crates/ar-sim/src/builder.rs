//! Fluent builder for constructing an [`Arena`].

use std::collections::{BTreeMap, BTreeSet};

use ar_core::{Point2, RadarConfig, RoundClock, SimRng, Tick};
use ar_movement::{LogTransitions, MovementState, PriorityTable, TransitionObserver};
use ar_radar::{Radar, RadarKind};

use crate::arena::{Opponent, Sensor};
use crate::{AgentCore, Arena, ArenaConfig, ArenaError, ArenaResult};

/// Fluent builder for [`Arena<O>`].
///
/// # Optional inputs (have defaults)
///
/// | Method                 | Default                        |
/// |------------------------|--------------------------------|
/// | `.radar(kind)`         | `RadarKind::AdaptiveSweep`     |
/// | `.radar_config(c)`     | `RadarConfig::default()`       |
/// | `.priorities(t)`       | `PriorityTable::default()`     |
/// | `.transitions(o)`      | `LogTransitions`               |
///
/// At least one `.opponent(..)` is required.
///
/// # Example
///
/// ```rust,ignore
/// let mut arena = ArenaBuilder::new(ArenaConfig::default())
///     .radar(RadarKind::LockOn)
///     .opponent("crazy", Point2::new(100.0, 500.0))
///     .opponent("walls", Point2::new(700.0, 100.0))
///     .eliminate("walls", 0, Tick(120))
///     .build()?;
/// arena.run(&mut NoopObserver);
/// ```
pub struct ArenaBuilder<O: TransitionObserver = LogTransitions> {
    config:       ArenaConfig,
    kind:         RadarKind,
    radar_config: RadarConfig,
    priorities:   PriorityTable,
    transitions:  O,
    opponents:    Vec<(String, Point2)>,
    eliminations: Vec<(String, u32, Tick)>,
}

impl ArenaBuilder<LogTransitions> {
    pub fn new(config: ArenaConfig) -> Self {
        Self {
            config,
            kind:         RadarKind::default(),
            radar_config: RadarConfig::default(),
            priorities:   PriorityTable::default(),
            transitions:  LogTransitions,
            opponents:    Vec::new(),
            eliminations: Vec::new(),
        }
    }
}

impl<O: TransitionObserver> ArenaBuilder<O> {
    pub fn radar(mut self, kind: RadarKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn radar_config(mut self, radar_config: RadarConfig) -> Self {
        self.radar_config = radar_config;
        self
    }

    pub fn priorities(mut self, priorities: PriorityTable) -> Self {
        self.priorities = priorities;
        self
    }

    /// Replace the strategy-transition sink.
    pub fn transitions<T: TransitionObserver>(self, transitions: T) -> ArenaBuilder<T> {
        ArenaBuilder {
            config:       self.config,
            kind:         self.kind,
            radar_config: self.radar_config,
            priorities:   self.priorities,
            transitions,
            opponents:    self.opponents,
            eliminations: self.eliminations,
        }
    }

    /// Add an opponent spawning at `position` every round.
    pub fn opponent(mut self, name: impl Into<String>, position: Point2) -> Self {
        self.opponents.push((name.into(), position));
        self
    }

    /// Eliminate `name` at `tick` of round `round`.
    pub fn eliminate(mut self, name: impl Into<String>, round: u32, tick: Tick) -> Self {
        self.eliminations.push((name.into(), round, tick));
        self
    }

    /// Validate inputs, seed the opponents and return a ready-to-run arena.
    pub fn build(self) -> ArenaResult<Arena<O>> {
        self.config.validate()?;
        self.radar_config.validate()?;

        if self.opponents.is_empty() {
            return Err(ArenaError::NoOpponents);
        }
        let mut names = BTreeSet::new();
        for (name, position) in &self.opponents {
            if name.is_empty() {
                return Err(ArenaError::Config("opponent names must not be empty".into()));
            }
            if !names.insert(name.as_str()) {
                return Err(ArenaError::DuplicateOpponent(name.clone()));
            }
            if !self.config.contains(*position) {
                return Err(ArenaError::Config(format!(
                    "opponent {name:?} spawns outside the arena at {position}"
                )));
            }
        }

        let mut eliminations: BTreeMap<(u32, Tick), Vec<String>> = BTreeMap::new();
        for (name, round, tick) in self.eliminations {
            if !names.contains(name.as_str()) {
                return Err(ArenaError::UnknownOpponent(name));
            }
            eliminations.entry((round, tick)).or_default().push(name);
        }

        // ── Seed one walk per opponent ────────────────────────────────────
        let mut rng = SimRng::new(self.config.seed);
        let opponents = self
            .opponents
            .into_iter()
            .enumerate()
            .map(|(i, (name, spawn))| Opponent::new(name, spawn, rng.child(i as u64)))
            .collect();

        let sensor_max_turn_rate = self.radar_config.sensor_max_turn_rate;
        let radar = Radar::from_kind(self.kind, self.radar_config)?;
        let movement = MovementState::with_observer(self.priorities, self.transitions);

        Ok(Arena {
            sensor: Sensor::at_heading(self.config.agent_heading),
            config: self.config,
            clock: RoundClock::default(),
            agent: AgentCore::with_parts(radar, movement),
            opponents,
            sensor_max_turn_rate,
            eliminations,
            started: false,
        })
    }
}
