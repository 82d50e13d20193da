//! The `Arena` struct and its tick loop.

use std::collections::BTreeMap;
use std::f64::consts::{PI, TAU};

use ar_core::{Point2, RoundClock, SimRng, Tick, normal_absolute_angle, normal_relative_angle};
use ar_enemy::SensorHit;
use ar_movement::TransitionObserver;
use ar_radar::{RadarContext, RadarIntent};

use crate::{AgentCore, ArenaConfig, ArenaObserver, TickEvents, TickReport};

/// Chance per tick that an opponent picks a new random heading.
const TURN_PROBABILITY: f64 = 0.1;

/// Starting energy reported in every hit.
const START_ENERGY: f64 = 100.0;

/// Slack on swept-arc edges and on "rotation finished".
const ARC_EPSILON: f64 = 1e-9;

// ── Opponents ─────────────────────────────────────────────────────────────────

/// A scripted opponent on a seeded random walk.
pub(crate) struct Opponent {
    pub(crate) name:     String,
    pub(crate) spawn:    Point2,
    pub(crate) position: Point2,
    pub(crate) heading:  f64,
    pub(crate) velocity: f64,
    pub(crate) alive:    bool,
    pub(crate) rng:      SimRng,
}

impl Opponent {
    pub(crate) fn new(name: String, spawn: Point2, mut rng: SimRng) -> Self {
        let heading = rng.gen_range(0.0..TAU);
        Self { name, spawn, position: spawn, heading, velocity: 0.0, alive: true, rng }
    }

    fn respawn(&mut self) {
        self.position = self.spawn;
        self.velocity = 0.0;
        self.alive = true;
    }

    /// One step of the walk; reverses heading on a wall.
    fn step(&mut self, speed: f64, min: Point2, max: Point2) {
        if self.rng.gen_bool(TURN_PROBABILITY) {
            self.heading = self.rng.gen_range(0.0..TAU);
        }
        let next = self.position.project(self.heading, speed);
        let clamped = next.clamp(min, max);
        if clamped != next {
            self.heading = normal_absolute_angle(self.heading + PI);
        }
        self.position = clamped;
        self.velocity = speed;
    }
}

// ── Sensor ────────────────────────────────────────────────────────────────────

/// Host-side sensor physics: a heading and the unfinished part of the last
/// commanded rotation.
#[derive(Debug, Clone, Default)]
pub(crate) struct Sensor {
    pub(crate) heading:            f64,
    pub(crate) remaining:          f64,
    pub(crate) turning:            bool,
    pub(crate) watching:           bool,
    pub(crate) adjust_for_turret:  bool,
}

/// Result of one tick of sensor motion.
pub(crate) struct Swept {
    start:                f64,
    step:                 f64,
    pub(crate) completed: bool,
}

impl Sensor {
    pub(crate) fn at_heading(heading: f64) -> Self {
        Self { heading, ..Self::default() }
    }

    /// Replace the unfinished rotation.  A zero command still completes on
    /// the next turn.
    pub(crate) fn command(&mut self, angle: f64) {
        self.remaining = angle;
        self.turning = true;
    }

    pub(crate) fn turn(&mut self, max_rate: f64) -> Swept {
        let start = self.heading;
        let step = self.remaining.clamp(-max_rate, max_rate);
        self.heading = normal_absolute_angle(start + step);
        if self.remaining.is_finite() {
            self.remaining -= step;
            if self.remaining.abs() < ARC_EPSILON {
                self.remaining = 0.0;
            }
        }
        let completed = self.turning && self.remaining == 0.0;
        if completed {
            self.turning = false;
        }
        Swept { start, step, completed }
    }
}

impl Swept {
    /// `true` when world bearing `bearing` lies inside this tick's arc.
    fn covers(&self, bearing: f64) -> bool {
        let offset = normal_relative_angle(bearing - self.start);
        if self.step >= 0.0 {
            offset >= -ARC_EPSILON && offset <= self.step + ARC_EPSILON
        } else {
            offset <= ARC_EPSILON && offset >= self.step - ARC_EPSILON
        }
    }
}

// ── Arena ─────────────────────────────────────────────────────────────────────

/// A deterministic host for one agent.
///
/// `Arena` plays the part of the game engine: it moves opponents, turns the
/// sensor no faster than the radar config allows, works out which opponents
/// the beam crossed, and feeds the resulting events to the [`AgentCore`]:
///
/// 1. **Opponents** take one random-walk step.
/// 2. **Sensor** turns by the unfinished rotation, clamped to the max rate.
/// 3. **Eliminations** scheduled for this tick take effect.
/// 4. **Detection**: living opponents within range whose bearing lies in
///    the swept arc become hits, in name order.
/// 5. **Dispatch**: hits, eliminations, sweep complete, tick update.
/// 6. **Apply** every returned intent in order.
///
/// Create via [`ArenaBuilder`][crate::ArenaBuilder].
pub struct Arena<O: TransitionObserver = ar_movement::LogTransitions> {
    pub config: ArenaConfig,

    pub clock: RoundClock,

    pub agent: AgentCore<O>,

    pub(crate) opponents: Vec<Opponent>,

    pub(crate) sensor: Sensor,

    pub(crate) sensor_max_turn_rate: f64,

    /// Names to eliminate, keyed by `(round, tick)`.
    pub(crate) eliminations: BTreeMap<(u32, Tick), Vec<String>>,

    pub(crate) started: bool,
}

impl<O: TransitionObserver> Arena<O> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Play the current round to `config.total_ticks`, then any remaining
    /// rounds up to `config.rounds`.
    pub fn run<B: ArenaObserver>(&mut self, observer: &mut B) {
        loop {
            self.ensure_started(observer);
            while self.clock.tick.0 < self.config.total_ticks {
                self.step(observer);
            }
            observer.on_round_end(self.clock.round, self.agent.store());
            if self.clock.round + 1 >= self.config.rounds {
                break;
            }
            self.next_round();
        }
        observer.on_arena_end(self.clock);
    }

    /// Run exactly `n` ticks of the current round (ignores `total_ticks`).
    pub fn run_ticks<B: ArenaObserver>(&mut self, n: u64, observer: &mut B) {
        self.ensure_started(observer);
        for _ in 0..n {
            self.step(observer);
        }
    }

    /// Reset the agent and respawn every opponent for the next round.
    pub fn next_round(&mut self) {
        self.clock.next_round();
        self.agent.reset_for_new_round();
        for opponent in &mut self.opponents {
            opponent.respawn();
        }
        self.sensor = Sensor::at_heading(self.config.agent_heading);
        self.started = false;
        log::debug!(target: "ar_sim", "{}: new round", self.clock);
    }

    pub fn sensor_heading(&self) -> f64 {
        self.sensor.heading
    }

    /// Whether the agent asked to keep its sensor independent of turret turns.
    pub fn adjusts_for_turret_turn(&self) -> bool {
        self.sensor.adjust_for_turret
    }

    pub fn living_opponents(&self) -> usize {
        self.opponents.iter().filter(|o| o.alive).count()
    }

    pub fn opponent_position(&self, name: &str) -> Option<Point2> {
        self.opponents.iter().find(|o| o.name == name).map(|o| o.position)
    }

    // ── Tick processing ───────────────────────────────────────────────────

    fn context(&self) -> RadarContext {
        RadarContext::new(
            self.clock.tick,
            self.config.agent_heading,
            self.sensor.heading,
            self.living_opponents(),
        )
        .at(self.config.agent_position)
    }

    fn ensure_started<B: ArenaObserver>(&mut self, observer: &mut B) {
        if self.started {
            return;
        }
        self.started = true;
        let intents = self.agent.init_round(&self.context());
        self.apply(&intents);
        log::debug!(
            target: "ar_sim",
            "{}: round start, {} opponents",
            self.clock, self.living_opponents(),
        );
        observer.on_round_start(self.clock, &intents);
    }

    fn step<B: ArenaObserver>(&mut self, observer: &mut B) {
        let now = self.clock.tick;
        observer.on_tick_start(self.clock);

        let (min, max) = (self.config.min_corner(), self.config.max_corner());
        let speed = self.config.opponent_speed;
        for opponent in self.opponents.iter_mut().filter(|o| o.alive) {
            opponent.step(speed, min, max);
        }

        let swept = self.sensor.turn(self.sensor_max_turn_rate);

        let mut events = TickEvents {
            eliminated: self.eliminate_scheduled(now),
            sweep_complete: swept.completed && self.sensor.watching,
            ..TickEvents::default()
        };
        events.hits = self.detect(&swept, now);

        let ctx = self.context();
        let intents = self.agent.dispatch(&events, &ctx);
        let rotation = self.apply(&intents);

        let report = TickReport {
            clock:          self.clock,
            hits:           events.hits.iter().map(|h| h.name.clone()).collect(),
            eliminated:     events.eliminated,
            sweep_complete: events.sweep_complete,
            sensor_heading: self.sensor.heading,
            rotation,
            living:         ctx.living_opponents,
        };
        log::trace!(
            target: "ar_sim",
            "{}: sensor {:.3}, hits {:?}, rotation {:?}",
            report.clock, report.sensor_heading, report.hits, report.rotation,
        );
        observer.on_tick_end(&report);

        self.clock.advance();
    }

    fn eliminate_scheduled(&mut self, now: Tick) -> Vec<String> {
        let Some(names) = self.eliminations.get(&(self.clock.round, now)) else {
            return vec![];
        };
        let mut eliminated = Vec::new();
        for opponent in self.opponents.iter_mut().filter(|o| o.alive) {
            if names.contains(&opponent.name) {
                opponent.alive = false;
                eliminated.push(opponent.name.clone());
            }
        }
        eliminated
    }

    fn detect(&self, swept: &Swept, now: Tick) -> Vec<SensorHit> {
        let origin = self.config.agent_position;
        let mut hits: Vec<SensorHit> = self
            .opponents
            .iter()
            .filter(|o| o.alive)
            .filter(|o| origin.distance_to(o.position) <= self.config.sensor_range)
            .filter_map(|o| {
                let bearing = origin.bearing_to(o.position);
                swept.covers(bearing).then(|| {
                    let relative = normal_relative_angle(bearing - self.config.agent_heading);
                    SensorHit::new(o.name.clone(), relative, o.position, now)
                        .with_motion(o.heading, o.velocity)
                        .with_energy(START_ENERGY)
                })
            })
            .collect();
        hits.sort_by(|a, b| a.name.cmp(&b.name));
        hits
    }

    /// Apply intents front to back; returns the last rotation commanded.
    fn apply(&mut self, intents: &[RadarIntent]) -> Option<f64> {
        let mut rotation = None;
        for intent in intents {
            match *intent {
                RadarIntent::Rotate(angle) if angle.is_nan() => {
                    log::warn!(target: "ar_sim", "{}: ignoring NaN sensor rotation", self.clock);
                }
                RadarIntent::Rotate(angle) => {
                    self.sensor.command(angle);
                    rotation = Some(angle);
                }
                RadarIntent::WatchSweepComplete => self.sensor.watching = true,
                RadarIntent::AdjustForTurretTurn(on) => self.sensor.adjust_for_turret = on,
            }
        }
        rotation
    }
}
