//! Adaptive multi-target sweep.
//!
//! # Strategy
//!
//! A naive radar spins forever and revisits every opponent once per full
//! turn.  This controller instead:
//!
//! 1. sweeps a full turn at round start to make first contact,
//! 2. at the end of every sweep, checks which stored opponents were seen
//!    during that sweep ("fresh"),
//! 3. if every living opponent was fresh, sweeps next only as far as the
//!    outermost one plus a safety margin, reversing direction naturally
//!    because the outermost opponent now lies behind the sensor,
//! 4. otherwise falls back to a half turn in the current direction to
//!    re-acquire whoever was missed.
//!
//! The sweep-complete handler is the only place a rotation is issued, so
//! command traffic is bounded to one per sweep however many hits arrive.
//!
//! # Ties
//!
//! Fresh opponents are visited in ascending name order (the store's order)
//! and only a strictly larger offset magnitude replaces the running maximum,
//! so on an exact tie the lowest name wins.

use ar_core::{Direction, RadarConfig, Tick, normal_relative_angle};
use ar_enemy::{EnemyStore, SensorHit, is_fresh};

use crate::{RadarContext, RadarController, RadarIntent};

/// How a sweep decision was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepKind {
    /// Everyone was fresh; the sweep covers just the outermost offset.
    Narrowed,
    /// Someone was missed, or the narrowed sweep would not move at all; a
    /// fallback arc in the current direction.
    Fallback,
    /// No living opponents; the sensor is left where it is.
    Hold,
}

/// The outcome of one sweep decision, kept for inspection and logging.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepDecision {
    pub tick:        Tick,
    pub kind:        SweepKind,
    /// Rotation issued, `None` when holding.
    pub rotation:    Option<f64>,
    /// Signed offset of the outermost fresh opponent (0 when none).
    pub max_bearing: f64,
    pub scanned:     usize,
    pub living:      usize,
}

#[derive(Debug, Clone)]
pub struct AdaptiveSweepRadar {
    config: RadarConfig,

    sweep_direction: Direction,

    /// Latched once the store has held every living opponent at least once.
    has_completed_first_full_coverage: bool,

    /// Tick the current sweep was issued; the freshness window starts here.
    sweep_started: Tick,

    last_decision: Option<SweepDecision>,
}

impl AdaptiveSweepRadar {
    /// `config` is assumed valid; [`Radar::from_kind`][crate::Radar::from_kind]
    /// validates before construction.
    pub fn new(config: RadarConfig) -> Self {
        Self {
            config,
            sweep_direction: Direction::Positive,
            has_completed_first_full_coverage: false,
            sweep_started: Tick::ZERO,
            last_decision: None,
        }
    }

    #[inline]
    pub fn sweep_direction(&self) -> Direction {
        self.sweep_direction
    }

    #[inline]
    pub fn has_completed_first_full_coverage(&self) -> bool {
        self.has_completed_first_full_coverage
    }

    pub fn last_decision(&self) -> Option<&SweepDecision> {
        self.last_decision.as_ref()
    }

    /// Freshness window for the sweep ending at `now`: everything observed
    /// at or after the tick the sweep started.
    #[inline]
    fn freshness_threshold(&self, now: Tick) -> u64 {
        now.since(self.sweep_started) + 1
    }

    fn update_coverage_latch(&mut self, store: &EnemyStore, living: usize) {
        // `>=` because an opponent can be stored and then die before the
        // host's living count catches up.
        if !self.has_completed_first_full_coverage && living > 0 && store.count() >= living {
            self.has_completed_first_full_coverage = true;
            log::debug!(
                target: "ar_radar",
                "first full coverage: {} of {} opponents located",
                store.count(), living,
            );
        }
    }

    /// Outermost offset plus the margin, or `None` when that comes to no
    /// rotation at all (a dead-centre target with a zero margin).
    fn narrowed_turn(&self, max_bearing: f64) -> Option<f64> {
        let toward = Direction::from_sign(max_bearing).unwrap_or(self.sweep_direction);
        let turn = max_bearing + toward.as_f64() * self.config.sweep_margin();
        (turn != 0.0).then_some(turn)
    }

    /// Run the sweep decision and record it.
    pub fn decide(&mut self, ctx: &RadarContext, store: &EnemyStore) -> SweepDecision {
        let living = ctx.living_opponents;
        let threshold = self.freshness_threshold(ctx.tick);

        let mut max_bearing = 0.0_f64;
        let mut max_bearing_abs = 0.0_f64;
        let mut scanned = 0usize;
        for enemy in store.all().filter(|e| is_fresh(e, ctx.tick, threshold)) {
            let offset = normal_relative_angle(ctx.agent_heading + enemy.bearing - ctx.sensor_heading);
            if !offset.is_finite() {
                continue;
            }
            if offset.abs() > max_bearing_abs {
                max_bearing_abs = offset.abs();
                max_bearing = offset;
            }
            scanned += 1;
        }

        let narrowed = if scanned == living { self.narrowed_turn(max_bearing) } else { None };
        let (kind, rotation) = match narrowed {
            _ if living == 0 => (SweepKind::Hold, None),
            Some(turn) => (SweepKind::Narrowed, Some(turn)),
            None => {
                let turn = self.config.fallback_sweep_arc * self.sweep_direction.as_f64();
                (SweepKind::Fallback, Some(turn))
            }
        };

        if let Some(direction) = rotation.and_then(Direction::from_sign) {
            self.sweep_direction = direction;
        }
        self.sweep_started = ctx.tick;

        if log::log_enabled!(target: "ar_radar", log::Level::Debug) {
            let updated: Vec<String> = store
                .all()
                .map(|e| format!("{}={}", e.name, is_fresh(e, ctx.tick, threshold)))
                .collect();
            log::debug!(
                target: "ar_radar",
                "{}: new sweep {:?} ({:?}, {}/{} fresh), enemies updated: [{}]",
                ctx.tick, rotation, kind, scanned, living, updated.join(", "),
            );
        }

        let decision = SweepDecision { tick: ctx.tick, kind, rotation, max_bearing, scanned, living };
        self.last_decision = Some(decision.clone());
        decision
    }
}

impl RadarController for AdaptiveSweepRadar {
    fn init_round(&mut self, ctx: &RadarContext) -> Vec<RadarIntent> {
        self.sweep_started = ctx.tick;
        vec![
            RadarIntent::WatchSweepComplete,
            RadarIntent::AdjustForTurretTurn(true),
            RadarIntent::Rotate(self.config.initial_sweep_arc * self.sweep_direction.as_f64()),
        ]
    }

    fn on_sensor_hit(
        &mut self,
        hit:   &SensorHit,
        ctx:   &RadarContext,
        store: &mut EnemyStore,
    ) -> Vec<RadarIntent> {
        if let Err(e) = store.upsert_hit(hit, ctx.agent_position, ctx.agent_heading) {
            log::warn!(target: "ar_radar", "adaptive sweep dropped observation: {e}");
            return vec![];
        }
        self.update_coverage_latch(store, ctx.living_opponents);
        vec![]
    }

    fn on_sweep_complete(&mut self, ctx: &RadarContext, store: &EnemyStore) -> Vec<RadarIntent> {
        let decision = self.decide(ctx, store);
        self.update_coverage_latch(store, ctx.living_opponents);

        match decision.rotation {
            Some(turn) => vec![RadarIntent::Rotate(turn)],
            None => vec![],
        }
    }

    fn is_ready(&self) -> bool {
        self.has_completed_first_full_coverage
    }

    fn reset_for_new_round(&mut self) {
        *self = AdaptiveSweepRadar::new(self.config.clone());
    }
}
