//! The agent's decision core: enemy store, active radar and movement arbiter.

use ar_core::RadarConfig;
use ar_enemy::{EnemyStore, SensorHit};
use ar_movement::{LogTransitions, MovementState, TransitionObserver};
use ar_radar::{Radar, RadarContext, RadarController, RadarIntent, RadarKind, RadarResult};

/// Everything the host reports for one tick, grouped so the core can deliver
/// it in a fixed order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickEvents {
    pub hits:           Vec<SensorHit>,
    pub eliminated:     Vec<String>,
    pub sweep_complete: bool,
}

impl TickEvents {
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty() && self.eliminated.is_empty() && !self.sweep_complete
    }
}

/// Owns the per-agent state and routes host events to it.
///
/// The radar is the only writer of the store; the movement arbiter is
/// exposed through [`movement_mut`][Self::movement_mut] for whatever
/// behaviors the host runs.
///
/// # Event order
///
/// Within a tick, [`dispatch`][Self::dispatch] delivers:
///
/// ```text
/// ① sensor hits         → store upserts (+ lock-on rotations)
/// ② eliminations        → store removals
/// ③ sweep complete      → adaptive sweep decision
/// ④ tick update         → lock-on aging / tracking
/// ```
///
/// so every bearing computed in ③ and ④ sees this tick's observations.
pub struct AgentCore<O: TransitionObserver = LogTransitions> {
    store:    EnemyStore,
    radar:    Radar,
    movement: MovementState<O>,
}

impl AgentCore<LogTransitions> {
    /// Build a core running `kind` with default movement priorities.
    pub fn new(kind: RadarKind, config: RadarConfig) -> RadarResult<Self> {
        Ok(Self::with_parts(Radar::from_kind(kind, config)?, MovementState::new()))
    }
}

impl<O: TransitionObserver> AgentCore<O> {
    pub fn with_parts(radar: Radar, movement: MovementState<O>) -> Self {
        Self { store: EnemyStore::new(), radar, movement }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn store(&self) -> &EnemyStore {
        &self.store
    }

    pub fn radar(&self) -> &Radar {
        &self.radar
    }

    pub fn movement(&self) -> &MovementState<O> {
        &self.movement
    }

    pub fn movement_mut(&mut self) -> &mut MovementState<O> {
        &mut self.movement
    }

    /// Whether a gun should be allowed to fire: every opponent located once
    /// (adaptive sweep) or a target acquired (lock-on).
    #[inline]
    pub fn is_ready_to_fire(&self) -> bool {
        self.radar.is_ready()
    }

    // ── Host events ───────────────────────────────────────────────────────

    pub fn init_round(&mut self, ctx: &RadarContext) -> Vec<RadarIntent> {
        self.radar.init_round(ctx)
    }

    pub fn on_sensor_hit(&mut self, hit: &SensorHit, ctx: &RadarContext) -> Vec<RadarIntent> {
        self.radar.on_sensor_hit(hit, ctx, &mut self.store)
    }

    pub fn on_opponent_eliminated(&mut self, name: &str, ctx: &RadarContext) -> Vec<RadarIntent> {
        self.radar.on_opponent_eliminated(name, ctx, &mut self.store)
    }

    pub fn on_sweep_complete(&mut self, ctx: &RadarContext) -> Vec<RadarIntent> {
        self.radar.on_sweep_complete(ctx, &self.store)
    }

    pub fn on_tick(&mut self, ctx: &RadarContext) -> Vec<RadarIntent> {
        self.radar.on_tick(ctx, &self.store)
    }

    /// Deliver one tick's events in order and collect every intent raised.
    ///
    /// The host applies the returned intents front to back; a later
    /// `Rotate` replaces an earlier one.
    pub fn dispatch(&mut self, events: &TickEvents, ctx: &RadarContext) -> Vec<RadarIntent> {
        let mut intents = Vec::new();
        for hit in &events.hits {
            intents.extend(self.on_sensor_hit(hit, ctx));
        }
        for name in &events.eliminated {
            intents.extend(self.on_opponent_eliminated(name, ctx));
        }
        if events.sweep_complete {
            intents.extend(self.on_sweep_complete(ctx));
        }
        intents.extend(self.on_tick(ctx));
        intents
    }

    /// Forget the round: empty store, fresh radar, idle movement.
    pub fn reset_for_new_round(&mut self) {
        log::debug!(
            target: "ar_sim",
            "agent reset: forgetting {} opponents, radar {}",
            self.store.count(), self.radar.kind(),
        );
        self.store.clear();
        self.radar.reset_for_new_round();
        self.movement.reset_for_new_round();
    }
}
