//! Single-target lock.
//!
//! Keeps the sensor on the most recently observed opponent.  While the lock
//! is fresh (`ticks_since_last_observation < lock_on_stale_ticks`) the
//! command is the shortest offset to the target's last absolute bearing plus
//! a small overshoot in the same direction, so the narrow beam still crosses
//! a target that drifted during the tick.  Once stale, the sensor spins in
//! its last direction until anything is hit again.

use ar_core::{Direction, RadarConfig, Tick, normal_relative_angle};
use ar_enemy::{EnemyStore, SensorHit};

use crate::{RadarContext, RadarController, RadarIntent};

#[derive(Debug, Clone)]
pub struct LockOnRadar {
    config: RadarConfig,

    /// Ticks since the last hit.  Starts stale so a fresh round searches.
    ticks_since_last_observation: u32,

    /// Last known world bearing of the target, `None` until the first hit.
    target_absolute_bearing: Option<f64>,

    target_name: Option<String>,

    /// Tick of the most recent hit; `on_tick` does not age the lock twice.
    last_hit: Option<Tick>,

    /// Direction of the last rotation issued, reused when searching.
    last_direction: Direction,
}

impl LockOnRadar {
    /// `config` is assumed valid; [`Radar::from_kind`][crate::Radar::from_kind]
    /// validates before construction.
    pub fn new(config: RadarConfig) -> Self {
        Self {
            ticks_since_last_observation: config.lock_on_stale_ticks,
            config,
            target_absolute_bearing: None,
            target_name: None,
            last_hit: None,
            last_direction: Direction::Positive,
        }
    }

    #[inline]
    pub fn ticks_since_last_observation(&self) -> u32 {
        self.ticks_since_last_observation
    }

    #[inline]
    pub fn target_absolute_bearing(&self) -> Option<f64> {
        self.target_absolute_bearing
    }

    pub fn target_name(&self) -> Option<&str> {
        self.target_name.as_deref()
    }

    /// `true` while the lock is fresh enough to track.
    #[inline]
    pub fn is_tracking(&self) -> bool {
        self.target_absolute_bearing.is_some()
            && self.ticks_since_last_observation < self.config.lock_on_stale_ticks
    }

    /// Shared by the hit handler and the per-tick update.
    fn issue(&mut self, ctx: &RadarContext) -> Vec<RadarIntent> {
        if let Some(turn) = self.tracking_turn(ctx) {
            if let Some(direction) = Direction::from_sign(turn) {
                self.last_direction = direction;
            }
            return vec![RadarIntent::Rotate(turn)];
        }
        vec![RadarIntent::spin(self.last_direction)]
    }

    fn tracking_turn(&self, ctx: &RadarContext) -> Option<f64> {
        if !self.is_tracking() {
            return None;
        }
        let bearing = self.target_absolute_bearing?;
        let offset = normal_relative_angle(bearing - ctx.sensor_heading);
        if !offset.is_finite() {
            return None;
        }
        // Bias follows the offset's own sign; a dead-centre target keeps the
        // previous direction.
        let bias_sign = Direction::from_sign(offset)
            .unwrap_or(self.last_direction)
            .as_f64();
        Some(offset + bias_sign * self.config.lock_on_bias)
    }
}

impl RadarController for LockOnRadar {
    fn init_round(&mut self, ctx: &RadarContext) -> Vec<RadarIntent> {
        let mut intents = vec![RadarIntent::AdjustForTurretTurn(true)];
        intents.extend(self.issue(ctx));
        intents
    }

    fn on_sensor_hit(
        &mut self,
        hit:   &SensorHit,
        ctx:   &RadarContext,
        store: &mut EnemyStore,
    ) -> Vec<RadarIntent> {
        let enemy = match store.upsert_hit(hit, ctx.agent_position, ctx.agent_heading) {
            Ok(enemy) => enemy,
            Err(e) => {
                log::warn!(target: "ar_radar", "lock-on dropped observation: {e}");
                return vec![];
            }
        };

        if self.target_name.as_deref() != Some(enemy.name.as_str()) {
            log::debug!(
                target: "ar_radar",
                "{}: lock-on acquired {} at {}",
                ctx.tick, enemy.name, enemy.position,
            );
            self.target_name = Some(enemy.name.clone());
        } else {
            log::trace!(
                target: "ar_radar",
                "{}: lock-on sees {} at {}",
                ctx.tick, enemy.name, enemy.position,
            );
        }

        self.target_absolute_bearing = Some(enemy.absolute_bearing);
        self.ticks_since_last_observation = 0;
        self.last_hit = Some(ctx.tick);
        self.issue(ctx)
    }

    fn on_opponent_eliminated(
        &mut self,
        name:  &str,
        _ctx:  &RadarContext,
        store: &mut EnemyStore,
    ) -> Vec<RadarIntent> {
        store.remove(name);
        if self.target_name.as_deref() == Some(name) {
            // Nothing left to track; let the next tick fall through to search.
            self.ticks_since_last_observation = self.config.lock_on_stale_ticks;
        }
        vec![]
    }

    fn on_tick(&mut self, ctx: &RadarContext, _store: &EnemyStore) -> Vec<RadarIntent> {
        if self.last_hit != Some(ctx.tick) {
            let was_tracking = self.is_tracking();
            self.ticks_since_last_observation = self.ticks_since_last_observation.saturating_add(1);
            if was_tracking && !self.is_tracking() {
                log::debug!(target: "ar_radar", "{}: lock-on lost target, searching", ctx.tick);
            }
        }
        self.issue(ctx)
    }

    fn is_ready(&self) -> bool {
        self.target_absolute_bearing.is_some()
    }

    fn reset_for_new_round(&mut self) {
        *self = LockOnRadar::new(self.config.clone());
    }
}
