//! Last-known opponent state.

use ar_core::{Point2, Tick, normal_absolute_angle};

use crate::{EnemyError, EnemyResult, SensorHit};

/// Snapshot of an opponent as of its most recent observation.
///
/// Built only by [`Enemy::from_hit`] inside the store; every other component
/// sees `&Enemy` or a clone.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Enemy {
    /// Unique key within a round.
    pub name: String,

    pub position: Point2,

    /// Bearing relative to the agent's body heading at `last_seen`.
    pub bearing: f64,

    /// World-frame bearing at `last_seen`, in `[0, 2π)`.
    pub absolute_bearing: f64,

    /// Distance from the agent at `last_seen`.
    pub distance: f64,

    pub heading:  f64,
    pub velocity: f64,
    pub energy:   f64,

    pub last_seen: Tick,
}

impl Enemy {
    /// Map a sensor hit into an `Enemy`, given where the agent was and which
    /// way its body pointed when the hit happened.
    ///
    /// # Errors
    ///
    /// [`EnemyError::NonFinite`] if the bearing or position is NaN/infinite,
    /// [`EnemyError::EmptyName`] for an unnamed hit.
    pub fn from_hit(
        hit:            &SensorHit,
        agent_position: Point2,
        agent_heading:  f64,
    ) -> EnemyResult<Enemy> {
        if hit.name.is_empty() {
            return Err(EnemyError::EmptyName);
        }
        let non_finite = |field| EnemyError::NonFinite { name: hit.name.clone(), field };
        if !hit.bearing.is_finite() {
            return Err(non_finite("bearing"));
        }
        if !hit.position.is_finite() {
            return Err(non_finite("position"));
        }
        if !agent_heading.is_finite() {
            return Err(non_finite("agent heading"));
        }

        Ok(Enemy {
            name:             hit.name.clone(),
            position:         hit.position,
            bearing:          hit.bearing,
            absolute_bearing: normal_absolute_angle(agent_heading + hit.bearing),
            distance:         agent_position.distance_to(hit.position),
            heading:          hit.heading,
            velocity:         hit.velocity,
            energy:           hit.energy,
            last_seen:        hit.tick,
        })
    }

    /// Ticks since this enemy was last observed.
    #[inline]
    pub fn age(&self, now: Tick) -> u64 {
        now.since(self.last_seen)
    }
}

/// `true` when `enemy` was observed fewer than `threshold_ticks` ticks ago.
///
/// A threshold of `1` means "seen this very tick"; `0` makes every enemy
/// stale.
#[inline]
pub fn is_fresh(enemy: &Enemy, now: Tick, threshold_ticks: u64) -> bool {
    enemy.age(now) < threshold_ticks
}
