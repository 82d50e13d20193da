//! The `RadarController` trait - the seam between the host loop and a
//! sweep strategy.

use ar_enemy::{EnemyStore, SensorHit};

use crate::{RadarContext, RadarIntent};

/// Pluggable sensor sweep strategy.
///
/// Exactly one controller is active per agent.  It is the single writer of
/// the [`EnemyStore`]: hits are upserted and eliminations removed through
/// its handlers, while sweep and tick decisions only read the store.
///
/// # Required methods
///
/// [`init_round`][Self::init_round], [`on_sensor_hit`][Self::on_sensor_hit],
/// [`is_ready`][Self::is_ready] and
/// [`reset_for_new_round`][Self::reset_for_new_round].  The remaining hooks
/// default to "forget the opponent" and "do nothing".
///
/// # Example
///
/// ```rust,ignore
/// struct AlwaysSpin;
///
/// impl RadarController for AlwaysSpin {
///     fn init_round(&mut self, _ctx: &RadarContext) -> Vec<RadarIntent> {
///         vec![RadarIntent::spin(Direction::Positive)]
///     }
///     fn on_sensor_hit(&mut self, hit: &SensorHit, ctx: &RadarContext, store: &mut EnemyStore) -> Vec<RadarIntent> {
///         let _ = store.upsert_hit(hit, ctx.agent_position, ctx.agent_heading);
///         vec![]
///     }
///     fn is_ready(&self) -> bool { true }
///     fn reset_for_new_round(&mut self) {}
/// }
/// ```
pub trait RadarController {
    /// Round start: the intents that set the sensor up.
    fn init_round(&mut self, ctx: &RadarContext) -> Vec<RadarIntent>;

    /// The sensor swept over an opponent this tick.
    fn on_sensor_hit(
        &mut self,
        hit:   &SensorHit,
        ctx:   &RadarContext,
        store: &mut EnemyStore,
    ) -> Vec<RadarIntent>;

    /// The host reports `name` eliminated.
    ///
    /// Default: drop it from the store and leave the sensor alone.
    fn on_opponent_eliminated(
        &mut self,
        name:  &str,
        _ctx:  &RadarContext,
        store: &mut EnemyStore,
    ) -> Vec<RadarIntent> {
        store.remove(name);
        vec![]
    }

    /// The last commanded rotation has finished.  Only delivered after the
    /// controller asked for [`RadarIntent::WatchSweepComplete`].
    fn on_sweep_complete(&mut self, _ctx: &RadarContext, _store: &EnemyStore) -> Vec<RadarIntent> {
        vec![]
    }

    /// Called once at the end of every tick's event delivery.
    fn on_tick(&mut self, _ctx: &RadarContext, _store: &EnemyStore) -> Vec<RadarIntent> {
        vec![]
    }

    /// Readiness signal for other subsystems (e.g. a gun that should hold
    /// fire until every opponent has been located).
    fn is_ready(&self) -> bool;

    /// Forget all per-round state.  Configuration survives.
    fn reset_for_new_round(&mut self);
}
