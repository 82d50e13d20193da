//! Choosing the radar strategy once, at construction.

use std::fmt;
use std::str::FromStr;

use ar_core::RadarConfig;
use ar_enemy::{EnemyStore, SensorHit};

use crate::{
    AdaptiveSweepRadar, LockOnRadar, RadarContext, RadarController, RadarError, RadarIntent,
    RadarResult,
};

/// Which sweep strategy an agent runs.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RadarKind {
    /// Follow one opponent; suited to duels.
    LockOn,
    /// Cover every opponent with the narrowest sweep; suited to melee.
    #[default]
    AdaptiveSweep,
}

impl RadarKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RadarKind::LockOn        => "lock_on",
            RadarKind::AdaptiveSweep => "adaptive_sweep",
        }
    }
}

impl fmt::Display for RadarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RadarKind {
    type Err = RadarError;

    fn from_str(s: &str) -> RadarResult<RadarKind> {
        match s {
            "lock_on"        => Ok(RadarKind::LockOn),
            "adaptive_sweep" => Ok(RadarKind::AdaptiveSweep),
            other            => Err(RadarError::UnknownKind(other.to_owned())),
        }
    }
}

/// The active radar controller, one variant per strategy.
///
/// Dispatches every [`RadarController`] call to the wrapped controller, so
/// the agent core holds a concrete type instead of a trait object.
#[derive(Debug, Clone)]
pub enum Radar {
    LockOn(LockOnRadar),
    AdaptiveSweep(AdaptiveSweepRadar),
}

impl Radar {
    /// Validate `config` and build the controller for `kind`.
    ///
    /// # Errors
    ///
    /// [`RadarError::Config`] if any tunable is out of range.
    pub fn from_kind(kind: RadarKind, config: RadarConfig) -> RadarResult<Radar> {
        config.validate()?;
        Ok(match kind {
            RadarKind::LockOn        => Radar::LockOn(LockOnRadar::new(config)),
            RadarKind::AdaptiveSweep => Radar::AdaptiveSweep(AdaptiveSweepRadar::new(config)),
        })
    }

    pub fn kind(&self) -> RadarKind {
        match self {
            Radar::LockOn(_)        => RadarKind::LockOn,
            Radar::AdaptiveSweep(_) => RadarKind::AdaptiveSweep,
        }
    }

    fn controller(&mut self) -> &mut dyn RadarController {
        match self {
            Radar::LockOn(r)        => r,
            Radar::AdaptiveSweep(r) => r,
        }
    }
}

impl RadarController for Radar {
    fn init_round(&mut self, ctx: &RadarContext) -> Vec<RadarIntent> {
        self.controller().init_round(ctx)
    }

    fn on_sensor_hit(
        &mut self,
        hit:   &SensorHit,
        ctx:   &RadarContext,
        store: &mut EnemyStore,
    ) -> Vec<RadarIntent> {
        self.controller().on_sensor_hit(hit, ctx, store)
    }

    fn on_opponent_eliminated(
        &mut self,
        name:  &str,
        ctx:   &RadarContext,
        store: &mut EnemyStore,
    ) -> Vec<RadarIntent> {
        self.controller().on_opponent_eliminated(name, ctx, store)
    }

    fn on_sweep_complete(&mut self, ctx: &RadarContext, store: &EnemyStore) -> Vec<RadarIntent> {
        self.controller().on_sweep_complete(ctx, store)
    }

    fn on_tick(&mut self, ctx: &RadarContext, store: &EnemyStore) -> Vec<RadarIntent> {
        self.controller().on_tick(ctx, store)
    }

    fn is_ready(&self) -> bool {
        match self {
            Radar::LockOn(r)        => r.is_ready(),
            Radar::AdaptiveSweep(r) => r.is_ready(),
        }
    }

    fn reset_for_new_round(&mut self) {
        self.controller().reset_for_new_round();
    }
}
