//! `ar-radar` - sensor sweep controllers.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                     |
//! |----------------|--------------------------------------------------------------|
//! | [`context`]    | `RadarContext` - read-only per-event view of the agent       |
//! | [`intent`]     | `RadarIntent` - commands a controller asks the host to run   |
//! | [`controller`] | `RadarController` trait                                      |
//! | [`lock_on`]    | `LockOnRadar` - single-target lock with stale-search fallback |
//! | [`adaptive`]   | `AdaptiveSweepRadar` - full sweep, then minimum covering arc |
//! | [`select`]     | `Radar` / `RadarKind` - one controller chosen at construction |
//! | [`error`]      | `RadarError`, `RadarResult<T>`                               |
//!
//! # Event flow
//!
//! The host calls, in this order within one tick:
//!
//! 1. `on_sensor_hit` for every opponent the sensor swept over
//!    (the controller upserts into the `EnemyStore` first),
//! 2. `on_opponent_eliminated` for opponents that died,
//! 3. `on_sweep_complete` once a commanded rotation has finished,
//! 4. `on_tick`.
//!
//! Every handler returns the [`RadarIntent`]s to apply.  An empty `Vec`
//! means "leave the sensor alone"; a later `Rotate` supersedes an earlier one.

pub mod adaptive;
pub mod context;
pub mod controller;
pub mod error;
pub mod intent;
pub mod lock_on;
pub mod select;

#[cfg(test)]
mod tests;

pub use adaptive::{AdaptiveSweepRadar, SweepDecision, SweepKind};
pub use context::RadarContext;
pub use controller::RadarController;
pub use error::{RadarError, RadarResult};
pub use intent::RadarIntent;
pub use lock_on::LockOnRadar;
pub use select::{Radar, RadarKind};
