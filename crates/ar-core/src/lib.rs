//! `ar-core` - foundational types for the `rust_arena` decision core.
//!
//! This crate is a dependency of every other `ar-*` crate.  It has no `ar-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                                 |
//! |---------------|----------------------------------------------------------|
//! | [`angle`]     | `normal_relative_angle`, `normal_absolute_angle`, `sign` |
//! | [`direction`] | `Direction` - a sign that is never zero                  |
//! | [`geo`]       | `Point2`, compass bearings in the arena frame            |
//! | [`time`]      | `Tick`, `RoundClock`                                     |
//! | [`rng`]       | `SimRng` (seeded, deterministic)                         |
//! | [`config`]    | `RadarConfig` - every sensor tunable in one place        |
//! | [`error`]     | `CoreError`, `CoreResult`                                |
//!
//! # Angle convention
//!
//! All angles are radians.  Headings follow the compass convention of the
//! host arena: `0` points along `+y`, angles grow clockwise, so a positive
//! rotation command turns the sensor clockwise.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod angle;
pub mod config;
pub mod direction;
pub mod error;
pub mod geo;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use angle::{normal_absolute_angle, normal_relative_angle, sign};
pub use config::RadarConfig;
pub use direction::Direction;
pub use error::{CoreError, CoreResult};
pub use geo::Point2;
pub use rng::SimRng;
pub use time::{RoundClock, Tick};
