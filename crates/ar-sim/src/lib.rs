//! `ar-sim` - agent core and a deterministic arena harness.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`agent`]    | `AgentCore` - store + radar + movement, event ordering     |
//! | [`arena`]    | `Arena` - simulated host: opponents, sensor physics        |
//! | [`builder`]  | `ArenaBuilder` - validation and seeding                    |
//! | [`config`]   | `ArenaConfig`                                              |
//! | [`observer`] | `ArenaObserver`, `NoopObserver`, `TickReport`              |
//! | [`error`]    | `ArenaError`, `ArenaResult<T>`                             |
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Opponents  - one seeded random-walk step each
//!   ② Sensor     - turn by min(remaining, max rate)
//!   ③ Detect     - living opponents in range inside the swept arc
//!   ④ Dispatch   - hits → eliminations → sweep complete → tick update
//!   ⑤ Apply      - Rotate / WatchSweepComplete / AdjustForTurretTurn
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ar_core::Point2;
//! use ar_sim::{ArenaBuilder, ArenaConfig, NoopObserver};
//!
//! let mut arena = ArenaBuilder::new(ArenaConfig::default())
//!     .opponent("a", Point2::new(100.0, 100.0))
//!     .opponent("b", Point2::new(700.0, 500.0))
//!     .build()?;
//! arena.run(&mut NoopObserver);
//! assert!(arena.agent.is_ready_to_fire());
//! ```

pub mod agent;
pub mod arena;
pub mod builder;
pub mod config;
pub mod error;
pub mod observer;


pub use agent::{AgentCore, TickEvents};
pub use arena::Arena;
pub use builder::ArenaBuilder;
pub use config::ArenaConfig;
pub use error::{ArenaError, ArenaResult};
pub use observer::{ArenaObserver, NoopObserver, TickReport};
