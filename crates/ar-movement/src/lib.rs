//! `ar-movement` - which movement behavior is steering, and who may take over.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                       |
//! |--------------|----------------------------------------------------------------|
//! | [`strategy`] | `MoveStrategy` tags and the separate `PriorityTable`           |
//! | [`state`]    | `MovementState` - the arbiter (active strategy + lateral flag) |
//! | [`observer`] | `TransitionObserver`, `LogTransitions`, `NoopTransitions`      |
//! | [`error`]    | `MovementError`, `MovementResult<T>`                           |
//!
//! # Preemption model
//!
//! Movement behaviors never write the active strategy directly.  Each tick a
//! behavior that wants to steer asks [`MovementState::is_preemptable_by`]
//! with its own tag and only then calls [`MovementState::set_strategy`]
//! (or does both with [`MovementState::try_take_over`]):
//!
//! ```text
//! active = Random (10)   Ram (50) asks  → lower-or-equal, different → take over
//! active = Ram (50)      Random asks    → Ram outranks Random       → refused
//! active = Ram (50)      Ram asks       → already active            → refused
//! ```
//!
//! Which behavior *should* want to steer is the behaviors' own policy and is
//! not decided here.

pub mod error;
pub mod observer;
pub mod state;
pub mod strategy;


pub use error::{MovementError, MovementResult};
pub use observer::{LogTransitions, NoopTransitions, TransitionObserver};
pub use state::MovementState;
pub use strategy::{MoveStrategy, PriorityTable};
