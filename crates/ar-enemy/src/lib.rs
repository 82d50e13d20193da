//! `ar-enemy` - the enemy observation store.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                   |
//! |-----------|------------------------------------------------------------|
//! | [`hit`]   | `SensorHit` - one raw sensor observation from the host     |
//! | [`enemy`] | `Enemy` snapshot, `is_fresh` staleness predicate           |
//! | [`store`] | `EnemyStore` - keyed registry, the only owner of `Enemy`s  |
//! | [`error`] | `EnemyError`, `EnemyResult<T>`                             |
//!
//! # Ownership
//!
//! `EnemyStore` is the only place `Enemy` values are created or destroyed.
//! Radar controllers get `&EnemyStore` for reads; the single active
//! controller is the only caller of [`EnemyStore::upsert`] and
//! [`EnemyStore::remove`].

pub mod enemy;
pub mod error;
pub mod hit;
pub mod store;


pub use enemy::{Enemy, is_fresh};
pub use error::{EnemyError, EnemyResult};
pub use hit::SensorHit;
pub use store::EnemyStore;
