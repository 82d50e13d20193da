//! The `EnemyStore` - keyed registry of last-known opponent state.
//!
//! # Iteration order
//!
//! Entries live in a `BTreeMap` keyed by name, so [`EnemyStore::all`] yields
//! enemies in ascending name order.  Callers must not rely on any order for
//! correctness, but ties broken by "first encountered" are therefore
//! "lowest name wins", which keeps sweep decisions reproducible.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use ar_core::{Point2, Tick};

use crate::{Enemy, EnemyResult, SensorHit, is_fresh};

/// Last-known state of every opponent observed this round.
#[derive(Clone, Debug, Default)]
pub struct EnemyStore {
    enemies: BTreeMap<String, Enemy>,
}

impl EnemyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `enemy`, or refresh the existing entry with the same name.
    ///
    /// Returns `true` if this is the first observation of that name.
    pub fn upsert(&mut self, enemy: Enemy) -> bool {
        self.enemies.insert(enemy.name.clone(), enemy).is_none()
    }

    /// Map `hit` via [`Enemy::from_hit`] and upsert the result.
    ///
    /// # Errors
    ///
    /// Propagates the validation error; the store is untouched on failure.
    pub fn upsert_hit(
        &mut self,
        hit:            &SensorHit,
        agent_position: Point2,
        agent_heading:  f64,
    ) -> EnemyResult<&Enemy> {
        let enemy = Enemy::from_hit(hit, agent_position, agent_heading)?;
        let slot = match self.enemies.entry(enemy.name.clone()) {
            Entry::Occupied(mut occupied) => {
                occupied.insert(enemy);
                occupied.into_mut()
            }
            Entry::Vacant(vacant) => vacant.insert(enemy),
        };
        Ok(slot)
    }

    /// Forget an eliminated opponent.  Returns its last state, if known.
    pub fn remove(&mut self, name: &str) -> Option<Enemy> {
        self.enemies.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&Enemy> {
        self.enemies.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.enemies.contains_key(name)
    }

    /// Every stored enemy, in ascending name order.
    pub fn all(&self) -> impl Iterator<Item = &Enemy> {
        self.enemies.values()
    }

    /// Enemies seen fewer than `threshold_ticks` ticks before `now`.
    pub fn fresh(&self, now: Tick, threshold_ticks: u64) -> impl Iterator<Item = &Enemy> {
        self.enemies
            .values()
            .filter(move |e| is_fresh(e, now, threshold_ticks))
    }

    /// The enemy with the oldest observation (lowest name on ties).
    pub fn stalest(&self) -> Option<&Enemy> {
        self.enemies
            .values()
            .fold(None, |oldest: Option<&Enemy>, e| match oldest {
                Some(o) if o.last_seen <= e.last_seen => Some(o),
                _ => Some(e),
            })
    }

    /// The most recently observed enemy (lowest name on ties).
    pub fn latest(&self) -> Option<&Enemy> {
        self.enemies
            .values()
            .fold(None, |newest: Option<&Enemy>, e| match newest {
                Some(n) if n.last_seen >= e.last_seen => Some(n),
                _ => Some(e),
            })
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.enemies.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty()
    }

    /// Drop everything; called at round reset.
    pub fn clear(&mut self) {
        self.enemies.clear();
    }
}
