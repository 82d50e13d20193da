//! The movement strategy arbiter.

use ar_core::Direction;

use crate::{
    LogTransitions, MoveStrategy, MovementError, MovementResult, PriorityTable,
    TransitionObserver,
};

/// Single source of truth for which movement behavior is steering.
///
/// Holds the active [`MoveStrategy`] (initially `None`), the lateral
/// direction flag used by strafing behaviors (initially `+1`), the priority
/// table fixed at construction, and the transition observer.
///
/// One instance per agent, owned by the agent core and reset with
/// [`reset_for_new_round`][Self::reset_for_new_round].  Every mutation goes
/// through a method here; the fields are private.
#[derive(Debug)]
pub struct MovementState<O: TransitionObserver = LogTransitions> {
    active:     MoveStrategy,
    lateral:    Direction,
    priorities: PriorityTable,
    observer:   O,
}

impl MovementState<LogTransitions> {
    /// Default priorities, transitions logged at `debug`.
    pub fn new() -> Self {
        Self::with_observer(PriorityTable::default(), LogTransitions)
    }
}

impl Default for MovementState<LogTransitions> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: TransitionObserver> MovementState<O> {
    pub fn with_observer(priorities: PriorityTable, observer: O) -> Self {
        Self {
            active: MoveStrategy::None,
            lateral: Direction::Positive,
            priorities,
            observer,
        }
    }

    // ── Active strategy ───────────────────────────────────────────────────

    /// The strategy currently steering.
    #[inline]
    pub fn strategy(&self) -> MoveStrategy {
        self.active
    }

    /// Unconditionally make `strategy` active and notify the observer.
    ///
    /// Behaviors should check [`is_preemptable_by`][Self::is_preemptable_by]
    /// first; this method does not.
    pub fn set_strategy(&mut self, strategy: MoveStrategy) {
        let old = self.active;
        self.active = strategy;
        self.observer.on_transition(old, strategy);
    }

    /// `set_strategy(MoveStrategy::None)`, observer included.
    pub fn set_none(&mut self) {
        self.set_strategy(MoveStrategy::None);
    }

    #[inline]
    pub fn is_active(&self, strategy: MoveStrategy) -> bool {
        self.active == strategy
    }

    #[inline]
    pub fn is_none(&self) -> bool {
        self.active == MoveStrategy::None
    }

    pub fn is_any_of(&self, strategies: &[MoveStrategy]) -> bool {
        strategies.contains(&self.active)
    }

    pub fn is_none_of(&self, strategies: &[MoveStrategy]) -> bool {
        !self.is_any_of(strategies)
    }

    // ── Priority checks ───────────────────────────────────────────────────

    /// `priority(active) < priority(strategy)`.
    pub fn has_lower_priority_than(&self, strategy: MoveStrategy) -> bool {
        self.priorities.priority(self.active) < self.priorities.priority(strategy)
    }

    /// `priority(active) <= priority(strategy)`.
    pub fn has_lower_or_equal_priority_than(&self, strategy: MoveStrategy) -> bool {
        self.priorities.priority(self.active) <= self.priorities.priority(strategy)
    }

    /// May `strategy` take over right now?
    ///
    /// True when the active strategy does not outrank `strategy` and is not
    /// `strategy` itself, so an equal-priority rival can preempt but nobody
    /// re-asserts what is already active.
    pub fn is_preemptable_by(&self, strategy: MoveStrategy) -> bool {
        self.has_lower_or_equal_priority_than(strategy) && self.active != strategy
    }

    /// Check-and-set in one step.  Returns `true` if `strategy` is now active
    /// because of this call.
    pub fn try_take_over(&mut self, strategy: MoveStrategy) -> bool {
        if !self.is_preemptable_by(strategy) {
            return false;
        }
        self.set_strategy(strategy);
        true
    }

    /// Hand steering back to `None`, but only if `strategy` holds it.
    pub fn release(&mut self, strategy: MoveStrategy) -> bool {
        if self.active != strategy || self.is_none() {
            return false;
        }
        self.set_none();
        true
    }

    #[inline]
    pub fn priorities(&self) -> &PriorityTable {
        &self.priorities
    }

    // ── Lateral direction ─────────────────────────────────────────────────

    #[inline]
    pub fn lateral_direction(&self) -> Direction {
        self.lateral
    }

    /// The lateral direction as `1.0` / `-1.0`, ready for velocity math.
    #[inline]
    pub fn lateral_sign(&self) -> f64 {
        self.lateral.as_f64()
    }

    pub fn reverse_lateral_direction(&mut self) {
        self.lateral = self.lateral.reversed();
    }

    /// Store the sign of `direction`.  Any non-zero magnitude is accepted, so
    /// callers may pass a raw velocity.
    ///
    /// # Errors
    ///
    /// [`MovementError::InvalidArgument`] for `0`; the flag is unchanged.
    pub fn set_lateral_direction(&mut self, direction: i32) -> MovementResult<()> {
        self.lateral = Direction::from_int(direction)
            .ok_or(MovementError::InvalidArgument("lateral direction cannot be 0"))?;
        Ok(())
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Back to `None` / `+1` for a new round.  The priority table and the
    /// observer survive; the drop to `None` is reported like any transition.
    pub fn reset_for_new_round(&mut self) {
        if !self.is_none() {
            self.set_none();
        }
        self.lateral = Direction::Positive;
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }
}
