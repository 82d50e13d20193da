//! Diagnostics sink for strategy transitions.

use crate::MoveStrategy;

/// Receives every strategy change made through
/// [`MovementState::set_strategy`][crate::MovementState::set_strategy].
///
/// Notifications are a side effect only; nothing an observer does can veto
/// or alter a transition.
///
/// # Example - transition counter
///
/// ```rust,ignore
/// struct Counter(usize);
///
/// impl TransitionObserver for Counter {
///     fn on_transition(&mut self, _old: MoveStrategy, _new: MoveStrategy) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait TransitionObserver {
    /// `old` has ended and `new` has begun.  Called even when `old == new`.
    fn on_transition(&mut self, _old: MoveStrategy, _new: MoveStrategy) {}
}

/// Writes each transition to the `log` facade at `debug` level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogTransitions;

impl TransitionObserver for LogTransitions {
    fn on_transition(&mut self, old: MoveStrategy, new: MoveStrategy) {
        log::debug!(target: "ar_movement", "{old}: end");
        log::debug!(target: "ar_movement", "{new}: begin");
    }
}

/// A [`TransitionObserver`] that does nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTransitions;

impl TransitionObserver for NoopTransitions {}
