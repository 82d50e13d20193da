//! Arena observer trait for progress reporting and assertions in tests.

use ar_core::RoundClock;
use ar_enemy::EnemyStore;
use ar_radar::RadarIntent;

/// What happened during one arena tick.
#[derive(Clone, Debug, PartialEq)]
pub struct TickReport {
    pub clock: RoundClock,

    /// Opponents swept this tick, in name order.
    pub hits: Vec<String>,

    pub eliminated: Vec<String>,

    /// A watched rotation finished this tick.
    pub sweep_complete: bool,

    /// Sensor heading after this tick's turn.
    pub sensor_heading: f64,

    /// The rotation left in force after this tick's intents were applied,
    /// if any `Rotate` was issued.
    pub rotation: Option<f64>,

    pub living: usize,
}

/// Callbacks invoked by [`Arena::run`][crate::Arena::run] and
/// [`Arena::run_ticks`][crate::Arena::run_ticks].
///
/// All methods default to no-ops.
///
/// # Example - sweep printer
///
/// ```rust,ignore
/// struct SweepPrinter;
///
/// impl ArenaObserver for SweepPrinter {
///     fn on_tick_end(&mut self, report: &TickReport) {
///         if report.sweep_complete {
///             println!("{}: next sweep {:?}", report.clock, report.rotation);
///         }
///     }
/// }
/// ```
pub trait ArenaObserver {
    /// After the radar's round-start intents were applied.
    fn on_round_start(&mut self, _clock: RoundClock, _intents: &[RadarIntent]) {}

    fn on_tick_start(&mut self, _clock: RoundClock) {}

    fn on_tick_end(&mut self, _report: &TickReport) {}

    /// The last tick of a round ran; `store` is the agent's final picture.
    fn on_round_end(&mut self, _round: u32, _store: &EnemyStore) {}

    fn on_arena_end(&mut self, _clock: RoundClock) {}
}

/// An [`ArenaObserver`] that does nothing.
pub struct NoopObserver;

impl ArenaObserver for NoopObserver {}
