//! Unit tests for ar-radar.

use ar_core::{Point2, RadarConfig, Tick};
use ar_enemy::{EnemyStore, SensorHit};

use crate::{RadarContext, RadarIntent};

const EPS: f64 = 1e-9;

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Agent facing north at the origin.
fn ctx(tick: u64, sensor_heading: f64, living: usize) -> RadarContext {
    RadarContext::new(Tick(tick), 0.0, sensor_heading, living)
}

fn hit(name: &str, bearing: f64, tick: u64) -> SensorHit {
    SensorHit::new(name, bearing, Point2::ORIGIN.project(bearing, 200.0), Tick(tick))
}

fn only_rotation(intents: &[RadarIntent]) -> f64 {
    let rotations: Vec<f64> = intents.iter().filter_map(|i| i.rotation()).collect();
    assert_eq!(rotations.len(), 1, "expected exactly one rotation in {intents:?}");
    rotations[0]
}

fn margin() -> f64 {
    RadarConfig::default().sweep_margin()
}

// ── Lock-On ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod lock_on {
    use ar_core::Direction;

    use super::*;
    use crate::{LockOnRadar, RadarController};

    fn radar() -> LockOnRadar {
        LockOnRadar::new(RadarConfig::default())
    }

    #[test]
    fn starts_searching() {
        let mut r = radar();
        let intents = r.init_round(&ctx(0, 0.0, 1));
        assert_eq!(
            intents,
            vec![RadarIntent::AdjustForTurretTurn(true), RadarIntent::spin(Direction::Positive)]
        );
        assert!(!r.is_tracking());
        assert!(!r.is_ready());
    }

    #[test]
    fn bias_follows_positive_offset() {
        let mut r = radar();
        let mut store = EnemyStore::new();
        let intents = r.on_sensor_hit(&hit("a", 0.5, 3), &ctx(3, 0.0, 1), &mut store);
        assert!((only_rotation(&intents) - 0.52).abs() < EPS);
        assert_eq!(r.ticks_since_last_observation(), 0);
        assert!(store.contains("a"));
    }

    #[test]
    fn bias_follows_negative_offset() {
        let mut r = radar();
        let mut store = EnemyStore::new();
        let intents = r.on_sensor_hit(&hit("a", -0.5, 3), &ctx(3, 0.0, 1), &mut store);
        assert!((only_rotation(&intents) + 0.52).abs() < EPS);
    }

    #[test]
    fn offset_is_normalised_before_bias() {
        let mut r = radar();
        let mut store = EnemyStore::new();
        // Target at 0.1 rad, sensor at 6.0 rad: the short way is clockwise.
        let intents = r.on_sensor_hit(&hit("a", 0.1, 0), &ctx(0, 6.0, 1), &mut store);
        let expected = (0.1 - 6.0 + std::f64::consts::TAU) + 0.02;
        assert!((only_rotation(&intents) - expected).abs() < EPS);
    }

    #[test]
    fn absolute_bearing_includes_agent_heading() {
        let mut r = radar();
        let mut store = EnemyStore::new();
        let c = RadarContext::new(Tick(0), 1.0, 1.0, 1);
        let intents = r.on_sensor_hit(&hit("a", 0.25, 0), &c, &mut store);
        assert!((r.target_absolute_bearing().unwrap() - 1.25).abs() < EPS);
        assert!((only_rotation(&intents) - 0.27).abs() < EPS);
    }

    #[test]
    fn tick_recomputes_from_current_sensor_heading() {
        let mut r = radar();
        let mut store = EnemyStore::new();
        r.on_sensor_hit(&hit("a", 0.5, 0), &ctx(0, 0.0, 1), &mut store);
        let intents = r.on_tick(&ctx(1, 0.52, 1), &store);
        assert!((only_rotation(&intents) + 0.04).abs() < EPS);
    }

    #[test]
    fn same_tick_update_does_not_age_the_lock() {
        let mut r = radar();
        let mut store = EnemyStore::new();
        r.on_sensor_hit(&hit("a", 0.5, 4), &ctx(4, 0.0, 1), &mut store);
        r.on_tick(&ctx(4, 0.0, 1), &store);
        assert_eq!(r.ticks_since_last_observation(), 0);
    }

    #[test]
    fn escalates_to_search_after_three_silent_ticks() {
        let mut r = radar();
        let mut store = EnemyStore::new();
        r.on_sensor_hit(&hit("a", 0.5, 0), &ctx(0, 0.0, 1), &mut store);
        r.on_tick(&ctx(0, 0.0, 1), &store);

        for t in 1..=2 {
            let turn = only_rotation(&r.on_tick(&ctx(t, 0.0, 1), &store));
            assert!(turn.is_finite(), "tick {t} should still track");
        }
        let turn = only_rotation(&r.on_tick(&ctx(3, 0.0, 1), &store));
        assert_eq!(turn, f64::INFINITY);
        assert_eq!(r.ticks_since_last_observation(), 3);
        assert!(r.is_ready());
    }

    #[test]
    fn search_keeps_last_direction() {
        let mut r = radar();
        let mut store = EnemyStore::new();
        r.on_sensor_hit(&hit("a", -0.5, 0), &ctx(0, 0.0, 1), &mut store);
        for t in 1..=3 {
            r.on_tick(&ctx(t, 0.0, 1), &store);
        }
        let turn = only_rotation(&r.on_tick(&ctx(4, 0.0, 1), &store));
        assert_eq!(turn, f64::NEG_INFINITY);
    }

    #[test]
    fn new_hit_reacquires() {
        let mut r = radar();
        let mut store = EnemyStore::new();
        r.on_sensor_hit(&hit("a", 0.5, 0), &ctx(0, 0.0, 1), &mut store);
        for t in 1..=5 {
            r.on_tick(&ctx(t, 0.0, 1), &store);
        }
        assert!(!r.is_tracking());
        let turn = only_rotation(&r.on_sensor_hit(&hit("a", 1.0, 6), &ctx(6, 0.5, 1), &mut store));
        assert!((turn - 0.52).abs() < EPS);
        assert!(r.is_tracking());
    }

    #[test]
    fn latest_opponent_wins_the_lock() {
        let mut r = radar();
        let mut store = EnemyStore::new();
        r.on_sensor_hit(&hit("a", 0.5, 0), &ctx(0, 0.0, 2), &mut store);
        r.on_sensor_hit(&hit("b", -1.0, 1), &ctx(1, 0.0, 2), &mut store);
        assert_eq!(r.target_name(), Some("b"));
        assert_eq!(store.count(), 2);
    }

    #[test]
    fn eliminating_the_target_starts_search() {
        let mut r = radar();
        let mut store = EnemyStore::new();
        let c = ctx(0, 0.0, 1);
        r.on_sensor_hit(&hit("a", 0.5, 0), &c, &mut store);
        assert!(r.on_opponent_eliminated("a", &c, &mut store).is_empty());
        assert!(store.is_empty());
        let turn = only_rotation(&r.on_tick(&ctx(1, 0.0, 0), &store));
        assert!(turn.is_infinite());
    }

    #[test]
    fn non_finite_hit_is_dropped() {
        let mut r = radar();
        let mut store = EnemyStore::new();
        let intents = r.on_sensor_hit(&hit("a", f64::NAN, 0), &ctx(0, 0.0, 1), &mut store);
        assert!(intents.is_empty());
        assert!(store.is_empty());
        assert!(r.target_absolute_bearing().is_none());
    }

    #[test]
    fn reset_forgets_target() {
        let mut r = radar();
        let mut store = EnemyStore::new();
        r.on_sensor_hit(&hit("a", 0.5, 0), &ctx(0, 0.0, 1), &mut store);
        r.reset_for_new_round();
        assert!(!r.is_ready());
        assert!(r.target_name().is_none());
        assert_eq!(r.ticks_since_last_observation(), 3);
    }
}

// ── Adaptive sweep ────────────────────────────────────────────────────────────

#[cfg(test)]
mod adaptive {
    use ar_core::Direction;

    use super::*;
    use crate::{AdaptiveSweepRadar, RadarController, SweepKind};

    fn radar() -> AdaptiveSweepRadar {
        AdaptiveSweepRadar::new(RadarConfig::default())
    }

    /// Round started at tick 0 with the default full turn.
    fn started() -> (AdaptiveSweepRadar, EnemyStore) {
        let mut r = radar();
        r.init_round(&ctx(0, 0.0, 1));
        (r, EnemyStore::new())
    }

    #[test]
    fn init_watches_and_sweeps_full_turn() {
        let mut r = radar();
        let intents = r.init_round(&ctx(0, 0.0, 2));
        assert_eq!(intents, vec![
            RadarIntent::WatchSweepComplete,
            RadarIntent::AdjustForTurretTurn(true),
            RadarIntent::Rotate(std::f64::consts::TAU),
        ]);
    }

    #[test]
    fn hits_never_rotate() {
        let (mut r, mut store) = started();
        let intents = r.on_sensor_hit(&hit("a", 0.3, 2), &ctx(2, 0.0, 2), &mut store);
        assert!(intents.is_empty());
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn narrows_to_largest_offset_with_margin() {
        let (mut r, mut store) = started();
        let plus_ten = 10f64.to_radians();
        let minus_forty = (-40f64).to_radians();
        r.on_sensor_hit(&hit("a", plus_ten, 5), &ctx(5, 0.0, 2), &mut store);
        r.on_sensor_hit(&hit("b", minus_forty, 5), &ctx(5, 0.0, 2), &mut store);

        let turn = only_rotation(&r.on_sweep_complete(&ctx(6, 0.0, 2), &store));
        assert!((turn - (minus_forty - margin())).abs() < EPS);
        assert_eq!(r.sweep_direction(), Direction::Negative);

        let d = r.last_decision().unwrap();
        assert_eq!(d.kind, SweepKind::Narrowed);
        assert_eq!((d.scanned, d.living), (2, 2));
        assert!((d.max_bearing - minus_forty).abs() < EPS);
    }

    #[test]
    fn offsets_are_relative_to_sensor_heading() {
        let (mut r, mut store) = started();
        r.on_sensor_hit(&hit("a", 1.0, 3), &ctx(3, 0.0, 1), &mut store);
        let turn = only_rotation(&r.on_sweep_complete(&ctx(4, 1.5, 1), &store));
        assert!((turn - (-0.5 - margin())).abs() < EPS);
    }

    #[test]
    fn falls_back_when_someone_was_missed() {
        let (mut r, mut store) = started();
        r.on_sensor_hit(&hit("a", 0.2, 5), &ctx(5, 0.0, 3), &mut store);
        r.on_sensor_hit(&hit("b", -0.4, 5), &ctx(5, 0.0, 3), &mut store);

        let turn = only_rotation(&r.on_sweep_complete(&ctx(6, 0.0, 3), &store));
        assert!((turn - std::f64::consts::PI).abs() < EPS);
        assert_eq!(r.sweep_direction(), Direction::Positive);
        assert_eq!(r.last_decision().unwrap().kind, SweepKind::Fallback);
    }

    #[test]
    fn fallback_uses_current_direction() {
        let (mut r, mut store) = started();
        r.on_sensor_hit(&hit("a", -0.4, 2), &ctx(2, 0.0, 1), &mut store);
        r.on_sweep_complete(&ctx(3, 0.0, 1), &store);
        assert_eq!(r.sweep_direction(), Direction::Negative);

        // A second opponent appears but is not seen during the next sweep.
        let turn = only_rotation(&r.on_sweep_complete(&ctx(9, 0.0, 2), &store));
        assert!((turn + std::f64::consts::PI).abs() < EPS);
        assert_eq!(r.sweep_direction(), Direction::Negative);
    }

    #[test]
    fn observations_before_the_sweep_are_stale() {
        let (mut r, mut store) = started();
        r.on_sensor_hit(&hit("a", 0.3, 2), &ctx(2, 0.0, 1), &mut store);
        r.on_sweep_complete(&ctx(4, 0.0, 1), &store);

        // Nothing re-observed between tick 4 and 10.
        r.on_sweep_complete(&ctx(10, 0.0, 1), &store);
        let d = r.last_decision().unwrap();
        assert_eq!(d.scanned, 0);
        assert_eq!(d.kind, SweepKind::Fallback);
    }

    #[test]
    fn hit_on_the_sweep_start_tick_counts() {
        let (mut r, mut store) = started();
        r.on_sensor_hit(&hit("a", 0.3, 0), &ctx(0, 0.0, 1), &mut store);
        r.on_sweep_complete(&ctx(8, 0.0, 1), &store);
        assert_eq!(r.last_decision().unwrap().scanned, 1);
    }

    #[test]
    fn ties_go_to_the_lowest_name() {
        let (mut r, mut store) = started();
        r.on_sensor_hit(&hit("bravo", -0.6, 1), &ctx(1, 0.0, 2), &mut store);
        r.on_sensor_hit(&hit("alpha", 0.6, 1), &ctx(1, 0.0, 2), &mut store);
        let turn = only_rotation(&r.on_sweep_complete(&ctx(2, 0.0, 2), &store));
        assert!((turn - (0.6 + margin())).abs() < EPS);
    }

    #[test]
    fn dead_centre_target_keeps_direction() {
        let (mut r, mut store) = started();
        r.on_sensor_hit(&hit("a", 0.0, 1), &ctx(1, 0.0, 1), &mut store);
        let turn = only_rotation(&r.on_sweep_complete(&ctx(2, 0.0, 1), &store));
        assert!((turn - margin()).abs() < EPS);
        assert_eq!(r.sweep_direction(), Direction::Positive);
    }

    #[test]
    fn zero_length_narrowed_sweep_falls_back() {
        let cfg = RadarConfig { sweep_margin_factor: 0.0, ..RadarConfig::default() };
        let mut r = AdaptiveSweepRadar::new(cfg);
        let mut store = EnemyStore::new();
        r.init_round(&ctx(0, 0.0, 1));
        r.on_sensor_hit(&hit("a", 0.0, 1), &ctx(1, 0.0, 1), &mut store);

        let turn = only_rotation(&r.on_sweep_complete(&ctx(2, 0.0, 1), &store));
        assert!((turn - std::f64::consts::PI).abs() < EPS);
        assert_eq!(r.last_decision().unwrap().kind, SweepKind::Fallback);
    }

    #[test]
    fn holds_with_no_living_opponents() {
        let (mut r, store) = started();
        let intents = r.on_sweep_complete(&ctx(5, 0.0, 0), &store);
        assert!(intents.is_empty());
        assert_eq!(r.last_decision().unwrap().kind, SweepKind::Hold);
        assert_eq!(r.sweep_direction(), Direction::Positive);
        assert!(!r.has_completed_first_full_coverage());
    }

    #[test]
    fn coverage_latch_sets_once_everyone_is_stored() {
        let (mut r, mut store) = started();
        r.on_sensor_hit(&hit("a", 0.1, 1), &ctx(1, 0.0, 2), &mut store);
        assert!(!r.is_ready());
        r.on_sensor_hit(&hit("b", 0.2, 2), &ctx(2, 0.0, 2), &mut store);
        assert!(r.is_ready());
    }

    #[test]
    fn coverage_latch_is_monotonic() {
        let (mut r, mut store) = started();
        r.on_sensor_hit(&hit("a", 0.1, 1), &ctx(1, 0.0, 2), &mut store);
        r.on_sensor_hit(&hit("b", 0.2, 1), &ctx(1, 0.0, 2), &mut store);
        assert!(r.has_completed_first_full_coverage());

        r.on_opponent_eliminated("a", &ctx(2, 0.0, 1), &mut store);
        r.on_sweep_complete(&ctx(50, 0.0, 1), &store);
        assert!(r.has_completed_first_full_coverage());

        r.on_opponent_eliminated("b", &ctx(51, 0.0, 0), &mut store);
        assert!(store.is_empty());
        assert!(r.has_completed_first_full_coverage());
    }

    #[test]
    fn reset_clears_latch_and_direction() {
        let (mut r, mut store) = started();
        r.on_sensor_hit(&hit("a", -0.3, 1), &ctx(1, 0.0, 1), &mut store);
        r.on_sweep_complete(&ctx(2, 0.0, 1), &store);
        r.reset_for_new_round();
        assert!(!r.is_ready());
        assert_eq!(r.sweep_direction(), Direction::Positive);
        assert!(r.last_decision().is_none());
    }

    #[test]
    fn single_opponent_round() {
        let mut r = radar();
        let mut store = EnemyStore::new();

        let init = r.init_round(&ctx(0, 0.0, 1));
        assert_eq!(only_rotation(&init), std::f64::consts::TAU);

        let bearing = 2.0;
        r.on_sensor_hit(&hit("solo", bearing, 5), &ctx(5, 1.9, 1), &mut store);
        assert!(r.is_ready());

        // The sweep ends at tick 8 with the sensor back at north.
        let turn = only_rotation(&r.on_sweep_complete(&ctx(8, 0.0, 1), &store));
        assert!((turn - (bearing + margin())).abs() < EPS);
    }
}

// ── Radar selection ───────────────────────────────────────────────────────────

#[cfg(test)]
mod select {
    use super::*;
    use crate::{Radar, RadarController, RadarError, RadarKind};

    #[test]
    fn builds_requested_kind() {
        let lock = Radar::from_kind(RadarKind::LockOn, RadarConfig::default()).unwrap();
        let sweep = Radar::from_kind(RadarKind::AdaptiveSweep, RadarConfig::default()).unwrap();
        assert_eq!(lock.kind(), RadarKind::LockOn);
        assert_eq!(sweep.kind(), RadarKind::AdaptiveSweep);
        assert_eq!(RadarKind::default(), RadarKind::AdaptiveSweep);
    }

    #[test]
    fn rejects_invalid_config() {
        let cfg = RadarConfig { sensor_max_turn_rate: -1.0, ..RadarConfig::default() };
        let err = Radar::from_kind(RadarKind::LockOn, cfg).unwrap_err();
        assert!(matches!(err, RadarError::Config(_)));
    }

    #[test]
    fn parses_kind_names() {
        assert_eq!("lock_on".parse::<RadarKind>().unwrap(), RadarKind::LockOn);
        assert_eq!("adaptive_sweep".parse::<RadarKind>(), Ok(RadarKind::AdaptiveSweep));
        assert_eq!(
            "spin".parse::<RadarKind>(),
            Err(RadarError::UnknownKind("spin".into()))
        );
        assert_eq!(RadarKind::LockOn.to_string(), "lock_on");
    }

    #[test]
    fn dispatches_to_the_wrapped_controller() {
        let mut radar = Radar::from_kind(RadarKind::LockOn, RadarConfig::default()).unwrap();
        let mut store = EnemyStore::new();
        let turn = only_rotation(&radar.on_sensor_hit(&hit("a", 0.5, 0), &ctx(0, 0.0, 1), &mut store));
        assert!((turn - 0.52).abs() < EPS);
        assert!(radar.is_ready());
        radar.reset_for_new_round();
        assert!(!radar.is_ready());
    }

    #[test]
    fn usable_as_trait_object() {
        let mut radar: Box<dyn RadarController> =
            Box::new(Radar::from_kind(RadarKind::AdaptiveSweep, RadarConfig::default()).unwrap());
        let intents = radar.init_round(&ctx(0, 0.0, 1));
        assert!(intents.contains(&RadarIntent::WatchSweepComplete));
    }
}
