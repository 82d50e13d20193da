//! Sensor tunables.
//!
//! Every numeric constant the radar controllers depend on lives here so a
//! different arena (faster sensors, longer ticks) only needs a different
//! `RadarConfig`, never a code change.  `Default` reproduces the classic
//! tank-arena physics: a radar that turns at most 45° per tick.

use std::f64::consts::{FRAC_PI_4, PI, TAU};

use crate::{CoreError, CoreResult};

/// Top-level radar configuration.
///
/// Typically built with `RadarConfig::default()` and tweaked field by field,
/// or deserialised with the `serde` feature.  Call [`validate`][Self::validate]
/// before handing a hand-built config to a controller.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RadarConfig {
    /// Largest sensor rotation the host performs in one tick (radians).
    pub sensor_max_turn_rate: f64,

    /// Fraction of `sensor_max_turn_rate` added past the outermost opponent
    /// when the adaptive sweep narrows.  Default `0.5`.
    pub sweep_margin_factor: f64,

    /// Lock-On: ticks without a hit before tracking gives way to searching.
    pub lock_on_stale_ticks: u32,

    /// Lock-On: overshoot added in the direction of the offset (radians).
    pub lock_on_bias: f64,

    /// Adaptive: arc swept when the last sweep missed someone.  Default π.
    pub fallback_sweep_arc: f64,

    /// Adaptive: arc swept at round start to make first contact.  Default 2π.
    pub initial_sweep_arc: f64,
}

impl Default for RadarConfig {
    fn default() -> Self {
        Self {
            sensor_max_turn_rate: FRAC_PI_4,
            sweep_margin_factor:  0.5,
            lock_on_stale_ticks:  3,
            lock_on_bias:         0.02,
            fallback_sweep_arc:   PI,
            initial_sweep_arc:    TAU,
        }
    }
}

impl RadarConfig {
    /// Extra arc swept beyond the outermost fresh opponent.
    #[inline]
    pub fn sweep_margin(&self) -> f64 {
        self.sensor_max_turn_rate * self.sweep_margin_factor
    }

    /// Reject tunables that would make a controller emit nonsense.
    pub fn validate(&self) -> CoreResult<()> {
        let positive = [
            ("sensor_max_turn_rate", self.sensor_max_turn_rate),
            ("fallback_sweep_arc",   self.fallback_sweep_arc),
            ("initial_sweep_arc",    self.initial_sweep_arc),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(CoreError::Config(format!(
                    "{name} must be finite and positive, got {value}"
                )));
            }
        }

        let non_negative = [
            ("sweep_margin_factor", self.sweep_margin_factor),
            ("lock_on_bias",        self.lock_on_bias),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(CoreError::Config(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }

        if self.lock_on_stale_ticks == 0 {
            return Err(CoreError::Config(
                "lock_on_stale_ticks must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
