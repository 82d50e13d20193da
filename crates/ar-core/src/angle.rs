//! Angle normalisation and sign extraction.
//!
//! Pure functions over `f64` radians.  Non-finite input is passed through
//! unchanged (a NaN stays NaN) so callers can detect it with
//! `f64::is_finite` instead of receiving a silently wrong angle.

use std::f64::consts::{PI, TAU};

/// Map `angle` into the half-open range `(-π, π]`.
///
/// This is the canonical form for offsets between two headings: the result
/// is the shortest signed rotation, with an exact half-turn reported as `+π`.
#[inline]
pub fn normal_relative_angle(angle: f64) -> f64 {
    if !angle.is_finite() {
        return angle;
    }
    let wrapped = angle.rem_euclid(TAU); // [0, 2π)
    if wrapped > PI { wrapped - TAU } else { wrapped }
}

/// Map `angle` into `[0, 2π)`.  Used for world-frame (absolute) bearings.
#[inline]
pub fn normal_absolute_angle(angle: f64) -> f64 {
    if !angle.is_finite() {
        return angle;
    }
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs.
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Three-way sign: `-1.0`, `0.0` or `+1.0`.
///
/// Unlike `f64::signum`, zero (of either sign) maps to `0.0`.  NaN maps to
/// `0.0` as well.  Use [`Direction::from_sign`][crate::Direction::from_sign]
/// when a zero result must be rejected.
#[inline]
pub fn sign(value: f64) -> f64 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}
