//! Monotone refinements of the acceleration ceiling.
//!
//! Each function here returns a value no greater than the ceiling it is
//! given, so any combination of them can only tighten the bound.

use cruise_accel_curves::{Curve, Kernel};

use crate::tables::{ISO_MAX_ACCEL, LOW_SPEED_RAMP_BP, RAMP_OFF_BP};

/// Ceiling scaled by cruise set speed: a quarter of `max_accel` at standstill,
/// half at half the city limit, full at the city limit and above.
#[inline]
pub fn low_speed_ceiling(max_accel: f32, v_cruise: f32) -> f32 {
    let values = [max_accel / 4.0, max_accel / 2.0, max_accel];
    Curve::from_tables(&LOW_SPEED_RAMP_BP, &values).evaluate(v_cruise, Kernel::SmoothAkima)
}

/// Ceiling scaled by how far the vehicle is below its set speed: zero at or
/// above set speed, half at 1 m/s short, full from 5 m/s short.
#[inline]
pub fn ramp_off_ceiling(max_accel: f32, v_cruise: f32, v_ego: f32) -> f32 {
    let values = [0.0, max_accel / 2.0, max_accel, max_accel];
    Curve::from_tables(&RAMP_OFF_BP, &values).evaluate(v_cruise - v_ego, Kernel::SmoothAkima)
}

/// Apply the low-speed ceiling and then the ramp-off ceiling.
///
/// The ramp-off is scaled from the already-reduced ceiling.
#[inline]
pub fn apply_human_ramp(max_accel: f32, v_cruise: f32, v_ego: f32) -> f32 {
    let max_accel = low_speed_ceiling(max_accel, v_cruise).min(max_accel);
    ramp_off_ceiling(max_accel, v_cruise, v_ego).min(max_accel)
}

/// ISO 15622:2018 acceleration limit at `v_ego`.
#[inline]
pub fn iso_max_allowed_accel(v_ego: f32) -> f32 {
    ISO_MAX_ACCEL.evaluate(v_ego, Kernel::SmoothAkima)
}
