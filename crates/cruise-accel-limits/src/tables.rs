//! Built-in speed tables and constants.
//!
//! Speeds are in m/s, accelerations in m/s². Every table is checked at
//! compile time.

use cruise_accel_curves::{Curve, Kernel};

use crate::profile::Profile;

const MPH_TO_MS: f32 = 0.447_04;

/// Cruise set speeds below this are treated as city driving by the
/// low-speed ramp (25 mph).
pub const CITY_SPEED_LIMIT: f32 = 25.0 * MPH_TO_MS;

/// Kernel used for every built-in profile table.
pub const PROFILE_KERNEL: Kernel = Kernel::SmoothAkima;

/// Shared breakpoints of the profile max-acceleration tables
/// (0, 11, 22, 34, 45, 56 and 89 mph).
pub const PROFILE_MAX_ACCEL_BP: [f32; 7] = [0.0, 5.0, 10.0, 15.0, 20.0, 25.0, 40.0];

pub const ECO_MAX_ACCEL_VALS: [f32; 7] = [2.0, 1.5, 1.0, 0.8, 0.6, 0.4, 0.2];
pub const SPORT_MAX_ACCEL_VALS: [f32; 7] = [3.0, 2.5, 2.0, 1.5, 1.0, 0.8, 0.6];
pub const SPORT_PLUS_MAX_ACCEL_VALS: [f32; 7] = [4.0, 3.5, 3.0, 2.5, 2.0, 1.5, 1.0];

pub const ECO_MAX_ACCEL: Curve<'static> =
    Curve::from_tables(&PROFILE_MAX_ACCEL_BP, &ECO_MAX_ACCEL_VALS);
pub const SPORT_MAX_ACCEL: Curve<'static> =
    Curve::from_tables(&PROFILE_MAX_ACCEL_BP, &SPORT_MAX_ACCEL_VALS);
pub const SPORT_PLUS_MAX_ACCEL: Curve<'static> =
    Curve::from_tables(&PROFILE_MAX_ACCEL_BP, &SPORT_PLUS_MAX_ACCEL_VALS);

/// Stock planner cruise ceiling, sampled with [`STOCK_MAX_ACCEL_KERNEL`].
pub const STOCK_MAX_ACCEL_BP: [f32; 4] = [0.0, 10.0, 25.0, 40.0];
pub const STOCK_MAX_ACCEL_VALS: [f32; 4] = [1.6, 1.2, 0.8, 0.6];
pub const STOCK_MAX_ACCEL: Curve<'static> =
    Curve::from_tables(&STOCK_MAX_ACCEL_BP, &STOCK_MAX_ACCEL_VALS);
pub const STOCK_MAX_ACCEL_KERNEL: Kernel = Kernel::Linear;

/// Stock planner base deceleration.
pub const STOCK_MIN_ACCEL: f32 = -1.2;

/// ISO 15622:2018 upper acceleration limit for ACC systems.
pub const ISO_MAX_ACCEL_BP: [f32; 3] = [0.0, 5.0, 20.0];
pub const ISO_MAX_ACCEL_VALS: [f32; 3] = [4.0, 4.0, 2.0];
pub const ISO_MAX_ACCEL: Curve<'static> = Curve::from_tables(&ISO_MAX_ACCEL_BP, &ISO_MAX_ACCEL_VALS);

/// Cruise-speed breakpoints of the low-speed ramp.
pub const LOW_SPEED_RAMP_BP: [f32; 3] = [0.0, CITY_SPEED_LIMIT / 2.0, CITY_SPEED_LIMIT];

/// Speed-deficit breakpoints (cruise minus current) of the ramp-off.
pub const RAMP_OFF_BP: [f32; 4] = [0.0, 1.0, 5.0, 10.0];

const _: () = assert!(ECO_MAX_ACCEL.is_well_formed());
const _: () = assert!(SPORT_MAX_ACCEL.is_well_formed());
const _: () = assert!(SPORT_PLUS_MAX_ACCEL.is_well_formed());
const _: () = assert!(STOCK_MAX_ACCEL.is_well_formed());
const _: () = assert!(ISO_MAX_ACCEL.is_well_formed());
const _: () = assert!(Curve::from_tables(&LOW_SPEED_RAMP_BP, &[0.0; 3]).is_well_formed());
const _: () = assert!(Curve::from_tables(&RAMP_OFF_BP, &[0.0; 4]).is_well_formed());

/// Built-in table for `profile`, or `None` for the planner default.
pub fn profile_curve(profile: Profile) -> Option<Curve<'static>> {
    match profile {
        Profile::Standard => None,
        Profile::Eco => Some(ECO_MAX_ACCEL),
        Profile::Sport => Some(SPORT_MAX_ACCEL),
        Profile::SportPlus => Some(SPORT_PLUS_MAX_ACCEL),
    }
}

/// Stock planner cruise ceiling at `v_ego`.
pub fn stock_max_accel(v_ego: f32) -> f32 {
    STOCK_MAX_ACCEL.evaluate(v_ego, STOCK_MAX_ACCEL_KERNEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_speed_limit() {
        assert!((CITY_SPEED_LIMIT - 11.176).abs() < 1e-4);
    }

    #[test]
    fn test_profile_curves_are_ordered() {
        for &v in &PROFILE_MAX_ACCEL_BP {
            let eco = ECO_MAX_ACCEL.evaluate(v, PROFILE_KERNEL);
            let sport = SPORT_MAX_ACCEL.evaluate(v, PROFILE_KERNEL);
            let sport_plus = SPORT_PLUS_MAX_ACCEL.evaluate(v, PROFILE_KERNEL);
            assert!(eco < sport && sport < sport_plus, "at {}", v);
        }
    }

    #[test]
    fn test_profile_curve_lookup() {
        assert!(profile_curve(Profile::Standard).is_none());
        assert_eq!(profile_curve(Profile::Eco), Some(ECO_MAX_ACCEL));
        assert_eq!(profile_curve(Profile::Sport), Some(SPORT_MAX_ACCEL));
        assert_eq!(profile_curve(Profile::SportPlus), Some(SPORT_PLUS_MAX_ACCEL));
    }

    #[test]
    fn test_stock_max_accel_linear() {
        assert!((stock_max_accel(0.0) - 1.6).abs() < 1e-6);
        assert!((stock_max_accel(5.0) - 1.4).abs() < 1e-6);
        assert!((stock_max_accel(40.0) - 0.6).abs() < 1e-6);
        assert!((stock_max_accel(100.0) - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_iso_curve_shape() {
        assert!((ISO_MAX_ACCEL.evaluate(3.0, PROFILE_KERNEL) - 4.0).abs() < 1e-6);
        assert!((ISO_MAX_ACCEL.evaluate(30.0, PROFILE_KERNEL) - 2.0).abs() < 1e-6);
    }
}
