//! Acceleration limit selection
//!
//! Two independent precedence ladders run every cycle. The first matching
//! rule of each ladder wins and later rules are never consulted.
//!
//! Upper bound:
//! 1. traffic mode: planner default curve
//! 2. gear-following with a drive mode engaged: eco, else sport/sport+
//! 3. configured acceleration profile
//!
//! Lower bound:
//! 1. force coast: eco bound
//! 2. gear-following with a drive mode engaged: eco, else sport
//! 3. configured deceleration profile

use cruise_accel_curves::{Curve, Kernel};
use tracing::{debug, trace};

use crate::profile::{Profile, ProfileChoice};
use crate::ramp::{apply_human_ramp, iso_max_allowed_accel};
use crate::state::{AccelLimits, CycleState};
use crate::tables::{
    PROFILE_KERNEL, STOCK_MAX_ACCEL, STOCK_MAX_ACCEL_KERNEL, STOCK_MIN_ACCEL, profile_curve,
};
use crate::{LimitsError, LimitsResult};

/// Which max-acceleration curve the upper ladder selects for this cycle.
pub fn upper_profile(state: &CycleState) -> Profile {
    let config = &state.config;

    if state.traffic_mode {
        return Profile::Standard;
    }

    if config.follow_gear_acceleration && state.drive_mode_engaged() {
        return if state.eco_gear {
            Profile::Eco
        } else if config.sport_plus {
            Profile::SportPlus
        } else {
            Profile::Sport
        };
    }

    match config.acceleration_profile {
        ProfileChoice::Eco => Profile::Eco,
        ProfileChoice::Sport => Profile::Sport,
        ProfileChoice::Standard if config.sport_plus => Profile::SportPlus,
        ProfileChoice::Standard => Profile::Standard,
    }
}

/// Which deceleration bound the lower ladder selects for this cycle.
pub fn lower_profile(state: &CycleState) -> ProfileChoice {
    if state.force_coast {
        return ProfileChoice::Eco;
    }

    if state.config.follow_gear_deceleration && state.drive_mode_engaged() {
        return if state.eco_gear {
            ProfileChoice::Eco
        } else {
            ProfileChoice::Sport
        };
    }

    state.config.deceleration_profile
}

/// Per-cycle acceleration limit selector.
///
/// Holds only the planner-supplied collaborators: the default
/// max-acceleration curve with its kernel, and the base deceleration.
/// Everything else arrives in [`CycleState`].
///
/// # Example
///
/// ```
/// use cruise_accel_curves::{Curve, Kernel};
/// use cruise_accel_limits::{AccelLimitSelector, CycleState};
///
/// let default_curve = Curve::new(&[0.0, 30.0], &[1.5, 0.5])?;
/// let selector = AccelLimitSelector::new(default_curve, Kernel::Linear, -1.0)?;
///
/// let state = CycleState::new(15.0, 20.0).with_traffic_mode(true);
/// let limits = selector.select(&state);
/// assert!((limits.max_accel - 1.0).abs() < 1e-6);
/// assert!((limits.min_accel + 1.0).abs() < 1e-6);
/// # Ok::<(), cruise_accel_limits::LimitsError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccelLimitSelector<'a> {
    default_curve: Curve<'a>,
    default_kernel: Kernel,
    base_min_accel: f32,
}

impl<'a> AccelLimitSelector<'a> {
    /// Build a selector around the planner's default ceiling and base
    /// deceleration.
    ///
    /// # Errors
    ///
    /// Returns [`LimitsError::NonFiniteBaseDecel`] if `base_min_accel` is NaN
    /// or infinite.
    pub fn new(
        default_curve: Curve<'a>,
        default_kernel: Kernel,
        base_min_accel: f32,
    ) -> LimitsResult<Self> {
        if !base_min_accel.is_finite() {
            return Err(LimitsError::NonFiniteBaseDecel(base_min_accel));
        }

        debug!(
            points = default_curve.point_count(),
            ?default_kernel,
            base_min_accel,
            "acceleration limit selector ready"
        );

        Ok(Self {
            default_curve,
            default_kernel,
            base_min_accel,
        })
    }

    /// Build a selector from raw default-curve tables.
    ///
    /// # Errors
    ///
    /// Returns [`LimitsError::Curve`] if the tables are malformed, or
    /// [`LimitsError::NonFiniteBaseDecel`] as [`AccelLimitSelector::new`].
    pub fn from_tables(
        breakpoints: &'a [f32],
        values: &'a [f32],
        default_kernel: Kernel,
        base_min_accel: f32,
    ) -> LimitsResult<Self> {
        let curve = Curve::new(breakpoints, values)?;
        Self::new(curve, default_kernel, base_min_accel)
    }

    pub fn default_curve(&self) -> Curve<'a> {
        self.default_curve
    }

    pub fn base_min_accel(&self) -> f32 {
        self.base_min_accel
    }

    /// Sample the max-acceleration curve for `profile` at `v_ego`.
    #[inline]
    pub fn sample_profile(&self, profile: Profile, v_ego: f32) -> f32 {
        match profile_curve(profile) {
            Some(curve) => curve.evaluate(v_ego, PROFILE_KERNEL),
            None => self.default_curve.evaluate(v_ego, self.default_kernel),
        }
    }

    /// Upper-ladder ceiling before any refinement.
    #[inline]
    pub fn ladder_max_accel(&self, state: &CycleState) -> f32 {
        self.sample_profile(upper_profile(state), state.v_ego)
    }

    /// Deceleration bound for a lower-ladder outcome.
    #[inline]
    pub fn min_accel_for(&self, choice: ProfileChoice) -> f32 {
        match choice {
            ProfileChoice::Eco => self.base_min_accel / 2.0,
            ProfileChoice::Sport => self.base_min_accel * 2.0,
            ProfileChoice::Standard => self.base_min_accel,
        }
    }

    /// Compute this cycle's acceleration bounds.
    pub fn select(&self, state: &CycleState) -> AccelLimits {
        let profile = upper_profile(state);
        let ladder_max = self.sample_profile(profile, state.v_ego);

        let mut max_accel = ladder_max;
        if state.config.human_acceleration {
            max_accel = apply_human_ramp(max_accel, state.v_cruise, state.v_ego);
        }
        if state.config.iso_ceiling {
            max_accel = max_accel.min(iso_max_allowed_accel(state.v_ego));
        }

        let decel = lower_profile(state);
        let min_accel = self.min_accel_for(decel);

        trace!(
            ?profile,
            ?decel,
            v_ego = state.v_ego,
            v_cruise = state.v_cruise,
            ladder_max,
            max_accel,
            min_accel,
            "acceleration limits selected"
        );

        AccelLimits {
            max_accel,
            min_accel,
        }
    }
}

impl AccelLimitSelector<'static> {
    /// Selector using the stock planner ceiling and base deceleration.
    pub fn stock() -> Self {
        Self {
            default_curve: STOCK_MAX_ACCEL,
            default_kernel: STOCK_MAX_ACCEL_KERNEL,
            base_min_accel: STOCK_MIN_ACCEL,
        }
    }
}

impl Default for AccelLimitSelector<'static> {
    fn default() -> Self {
        Self::stock()
    }
}
