//! Cycle-to-cycle rate limiting of the selected bounds.
//!
//! The selector is stateless; this is the optional, caller-owned history for
//! callers that want the bounds to move gradually between cycles.

use crate::state::AccelLimits;
use crate::{LimitsError, LimitsResult};

/// Clamp `new_value` to within `down_step` below and `up_step` above
/// `last_value`.
#[inline]
pub fn rate_limit(new_value: f32, last_value: f32, down_step: f32, up_step: f32) -> f32 {
    new_value
        .max(last_value - down_step)
        .min(last_value + up_step)
}

/// Rate limiter state for [`AccelLimits`].
///
/// # RT Safety
///
/// - No heap allocations
/// - O(1) time complexity
///
/// # Example
///
/// ```
/// use cruise_accel_limits::{AccelLimits, LimitSmoother};
///
/// let mut smoother = LimitSmoother::new(0.05, 0.1)?;
///
/// // The first cycle passes through.
/// let first = smoother.apply(AccelLimits::new(1.0, -1.2));
/// assert!((first.max_accel - 1.0).abs() < 1e-6);
///
/// // A jump to 2.0 is spread over later cycles.
/// let second = smoother.apply(AccelLimits::new(2.0, -1.2));
/// assert!((second.max_accel - 1.05).abs() < 1e-6);
/// # Ok::<(), cruise_accel_limits::LimitsError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LimitSmoother {
    max_step_up: f32,
    max_step_down: f32,
    previous: Option<AccelLimits>,
}

impl LimitSmoother {
    /// Create a smoother with per-cycle step limits.
    ///
    /// # Errors
    ///
    /// Returns [`LimitsError::InvalidStep`] if either step is negative or not
    /// finite.
    pub fn new(max_step_up: f32, max_step_down: f32) -> LimitsResult<Self> {
        for (name, value) in [("max_step_up", max_step_up), ("max_step_down", max_step_down)] {
            if !value.is_finite() || value < 0.0 {
                return Err(LimitsError::InvalidStep { name, value });
            }
        }
        Ok(Self {
            max_step_up,
            max_step_down,
            previous: None,
        })
    }

    /// Create a smoother from rates in m/s³ and the control period in seconds.
    ///
    /// # Errors
    ///
    /// As [`LimitSmoother::new`], for the resulting per-cycle steps.
    pub fn from_rates(rate_up: f32, rate_down: f32, period_s: f32) -> LimitsResult<Self> {
        Self::new(rate_up * period_s, rate_down * period_s)
    }

    /// A smoother that never limits (bypass).
    pub fn unlimited() -> Self {
        Self {
            max_step_up: f32::MAX,
            max_step_down: f32::MAX,
            previous: None,
        }
    }

    /// Rate-limit `limits` against the previous output and remember the
    /// result.
    pub fn apply(&mut self, limits: AccelLimits) -> AccelLimits {
        let output = match self.previous {
            None => limits,
            Some(last) => AccelLimits {
                max_accel: rate_limit(
                    limits.max_accel,
                    last.max_accel,
                    self.max_step_down,
                    self.max_step_up,
                ),
                min_accel: rate_limit(
                    limits.min_accel,
                    last.min_accel,
                    self.max_step_down,
                    self.max_step_up,
                ),
            },
        };
        self.previous = Some(output);
        output
    }

    /// Forget history; the next [`LimitSmoother::apply`] passes through.
    pub fn reset(&mut self) {
        self.previous = None;
    }

    pub fn previous(&self) -> Option<AccelLimits> {
        self.previous
    }
}

impl Default for LimitSmoother {
    fn default() -> Self {
        Self::unlimited()
    }
}
