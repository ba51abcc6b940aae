//! Per-cycle input and output types

use serde::{Deserialize, Serialize};

use crate::config::LimitsConfig;

/// Live vehicle state and configuration for one control cycle.
///
/// Rebuilt every cycle and passed by reference into the selector. Speeds are
/// in m/s and assumed finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CycleState {
    /// Current vehicle speed.
    pub v_ego: f32,
    /// Cruise target speed.
    pub v_cruise: f32,
    /// Transmission reports an eco drive mode.
    pub eco_gear: bool,
    /// Transmission reports a sport drive mode.
    pub sport_gear: bool,
    /// Traffic mode overrides profile tuning.
    pub traffic_mode: bool,
    /// Driver requested the most lenient braking bound.
    pub force_coast: bool,
    /// Configuration snapshot for this cycle.
    pub config: LimitsConfig,
}

impl CycleState {
    pub fn new(v_ego: f32, v_cruise: f32) -> Self {
        Self {
            v_ego,
            v_cruise,
            ..Self::default()
        }
    }

    pub fn with_config(mut self, config: LimitsConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_gears(mut self, eco_gear: bool, sport_gear: bool) -> Self {
        self.eco_gear = eco_gear;
        self.sport_gear = sport_gear;
        self
    }

    pub fn with_traffic_mode(mut self, traffic_mode: bool) -> Self {
        self.traffic_mode = traffic_mode;
        self
    }

    pub fn with_force_coast(mut self, force_coast: bool) -> Self {
        self.force_coast = force_coast;
        self
    }

    /// Either drive-mode gear flag is set.
    pub fn drive_mode_engaged(&self) -> bool {
        self.eco_gear || self.sport_gear
    }
}

/// Acceleration bounds produced by one cycle.
///
/// `max_accel >= min_accel` is not enforced here; callers that need the
/// ordering check [`AccelLimits::is_ordered`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AccelLimits {
    pub max_accel: f32,
    pub min_accel: f32,
}

impl AccelLimits {
    pub fn new(max_accel: f32, min_accel: f32) -> Self {
        Self {
            max_accel,
            min_accel,
        }
    }

    pub fn is_ordered(&self) -> bool {
        self.max_accel >= self.min_accel
    }
}
