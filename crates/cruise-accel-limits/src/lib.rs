//! Cruise Acceleration Limits
//!
//! This crate computes, once per control cycle, the upper and lower bounds on
//! longitudinal acceleration that an adaptive cruise controller may command.
//!
//! # Overview
//!
//! - **Upper bound**: a precedence ladder (traffic mode, then gear-following,
//!   then the configured profile) picks a max-acceleration curve which is
//!   sampled at the current speed. Optional human-like ramping and the ISO
//!   15622 ceiling then tighten it, never loosen it.
//! - **Lower bound**: an independent ladder (force coast, then
//!   gear-following, then the configured profile) scales the base
//!   deceleration.
//!
//! The selector is stateless. Callers that want cycle-to-cycle smoothing own
//! a [`LimitSmoother`] and feed it the selector output.
//!
//! # RT Safety
//!
//! `AccelLimitSelector::select()` allocates nothing, performs no I/O and
//! runs in bounded time. Configuration parsing is not RT-safe and belongs at
//! startup.
//!
//! # Example
//!
//! ```
//! use cruise_accel_limits::prelude::*;
//!
//! let selector = AccelLimitSelector::stock();
//!
//! let config = LimitsConfig {
//!     acceleration_profile: ProfileChoice::Sport,
//!     ..LimitsConfig::default()
//! };
//! let state = CycleState::new(10.0, 20.0).with_config(config);
//!
//! let limits = selector.select(&state);
//! assert!((limits.max_accel - 2.0).abs() < 1e-6);
//! assert!((limits.min_accel - STOCK_MIN_ACCEL).abs() < 1e-6);
//! ```

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod prelude;
pub mod profile;
pub mod ramp;
pub mod selector;
pub mod smoothing;
pub mod state;
pub mod tables;

pub use config::LimitsConfig;
pub use profile::{Profile, ProfileChoice};
pub use ramp::{apply_human_ramp, iso_max_allowed_accel, low_speed_ceiling, ramp_off_ceiling};
pub use selector::{AccelLimitSelector, lower_profile, upper_profile};
pub use smoothing::{LimitSmoother, rate_limit};
pub use state::{AccelLimits, CycleState};
pub use tables::*;

use cruise_accel_curves::CurveError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LimitsError {
    #[error("Invalid default curve: {0}")]
    Curve(#[from] CurveError),

    #[error("Base deceleration must be finite, got {0}")]
    NonFiniteBaseDecel(f32),

    #[error("Invalid profile value {0}: expected 0 (standard), 1 (eco) or 2 (sport)")]
    InvalidProfile(u8),

    #[error("Smoothing step {name} must be finite and non-negative, got {value}")]
    InvalidStep { name: &'static str, value: f32 },

    #[error("Configuration parse error: {0}")]
    Parse(String),
}

pub type LimitsResult<T> = Result<T, LimitsError>;
