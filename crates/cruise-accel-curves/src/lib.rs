//! Breakpoint Curves for Longitudinal Control
//!
//! This crate evaluates scalar functions defined by a short, strictly
//! increasing breakpoint table and one value per breakpoint. It is the
//! interpolation layer underneath the cruise acceleration limit selector.
//!
//! # Overview
//!
//! - [`Curve`]: validated, borrowed breakpoint/value tables
//! - [`Kernel`]: the blend used inside an interval
//!   - **Linear**: straight-line blend
//!   - **Hermite**: cubic smoothstep
//!   - **SmoothAkima**: quintic smoothstep with flatter shoulders
//!
//! Outside the breakpoint domain every curve is flat: it returns the nearest
//! endpoint value and never extends the slope.
//!
//! # RT Safety Guarantees
//!
//! `Curve::evaluate()` performs:
//! - No heap allocations
//! - No syscalls or I/O
//! - Bounded execution time
//! - Checked table access only (no panics on any input)
//!
//! Validation happens once, in `Curve::new()` or at compile time for `const`
//! tables via `Curve::is_well_formed()`.
//!
//! # Example
//!
//! ```
//! use cruise_accel_curves::{Curve, Kernel};
//!
//! const BP: [f32; 7] = [0.0, 5.0, 10.0, 15.0, 20.0, 25.0, 40.0];
//! const ECO: [f32; 7] = [2.0, 1.5, 1.0, 0.8, 0.6, 0.4, 0.2];
//!
//! let curve = Curve::new(&BP, &ECO)?;
//!
//! // 1kHz-safe evaluation
//! let max_accel = curve.evaluate(7.5, Kernel::SmoothAkima);
//! assert!(max_accel > 1.0 && max_accel < 1.5);
//! # Ok::<(), cruise_accel_curves::CurveError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod curve;
pub mod error;
pub mod kernel;
pub mod prelude;

pub use curve::Curve;
pub use error::CurveError;
pub use kernel::Kernel;
