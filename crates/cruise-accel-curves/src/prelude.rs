//! Common imports.

pub use crate::curve::Curve;
pub use crate::error::CurveError;
pub use crate::kernel::Kernel;
