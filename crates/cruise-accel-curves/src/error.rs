//! Error types for curve construction.

/// Error type for curve construction.
///
/// Curves are validated once, when they are built. Evaluation itself is
/// infallible, so every variant here describes malformed table data.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CurveError {
    /// Fewer than two breakpoints were supplied.
    #[error("Curve needs at least 2 points, got {0}")]
    TooFewPoints(usize),

    /// Breakpoint and value sequences differ in length.
    #[error("Curve has {breakpoints} breakpoints but {values} values")]
    LengthMismatch {
        /// Number of breakpoints.
        breakpoints: usize,
        /// Number of values.
        values: usize,
    },

    /// A breakpoint or value is NaN or infinite.
    #[error("Curve {sequence} entry {index} is not finite: {value}")]
    NonFinite {
        /// Which sequence holds the entry ("breakpoint" or "value").
        sequence: &'static str,
        /// Index of the offending entry.
        index: usize,
        /// The offending value.
        value: f32,
    },

    /// Breakpoints are not strictly increasing.
    #[error("Curve breakpoint {index} ({value}) does not exceed the previous breakpoint ({previous})")]
    NotStrictlyIncreasing {
        /// Index of the first out-of-order breakpoint.
        index: usize,
        /// The breakpoint before it.
        previous: f32,
        /// The out-of-order breakpoint.
        value: f32,
    },
}
