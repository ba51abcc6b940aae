//! Breakpoint curves with flat extrapolation.

use crate::error::CurveError;
use crate::kernel::Kernel;

/// A sampled scalar function: strictly increasing breakpoints and one value
/// per breakpoint.
///
/// A `Curve` borrows its tables, so built-in curves are plain `const` data
/// and caller-supplied curves cost nothing to copy into the control loop.
///
/// # RT Safety
///
/// [`Curve::evaluate`] is RT-safe:
/// - No heap allocations
/// - O(log n) breakpoint search over a small fixed table
/// - Never panics and never indexes out of range, whatever the input
///
/// # Example
///
/// ```
/// use cruise_accel_curves::{Curve, Kernel};
///
/// let curve = Curve::new(&[0.0, 10.0, 20.0], &[2.0, 1.0, 0.5])?;
///
/// assert_eq!(curve.evaluate(10.0, Kernel::Hermite), 1.0);
/// // Flat beyond the domain.
/// assert_eq!(curve.evaluate(-5.0, Kernel::Hermite), 2.0);
/// assert_eq!(curve.evaluate(99.0, Kernel::Hermite), 0.5);
/// # Ok::<(), cruise_accel_curves::CurveError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Curve<'a> {
    breakpoints: &'a [f32],
    values: &'a [f32],
}

impl<'a> Curve<'a> {
    /// Build a curve, validating the tables.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError`] when there are fewer than two points, the
    /// sequences differ in length, an entry is not finite, or the
    /// breakpoints are not strictly increasing.
    pub fn new(breakpoints: &'a [f32], values: &'a [f32]) -> Result<Self, CurveError> {
        if breakpoints.len() != values.len() {
            return Err(CurveError::LengthMismatch {
                breakpoints: breakpoints.len(),
                values: values.len(),
            });
        }
        if breakpoints.len() < 2 {
            return Err(CurveError::TooFewPoints(breakpoints.len()));
        }

        for (sequence, table) in [("breakpoint", breakpoints), ("value", values)] {
            if let Some((index, &value)) = table.iter().enumerate().find(|(_, v)| !v.is_finite()) {
                return Err(CurveError::NonFinite {
                    sequence,
                    index,
                    value,
                });
            }
        }

        for (index, pair) in breakpoints.windows(2).enumerate() {
            if let &[previous, value] = pair
                && value <= previous
            {
                return Err(CurveError::NotStrictlyIncreasing {
                    index: index.saturating_add(1),
                    previous,
                    value,
                });
            }
        }

        Ok(Self {
            breakpoints,
            values,
        })
    }

    /// Build a curve without runtime validation.
    ///
    /// Pair every use with a compile-time check:
    ///
    /// ```
    /// use cruise_accel_curves::Curve;
    ///
    /// const BP: [f32; 3] = [0.0, 5.0, 20.0];
    /// const VALS: [f32; 3] = [4.0, 4.0, 2.0];
    /// const LIMIT: Curve<'static> = Curve::from_tables(&BP, &VALS);
    /// const _: () = assert!(LIMIT.is_well_formed());
    /// ```
    pub const fn from_tables(breakpoints: &'a [f32], values: &'a [f32]) -> Self {
        Self {
            breakpoints,
            values,
        }
    }

    /// `true` when the curve satisfies every invariant [`Curve::new`] checks.
    ///
    /// Usable in `const` context.
    pub const fn is_well_formed(&self) -> bool {
        self.breakpoints.len() >= 2
            && self.breakpoints.len() == self.values.len()
            && all_finite(self.breakpoints)
            && all_finite(self.values)
            && strictly_increasing(self.breakpoints)
    }

    /// Evaluate the curve at `x` with the given kernel.
    ///
    /// Inputs at or below the first breakpoint return the first value, inputs
    /// at or above the last breakpoint return the last value. Between, the
    /// interval `bp[i] <= x < bp[i+1]` is blended with `kernel`. A NaN input
    /// yields NaN.
    #[inline]
    pub fn evaluate(&self, x: f32, kernel: Kernel) -> f32 {
        let (Some(&x_first), Some(&x_last), Some(&y_first), Some(&y_last)) = (
            self.breakpoints.first(),
            self.breakpoints.last(),
            self.values.first(),
            self.values.last(),
        ) else {
            return f32::NAN;
        };

        if x <= x_first {
            return y_first;
        }
        if x >= x_last {
            return y_last;
        }

        let last_interval = self.breakpoints.len().saturating_sub(2);
        let i = self
            .breakpoints
            .partition_point(|&b| b <= x)
            .saturating_sub(1)
            .min(last_interval);

        let (Some(&[x0, x1]), Some(&[y0, y1])) = (
            self.breakpoints.get(i..).and_then(|s| s.first_chunk::<2>()),
            self.values.get(i..).and_then(|s| s.first_chunk::<2>()),
        ) else {
            return f32::NAN;
        };

        let t = (x - x0) / (x1 - x0);
        let s = kernel.weight(t);
        y0 * (1.0 - s) + y1 * s
    }

    /// The breakpoint table.
    pub fn breakpoints(&self) -> &'a [f32] {
        self.breakpoints
    }

    /// The value table.
    pub fn values(&self) -> &'a [f32] {
        self.values
    }

    /// Number of points.
    pub fn point_count(&self) -> usize {
        self.breakpoints.len()
    }

    /// First and last breakpoint.
    pub fn domain(&self) -> (f32, f32) {
        match (self.breakpoints.first(), self.breakpoints.last()) {
            (Some(&lo), Some(&hi)) => (lo, hi),
            _ => (f32::NAN, f32::NAN),
        }
    }

    /// Smallest and largest value in the table.
    ///
    /// Every kernel blends convexly between neighbours, so no evaluation
    /// leaves this range.
    pub fn value_range(&self) -> (f32, f32) {
        let lo = self.values.iter().copied().fold(f32::INFINITY, f32::min);
        let hi = self.values.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        (lo, hi)
    }
}

const fn all_finite(mut table: &[f32]) -> bool {
    while let Some((first, rest)) = table.split_first() {
        if !first.is_finite() {
            return false;
        }
        table = rest;
    }
    true
}

const fn strictly_increasing(table: &[f32]) -> bool {
    let Some((first, mut rest)) = table.split_first() else {
        return false;
    };
    let mut previous = *first;
    while let Some((next, tail)) = rest.split_first() {
        if *next <= previous {
            return false;
        }
        previous = *next;
        rest = tail;
    }
    true
}
