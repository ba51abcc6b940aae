//! Interpolation kernels.

use serde::{Deserialize, Serialize};

/// Blend kernel used between two neighbouring breakpoints.
///
/// Every kernel maps the normalized position `t` in `[0,1]` to a weight
/// `s(t)` with `s(0) = 0` and `s(1) = 1`; the interpolated value is
/// `v[i] * (1 - s) + v[i+1] * s`.
///
/// # Example
///
/// ```
/// use cruise_accel_curves::Kernel;
///
/// // Both smoothsteps are symmetric around the midpoint.
/// assert!((Kernel::Hermite.weight(0.5) - 0.5).abs() < 1e-6);
/// assert!((Kernel::SmoothAkima.weight(0.5) - 0.5).abs() < 1e-6);
///
/// // The quintic stays closer to the near endpoint.
/// assert!(Kernel::SmoothAkima.weight(0.25) < Kernel::Hermite.weight(0.25));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kernel {
    /// Straight-line blend, `s(t) = t`.
    Linear,

    /// Cubic smoothstep, `s(t) = 3t² - 2t³`.
    ///
    /// Zero slope at both ends of every interval.
    Hermite,

    /// Quintic smoothstep, `s(t) = 10t³ - 15t⁴ + 6t⁵`.
    ///
    /// Zero first and second derivative at both ends, so the transition
    /// hugs the breakpoint values longer than [`Kernel::Hermite`].
    #[default]
    SmoothAkima,
}

impl Kernel {
    /// Weight of the upper breakpoint at normalized position `t`.
    ///
    /// `t` is expected in `[0,1]`; values outside are not clamped.
    #[inline]
    pub fn weight(self, t: f32) -> f32 {
        match self {
            Kernel::Linear => t,
            Kernel::Hermite => {
                let t2 = t * t;
                3.0 * t2 - 2.0 * t2 * t
            }
            Kernel::SmoothAkima => {
                let t3 = t * t * t;
                t3 * (10.0 - 15.0 * t + 6.0 * t * t)
            }
        }
    }

    /// All kernels, in declaration order.
    pub const ALL: [Kernel; 3] = [Kernel::Linear, Kernel::Hermite, Kernel::SmoothAkima];
}
