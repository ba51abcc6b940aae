//! Common imports for callers of the selector.

pub use crate::config::LimitsConfig;
pub use crate::profile::{Profile, ProfileChoice};
pub use crate::selector::AccelLimitSelector;
pub use crate::smoothing::LimitSmoother;
pub use crate::state::{AccelLimits, CycleState};
pub use crate::tables::{CITY_SPEED_LIMIT, STOCK_MIN_ACCEL};
pub use crate::{LimitsError, LimitsResult};
