use serde::{Deserialize, Serialize};
use std::fmt;

/// The `Estimate` struct holds the result of one parallel π estimation.
///
/// It is produced by [`ParallelIntegrator::estimate`](crate::ParallelIntegrator::estimate)
/// and never mutated afterwards. The absolute error is measured against
/// [`PI_REFERENCE`](crate::PI_REFERENCE).
///
/// The `Display` implementation renders the comma-separated line the
/// scaling driver prints, with 24 decimal digits per floating-point field:
///
/// ```text
/// 4, 3.141592653589792671908753, 0.000000000000000444089210, 0.003087213000000000211002
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Estimate {
    /// Number of workers the interval range was partitioned across.
    pub num_workers: usize,
    /// The midpoint-rule estimate of π.
    pub pi: f64,
    /// Absolute difference between the estimate and the reference constant.
    pub abs_error: f64,
    /// Wall-clock duration of the estimation, in seconds.
    pub seconds: f64,
}

impl fmt::Display for Estimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {:.24}, {:.24}, {:.24}",
            self.num_workers, self.pi, self.abs_error, self.seconds
        )
    }
}
