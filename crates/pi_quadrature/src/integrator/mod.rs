//! src/integrator/mod.rs
//!
//! Parallel midpoint-rule estimation of π.
//!
//! The integrator approximates `∫₀¹ 4/(1+x²) dx = π` with a fixed grid of
//! [`INTERVALS`] midpoint samples. The sample range is partitioned into one
//! contiguous chunk per worker, each chunk's partial sum is computed on its
//! own thread, and the partial sums are combined into the final estimate.
//!
//! # Architecture Overview
//!
//! ```text
//!              ┌────────────────────┐
//!              │ ParallelIntegrator │
//!              └─────────┬──────────┘
//!                        │ partitions [0, INTERVALS) into chunks
//!          ┌─────────────┼─────────────┐
//!          ↓             ↓             ↓
//!     [worker 0]    [worker 1]  ...  [worker N-1]    one thread per chunk
//!          │             │             │
//!          └──────── bounded channel ──┘             (worker_id, partial sum)
//!                        ↓
//!                    combiner                        sums by worker id, × dx
//!                        ↓
//!                    Estimate
//! ```
//!
//! # Module Structure
//!
//! ```text
//! src/integrator/
//! ├── mod.rs       # Public API, fixed constants
//! ├── chunks.rs    # Interval partitioning across workers
//! └── workers.rs   # Worker fan-out and partial-sum collection
//! ```
//!
//! # Determinism
//!
//! Partial sums arrive tagged with their worker id and are combined in
//! worker-index order, so the floating-point summation order never depends
//! on thread scheduling. Repeated estimates with the same worker count are
//! bit-identical.

mod chunks;
mod workers;

use anyhow::{ensure, Result};
use std::time::Instant;

use crate::estimate::Estimate;

/// Total number of midpoint samples over `[0, 1]`, independent of the
/// worker count.
pub const INTERVALS: u64 = 10_000_000;

/// Reference value of π (25 significant decimal digits) used for the
/// reported absolute error.
pub const PI_REFERENCE: f64 = 3.141592653589793238462643;

/// Estimates π across a fixed number of parallel workers.
///
/// # Example
/// ```ignore
/// let estimate = ParallelIntegrator::new(4)?.estimate()?;
/// println!("{}", estimate);
/// ```
pub struct ParallelIntegrator {
    num_workers: usize,
}

impl ParallelIntegrator {
    /// Creates an integrator that partitions the sample range across
    /// `num_workers` threads.
    ///
    /// # Errors
    /// Returns an error if `num_workers` is 0.
    pub fn new(num_workers: usize) -> Result<Self> {
        ensure!(
            num_workers > 0,
            "Cannot integrate with 0 workers. Set num_workers to at least 1."
        );
        Ok(Self { num_workers })
    }

    /// Runs one estimation: dispatch all workers, block until every
    /// partial sum has arrived, combine.
    ///
    /// The elapsed time spans partitioning through the final multiply,
    /// measured on the calling thread.
    pub fn estimate(&self) -> Result<Estimate> {
        let started = Instant::now();

        let dx = 1.0 / INTERVALS as f64;
        let chunks = chunks::partition(INTERVALS, self.num_workers)?;
        let partials = workers::partial_sums(chunks, dx)?;
        let pi = dx * partials.iter().sum::<f64>();

        Ok(Estimate {
            num_workers: self.num_workers,
            pi,
            abs_error: (PI_REFERENCE - pi).abs(),
            seconds: started.elapsed().as_secs_f64(),
        })
    }
}

/// Convenience wrapper: `ParallelIntegrator::new(num_workers)?.estimate()`.
pub fn estimate(num_workers: usize) -> Result<Estimate> {
    ParallelIntegrator::new(num_workers)?.estimate()
}
