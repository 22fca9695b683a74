pub mod estimate;
pub mod integrator;

pub use estimate::Estimate;
pub use integrator::{estimate, ParallelIntegrator, INTERVALS, PI_REFERENCE};
