use anyhow::Result;
use pi_quadrature::estimate;

/// Repetitions per worker count, so scheduling noise is visible in the
/// reported timings.
const RUNS_PER_WORKER_COUNT: usize = 20;

/// Sweeps the worker count from 1 up to the number of available CPUs and
/// prints one comma-separated line per run:
/// `<workers>, <pi>, <abs error>, <seconds>`.
fn main() -> Result<()> {
    let cpus = num_cpus::get();

    for num_workers in 1..=cpus {
        for _ in 0..RUNS_PER_WORKER_COUNT {
            println!("{}", estimate(num_workers)?);
        }
    }

    Ok(())
}
