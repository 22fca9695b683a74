//! src/integrator/workers.rs
//!
//! Worker fan-out and partial-sum collection.
//!
//! One thread is spawned per chunk. Every worker computes its chunk's
//! partial Riemann sum and sends it exactly once, tagged with its worker
//! id, into a bounded channel whose capacity equals the worker count. The
//! collector blocks until all partial sums have arrived, then joins every
//! worker so no thread outlives the call.

use anyhow::{anyhow, Context, Result};
use crossbeam_channel::bounded;
use std::thread;

use super::chunks::Chunk;

/// Midpoint-rule partial sum of `4/(1+x²)` over one chunk.
///
/// Sample `j` sits at the midpoint of `[j·dx, (j+1)·dx]`. Scaling the
/// combined sum by `dx` is left to the combiner.
pub(crate) fn midpoint_sum(chunk: Chunk, dx: f64) -> f64 {
    let mut sum = 0.0;
    for j in chunk.start..chunk.end {
        let x = dx * (j as f64 + 0.5);
        sum += 4.0 / (1.0 + x * x);
    }
    sum
}

/// Computes one partial sum per chunk, each on its own worker thread.
///
/// Returns the partial sums indexed by worker id, so the arrival order of
/// results never leaks into the combined value.
///
/// # Errors
/// - Worker thread creation failure
/// - A worker exiting without delivering its partial sum
pub(crate) fn partial_sums(chunks: Vec<Chunk>, dx: f64) -> Result<Vec<f64>> {
    let num_workers = chunks.len();

    // Capacity matches the worker count: every send completes without
    // blocking, even if the collector has not started draining yet.
    let (output_tx, output_rx) = bounded(num_workers);

    let mut workers = Vec::with_capacity(num_workers);
    for (worker_id, chunk) in chunks.into_iter().enumerate() {
        let output_tx = output_tx.clone();

        let handle = thread::Builder::new()
            .name(format!("quadrature-worker-{}", worker_id))
            .spawn(move || {
                // Fails only if the collector already bailed out.
                let _ = output_tx.send((worker_id, midpoint_sum(chunk, dx)));
            })
            .with_context(|| format!("Failed to spawn worker thread {}", worker_id))?;

        workers.push(handle);
    }
    drop(output_tx);

    let mut partials = vec![0.0_f64; num_workers];
    for _ in 0..num_workers {
        let (worker_id, partial) = output_rx
            .recv()
            .context("Worker exited before delivering its partial sum")?;
        partials[worker_id] = partial;
    }

    for worker in workers {
        worker
            .join()
            .map_err(|_| anyhow!("Worker thread panicked"))?;
    }

    Ok(partials)
}
