//! Times one method over a batch of instances

use std::time::Instant;

use ark_ec::CurveGroup;
use tracing::log;

use crate::{
    error::BenchError,
    multiexp::{multi_exp, MultiExpMethod},
};

/// The outcome of running one method over one batch
#[derive(Clone, Debug)]
pub struct RunResult<G> {
    /// Wall time for the whole batch, in nanoseconds
    pub elapsed_ns: u64,
    /// One answer per instance, in batch order
    pub answers: Vec<G>,
}

/// Runs `method` over every instance of the batch, in order
///
/// A single start/stop pair brackets the whole batch. Errors from the engine
/// are returned as-is, with no retry.
pub fn profile_multiexp<G: CurveGroup>(
    group_elements: &[Vec<G>],
    scalars: &[Vec<G::ScalarField>],
    method: MultiExpMethod,
) -> Result<RunResult<G>, BenchError> {
    if group_elements.len() != scalars.len() {
        return Err(BenchError::BatchMismatch { points: group_elements.len(), scalars: scalars.len() });
    }

    let start = Instant::now();

    let mut answers = Vec::with_capacity(group_elements.len());
    for (points, scalars) in group_elements.iter().zip(scalars) {
        answers.push(multi_exp(points, scalars, method)?);
    }

    let elapsed = start.elapsed();
    log::debug!("{method} over {} instances took {elapsed:?}", group_elements.len());

    // Saturates; u64 nanoseconds only overflow after ~584 years
    let elapsed_ns = u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX);
    Ok(RunResult { elapsed_ns, answers })
}
