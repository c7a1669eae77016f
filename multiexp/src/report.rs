//! Sweeps instance sizes over a range of exponents, comparing the optimized
//! method against the naive one and writing one table row per exponent

use std::{fmt::Display, io::Write};

use ark_ec::CurveGroup;
use rand::Rng;
use tracing::log;

use crate::{
    error::BenchError,
    generate::{generate_group_elements, generate_scalars},
    multiexp::MultiExpMethod,
    profile::profile_multiexp,
};

/// The number of instances per batch
pub const DEFAULT_BATCH_COUNT: usize = 10;
/// The largest exponent a sweep may reach, instances hold `2^exponent` points
pub const MAX_EXPONENT: usize = 31;

/// The parameters of one sweep
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SweepConfig {
    /// The first exponent profiled
    pub expn_start: usize,
    /// The last exponent profiled with the optimized method
    pub expn_end_fast: usize,
    /// The last exponent also profiled with the naive method
    pub expn_end_naive: usize,
    /// The number of instances generated per exponent
    pub batch_count: usize,
    /// Whether to check the optimized answers against the naive ones
    pub compare_answers: bool,
    /// The optimized method to profile
    pub method: MultiExpMethod,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            expn_start: 2,
            expn_end_fast: 20,
            expn_end_naive: 14,
            batch_count: DEFAULT_BATCH_COUNT,
            compare_answers: true,
            method: MultiExpMethod::PIPPENGER,
        }
    }
}

impl SweepConfig {
    /// A config over the given exponent range, other fields defaulted
    pub fn new(expn_start: usize, expn_end_fast: usize, expn_end_naive: usize) -> Self {
        Self { expn_start, expn_end_fast, expn_end_naive, ..Default::default() }
    }

    /// Checks the parameters before any row is computed
    pub fn validate(&self) -> Result<(), BenchError> {
        if self.expn_start > self.expn_end_fast {
            return Err(BenchError::InvalidConfig(format!(
                "expn_start ({}) > expn_end_fast ({})",
                self.expn_start, self.expn_end_fast
            )));
        }
        if self.expn_end_fast > MAX_EXPONENT {
            return Err(BenchError::InvalidConfig(format!(
                "expn_end_fast ({}) > {MAX_EXPONENT}",
                self.expn_end_fast
            )));
        }
        if self.batch_count == 0 {
            return Err(BenchError::InvalidConfig("batch_count must be at least 1".to_string()));
        }
        if !self.method.is_optimized() {
            return Err(BenchError::InvalidConfig(format!("{} is not an optimized method", self.method)));
        }

        Ok(())
    }
}

/// One line of the performance table
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BenchmarkRow {
    /// Instances in this row hold `2^exponent` points
    pub exponent: usize,
    /// Time for the optimized method over the batch
    pub fast_ns: u64,
    /// Time for the naive method, absent above the naive cutoff
    pub naive_ns: Option<u64>,
    /// The answer check, absent when no check ran
    pub answers_match: Option<bool>,
}

impl Display for BenchmarkRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\t{}", self.exponent, self.fast_ns)?;
        if let Some(naive_ns) = self.naive_ns {
            write!(f, "\t{naive_ns}")?;
        }

        Ok(())
    }
}

/// Profiles every exponent in `config.expn_start..=config.expn_end_fast`
///
/// Rows go to `out` as soon as they are computed, answer mismatches go to
/// `diag` and do not stop the sweep. The computed rows are returned.
pub fn print_performance_csv<G, R, W, D>(
    config: &SweepConfig,
    rng: &mut R,
    out: &mut W,
    diag: &mut D,
) -> Result<Vec<BenchmarkRow>, BenchError>
where
    G: CurveGroup,
    R: Rng + ?Sized,
    W: Write,
    D: Write,
{
    config.validate()?;

    let mut rows = Vec::with_capacity(config.expn_end_fast - config.expn_start + 1);
    for expn in config.expn_start..=config.expn_end_fast {
        let row = profile_row::<G, R, D>(config, expn, rng, diag)?;
        writeln!(out, "{row}")?;
        out.flush()?;

        rows.push(row);
    }

    Ok(rows)
}

/// Computes the row for a single exponent from freshly generated instances
pub fn profile_row<G, R, D>(
    config: &SweepConfig,
    expn: usize,
    rng: &mut R,
    diag: &mut D,
) -> Result<BenchmarkRow, BenchError>
where
    G: CurveGroup,
    R: Rng + ?Sized,
    D: Write,
{
    let size = 1usize << expn;
    let group_elements = generate_group_elements::<G, R>(config.batch_count, size, rng)?;
    let scalars = generate_scalars::<G::ScalarField>(config.batch_count, size)?;

    let result_fast = profile_multiexp(&group_elements, &scalars, config.method)?;
    let mut row = BenchmarkRow { exponent: expn, fast_ns: result_fast.elapsed_ns, naive_ns: None, answers_match: None };

    if expn <= config.expn_end_naive {
        let result_naive = profile_multiexp(&group_elements, &scalars, MultiExpMethod::Naive)?;
        row.naive_ns = Some(result_naive.elapsed_ns);

        if config.compare_answers {
            let matching = check_answers(config.method, expn, &result_fast.answers, &result_naive.answers, diag)?;
            row.answers_match = Some(matching);
        }
    }

    log::debug!("exponent {expn}: {row:?}");
    Ok(row)
}

/// Compares the optimized answers against the naive ones, position by position
///
/// A mismatch writes one line to `diag` and returns `Ok(false)`; it never
/// fails the sweep. Only writing to `diag` can return an error.
pub fn check_answers<G, D>(
    method: MultiExpMethod,
    expn: usize,
    fast: &[G],
    naive: &[G],
    diag: &mut D,
) -> Result<bool, BenchError>
where
    G: CurveGroup,
    D: Write,
{
    let matching = fast == naive;
    if !matching {
        log::debug!("{method} and naive answers differ at exponent {expn}");
        writeln!(diag, "Answers NOT MATCHING (exponent {expn})")?;
    }

    Ok(matching)
}
