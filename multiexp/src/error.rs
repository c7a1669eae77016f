//! Error types for the multiexp engine and the profiling harness
use std::{error::Error, fmt::Display};

/// The error types for a profiling run
///
/// Every variant is fatal: the computations are deterministic, so nothing is
/// retried. Answer mismatches between methods are not errors, they are
/// reported on the diagnostic stream instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BenchError {
    /// The points and scalars of an instance have different lengths
    LengthMismatch {
        /// The number of points given
        points: usize,
        /// The number of scalars given
        scalars: usize,
    },
    /// An instance with no points was given to the engine
    EmptyInstance,
    /// A Pippenger window size outside of the supported range
    InvalidWindowSize(usize),
    /// A batch of points and a batch of scalars hold different instance counts
    BatchMismatch {
        /// The number of point vectors
        points: usize,
        /// The number of scalar vectors
        scalars: usize,
    },
    /// The sweep parameters are not usable
    InvalidConfig(String),
    /// Allocating the benchmark inputs failed
    Allocation(String),
    /// The curve parameters failed their setup checks
    CurveSetup(String),
    /// Writing the report failed
    Io(String),
}

impl Display for BenchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BenchError::LengthMismatch { points, scalars } => {
                write!(f, "Points and scalars must have the same length ({points} != {scalars})")
            },
            BenchError::EmptyInstance => write!(f, "Instance must contain at least one point"),
            BenchError::InvalidWindowSize(c) => write!(f, "Invalid window size: {c}"),
            BenchError::BatchMismatch { points, scalars } => {
                write!(f, "Batch sizes differ: {points} point vectors, {scalars} scalar vectors")
            },
            BenchError::InvalidConfig(e) => write!(f, "Invalid sweep config: {e}"),
            BenchError::Allocation(e) => write!(f, "Allocation failed: {e}"),
            BenchError::CurveSetup(e) => write!(f, "Curve setup failed: {e}"),
            BenchError::Io(e) => write!(f, "Error writing report: {e}"),
        }
    }
}
impl Error for BenchError {}

impl From<std::io::Error> for BenchError {
    fn from(e: std::io::Error) -> Self {
        BenchError::Io(e.to_string())
    }
}

impl From<std::collections::TryReserveError> for BenchError {
    fn from(e: std::collections::TryReserveError) -> Self {
        BenchError::Allocation(e.to_string())
    }
}
