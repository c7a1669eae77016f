//! The multi-scalar multiplication engine: one entry point dispatching to the
//! naive method or one of the bucket methods

use std::fmt::Display;

use ark_ec::CurveGroup;

use crate::{
    error::BenchError,
    naive::naive_msm,
    pippenger::{default_window_size, pippenger},
    sid_pippenger::sid_pippenger,
};

/// The method used to compute a multi-scalar multiplication
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MultiExpMethod {
    /// One scalar multiplication per pair, summed left to right
    Naive,
    /// Unsigned bucket method; `None` picks the window from the instance size
    Pippenger {
        /// The window size in bits
        window_size: Option<usize>,
    },
    /// Bucket method over signed window digits
    SignedPippenger {
        /// The window size in bits
        window_size: Option<usize>,
    },
}

impl MultiExpMethod {
    /// The unsigned bucket method with a size-dependent window
    pub const PIPPENGER: Self = MultiExpMethod::Pippenger { window_size: None };
    /// The signed bucket method with a size-dependent window
    pub const SIGNED_PIPPENGER: Self = MultiExpMethod::SignedPippenger { window_size: None };

    /// Whether this is one of the asymptotically faster methods
    pub fn is_optimized(&self) -> bool {
        !matches!(self, MultiExpMethod::Naive)
    }
}

impl Display for MultiExpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MultiExpMethod::Naive => write!(f, "naive"),
            MultiExpMethod::Pippenger { window_size: None } => write!(f, "pippenger"),
            MultiExpMethod::Pippenger { window_size: Some(c) } => write!(f, "pippenger (c = {c})"),
            MultiExpMethod::SignedPippenger { window_size: None } => write!(f, "signed pippenger"),
            MultiExpMethod::SignedPippenger { window_size: Some(c) } => {
                write!(f, "signed pippenger (c = {c})")
            },
        }
    }
}

/// Computes `sum_i scalars[i] * points[i]` with the given method
///
/// Every method returns the same group element for the same inputs. The
/// instance must be non-empty and `points` and `scalars` must have equal
/// lengths.
pub fn multi_exp<G: CurveGroup>(
    points: &[G],
    scalars: &[G::ScalarField],
    method: MultiExpMethod,
) -> Result<G, BenchError> {
    if points.len() != scalars.len() {
        return Err(BenchError::LengthMismatch { points: points.len(), scalars: scalars.len() });
    }
    if points.is_empty() {
        return Err(BenchError::EmptyInstance);
    }

    match method {
        MultiExpMethod::Naive => naive_msm(points, scalars),
        MultiExpMethod::Pippenger { window_size } => {
            pippenger(points, scalars, window_size.unwrap_or_else(|| default_window_size(points.len())))
        },
        MultiExpMethod::SignedPippenger { window_size } => {
            sid_pippenger(points, scalars, window_size.unwrap_or_else(|| default_window_size(points.len())))
        },
    }
}
