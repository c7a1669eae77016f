use crate::error::BenchError;
use crate::operations::{add_points, scalar_multiply};
use ark_ec::CurveGroup;
use ark_ff::Zero;

// Naive approach to Multi-Scalar Multiplication
pub fn naive_msm<G: CurveGroup>(points: &[G], scalars: &[G::ScalarField]) -> Result<G, BenchError> {
    // Ensure points and scalars have the same length
    if points.len() != scalars.len() {
        return Err(BenchError::LengthMismatch { points: points.len(), scalars: scalars.len() });
    }

    let mut result = G::zero();

    for (&scalar, &point) in scalars.iter().zip(points) {
        result = add_points(result, scalar_multiply(point, scalar));
    }

    // Return a single point as MSM result
    Ok(result)
}
