use multiexp::naive::naive_msm;
use multiexp::operations::{add_points, scalar_multiply};
use multiexp::BenchError;
use ark_mnt4_298::{G1Projective, Fr};
use ark_ff::Zero;
use ark_std::{test_rng, UniformRand};

#[test]
fn test_naive_msm_with_zero_scalars() {
    let mut rng = test_rng();
    let points = vec![G1Projective::rand(&mut rng), G1Projective::rand(&mut rng)];
    let scalars = vec![Fr::zero(), Fr::zero()];  // Zero scalars
    assert_eq!(naive_msm(&points, &scalars), Ok(G1Projective::zero()), "MSM with zero scalars should be the zero point");
}

#[test]
fn test_naive_msm_with_mixed_scalars() {
    let mut rng = test_rng();
    let points = vec![G1Projective::rand(&mut rng), G1Projective::rand(&mut rng)];
    let scalars = vec![Fr::from(1u64), Fr::from(2u64)];  // Mixed scalars
    // Compare against result from point addition and scalar multiplication
    let expected_result = add_points(scalar_multiply(points[0], scalars[0]), scalar_multiply(points[1], scalars[1]));
    assert_eq!(naive_msm(&points, &scalars), Ok(expected_result), "MSM with mixed scalars failed");
}

#[test]
fn test_naive_msm_with_all_ones_scalars() {
    let mut rng = test_rng();
    let points = vec![G1Projective::rand(&mut rng), G1Projective::rand(&mut rng)];
    let scalars = vec![Fr::from(1u64), Fr::from(1u64)];  // All ones
    let expected_result = add_points(points[0], points[1]);
    assert_eq!(naive_msm(&points, &scalars), Ok(expected_result), "MSM with all ones scalars failed");
}

#[test]
fn test_naive_msm_with_random_field_scalars() {
    let mut rng = test_rng();
    let points = vec![G1Projective::rand(&mut rng), G1Projective::rand(&mut rng)];
    let scalars = vec![Fr::rand(&mut rng), Fr::rand(&mut rng)];  // Full width scalars
    let expected_result = points[0] * scalars[0] + points[1] * scalars[1];
    assert_eq!(naive_msm(&points, &scalars), Ok(expected_result), "MSM with full width scalars failed");
}

#[test]
fn test_naive_msm_with_empty_lists() {
    let points: Vec<G1Projective> = Vec::new(); // Empty list
    let scalars: Vec<Fr> = Vec::new(); // Empty list
    assert_eq!(naive_msm(&points, &scalars), Ok(G1Projective::zero()), "MSM over empty lists should be the zero point");
}

#[test]
fn test_naive_msm_with_different_lengths() {
    let mut rng = test_rng();
    let points = vec![G1Projective::rand(&mut rng)];
    let scalars = vec![Fr::from(1u64), Fr::from(2u64)];
    assert_eq!(
        naive_msm(&points, &scalars),
        Err(BenchError::LengthMismatch { points: 1, scalars: 2 }),
        "Points and scalars must have the same length"
    );
}
