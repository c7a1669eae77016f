use multiexp::generate::{generate_group_elements, generate_scalars};
use multiexp::naive::naive_msm;
use multiexp::profile::profile_multiexp;
use multiexp::{BenchError, MultiExpMethod};
use ark_mnt4_298::{Fr, G1Projective};
use ark_std::{test_rng, UniformRand};

#[test]
// Answers should come back in batch order
fn test_profile_multiexp_preserves_order() {
    let mut rng = test_rng();
    let group_elements = generate_group_elements::<G1Projective, _>(5, 8, &mut rng).unwrap();
    let scalars = generate_scalars::<Fr>(5, 8).unwrap();

    let result = profile_multiexp(&group_elements, &scalars, MultiExpMethod::PIPPENGER).unwrap();
    assert_eq!(result.answers.len(), 5, "One answer per instance expected");
    for (i, answer) in result.answers.iter().enumerate() {
        assert_eq!(Ok(*answer), naive_msm(&group_elements[i], &scalars[i]), "Answer {} out of order", i);
    }
}

#[test]
fn test_profile_multiexp_methods_agree() {
    let mut rng = test_rng();
    let group_elements = generate_group_elements::<G1Projective, _>(3, 16, &mut rng).unwrap();
    let scalars = generate_scalars::<Fr>(3, 16).unwrap();

    let result_fast = profile_multiexp(&group_elements, &scalars, MultiExpMethod::SIGNED_PIPPENGER).unwrap();
    let result_naive = profile_multiexp(&group_elements, &scalars, MultiExpMethod::Naive).unwrap();
    assert_eq!(result_fast.answers, result_naive.answers, "Answers NOT MATCHING");
}

#[test]
// An empty instance is a precondition violation and stops the run
fn test_profile_multiexp_propagates_engine_errors() {
    let mut rng = test_rng();
    let group_elements = vec![vec![G1Projective::rand(&mut rng)], Vec::new()];
    let scalars = vec![vec![Fr::rand(&mut rng)], Vec::new()];

    let result = profile_multiexp(&group_elements, &scalars, MultiExpMethod::PIPPENGER);
    assert_eq!(result.map(|r| r.answers), Err(BenchError::EmptyInstance));
}

#[test]
fn test_profile_multiexp_rejects_batch_mismatch() {
    let mut rng = test_rng();
    let group_elements = generate_group_elements::<G1Projective, _>(2, 4, &mut rng).unwrap();
    let scalars = generate_scalars::<Fr>(3, 4).unwrap();

    let result = profile_multiexp(&group_elements, &scalars, MultiExpMethod::Naive);
    assert_eq!(result.map(|r| r.answers), Err(BenchError::BatchMismatch { points: 2, scalars: 3 }));
}
