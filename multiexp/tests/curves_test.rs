use multiexp::curves::{CurveParams, NamedPairing};
use multiexp::report::SweepConfig;
use ark_bn254::Bn254;
use ark_mnt4_298::MNT4_298;
use ark_std::test_rng;

#[test]
fn test_curve_params_init_is_idempotent() {
    let first = CurveParams::<MNT4_298>::init();
    let second = CurveParams::<MNT4_298>::init();
    assert!(first.is_ok() && second.is_ok(), "MNT4_298 parameters failed their checks");
    assert!(CurveParams::<Bn254>::init().is_ok(), "BN254 parameters failed their checks");
}

#[test]
fn test_curve_params_labels() {
    let params = CurveParams::<Bn254>::init().unwrap();
    assert_eq!(params.name(), Bn254::NAME);
    assert_eq!(params.group_label("G1"), "BN254_G1");
    assert_eq!(CurveParams::<MNT4_298>::init().unwrap().group_label("G2"), "MNT4_298_G2");
}

#[test]
fn test_curve_params_profile_both_groups() {
    let params = CurveParams::<Bn254>::init().unwrap();
    let config = SweepConfig { batch_count: 2, ..SweepConfig::new(1, 3, 2) };
    let mut rng = test_rng();
    let mut out = Vec::new();
    let mut diag = Vec::new();

    let g1_rows = params.profile_g1(&config, &mut rng, &mut out, &mut diag).unwrap();
    let g2_rows = params.profile_g2(&config, &mut rng, &mut out, &mut diag).unwrap();

    assert_eq!(g1_rows.len(), 3);
    assert_eq!(g2_rows.len(), 3);
    assert!(g1_rows.iter().chain(g2_rows.iter()).all(|row| row.answers_match != Some(false)));
    assert_eq!(String::from_utf8(out).unwrap().lines().count(), 6);
    assert!(diag.is_empty());
}
