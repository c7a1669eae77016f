//! Curve families profiled by the harness
//!
//! arkworks keeps curve parameters in constants, so there is no global state
//! to set up. `CurveParams::init` instead checks the family's generators and
//! hands back a token; profiling entry points take the token so a family is
//! always checked before it is used.

use std::{io::Write, marker::PhantomData};

use ark_bn254::Bn254;
use ark_ec::{pairing::Pairing, CurveGroup, Group};
use ark_ff::{PrimeField, Zero};
use ark_mnt4_298::MNT4_298;
use rand::Rng;
use tracing::log;

use crate::{
    error::BenchError,
    report::{print_performance_csv, BenchmarkRow, SweepConfig},
};

/// A pairing family with a display name
pub trait NamedPairing: Pairing {
    /// The name printed in table headers
    const NAME: &'static str;
}

impl NamedPairing for MNT4_298 {
    const NAME: &'static str = "MNT4_298";
}

impl NamedPairing for Bn254 {
    const NAME: &'static str = "BN254";
}

/// A token proving that the parameters of family `P` passed their checks
#[derive(Debug)]
pub struct CurveParams<P: NamedPairing> {
    /// The family this token was issued for
    _phantom: PhantomData<P>,
}

impl<P: NamedPairing> Clone for CurveParams<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: NamedPairing> Copy for CurveParams<P> {}

impl<P: NamedPairing> CurveParams<P> {
    /// Checks that both generators of the family are non-trivial and have
    /// the order of the scalar field
    ///
    /// Idempotent; calling it again repeats the checks and returns an
    /// equivalent token.
    pub fn init() -> Result<Self, BenchError> {
        check_generator::<P::G1>(P::NAME, "G1")?;
        check_generator::<P::G2>(P::NAME, "G2")?;
        log::debug!("{} parameters initialized", P::NAME);

        Ok(Self { _phantom: PhantomData })
    }

    /// The family name
    pub fn name(&self) -> &'static str {
        P::NAME
    }

    /// The table header for the given group of this family
    pub fn group_label(&self, group: &str) -> String {
        format!("{}_{group}", P::NAME)
    }

    /// Runs a sweep over the family's G1
    pub fn profile_g1<R, W, D>(
        &self,
        config: &SweepConfig,
        rng: &mut R,
        out: &mut W,
        diag: &mut D,
    ) -> Result<Vec<BenchmarkRow>, BenchError>
    where
        R: Rng + ?Sized,
        W: Write,
        D: Write,
    {
        print_performance_csv::<P::G1, R, W, D>(config, rng, out, diag)
    }

    /// Runs a sweep over the family's G2
    pub fn profile_g2<R, W, D>(
        &self,
        config: &SweepConfig,
        rng: &mut R,
        out: &mut W,
        diag: &mut D,
    ) -> Result<Vec<BenchmarkRow>, BenchError>
    where
        R: Rng + ?Sized,
        W: Write,
        D: Write,
    {
        print_performance_csv::<P::G2, R, W, D>(config, rng, out, diag)
    }
}

/// Checks that the generator of `G` is not the identity and is killed by the
/// scalar field modulus
fn check_generator<G: CurveGroup>(family: &str, group: &str) -> Result<(), BenchError> {
    let generator = G::generator();
    if generator.is_zero() {
        return Err(BenchError::CurveSetup(format!("{family}_{group} generator is the identity")));
    }
    if !generator.mul_bigint(G::ScalarField::MODULUS).is_zero() {
        return Err(BenchError::CurveSetup(format!(
            "{family}_{group} generator order does not match the scalar field"
        )));
    }

    Ok(())
}
