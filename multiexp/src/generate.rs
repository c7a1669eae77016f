//! Reproducible generation of benchmark inputs
//!
//! Points are sampled once per instance and repeated, scalars are derived
//! from their position in the batch with a hash, so that building the inputs
//! stays cheap next to the multiexps being measured.

use ark_ec::CurveGroup;
use ark_ff::{BigInteger, PrimeField};
use ark_std::UniformRand;
use rand::Rng;
use sha3::{Digest, Sha3_512};

use crate::error::BenchError;

/// A batch of instances of equal size, one inner vector per instance
pub type InstanceBatch<T> = Vec<Vec<T>>;

/// Generates `count` point vectors of length `size`
///
/// Sampling a random group element is expensive, so each vector holds a single
/// sampled element repeated `size` times.
pub fn generate_group_elements<G: CurveGroup, R: Rng + ?Sized>(
    count: usize,
    size: usize,
    rng: &mut R,
) -> Result<InstanceBatch<G>, BenchError> {
    let mut result = Vec::new();
    result.try_reserve_exact(count)?;

    for _ in 0..count {
        let x = G::rand(rng);
        let mut instance = Vec::new();
        instance.try_reserve_exact(size)?;
        instance.resize(size, x);
        result.push(instance);
    }

    Ok(result)
}

/// Generates `count` scalar vectors of length `size`
///
/// Position `j` of vector `i` holds `scalar_from_index(i * size + j)`.
pub fn generate_scalars<F: PrimeField>(count: usize, size: usize) -> Result<InstanceBatch<F>, BenchError> {
    let mut result = Vec::new();
    result.try_reserve_exact(count)?;

    for i in 0..count {
        let mut instance = Vec::new();
        instance.try_reserve_exact(size)?;
        for j in 0..size {
            instance.push(scalar_from_index((i * size + j) as u64));
        }
        result.push(instance);
    }

    Ok(result)
}

/// Derives a field element from an index
///
/// Hashes the index with SHA3-512, keeps the low `MODULUS_BIT_SIZE` bits and
/// rejects values not below the modulus, rehashing with an attempt counter.
/// The output is uniform over the field and depends only on `index`.
pub fn scalar_from_index<F: PrimeField>(index: u64) -> F {
    let num_bits = F::MODULUS_BIT_SIZE as usize;

    let mut attempt = 0u64;
    loop {
        if let Some(scalar) = F::from_bigint(hash_to_bigint(index, attempt, num_bits)) {
            return scalar;
        }

        attempt += 1;
    }
}

/// Fills the limbs of a big integer with the little-endian hash stream of
/// `(index, attempt)`, clearing every bit at or above `num_bits`
fn hash_to_bigint<B: BigInteger>(index: u64, attempt: u64, num_bits: usize) -> B {
    let mut bigint = B::default();
    let limbs = bigint.as_mut();

    // One 64-byte digest covers eight limbs
    for (block, chunk) in limbs.chunks_mut(8).enumerate() {
        let mut hasher = Sha3_512::new();
        hasher.update(index.to_le_bytes());
        hasher.update(attempt.to_le_bytes());
        hasher.update((block as u64).to_le_bytes());
        let digest = hasher.finalize();

        for (limb, bytes) in chunk.iter_mut().zip(digest.chunks_exact(8)) {
            let mut buf = [0u8; 8];
            buf.copy_from_slice(bytes);
            *limb = u64::from_le_bytes(buf);
        }
    }

    for (i, limb) in limbs.iter_mut().enumerate() {
        let low_bit = i * 64;
        if low_bit >= num_bits {
            *limb = 0;
        } else if num_bits - low_bit < 64 {
            *limb &= (1u64 << (num_bits - low_bit)) - 1;
        }
    }

    bigint
}
