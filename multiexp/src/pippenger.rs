use crate::error::BenchError;
use crate::operations::{add_points, double_times};
use ark_ec::CurveGroup;
use ark_ff::{BigInteger, PrimeField, Zero};
use itertools::Itertools;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The smallest supported window size
pub const MIN_WINDOW_SIZE: usize = 1;
/// The largest supported window size, 2^16 buckets per window
pub const MAX_WINDOW_SIZE: usize = 16;

// Main pippenger function
pub fn pippenger<G: CurveGroup>(
    points: &[G],
    scalars: &[G::ScalarField],
    window_size: usize,
) -> Result<G, BenchError> {
    // Ensure points and scalars have the same length
    if points.len() != scalars.len() {
        return Err(BenchError::LengthMismatch { points: points.len(), scalars: scalars.len() });
    }
    check_window_size(window_size)?;

    let scalars = scalars.iter().map(|s| s.into_bigint()).collect_vec();
    let num_bits = G::ScalarField::MODULUS_BIT_SIZE as usize;
    let num_partitions = num_partitions(num_bits, window_size);

    // Partitions are built one at a time so that only a single window of digits
    // is alive per thread
    #[cfg(not(feature = "parallel"))]
    let window_sums = (0..num_partitions)
        .map(|i| compute_msm_for_partition(&partition_window(&scalars, i, window_size), points, window_size))
        .collect_vec();
    #[cfg(feature = "parallel")]
    let window_sums = (0..num_partitions)
        .into_par_iter()
        .map(|i| compute_msm_for_partition(&partition_window(&scalars, i, window_size), points, window_size))
        .collect::<Vec<_>>();

    Ok(combine_partitioned_msm(&window_sums, window_size))
}

/// Returns an error if `window_size` is outside `MIN_WINDOW_SIZE..=MAX_WINDOW_SIZE`
pub fn check_window_size(window_size: usize) -> Result<(), BenchError> {
    if (MIN_WINDOW_SIZE..=MAX_WINDOW_SIZE).contains(&window_size) {
        Ok(())
    } else {
        Err(BenchError::InvalidWindowSize(window_size))
    }
}

/// Picks a window size for an instance of `num_points` points
///
/// Roughly `ln(n) + 2`, the usual choice for bucket methods; small instances
/// get a fixed window of 3.
pub fn default_window_size(num_points: usize) -> usize {
    if num_points < 32 {
        3
    } else {
        (ln_without_floats(num_points) + 2).min(MAX_WINDOW_SIZE)
    }
}

/// ln(a) ~ log2(a) * 0.69
fn ln_without_floats(a: usize) -> usize {
    (ark_std::log2(a) as usize * 69) / 100
}

pub struct MsmPartition {
    pub window_values: Vec<u32>,
}

/// The number of `window_size`-bit windows needed to cover `num_bits` bits
pub fn num_partitions(num_bits: usize, window_size: usize) -> usize {
    // Round up so a partial top window is still covered
    (num_bits + window_size - 1) / window_size
}

/// Extracts the `window_size` bits of `scalar` starting at `bit_index`
pub fn window_value<B: BigInteger>(scalar: &B, bit_index: usize, window_size: usize) -> u32 {
    let limbs = scalar.as_ref();
    let limb_index = bit_index / 64;
    let shift = bit_index % 64;
    if limb_index >= limbs.len() {
        return 0;
    }

    let mut value = limbs[limb_index] >> shift;
    // The window straddles two limbs
    if shift + window_size > 64 && limb_index + 1 < limbs.len() {
        value |= limbs[limb_index + 1] << (64 - shift);
    }

    (value & ((1u64 << window_size) - 1)) as u32
}

/// Step 1: Collect the c-bit digits of partition `partition_index` for every scalar. c == window_size
pub fn partition_window<B: BigInteger>(scalars: &[B], partition_index: usize, window_size: usize) -> MsmPartition {
    // Calculate the starting bit index for the current partition
    let bit_index = partition_index * window_size;

    let window_values = scalars.iter().map(|scalar| window_value(scalar, bit_index, window_size)).collect_vec();

    MsmPartition { window_values }
}

/// Step 2: Bucket the points by their window value and sum the buckets with running sums
pub fn compute_msm_for_partition<G: CurveGroup>(partition: &MsmPartition, points: &[G], window_size: usize) -> G {
    // Bucket `v - 1` collects every point whose window value is `v`
    let mut buckets = vec![G::zero(); (1 << window_size) - 1];
    for (&value, &point) in partition.window_values.iter().zip(points) {
        if value != 0 {
            buckets[value as usize - 1] += point;
        }
    }

    let mut msm_result = G::zero();
    let mut temp = G::zero();

    // Walking the buckets from the top adds bucket v into the result exactly v times
    for bucket in buckets.into_iter().rev() {
        temp = add_points(temp, bucket);
        msm_result = add_points(msm_result, temp);
    }

    msm_result
}

// Step 3: Compute the final MSM result by combining all partition sums, lowest window first in `window_sums`
pub fn combine_partitioned_msm<G: CurveGroup>(window_sums: &[G], window_size: usize) -> G {
    let mut final_result = G::zero();

    // Iterating over each partition in reverse to ensure doubling mimics scaling accurately
    for &partition_msm in window_sums.iter().rev() {
        // Double the final result window_size times to mimic scaling by 2^window_size
        final_result = double_times(final_result, window_size);
        final_result = add_points(final_result, partition_msm);
    }

    final_result
}
