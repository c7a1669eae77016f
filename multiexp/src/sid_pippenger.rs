use crate::error::BenchError;
use crate::operations::add_points;
use crate::pippenger::{check_window_size, combine_partitioned_msm, num_partitions, window_value};
use ark_ec::CurveGroup;
use ark_ff::{PrimeField, Zero};
use itertools::Itertools;

// Main function for Pippenger with Signed Integer Decomposition
pub fn sid_pippenger<G: CurveGroup>(
    points: &[G],
    scalars: &[G::ScalarField],
    window_size: usize,
) -> Result<G, BenchError> {
    if points.len() != scalars.len() {
        return Err(BenchError::LengthMismatch { points: points.len(), scalars: scalars.len() });
    }
    check_window_size(window_size)?;

    let scalars = scalars.iter().map(|s| s.into_bigint()).collect_vec();
    let num_bits = G::ScalarField::MODULUS_BIT_SIZE as usize;
    let num_partitions = num_partitions(num_bits, window_size);

    // One carry bit per scalar, forwarded from each window into the next
    let mut carries = vec![false; scalars.len()];
    let mut window_sums = Vec::with_capacity(num_partitions + 1);
    for partition_index in 0..num_partitions {
        let bit_index = partition_index * window_size;
        let digits = scalars
            .iter()
            .zip(carries.iter_mut())
            .map(|(scalar, carry)| {
                let (digit, next_carry) =
                    sid_decompose(window_value(scalar, bit_index, window_size), *carry, window_size);
                *carry = next_carry;
                digit
            })
            .collect_vec();

        window_sums.push(sid_compute_msm_for_partition(&digits, points, window_size));
    }

    // Extra partition for overflow handling, holding the final carries as +1 digits
    let overflow = carries.iter().map(|&carry| carry as i64).collect_vec();
    window_sums.push(sid_compute_msm_for_partition(&overflow, points, window_size));

    Ok(combine_partitioned_msm(&window_sums, window_size))
}

/// Recodes one unsigned window value plus the incoming carry into a signed
/// digit in `[-2^(c-1), 2^(c-1))` and the outgoing carry
pub fn sid_decompose(window_value: u32, carry: bool, window_size: usize) -> (i64, bool) {
    let base = 1i64 << window_size;
    let threshold = base / 2;
    let adjusted_value = window_value as i64 + carry as i64;

    if adjusted_value >= threshold {
        (adjusted_value - base, true)
    } else {
        (adjusted_value, false)
    }
}

/// Sums `digits[i] * points[i]` with `2^(c-1)` buckets keyed on the absolute digit
pub fn sid_compute_msm_for_partition<G: CurveGroup>(digits: &[i64], points: &[G], window_size: usize) -> G {
    let max_scalar_value = 1usize << (window_size - 1);
    let mut buckets = vec![G::zero(); max_scalar_value];

    // Negative digits subtract their point from the bucket of the absolute value
    for (&digit, &point) in digits.iter().zip(points) {
        if digit > 0 {
            buckets[digit as usize - 1] += point;
        } else if digit < 0 {
            buckets[digit.unsigned_abs() as usize - 1] -= point;
        }
    }

    let mut msm_result = G::zero();
    let mut temp = G::zero();

    // Iterating over scalar values in decreasing order
    for bucket in buckets.into_iter().rev() {
        temp = add_points(temp, bucket);
        msm_result = add_points(msm_result, temp);
    }

    msm_result
}
