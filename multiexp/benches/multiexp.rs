//! Compares naive and bucket multiexp on the MNT4-298 G1 group

use ark_mnt4_298::{Fr, G1Projective};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use multiexp::{
    generate::{generate_group_elements, generate_scalars},
    multi_exp, MultiExpMethod,
};
use rand::{rngs::StdRng, SeedableRng};

/// The maximum power of two to scale the optimized methods to
const MAX_POWER_OF_TWO: usize = 14; // 2^14 = 16384
/// The maximum power of two to scale the naive method to
const MAX_NAIVE_POWER_OF_TWO: usize = 10;

/// Measures each method on a single instance per size
pub fn bench_multiexp(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);

    let mut group = c.benchmark_group("multiexp");
    for expn in 0..=MAX_POWER_OF_TWO {
        let n_elems = 1 << expn;
        let points = generate_group_elements::<G1Projective, _>(1, n_elems, &mut rng).unwrap().remove(0);
        let scalars = generate_scalars::<Fr>(1, n_elems).unwrap().remove(0);

        group.throughput(Throughput::Elements(n_elems as u64));
        for method in [MultiExpMethod::Naive, MultiExpMethod::PIPPENGER, MultiExpMethod::SIGNED_PIPPENGER] {
            if !method.is_optimized() && expn > MAX_NAIVE_POWER_OF_TWO {
                continue;
            }

            group.bench_function(BenchmarkId::new(method.to_string(), n_elems), |b| {
                b.iter(|| black_box(multi_exp(&points, &scalars, method).unwrap()))
            });
        }
    }
    group.finish();
}

criterion_group!(
    name = multiexp_benches;
    config = Criterion::default().sample_size(10);
    targets = bench_multiexp
);
criterion_main!(multiexp_benches);
