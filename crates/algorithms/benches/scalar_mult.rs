// Benchmarks for scalar multiplication on the standard curves

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use ecrypt_algorithms::keys::generate_private_key;
use ecrypt_algorithms::registry::{registry, CurveId};
use num_bigint::BigUint;
use rand::rngs::OsRng;

fn random_scalar(id: CurveId) -> BigUint {
    let params = registry().get(id);
    generate_private_key(params, &mut OsRng).expect("scalar generation")
}

fn bench_weierstrass_scalar_mult(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalar-mult");

    for id in [CurveId::NistP256, CurveId::Secp256k1] {
        let params = registry().get(id);
        let generator = params.generator().expect("registry generator").clone();

        group.bench_function(params.name(), |b| {
            b.iter_batched(
                || random_scalar(id),
                |scalar| black_box(generator.scalar_mul(&scalar)),
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("{}-ladder", params.name()), |b| {
            b.iter_batched(
                || random_scalar(id),
                |scalar| black_box(generator.scalar_mul_ladder(&scalar)),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_weierstrass_scalar_mult);
criterion_main!(benches);
