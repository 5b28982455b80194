use criterion::{black_box, criterion_group, criterion_main, Criterion};
use curve::{Affine, Group, RandomField, ScalarField};
use ecdsa::{hash_personal_message, SigningKey};
use rand::rngs::StdRng;
use rand::SeedableRng;
use witness::{HiddenSignature, InversionFreeInputs, PrecomputeTable};

fn bench_table_build(c: &mut Criterion) {
    let base = Affine::generator().mul_u64(0xdead_beef);
    let mut group = c.benchmark_group("precompute");
    group.sample_size(10);
    group.bench_function("build_table", |bencher| {
        bencher.iter(|| PrecomputeTable::build(black_box(&base)).unwrap())
    });
    group.finish();
}

fn bench_lookup_sum(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let table = PrecomputeTable::build(&Affine::generator()).unwrap();
    let scalar = ScalarField::random(&mut rng);
    c.bench_function("lookup_sum", |bencher| {
        bencher.iter(|| black_box(table.lookup_sum(black_box(&scalar))))
    });
}

fn bench_registers(c: &mut Criterion) {
    let table = PrecomputeTable::build(&Affine::generator()).unwrap();
    c.bench_function("table_to_json", |bencher| {
        bencher.iter(|| serde_json::to_string(black_box(&table)).unwrap())
    });
}

fn bench_transform(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let key = SigningKey::random(&mut rng);
    let digest = hash_personal_message(b"hello world");
    let sig = key.sign_prehash(&mut rng, &digest).unwrap();

    c.bench_function("inversion_free_inputs", |bencher| {
        bencher.iter(|| InversionFreeInputs::derive(black_box(&sig), black_box(&digest)).unwrap())
    });
    c.bench_function("hidden_signature", |bencher| {
        bencher.iter(|| HiddenSignature::derive(black_box(&sig), &mut rng).unwrap())
    });
}

criterion_group!(
    benches,
    bench_table_build,
    bench_lookup_sum,
    bench_registers,
    bench_transform
);
criterion_main!(benches);
