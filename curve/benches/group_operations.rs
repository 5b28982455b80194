use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use curve::{double_scalar_mul, Affine, Group, Projective, RandomField, ScalarField};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn random_scalar(rng: &mut StdRng) -> ScalarField {
    ScalarField::random(rng)
}

fn bench_projective_double(c: &mut Criterion) {
    let g = Projective::generator();
    c.bench_function("projective_double", |bencher| {
        bencher.iter(|| black_box(black_box(g).double()))
    });
}

fn bench_affine_add(c: &mut Criterion) {
    let g = Affine::generator();
    let h = g.mul_u64(3);
    c.bench_function("affine_add", |bencher| {
        bencher.iter(|| black_box(black_box(g) + black_box(h)))
    });
}

fn bench_projective_add(c: &mut Criterion) {
    let g = Projective::generator();
    let h = g.mul_u64(3);
    c.bench_function("projective_add", |bencher| {
        bencher.iter(|| black_box(black_box(g) + black_box(h)))
    });
}

fn bench_scalar_mul(c: &mut Criterion) {
    let g = Projective::generator();
    let mut rng = StdRng::seed_from_u64(42);
    let scalar = random_scalar(&mut rng);

    c.bench_function("projective_scalar_mul", |bencher| {
        bencher.iter(|| black_box(black_box(g).scalar_mul(black_box(&scalar))))
    });
}

fn bench_double_scalar_mul(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let a = random_scalar(&mut rng);
    let b = random_scalar(&mut rng);
    let g = Affine::generator();
    let p = Affine::mul_generator(&random_scalar(&mut rng));

    c.bench_function("double_scalar_mul", |bencher| {
        bencher.iter(|| black_box(double_scalar_mul(&a, &g, &b, &p)))
    });
}

fn bench_batch_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_normalize");
    let g = Projective::generator();

    for size in [16usize, 64, 256].iter() {
        let points: Vec<Projective> = (0..*size).map(|i| g.mul_u64(i as u64 + 1)).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |bencher, _| {
            bencher.iter(|| black_box(Projective::batch_normalize(black_box(&points))))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_projective_double,
    bench_affine_add,
    bench_projective_add,
    bench_scalar_mul,
    bench_double_scalar_mul,
    bench_batch_normalize
);
criterion_main!(benches);
