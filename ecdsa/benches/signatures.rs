use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ecdsa::{PoseidonContext, SigningKey, VerifyingKey, hash_personal_message};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn bench_sign(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let sk = SigningKey::random(&mut rng);
    let digest = hash_personal_message(b"hello world");

    c.bench_function("ecdsa_sign_prehash", |bencher| {
        bencher.iter(|| {
            let sig = sk.sign_prehash(&mut rng, black_box(&digest)).expect("sign");
            black_box(sig);
        })
    });
}

fn bench_verify(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let sk = SigningKey::random(&mut rng);
    let vk = VerifyingKey::from(&sk);
    let digest = hash_personal_message(b"hello world");
    let sig = sk.sign_prehash(&mut rng, &digest).expect("sign");

    c.bench_function("ecdsa_verify_prehash", |bencher| {
        bencher.iter(|| {
            let ok = vk
                .verify_prehash(black_box(&digest), black_box(&sig))
                .expect("verify");
            black_box(ok);
        })
    });

    c.bench_function("ecdsa_recover", |bencher| {
        bencher.iter(|| {
            let pk = VerifyingKey::recover_from_prehash(black_box(&digest), black_box(&sig))
                .expect("recover");
            black_box(pk);
        })
    });
}

fn bench_poseidon(c: &mut Criterion) {
    let ctx = PoseidonContext::new();
    let registers = [1u64, 2, 3, 4, 5, 6, 7, 8];

    c.bench_function("poseidon_hash_registers", |bencher| {
        bencher.iter(|| black_box(ctx.hash_registers(black_box(&registers))))
    });
}

criterion_group!(benches, bench_sign, bench_verify, bench_poseidon);
criterion_main!(benches);
