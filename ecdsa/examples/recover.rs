use ecdsa::{Signature, SigningKey, VerifyingKey, hash_personal_message};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() {
    let mut rng = StdRng::seed_from_u64(42);
    let sk = SigningKey::random(&mut rng);
    let vk = VerifyingKey::from(&sk);

    let digest = hash_personal_message(b"hello ecdsa");
    let sig = sk.sign_prehash(&mut rng, &digest).expect("sign");

    let sig_hex = sig.to_hex();
    let decoded = Signature::from_hex(&sig_hex).expect("decode signature");
    let recovered = VerifyingKey::recover_from_prehash(&digest, &decoded).expect("recover");
    assert_eq!(recovered, vk);

    println!("public key: {}", vk.to_hex());
    println!("address:    0x{}", hex::encode(vk.address()));
    println!("signature:  {sig_hex}");
}
