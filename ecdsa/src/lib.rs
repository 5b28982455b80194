//! Recoverable ECDSA over secp256k1 in the Ethereum conventions.
//!
//! This library provides:
//! - Signing keys, verifying keys and `(r, s, v)` signatures
//! - Signing and verification against a substitute generator (`CurveParams`)
//! - Public-key recovery and recovery of the nonce point `R`
//! - Keccak-256 personal-message hashing and Ethereum addresses
//! - circomlib-compatible Poseidon over BN254 for salted message digests
//!
//! # Example
//!
//! ```
//! use ecdsa::{SigningKey, VerifyingKey, hash_personal_message};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let signing_key = SigningKey::random(&mut rng);
//! let verifying_key = signing_key.verifying_key();
//!
//! let digest = hash_personal_message(b"hello world");
//! let signature = signing_key.sign_prehash(&mut rng, &digest).expect("signing failed");
//!
//! assert!(verifying_key.verify_prehash(&digest, &signature).expect("verification failed"));
//! let recovered = VerifyingKey::recover_from_prehash(&digest, &signature).expect("recovery failed");
//! assert_eq!(recovered, verifying_key);
//! ```
//!
//! # Security Considerations
//!
//! - Nonces come from the caller's RNG; use a CSPRNG outside of tests
//! - The arithmetic is variable-time and meant for witness preparation, not
//!   for handling long-lived secrets

mod constants;
mod errors;
mod hashing;
mod keys;
mod poseidon;
mod signatures;


pub use constants::{
    ADDRESS_SIZE, PERSONAL_MESSAGE_PREFIX, PK_SIZE, PUBLIC_AUXILIARY_MESSAGE, SIG_SIZE, SK_SIZE,
    V_OFFSET,
};
pub use errors::EcdsaError;
pub use hashing::{
    auxiliary_message_digest, hash_personal_message, keccak256, public_key_to_address,
};
pub use keys::{SigningKey, VerifyingKey, sign_prehash_with_params};
pub use poseidon::{Bn254ScalarParams, POSEIDON_INPUTS, PoseidonContext, PoseidonField};
pub use signatures::{Signature, digest_to_scalar, recover_r_point};
