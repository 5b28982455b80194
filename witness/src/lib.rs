//! # Witness Preparation for ECDSA Verification Circuits
//!
//! Off-circuit precomputation for arithmetic circuits that verify secp256k1
//! ECDSA signatures. The circuit cannot cheaply invert modulo the group
//! order or run a 256-bit double-and-add loop, so everything it would need
//! those for is computed here and handed over as 4 x 64-bit registers.
//!
//! ## Overview
//!
//! A witness is produced in four steps:
//! 1. **Transform**: restate verification without an inversion
//!    ([`InversionFreeInputs`], [`HiddenSignature`])
//! 2. **Precompute**: windowed tables for fixed-base multiplication
//!    ([`PrecomputeTable`])
//! 3. **Encode**: every 256-bit value as [`FieldRegisters`]
//! 4. **Assemble**: name the values the way the circuit expects
//!    ([`assemble`], [`WitnessMapping`])
//!
//! The proving system itself sits behind [`ProvingBackend`]; its public
//! signals are re-derived into a public key or address and compared against
//! an [`ExpectedOutput`] computed independently from the signer's key.
//!
//! ## Verification Equation
//!
//! ECDSA verification checks `s * R = z * G + r * Q`. Multiplying by
//! `r^-1` gives:
//!
//! ```text
//! Q = s * (r^-1 * R) + (-(r^-1 * z)) * G
//!   = s * T + U
//! ```
//!
//! `T` and `U` are public values computed outside the circuit. The circuit
//! multiplies the fixed point `T` by `s` using a [`PrecomputeTable`] and
//! adds `U`.
//!
//! ### Hiding `s`
//!
//! `s * R` alone already determines `Q`:
//!
//! ```text
//! Q = r^-1 * (s * R) - z * (r^-1 * G)
//! ```
//!
//! The hidden-signature circuits therefore take `pubKey2 = s * R` instead of
//! `s`. Knowledge of `s` is shown by a second signature over the public
//! message `"This message should be public"`, made with `s` as the secret
//! key on the curve whose generator is `R`. It is checked before any witness
//! is emitted:
//!
//! ```text
//! s2 * R2 == msg2 * R + r2 * pubKey2
//! ```
//!
//! ## Register Encoding
//!
//! A 256-bit value becomes four `u64` registers, least-significant first:
//!
//! ```
//! use witness::FieldRegisters;
//!
//! let registers = FieldRegisters::from_hex_str("10000000000000000").unwrap();
//! assert_eq!(registers.0, [0, 1, 0, 0]);
//! assert_eq!(registers.to_decimal_strings(), ["0", "1", "0", "0"]);
//! ```
//!
//! Points are `[x, y]` register pairs and the point at infinity encodes as
//! all zeros.
//!
//! ## Precompute Tables
//!
//! For a base point `B`, `table[i][j] = (j * 2^(8i)) * B` with 32 strides
//! of 256 entries. `k * B` is then the sum of one entry per stride, selected
//! by the base-256 digits of `k`. Strides are built in parallel.
//!
//! ## Circuit Variants
//!
//! | preset | layout | output |
//! |--------|--------|--------|
//! | `ecdsa_verify` | `TPreComputes`, `U`, `s` | public key |
//! | `ecdsa_verify_pubkey_to_addr` | `TPreComputes`, `U`, `s` | address |
//! | `ecdsa_verify_no_precompute` | `T`, `U`, `s` | public key |
//! | `hidden_signature_addr` | `msg`, `modInvRMultPubKey2`, `modInvRMultGPreComputes` | address |
//! | `verify_pubkey2` | `modInvRMultPubkey2`, `negInvR`, `msghash`, `poseidonHash`, `keccakHashMsg`, `salt`, `pubkey` | public key |
//!
//! See [`WitnessConfig`] for describing other variants in TOML.
//!
//! ## End to End
//!
//! ```rust,ignore
//! use std::path::Path;
//! use witness::{SnarkjsBackend, WitnessConfig, WitnessPipeline};
//! use ecdsa::SigningKey;
//!
//! let pipeline = WitnessPipeline::new(WitnessConfig::preset("ecdsa_verify")?);
//! let key = SigningKey::from_hex("f5b5...")?;
//!
//! let signed = pipeline.sign_message(&key, b"hello world", &mut rng)?;
//! let prepared = pipeline.prepare(&signed, &mut rng)?;
//! prepared.mapping.write_json(Path::new("input.json"))?;
//!
//! pipeline.prove_and_check(&SnarkjsBackend::default(), &prepared, Path::new("."))?;
//! ```
//!
//! The `ecdsa-witness` binary wraps this flow.

pub mod assembler;
pub mod backend;
pub mod config;
mod errors;
pub mod pipeline;
pub mod precompute;
pub mod registers;
pub mod transform;

pub use assembler::{
    assemble, AssemblyInputs, CircuitLayout, ExpectedOutput, OutputKind, WitnessMapping,
    WitnessValue,
};
pub use backend::{CircuitArtifacts, ProofOutput, ProvingBackend, SnarkjsBackend};
pub use config::{ArtifactPaths, MessageHashKind, WitnessConfig, PRESET_NAMES};
pub use errors::{RegisterError, WitnessError};
pub use pipeline::{PreparedWitness, SignedMessage, WitnessPipeline};
pub use precompute::{PrecomputeTable, NUM_STRIDES, STRIDE, WINDOW_SIZE};
pub use registers::{
    point_to_registers, registers_to_hex, split_to_registers, FieldRegisters, PointRegisters,
    REGISTERS,
};
pub use transform::{recover_r_point, HiddenSignature, InversionFreeInputs, SaltedDigest};

// Re-export commonly used types
pub use curve::{Affine, CurveParams, ScalarField};
pub use ecdsa::{Signature, SigningKey, VerifyingKey};
