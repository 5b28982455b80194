//! Restating ECDSA verification without a modular inversion.
//!
//! With `R` the nonce point and `r_inv = r^-1 mod n`, the verification
//! equation `s * R = z * G + r * Q` becomes `Q = s * T + U` for
//! `T = r_inv * R` and `U = -(r_inv * z) * G`. Both `T` and `U` are computed
//! here, outside the circuit, so the circuit only multiplies by `s` and adds.
//!
//! The hidden-signature variants go one step further and keep `s` private:
//! `s` is used as a secret key on the curve generated by `R`, and a second
//! signature over a public message proves knowledge of it.

use curve::{double_scalar_mul, Affine, CurveParams, Group, ScalarField};
use ecdsa::{
    auxiliary_message_digest, digest_to_scalar, hash_personal_message, sign_prehash_with_params,
    PoseidonContext, Signature, POSEIDON_INPUTS,
};
use num_bigint::BigUint;
use rand::Rng;
use tracing::{debug, info, info_span};

use crate::errors::WitnessError;
use crate::precompute::PrecomputeTable;
use crate::registers::{FieldRegisters, REGISTERS};

/// The point `R` whose x-coordinate gives `r`, with `R.y` parity
/// `(v - 27) mod 2`.
pub fn recover_r_point(sig: &Signature) -> Result<Affine, WitnessError> {
    ecdsa::recover_r_point(&sig.r, sig.recovery_id())
        .map_err(|err| WitnessError::InvalidPoint(err.to_string()))
}

fn inverse_r(sig: &Signature) -> Result<ScalarField, WitnessError> {
    sig.r
        .try_inverse()
        .ok_or_else(|| WitnessError::VerificationFailed("r is not invertible".into()))
}

/// Values for circuits that take `s` in the clear.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct InversionFreeInputs {
    pub r_point: Affine,
    pub r_inv: ScalarField,
    /// `-(r_inv * z) mod n`.
    pub w: ScalarField,
    /// `r_inv * R`.
    pub t: Affine,
    /// `w * G`.
    pub u: Affine,
    pub s: ScalarField,
}

impl InversionFreeInputs {
    pub fn derive(sig: &Signature, digest: &[u8; 32]) -> Result<Self, WitnessError> {
        let _span = info_span!("inversion_free_inputs", v = sig.v).entered();

        let r_point = recover_r_point(sig)?;
        let r_inv = inverse_r(sig)?;
        let w = -(r_inv * digest_to_scalar(digest));
        let t = r_point.scalar_mul(&r_inv);
        let u = Affine::mul_generator(&w);
        debug!(t = %t.x, u = %u.x, "derived T and U");

        Ok(Self {
            r_point,
            r_inv,
            w,
            t,
            u,
            s: sig.s,
        })
    }

    /// `s * T + U`, which is the public key when the signature is valid.
    pub fn public_key(&self) -> Affine {
        self.t.scalar_mul(&self.s) + self.u
    }

    pub fn check_public_key(&self, expected: &Affine) -> Result<(), WitnessError> {
        if self.public_key() == *expected {
            Ok(())
        } else {
            Err(WitnessError::VerificationFailed(
                "s * T + U does not equal the public key".into(),
            ))
        }
    }
}

/// The second signature and the values derived from it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HiddenSignature {
    pub r_point: Affine,
    pub r_inv: ScalarField,
    /// `s * R`.
    pub pub_key2: Affine,
    /// Signature by `s` over [`auxiliary_message_digest`] with `R` as the
    /// generator.
    pub auxiliary: Signature,
}

impl HiddenSignature {
    /// Sign the public auxiliary message with `s` on the curve generated by
    /// `R`, then check the result.
    pub fn derive<R: Rng + ?Sized>(sig: &Signature, rng: &mut R) -> Result<Self, WitnessError> {
        let _span = info_span!("hidden_signature", v = sig.v).entered();

        let r_point = recover_r_point(sig)?;
        let params = CurveParams::with_generator(r_point)?;
        let digest = auxiliary_message_digest();
        let auxiliary = sign_prehash_with_params(&params, &sig.s, rng, &digest)?;
        Self::from_parts(sig, auxiliary)
    }

    /// Accept an existing second signature, failing unless
    /// `s2 * R2 == msg2 * R + r2 * (s * R)`.
    pub fn from_parts(sig: &Signature, auxiliary: Signature) -> Result<Self, WitnessError> {
        let r_point = recover_r_point(sig)?;
        let r_inv = inverse_r(sig)?;
        let pub_key2 = r_point.scalar_mul(&sig.s);

        let r2_point = ecdsa::recover_r_point(&auxiliary.r, auxiliary.recovery_id())
            .map_err(|err| WitnessError::InvalidPoint(err.to_string()))?;
        let msg2 = digest_to_scalar(&auxiliary_message_digest());

        let lhs = r2_point.scalar_mul(&auxiliary.s);
        let rhs = double_scalar_mul(&msg2, &r_point, &auxiliary.r, &pub_key2);
        if lhs != rhs {
            return Err(WitnessError::VerificationFailed(
                "second signature invalid".into(),
            ));
        }
        info!("second signature verified");

        Ok(Self {
            r_point,
            r_inv,
            pub_key2,
            auxiliary,
        })
    }

    /// `r^-1 * pubKey2`, i.e. `r^-1 * s * R`.
    pub fn mod_inv_r_mult_pub_key2(&self) -> Affine {
        self.pub_key2.scalar_mul(&self.r_inv)
    }

    /// `n - r^-1`.
    pub fn neg_inv_r(&self) -> ScalarField {
        -self.r_inv
    }

    /// `-(r^-1 * G)`; the circuit adds `z` times this to
    /// [`HiddenSignature::mod_inv_r_mult_pub_key2`] to get the public key.
    pub fn neg_inv_r_g(&self) -> Affine {
        Affine::mul_generator(&self.neg_inv_r())
    }

    pub fn neg_inv_r_g_table(&self) -> Result<PrecomputeTable, WitnessError> {
        PrecomputeTable::build(&self.neg_inv_r_g())
    }

    /// What the circuit computes from the message digest.
    pub fn public_key(&self, digest: &[u8; 32]) -> Affine {
        let z = digest_to_scalar(digest);
        self.mod_inv_r_mult_pub_key2() + self.neg_inv_r_g().scalar_mul(&z)
    }
}

/// The message digest of the Poseidon-salted variant.
///
/// `poseidon_hash` commits to a salt and the public message hash: the
/// Poseidon of their eight registers, salt first, each group least
/// significant first. The signature is then made over the personal-message
/// hash of its lowercase hex rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SaltedDigest {
    pub salt: [u8; 32],
    pub msghash: [u8; 32],
    pub poseidon_hash: BigUint,
    pub keccak_hash_msg: [u8; 32],
}

impl SaltedDigest {
    pub fn derive(poseidon: &PoseidonContext, salt: [u8; 32], msghash: [u8; 32]) -> Self {
        let mut registers = [0u64; POSEIDON_INPUTS];
        registers[..REGISTERS].copy_from_slice(&FieldRegisters::from_be_bytes(&salt).0);
        registers[REGISTERS..].copy_from_slice(&FieldRegisters::from_be_bytes(&msghash).0);
        let poseidon_hash = poseidon.hash_registers_to_biguint(&registers);
        let keccak_hash_msg = hash_personal_message(poseidon_hash.to_str_radix(16).as_bytes());
        debug!(poseidon_hash = %poseidon_hash, "salted digest derived");

        Self {
            salt,
            msghash,
            poseidon_hash,
            keccak_hash_msg,
        }
    }

    /// Same as [`SaltedDigest::derive`] with a fresh 32-byte salt.
    pub fn with_random_salt<R: Rng + ?Sized>(
        poseidon: &PoseidonContext,
        rng: &mut R,
        msghash: [u8; 32],
    ) -> Self {
        let mut salt = [0u8; 32];
        rng.fill(&mut salt);
        Self::derive(poseidon, salt, msghash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecdsa::SigningKey;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const TEST_KEY: &str = "f5b552f608f5b552f608f5b552f6082ff5b552f608f5b552f608f5b552f6082f";

    fn signed(seed: u64) -> (SigningKey, [u8; 32], Signature) {
        let mut rng = StdRng::seed_from_u64(seed);
        let key = SigningKey::from_hex(TEST_KEY).unwrap();
        let digest = hash_personal_message(b"hello world");
        let sig = key.sign_prehash(&mut rng, &digest).unwrap();
        (key, digest, sig)
    }

    #[test]
    fn test_recovered_r_has_signature_parity() {
        for seed in 0..4 {
            let (_, _, sig) = signed(seed);
            let r_point = recover_r_point(&sig).unwrap();
            assert!(r_point.is_on_curve());
            assert_eq!(r_point.y_is_odd(), sig.y_is_odd());

            let flipped = Signature::from_recovery_id(sig.r, sig.s, sig.recovery_id() ^ 1).unwrap();
            assert_eq!(recover_r_point(&flipped).unwrap(), -r_point);
        }
    }

    #[test]
    fn test_inversion_free_reconstructs_public_key() {
        let (key, digest, sig) = signed(1);
        let inputs = InversionFreeInputs::derive(&sig, &digest).unwrap();
        let q = *key.verifying_key().as_affine();

        assert_eq!(inputs.r_inv * sig.r, ScalarField::ONE);
        let z = digest_to_scalar(&digest);
        assert_eq!(inputs.w + inputs.r_inv * z, ScalarField::ZERO);
        inputs.check_public_key(&q).unwrap();
    }

    #[test]
    fn test_wrong_digest_fails_public_key_check() {
        let (key, _, sig) = signed(2);
        let other = hash_personal_message(b"goodbye world");
        let inputs = InversionFreeInputs::derive(&sig, &other).unwrap();
        assert!(matches!(
            inputs.check_public_key(key.verifying_key().as_affine()),
            Err(WitnessError::VerificationFailed(_))
        ));
    }

    #[test]
    fn test_r_without_curve_point() {
        let (_, digest, sig) = signed(3);
        // x = 5 has no point on secp256k1
        let bad = Signature::new(ScalarField::from_u64(5), sig.s, 27).unwrap();
        assert!(matches!(
            InversionFreeInputs::derive(&bad, &digest),
            Err(WitnessError::InvalidPoint(_))
        ));
    }

    #[test]
    fn test_hidden_signature_identity() {
        let (key, digest, sig) = signed(4);
        let mut rng = StdRng::seed_from_u64(99);
        let hidden = HiddenSignature::derive(&sig, &mut rng).unwrap();

        assert_eq!(hidden.pub_key2, hidden.r_point.scalar_mul(&sig.s));
        assert_eq!(hidden.neg_inv_r() + hidden.r_inv, ScalarField::ZERO);
        assert_eq!(hidden.public_key(&digest), *key.verifying_key().as_affine());
    }

    #[test]
    fn test_flipped_bit_of_s_breaks_second_signature() {
        let (_, _, sig) = signed(5);
        let mut rng = StdRng::seed_from_u64(7);
        let r_point = recover_r_point(&sig).unwrap();
        let params = CurveParams::with_generator(r_point).unwrap();

        let mut limbs = sig.s.to_canonical_limbs();
        limbs[0] ^= 1 << 17;
        let wrong_s = ScalarField::from_limbs_reduced(limbs);
        let auxiliary =
            sign_prehash_with_params(&params, &wrong_s, &mut rng, &auxiliary_message_digest())
                .unwrap();

        assert!(matches!(
            HiddenSignature::from_parts(&sig, auxiliary),
            Err(WitnessError::VerificationFailed(msg)) if msg == "second signature invalid"
        ));
    }

    #[test]
    fn test_neg_inv_r_g_table_drives_address_circuit() {
        let (key, digest, sig) = signed(6);
        let mut rng = StdRng::seed_from_u64(11);
        let hidden = HiddenSignature::derive(&sig, &mut rng).unwrap();
        let table = hidden.neg_inv_r_g_table().unwrap();

        let q = hidden.mod_inv_r_mult_pub_key2() + table.lookup_sum(&digest_to_scalar(&digest));
        assert_eq!(q, *key.verifying_key().as_affine());
    }

    #[test]
    fn test_salted_digest_is_deterministic_in_salt() {
        let poseidon = PoseidonContext::new();
        let msghash = hash_personal_message(b"This is my message!");
        let a = SaltedDigest::derive(&poseidon, [1u8; 32], msghash);
        let b = SaltedDigest::derive(&poseidon, [1u8; 32], msghash);
        let c = SaltedDigest::derive(&poseidon, [2u8; 32], msghash);

        assert_eq!(a, b);
        assert_ne!(a.poseidon_hash, c.poseidon_hash);
        assert!(a.poseidon_hash.bits() <= 254);
        assert_eq!(
            a.keccak_hash_msg,
            hash_personal_message(a.poseidon_hash.to_str_radix(16).as_bytes())
        );
    }

    #[test]
    fn test_salted_digest_absorbs_salt_then_msghash_registers() {
        let salt: [u8; 32] = core::array::from_fn(|i| i as u8);
        let msghash: [u8; 32] = core::array::from_fn(|i| 32 + i as u8);
        let salted = SaltedDigest::derive(&PoseidonContext::new(), salt, msghash);

        // circomlibjs poseidon over the salt registers, then the msghash registers
        assert_eq!(
            salted.poseidon_hash.to_str_radix(16),
            "110ea2c479eab31cb95cf7a55f4da95986da9d52ec559c52d41183aca721487d"
        );
        assert_eq!(
            salted.poseidon_hash.to_string(),
            "7715177664719489946532213473115156401571893493407179508533604690505903458429"
        );
    }
}
