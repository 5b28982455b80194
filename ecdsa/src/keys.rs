//! Signing and verifying keys for recoverable ECDSA.

use curve::{Affine, CurveError, CurveParams, RandomField, ScalarField, double_scalar_mul};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{ADDRESS_SIZE, PK_SIZE, SK_SIZE};
use crate::errors::EcdsaError;
use crate::hashing::keccak256;
use crate::signatures::{Signature, digest_to_scalar};

/// A secret signing key: a non-zero scalar modulo the group order.
///
/// # Example
///
/// ```
/// use ecdsa::SigningKey;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let signing_key = SigningKey::random(&mut rng);
/// let verifying_key = signing_key.verifying_key();
/// assert!(!verifying_key.as_affine().is_infinity());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SigningKey {
    scalar: ScalarField,
}

/// A public verifying key: a point on the curve other than the identity.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyingKey {
    point: Affine,
}

impl SigningKey {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            scalar: ScalarField::random_nonzero(rng),
        }
    }

    pub fn from_scalar(scalar: ScalarField) -> Result<Self, EcdsaError> {
        if scalar.is_zero() {
            return Err(EcdsaError::ZeroScalar("secret key"));
        }
        Ok(Self { scalar })
    }

    /// Parse a big-endian secret key, rejecting zero and values >= n.
    pub fn from_bytes(bytes: &[u8; SK_SIZE]) -> Result<Self, EcdsaError> {
        let scalar = ScalarField::from_be_bytes(bytes)
            .ok_or(CurveError::NonCanonical)?;
        Self::from_scalar(scalar)
    }

    pub fn from_hex(text: &str) -> Result<Self, EcdsaError> {
        let trimmed = text.trim();
        let digits = trimmed.strip_prefix("0x").unwrap_or(trimmed);
        let bytes = hex::decode(digits)
            .map_err(|err| EcdsaError::InvalidSignature(err.to_string()))?;
        let bytes: [u8; SK_SIZE] = bytes.as_slice().try_into().map_err(|_| {
            EcdsaError::InvalidSignature(format!("secret key must be {SK_SIZE} bytes"))
        })?;
        Self::from_bytes(&bytes)
    }

    #[inline]
    pub fn scalar(&self) -> &ScalarField {
        &self.scalar
    }

    pub fn to_bytes(&self) -> [u8; SK_SIZE] {
        self.scalar.to_be_bytes()
    }

    /// `sk * G` on secp256k1.
    pub fn verifying_key(&self) -> VerifyingKey {
        self.verifying_key_with_params(&CurveParams::secp256k1())
    }

    /// `sk * G'` where `G'` is the generator carried by `params`.
    pub fn verifying_key_with_params(&self, params: &CurveParams) -> VerifyingKey {
        VerifyingKey {
            point: params.mul_generator(&self.scalar),
        }
    }

    /// Sign a 32-byte digest on secp256k1. The result is low-s normalised.
    pub fn sign_prehash<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        digest: &[u8; 32],
    ) -> Result<Signature, EcdsaError> {
        sign_prehash_with_params(&CurveParams::secp256k1(), &self.scalar, rng, digest)
    }

    /// Sign a 32-byte digest on the curve described by `params`.
    pub fn sign_prehash_with_params<R: Rng + ?Sized>(
        &self,
        params: &CurveParams,
        rng: &mut R,
        digest: &[u8; 32],
    ) -> Result<Signature, EcdsaError> {
        sign_prehash_with_params(params, &self.scalar, rng, digest)
    }
}

/// ECDSA signing with an explicit generator.
///
/// 1. Draw a random nonce `k` and compute `K = k * G'`
/// 2. `r = K.x mod n`, `s = k^-1 * (z + r * sk) mod n`
/// 3. Normalise to low-s, flipping the parity bit of the recovery id
///
/// The recovery id refers to `K` on secp256k1: parity of `K.y` in bit 0 and
/// `K.x >= n` in bit 1. Parameters other than secp256k1 with a substitute
/// generator are rejected.
pub fn sign_prehash_with_params<R: Rng + ?Sized>(
    params: &CurveParams,
    secret: &ScalarField,
    rng: &mut R,
    digest: &[u8; 32],
) -> Result<Signature, EcdsaError> {
    params.ensure_supported()?;
    if secret.is_zero() {
        return Err(EcdsaError::ZeroScalar("secret key"));
    }
    let z = digest_to_scalar(digest);

    loop {
        let nonce = ScalarField::random_nonzero(rng);
        let commitment = params.mul_generator(&nonce);
        if commitment.is_infinity() {
            continue;
        }

        // params.order is the scalar modulus, so this is K.x mod n
        let r = ScalarField::from_limbs_reduced(commitment.x.to_canonical_limbs());
        if r.is_zero() {
            continue;
        }

        let s = nonce.inverse() * (z + r * *secret);
        if s.is_zero() {
            continue;
        }

        let overflow = commitment.x.to_biguint() >= params.order;
        let recovery_id = (commitment.y_is_odd() as u8) | ((overflow as u8) << 1);
        let signature = Signature::from_recovery_id(r, s, recovery_id)?;
        return Ok(signature.normalize_s());
    }
}

impl VerifyingKey {
    /// Wrap a point, rejecting the identity and off-curve points.
    pub fn from_affine(point: Affine) -> Result<Self, EcdsaError> {
        if point.is_infinity() {
            return Err(EcdsaError::InvalidPoint(
                "verifying key is the identity".into(),
            ));
        }
        if !point.is_on_curve() {
            return Err(EcdsaError::InvalidPoint(
                "verifying key is not on the curve".into(),
            ));
        }
        Ok(Self { point })
    }

    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self, EcdsaError> {
        Self::from_affine(Affine::from_sec1_bytes(bytes)?)
    }

    /// Parse a hex SEC1 key (`04 || x || y`, or compressed).
    pub fn from_hex(text: &str) -> Result<Self, EcdsaError> {
        Self::from_affine(Affine::from_hex(text)?)
    }

    #[inline]
    pub fn as_affine(&self) -> &Affine {
        &self.point
    }

    pub fn to_uncompressed_bytes(&self) -> [u8; PK_SIZE] {
        let mut out = [0u8; PK_SIZE];
        out[0] = curve::SEC1_UNCOMPRESSED_TAG;
        out[1..33].copy_from_slice(&self.point.x.to_be_bytes());
        out[33..].copy_from_slice(&self.point.y.to_be_bytes());
        out
    }

    /// Lowercase hex of `04 || x || y`.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_uncompressed_bytes())
    }

    /// Ethereum address: last 20 bytes of `keccak256(x || y)`.
    pub fn address(&self) -> [u8; ADDRESS_SIZE] {
        let hash = keccak256(&self.to_uncompressed_bytes()[1..]);
        let mut address = [0u8; ADDRESS_SIZE];
        address.copy_from_slice(&hash[32 - ADDRESS_SIZE..]);
        address
    }

    /// Verify a signature over a 32-byte digest on secp256k1.
    pub fn verify_prehash(&self, digest: &[u8; 32], sig: &Signature) -> Result<bool, EcdsaError> {
        self.verify_prehash_with_params(&CurveParams::secp256k1(), digest, sig)
    }

    /// Check `(u1 * G' + u2 * pk).x mod n == r` with `u1 = z / s`,
    /// `u2 = r / s`.
    pub fn verify_prehash_with_params(
        &self,
        params: &CurveParams,
        digest: &[u8; 32],
        sig: &Signature,
    ) -> Result<bool, EcdsaError> {
        params.ensure_supported()?;
        if sig.r.is_zero() {
            return Err(EcdsaError::ZeroScalar("r"));
        }
        if sig.s.is_zero() {
            return Err(EcdsaError::ZeroScalar("s"));
        }

        let z = digest_to_scalar(digest);
        let w = sig.s.inverse();
        let u1 = z * w;
        let u2 = sig.r * w;

        let point = double_scalar_mul(&u1, params.generator(), &u2, &self.point);
        if point.is_infinity() {
            return Ok(false);
        }

        let x = ScalarField::from_limbs_reduced(point.x.to_canonical_limbs());
        Ok(x == sig.r)
    }

    /// Recover the signer's key from a digest and a recoverable signature.
    pub fn recover_from_prehash(digest: &[u8; 32], sig: &Signature) -> Result<Self, EcdsaError> {
        Self::recover_from_prehash_with_params(&CurveParams::secp256k1(), digest, sig)
    }

    /// `pk = r^-1 * (s * R - z * G')`.
    pub fn recover_from_prehash_with_params(
        params: &CurveParams,
        digest: &[u8; 32],
        sig: &Signature,
    ) -> Result<Self, EcdsaError> {
        params.ensure_supported()?;
        let r_point = sig.r_point()?;
        let r_inv = sig.r.inverse();
        let z = digest_to_scalar(digest);

        let u1 = -(z * r_inv);
        let u2 = sig.s * r_inv;
        let point = double_scalar_mul(&u1, params.generator(), &u2, &r_point);
        Self::from_affine(point)
    }
}

impl From<&SigningKey> for VerifyingKey {
    fn from(sk: &SigningKey) -> Self {
        sk.verifying_key()
    }
}
