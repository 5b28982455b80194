//! Recoverable ECDSA signatures and recovery of the nonce point `R`.

use curve::{Affine, BaseField, ScalarField};
use serde::{Deserialize, Serialize};

use crate::constants::{EIP155_OFFSET, SIG_SIZE, V_OFFSET};
use crate::errors::EcdsaError;

/// A recoverable ECDSA signature `(r, s, v)`.
///
/// `v` is kept in the Ethereum convention, `27 + recovery_id`. Bit 0 of the
/// recovery id is the parity of `R.y`; bit 1 is set when `R.x` was at least
/// the group order and had to be reduced to give `r`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Signature {
    pub r: ScalarField,
    pub s: ScalarField,
    pub v: u8,
}

impl Signature {
    /// Build a signature from `r`, `s` and any accepted form of `v`
    /// (see [`Signature::normalize_v`]).
    pub fn new(r: ScalarField, s: ScalarField, v: u64) -> Result<Self, EcdsaError> {
        let v = Self::normalize_v(v)?;
        Self::checked(r, s, v)
    }

    pub fn from_recovery_id(
        r: ScalarField,
        s: ScalarField,
        recovery_id: u8,
    ) -> Result<Self, EcdsaError> {
        if recovery_id > 3 {
            return Err(EcdsaError::InvalidRecoveryId(recovery_id as u64));
        }
        Self::checked(r, s, V_OFFSET + recovery_id)
    }

    fn checked(r: ScalarField, s: ScalarField, v: u8) -> Result<Self, EcdsaError> {
        if r.is_zero() {
            return Err(EcdsaError::ZeroScalar("r"));
        }
        if s.is_zero() {
            return Err(EcdsaError::ZeroScalar("s"));
        }
        Ok(Self { r, s, v })
    }

    /// Map a raw `v` to the `27..=30` range.
    ///
    /// Accepts bare recovery ids `0..=3`, Ethereum values `27..=30` and
    /// EIP-155 values `chain_id * 2 + 35 + parity`.
    pub fn normalize_v(v: u64) -> Result<u8, EcdsaError> {
        match v {
            0..=3 => Ok(V_OFFSET + v as u8),
            27..=30 => Ok(v as u8),
            v if v >= EIP155_OFFSET => Ok(V_OFFSET + ((v - EIP155_OFFSET) % 2) as u8),
            _ => Err(EcdsaError::InvalidRecoveryId(v)),
        }
    }

    #[inline]
    pub fn recovery_id(&self) -> u8 {
        self.v - V_OFFSET
    }

    /// Parity of `R.y`: `(v - 27) mod 2`.
    #[inline]
    pub fn y_is_odd(&self) -> bool {
        self.recovery_id() & 1 == 1
    }

    /// The nonce point `R` selected by `r` and the recovery id.
    pub fn r_point(&self) -> Result<Affine, EcdsaError> {
        recover_r_point(&self.r, self.recovery_id())
    }

    pub fn is_low_s(&self) -> bool {
        !self.s.is_high()
    }

    /// Replace a high `s` by `n - s`, flipping the recovered `R` to `-R`.
    pub fn normalize_s(&self) -> Self {
        if self.is_low_s() {
            return *self;
        }
        Self {
            r: self.r,
            s: -self.s,
            v: V_OFFSET + (self.recovery_id() ^ 1),
        }
    }

    /// `r || s || v`, big-endian scalars.
    pub fn to_bytes(&self) -> [u8; SIG_SIZE] {
        let mut out = [0u8; SIG_SIZE];
        out[..32].copy_from_slice(&self.r.to_be_bytes());
        out[32..64].copy_from_slice(&self.s.to_be_bytes());
        out[64] = self.v;
        out
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EcdsaError> {
        if bytes.len() != SIG_SIZE {
            return Err(EcdsaError::InvalidSignature(format!(
                "expected {SIG_SIZE} bytes, got {}",
                bytes.len()
            )));
        }
        let r = parse_scalar(&bytes[..32], "r")?;
        let s = parse_scalar(&bytes[32..64], "s")?;
        Self::new(r, s, bytes[64] as u64)
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    pub fn from_hex(text: &str) -> Result<Self, EcdsaError> {
        let trimmed = text.trim();
        let digits = trimmed.strip_prefix("0x").unwrap_or(trimmed);
        let bytes = hex::decode(digits)
            .map_err(|err| EcdsaError::InvalidSignature(err.to_string()))?;
        Self::from_bytes(&bytes)
    }
}

fn parse_scalar(bytes: &[u8], name: &str) -> Result<ScalarField, EcdsaError> {
    let mut buf = [0u8; 32];
    buf.copy_from_slice(bytes);
    ScalarField::from_be_bytes(&buf)
        .ok_or_else(|| EcdsaError::InvalidSignature(format!("{name} is not below the group order")))
}

/// Recover the point `R` with `R.x = r` (or `r + n` when bit 1 of the
/// recovery id is set) and `R.y` of the parity given by bit 0.
pub fn recover_r_point(r: &ScalarField, recovery_id: u8) -> Result<Affine, EcdsaError> {
    if recovery_id > 3 {
        return Err(EcdsaError::InvalidRecoveryId(recovery_id as u64));
    }

    let mut x = r.to_biguint();
    if recovery_id & 2 == 2 {
        x += ScalarField::modulus_biguint();
    }
    let x = BaseField::from_biguint(&x)
        .ok_or_else(|| EcdsaError::InvalidPoint(format!("r + n exceeds p for r = {r}")))?;

    Affine::from_x(&x, recovery_id & 1 == 1)
        .map_err(|_| EcdsaError::InvalidPoint(format!("no curve point with x = {x}")))
}

/// Interpret a 32-byte digest as a scalar, reducing modulo the group order.
#[inline]
pub fn digest_to_scalar(digest: &[u8; 32]) -> ScalarField {
    ScalarField::from_be_bytes_reduced(digest)
}
