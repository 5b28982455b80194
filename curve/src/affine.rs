// secp256k1 : y^2 = x^3 + 7 over GF(p), p = 2^256 - 2^32 - 977
// Group order n = 0xfffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141
// Cofactor: 1
// Generator (SEC 2, section 2.4.1):
//   x = 0x79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798
//   y = 0x483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8

use crate::basefield::BaseField;
use crate::errors::CurveError;
use crate::{Group, Projective, ScalarField};
use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use serde::{Deserialize, Serialize};

const GENERATOR_X: [u64; 4] = [
    0x59f2815b16f81798,
    0x029bfcdb2dce28d9,
    0x55a06295ce870b07,
    0x79be667ef9dcbbac,
];

const GENERATOR_Y: [u64; 4] = [
    0x9c47d08ffb10d4b8,
    0xfd17b448a6855419,
    0x5da4fbfc0e1108a8,
    0x483ada7726a3c465,
];

/// SEC1 tag of an uncompressed point.
pub const SEC1_UNCOMPRESSED_TAG: u8 = 0x04;

/// Affine point on secp256k1.
/// Represents a point in affine coordinates (x, y) or the point at infinity.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Affine {
    pub x: BaseField,
    pub y: BaseField,
    /// Whether this point is the point at infinity (identity element)
    pub is_infinity: bool,
}

impl Affine {
    /// The point at infinity (identity element)
    pub const INFINITY: Self = Affine {
        x: BaseField::ZERO,
        y: BaseField::ZERO,
        is_infinity: true,
    };

    /// The `b` coefficient (a = 0).
    #[inline]
    pub fn curve_b() -> BaseField {
        BaseField::from_u64(7)
    }

    /// Create a new affine point without checking the curve equation.
    pub fn new(x: BaseField, y: BaseField) -> Self {
        Affine {
            x,
            y,
            is_infinity: false,
        }
    }

    /// Create a point, rejecting coordinates that are not on the curve.
    pub fn try_new(x: BaseField, y: BaseField) -> Result<Self, CurveError> {
        let point = Self::new(x, y);
        if point.is_on_curve() {
            Ok(point)
        } else {
            Err(CurveError::NotOnCurve)
        }
    }

    #[inline]
    pub fn is_infinity(&self) -> bool {
        self.is_infinity
    }

    /// Check if a point is on the curve: y^2 = x^3 + 7.
    pub fn is_on_curve(&self) -> bool {
        if self.is_infinity {
            return true;
        }

        let y2 = self.y.square();
        let x3 = self.x.square() * self.x;

        y2 == x3 + Self::curve_b()
    }

    /// Standard secp256k1 generator.
    pub fn generator() -> Self {
        // Constants are canonical, so reduction is a plain conversion.
        Affine::new(
            BaseField::from_limbs_reduced(GENERATOR_X),
            BaseField::from_limbs_reduced(GENERATOR_Y),
        )
    }

    /// Decompress: the point with the given x-coordinate whose y has the
    /// requested parity.
    pub fn from_x(x: &BaseField, y_odd: bool) -> Result<Self, CurveError> {
        let rhs = x.square() * *x + Self::curve_b();
        let y = rhs.sqrt().ok_or(CurveError::NoSquareRoot)?;
        let y = if y.is_odd() == y_odd { y } else { -y };
        Ok(Affine::new(*x, y))
    }

    /// Parity of the y-coordinate.
    #[inline]
    pub fn y_is_odd(&self) -> bool {
        self.y.is_odd()
    }

    /// Point doubling: 2*P.
    pub fn double(&self) -> Self {
        if self.is_infinity || self.y.is_zero() {
            return Self::INFINITY;
        }

        // λ = 3x^2 / 2y
        let x2 = self.x.square();
        let numerator = x2 + x2 + x2;
        let lambda = numerator / self.y.double();

        let x_r = lambda.square() - self.x.double();
        let y_r = lambda * (self.x - x_r) - self.y;

        Affine::new(x_r, y_r)
    }

    pub fn negate(&self) -> Self {
        if self.is_infinity {
            return *self;
        }
        Affine::new(self.x, -self.y)
    }

    pub fn mul_generator(scalar: &ScalarField) -> Self {
        Projective::mul_generator(scalar).to_affine()
    }

    /// SEC1 uncompressed encoding `04 || x || y`.
    pub fn to_uncompressed_bytes(&self) -> Result<[u8; 65], CurveError> {
        if self.is_infinity {
            return Err(CurveError::Identity);
        }
        let mut out = [0u8; 65];
        out[0] = SEC1_UNCOMPRESSED_TAG;
        out[1..33].copy_from_slice(&self.x.to_be_bytes());
        out[33..].copy_from_slice(&self.y.to_be_bytes());
        Ok(out)
    }

    /// Concatenated `x || y`, the form hashed into Ethereum addresses.
    pub fn to_raw_xy_bytes(&self) -> Result<[u8; 64], CurveError> {
        let encoded = self.to_uncompressed_bytes()?;
        let mut out = [0u8; 64];
        out.copy_from_slice(&encoded[1..]);
        Ok(out)
    }

    /// Decode a SEC1 point, compressed (33 bytes) or uncompressed (65 bytes).
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self, CurveError> {
        match (bytes.len(), bytes.first()) {
            (65, Some(&SEC1_UNCOMPRESSED_TAG)) => {
                let x = parse_coordinate(&bytes[1..33])?;
                let y = parse_coordinate(&bytes[33..65])?;
                Self::try_new(x, y)
            }
            (33, Some(&tag)) if tag == 0x02 || tag == 0x03 => {
                let x = parse_coordinate(&bytes[1..33])?;
                Self::from_x(&x, tag == 0x03)
            }
            (len, _) => Err(CurveError::InvalidEncoding(format!(
                "unexpected SEC1 length {len} or tag"
            ))),
        }
    }

    /// Lowercase hex of the uncompressed encoding, without `0x`.
    pub fn to_hex(&self) -> Result<String, CurveError> {
        Ok(hex::encode(self.to_uncompressed_bytes()?))
    }

    /// Parse a hex SEC1 point; an optional `0x` prefix is accepted.
    pub fn from_hex(text: &str) -> Result<Self, CurveError> {
        let trimmed = text.trim();
        let digits = trimmed.strip_prefix("0x").unwrap_or(trimmed);
        let bytes = hex::decode(digits)
            .map_err(|err| CurveError::InvalidEncoding(err.to_string()))?;
        Self::from_sec1_bytes(&bytes)
    }
}

fn parse_coordinate(bytes: &[u8]) -> Result<BaseField, CurveError> {
    let mut buf = [0u8; 32];
    buf.copy_from_slice(bytes);
    BaseField::from_be_bytes(&buf).ok_or(CurveError::NonCanonical)
}

impl Group for Affine {
    type Scalar = ScalarField;

    #[inline]
    fn identity() -> Self {
        Self::INFINITY
    }

    #[inline]
    fn is_identity(&self) -> bool {
        self.is_infinity
    }

    #[inline]
    fn generator() -> Self {
        Affine::generator()
    }

    #[inline]
    fn mul_generator(scalar: &ScalarField) -> Self {
        Affine::mul_generator(scalar)
    }

    #[inline]
    fn double(&self) -> Self {
        Self::double(self)
    }

    #[inline]
    fn negate(&self) -> Self {
        Self::negate(self)
    }

    // Affine chains pay an inversion per step, so run them in Jacobian form.
    fn scalar_mul(&self, scalar: &ScalarField) -> Self {
        Projective::from_affine(self).scalar_mul(scalar).to_affine()
    }
}

impl Add for Affine {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        if self.is_infinity {
            return other;
        }
        if other.is_infinity {
            return self;
        }

        if self.x == other.x {
            if self.y == other.y {
                return self.double();
            } else {
                return Self::INFINITY;
            }
        }

        // λ = (y2 - y1) / (x2 - x1)
        let lambda = (other.y - self.y) / (other.x - self.x);

        let x_r = lambda.square() - self.x - other.x;
        let y_r = lambda * (self.x - x_r) - self.y;

        Affine::new(x_r, y_r)
    }
}

impl AddAssign for Affine {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

#[allow(clippy::suspicious_arithmetic_impl)]
impl Sub for Affine {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self + other.negate()
    }
}

impl SubAssign for Affine {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Neg for Affine {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

impl Mul<ScalarField> for Affine {
    type Output = Self;

    fn mul(self, scalar: ScalarField) -> Self {
        <Self as Group>::scalar_mul(&self, &scalar)
    }
}

impl Mul<&ScalarField> for Affine {
    type Output = Self;

    fn mul(self, scalar: &ScalarField) -> Self {
        <Self as Group>::scalar_mul(&self, scalar)
    }
}

impl Mul<Affine> for ScalarField {
    type Output = Affine;

    fn mul(self, point: Affine) -> Affine {
        <Affine as Group>::scalar_mul(&point, &self)
    }
}

impl Mul<&Affine> for ScalarField {
    type Output = Affine;

    fn mul(self, point: &Affine) -> Affine {
        <Affine as Group>::scalar_mul(point, &self)
    }
}
