//! 256-bit prime field arithmetic in Montgomery form.
//!
//! Both secp256k1 fields share this implementation, and so does any other
//! 256-bit prime field a caller needs; a zero-sized parameter type supplies
//! the modulus and the Montgomery constants. Limbs are stored little-endian.

use core::fmt::{self, Debug, Display, Formatter};
use core::hash::Hash;
use core::iter::{Product, Sum};
use core::marker::PhantomData;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_bigint::BigUint;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Constants describing a 256-bit prime modulus.
pub trait FieldParams:
    Copy + Clone + Debug + Default + PartialEq + Eq + Hash + Send + Sync + 'static
{
    /// Field modulus, little-endian limbs.
    const MODULUS: [u64; 4];
    /// 2^256 mod p
    const R: [u64; 4];
    /// 2^512 mod p
    const R2: [u64; 4];
    /// -p^{-1} mod 2^64
    const MU: u64;
}

/// Field element in Montgomery form (`value * 2^256 mod p`).
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct MontyField<P: FieldParams> {
    limbs: [u64; 4],
    _marker: PhantomData<P>,
}

impl<P: FieldParams> MontyField<P> {
    pub const ZERO: Self = Self::from_raw([0, 0, 0, 0]);

    /// One in Montgomery form (R mod p).
    pub const ONE: Self = Self::from_raw(P::R);

    #[inline]
    const fn from_raw(limbs: [u64; 4]) -> Self {
        Self {
            limbs,
            _marker: PhantomData,
        }
    }

    /// The modulus as little-endian limbs.
    #[inline]
    pub fn modulus() -> [u64; 4] {
        P::MODULUS
    }

    /// The modulus as a big integer.
    pub fn modulus_biguint() -> BigUint {
        limbs_to_biguint(&P::MODULUS)
    }

    #[inline]
    pub fn from_u64(val: u64) -> Self {
        // val * R^2 * R^{-1} = val * R
        montgomery_mul::<P>(&[val, 0, 0, 0], &P::R2)
    }

    /// Build from canonical little-endian limbs, rejecting values >= p.
    pub fn from_canonical_limbs(limbs: [u64; 4]) -> Option<Self> {
        if !is_canonical::<P>(&limbs) {
            return None;
        }
        Some(montgomery_mul::<P>(&limbs, &P::R2))
    }

    /// Build from arbitrary 256-bit limbs, reducing modulo p.
    ///
    /// Takes one subtraction for the secp256k1 moduli, which exceed 2^255.
    pub fn from_limbs_reduced(limbs: [u64; 4]) -> Self {
        let mut limbs = limbs;
        while !is_canonical::<P>(&limbs) {
            limbs = sub_mod::<P>(limbs, P::MODULUS);
        }
        montgomery_mul::<P>(&limbs, &P::R2)
    }

    /// Parse a 32-byte big-endian value, rejecting values >= p.
    pub fn from_be_bytes(bytes: &[u8; 32]) -> Option<Self> {
        Self::from_canonical_limbs(be_bytes_to_limbs(bytes))
    }

    /// Parse a 32-byte big-endian value, reducing modulo p.
    pub fn from_be_bytes_reduced(bytes: &[u8; 32]) -> Self {
        Self::from_limbs_reduced(be_bytes_to_limbs(bytes))
    }

    /// Convert from a big integer, rejecting values >= p.
    pub fn from_biguint(value: &BigUint) -> Option<Self> {
        if value.bits() > 256 {
            return None;
        }
        let digits = value.to_u64_digits();
        let mut limbs = [0u64; 4];
        limbs[..digits.len()].copy_from_slice(&digits);
        Self::from_canonical_limbs(limbs)
    }

    /// Canonical little-endian limbs (out of Montgomery form).
    #[inline]
    pub fn to_canonical_limbs(&self) -> [u64; 4] {
        montgomery_mul::<P>(&self.limbs, &[1, 0, 0, 0]).limbs
    }

    pub fn to_be_bytes(&self) -> [u8; 32] {
        let canonical = self.to_canonical_limbs();
        let mut out = [0u8; 32];
        for (i, limb) in canonical.iter().rev().enumerate() {
            out[i * 8..(i + 1) * 8].copy_from_slice(&limb.to_be_bytes());
        }
        out
    }

    pub fn to_biguint(&self) -> BigUint {
        limbs_to_biguint(&self.to_canonical_limbs())
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.limbs == [0, 0, 0, 0]
    }

    /// Parity of the canonical representative.
    #[inline]
    pub fn is_odd(&self) -> bool {
        self.to_canonical_limbs()[0] & 1 == 1
    }

    #[inline]
    pub fn square(&self) -> Self {
        *self * *self
    }

    #[inline]
    pub fn double(&self) -> Self {
        *self + *self
    }

    /// Multiplicative inverse via Fermat's little theorem; zero maps to zero.
    pub fn inverse(&self) -> Self {
        let exp = sub_mod::<P>(P::MODULUS, [2, 0, 0, 0]);
        self.pow_vartime(exp)
    }

    pub fn try_inverse(&self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            Some(self.inverse())
        }
    }

    /// Variable-time exponentiation by a little-endian 256-bit exponent.
    pub fn pow_vartime(&self, exp: [u64; 4]) -> Self {
        let mut result = Self::ONE;
        let mut base = *self;

        for &limb in exp.iter() {
            let mut remaining = limb;
            for _ in 0..64 {
                if remaining & 1 == 1 {
                    result *= base;
                }
                base = base.square();
                remaining >>= 1;
            }
        }

        result
    }

    /// Square root for moduli congruent to 3 mod 4: `a^((p+1)/4)`.
    pub fn sqrt(&self) -> Option<Self> {
        debug_assert_eq!(P::MODULUS[0] & 3, 3, "sqrt requires p = 3 mod 4");

        // (p + 1) / 4; p + 1 cannot overflow for a prime below 2^256 - 1
        let (p1, _) = add_limbs(P::MODULUS, [1, 0, 0, 0]);
        let exp = shr2(p1);
        let root = self.pow_vartime(exp);
        if root.square() == *self {
            Some(root)
        } else {
            None
        }
    }
}

#[inline]
fn be_bytes_to_limbs(bytes: &[u8; 32]) -> [u64; 4] {
    let mut limbs = [0u64; 4];
    for (i, limb) in limbs.iter_mut().enumerate() {
        let start = 32 - (i + 1) * 8;
        let mut word = [0u8; 8];
        word.copy_from_slice(&bytes[start..start + 8]);
        *limb = u64::from_be_bytes(word);
    }
    limbs
}

fn limbs_to_biguint(limbs: &[u64; 4]) -> BigUint {
    let mut bytes = Vec::with_capacity(32);
    for &limb in limbs {
        bytes.extend_from_slice(&limb.to_le_bytes());
    }
    BigUint::from_bytes_le(&bytes)
}

#[inline]
const fn shr2(a: [u64; 4]) -> [u64; 4] {
    [
        (a[0] >> 2) | (a[1] << 62),
        (a[1] >> 2) | (a[2] << 62),
        (a[2] >> 2) | (a[3] << 62),
        a[3] >> 2,
    ]
}

#[inline]
const fn add_limbs(a: [u64; 4], b: [u64; 4]) -> ([u64; 4], bool) {
    let (r0, carry) = a[0].overflowing_add(b[0]);
    let (r1, carry) = carrying_add(a[1], b[1], carry);
    let (r2, carry) = carrying_add(a[2], b[2], carry);
    let (r3, carry) = carrying_add(a[3], b[3], carry);
    ([r0, r1, r2, r3], carry)
}

/// Add two canonical values mod p.
#[inline]
fn add_mod<P: FieldParams>(a: [u64; 4], b: [u64; 4]) -> [u64; 4] {
    let ([r0, r1, r2, r3], carry) = add_limbs(a, b);

    let (s0, borrow) = r0.overflowing_sub(P::MODULUS[0]);
    let (s1, borrow) = borrowing_sub(r1, P::MODULUS[1], borrow);
    let (s2, borrow) = borrowing_sub(r2, P::MODULUS[2], borrow);
    let (s3, borrow) = borrowing_sub(r3, P::MODULUS[3], borrow);

    // the sum wrapped past 2^256, or it is already >= p
    if carry || !borrow {
        [s0, s1, s2, s3]
    } else {
        [r0, r1, r2, r3]
    }
}

/// Subtract two canonical values mod p.
#[inline]
fn sub_mod<P: FieldParams>(a: [u64; 4], b: [u64; 4]) -> [u64; 4] {
    let (r0, borrow) = a[0].overflowing_sub(b[0]);
    let (r1, borrow) = borrowing_sub(a[1], b[1], borrow);
    let (r2, borrow) = borrowing_sub(a[2], b[2], borrow);
    let (r3, borrow) = borrowing_sub(a[3], b[3], borrow);

    if borrow {
        let (sum, _) = add_limbs([r0, r1, r2, r3], P::MODULUS);
        sum
    } else {
        [r0, r1, r2, r3]
    }
}

#[inline]
fn neg_mod<P: FieldParams>(a: [u64; 4]) -> [u64; 4] {
    if a == [0, 0, 0, 0] {
        return a;
    }
    sub_mod::<P>(P::MODULUS, a)
}

#[inline]
fn is_canonical<P: FieldParams>(limbs: &[u64; 4]) -> bool {
    let (_, borrow) = limbs[0].overflowing_sub(P::MODULUS[0]);
    let (_, borrow) = borrowing_sub(limbs[1], P::MODULUS[1], borrow);
    let (_, borrow) = borrowing_sub(limbs[2], P::MODULUS[2], borrow);
    let (_, borrow) = borrowing_sub(limbs[3], P::MODULUS[3], borrow);
    borrow
}

#[inline]
const fn carrying_add(a: u64, b: u64, carry: bool) -> (u64, bool) {
    let (sum, overflow1) = a.overflowing_add(b);
    let (sum, overflow2) = sum.overflowing_add(carry as u64);
    (sum, overflow1 || overflow2)
}

#[inline]
const fn borrowing_sub(a: u64, b: u64, borrow: bool) -> (u64, bool) {
    let (diff, overflow1) = a.overflowing_sub(b);
    let (diff, overflow2) = diff.overflowing_sub(borrow as u64);
    (diff, overflow1 || overflow2)
}

/// `a + b * c + carry`, split into (low, high) words.
#[inline(always)]
const fn mac(a: u64, b: u64, c: u64, carry: u64) -> (u64, u64) {
    let wide = (a as u128) + (b as u128) * (c as u128) + (carry as u128);
    (wide as u64, (wide >> 64) as u64)
}

/// Montgomery multiplication `a * b * R^{-1} mod p` (CIOS).
///
/// The moduli sit just below 2^256, so the running value can spill into a
/// fifth word; it is tracked in `t[4]` and folded into the final subtraction.
#[inline]
fn montgomery_mul<P: FieldParams>(a: &[u64; 4], b: &[u64; 4]) -> MontyField<P> {
    let m = P::MODULUS;
    let mut t = [0u64; 6];

    for &ai in a.iter() {
        let mut carry = 0u64;
        for j in 0..4 {
            let (lo, hi) = mac(t[j], ai, b[j], carry);
            t[j] = lo;
            carry = hi;
        }
        let (sum, over) = t[4].overflowing_add(carry);
        t[4] = sum;
        t[5] = over as u64;

        let k = t[0].wrapping_mul(P::MU);
        let (_, mut carry) = mac(t[0], k, m[0], 0);
        for j in 1..4 {
            let (lo, hi) = mac(t[j], k, m[j], carry);
            t[j - 1] = lo;
            carry = hi;
        }
        let (sum, over) = t[4].overflowing_add(carry);
        t[3] = sum;
        t[4] = t[5] + over as u64;
    }

    let result = [t[0], t[1], t[2], t[3]];
    let (s0, borrow) = result[0].overflowing_sub(m[0]);
    let (s1, borrow) = borrowing_sub(result[1], m[1], borrow);
    let (s2, borrow) = borrowing_sub(result[2], m[2], borrow);
    let (s3, borrow) = borrowing_sub(result[3], m[3], borrow);

    if t[4] != 0 || !borrow {
        MontyField::from_raw([s0, s1, s2, s3])
    } else {
        MontyField::from_raw(result)
    }
}

impl<P: FieldParams> Add for MontyField<P> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_raw(add_mod::<P>(self.limbs, rhs.limbs))
    }
}

impl<P: FieldParams> AddAssign for MontyField<P> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<P: FieldParams> Sub for MontyField<P> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_raw(sub_mod::<P>(self.limbs, rhs.limbs))
    }
}

impl<P: FieldParams> SubAssign for MontyField<P> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<P: FieldParams> Neg for MontyField<P> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::from_raw(neg_mod::<P>(self.limbs))
    }
}

impl<P: FieldParams> Mul for MontyField<P> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        montgomery_mul::<P>(&self.limbs, &rhs.limbs)
    }
}

impl<P: FieldParams> MulAssign for MontyField<P> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<P: FieldParams> Div for MontyField<P> {
    type Output = Self;

    #[allow(clippy::suspicious_arithmetic_impl)]
    #[inline]
    fn div(self, rhs: Self) -> Self {
        self * rhs.inverse()
    }
}

impl<P: FieldParams> DivAssign for MontyField<P> {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl<P: FieldParams> Sum for MontyField<P> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}

impl<P: FieldParams> Product for MontyField<P> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, x| acc * x)
    }
}

impl<P: FieldParams> Display for MontyField<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let canonical = self.to_canonical_limbs();
        write!(
            f,
            "0x{:016x}{:016x}{:016x}{:016x}",
            canonical[3], canonical[2], canonical[1], canonical[0]
        )
    }
}

impl<P: FieldParams> Debug for MontyField<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "MontyField({})", self)
    }
}

impl<P: FieldParams> Serialize for MontyField<P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de, P: FieldParams> Deserialize<'de> for MontyField<P> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        let digits = text.strip_prefix("0x").unwrap_or(&text);
        let value = BigUint::parse_bytes(digits.as_bytes(), 16)
            .ok_or_else(|| D::Error::custom("field element is not hex"))?;
        Self::from_biguint(&value).ok_or_else(|| D::Error::custom("field element out of range"))
    }
}
