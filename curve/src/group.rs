//! Operations shared by the affine and Jacobian representations.

use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Bit access to a scalar in canonical form.
pub trait ScalarBits {
    /// Canonical value as little-endian 64-bit limbs.
    fn to_u64_limbs(&self) -> [u64; 4];

    /// The `width`-bit digit starting at bit `offset`, for `width <= 64`.
    /// Bits past 255 read as zero.
    fn window(&self, offset: usize, width: usize) -> u64 {
        let limbs = self.to_u64_limbs();
        let mask = if width == 64 {
            u64::MAX
        } else {
            (1u64 << width) - 1
        };
        let (index, shift) = (offset / 64, offset % 64);
        if index >= 4 {
            return 0;
        }

        let mut digit = limbs[index] >> shift;
        if shift != 0 && shift + width > 64 && index + 1 < 4 {
            digit |= limbs[index + 1] << (64 - shift);
        }
        digit & mask
    }
}

pub trait Group:
    Sized + Copy + Add<Output = Self> + AddAssign + Sub<Output = Self> + SubAssign + Neg<Output = Self>
{
    type Scalar: ScalarBits;

    fn identity() -> Self;
    fn is_identity(&self) -> bool;
    fn generator() -> Self;
    fn double(&self) -> Self;
    fn negate(&self) -> Self;

    #[inline]
    fn mul_generator(scalar: &Self::Scalar) -> Self {
        Self::generator().scalar_mul(scalar)
    }

    /// Double-and-add from the most significant bit.
    fn scalar_mul(&self, scalar: &Self::Scalar) -> Self {
        (0..256).rev().fold(Self::identity(), |acc, bit| {
            let acc = acc.double();
            if scalar.window(bit, 1) == 1 {
                acc + *self
            } else {
                acc
            }
        })
    }

    fn mul_u64(&self, n: u64) -> Self {
        let bits = 64 - n.leading_zeros();
        (0..bits).rev().fold(Self::identity(), |acc, bit| {
            let acc = acc.double();
            if (n >> bit) & 1 == 1 {
                acc + *self
            } else {
                acc
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScalarField;

    #[test]
    fn test_window_within_and_across_limbs() {
        let k = ScalarField::from_canonical_limbs([0xf0, 0xab, 0, 0x8000_0000_0000_0000]).unwrap();
        assert_eq!(k.window(0, 8), 0xf0);
        assert_eq!(k.window(4, 4), 0xf);
        assert_eq!(k.window(64, 8), 0xab);
        // bits 60..68 span limbs 0 and 1
        assert_eq!(k.window(60, 8), 0xb0);
        assert_eq!(k.window(255, 1), 1);
        assert_eq!(k.window(256, 8), 0);
    }
}
