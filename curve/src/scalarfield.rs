//! Scalar field of secp256k1.
//! n = 0xfffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141

use crate::group::ScalarBits;
use crate::monty::{FieldParams, MontyField};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Secp256k1ScalarParams;

impl FieldParams for Secp256k1ScalarParams {
    const MODULUS: [u64; 4] = [
        0xbfd25e8cd0364141,
        0xbaaedce6af48a03b,
        0xfffffffffffffffe,
        0xffffffffffffffff,
    ];
    const R: [u64; 4] = [
        0x402da1732fc9bebf,
        0x4551231950b75fc4,
        0x0000000000000001,
        0,
    ];
    const R2: [u64; 4] = [
        0x896cf21467d7d140,
        0x741496c20e7cf878,
        0xe697f5e45bcd07c6,
        0x9d671cd581c69bc5,
    ];
    const MU: u64 = 0x4b0dff665588b13f;
}

/// secp256k1 group order element.
pub type ScalarField = MontyField<Secp256k1ScalarParams>;

/// floor(n / 2), the bound for low-s signatures.
pub const HALF_ORDER: [u64; 4] = [
    0xdfe92f46681b20a0,
    0x5d576e7357a4501d,
    0xffffffffffffffff,
    0x7fffffffffffffff,
];

impl ScalarBits for ScalarField {
    #[inline]
    fn to_u64_limbs(&self) -> [u64; 4] {
        self.to_canonical_limbs()
    }
}

impl ScalarField {
    /// Whether the canonical value exceeds n / 2.
    pub fn is_high(&self) -> bool {
        let limbs = self.to_canonical_limbs();
        for i in (0..4).rev() {
            if limbs[i] != HALF_ORDER[i] {
                return limbs[i] > HALF_ORDER[i];
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_one() {
        assert_eq!(ScalarField::ZERO + ScalarField::ZERO, ScalarField::ZERO);
        assert_eq!(ScalarField::ONE * ScalarField::ONE, ScalarField::ONE);
        assert_eq!(ScalarField::ZERO * ScalarField::ONE, ScalarField::ZERO);
        assert_eq!(ScalarField::ONE.to_canonical_limbs(), [1, 0, 0, 0]);
    }

    #[test]
    fn test_arithmetic() {
        let a = ScalarField::from_u64(6);
        let b = ScalarField::from_u64(7);
        assert_eq!(a * b, ScalarField::from_u64(42));
        assert_eq!(b - a, ScalarField::ONE);
        assert_eq!(a + b, ScalarField::from_u64(13));
    }

    #[test]
    fn test_negation_wraps_to_order() {
        let one = ScalarField::ONE;
        let neg = -one;
        let mut expected = Secp256k1ScalarParams::MODULUS;
        expected[0] -= 1;
        assert_eq!(neg.to_canonical_limbs(), expected);
        assert_eq!(neg + one, ScalarField::ZERO);
    }

    #[test]
    fn test_inverse() {
        let a = ScalarField::from_u64(0x1234_5678_9abc_def0);
        assert_eq!(a * a.inverse(), ScalarField::ONE);
        assert!(ScalarField::ZERO.try_inverse().is_none());
    }

    #[test]
    fn test_near_modulus_products() {
        // (n - 1)^2 = 1 mod n
        let minus_one = -ScalarField::ONE;
        assert_eq!(minus_one * minus_one, ScalarField::ONE);
        let minus_two = minus_one - ScalarField::ONE;
        assert_eq!(minus_two * minus_one, ScalarField::from_u64(2));
    }

    #[test]
    fn test_reduced_parsing() {
        let all_ones = [0xffu8; 32];
        assert!(ScalarField::from_be_bytes(&all_ones).is_none());
        let reduced = ScalarField::from_be_bytes_reduced(&all_ones);
        // 2^256 - 1 - n
        let expected = ScalarField::from_canonical_limbs([
            0x402da1732fc9bebe,
            0x4551231950b75fc4,
            0x0000000000000001,
            0,
        ])
        .unwrap();
        assert_eq!(reduced, expected);
    }

    #[test]
    fn test_bytes_round_trip() {
        let a = ScalarField::from_u64(0xdead_beef) * ScalarField::from_u64(0xfeed_f00d_1234);
        let bytes = a.to_be_bytes();
        assert_eq!(ScalarField::from_be_bytes(&bytes), Some(a));
        assert_eq!(ScalarField::from_biguint(&a.to_biguint()), Some(a));
    }

    #[test]
    fn test_hex_deserialize_takes_one_prefix() {
        use serde::de::value::{Error, StrDeserializer};
        use serde::Deserialize;

        let parse = |text: &str| ScalarField::deserialize(StrDeserializer::<Error>::new(text));
        assert_eq!(parse("0x05").unwrap(), ScalarField::from_u64(5));
        assert_eq!(parse("05").unwrap(), ScalarField::from_u64(5));
        assert!(parse("0x0x5").is_err());
    }

    #[test]
    fn test_high_s() {
        let half = ScalarField::from_canonical_limbs(HALF_ORDER).unwrap();
        assert!(!half.is_high());
        assert!((half + ScalarField::ONE).is_high());
        assert!(!ScalarField::ONE.is_high());
    }
}
