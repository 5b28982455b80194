use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::errors::CurveError;
use crate::{Affine, BaseField, Group, Projective, ScalarField};

/// Domain parameters of a curve instance: secp256k1 with a chosen generator.
///
/// Signing on "the curve whose generator is R" only swaps the generator; the
/// field, order and cofactor stay those of secp256k1.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurveParams {
    pub prime: BigUint,
    pub order: BigUint,
    pub cofactor: u64,
    generator: Affine,
}

impl CurveParams {
    pub fn secp256k1() -> Self {
        Self {
            prime: BaseField::modulus_biguint(),
            order: ScalarField::modulus_biguint(),
            cofactor: 1,
            generator: Affine::generator(),
        }
    }

    /// secp256k1 with `generator` in place of G.
    pub fn with_generator(generator: Affine) -> Result<Self, CurveError> {
        check_generator(&generator)?;
        Ok(Self {
            generator,
            ..Self::secp256k1()
        })
    }

    /// Check that the fixed secp256k1 arithmetic can serve these parameters.
    ///
    /// The fields are public and deserialisable, so a value may carry a
    /// prime, order or cofactor the field types cannot represent, or a
    /// generator off the curve.
    pub fn ensure_supported(&self) -> Result<(), CurveError> {
        if self.prime != BaseField::modulus_biguint() {
            return Err(CurveError::UnsupportedParams("prime"));
        }
        if self.order != ScalarField::modulus_biguint() {
            return Err(CurveError::UnsupportedParams("order"));
        }
        if self.cofactor != 1 {
            return Err(CurveError::UnsupportedParams("cofactor"));
        }
        check_generator(&self.generator)
    }

    #[inline]
    pub fn generator(&self) -> &Affine {
        &self.generator
    }

    /// k times the configured generator.
    pub fn mul_generator(&self, scalar: &ScalarField) -> Affine {
        Projective::from_affine(&self.generator)
            .scalar_mul(scalar)
            .to_affine()
    }
}

fn check_generator(generator: &Affine) -> Result<(), CurveError> {
    if generator.is_infinity() {
        return Err(CurveError::Identity);
    }
    if !generator.is_on_curve() {
        return Err(CurveError::NotOnCurve);
    }
    Ok(())
}

impl Default for CurveParams {
    fn default() -> Self {
        Self::secp256k1()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_parameters() {
        let params = CurveParams::secp256k1();
        assert_eq!(params.cofactor, 1);
        assert_eq!(
            params.order.to_str_radix(16),
            "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141"
        );
        assert_eq!(
            params.prime.to_str_radix(16),
            "fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f"
        );
        assert_eq!(params.generator(), &Affine::generator());
        assert_eq!(params.ensure_supported(), Ok(()));
    }

    #[test]
    fn test_custom_generator() {
        let r = Affine::generator().mul_u64(12345);
        let params = CurveParams::with_generator(r).unwrap();
        let k = ScalarField::from_u64(99);
        assert_eq!(params.mul_generator(&k), r.mul_u64(99));
        assert_eq!(params.order, CurveParams::secp256k1().order);
    }

    #[test]
    fn test_rejects_bad_generator() {
        assert_eq!(
            CurveParams::with_generator(Affine::INFINITY),
            Err(CurveError::Identity)
        );
        let g = Affine::generator();
        let off_curve = Affine::new(g.x, g.x);
        assert_eq!(
            CurveParams::with_generator(off_curve),
            Err(CurveError::NotOnCurve)
        );
    }

    #[test]
    fn test_ensure_supported_rejects_foreign_parameters() {
        let mut params = CurveParams::secp256k1();
        params.order += 2u32;
        assert_eq!(
            params.ensure_supported(),
            Err(CurveError::UnsupportedParams("order"))
        );

        let mut params = CurveParams::secp256k1();
        params.prime = BigUint::from(7u32);
        assert_eq!(
            params.ensure_supported(),
            Err(CurveError::UnsupportedParams("prime"))
        );

        let mut params = CurveParams::secp256k1();
        params.cofactor = 4;
        assert_eq!(
            params.ensure_supported(),
            Err(CurveError::UnsupportedParams("cofactor"))
        );
    }
}
