use rand::distr::{Distribution, StandardUniform};
use rand::Rng;

use crate::monty::{FieldParams, MontyField};

/// Helper trait for sampling random field elements.
pub trait RandomField: Sized {
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self;

    /// Sample until the value is non-zero.
    fn random_nonzero<R: Rng + ?Sized>(rng: &mut R) -> Self;
}

// Rejection sampling over full 256-bit words; both moduli sit close to
// 2^256, so rejections are rare.
impl<P: FieldParams> Distribution<MontyField<P>> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> MontyField<P> {
        loop {
            let limbs: [u64; 4] = rng.random();
            if let Some(value) = MontyField::from_canonical_limbs(limbs) {
                return value;
            }
        }
    }
}

impl<P: FieldParams> RandomField for MontyField<P> {
    #[inline]
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        StandardUniform.sample(rng)
    }

    fn random_nonzero<R: Rng + ?Sized>(rng: &mut R) -> Self {
        loop {
            let value = Self::random(rng);
            if !value.is_zero() {
                return value;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScalarField;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_seeded_sampling_is_deterministic() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);
        let a = ScalarField::random(&mut rng1);
        let b = ScalarField::random(&mut rng2);
        assert_eq!(a, b);
        assert_ne!(a, ScalarField::random(&mut rng1));
    }
}
