use crate::group::ScalarBits;
use crate::{Affine, Projective, ScalarField};

fn window_table(point: &Affine) -> Vec<Projective> {
    let base = Projective::from_affine(point);
    let mut table = Vec::with_capacity(256);
    table.push(Projective::INFINITY);
    table.push(base);
    for i in 2..256 {
        let next = table[i - 1] + base;
        table.push(next);
    }
    table
}

/// Compute a * P + b * Q with interleaved 8-bit windows (Shamir's trick).
pub fn double_scalar_mul(a: &ScalarField, p: &Affine, b: &ScalarField, q: &Affine) -> Affine {
    let p_table = window_table(p);
    let q_table = window_table(q);

    let mut result = Projective::INFINITY;
    for offset in (0..256).step_by(8).rev() {
        for _ in 0..8 {
            result = result.double();
        }

        let a_digit = a.window(offset, 8) as usize;
        if a_digit != 0 {
            result += p_table[a_digit];
        }
        let b_digit = b.window(offset, 8) as usize;
        if b_digit != 0 {
            result += q_table[b_digit];
        }
    }

    result.to_affine()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Group;

    #[test]
    fn test_matches_separate_multiplications() {
        let g = Affine::generator();
        let p = g.mul_u64(0xabcdef);
        let a = ScalarField::from_u64(0x1111_2222_3333_4444) * ScalarField::from_u64(0x5555);
        let b = -ScalarField::from_u64(77);

        let expected = g.scalar_mul(&a) + p.scalar_mul(&b);
        assert_eq!(double_scalar_mul(&a, &g, &b, &p), expected);
    }

    #[test]
    fn test_cancellation_gives_identity() {
        let g = Affine::generator();
        let k = ScalarField::from_u64(31337);
        let p = g.scalar_mul(&k);
        // k*G - 1*P = O
        let result = double_scalar_mul(&k, &g, &(-ScalarField::ONE), &p);
        assert!(result.is_infinity());
    }
}
