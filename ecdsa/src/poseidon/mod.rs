//! Poseidon over the BN254 scalar field with the circomlib parameters.
//!
//! Width 9 (eight inputs and a zero capacity element), S-box `x^5`, 8 full
//! rounds split around 63 partial rounds. The output is element 0 of the
//! final state, so a hash of eight 64-bit registers equals what
//! `circomlibjs`' `poseidon(inputs)` returns and what a circom `Poseidon(8)`
//! template constrains.

mod constants;

use core::fmt;

use curve::{FieldParams, MontyField};
use num_bigint::BigUint;

use self::constants::{FULL_ROUNDS, MDS, PARTIAL_ROUNDS, ROUND_CONSTANTS, WIDTH};

/// Number of field elements absorbed per hash.
pub const POSEIDON_INPUTS: usize = WIDTH - 1;

/// Parameters of the BN254 scalar field,
/// r = 21888242871839275222246405745257275088548364400416034343698204186575808495617.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bn254ScalarParams;

impl FieldParams for Bn254ScalarParams {
    const MODULUS: [u64; 4] = [
        0x43e1f593f0000001,
        0x2833e84879b97091,
        0xb85045b68181585d,
        0x30644e72e131a029,
    ];
    const R: [u64; 4] = [
        0xac96341c4ffffffb,
        0x36fc76959f60cd29,
        0x666ea36f7879462e,
        0x0e0a77c19a07df2f,
    ];
    const R2: [u64; 4] = [
        0x1bb8e645ae216da7,
        0x53fe3ab1e35c59e3,
        0x8c49833d53bb8085,
        0x0216d0b17f4e44a5,
    ];
    const MU: u64 = 0xc2e1f593efffffff;
}

/// BN254 scalar field element.
pub type PoseidonField = MontyField<Bn254ScalarParams>;

type State = [PoseidonField; WIDTH];

#[inline]
fn sbox(x: PoseidonField) -> PoseidonField {
    let x2 = x.square();
    x2.square() * x
}

/// Poseidon permutation with its constants in Montgomery form.
///
/// Construct it once and pass it to whatever needs it; converting the round
/// constants is not free.
#[derive(Clone)]
pub struct PoseidonContext {
    round_constants: Vec<PoseidonField>,
    mds: [State; WIDTH],
}

impl PoseidonContext {
    pub fn new() -> Self {
        let round_constants = ROUND_CONSTANTS
            .iter()
            .map(|&limbs| PoseidonField::from_limbs_reduced(limbs))
            .collect();
        let mds = MDS.map(|row| row.map(PoseidonField::from_limbs_reduced));
        Self {
            round_constants,
            mds,
        }
    }

    fn add_round_constants(&self, state: &mut State, round: usize) {
        let constants = &self.round_constants[round * WIDTH..(round + 1) * WIDTH];
        for (element, constant) in state.iter_mut().zip(constants) {
            *element += *constant;
        }
    }

    fn mix(&self, state: &State) -> State {
        self.mds
            .map(|row| row.iter().zip(state).map(|(m, x)| *m * *x).sum())
    }

    fn permute(&self, state: &mut State) {
        let half = FULL_ROUNDS / 2;
        for round in 0..FULL_ROUNDS + PARTIAL_ROUNDS {
            self.add_round_constants(state, round);
            if round < half || round >= half + PARTIAL_ROUNDS {
                state.iter_mut().for_each(|x| *x = sbox(*x));
            } else {
                state[0] = sbox(state[0]);
            }
            *state = self.mix(state);
        }
    }

    pub fn hash(&self, inputs: &[PoseidonField; POSEIDON_INPUTS]) -> PoseidonField {
        let mut state = [PoseidonField::ZERO; WIDTH];
        state[1..].copy_from_slice(inputs);
        self.permute(&mut state);
        state[0]
    }

    /// Hash eight 64-bit registers, one field element each, in order.
    pub fn hash_registers(&self, registers: &[u64; POSEIDON_INPUTS]) -> PoseidonField {
        self.hash(&registers.map(PoseidonField::from_u64))
    }

    /// [`PoseidonContext::hash_registers`] as an integer below the BN254
    /// scalar modulus.
    pub fn hash_registers_to_biguint(&self, registers: &[u64; POSEIDON_INPUTS]) -> BigUint {
        self.hash_registers(registers).to_biguint()
    }
}

impl Default for PoseidonContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PoseidonContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PoseidonContext")
            .field("width", &WIDTH)
            .field("full_rounds", &FULL_ROUNDS)
            .field("partial_rounds", &PARTIAL_ROUNDS)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // circomlibjs `poseidon([1, 2, 3, 4, 5, 6, 7, 8])` and `poseidon([0; 8])`
    const ONE_TO_EIGHT: &str =
        "18604317144381847857886385684060986177838410221561136253933256952257712543953";
    const ALL_ZERO: &str =
        "1524321216038799095937469147836866648978083754965002674906449126183454401066";

    #[test]
    fn test_circomlib_vector_one_to_eight() {
        let ctx = PoseidonContext::new();
        let hash = ctx.hash_registers_to_biguint(&[1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(hash.to_string(), ONE_TO_EIGHT);
    }

    #[test]
    fn test_circomlib_vector_zeros() {
        let ctx = PoseidonContext::default();
        let hash = ctx.hash_registers_to_biguint(&[0; POSEIDON_INPUTS]);
        assert_eq!(hash.to_string(), ALL_ZERO);
    }

    #[test]
    fn test_constants_are_canonical() {
        for limbs in ROUND_CONSTANTS.iter().chain(MDS.iter().flatten()) {
            assert!(PoseidonField::from_canonical_limbs(*limbs).is_some());
        }
    }

    #[test]
    fn test_wide_limbs_reduce_below_modulus() {
        // 2^256 - 1 is more than five times the BN254 scalar modulus
        let reduced = PoseidonField::from_limbs_reduced([u64::MAX; 4]);
        let expected = BigUint::from_bytes_be(&[0xff; 32]) % PoseidonField::modulus_biguint();
        assert_eq!(reduced.to_biguint(), expected);
    }

    #[test]
    fn test_registers_enter_as_single_elements() {
        let ctx = PoseidonContext::new();
        let registers = [u64::MAX, 1, 0, 7, 1 << 63, 2, 3, 4];
        let elements = registers.map(PoseidonField::from_u64);
        assert_eq!(ctx.hash_registers(&registers), ctx.hash(&elements));

        let mut changed = registers;
        changed[7] = 5;
        assert_ne!(ctx.hash_registers(&registers), ctx.hash_registers(&changed));
        assert!(ctx.hash_registers_to_biguint(&registers).bits() <= 254);
    }
}
