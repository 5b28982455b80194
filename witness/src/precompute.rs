//! Windowed lookup tables for fixed-base multiplication inside the circuit.
//!
//! For a base point `B` the table holds `table[i][j] = (j * 2^(8i)) * B` for
//! 32 strides of 8 bits. The circuit multiplies `k * B` by splitting `k`
//! into base-256 digits and adding one entry per stride.

use curve::{Affine, Projective, ScalarBits, ScalarField};
use rayon::prelude::*;
use serde::{Serialize, Serializer};
use tracing::{debug, info_span};

use crate::errors::WitnessError;
use crate::registers::{point_to_registers, PointRegisters};

/// Bits consumed per stride.
pub const STRIDE: usize = 8;
/// Number of strides covering a 256-bit scalar.
pub const NUM_STRIDES: usize = 256 / STRIDE;
/// Entries per stride.
pub const WINDOW_SIZE: usize = 1 << STRIDE;

/// `[NUM_STRIDES][WINDOW_SIZE]` multiples of a base point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrecomputeTable {
    base: Affine,
    strides: Vec<Vec<Affine>>,
}

impl PrecomputeTable {
    /// Build the table for `base`, which must be a non-identity curve point.
    pub fn build(base: &Affine) -> Result<Self, WitnessError> {
        if base.is_infinity() {
            return Err(WitnessError::InvalidPoint(
                "invalid base point: identity".into(),
            ));
        }
        if !base.is_on_curve() {
            return Err(WitnessError::InvalidPoint(format!(
                "invalid base point: ({}, {}) is not on the curve",
                base.x, base.y
            )));
        }

        let _span = info_span!("precompute_table", strides = NUM_STRIDES).entered();

        // 2^(8i) * B for every stride
        let mut stride_bases = Vec::with_capacity(NUM_STRIDES);
        let mut current = Projective::from_affine(base);
        for _ in 0..NUM_STRIDES {
            stride_bases.push(current);
            for _ in 0..STRIDE {
                current = current.double();
            }
        }

        let strides: Vec<Vec<Affine>> = stride_bases.par_iter().map(build_stride).collect();
        debug!(entries = NUM_STRIDES * WINDOW_SIZE, "precomputed table");

        Ok(Self {
            base: *base,
            strides,
        })
    }

    #[inline]
    pub fn base(&self) -> &Affine {
        &self.base
    }

    /// `(window * 2^(8 * stride)) * base`.
    ///
    /// # Panics
    ///
    /// If `stride >= NUM_STRIDES` or `window >= WINDOW_SIZE`.
    #[inline]
    pub fn entry(&self, stride: usize, window: usize) -> &Affine {
        &self.strides[stride][window]
    }

    pub fn strides(&self) -> &[Vec<Affine>] {
        &self.strides
    }

    /// Sum one entry per stride, selected by the base-256 digits of `k`.
    /// Equals `k * base`; this is the computation the circuit performs.
    pub fn lookup_sum(&self, scalar: &ScalarField) -> Affine {
        let mut acc = Projective::INFINITY;
        for (i, stride) in self.strides.iter().enumerate() {
            let digit = scalar.window(i * STRIDE, STRIDE) as usize;
            if digit != 0 {
                acc = acc.add_affine(&stride[digit]);
            }
        }
        acc.to_affine()
    }

    /// Register form `[stride][window][x/y]`; identity entries are zeros.
    pub fn to_registers(&self) -> Vec<Vec<PointRegisters>> {
        self.strides
            .iter()
            .map(|stride| stride.iter().map(point_to_registers).collect())
            .collect()
    }
}

fn build_stride(stride_base: &Projective) -> Vec<Affine> {
    let mut multiples = Vec::with_capacity(WINDOW_SIZE);
    let mut acc = Projective::INFINITY;
    multiples.push(acc);
    for _ in 1..WINDOW_SIZE {
        acc += *stride_base;
        multiples.push(acc);
    }
    Projective::batch_normalize(&multiples)
}

// Serialises as `[32][256][2][4]` decimal strings.
impl Serialize for PrecomputeTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_registers().serialize(serializer)
    }
}
