//! The secp256k1 elliptic curve.
//!
//! This crate provides Montgomery-form base and scalar fields, affine and
//! Jacobian curve points, SEC1 encoding, point decompression and helpers for
//! random sampling. `CurveParams` carries an explicit generator so callers can
//! work on secp256k1 with a substitute base point.

mod affine;
mod basefield;
mod errors;
mod group;
mod monty;
mod msm;
mod params;
mod projective;
mod random;
mod scalarfield;

pub use affine::{Affine, SEC1_UNCOMPRESSED_TAG};
pub use basefield::{BaseField, Secp256k1BaseParams};
pub use errors::CurveError;
pub use group::{Group, ScalarBits};
pub use monty::{FieldParams, MontyField};
pub use msm::double_scalar_mul;
pub use params::CurveParams;
pub use projective::Projective;
pub use random::RandomField;
pub use scalarfield::{ScalarField, Secp256k1ScalarParams, HALF_ORDER};
