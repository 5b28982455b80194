//! Error types for signing, verification and recovery.

use curve::CurveError;
use thiserror::Error;

/// Errors that can occur during signing, verification and key recovery.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EcdsaError {
    /// A point at infinity or an off-curve point was encountered where a valid
    /// curve point was expected.
    ///
    /// Typical causes are a verifying key at infinity, or an `r` whose
    /// candidate x-coordinate has no point on the curve.
    #[error("invalid point: {0}")]
    InvalidPoint(String),

    /// A secret key, `r` or `s` was zero (or reduced to zero).
    #[error("{0} must be non-zero")]
    ZeroScalar(&'static str),

    /// The `v` byte cannot be mapped to a recovery id.
    #[error("invalid recovery id: v = {0}")]
    InvalidRecoveryId(u64),

    /// Malformed signature or key bytes.
    #[error("invalid signature encoding: {0}")]
    InvalidSignature(String),

    #[error(transparent)]
    Curve(#[from] CurveError),
}
