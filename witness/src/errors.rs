//! Error types for witness preparation.

use std::path::PathBuf;

use curve::CurveError;
use ecdsa::EcdsaError;
use thiserror::Error;

/// Failures of the register codec.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegisterError {
    #[error("value needs {bits} bits, registers hold 256")]
    Overflow { bits: u64 },

    #[error("invalid digit in {0:?}")]
    InvalidDigit(String),

    #[error("negative value {0:?} cannot be encoded")]
    Negative(String),

    #[error("expected {expected} registers, got {actual}")]
    WrongLength { expected: usize, actual: usize },
}

#[derive(Debug, Error)]
pub enum WitnessError {
    #[error("encoding failed: {0}")]
    Encoding(#[from] RegisterError),

    #[error("invalid point: {0}")]
    InvalidPoint(String),

    #[error("verification failed: {0}")]
    VerificationFailed(String),

    #[error("missing circuit artifact {path}; run `{hint}` first")]
    MissingArtifact { path: PathBuf, hint: String },

    #[error("proving backend failed: {0}")]
    Backend(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Signature(#[from] EcdsaError),

    #[error(transparent)]
    Curve(#[from] CurveError),
}
