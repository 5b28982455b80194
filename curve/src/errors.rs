use thiserror::Error;

/// Errors raised while decoding or constructing curve points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurveError {
    #[error("point is not on the curve")]
    NotOnCurve,

    #[error("point is the identity")]
    Identity,

    #[error("no curve point has this x-coordinate")]
    NoSquareRoot,

    #[error("invalid point encoding: {0}")]
    InvalidEncoding(String),

    #[error("value is not a canonical field element")]
    NonCanonical,

    /// Parameters this crate's secp256k1 arithmetic cannot serve.
    #[error("unsupported curve parameters: {0} differs from secp256k1")]
    UnsupportedParams(&'static str),
}
