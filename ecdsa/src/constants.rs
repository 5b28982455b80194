//! Constants used by the signer, the hashing helpers and the encodings.

/// Size of an uncompressed SEC1 public key (`04 || x || y`) in bytes.
pub const PK_SIZE: usize = 65;

/// Size of a serialized secret signing key in bytes.
pub const SK_SIZE: usize = 32;

/// Size of a serialized recoverable signature: `r || s || v`.
pub const SIG_SIZE: usize = 65;

/// Size of an Ethereum address in bytes.
pub const ADDRESS_SIZE: usize = 20;

/// `v` for recovery id 0 in the Ethereum convention.
pub const V_OFFSET: u8 = 27;

/// First `v` value of EIP-155 replay-protected signatures.
pub(crate) const EIP155_OFFSET: u64 = 35;

/// Prefix prepended (with the decimal message length) by `personal_sign`.
pub const PERSONAL_MESSAGE_PREFIX: &str = "\x19Ethereum Signed Message:\n";

/// Message signed with `s` as the key to prove knowledge of `s`.
///
/// Its digest is public and fixed, so the proof carries no information about
/// the original message.
pub const PUBLIC_AUXILIARY_MESSAGE: &str = "This message should be public";
