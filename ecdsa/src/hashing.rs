//! Keccak-256 helpers in the Ethereum conventions.

use curve::Affine;
use p3_keccak::Keccak256Hash;
use p3_symmetric::CryptographicHasher;

use crate::constants::{ADDRESS_SIZE, PERSONAL_MESSAGE_PREFIX, PUBLIC_AUXILIARY_MESSAGE};
use crate::errors::EcdsaError;

/// Keccak-256 (the pre-standard padding used by Ethereum).
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    Keccak256Hash.hash_iter(data.iter().copied())
}

/// `keccak256("\x19Ethereum Signed Message:\n" || len(message) || message)`,
/// with the length written in decimal.
pub fn hash_personal_message(message: &[u8]) -> [u8; 32] {
    let prefix = format!("{PERSONAL_MESSAGE_PREFIX}{}", message.len());
    let mut buf = Vec::with_capacity(prefix.len() + message.len());
    buf.extend_from_slice(prefix.as_bytes());
    buf.extend_from_slice(message);
    keccak256(&buf)
}

/// Digest of the fixed public message signed in the second signature.
pub fn auxiliary_message_digest() -> [u8; 32] {
    hash_personal_message(PUBLIC_AUXILIARY_MESSAGE.as_bytes())
}

/// Ethereum address of a public key: the last 20 bytes of `keccak256(x || y)`.
pub fn public_key_to_address(point: &Affine) -> Result<[u8; ADDRESS_SIZE], EcdsaError> {
    let xy = point.to_raw_xy_bytes()?;
    let hash = keccak256(&xy);
    let mut address = [0u8; ADDRESS_SIZE];
    address.copy_from_slice(&hash[32 - ADDRESS_SIZE..]);
    Ok(address)
}

#[cfg(test)]
mod tests {
    use super::*;
    use curve::Group;

    #[test]
    fn test_keccak_empty() {
        assert_eq!(
            hex::encode(keccak256(b"")),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn test_personal_message_hello_world() {
        assert_eq!(
            hex::encode(hash_personal_message(b"hello world")),
            "d9eba16ed0ecae432b71fe008c98cc872bb4cc214d3220a36f365326cf807d68"
        );
    }

    #[test]
    fn test_address_of_private_key_one() {
        let address = public_key_to_address(&Affine::generator()).unwrap();
        assert_eq!(
            hex::encode(address),
            "7e5f4552091a69125d5dfcb7b8c2659029395bdf"
        );
        assert!(public_key_to_address(&Affine::INFINITY).is_err());
    }

    #[test]
    fn test_address_of_private_key_two() {
        let point = Affine::generator().mul_u64(2);
        assert_eq!(
            hex::encode(public_key_to_address(&point).unwrap()),
            "2b5ad5c4795c026514f8317c7a215e218dccd6cf"
        );
    }
}
