//! 256-bit values as four 64-bit circuit registers.
//!
//! The circuit takes every 256-bit quantity as 4 registers, least-significant
//! register first. Textual output is decimal, which is what the proving
//! backend expects for field elements.

use core::fmt;

use curve::{Affine, BaseField, ScalarField};
use num_bigint::BigUint;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::RegisterError;

/// Number of 64-bit registers per 256-bit value.
pub const REGISTERS: usize = 4;

const REGISTER_HEX_CHARS: usize = 16;
const VALUE_HEX_CHARS: usize = REGISTERS * REGISTER_HEX_CHARS;

/// A 256-bit value as 4 x 64-bit registers, least-significant first.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FieldRegisters(pub [u64; REGISTERS]);

/// `[x, y]` registers of a curve point.
pub type PointRegisters = [FieldRegisters; 2];

/// Split a value into registers.
///
/// An absent or zero value gives four zero registers. Otherwise the value is
/// rendered as 64 hex characters and cut into 16-character chunks from the
/// most-significant end; each chunk is prepended to the output, so the
/// least-significant register comes first.
pub fn split_to_registers(value: Option<&BigUint>) -> Result<FieldRegisters, RegisterError> {
    let value = match value {
        Some(value) if value.bits() > 0 => value,
        _ => return Ok(FieldRegisters::ZERO),
    };
    if value.bits() > 256 {
        return Err(RegisterError::Overflow { bits: value.bits() });
    }

    let digits = value.to_str_radix(16);
    let hex = format!("{:0>width$}", digits, width = VALUE_HEX_CHARS);
    let mut registers = [0u64; REGISTERS];
    for k in 0..REGISTERS {
        let chunk = &hex[k * REGISTER_HEX_CHARS..(k + 1) * REGISTER_HEX_CHARS];
        registers[REGISTERS - 1 - k] = u64::from_str_radix(chunk, 16)
            .map_err(|_| RegisterError::InvalidDigit(chunk.to_string()))?;
    }

    Ok(FieldRegisters(registers))
}

/// Concatenate registers as 16-digit zero-padded hex, in the given order.
///
/// Pass most-significant-first registers to get the value's hex string.
pub fn registers_to_hex(registers: &[u64]) -> String {
    registers
        .iter()
        .map(|register| format!("{register:016x}"))
        .collect()
}

impl FieldRegisters {
    pub const ZERO: Self = Self([0; REGISTERS]);

    pub fn from_biguint(value: &BigUint) -> Result<Self, RegisterError> {
        split_to_registers(Some(value))
    }

    /// Parse hex text, with or without `0x`. Empty text encodes zero.
    pub fn from_hex_str(text: &str) -> Result<Self, RegisterError> {
        Self::parse(text, 16)
    }

    /// Parse decimal text. Empty text encodes zero.
    pub fn from_decimal_str(text: &str) -> Result<Self, RegisterError> {
        Self::parse(text, 10)
    }

    fn parse(text: &str, radix: u32) -> Result<Self, RegisterError> {
        let trimmed = text.trim();
        if trimmed.starts_with('-') {
            return Err(RegisterError::Negative(text.to_string()));
        }
        let digits = match radix {
            16 => trimmed.strip_prefix("0x").unwrap_or(trimmed),
            _ => trimmed,
        };
        if digits.is_empty() {
            return Ok(Self::ZERO);
        }
        let value = BigUint::parse_bytes(digits.as_bytes(), radix)
            .ok_or_else(|| RegisterError::InvalidDigit(text.to_string()))?;
        split_to_registers(Some(&value))
    }

    /// Rebuild registers from 4 decimal public signals, least-significant
    /// first.
    pub fn from_decimal_signals(signals: &[String]) -> Result<Self, RegisterError> {
        if signals.len() != REGISTERS {
            return Err(RegisterError::WrongLength {
                expected: REGISTERS,
                actual: signals.len(),
            });
        }
        let mut registers = [0u64; REGISTERS];
        for (register, signal) in registers.iter_mut().zip(signals) {
            *register = parse_register(signal)?;
        }
        Ok(Self(registers))
    }

    /// Reverse to most-significant-first and join as hex.
    pub fn to_hex(&self) -> String {
        let mut ordered = self.0;
        ordered.reverse();
        registers_to_hex(&ordered)
    }

    pub fn to_biguint(&self) -> BigUint {
        self.0
            .iter()
            .rev()
            .fold(BigUint::ZERO, |acc, &register| (acc << 64) + BigUint::from(register))
    }

    pub fn to_decimal_strings(&self) -> [String; REGISTERS] {
        self.0.map(|register| register.to_string())
    }

    pub fn from_be_bytes(bytes: &[u8; 32]) -> Self {
        let mut registers = [0u64; REGISTERS];
        for (i, chunk) in bytes.rchunks_exact(8).enumerate() {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            registers[i] = u64::from_be_bytes(word);
        }
        Self(registers)
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0; REGISTERS]
    }
}

fn parse_register(signal: &str) -> Result<u64, RegisterError> {
    let trimmed = signal.trim();
    if trimmed.starts_with('-') {
        return Err(RegisterError::Negative(signal.to_string()));
    }
    let value = BigUint::parse_bytes(trimmed.as_bytes(), 10)
        .ok_or_else(|| RegisterError::InvalidDigit(signal.to_string()))?;
    if value.bits() > 64 {
        return Err(RegisterError::Overflow { bits: value.bits() });
    }
    Ok(value.iter_u64_digits().next().unwrap_or(0))
}

impl From<&ScalarField> for FieldRegisters {
    fn from(value: &ScalarField) -> Self {
        Self(value.to_canonical_limbs())
    }
}

impl From<&BaseField> for FieldRegisters {
    fn from(value: &BaseField) -> Self {
        Self(value.to_canonical_limbs())
    }
}

/// `[x, y]` registers of a point; the identity encodes as zeros.
pub fn point_to_registers(point: &Affine) -> PointRegisters {
    if point.is_infinity() {
        return [FieldRegisters::ZERO; 2];
    }
    [FieldRegisters::from(&point.x), FieldRegisters::from(&point.y)]
}

impl fmt::Display for FieldRegisters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.to_decimal_strings();
        write!(f, "[{a}, {b}, {c}, {d}]")
    }
}

impl Serialize for FieldRegisters {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_decimal_strings().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for FieldRegisters {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let signals = Vec::<String>::deserialize(deserializer)?;
        Self::from_decimal_signals(&signals).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use curve::Group;
    use test_case::test_case;

    const ORDER_HEX: &str = "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141";

    #[test_case("1", ["1", "0", "0", "0"] ; "one")]
    #[test_case("10000000000000000", ["0", "1", "0", "0"] ; "two to the sixty-four")]
    #[test_case("0102030405060708090a0b0c0d0e0f10", ["651345242494996240", "72623859790382856", "0", "0"] ; "sixteen bytes")]
    #[test_case(ORDER_HEX, ["13822214165235122497", "13451932020343611451", "18446744073709551614", "18446744073709551615"] ; "group order")]
    fn test_split_known_values(hex: &str, expected: [&str; 4]) {
        let registers = FieldRegisters::from_hex_str(hex).unwrap();
        assert_eq!(registers.to_decimal_strings(), expected.map(String::from));
    }

    #[test]
    fn test_absent_and_zero() {
        assert_eq!(split_to_registers(None).unwrap(), FieldRegisters::ZERO);
        assert_eq!(
            split_to_registers(Some(&BigUint::ZERO)).unwrap(),
            FieldRegisters::ZERO
        );
        assert_eq!(
            FieldRegisters::from_hex_str("").unwrap(),
            FieldRegisters::ZERO
        );
        assert_eq!(
            FieldRegisters::from_decimal_str("").unwrap(),
            FieldRegisters::ZERO
        );
    }

    #[test]
    fn test_round_trip() {
        let value = BigUint::parse_bytes(ORDER_HEX.as_bytes(), 16).unwrap() - 12345u32;
        let registers = split_to_registers(Some(&value)).unwrap();
        assert_eq!(registers.to_biguint(), value);
        let padded = format!("{:0>64}", value.to_str_radix(16));
        assert_eq!(registers.to_hex(), padded);

        let max = (BigUint::from(1u8) << 256) - 1u8;
        assert_eq!(split_to_registers(Some(&max)).unwrap().to_biguint(), max);
    }

    #[test]
    fn test_overflow() {
        let too_big = BigUint::from(1u8) << 256;
        assert_eq!(
            split_to_registers(Some(&too_big)),
            Err(RegisterError::Overflow { bits: 257 })
        );
    }

    #[test]
    fn test_bad_text() {
        assert!(matches!(
            FieldRegisters::from_hex_str("xyz"),
            Err(RegisterError::InvalidDigit(_))
        ));
        assert!(matches!(
            FieldRegisters::from_decimal_str("-5"),
            Err(RegisterError::Negative(_))
        ));
        assert!(matches!(
            FieldRegisters::from_decimal_str("12a"),
            Err(RegisterError::InvalidDigit(_))
        ));
    }

    #[test]
    fn test_hex_prefix_is_stripped_once() {
        assert_eq!(
            FieldRegisters::from_hex_str("0x05").unwrap(),
            FieldRegisters::from_hex_str("5").unwrap()
        );
        assert!(matches!(
            FieldRegisters::from_hex_str("0x0x5"),
            Err(RegisterError::InvalidDigit(_))
        ));
    }

    #[test]
    fn test_registers_to_hex_pads() {
        assert_eq!(
            registers_to_hex(&[0, 1, 0xabc, u64::MAX]),
            "0000000000000000\
             0000000000000001\
             0000000000000abc\
             ffffffffffffffff"
        );
    }

    #[test]
    fn test_public_signals() {
        let signals: Vec<String> = ["1", "2", "3", "18446744073709551615"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let registers = FieldRegisters::from_decimal_signals(&signals).unwrap();
        assert_eq!(registers, FieldRegisters([1, 2, 3, u64::MAX]));

        assert_eq!(
            FieldRegisters::from_decimal_signals(&signals[..3]),
            Err(RegisterError::WrongLength {
                expected: 4,
                actual: 3
            })
        );
        let too_wide = vec!["18446744073709551616".to_string(); 4];
        assert!(matches!(
            FieldRegisters::from_decimal_signals(&too_wide),
            Err(RegisterError::Overflow { .. })
        ));
    }

    #[test]
    fn test_field_conversions_match_codec() {
        let scalar = -ScalarField::from_u64(77);
        let via_codec = split_to_registers(Some(&scalar.to_biguint())).unwrap();
        assert_eq!(FieldRegisters::from(&scalar), via_codec);
        let bytes = scalar.to_be_bytes();
        assert_eq!(FieldRegisters::from_be_bytes(&bytes), via_codec);

        let g = Affine::generator();
        let [x, y] = point_to_registers(&g);
        assert_eq!(x.to_biguint(), g.x.to_biguint());
        assert_eq!(y.to_biguint(), g.y.to_biguint());
        assert_eq!(
            point_to_registers(&Affine::INFINITY),
            [FieldRegisters::ZERO; 2]
        );
        let identity = point_to_registers(&g.mul_u64(0));
        assert!(identity.iter().all(|r| r.is_zero()));
    }

    #[test]
    fn test_serde_decimal_strings() {
        let registers = FieldRegisters([1, 0, 0, u64::MAX]);
        let json = serde_json::to_string(&registers).unwrap();
        assert_eq!(json, r#"["1","0","0","18446744073709551615"]"#);
        let decoded: FieldRegisters = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, registers);
    }
}
