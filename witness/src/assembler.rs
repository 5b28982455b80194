//! Composition of derived values into the named inputs of a circuit.

use std::fs;
use std::path::Path;

use curve::Affine;
use ecdsa::{public_key_to_address, ADDRESS_SIZE};
use num_bigint::BigUint;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use tracing::{info, warn};

use crate::errors::WitnessError;
use crate::precompute::PrecomputeTable;
use crate::registers::{point_to_registers, FieldRegisters, PointRegisters, REGISTERS};
use crate::transform::{HiddenSignature, InversionFreeInputs, SaltedDigest};

/// The input shape a circuit expects.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CircuitLayout {
    /// `TPreComputes`, `U`, `s`.
    TPrecomputes,
    /// `T`, `U`, `s`.
    TPoint,
    /// `msg`, `modInvRMultPubKey2`, `modInvRMultGPreComputes`.
    HiddenSignature,
    /// `modInvRMultPubkey2`, `negInvR`, `msghash`, `poseidonHash`,
    /// `keccakHashMsg`, `salt`, `pubkey`.
    SaltedHiddenSignature,
}

impl CircuitLayout {
    pub fn field_names(&self) -> &'static [&'static str] {
        match self {
            CircuitLayout::TPrecomputes => &["TPreComputes", "U", "s"],
            CircuitLayout::TPoint => &["T", "U", "s"],
            CircuitLayout::HiddenSignature => {
                &["msg", "modInvRMultPubKey2", "modInvRMultGPreComputes"]
            }
            CircuitLayout::SaltedHiddenSignature => &[
                "modInvRMultPubkey2",
                "negInvR",
                "msghash",
                "poseidonHash",
                "keccakHashMsg",
                "salt",
                "pubkey",
            ],
        }
    }

    /// Whether the layout needs the second signature.
    pub fn hides_s(&self) -> bool {
        matches!(
            self,
            CircuitLayout::HiddenSignature | CircuitLayout::SaltedHiddenSignature
        )
    }
}

/// One circuit input value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum WitnessValue {
    Registers(FieldRegisters),
    Point(PointRegisters),
    RegisterGroup(Vec<FieldRegisters>),
    Decimal(String),
    Table(Vec<Vec<PointRegisters>>),
}

/// Circuit inputs by field name, in assembly order.
///
/// Serialises as a JSON object with every number as a decimal string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WitnessMapping {
    fields: Vec<(String, WitnessValue)>,
}

impl WitnessMapping {
    fn push(&mut self, name: &str, value: WitnessValue) {
        self.fields.push((name.to_string(), value));
    }

    pub fn get(&self, name: &str) -> Option<&WitnessValue> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn to_json_string(&self) -> Result<String, WitnessError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn write_json(&self, path: &Path) -> Result<(), WitnessError> {
        fs::write(path, self.to_json_string()?)?;
        Ok(())
    }
}

impl Serialize for WitnessMapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Everything [`assemble`] may draw from. Which parts are required depends
/// on the layout.
#[derive(Clone, Debug, Default)]
pub struct AssemblyInputs {
    /// Digest the signature was made over.
    pub digest: [u8; 32],
    pub public_key: Option<Affine>,
    pub inversion_free: Option<InversionFreeInputs>,
    pub hidden: Option<HiddenSignature>,
    pub salted: Option<SaltedDigest>,
}

fn required<'a, T>(
    value: &'a Option<T>,
    layout: CircuitLayout,
    what: &str,
) -> Result<&'a T, WitnessError> {
    value
        .as_ref()
        .ok_or_else(|| WitnessError::Config(format!("layout {layout:?} needs {what}")))
}

/// Build the input mapping for `layout`.
pub fn assemble(
    layout: CircuitLayout,
    inputs: &AssemblyInputs,
) -> Result<WitnessMapping, WitnessError> {
    let mut mapping = WitnessMapping::default();

    match layout {
        CircuitLayout::TPrecomputes | CircuitLayout::TPoint => {
            let derived = required(&inputs.inversion_free, layout, "T and U")?;
            if layout == CircuitLayout::TPrecomputes {
                let table = PrecomputeTable::build(&derived.t)?;
                mapping.push("TPreComputes", WitnessValue::Table(table.to_registers()));
            } else {
                mapping.push("T", WitnessValue::Point(point_to_registers(&derived.t)));
            }
            mapping.push("U", WitnessValue::Point(point_to_registers(&derived.u)));
            mapping.push(
                "s",
                WitnessValue::RegisterGroup(vec![FieldRegisters::from(&derived.s)]),
            );
        }
        CircuitLayout::HiddenSignature => {
            let hidden = required(&inputs.hidden, layout, "the second signature")?;
            let table = hidden.neg_inv_r_g_table()?;
            mapping.push(
                "msg",
                WitnessValue::Registers(FieldRegisters::from_be_bytes(&inputs.digest)),
            );
            mapping.push(
                "modInvRMultPubKey2",
                WitnessValue::Point(point_to_registers(&hidden.mod_inv_r_mult_pub_key2())),
            );
            mapping.push(
                "modInvRMultGPreComputes",
                WitnessValue::Table(table.to_registers()),
            );
        }
        CircuitLayout::SaltedHiddenSignature => {
            let hidden = required(&inputs.hidden, layout, "the second signature")?;
            let salted = required(&inputs.salted, layout, "a salted digest")?;
            let public_key = required(&inputs.public_key, layout, "the public key")?;
            mapping.push(
                "modInvRMultPubkey2",
                WitnessValue::Point(point_to_registers(&hidden.mod_inv_r_mult_pub_key2())),
            );
            mapping.push(
                "negInvR",
                WitnessValue::Registers(FieldRegisters::from(&hidden.neg_inv_r())),
            );
            mapping.push(
                "msghash",
                WitnessValue::Registers(FieldRegisters::from_be_bytes(&salted.msghash)),
            );
            mapping.push(
                "poseidonHash",
                WitnessValue::Decimal(salted.poseidon_hash.to_str_radix(10)),
            );
            mapping.push(
                "keccakHashMsg",
                WitnessValue::Registers(FieldRegisters::from_be_bytes(&salted.keccak_hash_msg)),
            );
            mapping.push(
                "salt",
                WitnessValue::Registers(FieldRegisters::from_be_bytes(&salted.salt)),
            );
            mapping.push(
                "pubkey",
                WitnessValue::Point(point_to_registers(public_key)),
            );
        }
    }

    info!(?layout, fields = mapping.len(), "witness assembled");
    Ok(mapping)
}

/// What the circuit exposes as its public output.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputKind {
    PublicKey,
    Address,
}

/// The public output a correct proof must carry, computed from the signer's
/// public key without the backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExpectedOutput {
    /// Uncompressed SEC1 hex, `04 || x || y`.
    PublicKey(String),
    Address([u8; ADDRESS_SIZE]),
}

impl ExpectedOutput {
    pub fn from_public_key(kind: OutputKind, public_key: &Affine) -> Result<Self, WitnessError> {
        Ok(match kind {
            OutputKind::PublicKey => ExpectedOutput::PublicKey(public_key.to_hex()?),
            OutputKind::Address => ExpectedOutput::Address(public_key_to_address(public_key)?),
        })
    }

    /// Re-derive the output from the backend's public signals and compare.
    pub fn check(&self, public_signals: &[String]) -> Result<(), WitnessError> {
        let derived = self.derive(public_signals)?;
        let expected = self.to_string();
        if derived == expected {
            info!(output = %derived, "circuit output matches");
            Ok(())
        } else {
            warn!(%expected, %derived, "circuit output mismatch");
            Err(WitnessError::VerificationFailed(format!(
                "circuit output {derived} does not match expected {expected}"
            )))
        }
    }

    fn derive(&self, public_signals: &[String]) -> Result<String, WitnessError> {
        match self {
            ExpectedOutput::PublicKey(_) => {
                if public_signals.len() < 2 * REGISTERS {
                    return Err(WitnessError::VerificationFailed(format!(
                        "expected {} public signals for a public key, got {}",
                        2 * REGISTERS,
                        public_signals.len()
                    )));
                }
                let (xs, ys) = public_signals[..2 * REGISTERS].split_at(REGISTERS);
                let x = FieldRegisters::from_decimal_signals(xs)?;
                let y = FieldRegisters::from_decimal_signals(ys)?;
                Ok(format!("04{}{}", x.to_hex(), y.to_hex()))
            }
            ExpectedOutput::Address(_) => {
                let signal = public_signals.first().ok_or_else(|| {
                    WitnessError::VerificationFailed("no public signals".into())
                })?;
                let bad_signal =
                    || WitnessError::VerificationFailed(format!("bad signal {signal:?}"));
                let value = BigUint::parse_bytes(signal.trim().as_bytes(), 10)
                    .ok_or_else(bad_signal)?;
                if value.bits() > 8 * ADDRESS_SIZE as u64 {
                    return Err(WitnessError::VerificationFailed(format!(
                        "signal {signal} is wider than an address"
                    )));
                }
                Ok(format!("{value:040x}"))
            }
        }
    }
}

impl std::fmt::Display for ExpectedOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExpectedOutput::PublicKey(hex) => f.write_str(hex),
            ExpectedOutput::Address(address) => f.write_str(&hex::encode(address)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecdsa::{hash_personal_message, SigningKey};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const TEST_KEY: &str = "f5b552f608f5b552f608f5b552f6082ff5b552f608f5b552f608f5b552f6082f";
    const TEST_PUBKEY: &str = "04b61ed9f3c64689e71767160a7b2adfa3294fe562976b97fd06bb87a695bbf435\
                               f3359c7554465362e4ab23d102722d7eb3727d75d6b23bae630f4f99d68b9c91";
    const TEST_ADDRESS: &str = "efcbe272b0febe3edadc034af7a3f53ed35aaa53";

    fn inputs() -> AssemblyInputs {
        let mut rng = StdRng::seed_from_u64(3);
        let key = SigningKey::from_hex(TEST_KEY).unwrap();
        let digest = hash_personal_message(b"hello world");
        let sig = key.sign_prehash(&mut rng, &digest).unwrap();
        AssemblyInputs {
            digest,
            public_key: Some(*key.verifying_key().as_affine()),
            inversion_free: Some(InversionFreeInputs::derive(&sig, &digest).unwrap()),
            ..Default::default()
        }
    }

    fn signals_for(hex: &str) -> Vec<String> {
        let x = FieldRegisters::from_hex_str(&hex[2..66]).unwrap();
        let y = FieldRegisters::from_hex_str(&hex[66..]).unwrap();
        x.to_decimal_strings()
            .into_iter()
            .chain(y.to_decimal_strings())
            .collect()
    }

    #[test]
    fn test_t_point_layout() {
        let inputs = inputs();
        let mapping = assemble(CircuitLayout::TPoint, &inputs).unwrap();
        let names: Vec<_> = mapping.names().collect();
        assert_eq!(names, CircuitLayout::TPoint.field_names());

        let text = mapping.to_json_string().unwrap();
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        let s = json["s"].as_array().unwrap();
        assert_eq!(s.len(), 1);
        assert_eq!(s[0].as_array().unwrap().len(), REGISTERS);
        assert_eq!(json["U"].as_array().unwrap().len(), 2);
        assert!(json["T"][0][0].is_string());
    }

    #[test]
    fn test_t_precomputes_layout() {
        let inputs = inputs();
        let mapping = assemble(CircuitLayout::TPrecomputes, &inputs).unwrap();
        let Some(WitnessValue::Table(table)) = mapping.get("TPreComputes") else {
            panic!("missing table");
        };
        assert_eq!(table.len(), 32);
        assert_eq!(table[0].len(), 256);
        let t = inputs.inversion_free.unwrap().t;
        assert_eq!(table[0][1], point_to_registers(&t));
    }

    #[test]
    fn test_missing_inputs_are_reported() {
        let result = assemble(CircuitLayout::HiddenSignature, &inputs());
        assert!(matches!(result, Err(WitnessError::Config(_))));
    }

    #[test]
    fn test_public_key_output_check() {
        let q = Affine::from_hex(TEST_PUBKEY).unwrap();
        let expected = ExpectedOutput::from_public_key(OutputKind::PublicKey, &q).unwrap();
        assert_eq!(expected.to_string(), TEST_PUBKEY);

        let mut signals = signals_for(TEST_PUBKEY);
        expected.check(&signals).unwrap();

        signals[3] = "0".into();
        assert!(matches!(
            expected.check(&signals),
            Err(WitnessError::VerificationFailed(_))
        ));
        assert!(expected.check(&signals[..7]).is_err());
    }

    #[test]
    fn test_address_output_check() {
        let q = Affine::from_hex(TEST_PUBKEY).unwrap();
        let expected = ExpectedOutput::from_public_key(OutputKind::Address, &q).unwrap();
        assert_eq!(expected.to_string(), TEST_ADDRESS);

        let decimal = BigUint::parse_bytes(TEST_ADDRESS.as_bytes(), 16)
            .unwrap()
            .to_str_radix(10);
        expected.check(&[decimal, "1".into()]).unwrap();
        assert!(expected.check(&["12345".into()]).is_err());
        assert!(expected.check(&[]).is_err());
    }
}
