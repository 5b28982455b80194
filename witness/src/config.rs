//! Circuit variants as configuration.
//!
//! A variant is a layout, an output kind and a message-hash scheme plus the
//! compiled artifacts. Built-in presets cover the known circuits; anything
//! else can be described in TOML:
//!
//! ```toml
//! circuit = "ecdsa_verify"
//! layout = "t_precomputes"
//! output_kind = "public_key"
//! message_hash = "keccak"
//! build_hint = "yarn build:ecdsa_verify"
//!
//! [artifacts]
//! wasm = "build/ecdsa_verify/build_ecdsa_verify_js/build_ecdsa_verify.wasm"
//! zkey = "build/ecdsa_verify/build_ecdsa_verify.zkey"
//! vkey = "build/ecdsa_verify/verification_key.json"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::assembler::{CircuitLayout, OutputKind};
use crate::backend::CircuitArtifacts;
use crate::errors::WitnessError;

pub const PRESET_NAMES: [&str; 5] = [
    "ecdsa_verify",
    "ecdsa_verify_pubkey_to_addr",
    "ecdsa_verify_no_precompute",
    "verify_pubkey2",
    "hidden_signature_addr",
];

/// How the signed digest is obtained from the user's message.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageHashKind {
    /// Ethereum personal-message hash of the message.
    #[default]
    Keccak,
    /// Poseidon over a salt and the message hash, then the personal-message
    /// hash of the Poseidon output's hex.
    PoseidonThenKeccak,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArtifactPaths {
    pub wasm: PathBuf,
    pub zkey: PathBuf,
    pub vkey: PathBuf,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WitnessConfig {
    pub circuit: String,
    pub layout: CircuitLayout,
    pub output_kind: OutputKind,
    #[serde(default)]
    pub message_hash: MessageHashKind,
    pub build_hint: String,
    pub artifacts: ArtifactPaths,
}

impl WitnessConfig {
    /// A built-in circuit variant by name.
    pub fn preset(name: &str) -> Result<Self, WitnessError> {
        let (layout, output_kind, message_hash) = match name {
            "ecdsa_verify" => (
                CircuitLayout::TPrecomputes,
                OutputKind::PublicKey,
                MessageHashKind::Keccak,
            ),
            "ecdsa_verify_pubkey_to_addr" => (
                CircuitLayout::TPrecomputes,
                OutputKind::Address,
                MessageHashKind::Keccak,
            ),
            "ecdsa_verify_no_precompute" => (
                CircuitLayout::TPoint,
                OutputKind::PublicKey,
                MessageHashKind::Keccak,
            ),
            "verify_pubkey2" => (
                CircuitLayout::SaltedHiddenSignature,
                OutputKind::PublicKey,
                MessageHashKind::PoseidonThenKeccak,
            ),
            "hidden_signature_addr" => (
                CircuitLayout::HiddenSignature,
                OutputKind::Address,
                MessageHashKind::Keccak,
            ),
            other => {
                return Err(WitnessError::Config(format!(
                    "unknown circuit {other:?}, expected one of {}",
                    PRESET_NAMES.join(", ")
                )))
            }
        };
        Ok(Self::with_default_artifacts(
            name,
            layout,
            output_kind,
            message_hash,
        ))
    }

    /// Artifacts under `build/<circuit>/` as laid out by the circuit build.
    pub fn with_default_artifacts(
        circuit: &str,
        layout: CircuitLayout,
        output_kind: OutputKind,
        message_hash: MessageHashKind,
    ) -> Self {
        let dir = Path::new("build").join(circuit);
        Self {
            circuit: circuit.to_string(),
            layout,
            output_kind,
            message_hash,
            build_hint: format!("yarn build:{circuit}"),
            artifacts: ArtifactPaths {
                wasm: dir
                    .join(format!("build_{circuit}_js"))
                    .join(format!("build_{circuit}.wasm")),
                zkey: dir.join(format!("build_{circuit}.zkey")),
                vkey: dir.join("verification_key.json"),
            },
        }
    }

    pub fn from_toml_str(text: &str) -> Result<Self, WitnessError> {
        let config: Self = toml::from_str(text)
            .map_err(|err| WitnessError::Config(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, WitnessError> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> Result<String, WitnessError> {
        toml::to_string(self).map_err(|err| WitnessError::Config(err.to_string()))
    }

    fn validate(&self) -> Result<(), WitnessError> {
        if self.circuit.trim().is_empty() {
            return Err(WitnessError::Config("circuit name is empty".into()));
        }
        let salted = self.layout == CircuitLayout::SaltedHiddenSignature;
        let poseidon = self.message_hash == MessageHashKind::PoseidonThenKeccak;
        if salted != poseidon {
            return Err(WitnessError::Config(format!(
                "layout {:?} cannot be used with message hash {:?}",
                self.layout, self.message_hash
            )));
        }
        Ok(())
    }

    /// Artifact handles with relative paths resolved against `root`.
    pub fn artifacts(&self, root: &Path) -> CircuitArtifacts {
        CircuitArtifacts {
            wasm: root.join(&self.artifacts.wasm),
            zkey: root.join(&self.artifacts.zkey),
            vkey: root.join(&self.artifacts.vkey),
            build_hint: self.build_hint.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use test_case::test_case;

    #[test_case("ecdsa_verify", CircuitLayout::TPrecomputes, OutputKind::PublicKey)]
    #[test_case(
        "ecdsa_verify_pubkey_to_addr",
        CircuitLayout::TPrecomputes,
        OutputKind::Address
    )]
    #[test_case(
        "ecdsa_verify_no_precompute",
        CircuitLayout::TPoint,
        OutputKind::PublicKey
    )]
    #[test_case(
        "verify_pubkey2",
        CircuitLayout::SaltedHiddenSignature,
        OutputKind::PublicKey
    )]
    #[test_case(
        "hidden_signature_addr",
        CircuitLayout::HiddenSignature,
        OutputKind::Address
    )]
    fn test_presets(name: &str, layout: CircuitLayout, output_kind: OutputKind) {
        let config = WitnessConfig::preset(name).unwrap();
        assert_eq!(config.layout, layout);
        assert_eq!(config.output_kind, output_kind);
        config.validate().unwrap();
    }

    #[test]
    fn test_preset_artifact_paths() {
        let config = WitnessConfig::preset("ecdsa_verify").unwrap();
        assert_eq!(
            config.artifacts.zkey,
            PathBuf::from("build/ecdsa_verify/build_ecdsa_verify.zkey")
        );
        let wasm = "build/ecdsa_verify/build_ecdsa_verify_js/build_ecdsa_verify.wasm";
        assert_eq!(config.artifacts.wasm, PathBuf::from(wasm));
        assert_eq!(config.build_hint, "yarn build:ecdsa_verify");
    }

    #[test]
    fn test_unknown_preset() {
        assert!(matches!(
            WitnessConfig::preset("ecdsa_sign"),
            Err(WitnessError::Config(_))
        ));
    }

    #[test]
    fn test_toml_file_round_trip() {
        let config = WitnessConfig::preset("verify_pubkey2").unwrap();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let text = config.to_toml_string().unwrap();
        file.write_all(text.as_bytes()).unwrap();

        let loaded = WitnessConfig::from_file(file.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_message_hash_defaults_to_keccak() {
        let text = r#"
            circuit = "custom"
            layout = "t_point"
            output_kind = "address"
            build_hint = "make custom"

            [artifacts]
            wasm = "c.wasm"
            zkey = "c.zkey"
            vkey = "vkey.json"
        "#;
        let config = WitnessConfig::from_toml_str(text).unwrap();
        assert_eq!(config.message_hash, MessageHashKind::Keccak);
        let artifacts = config.artifacts(Path::new("/srv"));
        assert_eq!(artifacts.zkey, PathBuf::from("/srv/c.zkey"));
    }

    #[test]
    fn test_rejects_mismatched_hash_scheme() {
        let mut config = WitnessConfig::preset("ecdsa_verify").unwrap();
        config.message_hash = MessageHashKind::PoseidonThenKeccak;
        let text = config.to_toml_string().unwrap();
        assert!(matches!(
            WitnessConfig::from_toml_str(&text),
            Err(WitnessError::Config(_))
        ));
        assert!(WitnessConfig::from_toml_str("layout = 3").is_err());
    }
}
