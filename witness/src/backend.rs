//! The boundary to the SNARK proving system.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, info_span};

use crate::assembler::WitnessMapping;
use crate::errors::WitnessError;

/// Compiled circuit files needed to prove and verify.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CircuitArtifacts {
    pub wasm: PathBuf,
    pub zkey: PathBuf,
    pub vkey: PathBuf,
    /// Command that produces the artifacts, shown when one is missing.
    pub build_hint: String,
}

impl CircuitArtifacts {
    pub fn ensure_present(&self) -> Result<(), WitnessError> {
        // zkey first: it is the one that usually needs building
        for path in [&self.zkey, &self.wasm, &self.vkey] {
            if !path.exists() {
                return Err(WitnessError::MissingArtifact {
                    path: path.clone(),
                    hint: self.build_hint.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Proof and public signals as the backend returns them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProofOutput {
    #[serde(rename = "publicSignals")]
    pub public_signals: Vec<String>,
    pub proof: serde_json::Value,
}

impl ProofOutput {
    pub fn read_public_signals(path: &Path) -> Result<Vec<String>, WitnessError> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

pub trait ProvingBackend {
    fn full_prove(
        &self,
        witness: &WitnessMapping,
        artifacts: &CircuitArtifacts,
    ) -> Result<ProofOutput, WitnessError>;

    fn verify(
        &self,
        artifacts: &CircuitArtifacts,
        output: &ProofOutput,
    ) -> Result<bool, WitnessError>;
}

/// Groth16 through the `snarkjs` command-line tool.
#[derive(Clone, Debug)]
pub struct SnarkjsBackend {
    program: PathBuf,
}

impl SnarkjsBackend {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn run(&self, args: &[&Path]) -> Result<std::process::Output, WitnessError> {
        debug!(program = %self.program.display(), ?args, "running backend");
        let output = Command::new(&self.program)
            .arg("groth16")
            .args(args)
            .output()
            .map_err(|err| {
                WitnessError::Backend(format!("failed to run {}: {err}", self.program.display()))
            })?;
        Ok(output)
    }
}

impl Default for SnarkjsBackend {
    fn default() -> Self {
        Self::new("snarkjs")
    }
}

impl ProvingBackend for SnarkjsBackend {
    fn full_prove(
        &self,
        witness: &WitnessMapping,
        artifacts: &CircuitArtifacts,
    ) -> Result<ProofOutput, WitnessError> {
        artifacts.ensure_present()?;
        let _span = info_span!("full_prove", zkey = %artifacts.zkey.display()).entered();

        let dir = tempfile::tempdir()?;
        let input = dir.path().join("input.json");
        let proof = dir.path().join("proof.json");
        let public = dir.path().join("public.json");
        witness.write_json(&input)?;

        let output = self.run(&[
            Path::new("fullprove"),
            input.as_path(),
            artifacts.wasm.as_path(),
            artifacts.zkey.as_path(),
            proof.as_path(),
            public.as_path(),
        ])?;
        if !output.status.success() {
            return Err(WitnessError::Backend(format!(
                "fullprove exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        let public_signals = ProofOutput::read_public_signals(&public)?;
        let proof = serde_json::from_str(&fs::read_to_string(&proof)?)?;
        info!(signals = public_signals.len(), "proof generated");
        Ok(ProofOutput {
            public_signals,
            proof,
        })
    }

    fn verify(
        &self,
        artifacts: &CircuitArtifacts,
        output: &ProofOutput,
    ) -> Result<bool, WitnessError> {
        let _span = info_span!("verify", vkey = %artifacts.vkey.display()).entered();
        if !artifacts.vkey.exists() {
            return Err(WitnessError::MissingArtifact {
                path: artifacts.vkey.clone(),
                hint: artifacts.build_hint.clone(),
            });
        }

        let dir = tempfile::tempdir()?;
        let proof = dir.path().join("proof.json");
        let public = dir.path().join("public.json");
        fs::write(&proof, serde_json::to_string(&output.proof)?)?;
        fs::write(&public, serde_json::to_string(&output.public_signals)?)?;

        let result = self.run(&[
            Path::new("verify"),
            artifacts.vkey.as_path(),
            public.as_path(),
            proof.as_path(),
        ])?;
        let verified = result.status.success();
        info!(verified, "proof checked");
        Ok(verified)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artifacts_in(dir: &Path) -> CircuitArtifacts {
        CircuitArtifacts {
            wasm: dir.join("c.wasm"),
            zkey: dir.join("c.zkey"),
            vkey: dir.join("verification_key.json"),
            build_hint: "yarn build:c".into(),
        }
    }

    #[test]
    fn test_missing_zkey_is_reported_with_hint() {
        let dir = tempfile::tempdir().unwrap();
        let artifacts = artifacts_in(dir.path());
        fs::write(&artifacts.wasm, b"").unwrap();

        let err = artifacts.ensure_present().unwrap_err();
        match &err {
            WitnessError::MissingArtifact { path, hint } => {
                assert_eq!(path, &artifacts.zkey);
                assert_eq!(hint, "yarn build:c");
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert!(err.to_string().contains("run `yarn build:c` first"));
    }

    #[test]
    fn test_all_present() {
        let dir = tempfile::tempdir().unwrap();
        let artifacts = artifacts_in(dir.path());
        for path in [&artifacts.wasm, &artifacts.zkey, &artifacts.vkey] {
            fs::write(path, b"").unwrap();
        }
        artifacts.ensure_present().unwrap();
    }

    #[test]
    fn test_full_prove_checks_artifacts_before_running() {
        let dir = tempfile::tempdir().unwrap();
        let backend = SnarkjsBackend::new(dir.path().join("no-such-snarkjs"));
        let result = backend.full_prove(&WitnessMapping::default(), &artifacts_in(dir.path()));
        assert!(matches!(result, Err(WitnessError::MissingArtifact { .. })));
    }

    #[test]
    fn test_proof_output_json_names() {
        let output = ProofOutput {
            public_signals: vec!["1".into(), "2".into()],
            proof: serde_json::json!({ "protocol": "groth16" }),
        };
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["publicSignals"][1], "2");

        let file = tempfile::NamedTempFile::new().unwrap();
        let text = serde_json::to_string(&output.public_signals).unwrap();
        fs::write(file.path(), text).unwrap();
        let signals = ProofOutput::read_public_signals(file.path()).unwrap();
        assert_eq!(signals, output.public_signals);
    }
}
