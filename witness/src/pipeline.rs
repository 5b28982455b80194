//! One proof, start to finish: derive, assemble, prove, check.

use std::path::Path;

use curve::Affine;
use ecdsa::{hash_personal_message, PoseidonContext, Signature, SigningKey};
use rand::Rng;
use tracing::{info, info_span};

use crate::assembler::{assemble, AssemblyInputs, ExpectedOutput, WitnessMapping};
use crate::backend::{ProofOutput, ProvingBackend};
use crate::config::{MessageHashKind, WitnessConfig};
use crate::errors::WitnessError;
use crate::transform::{HiddenSignature, InversionFreeInputs, SaltedDigest};

/// A signature together with what it was made over and who made it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignedMessage {
    pub digest: [u8; 32],
    pub signature: Signature,
    pub public_key: Affine,
    /// Present for the Poseidon-salted scheme, where `digest` is its
    /// `keccak_hash_msg`.
    pub salted: Option<SaltedDigest>,
}

/// An assembled witness and the output the proof must carry.
#[derive(Clone, Debug)]
pub struct PreparedWitness {
    pub mapping: WitnessMapping,
    pub expected: ExpectedOutput,
}

pub struct WitnessPipeline {
    config: WitnessConfig,
    poseidon: PoseidonContext,
}

impl WitnessPipeline {
    pub fn new(config: WitnessConfig) -> Self {
        Self {
            config,
            poseidon: PoseidonContext::new(),
        }
    }

    pub fn config(&self) -> &WitnessConfig {
        &self.config
    }

    /// Hash `message` the way the configured circuit expects and sign it.
    pub fn sign_message<R: Rng + ?Sized>(
        &self,
        key: &SigningKey,
        message: &[u8],
        rng: &mut R,
    ) -> Result<SignedMessage, WitnessError> {
        let msghash = hash_personal_message(message);
        let salted = match self.config.message_hash {
            MessageHashKind::Keccak => None,
            MessageHashKind::PoseidonThenKeccak => {
                Some(SaltedDigest::with_random_salt(&self.poseidon, rng, msghash))
            }
        };
        let digest = salted
            .as_ref()
            .map_or(msghash, |salted| salted.keccak_hash_msg);
        let signature = key.sign_prehash(rng, &digest)?;

        Ok(SignedMessage {
            digest,
            signature,
            public_key: *key.verifying_key().as_affine(),
            salted,
        })
    }

    /// Derive everything the layout needs and assemble the witness.
    ///
    /// Deriving the inputs re-checks the signature against the public key,
    /// so nothing is assembled for an invalid one. The randomness is only
    /// used for the second signature.
    pub fn prepare<R: Rng + ?Sized>(
        &self,
        signed: &SignedMessage,
        rng: &mut R,
    ) -> Result<PreparedWitness, WitnessError> {
        let layout = self.config.layout;
        let _span = info_span!("prepare", circuit = %self.config.circuit, ?layout).entered();

        let mut inputs = AssemblyInputs {
            digest: signed.digest,
            public_key: Some(signed.public_key),
            salted: signed.salted.clone(),
            ..Default::default()
        };

        if layout.hides_s() {
            let hidden = HiddenSignature::derive(&signed.signature, rng)?;
            if hidden.public_key(&signed.digest) != signed.public_key {
                return Err(WitnessError::VerificationFailed(
                    "r^-1 * pubKey2 - z * r^-1 * G does not equal the public key".into(),
                ));
            }
            inputs.hidden = Some(hidden);
        } else {
            let derived = InversionFreeInputs::derive(&signed.signature, &signed.digest)?;
            derived.check_public_key(&signed.public_key)?;
            inputs.inversion_free = Some(derived);
        }

        let mapping = assemble(layout, &inputs)?;
        let expected =
            ExpectedOutput::from_public_key(self.config.output_kind, &signed.public_key)?;
        info!(expected = %expected, "witness prepared");
        Ok(PreparedWitness { mapping, expected })
    }

    /// Run the backend, check its output against the expectation and verify
    /// the proof. Artifact paths are resolved against `root`.
    pub fn prove_and_check<B: ProvingBackend + ?Sized>(
        &self,
        backend: &B,
        prepared: &PreparedWitness,
        root: &Path,
    ) -> Result<ProofOutput, WitnessError> {
        let artifacts = self.config.artifacts(root);
        let output = backend.full_prove(&prepared.mapping, &artifacts)?;
        prepared.expected.check(&output.public_signals)?;
        if !backend.verify(&artifacts, &output)? {
            return Err(WitnessError::VerificationFailed(
                "proof rejected by the verifier".into(),
            ));
        }
        info!("proof verified");
        Ok(output)
    }
}
