use std::cell::Cell;
use std::path::Path;

use curve::{Affine, BaseField, Group, ScalarField};
use ecdsa::{public_key_to_address, Signature, SigningKey};
use num_bigint::BigUint;
use rand::rngs::StdRng;
use rand::SeedableRng;
use witness::{
    CircuitArtifacts, FieldRegisters, OutputKind, PointRegisters, ProofOutput, ProvingBackend,
    SignedMessage, SnarkjsBackend, WitnessConfig, WitnessError, WitnessMapping, WitnessPipeline,
    WitnessValue, NUM_STRIDES, STRIDE,
};

const TEST_KEY: &str = "f5b552f608f5b552f608f5b552f6082ff5b552f608f5b552f608f5b552f6082f";
const TEST_PUBKEY: &str = "04b61ed9f3c64689e71767160a7b2adfa3294fe562976b97fd06bb87a695bbf435\
                           f3359c7554465362e4ab23d102722d7eb3727d75d6b23bae630f4f99d68b9c91";
const TEST_ADDRESS: &str = "efcbe272b0febe3edadc034af7a3f53ed35aaa53";

/// Computes the public output from the witness the way the circuits do,
/// using only additions and multiplications by values in the witness.
struct ReferenceCircuit {
    output: OutputKind,
    accept: bool,
    tamper: bool,
    proofs: Cell<usize>,
}

impl ReferenceCircuit {
    fn new(output: OutputKind) -> Self {
        Self {
            output,
            accept: true,
            tamper: false,
            proofs: Cell::new(0),
        }
    }
}

fn point(registers: &PointRegisters) -> Affine {
    if registers[0].is_zero() && registers[1].is_zero() {
        return Affine::INFINITY;
    }
    let x = BaseField::from_canonical_limbs(registers[0].0).unwrap();
    let y = BaseField::from_canonical_limbs(registers[1].0).unwrap();
    Affine::try_new(x, y).unwrap()
}

fn scalar(registers: &FieldRegisters) -> ScalarField {
    ScalarField::from_limbs_reduced(registers.0)
}

fn lookup(table: &[Vec<PointRegisters>], k: &FieldRegisters) -> Affine {
    assert_eq!(table.len(), NUM_STRIDES);
    let mut acc = Affine::INFINITY;
    for (i, stride) in table.iter().enumerate() {
        let bit = i * STRIDE;
        let digit = ((k.0[bit / 64] >> (bit % 64)) & 0xff) as usize;
        acc = acc + point(&stride[digit]);
    }
    acc
}

fn registers(mapping: &WitnessMapping, name: &str) -> FieldRegisters {
    match mapping.get(name) {
        Some(WitnessValue::Registers(registers)) => *registers,
        Some(WitnessValue::RegisterGroup(group)) => group[0],
        other => panic!("{name}: unexpected {other:?}"),
    }
}

fn point_field(mapping: &WitnessMapping, name: &str) -> Affine {
    match mapping.get(name) {
        Some(WitnessValue::Point(registers)) => point(registers),
        other => panic!("{name}: unexpected {other:?}"),
    }
}

fn table_field<'a>(mapping: &'a WitnessMapping, name: &str) -> &'a [Vec<PointRegisters>] {
    match mapping.get(name) {
        Some(WitnessValue::Table(table)) => table.as_slice(),
        other => panic!("{name}: unexpected {other:?}"),
    }
}

fn circuit_output(mapping: &WitnessMapping) -> Affine {
    if let Some(WitnessValue::Table(table)) = mapping.get("TPreComputes") {
        return lookup(table, &registers(mapping, "s")) + point_field(mapping, "U");
    }
    if mapping.get("T").is_some() {
        let s = scalar(&registers(mapping, "s"));
        return point_field(mapping, "T").scalar_mul(&s) + point_field(mapping, "U");
    }
    if mapping.get("msg").is_some() {
        let table = table_field(mapping, "modInvRMultGPreComputes");
        let pub_key2 = point_field(mapping, "modInvRMultPubKey2");
        return lookup(table, &registers(mapping, "msg")) + pub_key2;
    }
    let neg_inv_r = scalar(&registers(mapping, "negInvR"));
    let z = scalar(&registers(mapping, "keccakHashMsg"));
    point_field(mapping, "modInvRMultPubkey2") + Affine::mul_generator(&(neg_inv_r * z))
}

impl ProvingBackend for ReferenceCircuit {
    fn full_prove(
        &self,
        witness: &WitnessMapping,
        _artifacts: &CircuitArtifacts,
    ) -> Result<ProofOutput, WitnessError> {
        self.proofs.set(self.proofs.get() + 1);
        let mut q = circuit_output(witness);
        if self.tamper {
            q = q + Affine::generator();
        }

        let public_signals = match self.output {
            OutputKind::PublicKey => FieldRegisters::from(&q.x)
                .to_decimal_strings()
                .into_iter()
                .chain(FieldRegisters::from(&q.y).to_decimal_strings())
                .collect(),
            OutputKind::Address => {
                let address = public_key_to_address(&q)?;
                vec![BigUint::from_bytes_be(&address).to_str_radix(10)]
            }
        };
        Ok(ProofOutput {
            public_signals,
            proof: serde_json::json!({ "protocol": "reference" }),
        })
    }

    fn verify(
        &self,
        _artifacts: &CircuitArtifacts,
        _output: &ProofOutput,
    ) -> Result<bool, WitnessError> {
        Ok(self.accept)
    }
}

fn run(circuit: &str, seed: u64) -> (WitnessPipeline, SignedMessage, witness::PreparedWitness) {
    let mut rng = StdRng::seed_from_u64(seed);
    let pipeline = WitnessPipeline::new(WitnessConfig::preset(circuit).unwrap());
    let key = SigningKey::from_hex(TEST_KEY).unwrap();
    let signed = pipeline
        .sign_message(&key, b"hello world", &mut rng)
        .unwrap();
    let prepared = pipeline.prepare(&signed, &mut rng).unwrap();
    (pipeline, signed, prepared)
}

#[test]
fn test_hello_world_recovers_public_key_without_precompute() {
    let (pipeline, signed, prepared) = run("ecdsa_verify_no_precompute", 1);
    assert_eq!(signed.public_key.to_hex().unwrap(), TEST_PUBKEY);
    assert_eq!(prepared.expected.to_string(), TEST_PUBKEY);

    let backend = ReferenceCircuit::new(OutputKind::PublicKey);
    let output = pipeline
        .prove_and_check(&backend, &prepared, Path::new("."))
        .unwrap();

    let x = FieldRegisters::from_decimal_signals(&output.public_signals[..4]).unwrap();
    let y = FieldRegisters::from_decimal_signals(&output.public_signals[4..8]).unwrap();
    assert_eq!(format!("04{}{}", x.to_hex(), y.to_hex()), TEST_PUBKEY);
}

#[test]
fn test_hello_world_with_precompute_table() {
    let (pipeline, _, prepared) = run("ecdsa_verify", 2);
    let backend = ReferenceCircuit::new(OutputKind::PublicKey);
    pipeline
        .prove_and_check(&backend, &prepared, Path::new("."))
        .unwrap();
    assert_eq!(backend.proofs.get(), 1);
}

#[test]
fn test_address_output() {
    let (pipeline, _, prepared) = run("ecdsa_verify_pubkey_to_addr", 3);
    assert_eq!(prepared.expected.to_string(), TEST_ADDRESS);
    let backend = ReferenceCircuit::new(OutputKind::Address);
    pipeline
        .prove_and_check(&backend, &prepared, Path::new("."))
        .unwrap();
}

#[test]
fn test_hidden_signature_address() {
    let (pipeline, _, prepared) = run("hidden_signature_addr", 4);
    assert!(prepared.mapping.get("s").is_none());
    let backend = ReferenceCircuit::new(OutputKind::Address);
    pipeline
        .prove_and_check(&backend, &prepared, Path::new("."))
        .unwrap();
}

#[test]
fn test_salted_hidden_signature() {
    let (pipeline, signed, prepared) = run("verify_pubkey2", 5);
    let salted = signed.salted.as_ref().unwrap();
    assert_eq!(signed.digest, salted.keccak_hash_msg);

    let mapping = &prepared.mapping;
    assert_eq!(
        mapping.get("poseidonHash"),
        Some(&WitnessValue::Decimal(salted.poseidon_hash.to_string()))
    );
    let salt = FieldRegisters::from_be_bytes(&salted.salt);
    assert_eq!(registers(mapping, "salt"), salt);
    assert_eq!(point_field(mapping, "pubkey"), signed.public_key);

    let backend = ReferenceCircuit::new(OutputKind::PublicKey);
    pipeline
        .prove_and_check(&backend, &prepared, Path::new("."))
        .unwrap();
}

#[test]
fn test_mismatched_output_is_an_error() {
    let (pipeline, _, prepared) = run("ecdsa_verify_no_precompute", 6);
    let mut backend = ReferenceCircuit::new(OutputKind::PublicKey);
    backend.tamper = true;
    assert!(matches!(
        pipeline.prove_and_check(&backend, &prepared, Path::new(".")),
        Err(WitnessError::VerificationFailed(_))
    ));
}

#[test]
fn test_rejected_proof_is_an_error() {
    let (pipeline, _, prepared) = run("ecdsa_verify_no_precompute", 7);
    let mut backend = ReferenceCircuit::new(OutputKind::PublicKey);
    backend.accept = false;
    assert!(matches!(
        pipeline.prove_and_check(&backend, &prepared, Path::new(".")),
        Err(WitnessError::VerificationFailed(_))
    ));
}

#[test]
fn test_r_without_curve_point_is_rejected() {
    let (pipeline, signed, _) = run("ecdsa_verify_no_precompute", 8);
    let mut bad = signed.clone();
    bad.signature = Signature::new(ScalarField::from_u64(5), signed.signature.s, 27).unwrap();

    let mut rng = StdRng::seed_from_u64(0);
    assert!(matches!(
        pipeline.prepare(&bad, &mut rng),
        Err(WitnessError::InvalidPoint(_))
    ));
}

#[test]
fn test_wrong_public_key_is_rejected() {
    let (pipeline, signed, _) = run("ecdsa_verify_no_precompute", 9);
    let mut bad = signed.clone();
    bad.public_key = Affine::generator();

    let mut rng = StdRng::seed_from_u64(0);
    assert!(matches!(
        pipeline.prepare(&bad, &mut rng),
        Err(WitnessError::VerificationFailed(_))
    ));
}

#[test]
fn test_missing_artifacts_are_reported() {
    let (pipeline, _, prepared) = run("ecdsa_verify_no_precompute", 10);
    let root = tempfile::tempdir().unwrap();
    let err = pipeline
        .prove_and_check(&SnarkjsBackend::default(), &prepared, root.path())
        .unwrap_err();
    match err {
        WitnessError::MissingArtifact { path, hint } => {
            assert!(path.ends_with("build_ecdsa_verify_no_precompute.zkey"));
            assert_eq!(hint, "yarn build:ecdsa_verify_no_precompute");
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn test_input_file_matches_circuit_field_names() {
    let (_, _, prepared) = run("ecdsa_verify_no_precompute", 11);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("input.json");
    prepared.mapping.write_json(&path).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let object = json.as_object().unwrap();
    let mut names: Vec<_> = object.keys().map(String::as_str).collect();
    names.sort_unstable();
    assert_eq!(names, ["T", "U", "s"]);
    assert!(json["U"][1][3].as_str().unwrap().parse::<u64>().is_ok());
}
