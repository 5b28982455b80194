//! Build the `ecdsa_verify` witness for "hello world" and check it locally.

use std::time::Instant;

use curve::Group;
use ecdsa::SigningKey;
use rand::rng;
use witness::{
    CircuitLayout, FieldRegisters, PrecomputeTable, WitnessConfig, WitnessPipeline, WitnessValue,
};

const PRIVATE_KEY: &str = "f5b552f608f5b552f608f5b552f6082ff5b552f608f5b552f608f5b552f6082f";

fn main() {
    let mut rng = rng();
    let key = SigningKey::from_hex(PRIVATE_KEY).expect("valid key");

    let config = WitnessConfig::preset("ecdsa_verify").expect("known preset");
    assert_eq!(config.layout, CircuitLayout::TPrecomputes);
    let pipeline = WitnessPipeline::new(config);

    let signed = pipeline
        .sign_message(&key, b"hello world", &mut rng)
        .expect("signing");
    println!("Signature: {}", signed.signature.to_hex());

    let start = Instant::now();
    let prepared = pipeline.prepare(&signed, &mut rng).expect("witness");
    println!("Witness prepared in {:?}", start.elapsed());

    // Redo the circuit's work: s * T through the table, plus U.
    let derived = witness::InversionFreeInputs::derive(&signed.signature, &signed.digest)
        .expect("transform");
    let table = PrecomputeTable::build(&derived.t).expect("table");
    let q = table.lookup_sum(&derived.s) + derived.u;
    assert_eq!(q, derived.t.scalar_mul(&derived.s) + derived.u);

    let output = format!(
        "04{}{}",
        FieldRegisters::from(&q.x).to_hex(),
        FieldRegisters::from(&q.y).to_hex()
    );
    println!("Expected: {}", prepared.expected);
    println!("Derived:  {output}");
    assert_eq!(output, prepared.expected.to_string());

    if let Some(WitnessValue::Table(rows)) = prepared.mapping.get("TPreComputes") {
        let (strides, entries) = (rows.len(), rows[0].len());
        println!("TPreComputes: {strides} strides x {entries} entries");
    }

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("input.json");
    prepared.mapping.write_json(&path).expect("write input");
    let size = std::fs::metadata(&path).expect("metadata").len();
    println!("input.json: {size} bytes");
}
