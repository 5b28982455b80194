use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use ecdsa::{SigningKey, VerifyingKey};
use eyre::{Result, WrapErr};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::Level;
use tracing_forest::ForestLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};
use witness::{ExpectedOutput, ProofOutput, SnarkjsBackend, WitnessConfig, WitnessPipeline};

const DEMO_PRIVATE_KEY: &str = "f5b552f608f5b552f608f5b552f6082ff5b552f608f5b552f608f5b552f6082f";
const DEMO_MESSAGE: &str = "hello world";

#[derive(Parser)]
#[command(
    name = "ecdsa-witness",
    author,
    version,
    about = "Witness generation for ECDSA verification circuits"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    Gen(GenCmd),
    Prove(ProveCmd),
    Check(CheckCmd),
}

#[derive(Args)]
struct CircuitArgs {
    #[arg(long, default_value = "ecdsa_verify", help = "Built-in circuit preset")]
    circuit: String,

    #[arg(
        long,
        conflicts_with = "circuit",
        help = "TOML file describing the circuit"
    )]
    config: Option<PathBuf>,
}

impl CircuitArgs {
    fn load(&self) -> Result<WitnessConfig> {
        match &self.config {
            Some(path) => WitnessConfig::from_file(path)
                .wrap_err_with(|| format!("failed to load circuit config {}", path.display())),
            None => WitnessConfig::preset(&self.circuit).wrap_err("unknown circuit preset"),
        }
    }
}

#[derive(Args)]
struct SignerArgs {
    #[arg(long, default_value = DEMO_PRIVATE_KEY, help = "Hex private key of the signer")]
    private_key: String,

    #[arg(long, default_value = DEMO_MESSAGE, help = "Message to sign")]
    message: String,

    #[arg(long, help = "Seed for nonces and salts; random when absent")]
    seed: Option<u64>,
}

impl SignerArgs {
    fn key(&self) -> Result<SigningKey> {
        SigningKey::from_hex(&self.private_key).wrap_err("invalid private key")
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

#[derive(Parser)]
#[command(about = "Sign a message and write the circuit input file")]
struct GenCmd {
    #[command(flatten)]
    circuit: CircuitArgs,

    #[command(flatten)]
    signer: SignerArgs,

    #[arg(
        long,
        default_value = "input.json",
        help = "Path to write the witness input"
    )]
    output: PathBuf,
}

impl GenCmd {
    fn run(&self) -> Result<()> {
        let pipeline = WitnessPipeline::new(self.circuit.load()?);
        let mut rng = self.signer.rng();
        let key = self.signer.key()?;
        let message = self.signer.message.as_bytes();
        let signed = pipeline.sign_message(&key, message, &mut rng)?;
        let prepared = pipeline.prepare(&signed, &mut rng)?;
        prepared
            .mapping
            .write_json(&self.output)
            .wrap_err_with(|| format!("failed to write {}", self.output.display()))?;

        println!("Wrote {}", self.output.display());
        println!("Expected output: {}", prepared.expected);
        Ok(())
    }
}

#[derive(Parser)]
#[command(about = "Generate a proof and check its public output")]
struct ProveCmd {
    #[command(flatten)]
    circuit: CircuitArgs,

    #[command(flatten)]
    signer: SignerArgs,

    #[arg(
        long,
        default_value = ".",
        help = "Directory the artifact paths are relative to"
    )]
    root: PathBuf,

    #[arg(
        long,
        env = "SNARKJS",
        default_value = "snarkjs",
        help = "snarkjs executable"
    )]
    snarkjs: PathBuf,

    #[arg(long, help = "Also write the proof and public signals here")]
    proof_output: Option<PathBuf>,
}

impl ProveCmd {
    fn run(&self) -> Result<()> {
        let pipeline = WitnessPipeline::new(self.circuit.load()?);
        let mut rng = self.signer.rng();
        let key = self.signer.key()?;
        let message = self.signer.message.as_bytes();
        let signed = pipeline.sign_message(&key, message, &mut rng)?;
        let prepared = pipeline.prepare(&signed, &mut rng)?;

        let backend = SnarkjsBackend::new(&self.snarkjs);
        let output = pipeline
            .prove_and_check(&backend, &prepared, &self.root)
            .wrap_err_with(|| format!("proving {} failed", pipeline.config().circuit))?;

        if let Some(path) = &self.proof_output {
            std::fs::write(path, serde_json::to_string_pretty(&output)?)?;
        }
        println!(
            "Success! Output {} matches and the proof verified",
            prepared.expected
        );
        Ok(())
    }
}

#[derive(Parser)]
#[command(about = "Check a public-signals file against a public key")]
struct CheckCmd {
    #[command(flatten)]
    circuit: CircuitArgs,

    #[arg(long, help = "Path to the public signals JSON array")]
    public_signals: PathBuf,

    #[arg(long, conflicts_with = "private_key", help = "Hex SEC1 public key")]
    public_key: Option<String>,

    #[arg(
        long,
        default_value = DEMO_PRIVATE_KEY,
        help = "Hex private key, used when no public key is given"
    )]
    private_key: String,
}

impl CheckCmd {
    fn run(&self) -> Result<()> {
        let config = self.circuit.load()?;
        let verifying_key = match &self.public_key {
            Some(hex) => VerifyingKey::from_hex(hex).wrap_err("invalid public key")?,
            None => SigningKey::from_hex(&self.private_key)
                .wrap_err("invalid private key")?
                .verifying_key(),
        };

        let expected =
            ExpectedOutput::from_public_key(config.output_kind, verifying_key.as_affine())?;
        let signals = ProofOutput::read_public_signals(&self.public_signals)
            .wrap_err_with(|| format!("failed to read {}", self.public_signals.display()))?;
        expected.check(&signals)?;
        println!("Output {expected} matches");
        Ok(())
    }
}

fn setup_tracing_with_log_level(level: Level) {
    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    let _ = Registry::default()
        .with(env_filter)
        .with(ForestLayer::default())
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_tracing_with_log_level(Level::INFO);
    match cli.command {
        Command::Gen(cmd) => cmd.run(),
        Command::Prove(cmd) => cmd.run(),
        Command::Check(cmd) => cmd.run(),
    }
}
