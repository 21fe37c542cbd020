mod commands;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use snarkcheck_codec::Format;
use tracing_subscriber::EnvFilter;

use commands::EXIT_ERROR;

#[derive(Parser)]
#[command(name = "snarkcheck", version, about = "Groth16 proof verifier")]
struct Cli {
    /// Machine-readable JSON on stdout
    #[arg(long, global = true)]
    json: bool,

    /// Log more (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Cmd,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FormatArg {
    /// Sniff from the verification key
    Auto,
    Snarkjs,
    Hex,
}

impl FormatArg {
    /// `None` means detect.
    pub fn format(self) -> Option<Format> {
        match self {
            FormatArg::Auto => None,
            FormatArg::Snarkjs => Some(Format::Snarkjs),
            FormatArg::Hex => Some(Format::Canonical),
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum TargetArg {
    Snarkjs,
    Hex,
}

impl From<TargetArg> for Format {
    fn from(target: TargetArg) -> Self {
        match target {
            TargetArg::Snarkjs => Format::Snarkjs,
            TargetArg::Hex => Format::Canonical,
        }
    }
}

#[derive(Args, Debug)]
pub struct Inputs {
    /// Verification key
    #[arg(long, env = "SNARKCHECK_VK", default_value = "verification_key.json")]
    pub vk: PathBuf,

    /// Proof
    #[arg(long, env = "SNARKCHECK_PROOF", default_value = "proof.json")]
    pub proof: PathBuf,

    /// Public signals
    #[arg(long, env = "SNARKCHECK_PUBLIC", default_value = "public.json")]
    pub public: PathBuf,

    /// Layout of the input files
    #[arg(long, env = "SNARKCHECK_FORMAT", value_enum, default_value_t = FormatArg::Auto)]
    pub format: FormatArg,
}

#[derive(Subcommand)]
enum Cmd {
    /// Check a proof against a verification key and public signals
    Verify(Inputs),
    /// Show curve, public input count and fingerprint of a key
    Inspect {
        #[arg(long, env = "SNARKCHECK_VK", default_value = "verification_key.json")]
        vk: PathBuf,
        #[arg(long, env = "SNARKCHECK_FORMAT", value_enum, default_value_t = FormatArg::Auto)]
        format: FormatArg,
    },
    /// Validate the three files and rewrite them in another layout
    Export {
        #[command(flatten)]
        inputs: Inputs,
        /// Output layout
        #[arg(long, value_enum)]
        to: TargetArg,
        /// Directory for verification_key.json, proof.json and public.json
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
}

fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    output::set_json_mode(cli.json);
    init_tracing(cli.verbose);

    let result = match cli.command {
        Cmd::Verify(inputs) => commands::verify::run(&inputs),
        Cmd::Inspect { vk, format } => commands::inspect::run(&vk, format),
        Cmd::Export {
            inputs,
            to,
            out_dir,
        } => commands::export::run(&inputs, to.into(), &out_dir),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            output::fatal(&e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}
