//! Recordseal CLI - record fingerprinting and ledger verification operations.

use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{canonicalize, export, fingerprint, validate, verify};

#[derive(Parser)]
#[command(name = "recordseal")]
#[command(about = "Deterministic record fingerprinting and ledger verification CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the canonical form of a portable record
    Canonicalize {
        /// Input JSON file (or stdin if not provided)
        input: Option<String>,
    },
    /// Compute the fingerprint of a portable record or raw file bytes
    Fingerprint {
        /// Input file (or stdin if not provided)
        input: Option<String>,
        /// Fingerprint raw bytes instead of a canonicalized record
        #[arg(long)]
        raw: bool,
    },
    /// Validate a portable record payload
    Validate {
        /// Input JSON file (or stdin if not provided)
        input: Option<String>,
    },
    /// Re-serialize a portable record to its minimal export form
    Export {
        /// Input JSON file (or stdin if not provided)
        input: Option<String>,
        /// Ledger account identifier to embed in the export
        #[arg(long)]
        address: Option<String>,
    },
    /// Match a fingerprint against a ledger snapshot
    Verify {
        /// Fingerprint to look up (0x + 64 hex chars, any case)
        fingerprint: String,
        /// Ledger account identifier
        #[arg(long)]
        account: String,
        /// Project identifier
        #[arg(long)]
        project: u32,
        /// Path to a JSON snapshot of ledger entries
        #[arg(long)]
        ledger: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Canonicalize { input } => canonicalize::run(input),
        Commands::Fingerprint { input, raw } => fingerprint::run(input, raw),
        Commands::Validate { input } => validate::run(input),
        Commands::Export { input, address } => export::run(input, address),
        Commands::Verify {
            fingerprint,
            account,
            project,
            ledger,
            json,
        } => verify::run(fingerprint, account, project, ledger, json).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
