//! Warboard - Entry Point
//!
//! Runs one script file and writes its transcript.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use warboard::core::config::SimulationConfig;
use warboard::core::error::Result;
use warboard::engine::simulate_file;
use warboard::transcript::TranscriptFormat;

/// Turn-based strategy board simulator
#[derive(Parser, Debug)]
#[command(name = "warboard")]
#[command(about = "Play a strategy board command script and write the turn transcript")]
struct Args {
    /// Command script to run
    #[arg(default_value = "entrada.txt")]
    input: PathBuf,

    /// Transcript destination, `-` for stdout
    #[arg(long, short = 'o', default_value = "saida.txt")]
    output: PathBuf,

    /// Transcript format
    #[arg(long, short = 'f', value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Random seed for deterministic runs
    #[arg(long, short = 's')]
    seed: Option<u64>,

    /// TOML simulation config
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl From<Format> for TranscriptFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => TranscriptFormat::Text,
            Format::Json => TranscriptFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warboard=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "simulation failed");
            eprintln!("warboard: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::default(),
    };
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    simulate_file(&args.input, &args.output, args.format.into(), &config)?;
    Ok(())
}
