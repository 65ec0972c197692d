// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Obscura — command-line photo obfuscator.
//
// Entry point. Initialises logging, resolves parameters, and runs a single
// file through the obfuscation pipeline.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use obscura_core::config::DEFAULT_OUTPUT_PATH;
use obscura_core::{ObfuscationParams, Result};
use obscura_image::ImageObfuscator;

#[derive(Debug, Parser)]
#[command(name = "obscura")]
#[command(about = "Resample a photo to 512x512, overlay its edges, and stamp a centre marker")]
#[command(version)]
struct Cli {
    /// Path to the input image (PNG, JPEG, BMP, ...).
    #[arg(required_unless_present = "print_params")]
    input: Option<PathBuf>,

    /// Where to write the PNG result.
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// JSON file overriding pipeline parameters; omitted fields keep their defaults.
    #[arg(long)]
    params: Option<PathBuf>,

    /// Print the effective parameters as JSON and exit.
    #[arg(long)]
    print_params: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, kind = ?e.kind(), "obfuscation failed");
            eprintln!("obscura: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let params = load_params(cli)?;

    if cli.print_params {
        println!("{}", params.to_json_pretty()?);
        return Ok(());
    }

    let Some(input) = cli.input.as_ref() else {
        // clap enforces this unless --print-params is given.
        return Ok(());
    };

    let obfuscator = ImageObfuscator::new(params)?;
    tracing::info!(input = %input.display(), output = %cli.output.display(), "Obscura starting");
    obfuscator.obfuscate_file(input, &cli.output)
}

fn load_params(cli: &Cli) -> Result<ObfuscationParams> {
    match &cli.params {
        Some(path) => {
            tracing::debug!(path = %path.display(), "Loading parameter file");
            ObfuscationParams::from_json_file(path)
        }
        None => Ok(ObfuscationParams::default()),
    }
}
