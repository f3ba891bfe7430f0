//! dkb2homebank - CLI tool converting DKB CSV exports into Homebank CSV imports.

use clap::Parser;
use dkb2homebank::{config::Config, pipeline, Result};
use env_logger::Env;

#[derive(Parser)]
#[command(name = "dkb2homebank")]
#[command(about = "Convert DKB giro and credit card CSV exports to the Homebank CSV format", long_about = None)]
struct Cli {
    /// Input CSV file in DKB format
    #[arg(short, long)]
    input: String,

    /// Output CSV file in Homebank format
    #[arg(short, long)]
    output: String,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::new(cli.input, cli.output)?;
    let summary = pipeline::run(&config)?;

    log::info!(
        "Converted {} export: {} written, {} skipped",
        summary.file_type,
        summary.rows_written,
        summary.rows_skipped
    );

    Ok(())
}
