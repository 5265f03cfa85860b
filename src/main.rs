//! volcaup CLI
//!
//! Converts slot-numbered WAV files in a directory into a single syro
//! stream WAV ready to play into a Korg Volca Sample.

use clap::Parser;
use std::path::PathBuf;
use volcaup_lib::batch;
use volcaup_lib::{init, Config};

#[derive(Parser)]
#[command(name = "volcaup")]
#[command(about = "Batch-load WAV samples onto a Korg Volca Sample", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory holding the numbered input files
    #[arg(short = 'C', long, default_value = ".")]
    dir: PathBuf,

    /// Output stream filename
    #[arg(short, long, default_value = batch::OUTPUT_FILENAME)]
    output: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init(Config {
        verbose: cli.verbose,
        debug: cli.debug,
    });

    run(&cli)
}

#[cfg(feature = "syro")]
fn run(cli: &Cli) -> anyhow::Result<()> {
    use volcaup_lib::engine::ffi::KorgSyroEngine;

    let report = batch::run(&cli.dir, &KorgSyroEngine, &cli.output)?;

    println!(
        "Converted {} samples ({} skipped) into {} ({} frames).",
        report.converted,
        report.skipped,
        cli.output.display(),
        report.frames
    );
    Ok(())
}

#[cfg(not(feature = "syro"))]
fn run(_cli: &Cli) -> anyhow::Result<()> {
    anyhow::bail!("this build does not include the SYRO encoder; rebuild with --features syro")
}
