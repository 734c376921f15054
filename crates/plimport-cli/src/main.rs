//! CLI application for importing vendor price-list PDFs into a product catalog.

mod fetch;
mod import;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use console::style;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Import a vendor price-list PDF into a product catalog
#[derive(Parser)]
#[command(name = "plimport")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the import config JSON
    #[arg(long)]
    config: PathBuf,

    /// Path to the catalog JSON, read and rewritten in place
    #[arg(long)]
    output: PathBuf,

    /// Write the catalog even when the acceptance ratio is below threshold
    #[arg(long)]
    force: bool,

    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("failed to initialize logging: {err}");
        return ExitCode::from(1);
    }

    match import::run(&cli) {
        Ok(summary) => {
            println!(
                "{} Updated {} (matched {}/{})",
                style("✓").green(),
                cli.output.display(),
                summary.matched,
                summary.total
            );
            ExitCode::SUCCESS
        }
        Err(import::RunError::BelowThreshold { matched, total }) => {
            eprintln!(
                "{} Not all items matched ({matched} / {total}). Report written next to the catalog; re-run with --force to accept a partial import.",
                style("✗").red()
            );
            ExitCode::from(2)
        }
        Err(import::RunError::Fatal(err)) => {
            eprintln!("{} {err:#}", style("✗").red());
            ExitCode::from(1)
        }
    }
}
