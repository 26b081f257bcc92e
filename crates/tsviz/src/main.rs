mod bootstrap;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tsviz_core::config::Config;
use tsviz_core::formatting;
use tsviz_data::{export, reader, summary};

/// Rows shown by the ingest preview.
const PREVIEW_ROWS: usize = 5;

/// The one operation to run over the combined dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Command {
    /// Ingest the input files and print a preview of the combined dataset
    Ingest,
    /// Print row count, time bounds, and per-column distinct group counts
    Summarize,
    /// Write one line-plot image per group under the output directory
    Plot,
    /// Write the combined dataset as a single CSV file
    Export,
}

/// Combine time-series CSV files, then summarize, plot, or export them
#[derive(Parser, Debug)]
#[command(
    name = "tsviz",
    about = "Combine time-series CSV files, then summarize, plot, or export them",
    version
)]
struct Cli {
    /// Operation to run
    #[arg(value_enum)]
    command: Command,

    /// Path to the YAML configuration file
    #[arg(long, default_value = "config.yaml")]
    config: PathBuf,
}

fn main() -> Result<()> {
    bootstrap::setup_logging();

    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;

    // Every command works on the full combined dataset.
    let dataset = reader::ingest(&config)?;

    match cli.command {
        Command::Ingest => {
            print!("{}", formatting::preview_table(&dataset, PREVIEW_ROWS));
        }
        Command::Summarize => {
            let summary = summary::summarize(&dataset);
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Command::Plot => {
            let plots_dir = config.output.dir.join("plots");
            let written = tsviz_plot::render_all(&dataset, &plots_dir)?;
            tracing::info!("Wrote {} plot(s) to {}", written.len(), plots_dir.display());
        }
        Command::Export => {
            let path = export::export_csv(&dataset, &config.output.dir)?;
            tracing::info!("Wrote {}", path.display());
        }
    }

    Ok(())
}

// ── Tests ──────────────────────────────────────────────────────────────────────
