use chrono::Datelike;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use vinflat::commands::{self, NormalizeArgs};
use vinflat_core::config::Config;

#[derive(Parser)]
#[command(name = "vinflat", about = "Flatten the WMI manufacturer table")]
struct Cli {
    /// Read this JSON table instead of the built-in one.
    #[arg(long, global = true)]
    input: Option<PathBuf>,

    /// Config file (defaults to ./vinflat.toml when present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug events to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write the ordered region names as a JSON array.
    Regions {
        /// Destination file (default from config: regions.json).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the regions, countries and manufacturers tables.
    Normalize {
        /// Reuse IDs for repeated region and country names.
        #[arg(long)]
        merge_by_name: bool,
        /// Single-line JSON.
        #[arg(long)]
        compact: bool,
        /// Write the tables to a file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Lint WMI codes and duplicate names.
    Check {
        /// Exit non-zero if any issue is found.
        #[arg(long)]
        strict: bool,
    },
    /// Decode a VIN against the manufacturer table.
    Decode {
        vin: String,
        /// Resolve model years as of this year instead of the current one.
        #[arg(long)]
        year: Option<i32>,
        /// Print the decoded fields as JSON.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    let config = Config::load(cli.config.as_deref())?;
    let catalog = commands::load_catalog(&config, cli.input.as_deref())?;
    tracing::debug!(
        regions = catalog.region_count(),
        countries = catalog.country_count(),
        manufacturers = catalog.manufacturer_count(),
        "catalog ready"
    );

    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::Regions { output } => {
            commands::regions(&config, &catalog, output, &mut stdout)?;
        }
        Command::Normalize {
            merge_by_name,
            compact,
            output,
        } => {
            let args = NormalizeArgs {
                merge_by_name,
                compact,
                output,
            };
            commands::normalize(&config, &catalog, &args, &mut stdout)?;
        }
        Command::Check { strict } => {
            commands::check(&catalog, strict, &mut stdout)?;
        }
        Command::Decode { vin, year, json } => {
            let year = year.unwrap_or_else(|| chrono::Local::now().year());
            commands::decode(&catalog, &vin, year, json, &mut stdout)?;
        }
    }
    Ok(())
}
