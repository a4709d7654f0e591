//! tickbar CLI - Concurrent trade cleaning and OHLCV bar aggregation.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod display;

use commands::CleanerArgs;
use display::Format;

#[derive(Parser)]
#[command(name = "tickbar")]
#[command(about = "Clean trade files and aggregate them into OHLCV bars", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress progress output and all logs below error)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Ingest, clean, and aggregate trades into OHLCV bars
    Aggregate {
        /// Directory of delimited trade files
        #[arg(short, long, default_value = "data")]
        data_dir: PathBuf,

        /// Bar interval (e.g., 15m, 1h30m, 1d). Repeat for several outputs.
        #[arg(short, long = "interval", default_value = "1h30m")]
        intervals: Vec<String>,

        /// Output file path (single interval only)
        #[arg(short, long, conflicts_with = "output_dir")]
        output: Option<PathBuf>,

        /// Output directory. Files named <interval>intervaloutput.<format>
        #[arg(long, default_value = ".")]
        output_dir: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: Format,

        #[command(flatten)]
        cleaner: CleanerArgs,
    },

    /// Ingest and clean trades without aggregating
    Clean {
        /// Directory of delimited trade files
        #[arg(short, long, default_value = "data")]
        data_dir: PathBuf,

        /// Output file path. Defaults to cleaned.<format>
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: Format,

        #[command(flatten)]
        cleaner: CleanerArgs,
    },

    /// Show how interval strings are interpreted
    Interval {
        /// Interval strings (e.g., 1h30m, 15m, 4s)
        #[arg(required = true)]
        specs: Vec<String>,
    },
}

/// Installs the stderr log subscriber. `RUST_LOG` overrides the flags.
fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    init_logging(cli.verbose, cli.quiet);

    match command {
        Commands::Aggregate {
            data_dir,
            intervals,
            output,
            output_dir,
            format,
            cleaner,
        } => {
            commands::aggregate::aggregate(
                data_dir,
                &intervals,
                output,
                &output_dir,
                format,
                &cleaner,
                cli.quiet,
            )
            .await
        }
        Commands::Clean {
            data_dir,
            output,
            format,
            cleaner,
        } => commands::clean::clean(data_dir, output, format, &cleaner, cli.quiet).await,
        Commands::Interval { specs } => commands::interval::show_intervals(&specs),
    }
}
