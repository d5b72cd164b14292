//! CLI for racing the sorting algorithms.
//!
//! Usage:
//!   sort-bench                      # 10,000 items, every default algorithm
//!   sort-bench 2000                 # 2,000 items
//!   sort-bench --list               # List available algorithms
//!   sort-bench --only merge_sort,insertion_sort --seed 42
//!   sort-bench 8 --include-bogo     # Also run bogo sort

use clap::Parser;
use sort_bench::config::{parse_size, BenchConfig};
use sort_bench::dispatch::StdoutSink;
use sort_bench::registry::build_registry;
use sort_bench::utils::{export_csv, time_seed};
use sort_bench::{tui, BenchError};
use std::path::PathBuf;
use std::process::ExitCode;

/// Time several sorting algorithms concurrently over one shuffled sample
#[derive(Parser)]
#[command(name = "sort-bench", version, about)]
struct Cli {
    /// Number of items to sort (default 10000)
    #[arg(allow_negative_numbers = true)]
    size: Option<String>,

    /// Seed for the sample and pivot choices (default: time-based)
    #[arg(long)]
    seed: Option<u64>,

    /// Only run these algorithms, comma separated
    #[arg(long, value_delimiter = ',')]
    only: Option<Vec<String>>,

    /// Also run bogo sort
    #[arg(long)]
    include_bogo: bool,

    /// Pin each worker thread to the core it starts on
    #[arg(long)]
    pin: bool,

    /// Also write results to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// List all available algorithms and exit
    #[arg(short, long)]
    list: bool,

    /// Exit non-zero if any algorithm failed or panicked
    #[arg(long)]
    strict: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, BenchError> {
    if cli.list {
        tui::print_available_algorithms(&build_registry()?);
        return Ok(ExitCode::SUCCESS);
    }

    let config = BenchConfig {
        size: parse_size(cli.size.as_deref())?,
        seed: cli.seed.unwrap_or_else(time_seed),
        only: cli.only,
        include_opt_in: cli.include_bogo,
        pin: cli.pin,
    };

    tui::print_banner();
    tui::print_preamble(config.size);

    let (_, results) = sort_bench::run_benchmark(&config, &StdoutSink)?;

    if let Some(path) = &cli.csv {
        export_csv(path, config.size, &results)?;
    }

    let (_, failed, panicked) = tui::tally(&results);
    if cli.strict && failed + panicked > 0 {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

/// Setup logging based on verbosity level
fn setup_logging(verbosity: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}
