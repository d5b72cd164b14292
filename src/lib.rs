//! # Sort Bench
//!
//! Races a set of sorting algorithms over independent copies of one shuffled
//! sample, one thread per algorithm, and reports each run's wall-clock time
//! and whether its output came back in order.

pub mod check;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod registry;
pub mod sample;
pub mod sorting;
pub mod utils;

/// Re-export tui from utils
pub use utils::tui;

pub use error::{BenchError, Result};

use config::BenchConfig;
use dispatch::{DispatchOptions, ReportSink};
use sample::Sample;
use tracing::info;
use utils::timer::RunResult;

/// Re-export commonly used items
pub mod prelude {
    pub use crate::config::BenchConfig;
    pub use crate::dispatch::{dispatch, DispatchOptions, MemorySink, ReportSink, StdoutSink};
    pub use crate::registry::{build_registry, AlgorithmEntry, AlgorithmRegistry};
    pub use crate::sample::{Key, Sample};
    pub use crate::utils::timer::{Outcome, RunResult};
}

/// Generate the sample for `config`, dispatch the selected algorithms, and
/// wait for all of them.
///
/// Returns the sample alongside the results (entry order) so callers can
/// export or inspect them.
pub fn run_benchmark(config: &BenchConfig, sink: &dyn ReportSink) -> Result<(Sample, Vec<RunResult>)> {
    let registry = registry::build_registry()?;
    let entries = registry.select(config.only.as_deref(), config.include_opt_in)?;

    let sample = Sample::generate(config.size, &mut utils::sample_rng(config.seed));
    info!(size = config.size, seed = config.seed, algorithms = entries.len(), "starting benchmark");

    let options = DispatchOptions {
        seed: config.seed,
        pin: config.pin,
    };
    let results = dispatch::dispatch(&entries, &sample, options, sink)?;

    let (passed, failed, panicked) = tui::tally(&results);
    info!(passed, failed, panicked, "benchmark complete");

    Ok((sample, results))
}
