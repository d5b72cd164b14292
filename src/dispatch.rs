//! Concurrent fan-out of timed runs.
//!
//! One OS thread per algorithm, all borrowing the same read-only sample.
//! Each task copies the sample inside its own timed span, so no task can see
//! another's intermediate state. Tasks share nothing mutable; the report
//! sink is the only contended resource and it writes whole lines.
//!
//! Threads are spawned inside [`std::thread::scope`], so [`dispatch`] does not
//! return until every task has reported.

use crate::config::WORKER_STACK_SIZE;
use crate::error::{BenchError, Result};
use crate::registry::AlgorithmEntry;
use crate::sample::Sample;
use crate::sorting::SortRng;
use crate::utils::bench::task_rng;
use crate::utils::cpu_affinity::CpuPinGuard;
use crate::utils::timer::{time_run, Outcome, RunResult};
use std::io::{self, Write};
use std::sync::Mutex;
use std::thread;
use std::time::Duration;
use tracing::{debug, trace, warn};

/// Opt-in algorithms above this sample size are unlikely to finish
const OPT_IN_SIZE_WARNING: usize = 10;

/// Destination for finished results.
///
/// Called concurrently from every task. Implementations must emit each
/// result as one uninterrupted unit.
pub trait ReportSink: Sync {
    fn emit(&self, result: &RunResult);
}

/// Writes one line per result to stdout, holding the stdout lock per line
#[derive(Clone, Copy, Debug, Default)]
pub struct StdoutSink;

impl ReportSink for StdoutSink {
    fn emit(&self, result: &RunResult) {
        let mut out = io::stdout().lock();
        if let Err(e) = writeln!(out, "{result}") {
            warn!(algorithm = result.name, error = %e, "failed to write result line");
        }
    }
}

/// Collects results in completion order
#[derive(Debug, Default)]
pub struct MemorySink {
    results: Mutex<Vec<RunResult>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Results received so far, in the order tasks finished
    pub fn results(&self) -> Vec<RunResult> {
        match self.results.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl ReportSink for MemorySink {
    fn emit(&self, result: &RunResult) {
        match self.results.lock() {
            Ok(mut guard) => guard.push(result.clone()),
            Err(poisoned) => poisoned.into_inner().push(result.clone()),
        }
    }
}

/// Per-dispatch settings
#[derive(Clone, Copy, Debug, Default)]
pub struct DispatchOptions {
    /// Master seed for the per-task rngs
    pub seed: u64,
    /// Pin each worker to the core it starts on
    pub pin: bool,
}

/// Start one task per entry against `sample` and wait for all of them.
///
/// Each task reports to `sink` as soon as it finishes, so emitted order is
/// completion order. The returned vector is in entry order.
pub fn dispatch(
    entries: &[AlgorithmEntry],
    sample: &Sample,
    options: DispatchOptions,
    sink: &dyn ReportSink,
) -> Result<Vec<RunResult>> {
    if entries.is_empty() {
        return Err(BenchError::EmptySelection);
    }

    for entry in entries.iter().filter(|e| e.variant.opt_in) {
        if sample.len() > OPT_IN_SIZE_WARNING {
            warn!(
                algorithm = entry.name(),
                size = sample.len(),
                "selected for a sample larger than {OPT_IN_SIZE_WARNING}; it may never finish"
            );
        }
    }

    thread::scope(|s| -> Result<Vec<RunResult>> {
        let mut handles = Vec::with_capacity(entries.len());

        for (index, entry) in entries.iter().enumerate() {
            let rng = task_rng(options.seed, index);
            let handle = thread::Builder::new()
                .name(entry.name().to_string())
                .stack_size(WORKER_STACK_SIZE)
                .spawn_scoped(s, move || run_task(entry, sample, rng, options.pin, sink))
                .map_err(|source| BenchError::Spawn {
                    name: entry.name(),
                    source,
                })?;

            debug!(algorithm = entry.name(), index, "dispatched");
            handles.push((entry.name(), handle));
        }

        Ok(handles
            .into_iter()
            .map(|(name, handle)| {
                handle.join().unwrap_or_else(|_| {
                    // The timed run catches its own panics; this is the sink failing
                    let result = RunResult {
                        name,
                        elapsed: Duration::ZERO,
                        outcome: Outcome::Panicked {
                            message: "worker panicked while reporting".to_string(),
                        },
                        output_len: 0,
                    };
                    StdoutSink.emit(&result);
                    result
                })
            })
            .collect())
    })
}

/// copy, sort, check, report
fn run_task(
    entry: &AlgorithmEntry,
    sample: &Sample,
    mut rng: SortRng,
    pin: bool,
    sink: &dyn ReportSink,
) -> RunResult {
    let pin_guard = pin.then(CpuPinGuard::new);
    if let Some(guard) = &pin_guard {
        trace!(algorithm = entry.name(), core = ?guard.core_id(), "pinned");
    }

    let function = entry.function();
    let result = time_run(entry.name(), || function(sample, &mut rng));

    trace!(
        algorithm = result.name,
        elapsed_ms = result.elapsed_ms(),
        outcome = result.outcome.label(),
        "finished"
    );
    sink.emit(&result);
    result
}
