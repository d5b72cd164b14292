//! Benchmark configuration.

use crate::error::{BenchError, Result};
use crate::utils::bench::time_seed;
use tracing::warn;

/// Sample size used when none (or an unparsable one) is given
pub const DEFAULT_SIZE: usize = 10_000;

/// Stack reserved for each worker thread.
///
/// The functional quicksort recurses once per element on sorted input.
pub const WORKER_STACK_SIZE: usize = 64 * 1024 * 1024;

/// Resolved settings for one benchmark invocation
#[derive(Clone, Debug)]
pub struct BenchConfig {
    /// Number of elements in the sample
    pub size: usize,
    /// Master seed; the sample and every task rng derive from it
    pub seed: u64,
    /// Restrict the run to these algorithm names, in this order
    pub only: Option<Vec<String>>,
    /// Also dispatch opt-in algorithms (bogo sort)
    pub include_opt_in: bool,
    /// Pin each worker thread to the core it starts on
    pub pin: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            seed: time_seed(),
            only: None,
            include_opt_in: false,
            pin: false,
        }
    }
}

/// Turn the raw size argument into a sample size.
///
/// - absent: [`DEFAULT_SIZE`]
/// - all digits: that number
/// - `-` followed by digits: [`BenchError::NegativeSize`]
/// - anything else: [`DEFAULT_SIZE`], with a warning
pub fn parse_size(raw: Option<&str>) -> Result<usize> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_SIZE);
    };
    let trimmed = raw.trim();

    if let Some(digits) = trimmed.strip_prefix('-') {
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(BenchError::NegativeSize {
                raw: raw.to_string(),
            });
        }
    }

    if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(size) = trimmed.parse::<usize>() {
            return Ok(size);
        }
    }

    warn!(raw, default = DEFAULT_SIZE, "invalid sample size, using default");
    Ok(DEFAULT_SIZE)
}
