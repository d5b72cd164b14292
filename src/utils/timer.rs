//! Single-shot timing of one algorithm run.
//!
//! Each algorithm is run exactly once per benchmark:
//! - the clock covers the copy and the sort, nothing else
//! - the sortedness check runs after the clock stops
//! - a panic is caught here and turned into a reportable outcome

use crate::check::is_sorted;
use crate::sample::Key;
use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::time::{Duration, Instant};

/// Classification of one finished run
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Output was non-decreasing
    Passed,
    /// Output was returned but is out of order
    Failed,
    /// The algorithm panicked before returning
    Panicked { message: String },
}

impl Outcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, Outcome::Passed)
    }

    /// Short label used in CSV export
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Passed => "passed",
            Outcome::Failed => "failed",
            Outcome::Panicked { .. } => "panicked",
        }
    }
}

/// Result from timing a single algorithm
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunResult {
    /// Name of the algorithm
    pub name: &'static str,
    /// Wall-clock time of the copy and sort
    pub elapsed: Duration,
    pub outcome: Outcome,
    /// Length of the returned vector (0 when the run panicked)
    pub output_len: usize,
}

impl RunResult {
    /// Elapsed time in fractional milliseconds
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

impl fmt::Display for RunResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ms = self.elapsed_ms();
        match &self.outcome {
            Outcome::Passed => write!(f, "{} took {:.4} ms", self.name, ms),
            Outcome::Failed => write!(f, "{} FAILED in {:.4} ms", self.name, ms),
            Outcome::Panicked { message } => {
                write!(f, "{} PANICKED in {:.4} ms: {}", self.name, ms, message)
            }
        }
    }
}

/// Time `run` on a monotonic clock, then check its output.
///
/// `run` is expected to copy its input and sort the copy; both land inside
/// the measured span. Never panics itself.
pub fn time_run<F>(name: &'static str, run: F) -> RunResult
where
    F: FnOnce() -> Vec<Key>,
{
    let start = Instant::now();
    let result = panic::catch_unwind(AssertUnwindSafe(run));
    let elapsed = start.elapsed();

    match result {
        Ok(output) => RunResult {
            name,
            elapsed,
            outcome: if is_sorted(&output) {
                Outcome::Passed
            } else {
                Outcome::Failed
            },
            output_len: output.len(),
        },
        Err(payload) => RunResult {
            name,
            elapsed,
            outcome: Outcome::Panicked {
                message: panic_message(payload.as_ref()),
            },
            output_len: 0,
        },
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
