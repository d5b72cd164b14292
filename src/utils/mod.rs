//! Utility modules for timing, seeding, output and pinning.

pub mod bench;
pub mod cpu_affinity;
pub mod runner;
pub mod timer;
pub mod tui;

// Re-export commonly used items
pub use bench::{sample_rng, task_rng, time_seed};
pub use cpu_affinity::CpuPinGuard;
pub use runner::export_csv;
pub use timer::{time_run, Outcome, RunResult};
