//! Shared benchmark utilities: seeding.
//!
//! One master seed drives a whole benchmark. The sample generator and every
//! task get their own `StdRng`, derived from it, so nothing touches a
//! process-wide random source and a fixed seed replays the run exactly.

use crate::sorting::SortRng;
use rand::SeedableRng;

/// Get a seed from current time for randomization
pub fn time_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x12345678)
}

/// Rng used to generate the sample
pub fn sample_rng(master_seed: u64) -> SortRng {
    SortRng::seed_from_u64(master_seed)
}

/// Rng owned by the task at `index` in the dispatch order
pub fn task_rng(master_seed: u64, index: usize) -> SortRng {
    SortRng::seed_from_u64(task_seed(master_seed, index))
}

/// Mix the master seed with a task index (splitmix64 finaliser)
fn task_seed(master_seed: u64, index: usize) -> u64 {
    let mut z = master_seed
        .wrapping_add((index as u64 + 1).wrapping_mul(0x9e3779b97f4a7c15));
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
    z ^ (z >> 31)
}
