//! # Sorting Algorithms
//!
//! Every algorithm takes the shared sample as a borrowed slice and returns a
//! freshly allocated vector. Algorithms that work in place copy the slice
//! first, so concurrent runs over the same sample never observe each other.
//!
//! ## Strategies
//!
//! - **Bubble sort**: full passes of adjacent swaps, with an early-exit variant
//! - **Quicksort**: a functional version (first-element pivot, new buffers per
//!   call) and an in-place Lomuto version with a random pivot
//! - **Merge sort**: top-down, single threaded and with scoped threads for
//!   large halves
//! - **Insertion sort**: shift each element left past larger predecessors
//! - **Selective filter**: not a sort. Keeps only elements larger than
//!   everything kept so far, so the output is usually shorter than the input
//! - **Library baselines**: `slice::sort` and `slice::sort_unstable`
//! - **Bogo sort**: shuffle until sorted, opt-in only

pub mod code;
#[cfg(test)]
mod test;

pub use code::*;
