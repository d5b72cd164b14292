//! Sorting implementations.
//!
//! This module contains every algorithm the harness can race, plus the
//! variant table the registry is built from.

mod bogo;
mod bubble;
mod filter;
mod insertion;
mod library;
mod merge;
mod quick;

pub use bogo::bogo_sort;
pub use bubble::{bubble_sort, optimised_bubble_sort};
pub use filter::selective_filter;
pub use insertion::insertion_sort;
pub use library::{std_sort, std_sort_unstable};
pub use merge::{merge_sort, threaded_merge_sort, THREADED_MERGE_THRESHOLD};
pub use quick::{inplace_quicksort, recursive_quicksort};

use crate::sample::Key;
use rand::rngs::StdRng;

/// Random source owned by a single benchmark task
pub type SortRng = StdRng;

/// Signature shared by every algorithm.
///
/// The input is never mutated. The rng is only consulted by algorithms that
/// need randomness (pivot choice, bogo shuffles).
pub type SortFn = fn(&[Key], &mut SortRng) -> Vec<Key>;

/// How an algorithm relates its output to its input
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortKind {
    /// Output is a sorted permutation of the input
    Comparison,
    /// Output is a strictly increasing subsequence of the input
    Filter,
}

/// Information about one sorting algorithm
#[derive(Clone, Copy, Debug)]
pub struct SortVariant {
    /// Unique identifier (e.g., "merge_sort")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// The implementation
    pub function: SortFn,
    pub kind: SortKind,
    pub stable: bool,
    pub in_place: bool,
    /// Only dispatched when explicitly requested
    pub opt_in: bool,
}

/// Get every algorithm, in default dispatch order
pub fn available_variants() -> Vec<SortVariant> {
    vec![
        SortVariant {
            name: "std_sort",
            description: "Standard library stable sort (slice::sort)",
            function: std_sort,
            kind: SortKind::Comparison,
            stable: true,
            in_place: true,
            opt_in: false,
        },
        SortVariant {
            name: "std_sort_unstable",
            description: "Standard library unstable sort (slice::sort_unstable)",
            function: std_sort_unstable,
            kind: SortKind::Comparison,
            stable: false,
            in_place: true,
            opt_in: false,
        },
        SortVariant {
            name: "bubble_sort",
            description: "Full passes of adjacent compare-and-swap",
            function: bubble_sort,
            kind: SortKind::Comparison,
            stable: true,
            in_place: true,
            opt_in: false,
        },
        SortVariant {
            name: "optimised_bubble_sort",
            description: "Bubble sort that stops after a pass with no swaps",
            function: optimised_bubble_sort,
            kind: SortKind::Comparison,
            stable: true,
            in_place: true,
            opt_in: false,
        },
        SortVariant {
            name: "recursive_quicksort",
            description: "First-element pivot, partitions into new buffers and concatenates",
            function: recursive_quicksort,
            kind: SortKind::Comparison,
            stable: false,
            in_place: false,
            opt_in: false,
        },
        SortVariant {
            name: "inplace_quicksort",
            description: "Lomuto partition around a randomly chosen pivot",
            function: inplace_quicksort,
            kind: SortKind::Comparison,
            stable: false,
            in_place: true,
            opt_in: false,
        },
        SortVariant {
            name: "merge_sort",
            description: "Top-down merge sort",
            function: merge_sort,
            kind: SortKind::Comparison,
            stable: true,
            in_place: false,
            opt_in: false,
        },
        SortVariant {
            name: "threaded_merge_sort",
            description: "Merge sort that forks large halves onto scoped threads",
            function: threaded_merge_sort,
            kind: SortKind::Comparison,
            stable: true,
            in_place: false,
            opt_in: false,
        },
        SortVariant {
            name: "insertion_sort",
            description: "Shift each element left past its larger predecessors",
            function: insertion_sort,
            kind: SortKind::Comparison,
            stable: true,
            in_place: true,
            opt_in: false,
        },
        SortVariant {
            name: "selective_filter",
            description: "Drops every element not above the running maximum (not a real sort)",
            function: selective_filter,
            kind: SortKind::Filter,
            stable: true,
            in_place: false,
            opt_in: false,
        },
        SortVariant {
            name: "bogo_sort",
            description: "Shuffle until sorted; only feasible for tiny samples",
            function: bogo_sort,
            kind: SortKind::Comparison,
            stable: false,
            in_place: true,
            opt_in: true,
        },
    ]
}
