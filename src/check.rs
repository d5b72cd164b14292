//! Post-run correctness predicates.

use crate::sample::Key;
use std::collections::HashMap;

/// True iff every adjacent pair is non-decreasing.
///
/// Empty and single-element slices are trivially sorted.
pub fn is_sorted(values: &[Key]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

/// True iff `values` is strictly increasing and appears in `source` in the same order
pub fn is_strictly_increasing_subsequence(values: &[Key], source: &[Key]) -> bool {
    if !values.windows(2).all(|w| w[0] < w[1]) {
        return false;
    }
    let mut remaining = source.iter();
    values.iter().all(|v| remaining.any(|s| s == v))
}

/// True iff both slices hold the same multiset of keys
pub fn is_permutation_of(values: &[Key], source: &[Key]) -> bool {
    if values.len() != source.len() {
        return false;
    }
    let mut counts: HashMap<Key, isize> = HashMap::with_capacity(source.len());
    for &v in source {
        *counts.entry(v).or_default() += 1;
    }
    for &v in values {
        *counts.entry(v).or_default() -= 1;
    }
    counts.values().all(|&c| c == 0)
}
