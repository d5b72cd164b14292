use super::SortRng;
use crate::sample::Key;

/// Copy then `slice::sort` (stable driftsort).
pub fn std_sort(input: &[Key], _rng: &mut SortRng) -> Vec<Key> {
    let mut list = input.to_vec();
    list.sort();
    list
}

/// Copy then `slice::sort_unstable` (pattern-defeating quicksort).
pub fn std_sort_unstable(input: &[Key], _rng: &mut SortRng) -> Vec<Key> {
    let mut list = input.to_vec();
    list.sort_unstable();
    list
}
