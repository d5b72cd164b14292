use super::SortRng;
use crate::sample::Key;

/// Keep each element only if it is strictly greater than the last one kept.
///
/// This is not a sort. The output is the greedy strictly increasing
/// subsequence starting at the first element, usually far shorter than the
/// input, and it always passes the sortedness check. It is raced purely as a
/// linear-time curiosity.
pub fn selective_filter(input: &[Key], _rng: &mut SortRng) -> Vec<Key> {
    let mut kept: Vec<Key> = Vec::new();

    for &item in input {
        // The last kept element is always the highest
        if kept.last().is_none_or(|&highest| item > highest) {
            kept.push(item);
        }
    }

    kept
}
