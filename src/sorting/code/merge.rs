use super::SortRng;
use crate::sample::Key;
use tracing::warn;

/// Halves at least this long are sorted on their own scoped thread
pub const THREADED_MERGE_THRESHOLD: usize = 100_000;

/// Top-down merge sort.
pub fn merge_sort(input: &[Key], _rng: &mut SortRng) -> Vec<Key> {
    let mut list = input.to_vec();
    let mut buffer = Vec::with_capacity(list.len());
    recursive_merge_sort(&mut list, &mut buffer, None);
    list
}

/// Merge sort that forks both halves onto scoped threads while they are
/// longer than [`THREADED_MERGE_THRESHOLD`].
///
/// See [`merge_sort`].
pub fn threaded_merge_sort(input: &[Key], _rng: &mut SortRng) -> Vec<Key> {
    if input.len() <= 2 * THREADED_MERGE_THRESHOLD {
        warn!(
            len = input.len(),
            "threaded_merge_sort only beats merge_sort above {} items",
            2 * THREADED_MERGE_THRESHOLD
        );
    }

    let mut list = input.to_vec();
    let mut buffer = Vec::with_capacity(list.len());
    recursive_merge_sort(&mut list, &mut buffer, Some(THREADED_MERGE_THRESHOLD));
    list
}

fn recursive_merge_sort(list: &mut [Key], buffer: &mut Vec<Key>, fork_above: Option<usize>) {
    if list.len() < 2 {
        return;
    }

    let mid = list.len() / 2;
    let (left, right) = list.split_at_mut(mid);

    match fork_above {
        Some(threshold) if left.len() > threshold || right.len() > threshold => {
            std::thread::scope(|s| {
                s.spawn(|| recursive_merge_sort(left, &mut Vec::new(), fork_above));
                s.spawn(|| recursive_merge_sort(right, &mut Vec::new(), fork_above));
            });
        }
        _ => {
            recursive_merge_sort(left, buffer, fork_above);
            recursive_merge_sort(right, buffer, fork_above);
        }
    }

    merge(list, mid, buffer);
}

/// Merge the sorted runs `list[..mid]` and `list[mid..]`.
///
/// Ties take from the left run so equal keys keep their order.
fn merge(list: &mut [Key], mid: usize, buffer: &mut Vec<Key>) {
    buffer.clear();

    let mut left_index = 0;
    let mut right_index = mid;

    while left_index < mid && right_index < list.len() {
        if list[left_index] <= list[right_index] {
            buffer.push(list[left_index]);
            left_index += 1;
        } else {
            buffer.push(list[right_index]);
            right_index += 1;
        }
    }

    // At most one of these is non-empty
    buffer.extend_from_slice(&list[left_index..mid]);
    buffer.extend_from_slice(&list[right_index..]);

    list.copy_from_slice(&buffer[..]);
}
