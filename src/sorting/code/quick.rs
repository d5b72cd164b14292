use super::SortRng;
use crate::sample::Key;
use rand::Rng;

/// Functional quicksort: first element as pivot, two filtered copies, concatenate.
///
/// Degrades to quadratic time (and linear recursion depth) on sorted or
/// reverse-sorted input.
pub fn recursive_quicksort(input: &[Key], _rng: &mut SortRng) -> Vec<Key> {
    quicksort_slice(input)
}

fn quicksort_slice(list: &[Key]) -> Vec<Key> {
    if list.len() < 2 {
        return list.to_vec();
    }

    let pivot = list[0];
    let rest = &list[1..];

    let lower: Vec<Key> = rest.iter().copied().filter(|&x| x < pivot).collect();
    let higher: Vec<Key> = rest.iter().copied().filter(|&x| x >= pivot).collect();

    let mut sorted = quicksort_slice(&lower);
    sorted.reserve(higher.len() + 1);
    sorted.push(pivot);
    sorted.extend(quicksort_slice(&higher));
    sorted
}

/// In-place quicksort with a Lomuto partition around a random pivot.
pub fn inplace_quicksort(input: &[Key], rng: &mut SortRng) -> Vec<Key> {
    let mut list = input.to_vec();
    quicksort_range(&mut list, rng);
    list
}

fn quicksort_range(mut list: &mut [Key], rng: &mut SortRng) {
    // Recurse into the smaller side and loop on the larger one to keep the
    // stack logarithmic.
    while list.len() > 1 {
        let pivot_index = rng.random_range(0..list.len());
        let split = partition(list, pivot_index);

        let (left, right) = std::mem::take(&mut list).split_at_mut(split);
        let right = &mut right[1..];

        if left.len() < right.len() {
            quicksort_range(left, rng);
            list = right;
        } else {
            quicksort_range(right, rng);
            list = left;
        }
    }
}

/// Move the pivot to the front, sweep everything `<= pivot` behind it, then
/// drop the pivot into its final slot. Returns that slot.
fn partition(list: &mut [Key], pivot_index: usize) -> usize {
    list.swap(0, pivot_index);
    let pivot = list[0];
    let mut store = 1;

    for j in 1..list.len() {
        if list[j] <= pivot {
            list.swap(j, store);
            store += 1;
        }
    }

    list.swap(0, store - 1);
    store - 1
}
