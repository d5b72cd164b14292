use super::SortRng;
use crate::sample::Key;

/// Bubble sort with `n - 1` full passes, regardless of how early the list settles.
pub fn bubble_sort(input: &[Key], _rng: &mut SortRng) -> Vec<Key> {
    let mut list = input.to_vec();
    let passes = list.len().saturating_sub(1);

    for _ in 0..passes {
        for j in 0..passes {
            if list[j] > list[j + 1] {
                list.swap(j, j + 1);
            }
        }
    }

    list
}

/// Bubble sort that stops as soon as a pass makes no swaps.
///
/// Linear on input that is already sorted.
pub fn optimised_bubble_sort(input: &[Key], _rng: &mut SortRng) -> Vec<Key> {
    let mut list = input.to_vec();
    let passes = list.len().saturating_sub(1);

    for _ in 0..passes {
        let mut swapped = false;
        for j in 0..passes {
            if list[j] > list[j + 1] {
                list.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }

    list
}
