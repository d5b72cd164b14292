use super::SortRng;
use crate::sample::Key;

/// In-place insertion sort. Linear on nearly sorted input.
pub fn insertion_sort(input: &[Key], _rng: &mut SortRng) -> Vec<Key> {
    let mut list = input.to_vec();

    for j in 1..list.len() {
        let next_item = list[j];
        let mut i = j;

        while i > 0 && list[i - 1] > next_item {
            list[i] = list[i - 1];
            i -= 1;
        }

        list[i] = next_item;
    }

    list
}
