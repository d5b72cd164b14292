use super::SortRng;
use crate::check::is_sorted;
use crate::sample::Key;
use rand::seq::SliceRandom;

/// Shuffle the list until it happens to be sorted.
///
/// Expected `O(n * n!)`. Anything beyond a handful of elements will not
/// finish, which is why the registry only dispatches it on request.
pub fn bogo_sort(input: &[Key], rng: &mut SortRng) -> Vec<Key> {
    let mut list = input.to_vec();

    while !is_sorted(&list) {
        list.shuffle(rng);
    }

    list
}
