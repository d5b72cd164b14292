use super::code::{self, SortKind, SortRng, SortVariant};
use crate::check::{is_permutation_of, is_sorted, is_strictly_increasing_subsequence};
use crate::sample::{Key, Sample};
use proptest::prelude::*;
use rand::SeedableRng;

fn rng() -> SortRng {
    SortRng::seed_from_u64(0x5eed)
}

/// Every variant that reorders rather than filters, except the opt-in bogo sort
fn comparison_variants() -> Vec<SortVariant> {
    code::available_variants()
        .into_iter()
        .filter(|v| v.kind == SortKind::Comparison && !v.opt_in)
        .collect()
}

#[test]
fn test_variant_names_are_unique() {
    let variants = code::available_variants();
    for (i, a) in variants.iter().enumerate() {
        for b in &variants[i + 1..] {
            assert_ne!(a.name, b.name, "duplicate variant name");
        }
    }
}

#[test]
fn test_scenario_three_one_two() {
    let input: Vec<Key> = vec![3, 1, 2];

    for variant in comparison_variants() {
        let result = (variant.function)(&input, &mut rng());
        assert_eq!(result, vec![1, 2, 3], "Variant {} mis-sorted [3,1,2]", variant.name);
    }

    let filtered = code::selective_filter(&input, &mut rng());
    assert_eq!(filtered, vec![3]);
    assert!(is_sorted(&filtered));
}

#[test]
fn test_empty_and_single_inputs() {
    for variant in code::available_variants() {
        let empty = (variant.function)(&[], &mut rng());
        assert!(empty.is_empty(), "Variant {} invented elements", variant.name);

        let single = (variant.function)(&[42], &mut rng());
        assert_eq!(single, vec![42], "Variant {} lost the only element", variant.name);
    }
}

#[test]
fn test_input_is_never_mutated() {
    let sample = Sample::generate(300, &mut rng());
    let snapshot = sample.clone();

    for variant in comparison_variants() {
        let _ = (variant.function)(&sample, &mut rng());
        assert_eq!(sample, snapshot, "Variant {} mutated its input", variant.name);
    }
}

#[test]
fn test_reverse_sorted_input() {
    let input: Vec<Key> = (0..500).rev().collect();
    let expected: Vec<Key> = (0..500).collect();

    for variant in comparison_variants() {
        assert_eq!((variant.function)(&input, &mut rng()), expected, "Variant {}", variant.name);
    }
}

#[test]
fn test_duplicates_are_kept() {
    let input: Vec<Key> = vec![5, -1, 5, 0, -1, 5, 3];
    let expected: Vec<Key> = vec![-1, -1, 0, 3, 5, 5, 5];

    for variant in comparison_variants() {
        assert_eq!((variant.function)(&input, &mut rng()), expected, "Variant {}", variant.name);
    }
}

#[test]
fn test_optimised_bubble_matches_bubble() {
    let sample = Sample::generate(400, &mut rng());
    assert_eq!(
        code::bubble_sort(&sample, &mut rng()),
        code::optimised_bubble_sort(&sample, &mut rng())
    );
}

#[test]
fn test_threaded_merge_matches_merge() {
    let sample = Sample::generate(10_000, &mut rng());
    assert_eq!(
        code::merge_sort(&sample, &mut rng()),
        code::threaded_merge_sort(&sample, &mut rng())
    );
}

#[test]
fn test_inplace_quicksort_reproducible_under_seed() {
    let sample = Sample::generate(1000, &mut rng());
    let a = code::inplace_quicksort(&sample, &mut SortRng::seed_from_u64(1));
    let b = code::inplace_quicksort(&sample, &mut SortRng::seed_from_u64(2));
    assert_eq!(a, b);
    assert!(is_sorted(&a));
}

#[test]
fn test_recursive_quicksort_sorted_input() {
    // First-element pivot hits its worst case here
    let input: Vec<Key> = (0..2000).collect();
    assert_eq!(code::recursive_quicksort(&input, &mut rng()), input);
}

#[test]
fn test_bogo_sort_small() {
    let input: Vec<Key> = vec![4, 2, 3, 0, 1];
    assert_eq!(code::bogo_sort(&input, &mut rng()), vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_selective_filter_keeps_zero() {
    let input: Vec<Key> = vec![0, 2, 1, 3];
    assert_eq!(code::selective_filter(&input, &mut rng()), vec![0, 2, 3]);
}

#[test]
fn test_selective_filter_on_sorted_is_identity() {
    let input: Vec<Key> = (0..100).collect();
    assert_eq!(code::selective_filter(&input, &mut rng()), input);
}

proptest! {
    #[test]
    fn prop_comparison_sorts_are_sorted_permutations(
        input in prop::collection::vec(-1000i64..1000, 0..200),
        seed: u64,
    ) {
        for variant in comparison_variants() {
            let result = (variant.function)(&input, &mut SortRng::seed_from_u64(seed));
            prop_assert!(is_sorted(&result), "{} not sorted", variant.name);
            prop_assert!(is_permutation_of(&result, &input), "{} changed the multiset", variant.name);
        }
    }

    #[test]
    fn prop_resorting_is_identity(
        input in prop::collection::vec(any::<i64>(), 0..200),
    ) {
        let mut sorted = input.clone();
        sorted.sort();
        for variant in comparison_variants() {
            let result = (variant.function)(&sorted, &mut rng());
            prop_assert_eq!(&result, &sorted, "{} disturbed sorted input", variant.name);
        }
    }

    #[test]
    fn prop_selective_filter_is_increasing_subsequence(
        input in prop::collection::vec(any::<i64>(), 0..300),
    ) {
        let result = code::selective_filter(&input, &mut rng());
        prop_assert!(is_strictly_increasing_subsequence(&result, &input));
        prop_assert!(is_sorted(&result));
        prop_assert!(result.len() <= input.len());
        if let Some(&first) = input.first() {
            prop_assert_eq!(result[0], first);
        }
    }
}
