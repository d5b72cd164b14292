//! End-to-end runs through the public API.

use sort_bench::check::{is_permutation_of, is_strictly_increasing_subsequence};
use sort_bench::prelude::*;
use sort_bench::sorting::{SortKind, SortRng};
use sort_bench::BenchError;
use rand::SeedableRng;

fn config(size: usize, seed: u64) -> BenchConfig {
    BenchConfig {
        size,
        seed,
        ..BenchConfig::default()
    }
}

#[test]
fn every_algorithm_reports_exactly_once() {
    let sink = MemorySink::new();
    let (_, results) = sort_bench::run_benchmark(&config(500, 11), &sink).unwrap();

    let registry = build_registry().unwrap();
    let expected = registry.select(None, false).unwrap();
    assert_eq!(results.len(), expected.len());
    assert_eq!(sink.results().len(), expected.len());
    assert!(results.iter().all(|r| r.outcome.is_passed()));
}

#[test]
fn empty_sample_passes_everywhere() {
    let sink = MemorySink::new();
    let (sample, results) = sort_bench::run_benchmark(&config(0, 1), &sink).unwrap();

    assert!(sample.is_empty());
    for result in &results {
        assert_eq!(result.outcome, Outcome::Passed, "{}", result.name);
        assert_eq!(result.output_len, 0);
    }
}

#[test]
fn single_item_sample_passes_everywhere() {
    let sink = MemorySink::new();
    let cfg = BenchConfig {
        include_opt_in: true,
        ..config(1, 2)
    };
    let (_, results) = sort_bench::run_benchmark(&cfg, &sink).unwrap();

    assert!(results.iter().any(|r| r.name == "bogo_sort"));
    for result in &results {
        assert_eq!(result.outcome, Outcome::Passed, "{}", result.name);
        assert_eq!(result.output_len, 1);
    }
}

#[test]
fn filter_output_is_shorter_but_still_passes() {
    let sink = MemorySink::new();
    let cfg = BenchConfig {
        only: Some(vec!["selective_filter".to_string(), "merge_sort".to_string()]),
        ..config(2000, 5)
    };
    let (_, results) = sort_bench::run_benchmark(&cfg, &sink).unwrap();

    let filter = results.iter().find(|r| r.name == "selective_filter").unwrap();
    let merge = results.iter().find(|r| r.name == "merge_sort").unwrap();
    assert!(filter.outcome.is_passed());
    assert!(filter.output_len < 2000);
    assert_eq!(merge.output_len, 2000);
}

#[test]
fn unknown_algorithm_fails_before_dispatch() {
    let sink = MemorySink::new();
    let cfg = BenchConfig {
        only: Some(vec!["quantum_sort".to_string()]),
        ..config(10, 1)
    };
    let err = sort_bench::run_benchmark(&cfg, &sink).unwrap_err();
    assert!(matches!(err, BenchError::UnknownAlgorithm { .. }));
    assert!(sink.results().is_empty());
}

#[test]
fn shared_sample_is_never_cross_contaminated() {
    // Every value appears once, including the marker; each output must
    // contain the marker exactly once.
    const MARKER: Key = -1;
    let mut values: Vec<Key> = (0..300).rev().collect();
    values[150] = MARKER;
    let sample = Sample::from_values(values);

    let registry = build_registry().unwrap();
    let entries = registry.select(None, false).unwrap();

    std::thread::scope(|s| {
        let handles: Vec<_> = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let sample = &sample;
                s.spawn(move || {
                    let output = (entry.function())(sample, &mut SortRng::seed_from_u64(i as u64));
                    (entry, output)
                })
            })
            .collect();

        for handle in handles {
            let (entry, output) = handle.join().unwrap();
            let markers = output.iter().filter(|&&v| v == MARKER).count();
            match entry.variant.kind {
                SortKind::Comparison => {
                    assert_eq!(markers, 1, "{} lost or duplicated the marker", entry.name());
                    assert!(is_permutation_of(&output, &sample), "{}", entry.name());
                }
                SortKind::Filter => {
                    assert!(markers <= 1);
                    assert!(is_strictly_increasing_subsequence(&output, &sample));
                }
            }
        }
    });
}

#[test]
fn reported_lines_follow_the_format() {
    let sink = MemorySink::new();
    let (_, results) = sort_bench::run_benchmark(&config(100, 8), &sink).unwrap();

    for result in &results {
        let line = result.to_string();
        let prefix = format!("{} took ", result.name);
        assert!(line.starts_with(&prefix), "unexpected line: {line}");
        assert!(line.ends_with(" ms"));
        let ms = &line[prefix.len()..line.len() - 3];
        let (_, frac) = ms.split_once('.').unwrap();
        assert_eq!(frac.len(), 4);
    }
}

#[test]
fn same_seed_same_sample() {
    let (a, _) = sort_bench::run_benchmark(&config(64, 77), &MemorySink::new()).unwrap();
    let (b, _) = sort_bench::run_benchmark(&config(64, 77), &MemorySink::new()).unwrap();
    assert_eq!(a, b);
}
