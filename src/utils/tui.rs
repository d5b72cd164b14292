//! Text User Interface (TUI) utilities.
//!
//! Handles the formatted output around the result lines: the banner, the
//! sample-size preamble, and the `--list` table.

use crate::registry::{AlgorithmEntry, AlgorithmRegistry};
use crate::sorting::SortKind;
use crate::utils::timer::{Outcome, RunResult};
use terminal_size::{terminal_size, Width};

/// Get the current terminal width, constrained to a reasonable range
fn get_term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).clamp(40, 200)
    } else {
        80
    }
}

/// Truncate string with ellipsis if it exceeds width (character-wise)
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut result: String = s.chars().take(width.saturating_sub(3)).collect();
        result.push_str("...");
        result
    }
}

/// Print the application banner
pub fn print_banner() {
    let term_width = get_term_width().min(80);
    let title = " Sort Bench ";
    let padding = term_width.saturating_sub(title.len()) / 2;
    let right_padding = term_width.saturating_sub(padding + title.len());

    let border = "═".repeat(term_width);

    println!("╔{}╗", border);
    println!("║{}{}{}║", " ".repeat(padding), title, " ".repeat(right_padding));
    println!("╚{}╝", border);
    println!();
}

/// Print the line that precedes the results
pub fn print_preamble(size: usize) {
    println!("To sort {} items:", size);
    println!();
}

/// Flags column for the algorithm list, e.g. "stable, in-place"
fn describe_flags(entry: &AlgorithmEntry) -> String {
    let variant = &entry.variant;
    let mut flags = Vec::new();
    if variant.kind == SortKind::Filter {
        flags.push("filter");
    }
    if variant.stable {
        flags.push("stable");
    }
    if variant.in_place {
        flags.push("in-place");
    }
    if variant.opt_in {
        flags.push("opt-in");
    }
    flags.join(", ")
}

/// Print the list of available algorithms
pub fn print_available_algorithms(registry: &AlgorithmRegistry) {
    let term_width = get_term_width();
    let desc_width = term_width.saturating_sub(24 + 28 + 4).max(20);

    println!("Available algorithms:");
    println!();
    for entry in registry.all() {
        println!(
            "  {:<24} {:<28} {}",
            entry.name(),
            format!("[{}]", describe_flags(entry)),
            truncate(entry.description(), desc_width)
        );
    }
}

/// Counts of (passed, failed, panicked)
pub fn tally(results: &[RunResult]) -> (usize, usize, usize) {
    results
        .iter()
        .fold((0, 0, 0), |(p, f, x), r| match r.outcome {
            Outcome::Passed => (p + 1, f, x),
            Outcome::Failed => (p, f + 1, x),
            Outcome::Panicked { .. } => (p, f, x + 1),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::build_registry;
    use std::time::Duration;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer description", 10), "a longe...");
    }

    #[test]
    fn test_describe_flags() {
        let registry = build_registry().unwrap();
        assert_eq!(
            describe_flags(registry.find("insertion_sort").unwrap()),
            "stable, in-place"
        );
        assert_eq!(
            describe_flags(registry.find("selective_filter").unwrap()),
            "filter, stable"
        );
        assert_eq!(
            describe_flags(registry.find("bogo_sort").unwrap()),
            "in-place, opt-in"
        );
    }

    #[test]
    fn test_tally() {
        let make = |outcome| RunResult {
            name: "x",
            elapsed: Duration::ZERO,
            outcome,
            output_len: 0,
        };
        let results = vec![
            make(Outcome::Passed),
            make(Outcome::Passed),
            make(Outcome::Failed),
            make(Outcome::Panicked {
                message: "boom".to_string(),
            }),
        ];
        assert_eq!(tally(&results), (2, 1, 1));
    }
}
