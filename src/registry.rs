//! Algorithm registry for dispatch.
//!
//! The registry is the static table of (name, function) pairs the
//! dispatcher iterates. It is assembled once at startup and never changes.

use crate::check::{is_permutation_of, is_sorted, is_strictly_increasing_subsequence};
use crate::error::{BenchError, Result};
use crate::sample::Sample;
use crate::sorting::{self, SortFn, SortKind, SortRng, SortVariant};
use rand::SeedableRng;

/// One named algorithm that can be dispatched
#[derive(Clone, Copy, Debug)]
pub struct AlgorithmEntry {
    pub variant: SortVariant,
}

impl AlgorithmEntry {
    pub fn name(&self) -> &'static str {
        self.variant.name
    }

    pub fn description(&self) -> &'static str {
        self.variant.description
    }

    pub fn function(&self) -> SortFn {
        self.variant.function
    }

    /// Check the algorithm's contract against a fixed shuffled sample
    pub fn verify(&self) -> std::result::Result<(), String> {
        let mut rng = SortRng::seed_from_u64(0xdeadbeef);
        let len = if self.variant.opt_in { 6 } else { 257 };
        let sample = Sample::generate(len, &mut rng);
        let snapshot = sample.clone();

        let output = (self.variant.function)(&sample, &mut rng);

        if sample != snapshot {
            return Err(format!("'{}' mutated its input", self.name()));
        }
        if !is_sorted(&output) {
            return Err(format!("'{}' returned an unsorted vector", self.name()));
        }
        let holds = match self.variant.kind {
            SortKind::Comparison => is_permutation_of(&output, &sample),
            SortKind::Filter => is_strictly_increasing_subsequence(&output, &sample),
        };
        if !holds {
            return Err(format!(
                "'{}' output does not match its {:?} contract",
                self.name(),
                self.variant.kind
            ));
        }
        Ok(())
    }
}

/// The table of every known algorithm
pub struct AlgorithmRegistry {
    entries: Vec<AlgorithmEntry>,
}

impl AlgorithmRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register an algorithm. Names must be unique.
    pub fn register(&mut self, variant: SortVariant) -> Result<()> {
        if self.find(variant.name).is_some() {
            return Err(BenchError::DuplicateAlgorithm {
                name: variant.name.to_string(),
            });
        }
        self.entries.push(AlgorithmEntry { variant });
        Ok(())
    }

    /// Get all registered algorithms, in registration order
    pub fn all(&self) -> &[AlgorithmEntry] {
        &self.entries
    }

    /// Find algorithm by name
    pub fn find(&self, name: &str) -> Option<&AlgorithmEntry> {
        self.entries.iter().find(|e| e.name() == name)
    }

    /// List algorithm names
    pub fn list_names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|e| e.name()).collect()
    }

    /// Resolve the entries to dispatch.
    ///
    /// With `only`, exactly the named algorithms in the given order (opt-in
    /// ones included). Without it, every default entry, plus the opt-in
    /// ones when `include_opt_in` is set.
    pub fn select(&self, only: Option<&[String]>, include_opt_in: bool) -> Result<Vec<AlgorithmEntry>> {
        let selected: Vec<AlgorithmEntry> = match only {
            Some(names) => names
                .iter()
                .map(|name| {
                    self.find(name).copied().ok_or_else(|| BenchError::UnknownAlgorithm {
                        name: name.clone(),
                        available: self.list_names(),
                    })
                })
                .collect::<Result<_>>()?,
            None => self
                .entries
                .iter()
                .filter(|e| include_opt_in || !e.variant.opt_in)
                .copied()
                .collect(),
        };

        if selected.is_empty() {
            return Err(BenchError::EmptySelection);
        }
        for (i, entry) in selected.iter().enumerate() {
            if selected[..i].iter().any(|e| e.name() == entry.name()) {
                return Err(BenchError::DuplicateAlgorithm {
                    name: entry.name().to_string(),
                });
            }
        }
        Ok(selected)
    }
}

impl Default for AlgorithmRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the default registry with all algorithms
pub fn build_registry() -> Result<AlgorithmRegistry> {
    let mut registry = AlgorithmRegistry::new();

    for variant in sorting::available_variants() {
        registry.register(variant)?;
    }

    Ok(registry)
}
