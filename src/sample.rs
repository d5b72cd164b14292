//! Shuffled benchmark input.
//!
//! A [`Sample`] is a uniformly random permutation of `0..n`, generated once
//! per benchmark and then only ever read. Algorithms receive it as a shared
//! slice and copy it before they start mutating.

use rand::seq::SliceRandom;
use rand::Rng;
use std::ops::Deref;

/// Element type of every sample and every sorted output
pub type Key = i64;

/// Immutable, shuffled permutation of `0..len`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sample {
    values: Box<[Key]>,
}

impl Sample {
    /// Build the identity sequence `0..len` and Fisher-Yates shuffle it with `rng`.
    ///
    /// Every permutation is equally likely. `len == 0` gives an empty sample.
    pub fn generate<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Self {
        let mut values: Vec<Key> = (0..len as Key).collect();
        values.shuffle(rng);
        Self {
            values: values.into_boxed_slice(),
        }
    }

    /// Wrap an explicit sequence (used for fixed scenarios and tests)
    pub fn from_values(values: impl Into<Vec<Key>>) -> Self {
        Self {
            values: values.into().into_boxed_slice(),
        }
    }

    pub fn as_slice(&self) -> &[Key] {
        &self.values
    }
}

impl Deref for Sample {
    type Target = [Key];

    fn deref(&self) -> &[Key] {
        &self.values
    }
}
