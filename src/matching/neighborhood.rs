//! d-neighborhood generation.
//!
//! The neighborhood of a pattern is built recursively from the neighborhood
//! of its suffix (the pattern minus its first base). A suffix neighbor that
//! still has mismatch budget left may take any of the four bases in front;
//! one that has used the full budget may only take the pattern's own first
//! base. Different recursive paths can produce the same string, so results
//! are collected into a set.

use std::collections::HashSet;

use crate::core::kmer::Kmer;
use crate::core::types::Nucleotide;

/// All k-mers within Hamming distance `d` of `pattern`, including `pattern` itself.
///
/// The set is unordered; use [`sorted_neighbors`] for a stable listing.
#[must_use]
pub fn neighbors(pattern: Kmer, d: usize) -> HashSet<Kmer> {
    if d == 0 {
        return HashSet::from([pattern]);
    }

    let Some(suffix) = pattern.suffix() else {
        return Nucleotide::ALL
            .iter()
            .map(|base| Kmer::from_raw(base.bits(), 1))
            .collect();
    };

    let suffix_neighbors = neighbors(suffix, d);
    let mut neighborhood = HashSet::with_capacity(suffix_neighbors.len() * 2);
    for suffix_neighbor in suffix_neighbors {
        if suffix.mismatches(&suffix_neighbor) < d {
            for base in Nucleotide::ALL {
                neighborhood.insert(suffix_neighbor.prepend_unchecked(base));
            }
        } else {
            neighborhood.insert(suffix_neighbor.prepend_unchecked(pattern.first()));
        }
    }
    neighborhood
}

/// The d-neighborhood of `pattern` in lexicographic order
#[must_use]
pub fn sorted_neighbors(pattern: Kmer, d: usize) -> Vec<Kmer> {
    let mut sorted: Vec<Kmer> = neighbors(pattern, d).into_iter().collect();
    sorted.sort_unstable();
    sorted
}

/// Size of the d-neighborhood of any k-mer: the sum over `i <= d` of `C(k, i) * 3^i`.
///
/// Computed without generating the neighborhood, so callers can reject
/// parameters whose neighborhoods would be too large to materialize.
#[must_use]
pub fn neighborhood_size(k: usize, d: usize) -> u128 {
    let mut total: u128 = 0;
    let mut binomial: u128 = 1;
    let mut substitutions: u128 = 1;
    for i in 0..=d.min(k) {
        if i > 0 {
            binomial = binomial * (k - i + 1) as u128 / i as u128;
            substitutions *= 3;
        }
        total += binomial * substitutions;
    }
    total
}
