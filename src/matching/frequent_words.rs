//! Most-frequent k-mer selection.
//!
//! All three variants accumulate a [`FrequencyTable`], take its maximum and
//! return every k-mer at that maximum. They differ only in what each text
//! window contributes to the table:
//!
//! | Variant | Per window |
//! |---------|------------|
//! | exact | +1 for the window itself |
//! | mismatches | +1 for each member of the window's d-neighborhood |
//! | mismatches + RC | as above, plus +1 for each neighbor's reverse complement |
//!
//! In the last variant a neighbor that is its own reverse complement
//! receives +2 per window.

use std::collections::BTreeSet;

use crate::core::error::KmerError;
use crate::core::kmer::Kmer;
use crate::core::sequence::DnaSequence;
use crate::matching::frequency::FrequencyTable;
use crate::matching::neighborhood::neighbors;

/// Most frequent exact k-mers in `text`
///
/// # Errors
///
/// Returns `KmerError::InvalidInput` for an invalid `k`, or
/// `KmerError::EmptyInput` if `text` is shorter than `k`.
pub fn find_most_frequent(text: &DnaSequence, k: usize) -> Result<BTreeSet<Kmer>, KmerError> {
    FrequencyTable::build(text, k)?.most_frequent()
}

/// Most frequent k-mers when each window also counts toward every k-mer
/// within `d` mismatches of it
///
/// # Errors
///
/// Returns `KmerError::InvalidInput` for an invalid `k`, or
/// `KmerError::EmptyInput` if `text` is shorter than `k`.
pub fn find_most_frequent_with_mismatches(
    text: &DnaSequence,
    k: usize,
    d: usize,
) -> Result<BTreeSet<Kmer>, KmerError> {
    let mut table = FrequencyTable::new();
    for window in text.kmers(k)? {
        for neighbor in neighbors(window, d) {
            table.increment(neighbor);
        }
    }
    table.most_frequent()
}

/// Most frequent k-mers counting approximate occurrences of both a k-mer and
/// its reverse complement
///
/// # Errors
///
/// Returns `KmerError::InvalidInput` for an invalid `k`, or
/// `KmerError::EmptyInput` if `text` is shorter than `k`.
pub fn find_most_frequent_with_mismatches_and_rc(
    text: &DnaSequence,
    k: usize,
    d: usize,
) -> Result<BTreeSet<Kmer>, KmerError> {
    let mut table = FrequencyTable::new();
    for window in text.kmers(k)? {
        for neighbor in neighbors(window, d) {
            table.increment(neighbor);
            table.increment(neighbor.reverse_complement());
        }
    }
    table.most_frequent()
}
