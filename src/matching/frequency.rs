use std::collections::{BTreeSet, HashMap};

use crate::core::error::KmerError;
use crate::core::kmer::Kmer;
use crate::core::sequence::DnaSequence;

/// Count of each distinct k-mer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<Kmer, usize>,
}

impl FrequencyTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every exact length-`k` window of `text`.
    ///
    /// A text shorter than `k` has no windows and yields an empty table.
    ///
    /// # Errors
    ///
    /// Returns `KmerError::InvalidInput` if `k` is not a valid k-mer length.
    pub fn build(text: &DnaSequence, k: usize) -> Result<Self, KmerError> {
        let windows = text.kmers(k)?;
        let mut table = Self {
            counts: HashMap::with_capacity(text.window_count(k)),
        };
        for kmer in windows {
            table.increment(kmer);
        }
        Ok(table)
    }

    pub fn increment(&mut self, kmer: Kmer) {
        *self.counts.entry(kmer).or_insert(0) += 1;
    }

    /// Decrement a count, dropping the entry when it reaches zero
    pub fn decrement(&mut self, kmer: Kmer) {
        if let Some(count) = self.counts.get_mut(&kmer) {
            *count -= 1;
            if *count == 0 {
                self.counts.remove(&kmer);
            }
        }
    }

    #[must_use]
    pub fn count(&self, kmer: &Kmer) -> usize {
        self.counts.get(kmer).copied().unwrap_or(0)
    }

    /// Number of distinct k-mers
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Kmer, &usize)> {
        self.counts.iter()
    }

    /// Highest count in the table
    ///
    /// # Errors
    ///
    /// Returns `KmerError::EmptyInput` if the table has no entries.
    pub fn max_count(&self) -> Result<usize, KmerError> {
        self.counts.values().copied().max().ok_or_else(|| {
            KmerError::EmptyInput("cannot take the maximum of an empty frequency table".to_string())
        })
    }

    /// Every k-mer whose count equals the maximum. Ties are all kept.
    ///
    /// # Errors
    ///
    /// Returns `KmerError::EmptyInput` if the table has no entries.
    pub fn most_frequent(&self) -> Result<BTreeSet<Kmer>, KmerError> {
        let max = self.max_count()?;
        Ok(self
            .counts
            .iter()
            .filter(|(_, &count)| count == max)
            .map(|(kmer, _)| *kmer)
            .collect())
    }
}
