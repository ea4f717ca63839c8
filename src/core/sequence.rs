use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::core::error::KmerError;
use crate::core::kmer::{lane_mask, validate_kmer_length, Kmer};
use crate::core::types::Nucleotide;

/// An immutable DNA string over {A,C,G,T}.
///
/// Only constructible through validation, so every algorithm taking a
/// `DnaSequence` may assume a clean alphabet. An empty sequence is valid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct DnaSequence {
    bases: Vec<Nucleotide>,
}

impl DnaSequence {
    /// Validate and wrap a DNA string
    ///
    /// # Errors
    ///
    /// Returns `KmerError::InvalidInput` naming the first symbol outside {A,C,G,T}.
    pub fn new(text: &str) -> Result<Self, KmerError> {
        let bases = text
            .bytes()
            .enumerate()
            .map(|(i, byte)| {
                Nucleotide::from_ascii(byte).ok_or_else(|| {
                    KmerError::InvalidInput(format!(
                        "invalid nucleotide '{}' at position {i}",
                        byte.escape_ascii()
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { bases })
    }

    #[must_use]
    pub fn from_bases(bases: Vec<Nucleotide>) -> Self {
        Self { bases }
    }

    #[must_use]
    pub fn bases(&self) -> &[Nucleotide] {
        &self.bases
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bases.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    /// Number of length-`k` windows (zero when the sequence is shorter than `k`)
    #[must_use]
    pub fn window_count(&self, k: usize) -> usize {
        if k == 0 {
            return 0;
        }
        (self.len() + 1).saturating_sub(k)
    }

    /// Every length-`k` window as a packed k-mer, left to right
    ///
    /// # Errors
    ///
    /// Returns `KmerError::InvalidInput` if `k` is not a valid k-mer length.
    pub fn kmers(&self, k: usize) -> Result<KmerWindows<'_>, KmerError> {
        validate_kmer_length(k)?;
        Ok(KmerWindows {
            bases: &self.bases,
            k,
            next_start: 0,
            bits: 0,
            mask: lane_mask(k),
        })
    }

    /// Reverse complement; infallible because the alphabet is already validated
    #[must_use]
    pub fn reverse_complement(&self) -> Self {
        Self {
            bases: self.bases.iter().rev().map(|b| b.complement()).collect(),
        }
    }
}

/// Reverse complement of a raw DNA string
///
/// # Errors
///
/// Returns `KmerError::InvalidInput` if `text` contains a symbol outside {A,C,G,T}.
pub fn reverse_complement(text: &str) -> Result<String, KmerError> {
    Ok(DnaSequence::new(text)?.reverse_complement().to_string())
}

impl std::fmt::Display for DnaSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text: String = self.bases.iter().map(|b| b.to_ascii() as char).collect();
        f.write_str(&text)
    }
}

impl FromStr for DnaSequence {
    type Err = KmerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for DnaSequence {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Sliding k-mer windows over a [`DnaSequence`], maintained as a rolling
/// packed value so each step costs O(1).
pub struct KmerWindows<'a> {
    bases: &'a [Nucleotide],
    k: usize,
    next_start: usize,
    bits: u64,
    mask: u64,
}

impl Iterator for KmerWindows<'_> {
    type Item = Kmer;

    fn next(&mut self) -> Option<Kmer> {
        let end = self.next_start + self.k;
        if end > self.bases.len() {
            return None;
        }
        if self.next_start == 0 {
            self.bits = self.bases[..self.k]
                .iter()
                .fold(0u64, |acc, base| (acc << 2) | base.bits());
        } else {
            self.bits = ((self.bits << 2) | self.bases[end - 1].bits()) & self.mask;
        }
        self.next_start += 1;
        Some(Kmer::from_raw(self.bits, self.k))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.bases.len() + 1).saturating_sub(self.next_start + self.k);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for KmerWindows<'_> {}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn dna_string(max_len: usize) -> impl Strategy<Value = String> {
        proptest::collection::vec(
            prop_oneof![Just('A'), Just('C'), Just('G'), Just('T')],
            0..=max_len,
        )
        .prop_map(|v| v.into_iter().collect())
    }

    proptest! {
        #[test]
        fn reverse_complement_is_involution(text in dna_string(200)) {
            let once = reverse_complement(&text).unwrap();
            prop_assert_eq!(reverse_complement(&once).unwrap(), text);
        }

        #[test]
        fn windows_match_string_slices(text in dna_string(60), k in 1usize..=12) {
            let sequence = DnaSequence::new(&text).unwrap();
            let windows: Vec<String> = sequence.kmers(k).unwrap().map(|w| w.to_string()).collect();
            let expected: Vec<String> = if text.len() >= k {
                (0..=text.len() - k).map(|i| text[i..i + k].to_string()).collect()
            } else {
                Vec::new()
            };
            prop_assert_eq!(windows, expected);
        }
    }
}
