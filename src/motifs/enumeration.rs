use std::collections::{BTreeSet, HashSet};

use crate::core::error::KmerError;
use crate::core::kmer::{validate_kmer_length, Kmer};
use crate::core::sequence::DnaSequence;
use crate::matching::neighborhood::neighbors;

/// Every k-mer within `d` mismatches of some window of `sequence`
fn candidate_patterns(
    sequence: &DnaSequence,
    k: usize,
    d: usize,
) -> Result<HashSet<Kmer>, KmerError> {
    let mut candidates = HashSet::new();
    for window in sequence.kmers(k)? {
        candidates.extend(neighbors(window, d));
    }
    Ok(candidates)
}

/// All (k, d)-motifs of `sequences`: k-mers that occur with at most `d`
/// mismatches in every sequence.
///
/// An empty collection has no motifs. A sequence shorter than `k` has no
/// windows, so it also leaves the result empty.
///
/// # Errors
///
/// Returns `KmerError::InvalidInput` if `k` is not a valid k-mer length.
pub fn find_k_d_motifs(
    k: usize,
    d: usize,
    sequences: &[DnaSequence],
) -> Result<BTreeSet<Kmer>, KmerError> {
    validate_kmer_length(k)?;

    let mut motifs: Option<HashSet<Kmer>> = None;
    for sequence in sequences {
        let candidates = candidate_patterns(sequence, k, d)?;
        let remaining = match motifs {
            None => candidates,
            Some(current) => current
                .into_iter()
                .filter(|kmer| candidates.contains(kmer))
                .collect(),
        };
        if remaining.is_empty() {
            return Ok(BTreeSet::new());
        }
        motifs = Some(remaining);
    }

    Ok(motifs.unwrap_or_default().into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dnas(seqs: &[&str]) -> Vec<DnaSequence> {
        seqs.iter().map(|s| s.parse().unwrap()).collect()
    }

    fn rendered(kmers: &BTreeSet<Kmer>) -> Vec<String> {
        kmers.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_rosalind_sample() {
        let sequences = dnas(&["ATTTGGC", "TGCCTTA", "CGGTATC", "GAAAATT"]);
        let motifs = find_k_d_motifs(3, 1, &sequences).unwrap();
        assert_eq!(rendered(&motifs), vec!["ATA", "ATT", "GTT", "TTT"]);
    }

    #[test]
    fn test_empty_collection_has_no_motifs() {
        assert!(find_k_d_motifs(3, 1, &[]).unwrap().is_empty());
    }

    #[test]
    fn test_short_sequence_empties_result() {
        let sequences = dnas(&["ATTTGGC", "TG", "CGGTATC"]);
        assert!(find_k_d_motifs(3, 1, &sequences).unwrap().is_empty());
    }

    #[test]
    fn test_empty_intersection_stays_empty() {
        // No shared 3-mer between the first two, so a later sequence must not re-seed the result
        let sequences = dnas(&["AAAAAA", "CCCCCC", "AAAAAA"]);
        assert!(find_k_d_motifs(3, 0, &sequences).unwrap().is_empty());
    }

    #[test]
    fn test_single_sequence_is_its_candidate_set() {
        let motifs = find_k_d_motifs(2, 0, &dnas(&["ACGA"])).unwrap();
        assert_eq!(rendered(&motifs), vec!["AC", "CG", "GA"]);
    }

    #[test]
    fn test_invalid_k() {
        assert!(find_k_d_motifs(0, 1, &dnas(&["ACGT"])).is_err());
    }
}
