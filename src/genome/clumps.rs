use std::collections::HashSet;

use crate::core::error::KmerError;
use crate::core::kmer::{validate_kmer_length, Kmer};
use crate::core::sequence::DnaSequence;
use crate::matching::frequency::FrequencyTable;

/// Distinct k-mers that occur at least `t` times inside some length-`window`
/// substring of `genome`.
///
/// Results are ordered by first detection: by window start, then by first
/// appearance within that window. The window's frequency table is updated
/// incrementally as it slides; only the entering k-mer's count can rise, so
/// it is the only candidate for a newly formed clump.
///
/// A window longer than the genome, or shorter than `k`, yields no clumps.
///
/// # Errors
///
/// Returns `KmerError::InvalidInput` if `k` is not a valid k-mer length.
pub fn find_clumps(
    genome: &DnaSequence,
    k: usize,
    window: usize,
    t: usize,
) -> Result<Vec<Kmer>, KmerError> {
    validate_kmer_length(k)?;
    if window < k || window > genome.len() {
        return Ok(Vec::new());
    }

    let kmers: Vec<Kmer> = genome.kmers(k)?.collect();
    let kmers_per_window = window - k + 1;

    let mut table = FrequencyTable::new();
    let mut reported = HashSet::new();
    let mut clumps = Vec::new();

    for &kmer in &kmers[..kmers_per_window] {
        table.increment(kmer);
    }
    for &kmer in &kmers[..kmers_per_window] {
        if table.count(&kmer) >= t && reported.insert(kmer) {
            clumps.push(kmer);
        }
    }

    for start in 1..=(genome.len() - window) {
        table.decrement(kmers[start - 1]);
        let entering = kmers[start + kmers_per_window - 1];
        table.increment(entering);
        if table.count(&entering) >= t && reported.insert(entering) {
            clumps.push(entering);
        }
    }

    Ok(clumps)
}

#[cfg(test)]
mod tests {
    use super::*;

    const GENOME: &str = "CGGACTCGACAGATGTGAAGAAATGTGAAGACTGAGTGAAGAGAAGAGGAAACACGACACGACATTGCGACATAATGTACGAATGTAATGTGCCTATGGC";

    fn dna(s: &str) -> DnaSequence {
        s.parse().unwrap()
    }

    fn rendered(kmers: &[Kmer]) -> Vec<String> {
        kmers.iter().map(ToString::to_string).collect()
    }

    /// Rebuild the table for every window, as a reference for the sliding version
    fn find_clumps_by_rebuild(genome: &str, k: usize, window: usize, t: usize) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for start in 0..=(genome.len() - window) {
            let text = dna(&genome[start..start + window]);
            let table = FrequencyTable::build(&text, k).unwrap();
            for kmer in text.kmers(k).unwrap() {
                if table.count(&kmer) >= t && seen.insert(kmer) {
                    out.push(kmer.to_string());
                }
            }
        }
        out
    }

    #[test]
    fn test_sample_in_first_occurrence_order() {
        let clumps = find_clumps(&dna(GENOME), 5, 75, 4).unwrap();
        assert_eq!(rendered(&clumps), vec!["CGACA", "GAAGA", "AATGT"]);
    }

    #[test]
    fn test_matches_full_rebuild() {
        for (k, window, t) in [(5, 75, 4), (5, 50, 4), (3, 20, 2), (4, 100, 3)] {
            let clumps = find_clumps(&dna(GENOME), k, window, t).unwrap();
            assert_eq!(
                rendered(&clumps),
                find_clumps_by_rebuild(GENOME, k, window, t),
                "k={k} L={window} t={t}"
            );
        }
    }

    #[test]
    fn test_window_larger_than_genome() {
        assert!(find_clumps(&dna("ACGTACGT"), 2, 9, 1).unwrap().is_empty());
    }

    #[test]
    fn test_window_shorter_than_k() {
        assert!(find_clumps(&dna("ACGTACGT"), 4, 3, 1).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_k() {
        assert!(find_clumps(&dna("ACGT"), 0, 3, 1).is_err());
    }
}
