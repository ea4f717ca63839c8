use crate::core::error::KmerError;
use crate::core::kmer::{validate_kmer_length, Kmer};
use crate::core::sequence::DnaSequence;

/// Longest median string searched; the search visits all 4^k k-mers
pub const MAX_MEDIAN_STRING_LENGTH: usize = 14;

fn require_long_enough(pattern_len: usize, sequences: &[DnaSequence]) -> Result<(), KmerError> {
    if let Some((i, short)) = sequences
        .iter()
        .enumerate()
        .find(|(_, s)| s.len() < pattern_len)
    {
        return Err(KmerError::InvalidInput(format!(
            "sequence {} has length {} but the pattern has length {pattern_len}",
            i + 1,
            short.len()
        )));
    }
    Ok(())
}

/// Smallest Hamming distance between `pattern` and any window of `sequence`.
/// Caller guarantees `sequence` is at least as long as `pattern`.
fn local_distance(pattern: &Kmer, sequence: &DnaSequence) -> Result<usize, KmerError> {
    let mut best = pattern.len();
    for window in sequence.kmers(pattern.len())? {
        best = best.min(pattern.mismatches(&window));
        if best == 0 {
            break;
        }
    }
    Ok(best)
}

/// Total distance between `pattern` and a collection of sequences: the sum,
/// over sequences, of the best Hamming distance to any of its windows.
///
/// # Errors
///
/// Returns `KmerError::InvalidInput` if any sequence is shorter than `pattern`.
pub fn distance(pattern: &Kmer, sequences: &[DnaSequence]) -> Result<usize, KmerError> {
    require_long_enough(pattern.len(), sequences)?;
    sequences
        .iter()
        .map(|sequence| local_distance(pattern, sequence))
        .sum()
}

/// Every k-mer minimizing [`distance`] to `sequences`, in lexicographic order.
///
/// Exhaustive over all 4^k k-mers. The running bound starts at the worst
/// possible total (`k * sequences.len()`); a strictly smaller distance resets
/// the result, an equal one extends it.
///
/// # Errors
///
/// Returns `KmerError::InvalidInput` if `k` is zero, larger than
/// [`MAX_MEDIAN_STRING_LENGTH`], or longer than any sequence.
pub fn find_median_strings(k: usize, sequences: &[DnaSequence]) -> Result<Vec<Kmer>, KmerError> {
    validate_kmer_length(k)?;
    if k > MAX_MEDIAN_STRING_LENGTH {
        return Err(KmerError::InvalidInput(format!(
            "median string length {k} exceeds maximum of {MAX_MEDIAN_STRING_LENGTH}"
        )));
    }
    require_long_enough(k, sequences)?;

    let mut best = k * sequences.len();
    let mut medians = Vec::new();
    for index in 0..(1u64 << (2 * k)) {
        let pattern = Kmer::from_raw(index, k);
        let total = sequences
            .iter()
            .map(|sequence| local_distance(&pattern, sequence))
            .sum::<Result<usize, _>>()?;
        if total < best {
            best = total;
            medians.clear();
            medians.push(pattern);
        } else if total == best {
            medians.push(pattern);
        }
    }
    Ok(medians)
}
