use crate::core::error::KmerError;
use crate::core::sequence::DnaSequence;
use crate::core::types::Nucleotide;
use crate::matching::hamming::hamming_distance;

fn require_pattern(pattern: &DnaSequence) -> Result<(), KmerError> {
    if pattern.is_empty() {
        return Err(KmerError::InvalidInput("pattern must not be empty".to_string()));
    }
    Ok(())
}

/// Every length-`len` window of `text`, paired with its start position
fn windows<'a>(
    text: &'a DnaSequence,
    len: usize,
) -> impl Iterator<Item = (usize, &'a [Nucleotide])> + 'a {
    text.bases().windows(len).enumerate()
}

/// Number of (possibly overlapping) exact occurrences of `pattern` in `text`
///
/// # Errors
///
/// Returns `KmerError::InvalidInput` if `pattern` is empty.
pub fn pattern_count(text: &DnaSequence, pattern: &DnaSequence) -> Result<usize, KmerError> {
    require_pattern(pattern)?;
    Ok(windows(text, pattern.len())
        .filter(|(_, window)| *window == pattern.bases())
        .count())
}

/// 0-based start of each exact occurrence of `pattern` in `genome`, ascending
///
/// # Errors
///
/// Returns `KmerError::InvalidInput` if `pattern` is empty.
pub fn find_starting_positions(
    pattern: &DnaSequence,
    genome: &DnaSequence,
) -> Result<Vec<usize>, KmerError> {
    require_pattern(pattern)?;
    Ok(windows(genome, pattern.len())
        .filter(|(_, window)| *window == pattern.bases())
        .map(|(start, _)| start)
        .collect())
}

/// 0-based start of each window of `text` within Hamming distance `d` of `pattern`
///
/// # Errors
///
/// Returns `KmerError::InvalidInput` if `pattern` is empty.
pub fn find_approximate_occurrences(
    pattern: &DnaSequence,
    text: &DnaSequence,
    d: usize,
) -> Result<Vec<usize>, KmerError> {
    require_pattern(pattern)?;
    let mut positions = Vec::new();
    for (start, window) in windows(text, pattern.len()) {
        if hamming_distance(pattern.bases(), window)? <= d {
            positions.push(start);
        }
    }
    Ok(positions)
}
