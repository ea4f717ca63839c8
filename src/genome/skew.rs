use crate::core::sequence::DnaSequence;
use crate::core::types::Nucleotide;

/// Running G - C count along `genome`.
///
/// The result has `genome.len() + 1` entries: `skews[0]` is 0 and `skews[i]`
/// covers the first `i` bases, so it is one position out of phase with the
/// genome itself.
#[must_use]
pub fn skews(genome: &DnaSequence) -> Vec<i64> {
    let mut skews = Vec::with_capacity(genome.len() + 1);
    let mut skew = 0i64;
    skews.push(skew);
    for base in genome.bases() {
        match base {
            Nucleotide::G => skew += 1,
            Nucleotide::C => skew -= 1,
            Nucleotide::A | Nucleotide::T => {}
        }
        skews.push(skew);
    }
    skews
}

/// Every index at which `skews` reaches its global minimum, ascending
#[must_use]
pub fn min_skew_positions(skews: &[i64]) -> Vec<usize> {
    let Some(&min) = skews.iter().min() else {
        return Vec::new();
    };
    skews
        .iter()
        .enumerate()
        .filter(|(_, &skew)| skew == min)
        .map(|(i, _)| i)
        .collect()
}
