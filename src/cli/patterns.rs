use tracing::{debug, info};

use crate::cli::output::Answer;
use crate::cli::{load_dataset, DatasetArgs};
use crate::core::kmer::Kmer;
use crate::matching::frequent_words::{
    find_most_frequent, find_most_frequent_with_mismatches,
    find_most_frequent_with_mismatches_and_rc,
};
use crate::matching::hamming::hamming_distance;
use crate::matching::neighborhood::sorted_neighbors;
use crate::matching::occurrences::{
    find_approximate_occurrences, find_starting_positions, pattern_count as count_pattern,
};
use crate::parsing::dataset::{
    ApproxOccurrence, PatternD, PatternGenome, SequencePair, SingleSequence,
    TextK, TextKD, TextPattern,
};
use crate::utils::validation::check_neighborhood_size;

/// BA1A
///
/// # Errors
///
/// Returns an error if the dataset is malformed or the pattern is empty.
pub fn pattern_count(args: &DatasetArgs) -> anyhow::Result<Answer> {
    let dataset: TextPattern = load_dataset(args)?;
    Ok(Answer::Count(count_pattern(&dataset.text, &dataset.pattern)?))
}

/// BA1B
///
/// # Errors
///
/// Returns an error if the dataset is malformed or the text is shorter than k.
pub fn frequent_words(args: &DatasetArgs) -> anyhow::Result<Answer> {
    let dataset: TextK = load_dataset(args)?;
    let words = find_most_frequent(&dataset.text, dataset.k)?;
    info!(k = dataset.k, found = words.len(), "Most frequent k-mers");
    Ok(Answer::Kmers(words.into_iter().collect()))
}

/// BA1C
///
/// # Errors
///
/// Returns an error if the dataset is malformed.
pub fn reverse_complement(args: &DatasetArgs) -> anyhow::Result<Answer> {
    let dataset: SingleSequence = load_dataset(args)?;
    Ok(Answer::Sequence(dataset.sequence.reverse_complement()))
}

/// BA1D
///
/// # Errors
///
/// Returns an error if the dataset is malformed or the pattern is empty.
pub fn pattern_positions(args: &DatasetArgs) -> anyhow::Result<Answer> {
    let dataset: PatternGenome = load_dataset(args)?;
    let positions = find_starting_positions(&dataset.pattern, &dataset.genome)?;
    Ok(Answer::Positions(positions))
}

/// BA1G
///
/// # Errors
///
/// Returns an error if the dataset is malformed or the strings differ in length.
pub fn hamming(args: &DatasetArgs) -> anyhow::Result<Answer> {
    let dataset: SequencePair = load_dataset(args)?;
    let distance = hamming_distance(dataset.p.bases(), dataset.q.bases())?;
    Ok(Answer::Count(distance))
}

/// BA1H
///
/// # Errors
///
/// Returns an error if the dataset is malformed or the pattern is empty.
pub fn approx_positions(args: &DatasetArgs) -> anyhow::Result<Answer> {
    let dataset: ApproxOccurrence = load_dataset(args)?;
    let positions = find_approximate_occurrences(&dataset.pattern, &dataset.text, dataset.d)?;
    debug!(d = dataset.d, found = positions.len(), "Approximate occurrences");
    Ok(Answer::Positions(positions))
}

/// BA1I, or BA1J when `with_reverse_complements` is set
///
/// # Errors
///
/// Returns an error if the dataset is malformed, the neighborhood is too
/// large, or the text is shorter than k.
pub fn frequent_words_mismatches(
    args: &DatasetArgs,
    with_reverse_complements: bool,
) -> anyhow::Result<Answer> {
    let dataset: TextKD = load_dataset(args)?;
    check_neighborhood_size(dataset.k, dataset.d)?;

    let words = if with_reverse_complements {
        find_most_frequent_with_mismatches_and_rc(&dataset.text, dataset.k, dataset.d)?
    } else {
        find_most_frequent_with_mismatches(&dataset.text, dataset.k, dataset.d)?
    };
    info!(
        k = dataset.k,
        d = dataset.d,
        reverse_complements = with_reverse_complements,
        found = words.len(),
        "Most frequent k-mers with mismatches"
    );
    Ok(Answer::Kmers(words.into_iter().collect()))
}

/// BA1N
///
/// # Errors
///
/// Returns an error if the dataset is malformed, the pattern is not a valid
/// k-mer, or the neighborhood is too large.
pub fn neighbors(args: &DatasetArgs) -> anyhow::Result<Answer> {
    let dataset: PatternD = load_dataset(args)?;
    let pattern = Kmer::from_nucleotides(dataset.pattern.bases())?;
    check_neighborhood_size(pattern.len(), dataset.d)?;

    let neighborhood = sorted_neighbors(pattern, dataset.d);
    info!(pattern = %pattern, d = dataset.d, size = neighborhood.len(), "Generated neighborhood");
    Ok(Answer::KmerLines(neighborhood))
}
