use tracing::{info, warn};

use crate::cli::output::Answer;
use crate::cli::{load_dataset, DatasetArgs, MedianArgs};
use crate::core::kmer::Kmer;
use crate::motifs::enumeration::find_k_d_motifs;
use crate::motifs::median::{distance as total_distance, find_median_strings};
use crate::parsing::dataset::{MedianDataset, MotifDataset, PatternDnas};
use crate::utils::validation::check_neighborhood_size;

/// BA2A
///
/// # Errors
///
/// Returns an error if the dataset is malformed or the neighborhood is too large.
pub fn motifs(args: &DatasetArgs) -> anyhow::Result<Answer> {
    let dataset: MotifDataset = load_dataset(args)?;
    check_neighborhood_size(dataset.k, dataset.d)?;
    if dataset.dnas.is_empty() {
        warn!("Dataset has no sequences; there are no motifs");
    }

    let found = find_k_d_motifs(dataset.k, dataset.d, &dataset.dnas)?;
    info!(
        k = dataset.k,
        d = dataset.d,
        sequences = dataset.dnas.len(),
        found = found.len(),
        "Enumerated motifs"
    );
    Ok(Answer::Kmers(found.into_iter().collect()))
}

/// BA2B. Prints the first median string unless `--all` is given.
///
/// # Errors
///
/// Returns an error if the dataset is malformed, k is too large for an
/// exhaustive search, or a sequence is shorter than k.
pub fn median_string(args: &MedianArgs) -> anyhow::Result<Answer> {
    let dataset: MedianDataset = load_dataset(&args.dataset)?;
    let mut medians = find_median_strings(dataset.k, &dataset.dnas)?;
    info!(k = dataset.k, ties = medians.len(), "Median string search");

    if !args.all {
        medians.truncate(1);
    }
    Ok(Answer::Kmers(medians))
}

/// BA2H
///
/// # Errors
///
/// Returns an error if the dataset is malformed, the pattern is not a valid
/// k-mer, or a sequence is shorter than the pattern.
pub fn distance(args: &DatasetArgs) -> anyhow::Result<Answer> {
    let dataset: PatternDnas = load_dataset(args)?;
    let pattern = Kmer::from_nucleotides(dataset.pattern.bases())?;
    Ok(Answer::Count(total_distance(&pattern, &dataset.dnas)?))
}
