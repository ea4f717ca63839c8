use anyhow::Context;
use tracing::{debug, info};

use crate::cli::output::Answer;
use crate::cli::{load_dataset, DatasetArgs};
use crate::genome::clumps::find_clumps;
use crate::genome::skew::{min_skew_positions, skews};
use crate::parsing::dataset::{ClumpDataset, SingleSequence};
use crate::parsing::fasta::{is_fasta_file, parse_fasta_genome};

/// BA1E
///
/// # Errors
///
/// Returns an error if the dataset is malformed or k is not a valid k-mer length.
pub fn clumps(args: &DatasetArgs) -> anyhow::Result<Answer> {
    let dataset: ClumpDataset = load_dataset(args)?;
    debug!(
        genome_length = dataset.genome.len(),
        k = dataset.k,
        window = dataset.window,
        t = dataset.t,
        "Scanning for clumps"
    );

    let found = find_clumps(&dataset.genome, dataset.k, dataset.window, dataset.t)?;
    info!(found = found.len(), "Clump-forming k-mers");
    Ok(Answer::Kmers(found))
}

/// BA1F. Accepts a Rosalind dataset or a FASTA genome.
///
/// # Errors
///
/// Returns an error if the input cannot be read or parsed.
pub fn min_skew(args: &DatasetArgs) -> anyhow::Result<Answer> {
    let genome = if is_fasta_file(&args.input) {
        parse_fasta_genome(&args.input)
            .with_context(|| format!("Failed to read FASTA '{}'", args.input.display()))?
    } else {
        load_dataset::<SingleSequence>(args)?.sequence
    };

    let positions = min_skew_positions(&skews(&genome));
    info!(
        genome_length = genome.len(),
        minima = positions.len(),
        "Computed GC skew"
    );
    Ok(Answer::Positions(positions))
}
