//! Command-line interface for kmer-solver.
//!
//! This module implements the CLI using clap. Each subcommand solves one
//! problem from a Rosalind-style dataset file and is also reachable by its
//! problem id:
//!
//! - **patterns**: counting, frequent words, reverse complement, Hamming
//!   distance and neighborhoods (BA1A-BA1D, BA1G-BA1J, BA1N)
//! - **genome**: clump finding and GC skew (BA1E, BA1F)
//! - **motifs**: motif enumeration, median string and pattern distance (BA2A, BA2B, BA2H)
//!
//! ## Usage
//!
//! ```text
//! # Most frequent 4-mers with up to one mismatch
//! kmer-solver frequent-words-mismatches rosalind_ba1i.txt
//!
//! # Same, by problem id
//! kmer-solver ba1i rosalind_ba1i.txt
//!
//! # Read the dataset from stdin
//! cat rosalind_ba1b.txt | kmer-solver ba1b -
//!
//! # JSON output for scripting
//! kmer-solver median-string rosalind_ba2b.txt --all --format json
//!
//! # Skew minima of a FASTA genome
//! kmer-solver min-skew genome.fa.gz
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::parsing::dataset::RosalindDataset;

pub mod genome;
pub mod motifs;
pub mod output;
pub mod patterns;

#[derive(Parser)]
#[command(name = "kmer-solver")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Solve k-mer counting, neighborhood and motif problems on DNA strings")]
#[command(
    long_about = "kmer-solver answers the introductory pattern-matching problems of the Rosalind bioinformatics textbook track (BA1 and BA2).\n\nEach subcommand reads one sample dataset and prints the answer in Rosalind format:\n- Exact and approximate pattern matching\n- Most frequent k-mers, with mismatches and reverse complements\n- GC skew minima and clump finding\n- Motif enumeration and median string search"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Count occurrences of a pattern in a text (BA1A)
    #[command(visible_alias = "ba1a")]
    PatternCount(DatasetArgs),

    /// Most frequent k-mers in a text (BA1B)
    #[command(visible_alias = "ba1b")]
    FrequentWords(DatasetArgs),

    /// Reverse complement of a DNA string (BA1C)
    #[command(visible_alias = "ba1c")]
    ReverseComplement(DatasetArgs),

    /// All starting positions of a pattern in a genome (BA1D)
    #[command(visible_alias = "ba1d")]
    PatternPositions(DatasetArgs),

    /// k-mers forming (L, t)-clumps in a genome (BA1E)
    #[command(visible_alias = "ba1e")]
    Clumps(DatasetArgs),

    /// Positions minimizing the GC skew of a genome (BA1F)
    #[command(visible_alias = "ba1f")]
    MinSkew(DatasetArgs),

    /// Hamming distance between two strings (BA1G)
    #[command(visible_alias = "ba1g")]
    Hamming(DatasetArgs),

    /// Approximate occurrences of a pattern in a text (BA1H)
    #[command(visible_alias = "ba1h")]
    ApproxPositions(DatasetArgs),

    /// Most frequent k-mers with mismatches (BA1I)
    #[command(visible_alias = "ba1i")]
    FrequentWordsMismatches(DatasetArgs),

    /// Most frequent k-mers with mismatches and reverse complements (BA1J)
    #[command(visible_alias = "ba1j")]
    FrequentWordsMismatchesRc(DatasetArgs),

    /// d-neighborhood of a pattern (BA1N)
    #[command(visible_alias = "ba1n")]
    Neighbors(DatasetArgs),

    /// (k, d)-motifs shared by a collection of strings (BA2A)
    #[command(visible_alias = "ba2a")]
    Motifs(DatasetArgs),

    /// Median string of a collection of strings (BA2B)
    #[command(visible_alias = "ba2b")]
    MedianString(MedianArgs),

    /// Distance between a pattern and a collection of strings (BA2H)
    #[command(visible_alias = "ba2h")]
    Distance(DatasetArgs),
}

impl Commands {
    /// Rosalind problem id, used to label JSON output
    #[must_use]
    pub fn problem_id(&self) -> &'static str {
        match self {
            Self::PatternCount(_) => "ba1a",
            Self::FrequentWords(_) => "ba1b",
            Self::ReverseComplement(_) => "ba1c",
            Self::PatternPositions(_) => "ba1d",
            Self::Clumps(_) => "ba1e",
            Self::MinSkew(_) => "ba1f",
            Self::Hamming(_) => "ba1g",
            Self::ApproxPositions(_) => "ba1h",
            Self::FrequentWordsMismatches(_) => "ba1i",
            Self::FrequentWordsMismatchesRc(_) => "ba1j",
            Self::Neighbors(_) => "ba1n",
            Self::Motifs(_) => "ba2a",
            Self::MedianString(_) => "ba2b",
            Self::Distance(_) => "ba2h",
        }
    }
}

#[derive(clap::Args)]
pub struct DatasetArgs {
    /// Dataset file (optionally gzip compressed)
    /// Use '-' for stdin
    #[arg(required = true)]
    pub input: PathBuf,
}

#[derive(clap::Args)]
pub struct MedianArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// Print every median string instead of only the first
    #[arg(long)]
    pub all: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Read a dataset, naming the file on failure
pub(crate) fn load_dataset<D: RosalindDataset>(args: &DatasetArgs) -> anyhow::Result<D> {
    D::from_file(&args.input)
        .with_context(|| format!("Failed to read dataset '{}'", args.input.display()))
}

/// Solve the selected problem and print its answer
///
/// # Errors
///
/// Returns an error if the dataset cannot be read or the problem has no answer.
pub fn run(command: Commands, format: OutputFormat) -> anyhow::Result<()> {
    let problem = command.problem_id();
    let answer = match command {
        Commands::PatternCount(args) => patterns::pattern_count(&args)?,
        Commands::FrequentWords(args) => patterns::frequent_words(&args)?,
        Commands::ReverseComplement(args) => patterns::reverse_complement(&args)?,
        Commands::PatternPositions(args) => patterns::pattern_positions(&args)?,
        Commands::Clumps(args) => genome::clumps(&args)?,
        Commands::MinSkew(args) => genome::min_skew(&args)?,
        Commands::Hamming(args) => patterns::hamming(&args)?,
        Commands::ApproxPositions(args) => patterns::approx_positions(&args)?,
        Commands::FrequentWordsMismatches(args) => {
            patterns::frequent_words_mismatches(&args, false)?
        }
        Commands::FrequentWordsMismatchesRc(args) => {
            patterns::frequent_words_mismatches(&args, true)?
        }
        Commands::Neighbors(args) => patterns::neighbors(&args)?,
        Commands::Motifs(args) => motifs::motifs(&args)?,
        Commands::MedianString(args) => motifs::median_string(&args)?,
        Commands::Distance(args) => motifs::distance(&args)?,
    };

    output::print_report(&output::Report::new(problem, answer), format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_problem_alias() {
        let cli = Cli::try_parse_from(["kmer-solver", "ba2b", "data.txt", "--all"]).unwrap();
        assert_eq!(cli.command.problem_id(), "ba2b");
        match cli.command {
            Commands::MedianString(args) => {
                assert!(args.all);
                assert_eq!(args.dataset.input, PathBuf::from("data.txt"));
            }
            _ => panic!("expected median-string"),
        }
    }

    #[test]
    fn test_global_flags() {
        let cli =
            Cli::try_parse_from(["kmer-solver", "neighbors", "-", "-v", "--format", "json"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.format, OutputFormat::Json));
        assert_eq!(cli.command.problem_id(), "ba1n");
    }
}
