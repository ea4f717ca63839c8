//! Answer rendering shared by every subcommand.
//!
//! Text output follows the Rosalind answer conventions (space separated,
//! newline separated for neighborhoods); JSON wraps the answer with the
//! problem id.

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::core::kmer::Kmer;
use crate::core::sequence::DnaSequence;

/// The answer to one problem
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Answer {
    /// A single count or distance
    Count(usize),
    /// 0-based positions, space separated
    Positions(Vec<usize>),
    /// k-mers, space separated
    Kmers(Vec<Kmer>),
    /// k-mers, one per line
    KmerLines(Vec<Kmer>),
    /// A DNA string
    Sequence(DnaSequence),
}

impl Answer {
    /// Render in Rosalind answer format
    #[must_use]
    pub fn to_text(&self) -> String {
        match self {
            Self::Count(n) => n.to_string(),
            Self::Positions(positions) => join(positions, " "),
            Self::Kmers(kmers) => join(kmers, " "),
            Self::KmerLines(kmers) => join(kmers, "\n"),
            Self::Sequence(sequence) => sequence.to_string(),
        }
    }
}

fn join<T: ToString>(items: &[T], separator: &str) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}

/// A solved problem, as emitted in JSON mode
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub problem: &'static str,
    pub answer: Answer,
}

impl Report {
    #[must_use]
    pub fn new(problem: &'static str, answer: Answer) -> Self {
        Self { problem, answer }
    }

    /// Render the report in the requested format
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render(&self, format: OutputFormat) -> anyhow::Result<String> {
        match format {
            OutputFormat::Text => Ok(self.answer.to_text()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

/// Print a report to stdout
///
/// # Errors
///
/// Returns an error if rendering fails.
pub fn print_report(report: &Report, format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", report.render(format)?);
    Ok(())
}
