//! Genome input from FASTA files using noodles.
//!
//! Supports both uncompressed and gzip/bgzip compressed files. Every gzip
//! member is read, so BGZF blocks are concatenated as expected.
//!
//! Supported extensions:
//! - `.fa`, `.fasta`, `.fna` (uncompressed)
//! - `.fa.gz`, `.fasta.gz`, `.fna.gz` (gzip compressed)
//! - `.fa.bgz`, `.fasta.bgz`, `.fna.bgz` (bgzip compressed)

use std::ffi::OsStr;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use noodles::fasta;
use tracing::{debug, warn};

use crate::core::sequence::DnaSequence;
use crate::parsing::dataset::{is_gzipped, ParseError};
use crate::utils::validation::check_dataset_size;

/// Check if the path has a FASTA extension
pub fn is_fasta_file(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();

    // Check for compressed FASTA
    if path_str.ends_with(".fa.gz")
        || path_str.ends_with(".fasta.gz")
        || path_str.ends_with(".fna.gz")
        || path_str.ends_with(".fa.bgz")
        || path_str.ends_with(".fasta.bgz")
        || path_str.ends_with(".fna.bgz")
    {
        return true;
    }

    matches!(
        path.extension()
            .and_then(OsStr::to_str)
            .map(str::to_lowercase)
            .as_deref(),
        Some("fa" | "fasta" | "fna")
    )
}

/// Read the first record of a FASTA file as a genome.
///
/// Bases are uppercased (soft-masked regions are common in reference FASTA);
/// any remaining symbol outside {A,C,G,T} is an error. Additional records
/// are ignored with a warning.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::Noodles` if
/// parsing fails, `ParseError::InvalidFormat` if the file has no records, or
/// `ParseError::InvalidRecord` naming the record and base position of a
/// non-DNA symbol.
pub fn parse_fasta_genome(path: &Path) -> Result<DnaSequence, ParseError> {
    let file = std::fs::File::open(path)?;
    check_dataset_size(file.metadata()?.len())?;

    if is_gzipped(path) {
        let mut reader = fasta::io::Reader::new(BufReader::new(MultiGzDecoder::new(file)));
        parse_first_record(&mut reader)
    } else {
        let mut reader = fasta::io::Reader::new(BufReader::new(file));
        parse_first_record(&mut reader)
    }
}

fn parse_first_record<R: BufRead>(
    reader: &mut fasta::io::Reader<R>,
) -> Result<DnaSequence, ParseError> {
    let mut records = reader.records();

    let record = records
        .next()
        .ok_or_else(|| ParseError::InvalidFormat("No sequences found in FASTA file".to_string()))?
        .map_err(|e| ParseError::Noodles(format!("Failed to parse FASTA record: {e}")))?;

    let name = String::from_utf8_lossy(record.name()).to_string();
    let uppercase: String = record
        .sequence()
        .as_ref()
        .iter()
        .map(|b| char::from(b.to_ascii_uppercase()))
        .collect();
    let genome = DnaSequence::new(&uppercase).map_err(|source| ParseError::InvalidRecord {
        record: name.clone(),
        source,
    })?;
    debug!(record = %name, length = genome.len(), "Read FASTA genome");

    if records.next().is_some() {
        warn!("FASTA file has more than one record; using only '{name}'");
    }

    Ok(genome)
}
