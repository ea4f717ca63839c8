//! Resource limit tests
//!
//! Inputs that would make the solver exhaust memory or run for hours must be
//! rejected up front with a clear error instead.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

use kmer_solver::motifs::median::{find_median_strings, MAX_MEDIAN_STRING_LENGTH};
use kmer_solver::parsing::dataset::{read_dataset_file, ParseError};
use kmer_solver::utils::validation::{
    check_neighborhood_size, ValidationError, MAX_DATASET_BYTES,
};
use kmer_solver::{DnaSequence, Kmer, KmerError};

/// Oversized dataset files are rejected before they are read into memory
#[test]
fn test_dataset_size_limit() {
    let file = NamedTempFile::with_suffix(".txt").expect("Failed to create temp file");
    file.as_file()
        .set_len(MAX_DATASET_BYTES + 1)
        .expect("Failed to grow temp file");

    let err = read_dataset_file(file.path()).unwrap_err();
    assert!(matches!(
        err,
        ParseError::Validation(ValidationError::DatasetTooLarge(_))
    ));
}

/// A small gzip file that inflates past the limit is rejected as well
#[test]
fn test_decompression_bomb_limit() {
    use flate2::write::GzEncoder;
    use flate2::Compression;

    let file = NamedTempFile::with_suffix(".txt.gz").expect("Failed to create temp file");
    let mut encoder = GzEncoder::new(file.reopen().unwrap(), Compression::best());
    let chunk = vec![b'A'; 1024 * 1024];
    for _ in 0..=(MAX_DATASET_BYTES / chunk.len() as u64) {
        encoder.write_all(&chunk).unwrap();
    }
    encoder.finish().unwrap();

    let compressed = std::fs::metadata(file.path()).unwrap().len();
    assert!(compressed < MAX_DATASET_BYTES);

    let err = read_dataset_file(file.path()).unwrap_err();
    assert!(matches!(
        err,
        ParseError::Validation(ValidationError::DatasetTooLarge(_))
    ));
}

#[test]
fn test_kmer_length_limit() {
    let long = "A".repeat(33);
    assert!(matches!(
        long.parse::<Kmer>(),
        Err(KmerError::InvalidInput(_))
    ));
    assert!(Kmer::from_index(0, 0).is_err());
    assert!("A".repeat(32).parse::<Kmer>().is_ok());
}

#[test]
fn test_median_string_length_limit() {
    let sequences: Vec<DnaSequence> = vec!["ACGT".repeat(10).parse().unwrap()];
    assert!(matches!(
        find_median_strings(MAX_MEDIAN_STRING_LENGTH + 1, &sequences),
        Err(KmerError::InvalidInput(_))
    ));
}

#[test]
fn test_neighborhood_limit() {
    assert!(check_neighborhood_size(10, 3).is_ok());
    assert!(matches!(
        check_neighborhood_size(20, 10),
        Err(ValidationError::NeighborhoodTooLarge { k: 20, d: 10, .. })
    ));
}

/// The CLI refuses a neighborhood that would not fit in memory
#[test]
fn test_cli_rejects_huge_neighborhood() {
    let mut file = NamedTempFile::with_suffix(".txt").expect("Failed to create temp file");
    writeln!(file, "{}", "ACGT".repeat(5)).unwrap();
    writeln!(file, "12").unwrap();
    file.flush().unwrap();

    Command::cargo_bin("kmer-solver")
        .expect("binary should be built")
        .arg("neighbors")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Neighborhood too large"));
}
