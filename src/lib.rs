//! # kmer-solver
//!
//! A library for the k-mer counting and motif-finding problems that open most
//! introductory bioinformatics courses (the Rosalind BA1 and BA2 problems).
//!
//! At its heart is a small k-mer engine: DNA is validated once into
//! [`DnaSequence`], windows are packed two bits per base into [`Kmer`], and
//! everything else (neighborhoods, frequency tables, motifs, median strings)
//! works on those packed values.
//!
//! ## Features
//!
//! - **Exact and approximate matching**: pattern counts, positions and Hamming distance
//! - **Frequent words**: with mismatches, optionally counting reverse complements
//! - **d-neighborhoods**: the recursive neighborhood generator
//! - **Genome scans**: GC skew minima and clump finding
//! - **Motifs**: (k, d)-motif enumeration and median string search
//!
//! ## Example
//!
//! ```rust
//! use kmer_solver::{DnaSequence, Kmer};
//! use kmer_solver::matching::frequent_words::find_most_frequent_with_mismatches;
//!
//! let text: DnaSequence = "ACGTTGCATGTCGCATGATGCATGAGAGCT".parse().unwrap();
//! let words = find_most_frequent_with_mismatches(&text, 4, 1).unwrap();
//!
//! let expected: Vec<Kmer> = ["ATGC", "ATGT", "GATG"]
//!     .iter()
//!     .map(|w| w.parse().unwrap())
//!     .collect();
//! assert_eq!(words.into_iter().collect::<Vec<_>>(), expected);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Nucleotides, packed k-mers, validated sequences and errors
//! - [`matching`]: Hamming distance, neighborhoods, frequency tables and pattern matching
//! - [`genome`]: GC skew and clump finding
//! - [`motifs`]: Motif enumeration and median string search
//! - [`parsing`]: Rosalind dataset and FASTA parsers
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod genome;
pub mod matching;
pub mod motifs;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::error::KmerError;
pub use crate::core::kmer::Kmer;
pub use crate::core::sequence::DnaSequence;
pub use crate::core::types::*;
pub use crate::matching::frequency::FrequencyTable;
