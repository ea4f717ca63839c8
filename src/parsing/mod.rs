//! Parsers for problem datasets.
//!
//! This module provides parsers for:
//!
//! - **Rosalind sample datasets**: small line-oriented text files, one layout per problem
//! - **FASTA files**: genomes for the skew scan
//!
//! Both accept gzip-compressed input.
//!
//! ## Example
//!
//! ```rust,no_run
//! use kmer_solver::parsing::dataset::{RosalindDataset, TextKD};
//! use std::path::Path;
//!
//! // Parse from a file
//! let dataset = TextKD::from_file(Path::new("rosalind_ba1i.txt")).unwrap();
//!
//! // Or from text
//! let dataset = TextKD::parse_text("ACGTTGCATGTCGCATGATGCATGAGAGCT\n4 1\n").unwrap();
//! ```
//!
//! ## Layouts
//!
//! | Dataset | Lines | Problems |
//! |---------|-------|----------|
//! | `TextPattern` | text / pattern | BA1A |
//! | `TextK` | text / k | BA1B |
//! | `SingleSequence` | sequence | BA1C, BA1F |
//! | `PatternGenome` | pattern / genome | BA1D |
//! | `ClumpDataset` | genome / k L t | BA1E |
//! | `SequencePair` | p / q | BA1G |
//! | `ApproxOccurrence` | pattern / text / d | BA1H |
//! | `TextKD` | text / k d | BA1I, BA1J |
//! | `PatternD` | pattern / d | BA1N |
//! | `MotifDataset` | k d / dna... | BA2A |
//! | `MedianDataset` | k / dna... | BA2B |
//! | `PatternDnas` | pattern / dna... | BA2H |

pub mod dataset;
pub mod fasta;
