//! Pattern matching and k-mer frequency algorithms.
//!
//! - [`hamming`]: mismatch count between equal-length sequences
//! - [`neighborhood`]: recursive d-neighborhood generation
//! - [`frequency`]: sliding-window k-mer frequency tables
//! - [`frequent_words`]: most frequent k-mers, exact or with mismatches and reverse complements
//! - [`occurrences`]: exact and approximate pattern positions
//!
//! ## Example
//!
//! ```
//! use kmer_solver::core::sequence::DnaSequence;
//! use kmer_solver::matching::frequent_words::find_most_frequent_with_mismatches;
//!
//! let text: DnaSequence = "AACAAGCTGATAAACATTTAAAGAG".parse().unwrap();
//! let words = find_most_frequent_with_mismatches(&text, 5, 1).unwrap();
//!
//! let words: Vec<String> = words.iter().map(ToString::to_string).collect();
//! assert_eq!(words, vec!["AAAAA"]);
//! ```

pub mod frequency;
pub mod frequent_words;
pub mod hamming;
pub mod neighborhood;
pub mod occurrences;
