//! Motif finding across a collection of DNA sequences.
//!
//! - [`enumeration`]: brute-force (k, d)-motif enumeration by neighborhood intersection
//! - [`median`]: median-string search over the full 4^k k-mer space
//!
//! ## Example
//!
//! ```
//! use kmer_solver::core::sequence::DnaSequence;
//! use kmer_solver::motifs::enumeration::find_k_d_motifs;
//!
//! let dnas: Vec<DnaSequence> = ["ATTTGGC", "TGCCTTA", "CGGTATC", "GAAAATT"]
//!     .iter()
//!     .map(|s| s.parse().unwrap())
//!     .collect();
//!
//! let motifs: Vec<String> = find_k_d_motifs(3, 1, &dnas)
//!     .unwrap()
//!     .iter()
//!     .map(ToString::to_string)
//!     .collect();
//! assert_eq!(motifs, vec!["ATA", "ATT", "GTT", "TTT"]);
//! ```

pub mod enumeration;
pub mod median;
