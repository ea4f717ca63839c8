//! Core data types for k-mer analysis.
//!
//! - [`Nucleotide`](types::Nucleotide): a single base of the {A,C,G,T} alphabet
//! - [`Kmer`](kmer::Kmer): a k-mer packed two bits per base (k ≤ 32)
//! - [`DnaSequence`](sequence::DnaSequence): a validated DNA string with sliding k-mer windows
//! - [`KmerError`](error::KmerError): typed errors returned by the algorithms
//!
//! ## Alphabet
//!
//! Only uppercase `A`, `C`, `G` and `T` are accepted. Lowercase bases and IUPAC
//! ambiguity codes are rejected when a sequence is constructed, so none of the
//! algorithms need to re-check their inputs.
//!
//! | Base | Code | Complement |
//! |------|------|------------|
//! | A    | 00   | T          |
//! | C    | 01   | G          |
//! | G    | 10   | C          |
//! | T    | 11   | A          |

pub mod error;
pub mod kmer;
pub mod sequence;
pub mod types;
