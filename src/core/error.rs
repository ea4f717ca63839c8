use thiserror::Error;

/// Errors returned by the k-mer algorithms.
///
/// The algorithms never log or print; callers decide how to report these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KmerError {
    /// Mismatched lengths, an out-of-range k, or a symbol outside {A,C,G,T}
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A maximum was requested over an empty frequency table
    #[error("Empty input: {0}")]
    EmptyInput(String),
}
