//! Centralized validation and resource limits.

use crate::matching::neighborhood::neighborhood_size;

/// Maximum size of a dataset file (DOS protection)
pub const MAX_DATASET_BYTES: u64 = 64 * 1024 * 1024;

/// Maximum number of k-mers a single d-neighborhood may contain
pub const MAX_NEIGHBORHOOD_SIZE: u128 = 5_000_000;

/// Validation error types
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Dataset too large: {0} bytes exceeds maximum of {MAX_DATASET_BYTES}")]
    DatasetTooLarge(u64),
    #[error("Neighborhood too large: k={k}, d={d} gives {size} k-mers (maximum {MAX_NEIGHBORHOOD_SIZE})")]
    NeighborhoodTooLarge { k: usize, d: usize, size: u128 },
}

/// Check a dataset size before reading it into memory.
///
/// # Errors
///
/// Returns `ValidationError::DatasetTooLarge` if `bytes` exceeds [`MAX_DATASET_BYTES`].
pub fn check_dataset_size(bytes: u64) -> Result<(), ValidationError> {
    if bytes > MAX_DATASET_BYTES {
        Err(ValidationError::DatasetTooLarge(bytes))
    } else {
        Ok(())
    }
}

/// Check that a d-neighborhood of k-mers is small enough to materialize.
///
/// Call this before any computation that expands windows into neighborhoods.
///
/// # Errors
///
/// Returns `ValidationError::NeighborhoodTooLarge` if the neighborhood would
/// exceed [`MAX_NEIGHBORHOOD_SIZE`].
pub fn check_neighborhood_size(k: usize, d: usize) -> Result<(), ValidationError> {
    let size = neighborhood_size(k, d);
    if size > MAX_NEIGHBORHOOD_SIZE {
        Err(ValidationError::NeighborhoodTooLarge { k, d, size })
    } else {
        Ok(())
    }
}
