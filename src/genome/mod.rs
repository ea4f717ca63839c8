//! Whole-genome sliding scans.
//!
//! - [`skew`]: GC skew and the positions minimizing it (a proxy for the replication origin)
//! - [`clumps`]: k-mers forming clumps within a sliding window

pub mod clumps;
pub mod skew;
