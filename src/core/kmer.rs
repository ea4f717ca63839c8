use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::core::error::KmerError;
use crate::core::types::Nucleotide;

/// Longest k-mer that fits the packed representation (2 bits per base in a `u64`)
pub const MAX_KMER_LENGTH: usize = 32;

/// Alternating `01` bit pairs, used to fold each 2-bit lane onto its low bit
const LOW_LANE_BITS: u64 = 0x5555_5555_5555_5555;

/// A DNA k-mer packed two bits per base.
///
/// The first base occupies the most significant used lane, so for k-mers of
/// equal length the derived ordering is lexicographic over A < C < G < T.
/// Fields are ordered `len` then `bits` for that reason.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Kmer {
    len: u8,
    bits: u64,
}

/// Bit mask covering `len` 2-bit lanes
#[must_use]
pub(crate) fn lane_mask(len: usize) -> u64 {
    if len >= MAX_KMER_LENGTH {
        u64::MAX
    } else {
        (1u64 << (2 * len)) - 1
    }
}

/// Check that `k` is a usable k-mer length
///
/// # Errors
///
/// Returns `KmerError::InvalidInput` if `k` is zero or exceeds [`MAX_KMER_LENGTH`].
pub fn validate_kmer_length(k: usize) -> Result<(), KmerError> {
    if k == 0 {
        return Err(KmerError::InvalidInput(
            "k-mer length must be at least 1".to_string(),
        ));
    }
    if k > MAX_KMER_LENGTH {
        return Err(KmerError::InvalidInput(format!(
            "k-mer length {k} exceeds maximum of {MAX_KMER_LENGTH}"
        )));
    }
    Ok(())
}

#[allow(clippy::len_without_is_empty)] // A k-mer always has at least one base
impl Kmer {
    /// Build a k-mer from its bases
    ///
    /// # Errors
    ///
    /// Returns `KmerError::InvalidInput` if the slice is empty or longer than
    /// [`MAX_KMER_LENGTH`].
    pub fn from_nucleotides(bases: &[Nucleotide]) -> Result<Self, KmerError> {
        validate_kmer_length(bases.len())?;
        let bits = bases
            .iter()
            .fold(0u64, |acc, base| (acc << 2) | base.bits());
        Ok(Self::from_raw(bits, bases.len()))
    }

    /// Parse a k-mer from uppercase ASCII
    ///
    /// # Errors
    ///
    /// Returns `KmerError::InvalidInput` for symbols outside {A,C,G,T} or an
    /// invalid length.
    pub fn from_ascii(text: &[u8]) -> Result<Self, KmerError> {
        let bases = text
            .iter()
            .enumerate()
            .map(|(i, &byte)| {
                Nucleotide::from_ascii(byte).ok_or_else(|| {
                    KmerError::InvalidInput(format!(
                        "invalid nucleotide '{}' at position {i}",
                        byte.escape_ascii()
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_nucleotides(&bases)
    }

    /// The k-mer at position `index` of the lexicographic enumeration of all
    /// 4^k k-mers. Bits of `index` beyond `2 * k` are ignored.
    ///
    /// # Errors
    ///
    /// Returns `KmerError::InvalidInput` for an invalid length.
    pub fn from_index(index: u64, k: usize) -> Result<Self, KmerError> {
        validate_kmer_length(k)?;
        Ok(Self::from_raw(index & lane_mask(k), k))
    }

    /// Caller guarantees `1 <= len <= MAX_KMER_LENGTH` and no bits above `len` lanes
    #[allow(clippy::cast_possible_truncation)] // len <= 32
    pub(crate) fn from_raw(bits: u64, len: usize) -> Self {
        debug_assert!((1..=MAX_KMER_LENGTH).contains(&len));
        Self {
            len: len as u8,
            bits,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        usize::from(self.len)
    }

    /// Packed representation, first base in the most significant lane
    #[must_use]
    pub fn bits(&self) -> u64 {
        self.bits
    }

    /// Base at position `i` (0-based from the left)
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.len()`.
    #[must_use]
    pub fn base(&self, i: usize) -> Nucleotide {
        assert!(i < self.len(), "base index {i} out of range");
        Nucleotide::from_bits(self.bits >> (2 * (self.len() - 1 - i)))
    }

    #[must_use]
    pub fn first(&self) -> Nucleotide {
        self.base(0)
    }

    /// The k-mer without its first base, or `None` for a single base
    #[must_use]
    pub fn suffix(&self) -> Option<Self> {
        if self.len == 1 {
            return None;
        }
        let len = self.len() - 1;
        Some(Self::from_raw(self.bits & lane_mask(len), len))
    }

    /// Prepend `base`, producing a (k+1)-mer
    ///
    /// # Errors
    ///
    /// Returns `KmerError::InvalidInput` if the result would exceed [`MAX_KMER_LENGTH`].
    pub fn prepend(&self, base: Nucleotide) -> Result<Self, KmerError> {
        validate_kmer_length(self.len() + 1)?;
        Ok(self.prepend_unchecked(base))
    }

    /// Caller guarantees `self.len() < MAX_KMER_LENGTH`
    pub(crate) fn prepend_unchecked(&self, base: Nucleotide) -> Self {
        Self::from_raw(
            (base.bits() << (2 * self.len())) | self.bits,
            self.len() + 1,
        )
    }

    /// Number of mismatching positions against another k-mer of the same length
    ///
    /// # Errors
    ///
    /// Returns `KmerError::InvalidInput` if the lengths differ.
    pub fn hamming_distance(&self, other: &Self) -> Result<usize, KmerError> {
        if self.len != other.len {
            return Err(KmerError::InvalidInput(format!(
                "Hamming distance requires equal lengths, got {} and {}",
                self.len, other.len
            )));
        }
        Ok(self.mismatches(other))
    }

    /// Mismatch count without the length check; lanes past the shorter k-mer
    /// are zero in both, so equal-length callers get the exact distance.
    pub(crate) fn mismatches(&self, other: &Self) -> usize {
        let diff = self.bits ^ other.bits;
        ((diff | (diff >> 1)) & LOW_LANE_BITS).count_ones() as usize
    }

    #[must_use]
    pub fn reverse_complement(&self) -> Self {
        // XOR with all-ones lanes maps A<->T and C<->G
        let mut complement = self.bits ^ lane_mask(self.len());
        let mut bits = 0u64;
        for _ in 0..self.len {
            bits = (bits << 2) | (complement & 0b11);
            complement >>= 2;
        }
        Self::from_raw(bits, self.len())
    }

    /// Iterate the bases left to right
    pub fn iter(&self) -> impl Iterator<Item = Nucleotide> + '_ {
        (0..self.len()).map(move |i| self.base(i))
    }
}

impl std::fmt::Display for Kmer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for base in self.iter() {
            write!(f, "{base}")?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for Kmer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Kmer({self})")
    }
}

impl FromStr for Kmer {
    type Err = KmerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_ascii(s.as_bytes())
    }
}

impl Serialize for Kmer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kmer(s: &str) -> Kmer {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!(kmer("ACGT").to_string(), "ACGT");
        assert_eq!(kmer("T").to_string(), "T");
        let long = "ACGTACGTACGTACGTACGTACGTACGTACGT";
        assert_eq!(kmer(long).to_string(), long);
    }

    #[test]
    fn test_invalid_kmers_rejected() {
        assert!(matches!(
            "".parse::<Kmer>(),
            Err(KmerError::InvalidInput(_))
        ));
        assert!(matches!(
            "ACGN".parse::<Kmer>(),
            Err(KmerError::InvalidInput(_))
        ));
        assert!(matches!(
            "A".repeat(33).parse::<Kmer>(),
            Err(KmerError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        let mut kmers = vec![kmer("TTT"), kmer("ACG"), kmer("AAA"), kmer("GAC"), kmer("CAT")];
        kmers.sort();
        let rendered: Vec<String> = kmers.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, vec!["AAA", "ACG", "CAT", "GAC", "TTT"]);
    }

    #[test]
    fn test_from_index_enumerates_in_order() {
        assert_eq!(Kmer::from_index(0, 3).unwrap().to_string(), "AAA");
        assert_eq!(Kmer::from_index(1, 3).unwrap().to_string(), "AAC");
        assert_eq!(Kmer::from_index(63, 3).unwrap().to_string(), "TTT");
    }

    #[test]
    fn test_suffix_and_prepend() {
        let pattern = kmer("GACT");
        assert_eq!(pattern.first(), Nucleotide::G);
        let suffix = pattern.suffix().unwrap();
        assert_eq!(suffix.to_string(), "ACT");
        assert_eq!(suffix.prepend(Nucleotide::G).unwrap(), pattern);
        assert!(kmer("A").suffix().is_none());
        assert!(kmer(&"A".repeat(32)).prepend(Nucleotide::C).is_err());
    }

    #[test]
    fn test_hamming_distance() {
        assert_eq!(kmer("GGGCC").hamming_distance(&kmer("GGACC")).unwrap(), 1);
        assert_eq!(kmer("AAAA").hamming_distance(&kmer("TTTT")).unwrap(), 4);
        assert_eq!(kmer("ACGT").hamming_distance(&kmer("ACGT")).unwrap(), 0);
        assert!(kmer("ACG").hamming_distance(&kmer("ACGT")).is_err());
    }

    #[test]
    fn test_reverse_complement() {
        assert_eq!(kmer("AAAACCCGGT").reverse_complement().to_string(), "ACCGGGTTTT");
        assert_eq!(kmer("ACGT").reverse_complement().to_string(), "ACGT");
        let long = kmer(&"ACCGT".repeat(6));
        assert_eq!(long.reverse_complement().reverse_complement(), long);
    }

    #[test]
    fn test_serializes_as_string() {
        let json = serde_json::to_string(&vec![kmer("ACG"), kmer("TTT")]).unwrap();
        assert_eq!(json, r#"["ACG","TTT"]"#);
    }
}
