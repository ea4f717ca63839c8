use serde::{Deserialize, Serialize};

/// A single DNA base.
///
/// The discriminants are the 2-bit codes used by [`crate::core::kmer::Kmer`];
/// they follow lexicographic order so packed k-mers sort like strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Nucleotide {
    A = 0,
    C = 1,
    G = 2,
    T = 3,
}

impl Nucleotide {
    /// All four bases in lexicographic order
    pub const ALL: [Nucleotide; 4] = [Self::A, Self::C, Self::G, Self::T];

    /// Parse an uppercase ASCII base. Anything else (including lowercase and
    /// IUPAC ambiguity codes) yields `None`.
    #[must_use]
    pub fn from_ascii(byte: u8) -> Option<Self> {
        match byte {
            b'A' => Some(Self::A),
            b'C' => Some(Self::C),
            b'G' => Some(Self::G),
            b'T' => Some(Self::T),
            _ => None,
        }
    }

    #[must_use]
    pub fn to_ascii(self) -> u8 {
        match self {
            Self::A => b'A',
            Self::C => b'C',
            Self::G => b'G',
            Self::T => b'T',
        }
    }

    /// Decode the low two bits of `bits`
    #[must_use]
    pub fn from_bits(bits: u64) -> Self {
        match bits & 0b11 {
            0 => Self::A,
            1 => Self::C,
            2 => Self::G,
            _ => Self::T,
        }
    }

    #[must_use]
    pub fn bits(self) -> u64 {
        self as u64
    }

    /// Watson-Crick complement (A<->T, C<->G)
    #[must_use]
    pub fn complement(self) -> Self {
        match self {
            Self::A => Self::T,
            Self::C => Self::G,
            Self::G => Self::C,
            Self::T => Self::A,
        }
    }
}

impl std::fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_ascii() as char)
    }
}
