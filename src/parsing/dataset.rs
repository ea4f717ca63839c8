use std::io::{self, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use thiserror::Error;
use tracing::debug;

use crate::core::error::KmerError;
use crate::core::sequence::DnaSequence;
use crate::utils::validation::{check_dataset_size, ValidationError, MAX_DATASET_BYTES};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid dataset format: {0}")]
    InvalidFormat(String),

    #[error("Invalid sequence on line {line}: {source}")]
    InvalidSequence { line: usize, source: KmerError },

    #[error("Invalid sequence in FASTA record '{record}': {source}")]
    InvalidRecord { record: String, source: KmerError },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("noodles error: {0}")]
    Noodles(String),
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
pub(crate) fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Read a whole dataset into memory.
///
/// `-` reads standard input; `.gz`/`.bgz` files are decompressed, including
/// every member of a multi-member (BGZF or concatenated) file.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or
/// `ParseError::Validation` if it exceeds the dataset size limit.
pub fn read_dataset_file(path: &Path) -> Result<String, ParseError> {
    if path.as_os_str() == "-" {
        return read_limited(io::stdin().lock());
    }

    let file = std::fs::File::open(path)?;
    check_dataset_size(file.metadata()?.len())?;

    if is_gzipped(path) {
        read_limited(MultiGzDecoder::new(file))
    } else {
        read_limited(file)
    }
}

/// Read at most one byte past the limit so oversized (or decompressed) input is caught
fn read_limited<R: Read>(reader: R) -> Result<String, ParseError> {
    let mut text = String::new();
    reader.take(MAX_DATASET_BYTES + 1).read_to_string(&mut text)?;
    check_dataset_size(text.len() as u64)?;
    Ok(text)
}

/// A non-blank input line with its 1-based line number
#[derive(Debug, Clone, Copy)]
struct Line<'a> {
    number: usize,
    text: &'a str,
}

fn content_lines(text: &str) -> Vec<Line<'_>> {
    text.lines()
        .enumerate()
        .map(|(i, line)| Line {
            number: i + 1,
            text: line.trim(),
        })
        .filter(|line| !line.text.is_empty())
        .collect()
}

fn require_lines<'a>(text: &'a str, min: usize, layout: &str) -> Result<Vec<Line<'a>>, ParseError> {
    let lines = content_lines(text);
    if lines.len() < min {
        return Err(ParseError::InvalidFormat(format!(
            "expected at least {min} non-empty lines ({layout}), found {}",
            lines.len()
        )));
    }
    Ok(lines)
}

/// Split off the trailing parameter line
fn split_last_line<'l, 'a>(lines: &'l [Line<'a>]) -> Result<(Line<'a>, &'l [Line<'a>]), ParseError> {
    lines
        .split_last()
        .map(|(last, rest)| (*last, rest))
        .ok_or_else(|| ParseError::InvalidFormat("dataset is empty".to_string()))
}

fn parse_sequence(line: Line<'_>) -> Result<DnaSequence, ParseError> {
    DnaSequence::new(line.text).map_err(|source| ParseError::InvalidSequence {
        line: line.number,
        source,
    })
}

/// Concatenate sequence lines (genomes are often wrapped)
fn join_sequence(lines: &[Line<'_>]) -> Result<DnaSequence, ParseError> {
    let mut bases = Vec::new();
    for &line in lines {
        bases.extend_from_slice(parse_sequence(line)?.bases());
    }
    Ok(DnaSequence::from_bases(bases))
}

/// Whitespace-separated sequences spread over any number of lines
fn sequence_list(lines: &[Line<'_>]) -> Result<Vec<DnaSequence>, ParseError> {
    let mut sequences = Vec::new();
    for line in lines {
        for token in line.text.split_whitespace() {
            sequences.push(parse_sequence(Line {
                number: line.number,
                text: token,
            })?);
        }
    }
    Ok(sequences)
}

fn parse_integers<const N: usize>(line: Line<'_>) -> Result<[usize; N], ParseError> {
    let fields: Vec<&str> = line.text.split_whitespace().collect();
    if fields.len() != N {
        return Err(ParseError::InvalidFormat(format!(
            "line {}: expected {N} integer(s), found '{}'",
            line.number, line.text
        )));
    }
    let mut values = [0usize; N];
    for (value, field) in values.iter_mut().zip(&fields) {
        *value = field.parse().map_err(|_| {
            ParseError::InvalidFormat(format!(
                "line {}: '{field}' is not a non-negative integer",
                line.number
            ))
        })?;
    }
    Ok(values)
}

/// A Rosalind sample dataset: a small line-oriented text file with one fixed layout
pub trait RosalindDataset: Sized {
    /// Line layout, used in error messages
    const LAYOUT: &'static str;

    /// Parse the dataset from its text
    ///
    /// # Errors
    ///
    /// Returns `ParseError::InvalidFormat` if lines are missing or malformed, or
    /// `ParseError::InvalidSequence` if a sequence contains a symbol outside {A,C,G,T}.
    fn parse_text(text: &str) -> Result<Self, ParseError>;

    /// Read and parse a dataset file
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Io` if the file cannot be read, or any error from
    /// [`RosalindDataset::parse_text`].
    fn from_file(path: &Path) -> Result<Self, ParseError> {
        let text = read_dataset_file(path)?;
        let dataset = Self::parse_text(&text)?;
        debug!(path = %path.display(), layout = Self::LAYOUT, "Parsed dataset");
        Ok(dataset)
    }
}

/// Text on all lines but the last, pattern on the last line (BA1A)
#[derive(Debug, Clone)]
pub struct TextPattern {
    pub text: DnaSequence,
    pub pattern: DnaSequence,
}

impl RosalindDataset for TextPattern {
    const LAYOUT: &'static str = "text / pattern";

    fn parse_text(text: &str) -> Result<Self, ParseError> {
        let lines = require_lines(text, 2, Self::LAYOUT)?;
        let (last, rest) = split_last_line(&lines)?;
        Ok(Self {
            text: join_sequence(rest)?,
            pattern: parse_sequence(last)?,
        })
    }
}

/// Text on all lines but the last, `k` on the last line (BA1B)
#[derive(Debug, Clone)]
pub struct TextK {
    pub text: DnaSequence,
    pub k: usize,
}

impl RosalindDataset for TextK {
    const LAYOUT: &'static str = "text / k";

    fn parse_text(text: &str) -> Result<Self, ParseError> {
        let lines = require_lines(text, 2, Self::LAYOUT)?;
        let (last, rest) = split_last_line(&lines)?;
        let [k] = parse_integers(last)?;
        Ok(Self {
            text: join_sequence(rest)?,
            k,
        })
    }
}

/// Text on all lines but the last, `k d` on the last line (BA1I, BA1J)
#[derive(Debug, Clone)]
pub struct TextKD {
    pub text: DnaSequence,
    pub k: usize,
    pub d: usize,
}

impl RosalindDataset for TextKD {
    const LAYOUT: &'static str = "text / k d";

    fn parse_text(text: &str) -> Result<Self, ParseError> {
        let lines = require_lines(text, 2, Self::LAYOUT)?;
        let (last, rest) = split_last_line(&lines)?;
        let [k, d] = parse_integers(last)?;
        Ok(Self {
            text: join_sequence(rest)?,
            k,
            d,
        })
    }
}

/// A single sequence, possibly wrapped over several lines (BA1C, BA1F)
#[derive(Debug, Clone)]
pub struct SingleSequence {
    pub sequence: DnaSequence,
}

impl RosalindDataset for SingleSequence {
    const LAYOUT: &'static str = "sequence";

    fn parse_text(text: &str) -> Result<Self, ParseError> {
        let lines = require_lines(text, 1, Self::LAYOUT)?;
        Ok(Self {
            sequence: join_sequence(&lines)?,
        })
    }
}

/// Pattern on the first line, genome on the remaining lines (BA1D)
#[derive(Debug, Clone)]
pub struct PatternGenome {
    pub pattern: DnaSequence,
    pub genome: DnaSequence,
}

impl RosalindDataset for PatternGenome {
    const LAYOUT: &'static str = "pattern / genome";

    fn parse_text(text: &str) -> Result<Self, ParseError> {
        let lines = require_lines(text, 2, Self::LAYOUT)?;
        Ok(Self {
            pattern: parse_sequence(lines[0])?,
            genome: join_sequence(&lines[1..])?,
        })
    }
}

/// Genome on all lines but the last, `k L t` on the last line (BA1E)
#[derive(Debug, Clone)]
pub struct ClumpDataset {
    pub genome: DnaSequence,
    pub k: usize,
    pub window: usize,
    pub t: usize,
}

impl RosalindDataset for ClumpDataset {
    const LAYOUT: &'static str = "genome / k L t";

    fn parse_text(text: &str) -> Result<Self, ParseError> {
        let lines = require_lines(text, 2, Self::LAYOUT)?;
        let (last, rest) = split_last_line(&lines)?;
        let [k, window, t] = parse_integers(last)?;
        Ok(Self {
            genome: join_sequence(rest)?,
            k,
            window,
            t,
        })
    }
}

/// Exactly two sequences, one per line (BA1G)
#[derive(Debug, Clone)]
pub struct SequencePair {
    pub p: DnaSequence,
    pub q: DnaSequence,
}

impl RosalindDataset for SequencePair {
    const LAYOUT: &'static str = "p / q";

    fn parse_text(text: &str) -> Result<Self, ParseError> {
        let lines = require_lines(text, 2, Self::LAYOUT)?;
        if lines.len() > 2 {
            return Err(ParseError::InvalidFormat(format!(
                "expected exactly 2 sequence lines ({}), found {}",
                Self::LAYOUT,
                lines.len()
            )));
        }
        Ok(Self {
            p: parse_sequence(lines[0])?,
            q: parse_sequence(lines[1])?,
        })
    }
}

/// Pattern on the first line, text in the middle, `d` on the last line (BA1H)
#[derive(Debug, Clone)]
pub struct ApproxOccurrence {
    pub pattern: DnaSequence,
    pub text: DnaSequence,
    pub d: usize,
}

impl RosalindDataset for ApproxOccurrence {
    const LAYOUT: &'static str = "pattern / text / d";

    fn parse_text(text: &str) -> Result<Self, ParseError> {
        let lines = require_lines(text, 3, Self::LAYOUT)?;
        let (last, rest) = split_last_line(&lines)?;
        let [d] = parse_integers(last)?;
        Ok(Self {
            pattern: parse_sequence(rest[0])?,
            text: join_sequence(&rest[1..])?,
            d,
        })
    }
}

/// Pattern on the first line, `d` on the second (BA1N)
#[derive(Debug, Clone)]
pub struct PatternD {
    pub pattern: DnaSequence,
    pub d: usize,
}

impl RosalindDataset for PatternD {
    const LAYOUT: &'static str = "pattern / d";

    fn parse_text(text: &str) -> Result<Self, ParseError> {
        let lines = require_lines(text, 2, Self::LAYOUT)?;
        if lines.len() > 2 {
            return Err(ParseError::InvalidFormat(format!(
                "expected exactly 2 lines ({}), found {}",
                Self::LAYOUT,
                lines.len()
            )));
        }
        let [d] = parse_integers(lines[1])?;
        Ok(Self {
            pattern: parse_sequence(lines[0])?,
            d,
        })
    }
}

/// `k d` on the first line, one or more sequences after it (BA2A)
#[derive(Debug, Clone)]
pub struct MotifDataset {
    pub k: usize,
    pub d: usize,
    pub dnas: Vec<DnaSequence>,
}

impl RosalindDataset for MotifDataset {
    const LAYOUT: &'static str = "k d / dna...";

    fn parse_text(text: &str) -> Result<Self, ParseError> {
        let lines = require_lines(text, 1, Self::LAYOUT)?;
        let [k, d] = parse_integers(lines[0])?;
        Ok(Self {
            k,
            d,
            dnas: sequence_list(&lines[1..])?,
        })
    }
}

/// `k` on the first line, one or more sequences after it (BA2B)
#[derive(Debug, Clone)]
pub struct MedianDataset {
    pub k: usize,
    pub dnas: Vec<DnaSequence>,
}

impl RosalindDataset for MedianDataset {
    const LAYOUT: &'static str = "k / dna...";

    fn parse_text(text: &str) -> Result<Self, ParseError> {
        let lines = require_lines(text, 1, Self::LAYOUT)?;
        let [k] = parse_integers(lines[0])?;
        Ok(Self {
            k,
            dnas: sequence_list(&lines[1..])?,
        })
    }
}

/// Pattern on the first line, sequences separated by whitespace after it (BA2H)
#[derive(Debug, Clone)]
pub struct PatternDnas {
    pub pattern: DnaSequence,
    pub dnas: Vec<DnaSequence>,
}

impl RosalindDataset for PatternDnas {
    const LAYOUT: &'static str = "pattern / dna...";

    fn parse_text(text: &str) -> Result<Self, ParseError> {
        let lines = require_lines(text, 1, Self::LAYOUT)?;
        Ok(Self {
            pattern: parse_sequence(lines[0])?,
            dnas: sequence_list(&lines[1..])?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_text_k_joins_wrapped_text() {
        let dataset = TextK::parse_text("ACGTTGCATG\nTCGCATGATG\r\n\n4\n").unwrap();
        assert_eq!(dataset.text.to_string(), "ACGTTGCATGTCGCATGATG");
        assert_eq!(dataset.k, 4);
    }

    #[test]
    fn test_text_kd() {
        let dataset = TextKD::parse_text("ACGTTGCATGTCGCATGATGCATGAGAGCT\n4 1\n").unwrap();
        assert_eq!(dataset.text.len(), 30);
        assert_eq!((dataset.k, dataset.d), (4, 1));
    }

    #[test]
    fn test_clump_dataset() {
        let dataset = ClumpDataset::parse_text("CGGACTCGACAG\n5 75 4\n").unwrap();
        assert_eq!(dataset.genome.to_string(), "CGGACTCGACAG");
        assert_eq!((dataset.k, dataset.window, dataset.t), (5, 75, 4));
    }

    #[test]
    fn test_approx_occurrence() {
        let dataset = ApproxOccurrence::parse_text("ATTCTGGA\nCGCCCGAATCC\n3\n").unwrap();
        assert_eq!(dataset.pattern.to_string(), "ATTCTGGA");
        assert_eq!(dataset.text.to_string(), "CGCCCGAATCC");
        assert_eq!(dataset.d, 3);
    }

    #[test]
    fn test_motif_dataset() {
        let dataset = MotifDataset::parse_text("3 1\nATTTGGC\nTGCCTTA\nCGGTATC\nGAAAATT\n").unwrap();
        assert_eq!((dataset.k, dataset.d), (3, 1));
        assert_eq!(dataset.dnas.len(), 4);
    }

    #[test]
    fn test_pattern_dnas_space_separated() {
        let dataset =
            PatternDnas::parse_text("AAA\nTTACCTTAAC GATATCTGTC ACGGCGTTCG CCCTAAAGAG CGTCAGAGGT\n")
                .unwrap();
        assert_eq!(dataset.pattern.to_string(), "AAA");
        assert_eq!(dataset.dnas.len(), 5);
        assert_eq!(dataset.dnas[4].to_string(), "CGTCAGAGGT");
    }

    #[test]
    fn test_sequence_pair_rejects_extra_lines() {
        assert!(SequencePair::parse_text("ACG\nACG\n").is_ok());
        assert!(matches!(
            SequencePair::parse_text("ACG\nACG\nACG\n"),
            Err(ParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_pattern_d_rejects_extra_lines() {
        assert!(PatternD::parse_text("ACG\n1\n").is_ok());
        let err = PatternD::parse_text("ACG\n1\nACG\n").unwrap_err();
        assert!(matches!(err, ParseError::InvalidFormat(_)));
        assert!(err.to_string().contains("found 3"));
    }

    #[test]
    fn test_missing_lines() {
        let err = TextK::parse_text("ACGT\n").unwrap_err();
        assert!(matches!(err, ParseError::InvalidFormat(_)));
        assert!(err.to_string().contains("text / k"));
    }

    #[test]
    fn test_bad_integers() {
        assert!(matches!(
            TextK::parse_text("ACGT\nfour\n"),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            TextKD::parse_text("ACGT\n4\n"),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            PatternD::parse_text("ACG\n-1\n"),
            Err(ParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_invalid_sequence_reports_line() {
        let err = TextPattern::parse_text("ACGT\nACNT\nACG\n").unwrap_err();
        match err {
            ParseError::InvalidSequence { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "ACG").unwrap();
        writeln!(file, "1").unwrap();
        file.flush().unwrap();

        let dataset = PatternD::from_file(file.path()).unwrap();
        assert_eq!(dataset.pattern.to_string(), "ACG");
        assert_eq!(dataset.d, 1);
    }

    #[test]
    fn test_from_gzipped_file() {
        use flate2::write::GzEncoder;
        use flate2::Compression;

        let file = NamedTempFile::with_suffix(".txt.gz").unwrap();
        let mut encoder = GzEncoder::new(file.reopen().unwrap(), Compression::default());
        encoder.write_all(b"GCGCG\nGCG\n").unwrap();
        encoder.finish().unwrap();

        let dataset = TextPattern::from_file(file.path()).unwrap();
        assert_eq!(dataset.text.to_string(), "GCGCG");
        assert_eq!(dataset.pattern.to_string(), "GCG");
    }

    #[test]
    fn test_from_multi_member_gzip_file() {
        use flate2::write::GzEncoder;
        use flate2::Compression;

        // BGZF files are a series of independent gzip members
        let file = NamedTempFile::with_suffix(".txt.bgz").unwrap();
        let mut out = file.reopen().unwrap();
        for chunk in [&b"CATGGGCATC\n"[..], &b"GGCCATACGCC\n"[..]] {
            let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
            encoder.write_all(chunk).unwrap();
            out.write_all(&encoder.finish().unwrap()).unwrap();
        }
        out.flush().unwrap();

        let dataset = SingleSequence::from_file(file.path()).unwrap();
        assert_eq!(dataset.sequence.to_string(), "CATGGGCATCGGCCATACGCC");
    }

    #[test]
    fn test_missing_file() {
        let err = SingleSequence::from_file(Path::new("/nonexistent/dataset.txt")).unwrap_err();
        assert!(matches!(err, ParseError::Io(_)));
    }
}
