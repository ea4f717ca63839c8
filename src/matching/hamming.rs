use crate::core::error::KmerError;

/// Count the positions at which two equal-length sequences differ.
///
/// Works on any symbol slice (`&[u8]`, `&[Nucleotide]`, ...). Packed k-mers
/// have their own fast path in [`crate::core::kmer::Kmer::hamming_distance`].
///
/// # Examples
///
/// ```
/// use kmer_solver::matching::hamming::hamming_distance;
///
/// assert_eq!(hamming_distance(b"GGGCCGTTGGT", b"GGACCGTTGAC").unwrap(), 3);
/// assert!(hamming_distance(b"ACG", b"AC").is_err());
/// ```
///
/// # Errors
///
/// Returns `KmerError::InvalidInput` if the lengths differ; sequences are
/// never silently truncated to the shorter length.
pub fn hamming_distance<T: PartialEq>(p: &[T], q: &[T]) -> Result<usize, KmerError> {
    if p.len() != q.len() {
        return Err(KmerError::InvalidInput(format!(
            "Hamming distance requires equal lengths, got {} and {}",
            p.len(),
            q.len()
        )));
    }
    Ok(p.iter().zip(q).filter(|(a, b)| a != b).count())
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn equal_length_pair() -> impl Strategy<Value = (Vec<u8>, Vec<u8>)> {
        (0usize..100).prop_flat_map(|len| {
            let base = prop_oneof![Just(b'A'), Just(b'C'), Just(b'G'), Just(b'T')];
            (
                proptest::collection::vec(base.clone(), len),
                proptest::collection::vec(base, len),
            )
        })
    }

    proptest! {
        #[test]
        fn distance_is_symmetric((p, q) in equal_length_pair()) {
            prop_assert_eq!(
                hamming_distance(&p, &q).unwrap(),
                hamming_distance(&q, &p).unwrap()
            );
            prop_assert_eq!(hamming_distance(&p, &p).unwrap(), 0);
        }
    }
}
