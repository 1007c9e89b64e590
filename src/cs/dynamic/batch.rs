//! Many independent distance computations spread across a rayon thread pool.
//!
//! Each distance call owns its own rows, so pairs need no coordination beyond
//! rayon's work splitting.

use log::debug;
use rayon::prelude::*;

use super::edit_distance::levenshtein_distance;

/// Computes [`levenshtein_distance`] for every `(a, b)` pair in parallel.
///
/// The output has the same order as `pairs`.
///
/// # Examples
///
/// ```
/// use editdist::pairwise_distances;
///
/// let pairs = [("kitten", "sitting"), ("abc", "abc"), ("", "xyz")];
/// assert_eq!(pairwise_distances(&pairs), vec![3, 0, 3]);
/// ```
pub fn pairwise_distances<A, B>(pairs: &[(A, B)]) -> Vec<usize>
where
    A: AsRef<str> + Sync,
    B: AsRef<str> + Sync,
{
    debug!("computing {} pairwise distances", pairs.len());
    pairs
        .par_iter()
        .map(|(a, b)| levenshtein_distance(a.as_ref(), b.as_ref()))
        .collect()
}

/// Finds the candidate closest to `query`.
///
/// Returns `(index, distance)` of the best candidate. Ties go to the lowest
/// index, and an empty candidate list yields `None`.
///
/// # Examples
///
/// ```
/// use editdist::closest_match;
///
/// let commands = ["status", "commit", "checkout"];
/// assert_eq!(closest_match("comit", &commands), Some((1, 1)));
/// assert_eq!(closest_match::<&str>("anything", &[]), None);
/// ```
pub fn closest_match<S>(query: &str, candidates: &[S]) -> Option<(usize, usize)>
where
    S: AsRef<str> + Sync,
{
    debug!("matching {:?} against {} candidates", query, candidates.len());
    candidates
        .par_iter()
        .enumerate()
        .map(|(index, candidate)| (levenshtein_distance(query, candidate.as_ref()), index))
        .min()
        .map(|(distance, index)| (index, distance))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairwise_preserves_order() {
        let pairs: Vec<(String, String)> = (0..200)
            .map(|n| ("a".repeat(n), "a".repeat(n / 2)))
            .collect();
        let distances = pairwise_distances(&pairs);
        let expected: Vec<usize> = (0..200).map(|n| n - n / 2).collect();
        assert_eq!(distances, expected);
    }

    #[test]
    fn test_pairwise_empty() {
        let pairs: [(&str, &str); 0] = [];
        assert!(pairwise_distances(&pairs).is_empty());
    }

    #[test]
    fn test_closest_match_ties_go_to_lowest_index() {
        let candidates = vec!["cat".to_string(), "bat".to_string(), "hat".to_string()];
        assert_eq!(closest_match("rat", &candidates), Some((0, 1)));
        assert_eq!(closest_match("hat", &candidates), Some((2, 0)));
    }
}
