//! Levenshtein (edit) distance.
//!
//! Three evaluations of the same recurrence are provided:
//!
//! - [`distance`]: top-down over suffixes, memoized by suffix pair.
//! - [`optimized_distance`]: top-down over prefix lengths `(i, j)`, memoized by
//!   index pair.
//! - [`rolling_distance`]: bottom-up with two rolling rows, O(min(m, n)) space.
//!
//! All three run in O(m·n) time. The memoized variants keep their pending
//! subproblems on a heap-allocated worklist, never on the call stack, and use
//! O(m·n) space for their cache; callers are responsible for bounding input
//! size.

use log::trace;
use std::collections::HashMap;

use super::cost_table::relax;

/// A suffix is identified by how many symbols remain, so the pair of
/// remaining lengths names the exact `(current-A, current-B)` suffix pair.
type SuffixCache = HashMap<(usize, usize), usize>;

fn cached_suffix<T>(memo: &SuffixCache, a: &[T], b: &[T]) -> Option<usize> {
    if a.is_empty() {
        Some(b.len())
    } else if b.is_empty() {
        Some(a.len())
    } else {
        memo.get(&(a.len(), b.len())).copied()
    }
}

/// Computes the edit distance between `a` and `b` by memoized evaluation over
/// their suffixes.
///
/// The recurrence compares first symbols and descends into `a[1..]`, `b[1..]`
/// or both. Each suffix pair is solved once and cached under its pair of
/// remaining lengths. Takes O(m·n) time and space.
///
/// # Examples
///
/// ```
/// use editdist::cs::dynamic::edit_distance::distance;
///
/// let a: Vec<char> = "kitten".chars().collect();
/// let b: Vec<char> = "sitting".chars().collect();
/// assert_eq!(distance(&a, &b), 3);
/// assert_eq!(distance::<u8>(&[], b"abc"), 3);
/// ```
pub fn distance<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let mut memo = SuffixCache::new();
    if let Some(result) = cached_suffix(&memo, a, b) {
        return result;
    }

    let mut stack = vec![(a.len(), b.len())];
    while let Some(&(rest_a, rest_b)) = stack.last() {
        if memo.contains_key(&(rest_a, rest_b)) {
            stack.pop();
            continue;
        }

        let (sa, sb) = (&a[a.len() - rest_a..], &b[b.len() - rest_b..]);
        let (a_tail, b_tail) = (&sa[1..], &sb[1..]);
        let substitute = cached_suffix(&memo, a_tail, b_tail);
        if sa[0] == sb[0] {
            match substitute {
                Some(value) => {
                    memo.insert((rest_a, rest_b), value);
                    stack.pop();
                }
                None => stack.push((a_tail.len(), b_tail.len())),
            }
            continue;
        }

        let insert = cached_suffix(&memo, sa, b_tail);
        let delete = cached_suffix(&memo, a_tail, sb);
        match (insert, delete, substitute) {
            (Some(ins), Some(del), Some(sub)) => {
                memo.insert((rest_a, rest_b), 1 + ins.min(del).min(sub));
                stack.pop();
            }
            _ => {
                if insert.is_none() {
                    stack.push((sa.len(), b_tail.len()));
                }
                if delete.is_none() {
                    stack.push((a_tail.len(), sb.len()));
                }
                if substitute.is_none() {
                    stack.push((a_tail.len(), b_tail.len()));
                }
            }
        }
    }

    trace!("suffix cache held {} entries", memo.len());
    cached_suffix(&memo, a, b).unwrap_or_default()
}

/// Computes the edit distance between `a` and `b` by memoized evaluation over
/// prefix lengths.
///
/// State `(i, j)` stands for "the first `i` symbols of `a` against the first
/// `j` symbols of `b`". Always agrees with [`distance`], and never slices the
/// inputs at all. Takes O(m·n) time and space.
///
/// # Examples
///
/// ```
/// use editdist::cs::dynamic::edit_distance::optimized_distance;
///
/// assert_eq!(optimized_distance(b"sunday", b"saturday"), 3);
/// assert_eq!(optimized_distance(b"abc", b"abc"), 0);
/// ```
pub fn optimized_distance<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let mut memo: HashMap<(usize, usize), usize> = HashMap::new();

    // Prefixes against an empty prefix cost one operation per symbol.
    let lookup = |memo: &HashMap<(usize, usize), usize>, i: usize, j: usize| match (i, j) {
        (0, j) => Some(j),
        (i, 0) => Some(i),
        _ => memo.get(&(i, j)).copied(),
    };

    let root = (a.len(), b.len());
    if let Some(result) = lookup(&memo, root.0, root.1) {
        return result;
    }

    let mut stack = vec![root];
    while let Some(&(i, j)) = stack.last() {
        if memo.contains_key(&(i, j)) {
            stack.pop();
            continue;
        }

        let substitute = lookup(&memo, i - 1, j - 1);
        if a[i - 1] == b[j - 1] {
            match substitute {
                Some(value) => {
                    memo.insert((i, j), value);
                    stack.pop();
                }
                None => stack.push((i - 1, j - 1)),
            }
            continue;
        }

        let insert = lookup(&memo, i, j - 1);
        let delete = lookup(&memo, i - 1, j);
        match (insert, delete, substitute) {
            (Some(ins), Some(del), Some(sub)) => {
                memo.insert((i, j), 1 + ins.min(del).min(sub));
                stack.pop();
            }
            _ => {
                if insert.is_none() {
                    stack.push((i, j - 1));
                }
                if delete.is_none() {
                    stack.push((i - 1, j));
                }
                if substitute.is_none() {
                    stack.push((i - 1, j - 1));
                }
            }
        }
    }

    trace!("index cache held {} entries", memo.len());
    lookup(&memo, root.0, root.1).unwrap_or_default()
}

/// Computes the edit distance between `a` and `b` bottom-up, keeping only two
/// rows of the cost table.
///
/// The rows run along the shorter input, so memory is O(min(m, n)). Distance
/// is symmetric, so swapping the inputs does not change the result.
///
/// # Examples
///
/// ```
/// use editdist::rolling_distance;
///
/// assert_eq!(rolling_distance(&[1, 2, 3], &[1, 3]), 1);
/// assert_eq!(rolling_distance::<u8>(&[], &[]), 0);
/// ```
pub fn rolling_distance<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let (outer, inner) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    // Row 0 of the table.
    let mut prev_row: Vec<usize> = (0..=inner.len()).collect();
    let mut curr_row = vec![0; inner.len() + 1];

    for (i, x) in outer.iter().enumerate() {
        curr_row[0] = i + 1;
        for (j, y) in inner.iter().enumerate() {
            curr_row[j + 1] = relax(x == y, prev_row[j], prev_row[j + 1], curr_row[j]);
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[inner.len()]
}

/// [`rolling_distance`] over the `char`s of two string slices.
///
/// The distance is counted in `char`s, not bytes.
///
/// # Examples
///
/// ```
/// use editdist::levenshtein_distance;
///
/// assert_eq!(levenshtein_distance("", ""), 0);
/// assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
/// assert_eq!(levenshtein_distance("gumbo", "gambol"), 2);
/// ```
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    rolling_distance(&a, &b)
}

/// [`distance`] over the `char`s of two string slices.
pub fn str_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    distance(&a, &b)
}

/// [`optimized_distance`] over the `char`s of two string slices.
pub fn str_optimized_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    optimized_distance(&a, &b)
}

/// Returns `1 - distance / max_len` in `[0.0, 1.0]`, where `max_len` is the
/// longer input's length in `char`s.
///
/// Two empty strings are identical and score `1.0`.
///
/// # Examples
///
/// ```
/// use editdist::normalized_similarity;
///
/// assert_eq!(normalized_similarity("abc", "abc"), 1.0);
/// assert_eq!(normalized_similarity("abc", "xyz"), 0.0);
/// ```
pub fn normalized_similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    1.0 - levenshtein_distance(a, b) as f64 / max_len as f64
}
