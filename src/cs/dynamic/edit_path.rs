//! Reconstruction of a minimal edit script from the cost table.

use std::fmt::{Display, Formatter};

use super::cost_table::CostTable;
use crate::error::{Error, Result};

/// A single step of an edit script turning one sequence into another.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Operation<T> {
    /// The symbol is carried over unchanged.
    Keep(T),
    /// The source symbol `from` is replaced by `to`.
    Substitute { from: T, to: T },
    /// `T` is inserted without consuming a source symbol.
    Insert(T),
    /// The source symbol is dropped.
    Delete(T),
}

impl<T> Operation<T> {
    /// `false` for [`Operation::Keep`], `true` for every operation that costs 1.
    pub fn is_edit(&self) -> bool {
        !matches!(self, Operation::Keep(_))
    }
}

impl<T: Display> Display for Operation<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Keep(symbol) => write!(f, "keep '{}'", symbol),
            Operation::Substitute { from, to } => {
                write!(f, "substitute '{}' with '{}'", from, to)
            }
            Operation::Insert(symbol) => write!(f, "insert '{}'", symbol),
            Operation::Delete(symbol) => write!(f, "delete '{}'", symbol),
        }
    }
}

/// Returns a minimal sequence of operations that turns `a` into `b`.
///
/// Builds the full [`CostTable`] and walks it backward from `(m, n)` to
/// `(0, 0)`. Where symbols match, the walk always keeps them. Otherwise, when
/// several moves reach the same minimal cost, substitution is preferred over
/// insertion, and insertion over deletion, so the result is reproducible.
///
/// The number of non-[`Keep`](Operation::Keep) operations equals the edit
/// distance. Takes O(m·n) time and space.
///
/// # Examples
///
/// ```
/// use editdist::{edit_path, Operation};
///
/// let ops = edit_path(b"abc", b"xbc");
/// assert_eq!(
///     ops,
///     vec![
///         Operation::Substitute { from: b'a', to: b'x' },
///         Operation::Keep(b'b'),
///         Operation::Keep(b'c'),
///     ]
/// );
/// ```
pub fn edit_path<T: PartialEq + Clone>(a: &[T], b: &[T]) -> Vec<Operation<T>> {
    let table = CostTable::build(a, b);
    backtrack(&table, a, b)
}

fn backtrack<T: PartialEq + Clone>(table: &CostTable, a: &[T], b: &[T]) -> Vec<Operation<T>> {
    let (mut i, mut j) = (a.len(), b.len());
    let mut ops = Vec::with_capacity(i.max(j));

    while i > 0 || j > 0 {
        if i > 0 && j > 0 && a[i - 1] == b[j - 1] {
            ops.push(Operation::Keep(a[i - 1].clone()));
            i -= 1;
            j -= 1;
            continue;
        }

        let cost = table.at(i, j);
        if i > 0 && j > 0 && cost == table.at(i - 1, j - 1) + 1 {
            ops.push(Operation::Substitute {
                from: a[i - 1].clone(),
                to: b[j - 1].clone(),
            });
            i -= 1;
            j -= 1;
        } else if j > 0 && cost == table.at(i, j - 1) + 1 {
            ops.push(Operation::Insert(b[j - 1].clone()));
            j -= 1;
        } else {
            // Only deletion is left; row 0 always resolves through insertion.
            debug_assert!(i > 0 && cost == table.at(i - 1, j) + 1);
            ops.push(Operation::Delete(a[i - 1].clone()));
            i -= 1;
        }
    }

    // Built end-to-front.
    ops.reverse();
    ops
}

/// [`edit_path`] over the `char`s of two string slices.
///
/// # Examples
///
/// ```
/// use editdist::{str_edit_path, Operation};
///
/// assert_eq!(
///     str_edit_path("", "ab"),
///     vec![Operation::Insert('a'), Operation::Insert('b')]
/// );
/// ```
pub fn str_edit_path(a: &str, b: &str) -> Vec<Operation<char>> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    edit_path(&a, &b)
}

/// Counts the operations in `ops` that cost one edit.
pub fn edit_cost<T>(ops: &[Operation<T>]) -> usize {
    ops.iter().filter(|op| op.is_edit()).count()
}

/// Replays `ops` against `source` and returns the resulting sequence.
///
/// `Keep`, `Substitute` and `Delete` each consume the next source symbol and
/// require it to equal the symbol the operation records; `Insert` consumes
/// nothing. Every source symbol must be consumed.
///
/// # Errors
///
/// - [`Error::SymbolMismatch`] if a consumed source symbol differs from the
///   operation's.
/// - [`Error::SourceExhausted`] if an operation needs a symbol past the end of
///   `source`.
/// - [`Error::UnconsumedSource`] if symbols remain after the last operation.
///
/// # Examples
///
/// ```
/// use editdist::{apply_edit_path, str_edit_path};
///
/// let source: Vec<char> = "kitten".chars().collect();
/// let ops = str_edit_path("kitten", "sitting");
/// let target: String = apply_edit_path(&source, &ops).unwrap().into_iter().collect();
/// assert_eq!(target, "sitting");
/// ```
pub fn apply_edit_path<T>(source: &[T], ops: &[Operation<T>]) -> Result<Vec<T>>
where
    T: PartialEq + Clone,
{
    let mut target = Vec::with_capacity(source.len());
    let mut position = 0;

    for op in ops {
        match op {
            Operation::Keep(symbol) => {
                consume(source, &mut position, symbol)?;
                target.push(symbol.clone());
            }
            Operation::Substitute { from, to } => {
                consume(source, &mut position, from)?;
                target.push(to.clone());
            }
            Operation::Delete(symbol) => consume(source, &mut position, symbol)?,
            Operation::Insert(symbol) => target.push(symbol.clone()),
        }
    }

    if position < source.len() {
        return Err(Error::UnconsumedSource {
            remaining: source.len() - position,
        });
    }
    Ok(target)
}

fn consume<T: PartialEq>(source: &[T], position: &mut usize, expected: &T) -> Result<()> {
    let current = source.get(*position).ok_or(Error::SourceExhausted {
        position: *position,
    })?;
    if current != expected {
        return Err(Error::SymbolMismatch {
            position: *position,
        });
    }
    *position += 1;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::Operation::{Delete, Insert, Keep, Substitute};

    #[test]
    fn test_all_substitutions() {
        let ops = str_edit_path("abc", "xyz");
        assert_eq!(
            ops,
            vec![
                Substitute { from: 'a', to: 'x' },
                Substitute { from: 'b', to: 'y' },
                Substitute { from: 'c', to: 'z' },
            ]
        );
        assert_eq!(edit_cost(&ops), 3);
    }

    #[test]
    fn test_empty_source_and_target() {
        assert_eq!(
            str_edit_path("", "abc"),
            vec![Insert('a'), Insert('b'), Insert('c')]
        );
        assert_eq!(
            str_edit_path("abc", ""),
            vec![Delete('a'), Delete('b'), Delete('c')]
        );
        assert!(str_edit_path("", "").is_empty());
    }

    #[test]
    fn test_identical() {
        let ops = str_edit_path("abc", "abc");
        assert_eq!(ops, vec![Keep('a'), Keep('b'), Keep('c')]);
        assert_eq!(edit_cost(&ops), 0);
    }

    #[test]
    fn test_kitten_sitting() {
        let ops = str_edit_path("kitten", "sitting");
        assert_eq!(
            ops,
            vec![
                Substitute { from: 'k', to: 's' },
                Keep('i'),
                Keep('t'),
                Keep('t'),
                Substitute { from: 'e', to: 'i' },
                Keep('n'),
                Insert('g'),
            ]
        );
        assert_eq!(edit_cost(&ops), 3);
    }

    #[test]
    fn test_swap_prefers_substitution() {
        // Every move out of (2, 2) ties at cost 2; substitution wins.
        let ops = str_edit_path("ab", "ba");
        assert_eq!(
            ops,
            vec![Substitute { from: 'a', to: 'b' }, Substitute { from: 'b', to: 'a' }]
        );
        let source: Vec<char> = "ab".chars().collect();
        let target: String = apply_edit_path(&source, &ops).unwrap().into_iter().collect();
        assert_eq!(target, "ba");
    }

    #[test]
    fn test_rotation() {
        assert_eq!(
            str_edit_path("abc", "bca"),
            vec![Delete('a'), Keep('b'), Keep('c'), Insert('a')]
        );
    }

    #[test]
    fn test_insertion_preferred_over_deletion() {
        // At (3, 3) insertion and deletion tie and substitution is not
        // minimal; insertion wins.
        assert_eq!(
            str_edit_path("aba", "bab"),
            vec![Delete('a'), Keep('b'), Keep('a'), Insert('b')]
        );
    }

    #[test]
    fn test_round_trip_scenarios() {
        let pairs = [
            ("kitten", "sitting"),
            ("sunday", "saturday"),
            ("intention", "execution"),
            ("", "abc"),
            ("abc", ""),
            ("gumbo", "gambol"),
        ];
        for (a, b) in pairs {
            let source: Vec<char> = a.chars().collect();
            let ops = str_edit_path(a, b);
            let target: String = apply_edit_path(&source, &ops)
                .unwrap()
                .into_iter()
                .collect();
            assert_eq!(target, b, "{a:?} -> {b:?}");
        }
    }

    #[test]
    fn test_apply_errors() {
        let source = ['a', 'b'];
        assert_eq!(
            apply_edit_path(&source, &[Keep('a'), Delete('c')]),
            Err(Error::SymbolMismatch { position: 1 })
        );
        assert_eq!(
            apply_edit_path(&source, &[Keep('a'), Keep('b'), Delete('c')]),
            Err(Error::SourceExhausted { position: 2 })
        );
        assert_eq!(
            apply_edit_path(&source, &[Insert('z'), Keep('a')]),
            Err(Error::UnconsumedSource { remaining: 1 })
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Keep('a').to_string(), "keep 'a'");
        assert_eq!(
            Substitute { from: 'k', to: 's' }.to_string(),
            "substitute 'k' with 's'"
        );
        assert_eq!(Insert('g').to_string(), "insert 'g'");
        assert_eq!(Delete('x').to_string(), "delete 'x'");
    }
}
