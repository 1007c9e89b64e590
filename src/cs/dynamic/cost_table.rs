//! The full Levenshtein cost table.

use log::debug;
use ndarray::Array2;

/// One step of the recurrence: the cost of cell `(i, j)` from its diagonal,
/// upper `(i-1, j)` and left `(i, j-1)` neighbours.
pub(crate) fn relax(same_symbol: bool, diagonal: usize, up: usize, left: usize) -> usize {
    if same_symbol {
        diagonal
    } else {
        1 + diagonal.min(up).min(left)
    }
}

/// The `(m + 1) × (n + 1)` grid of prefix distances between two sequences.
///
/// Cell `(i, j)` holds the edit distance between the first `i` symbols of `a`
/// and the first `j` symbols of `b`. Row 0 and column 0 hold their own index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostTable {
    cells: Array2<usize>,
}

impl CostTable {
    /// Fills the table bottom-up, row by row.
    ///
    /// Each cell depends only on its already-filled neighbours `(i-1, j)`,
    /// `(i, j-1)` and `(i-1, j-1)`. Takes O(m·n) time and space.
    ///
    /// # Examples
    ///
    /// ```
    /// use editdist::CostTable;
    ///
    /// let table = CostTable::build(b"kitten", b"sitting");
    /// assert_eq!(table.dims(), (7, 8));
    /// assert_eq!(table.distance(), 3);
    /// assert_eq!(table.get(0, 4), Some(4));
    /// ```
    pub fn build<T: PartialEq>(a: &[T], b: &[T]) -> Self {
        let (m, n) = (a.len(), b.len());
        debug!("building {}x{} cost table", m + 1, n + 1);

        let mut cells = Array2::<usize>::zeros((m + 1, n + 1));
        for i in 0..=m {
            cells[[i, 0]] = i;
        }
        for j in 0..=n {
            cells[[0, j]] = j;
        }

        for i in 1..=m {
            for j in 1..=n {
                cells[[i, j]] = relax(
                    a[i - 1] == b[j - 1],
                    cells[[i - 1, j - 1]],
                    cells[[i - 1, j]],
                    cells[[i, j - 1]],
                );
            }
        }

        Self { cells }
    }

    /// Returns the cell at `(i, j)`, or `None` outside the table.
    pub fn get(&self, i: usize, j: usize) -> Option<usize> {
        self.cells.get((i, j)).copied()
    }

    /// The edit distance between the two full sequences, i.e. cell `(m, n)`.
    pub fn distance(&self) -> usize {
        let (rows, cols) = self.cells.dim();
        self.cells[[rows - 1, cols - 1]]
    }

    /// `(m + 1, n + 1)`.
    pub fn dims(&self) -> (usize, usize) {
        self.cells.dim()
    }

    pub(crate) fn at(&self, i: usize, j: usize) -> usize {
        self.cells[[i, j]]
    }
}
