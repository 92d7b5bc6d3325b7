//! Guess grid and input cursor

/// Maximum number of guesses per puzzle
pub const TRIES: usize = 6;

/// A single grid cell: empty or one guessed letter
pub type Cell = Option<char>;

/// The board of guesses: `height` rows of `width` cells each
///
/// Every row is its own allocation, so writing one row never aliases another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
    width: usize,
}

impl Grid {
    /// Create an empty grid
    #[must_use]
    pub fn new(height: usize, width: usize) -> Self {
        let rows = (0..height).map(|_| vec![None; width]).collect();
        Self { rows, width }
    }

    /// Build a grid from existing rows
    ///
    /// Returns `None` if the rows are not all `width` cells long.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<Cell>>, width: usize) -> Option<Self> {
        if rows.iter().any(|row| row.len() != width) {
            return None;
        }
        Some(Self { rows, width })
    }

    /// Number of cells per row
    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    #[inline]
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// All rows, top to bottom
    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// A single row, if in range
    #[inline]
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&[Cell]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// The letter at `(row, col)`; `None` if empty or out of range
    #[inline]
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.rows.get(row).and_then(|r| r.get(col)).copied().flatten()
    }

    /// Overwrite a cell. Out-of-range writes are ignored.
    pub fn set(&mut self, row: usize, col: usize, value: Cell) {
        if let Some(cell) = self.rows.get_mut(row).and_then(|r| r.get_mut(col)) {
            *cell = value;
        }
    }

    /// Check whether every cell of a row is empty
    #[must_use]
    pub fn row_is_empty(&self, index: usize) -> bool {
        self.row(index).is_none_or(|row| row.iter().all(Option::is_none))
    }

    /// Number of rows holding at least one letter
    #[must_use]
    pub fn filled_rows(&self) -> usize {
        (0..self.height()).filter(|&i| !self.row_is_empty(i)).count()
    }
}

/// The next cell eligible for input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub row: usize,
    pub column: usize,
}

impl Cursor {
    #[must_use]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_empty() {
        let grid = Grid::new(TRIES, 5);
        assert_eq!(grid.height(), 6);
        assert_eq!(grid.width(), 5);
        assert_eq!(grid.filled_rows(), 0);
        assert!(grid.rows().iter().all(|row| row.len() == 5));
    }

    #[test]
    fn rows_are_independent() {
        let mut grid = Grid::new(TRIES, 5);
        grid.set(0, 0, Some('h'));

        assert_eq!(grid.cell(0, 0), Some('h'));
        for row in 1..TRIES {
            assert_eq!(grid.cell(row, 0), None, "row {row} aliased row 0");
        }
    }

    #[test]
    fn out_of_range_access_is_harmless() {
        let mut grid = Grid::new(2, 3);
        grid.set(5, 5, Some('x'));
        assert_eq!(grid.cell(5, 5), None);
        assert_eq!(grid.row(2), None);
        assert!(grid.row_is_empty(9));
    }

    #[test]
    fn from_rows_checks_width() {
        let ok = Grid::from_rows(vec![vec![None; 3], vec![Some('a'), None, None]], 3);
        assert!(ok.is_some());

        let ragged = Grid::from_rows(vec![vec![None; 3], vec![None; 2]], 3);
        assert!(ragged.is_none());
    }

    #[test]
    fn filled_rows_counts_partial_rows() {
        let mut grid = Grid::new(TRIES, 5);
        grid.set(0, 4, Some('a'));
        grid.set(1, 0, Some('b'));
        assert_eq!(grid.filled_rows(), 2);
    }
}
