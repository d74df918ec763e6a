// grid.rs - Bounded cell grid for Conway's Game of Life

use crate::error::GridError;

/// State of a single cell. A cell has no identity beyond its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    pub fn toggled(self) -> Self {
        match self {
            Cell::Dead => Cell::Alive,
            Cell::Alive => Cell::Dead,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

/// Fixed-size `rows x cols` board, row-major, `(0, 0)` top-left.
///
/// No wraparound: positions outside the board do not exist. `Clone` is a
/// deep copy, so a cloned grid never aliases the original.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// All-dead grid of the given size.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Dead; rows * cols],
        }
    }

    /// Grid with exactly the listed cells alive.
    pub fn from_cells(rows: usize, cols: usize, alive: &[(usize, usize)]) -> Result<Self, GridError> {
        let mut grid = Self::new(rows, cols);
        for &(row, col) in alive {
            grid.set(row, col, Cell::Alive)?;
        }
        Ok(grid)
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Result<Cell, GridError> {
        let index = self.index(row, col)?;
        Ok(self.cells[index])
    }

    pub fn set(&mut self, row: usize, col: usize, state: Cell) -> Result<(), GridError> {
        let index = self.index(row, col)?;
        self.cells[index] = state;
        Ok(())
    }

    /// Flips the cell and returns its new state.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<Cell, GridError> {
        let index = self.index(row, col)?;
        let next = self.cells[index].toggled();
        self.cells[index] = next;
        Ok(next)
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Coordinates of every live cell, row-major.
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_alive())
            .map(move |(index, _)| (index / cols, index % cols))
    }

    /// Wraps cells already laid out row-major; `cells.len() == rows * cols`.
    pub(crate) fn from_row_major(rows: usize, cols: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Self { rows, cols, cells }
    }

    /// Unchecked read for callers that already bounded `row` and `col`.
    pub(crate) fn is_alive_at(&self, row: usize, col: usize) -> bool {
        self.cells[row * self.cols + col].is_alive()
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if !self.contains(row, col) {
            return Err(GridError::OutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_all_dead() {
        let grid = Grid::new(4, 6);
        assert_eq!(grid.dimensions(), (4, 6));
        assert_eq!(grid.population(), 0);
        for row in 0..4 {
            for col in 0..6 {
                assert_eq!(grid.get(row, col), Ok(Cell::Dead));
            }
        }
    }

    #[test]
    fn test_get_and_set_out_of_range() {
        let mut grid = Grid::new(3, 5);
        let err = GridError::OutOfRange { row: 3, col: 0, rows: 3, cols: 5 };
        assert_eq!(grid.get(3, 0), Err(err));
        assert_eq!(grid.set(3, 0, Cell::Alive), Err(err));
        assert_eq!(
            grid.toggle(0, 5),
            Err(GridError::OutOfRange { row: 0, col: 5, rows: 3, cols: 5 })
        );
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_toggle_flips_state() {
        let mut grid = Grid::new(3, 3);
        assert_eq!(grid.toggle(1, 2), Ok(Cell::Alive));
        assert_eq!(grid.get(1, 2), Ok(Cell::Alive));
        assert_eq!(grid.toggle(1, 2), Ok(Cell::Dead));
        assert_eq!(grid.get(1, 2), Ok(Cell::Dead));
    }

    #[test]
    fn test_clear_kills_everything() {
        let mut grid = Grid::from_cells(4, 4, &[(0, 0), (1, 2), (3, 3)]).unwrap();
        assert_eq!(grid.population(), 3);
        grid.clear();
        assert_eq!(grid, Grid::new(4, 4));
    }

    #[test]
    fn test_clone_is_independent() {
        let original = Grid::from_cells(3, 3, &[(1, 1)]).unwrap();
        let mut copy = original.clone();
        copy.toggle(1, 1).unwrap();
        copy.toggle(0, 0).unwrap();
        assert_eq!(original.get(1, 1), Ok(Cell::Alive));
        assert_eq!(original.get(0, 0), Ok(Cell::Dead));
        assert_ne!(original, copy);
    }

    #[test]
    fn test_from_cells_rejects_outside_coordinates() {
        assert!(Grid::from_cells(2, 2, &[(0, 0), (2, 1)]).is_err());
    }

    #[test]
    fn test_alive_cells_row_major() {
        let grid = Grid::from_cells(3, 4, &[(2, 0), (0, 3), (0, 1)]).unwrap();
        let alive: Vec<_> = grid.alive_cells().collect();
        assert_eq!(alive, vec![(0, 1), (0, 3), (2, 0)]);
    }

    #[test]
    fn test_non_square_indexing() {
        let mut grid = Grid::new(2, 7);
        grid.set(1, 6, Cell::Alive).unwrap();
        assert!(grid.is_alive_at(1, 6));
        assert!(!grid.is_alive_at(0, 6));
        assert_eq!(grid.alive_cells().collect::<Vec<_>>(), vec![(1, 6)]);
    }
}
