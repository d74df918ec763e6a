// evolve.rs - Conway's rules applied to a whole generation

use crate::grid::{Cell, Grid};
use crate::neighbors::count_unchecked;

/// Next state of one cell given its live-neighbor count.
pub fn next_state(cell: Cell, live_neighbors: u8) -> Cell {
    match (cell, live_neighbors) {
        (Cell::Alive, 2) | (Cell::Alive, 3) => Cell::Alive, // Survival
        (Cell::Dead, 3)                     => Cell::Alive, // Birth
        _                                   => Cell::Dead,  // Under/overpopulation or stays dead
    }
}

/// Computes the next generation into a fresh grid.
///
/// Every count is read from `grid`, which is never written, so the result
/// does not depend on visiting order.
pub fn advance(grid: &Grid) -> Grid {
    let (rows, cols) = grid.dimensions();
    let cells = (0..rows)
        .flat_map(|row| (0..cols).map(move |col| (row, col)))
        .map(|(row, col)| {
            let current = Cell::from(grid.is_alive_at(row, col));
            next_state(current, count_unchecked(grid, row, col))
        })
        .collect();
    Grid::from_row_major(rows, cols, cells)
}
