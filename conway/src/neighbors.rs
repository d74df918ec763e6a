// neighbors.rs - Live-neighbor counting on a bounded grid

use crate::error::GridError;
use crate::grid::Grid;

/// Relative positions of the Moore neighborhood.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// Counts live cells among the in-bounds Moore neighbors of `(row, col)`.
///
/// Offsets landing outside the grid are skipped, so corners see 3
/// neighbors, edges 5 and interior cells 8. Nothing wraps around.
pub fn count_live_neighbors(grid: &Grid, row: usize, col: usize) -> Result<u8, GridError> {
    // Bounds check on the origin only; neighbors are filtered below.
    grid.get(row, col)?;
    Ok(count_unchecked(grid, row, col))
}

pub(crate) fn count_unchecked(grid: &Grid, row: usize, col: usize) -> u8 {
    let (rows, cols) = grid.dimensions();
    let mut count = 0;
    for &(dr, dc) in &NEIGHBOR_OFFSETS {
        let (Some(nr), Some(nc)) = (row.checked_add_signed(dr), col.checked_add_signed(dc)) else {
            continue;
        };
        if nr < rows && nc < cols && grid.is_alive_at(nr, nc) {
            count += 1;
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Cell;
    use proptest::prelude::*;

    fn full(rows: usize, cols: usize) -> Grid {
        let mut grid = Grid::new(rows, cols);
        for row in 0..rows {
            for col in 0..cols {
                grid.set(row, col, Cell::Alive).unwrap();
            }
        }
        grid
    }

    #[test]
    fn test_full_grid_counts_by_position() {
        let grid = full(5, 5);
        // Corners
        for &(r, c) in &[(0, 0), (0, 4), (4, 0), (4, 4)] {
            assert_eq!(count_live_neighbors(&grid, r, c), Ok(3), "corner ({r}, {c})");
        }
        // Edge interiors
        for &(r, c) in &[(0, 2), (4, 2), (2, 0), (2, 4)] {
            assert_eq!(count_live_neighbors(&grid, r, c), Ok(5), "edge ({r}, {c})");
        }
        assert_eq!(count_live_neighbors(&grid, 2, 2), Ok(8));
    }

    #[test]
    fn test_corner_counts_each_neighbor() {
        // Each corner with only its three in-bounds neighbors alive.
        let cases = [
            ((0, 0), [(0, 1), (1, 0), (1, 1)]),
            ((0, 4), [(0, 3), (1, 3), (1, 4)]),
            ((4, 0), [(3, 0), (3, 1), (4, 1)]),
            ((4, 4), [(3, 3), (3, 4), (4, 3)]),
        ];
        for ((r, c), alive) in cases {
            let grid = Grid::from_cells(5, 5, &alive).unwrap();
            assert_eq!(count_live_neighbors(&grid, r, c), Ok(3), "corner ({r}, {c})");
            for &(ar, ac) in &alive {
                let mut single = Grid::new(5, 5);
                single.set(ar, ac, Cell::Alive).unwrap();
                assert_eq!(count_live_neighbors(&single, r, c), Ok(1));
            }
        }
    }

    #[test]
    fn test_edge_diagonals_are_counted() {
        // Top edge, both inward diagonals.
        let grid = Grid::from_cells(5, 5, &[(1, 1), (1, 3)]).unwrap();
        assert_eq!(count_live_neighbors(&grid, 0, 2), Ok(2));
        // Left edge, both inward diagonals.
        let grid = Grid::from_cells(5, 5, &[(1, 1), (3, 1)]).unwrap();
        assert_eq!(count_live_neighbors(&grid, 2, 0), Ok(2));
        // Bottom edge.
        let grid = Grid::from_cells(5, 5, &[(3, 1), (3, 3), (4, 1)]).unwrap();
        assert_eq!(count_live_neighbors(&grid, 4, 2), Ok(3));
        // Right edge.
        let grid = Grid::from_cells(5, 5, &[(1, 3), (3, 3), (2, 3)]).unwrap();
        assert_eq!(count_live_neighbors(&grid, 2, 4), Ok(3));
    }

    #[test]
    fn test_no_wraparound() {
        // Opposite edges are not neighbors.
        let grid = Grid::from_cells(5, 5, &[(4, 0), (0, 4), (4, 4), (2, 4)]).unwrap();
        assert_eq!(count_live_neighbors(&grid, 0, 0), Ok(0));
        assert_eq!(count_live_neighbors(&grid, 2, 0), Ok(0));
    }

    #[test]
    fn test_cell_itself_not_counted() {
        let grid = Grid::from_cells(3, 3, &[(1, 1)]).unwrap();
        assert_eq!(count_live_neighbors(&grid, 1, 1), Ok(0));
    }

    #[test]
    fn test_single_row_and_single_cell() {
        let grid = full(1, 4);
        assert_eq!(count_live_neighbors(&grid, 0, 0), Ok(1));
        assert_eq!(count_live_neighbors(&grid, 0, 2), Ok(2));
        let grid = full(1, 1);
        assert_eq!(count_live_neighbors(&grid, 0, 0), Ok(0));
    }

    #[test]
    fn test_out_of_range_origin() {
        let grid = Grid::new(3, 3);
        assert!(matches!(
            count_live_neighbors(&grid, 3, 1),
            Err(GridError::OutOfRange { row: 3, col: 1, .. })
        ));
    }

    fn brute_force(grid: &Grid, row: usize, col: usize) -> u8 {
        let (rows, cols) = grid.dimensions();
        let mut count = 0;
        for r in row.saturating_sub(1)..=(row + 1).min(rows - 1) {
            for c in col.saturating_sub(1)..=(col + 1).min(cols - 1) {
                if (r, c) != (row, col) && grid.get(r, c).unwrap().is_alive() {
                    count += 1;
                }
            }
        }
        count
    }

    fn arb_grid() -> impl Strategy<Value = Grid> {
        (1usize..10, 1usize..10).prop_flat_map(|(rows, cols)| {
            prop::collection::vec(any::<bool>(), rows * cols).prop_map(move |bits| {
                let mut grid = Grid::new(rows, cols);
                for (i, alive) in bits.into_iter().enumerate() {
                    grid.set(i / cols, i % cols, Cell::from(alive)).unwrap();
                }
                grid
            })
        })
    }

    proptest! {
        #[test]
        fn prop_count_matches_clamped_neighborhood(grid in arb_grid()) {
            let (rows, cols) = grid.dimensions();
            for row in 0..rows {
                for col in 0..cols {
                    let count = count_live_neighbors(&grid, row, col).unwrap();
                    prop_assert!(count <= 8);
                    prop_assert_eq!(count, brute_force(&grid, row, col));
                }
            }
        }
    }
}
