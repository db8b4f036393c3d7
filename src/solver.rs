//! This module contains the logic for solving Sudoku grids.
//!
//! Most importantly, this module contains the definition of [solve], which
//! completes a [Grid] in place by exhaustive backtracking, as well as the
//! constraint check [can_place] on which the search relies. The engine is
//! deterministic: cells are visited in row-major order and digits are tried
//! in ascending order, so a grid admitting multiple completions always
//! yields the same one.

use crate::Grid;

/// Indicates whether the given digit can be placed in the cell at the
/// specified position without duplicating a digit in the cell's row, column,
/// or 3x3 block. The target cell itself is excluded from all three scans, so
/// only the other cells of each group are compared.
///
/// This function does *not* check whether the target cell is currently
/// empty, nor whether `digit` is actually a valid digit (i.e. in the
/// interval `[1, 9]` - other values can never be contained in a grid, so
/// `true` is returned for them). It performs no mutation.
///
/// # Arguments
///
/// * `grid`: The grid into which the placement is probed.
/// * `column`: The column (x-coordinate) of the target cell. Must be in the
/// range `[0, 9[`.
/// * `row`: The row (y-coordinate) of the target cell. Must be in the range
/// `[0, 9[`.
/// * `digit`: The candidate digit.
///
/// # Example
///
/// ```
/// use sudoku_engine::Grid;
/// use sudoku_engine::solver;
///
/// let mut grid = Grid::new();
/// grid.set_cell(0, 0, 5).unwrap();
///
/// // 5 is already taken in row 0, but 6 is fine.
/// assert!(!solver::can_place(&grid, 8, 0, 5));
/// assert!(solver::can_place(&grid, 8, 0, 6));
/// ```
pub fn can_place(grid: &Grid, column: usize, row: usize, digit: u8) -> bool {
    for other_column in 0..Grid::SIZE {
        if other_column != column &&
                grid.has_digit(other_column, row, digit).unwrap() {
            return false;
        }
    }

    for other_row in 0..Grid::SIZE {
        if other_row != row &&
                grid.has_digit(column, other_row, digit).unwrap() {
            return false;
        }
    }

    let start_column = column - column % Grid::BLOCK_SIZE;
    let start_row = row - row % Grid::BLOCK_SIZE;

    for other_row in start_row..(start_row + Grid::BLOCK_SIZE) {
        for other_column in start_column..(start_column + Grid::BLOCK_SIZE) {
            if (other_column, other_row) != (column, row) &&
                    grid.has_digit(other_column, other_row, digit).unwrap() {
                return false;
            }
        }
    }

    true
}

fn first_empty_cell(grid: &Grid) -> Option<(usize, usize)> {
    for row in 0..Grid::SIZE {
        for column in 0..Grid::SIZE {
            if grid.get_cell(column, row).unwrap().is_none() {
                return Some((column, row));
            }
        }
    }

    None
}

/// Solves the given grid in place by recursively testing all digits that
/// [can_place] admits for each empty cell. Empty cells are visited in
/// row-major order and digits are tried in ascending order, which makes the
/// search deterministic: for grids with more than one completion, the
/// lexicographically first one under this traversal is always found.
///
/// Returns `true` if a complete, consistent filling was found, in which case
/// the grid holds that filling. Returns `false` if no completion exists, in
/// which case every cell that was tentatively filled during the search has
/// been reset to empty, leaving the grid exactly as it was passed in. A grid
/// without empty cells is reported as solved immediately and is never
/// mutated, so solving an already-solved grid is a cheap no-op.
///
/// The grid is mutated destructively; a caller that needs the unsolved
/// original afterwards must clone it first or use [solve_copy].
///
/// The digits already placed in the grid are assumed to be mutually
/// consistent. For an inconsistent grid (see
/// [Grid::is_consistent](crate::Grid::is_consistent)) this function still
/// terminates and does not panic, but its result is unspecified.
pub fn solve(grid: &mut Grid) -> bool {
    let (column, row) = match first_empty_cell(grid) {
        Some(coordinates) => coordinates,
        None => return true
    };

    for digit in 1..=9 {
        if can_place(grid, column, row, digit) {
            grid.set_cell(column, row, digit).unwrap();

            if solve(grid) {
                return true;
            }

            grid.clear_cell(column, row).unwrap();
        }
    }

    false
}

/// Solves the given grid without mutating it. The grid is cloned, the clone
/// is solved with [solve], and the completed grid is returned if a solution
/// was found. If no completion exists, `None` is returned. This is the
/// convenient entry point for callers that need to report the original grid
/// alongside its solution.
pub fn solve_copy(grid: &Grid) -> Option<Grid> {
    let mut clone = grid.clone();

    if solve(&mut clone) {
        Some(clone)
    }
    else {
        None
    }
}
