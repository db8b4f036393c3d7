// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

//! This crate implements the core of a Sudoku solving service: structural
//! validation of untrusted 9x9 grids and a backtracking solver that completes
//! them. It supports the following key features:
//!
//! * Validating raw numeric input of unknown provenance before it touches the
//! solver
//! * Parsing and printing 9x9 Sudoku grids
//! * Solving grids using an exhaustive, deterministic backtracking algorithm
//! * Serializing and deserializing grids in the nested-numeric-array form
//! exchanged with external callers
//!
//! # Validating untrusted input
//!
//! A grid arrives from the outside world as rows of plain numbers, where 0
//! denotes an empty cell and 1 to 9 denote placed digits. [Grid::from_rows]
//! checks the shape and the cell range and reports the first violation it
//! encounters in row-major order.
//!
//! ```
//! use sudoku_engine::Grid;
//!
//! let mut rows = vec![vec![0i64; 9]; 9];
//! rows[4][7] = 17;
//!
//! let error = Grid::from_rows(&rows).unwrap_err();
//! assert_eq!(
//!     "cell (7, 4) must contain a value between 0 and 9, but contains 17",
//!     error.to_string());
//! ```
//!
//! Note that structural validation deliberately does *not* check whether the
//! pre-placed digits conflict with each other. A grid with, say, two 5s in
//! one row passes [Grid::from_rows]; callers that want to reject such input
//! before solving can use [Grid::is_consistent].
//!
//! # Parsing and printing grids
//!
//! See [Grid::parse] for the exact format of a grid code. Codes can be used
//! to exchange grids in a compact form, while the `Display` implementation
//! renders a grid for human consumption.
//!
//! ```
//! use sudoku_engine::Grid;
//!
//! let grid = Grid::parse("\
//!     5,3, , ,7, , , , ,\
//!     6, , ,1,9,5, , , ,\
//!      ,9,8, , , , ,6, ,\
//!     8, , , ,6, , , ,3,\
//!     4, , ,8, ,3, , ,1,\
//!     7, , , ,2, , , ,6,\
//!      ,6, , , , ,2,8, ,\
//!      , , ,4,1,9, , ,5,\
//!      , , , ,8, , ,7,9").unwrap();
//! println!("{}", grid);
//! ```
//!
//! # Solving
//!
//! The [solver] module contains the search engine. [solver::solve] mutates a
//! grid in place and indicates by its return value whether a complete,
//! consistent filling was found.
//!
//! ```
//! use sudoku_engine::Grid;
//! use sudoku_engine::solver;
//!
//! let mut grid = Grid::parse("\
//!     5,3, , ,7, , , , ,\
//!     6, , ,1,9,5, , , ,\
//!      ,9,8, , , , ,6, ,\
//!     8, , , ,6, , , ,3,\
//!     4, , ,8, ,3, , ,1,\
//!     7, , , ,2, , , ,6,\
//!      ,6, , , , ,2,8, ,\
//!      , , ,4,1,9, , ,5,\
//!      , , , ,8, , ,7,9").unwrap();
//! let original = grid.clone();
//!
//! assert!(solver::solve(&mut grid));
//! assert!(grid.is_solved());
//! assert!(original.is_subset(&grid));
//! ```
//!
//! The solver consumes the grid destructively. As in the example above, a
//! caller that needs the unsolved original afterwards must clone the grid
//! before solving, or use [solver::solve_copy].

pub mod error;
pub mod solver;
pub mod util;

use error::{
    GridError,
    ParseError,
    ParseResult,
    SudokuError,
    SudokuResult
};
use util::DigitSet;

use serde::{Deserialize, Serialize};

use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};

/// A classic Sudoku grid: 9 rows of 9 cells, divided into nine 3x3 blocks.
/// Each cell may or may not be occupied by a digit from 1 to 9. Cells are
/// stored in row-major order (left-to-right, top-to-bottom).
///
/// A grid can be obtained in three ways: empty via [Grid::new], from raw
/// numeric rows via [Grid::from_rows] (which performs structural
/// validation), or from a compact code via [Grid::parse]. Grids also
/// deserialize with serde from the nested-array form used by external
/// callers, running the same structural validation, and serialize back into
/// that form with 0 for empty cells.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(into = "Vec<Vec<u8>>")]
#[serde(try_from = "Vec<Vec<i64>>")]
pub struct Grid {
    cells: [Option<u8>; 81]
}

fn to_char(cell: Option<u8>) -> char {
    if let Some(digit) = cell {
        (b'0' + digit) as char
    }
    else {
        ' '
    }
}

fn line(start: char, thick_sep: char, thin_sep: char,
        segment: impl Fn(usize) -> char, pad: char, end: char, newline: bool)
        -> String {
    let mut result = String::new();

    for x in 0..Grid::SIZE {
        if x == 0 {
            result.push(start);
        }
        else if x % Grid::BLOCK_SIZE == 0 {
            result.push(thick_sep);
        }
        else {
            result.push(thin_sep);
        }

        result.push(pad);
        result.push(segment(x));
        result.push(pad);
    }

    result.push(end);

    if newline {
        result.push('\n');
    }

    result
}

fn top_row() -> String {
    line('╔', '╦', '╤', |_| '═', '═', '╗', true)
}

fn thin_separator_line() -> String {
    line('╟', '╫', '┼', |_| '─', '─', '╢', true)
}

fn thick_separator_line() -> String {
    line('╠', '╬', '╪', |_| '═', '═', '╣', true)
}

fn bottom_row() -> String {
    line('╚', '╩', '╧', |_| '═', '═', '╝', false)
}

fn content_row(grid: &Grid, y: usize) -> String {
    line('║', '║', '│', |x| to_char(grid.get_cell(x, y).unwrap()), ' ', '║',
        true)
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let thin_separator_line = thin_separator_line();
        let thick_separator_line = thick_separator_line();

        for y in 0..Grid::SIZE {
            if y == 0 {
                f.write_str(top_row().as_str())?;
            }
            else if y % Grid::BLOCK_SIZE == 0 {
                f.write_str(thick_separator_line.as_str())?;
            }
            else {
                f.write_str(thin_separator_line.as_str())?;
            }

            f.write_str(content_row(self, y).as_str())?;
        }

        f.write_str(bottom_row().as_str())?;
        Ok(())
    }
}

fn cell_to_string(cell: &Option<u8>) -> String {
    if let Some(digit) = cell {
        digit.to_string()
    }
    else {
        String::from("")
    }
}

pub(crate) fn index(column: usize, row: usize) -> usize {
    row * Grid::SIZE + column
}

impl Grid {

    /// The number of rows and columns of a grid, which is also the number of
    /// cells in each row, column, and block.
    pub const SIZE: usize = 9;

    /// The width and height of one of the nine blocks of a grid.
    pub const BLOCK_SIZE: usize = 3;

    /// Creates a new, empty grid.
    pub fn new() -> Grid {
        Grid {
            cells: [None; 81]
        }
    }

    /// Creates a grid from raw numeric rows of unknown provenance, applying
    /// structural validation. The checks are applied fail-fast, in row-major
    /// order: first that the outer structure consists of exactly 9 rows,
    /// then for each row that it consists of exactly 9 cells, and then for
    /// each cell that its value lies in the range `[0, 9]`. The first
    /// violation encountered determines the reported error; remaining cells
    /// are not scanned.
    ///
    /// A value of 0 denotes an empty cell, values 1 to 9 denote placed
    /// digits. The input is not mutated.
    ///
    /// Mutual consistency of the pre-placed digits is *not* checked here;
    /// see [Grid::is_consistent].
    ///
    /// # Errors
    ///
    /// Any variant of [GridError], identifying the first offending row or
    /// cell (see that documentation).
    pub fn from_rows(rows: &[Vec<i64>]) -> Result<Grid, GridError> {
        if rows.len() != Grid::SIZE {
            return Err(GridError::WrongRowCount(rows.len()));
        }

        let mut grid = Grid::new();

        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != Grid::SIZE {
                return Err(GridError::WrongRowLength {
                    row,
                    length: cells.len()
                });
            }

            for (column, &value) in cells.iter().enumerate() {
                if value < 0 || value > 9 {
                    return Err(GridError::CellOutOfRange {
                        column,
                        row,
                        value
                    });
                }

                if value > 0 {
                    grid.cells[index(column, row)] = Some(value as u8);
                }
            }
        }

        Ok(grid)
    }

    /// Converts this grid into raw numeric rows, the inverse of
    /// [Grid::from_rows]. Empty cells are rendered as 0. This is the form in
    /// which grids are exchanged with external callers.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..Grid::SIZE)
            .map(|row| (0..Grid::SIZE)
                .map(|column| self.cells[index(column, row)].unwrap_or(0))
                .collect())
            .collect()
    }

    /// Parses a code encoding a grid. The code is a comma-separated list of
    /// 81 entries, which are assigned left-to-right, top-to-bottom, where
    /// each row is completed before the next one is started. An entry is
    /// either empty, a 0 (both denoting an empty cell), or a digit from 1 to
    /// 9. Whitespace in the entries is ignored to allow for more intuitive
    /// formatting.
    ///
    /// As an example, the code
    /// `1, ,2, , ,3, ,4, , , ,3, ,1, ,2,...` (with 81 entries in total)
    /// places a 1 in the top-left cell, a 2 in the third cell of the top
    /// row, and so on.
    ///
    /// # Errors
    ///
    /// Any variant of [ParseError] (see that documentation).
    pub fn parse(code: &str) -> ParseResult<Grid> {
        let entries: Vec<&str> = code.split(',').collect();

        if entries.len() != Grid::SIZE * Grid::SIZE {
            return Err(ParseError::WrongNumberOfCells);
        }

        let mut grid = Grid::new();

        for (i, entry) in entries.iter().enumerate() {
            let entry = entry.trim();

            if entry.is_empty() {
                continue;
            }

            let digit = entry.parse::<u8>()?;

            if digit > 9 {
                return Err(ParseError::InvalidDigit);
            }

            if digit > 0 {
                grid.cells[i] = Some(digit);
            }
        }

        Ok(grid)
    }

    /// Converts the grid into a `String` in a way that is consistent with
    /// [Grid::parse]. That is, a grid that is converted to a string and
    /// parsed again will not change, as is illustrated below.
    ///
    /// ```
    /// use sudoku_engine::Grid;
    ///
    /// let mut grid = Grid::new();
    ///
    /// // Just some arbitrary changes to create some content.
    /// grid.set_cell(1, 1, 4).unwrap();
    /// grid.set_cell(1, 2, 5).unwrap();
    ///
    /// let grid_str = grid.to_parseable_string();
    /// let grid_parsed = Grid::parse(grid_str.as_str()).unwrap();
    /// assert_eq!(grid, grid_parsed);
    /// ```
    pub fn to_parseable_string(&self) -> String {
        self.cells.iter()
            .map(cell_to_string)
            .collect::<Vec<String>>()
            .join(",")
    }

    /// Gets the content of the cell at the specified position.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the desired cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the desired cell. Must be in the
    /// range `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn get_cell(&self, column: usize, row: usize)
            -> SudokuResult<Option<u8>> {
        if column >= Grid::SIZE || row >= Grid::SIZE {
            Err(SudokuError::OutOfBounds)
        }
        else {
            Ok(self.cells[index(column, row)])
        }
    }

    /// Indicates whether the cell at the specified position holds the given
    /// digit. This will return `false` if there is a different digit in that
    /// cell or it is empty.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the checked cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the checked cell. Must be in the
    /// range `[0, 9[`.
    /// * `digit`: The digit to check whether it is in the specified cell. If
    /// it is *not* in the range `[1, 9]`, `false` will always be returned.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn has_digit(&self, column: usize, row: usize, digit: u8)
            -> SudokuResult<bool> {
        if let Some(content) = self.get_cell(column, row)? {
            Ok(digit == content)
        }
        else {
            Ok(false)
        }
    }

    /// Sets the content of the cell at the specified position to the given
    /// digit. If the cell was not empty, the old digit will be overwritten.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the assigned cell. Must be
    /// in the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the assigned cell. Must be in the
    /// range `[0, 9[`.
    /// * `digit`: The digit to assign to the specified cell. Must be in the
    /// range `[1, 9]`.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If either `column` or `row` are not in
    /// the specified range.
    /// * `SudokuError::InvalidDigit` If `digit` is not in the specified
    /// range.
    pub fn set_cell(&mut self, column: usize, row: usize, digit: u8)
            -> SudokuResult<()> {
        if column >= Grid::SIZE || row >= Grid::SIZE {
            return Err(SudokuError::OutOfBounds);
        }

        if digit == 0 || digit > 9 {
            return Err(SudokuError::InvalidDigit);
        }

        self.cells[index(column, row)] = Some(digit);
        Ok(())
    }

    /// Clears the content of the cell at the specified position, that is, if
    /// it contains a digit, that digit is removed. If the cell is already
    /// empty, it will be left that way.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the cleared cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the cleared cell. Must be in the
    /// range `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn clear_cell(&mut self, column: usize, row: usize)
            -> SudokuResult<()> {
        if column >= Grid::SIZE || row >= Grid::SIZE {
            return Err(SudokuError::OutOfBounds);
        }

        self.cells[index(column, row)] = None;
        Ok(())
    }

    /// Gets a reference to the array which holds the cells. They are in
    /// left-to-right, top-to-bottom order, where rows are together.
    pub fn cells(&self) -> &[Option<u8>; 81] {
        &self.cells
    }

    /// Counts the number of clues given by this grid. This is the number of
    /// non-empty cells.
    pub fn count_clues(&self) -> usize {
        self.cells.iter()
            .filter(|cell| cell.is_some())
            .count()
    }

    /// Indicates whether this grid is full, i.e. every cell is filled with a
    /// digit. In this case, [Grid::count_clues] returns 81.
    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(|c| c == &None)
    }

    /// Indicates whether this grid is empty, i.e. no cell is filled with a
    /// digit. In this case, [Grid::count_clues] returns 0.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c == &None)
    }

    /// Indicates whether this grid configuration is a subset of another one.
    /// That is, all cells filled in this grid with some digit must be filled
    /// in `other` with the same digit. If this condition is met, `true` is
    /// returned, and `false` otherwise.
    pub fn is_subset(&self, other: &Grid) -> bool {
        self.cells.iter()
            .zip(other.cells.iter())
            .all(|(self_cell, other_cell)| {
                match self_cell {
                    Some(digit) => other_cell == &Some(*digit),
                    None => true
                }
            })
    }

    /// Indicates whether this grid configuration is a superset of another
    /// one. That is, all cells filled in the `other` grid with some digit
    /// must be filled in this one with the same digit. If this condition is
    /// met, `true` is returned, and `false` otherwise.
    pub fn is_superset(&self, other: &Grid) -> bool {
        other.is_subset(self)
    }

    /// Indicates whether the digits currently placed in this grid are
    /// mutually consistent under classic Sudoku rules, that is, no row,
    /// column, or block contains the same digit more than once. Empty cells
    /// are ignored, so a partially filled grid can be consistent.
    ///
    /// Structural validation ([Grid::from_rows]) deliberately does not apply
    /// this check, matching the behavior callers of this engine historically
    /// relied upon. The outcome of [solver::solve](crate::solver::solve) on
    /// an inconsistent grid is unspecified, so callers that cannot trust
    /// their input may want to reject grids for which this method returns
    /// `false` before solving.
    pub fn is_consistent(&self) -> bool {
        for row in 0..Grid::SIZE {
            let mut seen = DigitSet::new();

            for column in 0..Grid::SIZE {
                if let Some(digit) = self.get_cell(column, row).unwrap() {
                    if !seen.insert(digit).unwrap() {
                        return false;
                    }
                }
            }
        }

        for column in 0..Grid::SIZE {
            let mut seen = DigitSet::new();

            for row in 0..Grid::SIZE {
                if let Some(digit) = self.get_cell(column, row).unwrap() {
                    if !seen.insert(digit).unwrap() {
                        return false;
                    }
                }
            }
        }

        for block_y in 0..Grid::BLOCK_SIZE {
            for block_x in 0..Grid::BLOCK_SIZE {
                let mut seen = DigitSet::new();
                let start_column = block_x * Grid::BLOCK_SIZE;
                let start_row = block_y * Grid::BLOCK_SIZE;

                for row in start_row..(start_row + Grid::BLOCK_SIZE) {
                    for column in
                            start_column..(start_column + Grid::BLOCK_SIZE) {
                        if let Some(digit) =
                                self.get_cell(column, row).unwrap() {
                            if !seen.insert(digit).unwrap() {
                                return false;
                            }
                        }
                    }
                }
            }
        }

        true
    }

    /// Indicates whether this grid is a complete solution, that is, it is
    /// full ([Grid::is_full]) and consistent ([Grid::is_consistent]).
    pub fn is_solved(&self) -> bool {
        self.is_full() && self.is_consistent()
    }
}

impl Default for Grid {
    fn default() -> Grid {
        Grid::new()
    }
}

impl From<Grid> for Vec<Vec<u8>> {
    fn from(grid: Grid) -> Vec<Vec<u8>> {
        grid.to_rows()
    }
}

impl TryFrom<Vec<Vec<i64>>> for Grid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<i64>>) -> Result<Grid, GridError> {
        Grid::from_rows(&rows)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn parse_ok() {
        let grid_res = Grid::parse("\
            5,3, , ,7, , , , ,\
            6, , ,1,9,5, , , ,\
             ,9,8, , , , ,6, ,\
            8, , , ,6, , , ,3,\
            4, , ,8, ,3, , ,1,\
            7, , , ,2, , , ,6,\
             ,6, , , , ,2,8, ,\
             , , ,4,1,9, , ,5,\
             , , , ,8, , ,7,9");

        if let Ok(grid) = grid_res {
            assert_eq!(Some(5), grid.get_cell(0, 0).unwrap());
            assert_eq!(Some(3), grid.get_cell(1, 0).unwrap());
            assert_eq!(None, grid.get_cell(2, 0).unwrap());
            assert_eq!(Some(7), grid.get_cell(4, 0).unwrap());
            assert_eq!(Some(1), grid.get_cell(3, 1).unwrap());
            assert_eq!(Some(9), grid.get_cell(1, 2).unwrap());
            assert_eq!(Some(8), grid.get_cell(0, 3).unwrap());
            assert_eq!(None, grid.get_cell(8, 6).unwrap());
            assert_eq!(Some(9), grid.get_cell(8, 8).unwrap());
            assert_eq!(30, grid.count_clues());
        }
        else {
            panic!("Parsing valid grid failed.");
        }
    }

    #[test]
    fn parse_zero_entries_are_empty() {
        let code = vec!["0"; 81].join(",");
        let with_zeros = Grid::parse(code.as_str()).unwrap();
        assert!(with_zeros.is_empty());
    }

    #[test]
    fn parse_wrong_number_of_cells() {
        assert_eq!(Err(ParseError::WrongNumberOfCells),
            Grid::parse("1,2,3"));

        let too_many = vec![""; 82].join(",");
        assert_eq!(Err(ParseError::WrongNumberOfCells),
            Grid::parse(too_many.as_str()));
    }

    #[test]
    fn parse_number_format_error() {
        let mut entries = vec![""; 81];
        entries[13] = "#";
        let code = entries.join(",");
        assert_eq!(Err(ParseError::NumberFormatError),
            Grid::parse(code.as_str()));
    }

    #[test]
    fn parse_invalid_digit() {
        let mut entries = vec![""; 81];
        entries[40] = "12";
        let code = entries.join(",");
        assert_eq!(Err(ParseError::InvalidDigit),
            Grid::parse(code.as_str()));
    }

    #[test]
    fn to_parseable_string() {
        let mut grid = Grid::new();

        assert_eq!(vec![""; 81].join(","), grid.to_parseable_string());

        grid.set_cell(0, 0, 1).unwrap();
        grid.set_cell(1, 1, 2).unwrap();
        grid.set_cell(8, 8, 9).unwrap();

        let reparsed = Grid::parse(grid.to_parseable_string().as_str())
            .unwrap();
        assert_eq!(grid, reparsed);
    }

    fn example_rows() -> Vec<Vec<i64>> {
        let mut rows = vec![vec![0i64; 9]; 9];
        rows[0][0] = 5;
        rows[2][7] = 6;
        rows[8][8] = 9;
        rows
    }

    #[test]
    fn from_rows_ok() {
        let grid = Grid::from_rows(&example_rows()).unwrap();

        assert_eq!(Some(5), grid.get_cell(0, 0).unwrap());
        assert_eq!(Some(6), grid.get_cell(7, 2).unwrap());
        assert_eq!(Some(9), grid.get_cell(8, 8).unwrap());
        assert_eq!(3, grid.count_clues());
    }

    #[test]
    fn from_rows_does_not_mutate_input() {
        let rows = example_rows();
        let rows_before = rows.clone();
        Grid::from_rows(&rows).unwrap();
        assert_eq!(rows_before, rows);
    }

    #[test]
    fn from_rows_wrong_row_count() {
        let rows = vec![vec![0i64; 9]; 8];
        let error = Grid::from_rows(&rows).unwrap_err();

        assert_eq!(GridError::WrongRowCount(8), error);
        assert_eq!("grid must have 9 rows, but has 8", error.to_string());
    }

    #[test]
    fn from_rows_wrong_row_length() {
        let mut rows = vec![vec![0i64; 9]; 9];
        rows[3] = vec![0i64; 10];
        let error = Grid::from_rows(&rows).unwrap_err();

        assert_eq!(GridError::WrongRowLength { row: 3, length: 10 }, error);
        assert_eq!("row 3 must have 9 cells, but has 10", error.to_string());
    }

    #[test]
    fn from_rows_cell_out_of_range() {
        let mut rows = vec![vec![0i64; 9]; 9];
        rows[4][7] = 17;

        assert_eq!(
            Err(GridError::CellOutOfRange { column: 7, row: 4, value: 17 }),
            Grid::from_rows(&rows));

        let mut rows = vec![vec![0i64; 9]; 9];
        rows[1][2] = -1;

        assert_eq!(
            Err(GridError::CellOutOfRange { column: 2, row: 1, value: -1 }),
            Grid::from_rows(&rows));
    }

    #[test]
    fn from_rows_reports_first_violation_in_row_major_order() {
        let mut rows = vec![vec![0i64; 9]; 9];
        rows[2][5] = -3;
        rows[7][1] = 12;

        assert_eq!(
            Err(GridError::CellOutOfRange { column: 5, row: 2, value: -3 }),
            Grid::from_rows(&rows));
    }

    #[test]
    fn cell_accessor_errors() {
        let mut grid = Grid::new();

        assert_eq!(Err(SudokuError::OutOfBounds), grid.get_cell(9, 0));
        assert_eq!(Err(SudokuError::OutOfBounds), grid.get_cell(0, 9));
        assert_eq!(Err(SudokuError::OutOfBounds), grid.set_cell(9, 3, 1));
        assert_eq!(Err(SudokuError::OutOfBounds), grid.clear_cell(3, 9));
        assert_eq!(Err(SudokuError::InvalidDigit), grid.set_cell(0, 0, 0));
        assert_eq!(Err(SudokuError::InvalidDigit), grid.set_cell(0, 0, 10));
    }

    #[test]
    fn cell_manipulation() {
        let mut grid = Grid::new();

        grid.set_cell(2, 5, 7).unwrap();
        assert_eq!(Some(7), grid.get_cell(2, 5).unwrap());
        assert!(grid.has_digit(2, 5, 7).unwrap());
        assert!(!grid.has_digit(2, 5, 6).unwrap());
        assert!(!grid.has_digit(5, 2, 7).unwrap());

        grid.set_cell(2, 5, 3).unwrap();
        assert_eq!(Some(3), grid.get_cell(2, 5).unwrap());

        grid.clear_cell(2, 5).unwrap();
        assert_eq!(None, grid.get_cell(2, 5).unwrap());
    }

    fn full_consistent_grid() -> Grid {
        Grid::parse("\
            5,3,4,6,7,8,9,1,2,\
            6,7,2,1,9,5,3,4,8,\
            1,9,8,3,4,2,5,6,7,\
            8,5,9,7,6,1,4,2,3,\
            4,2,6,8,5,3,7,9,1,\
            7,1,3,9,2,4,8,5,6,\
            9,6,1,5,3,7,2,8,4,\
            2,8,7,4,1,9,6,3,5,\
            3,4,5,2,8,6,1,7,9").unwrap()
    }

    #[test]
    fn count_clues_and_empty_and_full() {
        let empty = Grid::new();
        let mut partial = Grid::new();
        partial.set_cell(0, 0, 1).unwrap();
        partial.set_cell(4, 4, 5).unwrap();
        let full = full_consistent_grid();

        assert_eq!(0, empty.count_clues());
        assert_eq!(2, partial.count_clues());
        assert_eq!(81, full.count_clues());

        assert!(empty.is_empty());
        assert!(!partial.is_empty());
        assert!(!full.is_empty());

        assert!(!empty.is_full());
        assert!(!partial.is_full());
        assert!(full.is_full());
    }

    fn assert_subset_relation(a: &Grid, b: &Grid, a_subset_b: bool,
            b_subset_a: bool) {
        assert!(a.is_subset(b) == a_subset_b);
        assert!(a.is_superset(b) == b_subset_a);
        assert!(b.is_subset(a) == b_subset_a);
        assert!(b.is_superset(a) == a_subset_b);
    }

    #[test]
    fn empty_is_subset() {
        let empty = Grid::new();
        let mut non_empty = Grid::new();
        non_empty.set_cell(0, 0, 1).unwrap();
        let full = full_consistent_grid();

        assert_subset_relation(&empty, &empty, true, true);
        assert_subset_relation(&empty, &non_empty, true, false);
        assert_subset_relation(&empty, &full, true, false);
    }

    #[test]
    fn true_subset() {
        let mut g1 = Grid::new();
        g1.set_cell(0, 0, 1).unwrap();
        g1.set_cell(4, 2, 3).unwrap();
        let mut g2 = g1.clone();
        g2.set_cell(8, 8, 9).unwrap();

        assert_subset_relation(&g1, &g2, true, false);
    }

    #[test]
    fn unrelated_grids_not_subsets() {
        // g1 and g2 differ in the digit placed at (4, 2)
        let mut g1 = Grid::new();
        g1.set_cell(0, 0, 1).unwrap();
        g1.set_cell(4, 2, 3).unwrap();
        let mut g2 = g1.clone();
        g2.set_cell(4, 2, 4).unwrap();

        assert_subset_relation(&g1, &g2, false, false);
    }

    #[test]
    fn consistent_grids() {
        assert!(Grid::new().is_consistent());
        assert!(full_consistent_grid().is_consistent());

        let mut partial = Grid::new();
        partial.set_cell(0, 0, 5).unwrap();
        partial.set_cell(8, 0, 3).unwrap();
        partial.set_cell(0, 8, 2).unwrap();
        partial.set_cell(4, 4, 5).unwrap();
        assert!(partial.is_consistent());
    }

    #[test]
    fn row_duplicate_is_inconsistent() {
        let mut grid = Grid::new();
        grid.set_cell(1, 3, 5).unwrap();
        grid.set_cell(7, 3, 5).unwrap();
        assert!(!grid.is_consistent());
    }

    #[test]
    fn column_duplicate_is_inconsistent() {
        let mut grid = Grid::new();
        grid.set_cell(4, 0, 8).unwrap();
        grid.set_cell(4, 6, 8).unwrap();
        assert!(!grid.is_consistent());
    }

    #[test]
    fn block_duplicate_is_inconsistent() {
        // same block, but different row and column
        let mut grid = Grid::new();
        grid.set_cell(0, 0, 5).unwrap();
        grid.set_cell(1, 1, 5).unwrap();
        assert!(!grid.is_consistent());
    }

    #[test]
    fn solved_grid_detection() {
        let full = full_consistent_grid();
        assert!(full.is_solved());

        let mut partial = full.clone();
        partial.clear_cell(4, 4).unwrap();
        assert!(!partial.is_solved());

        let mut conflicting = full.clone();
        conflicting.set_cell(0, 0, 3).unwrap();
        assert!(!conflicting.is_solved());
    }

    #[test]
    fn serialize_to_nested_arrays() {
        let grid = Grid::from_rows(&example_rows()).unwrap();
        let json = serde_json::to_value(&grid).unwrap();
        let expected = serde_json::to_value(grid.to_rows()).unwrap();

        assert_eq!(expected, json);
        assert_eq!(5, json[0][0]);
        assert_eq!(0, json[0][1]);
        assert_eq!(9, json[8][8]);
    }

    #[test]
    fn deserialize_runs_validation() {
        let grid: Grid = serde_json::from_value(
            serde_json::to_value(example_rows()).unwrap()).unwrap();
        assert_eq!(Grid::from_rows(&example_rows()).unwrap(), grid);

        let too_few_rows = serde_json::to_value(vec![vec![0i64; 9]; 8])
            .unwrap();
        let error = serde_json::from_value::<Grid>(too_few_rows).unwrap_err();
        assert!(error.to_string().contains("grid must have 9 rows"));
    }

    #[test]
    fn serde_roundtrip() {
        let grid = full_consistent_grid();
        let json = serde_json::to_string(&grid).unwrap();
        let deserialized: Grid = serde_json::from_str(json.as_str()).unwrap();
        assert_eq!(grid, deserialized);
    }
}
