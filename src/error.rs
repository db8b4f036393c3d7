//! This module contains the error and result definitions used in this crate.

use std::fmt::{self, Display, Formatter};
use std::num::ParseIntError;

/// Miscellaneous errors that can occur on some methods of
/// [Grid](crate::Grid). This does not include errors raised during structural
/// validation or parsing, see [GridError] and [ParseError] for those.
#[derive(Debug, Eq, PartialEq)]
pub enum SudokuError {

    /// Indicates that the specified coordinates (column and row) lie outside
    /// the 9x9 grid. This is the case if either of them is greater than or
    /// equal to 9.
    OutOfBounds,

    /// Indicates that some digit is invalid for a grid cell. This is the case
    /// if it is less than 1 or greater than 9.
    InvalidDigit
}

impl Display for SudokuError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SudokuError::OutOfBounds =>
                write!(f, "cell coordinates lie outside the 9x9 grid"),
            SudokuError::InvalidDigit =>
                write!(f, "digit must be between 1 and 9")
        }
    }
}

/// Syntactic sugar for `Result<V, SudokuError>`.
pub type SudokuResult<V> = Result<V, SudokuError>;

/// An enumeration of the ways a raw numeric grid of unknown provenance can be
/// structurally malformed. Each variant identifies the first offending row or
/// cell in row-major order, so the rendered message can be surfaced to the
/// caller that supplied the grid.
///
/// Note that this only covers *structural* validity (shape and cell range).
/// A grid whose pre-placed digits already conflict with each other is
/// structurally valid; see [Grid::is_consistent](crate::Grid::is_consistent)
/// for that check.
#[derive(Debug, Eq, PartialEq)]
pub enum GridError {

    /// Indicates that the outer structure does not consist of exactly 9 rows.
    /// The wrapped number is the actual row count.
    WrongRowCount(usize),

    /// Indicates that a row does not consist of exactly 9 cells.
    WrongRowLength {

        /// The index of the offending row.
        row: usize,

        /// The actual number of cells in that row.
        length: usize
    },

    /// Indicates that a cell holds a value outside the permitted range
    /// `[0, 9]`, where 0 denotes an empty cell.
    CellOutOfRange {

        /// The column (x-coordinate) of the offending cell.
        column: usize,

        /// The row (y-coordinate) of the offending cell.
        row: usize,

        /// The out-of-range value found in that cell.
        value: i64
    }
}

impl Display for GridError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            GridError::WrongRowCount(count) =>
                write!(f, "grid must have 9 rows, but has {}", count),
            GridError::WrongRowLength { row, length } =>
                write!(f, "row {} must have 9 cells, but has {}", row, length),
            GridError::CellOutOfRange { column, row, value } =>
                write!(f, "cell ({}, {}) must contain a value between 0 and \
                    9, but contains {}", column, row, value)
        }
    }
}

/// An enumeration of the errors that may occur when parsing a [Grid] code
/// with [Grid::parse](crate::Grid::parse).
///
/// [Grid]: crate::Grid
#[derive(Debug, Eq, PartialEq)]
pub enum ParseError {

    /// Indicates that the number of cell entries (which are separated by
    /// commas) is not 81.
    WrongNumberOfCells,

    /// Indicates that one of the cell entries could not be parsed as a
    /// number.
    NumberFormatError,

    /// Indicates that a cell entry holds a number greater than 9.
    InvalidDigit
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::WrongNumberOfCells =>
                write!(f, "a grid code must contain exactly 81 cell entries"),
            ParseError::NumberFormatError =>
                write!(f, "a cell entry could not be parsed as a number"),
            ParseError::InvalidDigit =>
                write!(f, "a cell entry must be a digit between 0 and 9")
        }
    }
}

impl From<ParseIntError> for ParseError {
    fn from(_: ParseIntError) -> Self {
        ParseError::NumberFormatError
    }
}

/// Syntactic sugar for `Result<V, ParseError>`.
pub type ParseResult<V> = Result<V, ParseError>;
