//! Board coordinates and their textual encoding.
//!
//! Boards up to 10×10 use the compact two-digit key `"rc"` (`"34"` is row 3,
//! column 4). Larger boards cannot be encoded unambiguously that way and use
//! a comma-delimited pair instead (`"3,11"`).

use alloc::format;
use alloc::string::String;
use core::fmt;

use crate::common::ValidationError;
use crate::config::MAX_COMPACT_BOARD_SIZE;

/// A cell reference on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns `true` if the coordinate lies on an `board_size`×`board_size` board.
    pub fn in_bounds(&self, board_size: usize) -> bool {
        self.row < board_size && self.col < board_size
    }

    /// Parse a raw coordinate string for a board of `board_size`.
    ///
    /// Only checks format and range; whether the cell was already attacked is
    /// up to the caller.
    pub fn parse(raw: &str, board_size: usize) -> Result<Self, ValidationError> {
        let (row, col) = if board_size <= MAX_COMPACT_BOARD_SIZE {
            let mut chars = raw.chars();
            let (Some(r), Some(c), None) = (chars.next(), chars.next(), chars.next()) else {
                return Err(ValidationError::InvalidLength);
            };
            let row = r.to_digit(10).ok_or(ValidationError::NotANumber)? as usize;
            let col = c.to_digit(10).ok_or(ValidationError::NotANumber)? as usize;
            (row, col)
        } else {
            let (r, c) = raw.split_once(',').ok_or(ValidationError::InvalidFormat)?;
            let row = r.trim().parse::<usize>().map_err(|_| ValidationError::NotANumber)?;
            let col = c.trim().parse::<usize>().map_err(|_| ValidationError::NotANumber)?;
            (row, col)
        };
        let coord = Coordinate::new(row, col);
        if !coord.in_bounds(board_size) {
            return Err(ValidationError::OutOfRange {
                max: board_size.saturating_sub(1),
            });
        }
        Ok(coord)
    }

    /// Canonical key of this coordinate on a board of `board_size`.
    pub fn key(&self, board_size: usize) -> String {
        if board_size <= MAX_COMPACT_BOARD_SIZE {
            format!("{}{}", self.row, self.col)
        } else {
            format!("{},{}", self.row, self.col)
        }
    }

    pub fn up(&self) -> Option<Self> {
        self.row.checked_sub(1).map(|row| Coordinate::new(row, self.col))
    }

    pub fn down(&self, board_size: usize) -> Option<Self> {
        let next = Coordinate::new(self.row + 1, self.col);
        next.in_bounds(board_size).then_some(next)
    }

    pub fn left(&self) -> Option<Self> {
        self.col.checked_sub(1).map(|col| Coordinate::new(self.row, col))
    }

    pub fn right(&self, board_size: usize) -> Option<Self> {
        let next = Coordinate::new(self.row, self.col + 1);
        next.in_bounds(board_size).then_some(next)
    }

    /// In-bounds orthogonal neighbors in up, down, left, right order.
    pub fn neighbors(&self, board_size: usize) -> impl Iterator<Item = Coordinate> {
        [
            self.up(),
            self.down(board_size),
            self.left(),
            self.right(board_size),
        ]
        .into_iter()
        .flatten()
        .filter(move |c| c.in_bounds(board_size))
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, col): (usize, usize)) -> Self {
        Coordinate::new(row, col)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
