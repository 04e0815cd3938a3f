//! Ship definitions with per-cell hit tracking.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::coordinate::Coordinate;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Offset of the `i`-th cell of a run starting at `start`.
    fn step(self, start: Coordinate, i: usize) -> Coordinate {
        match self {
            Orientation::Horizontal => Coordinate::new(start.row, start.col + i),
            Orientation::Vertical => Coordinate::new(start.row + i, start.col),
        }
    }

    /// Returns `true` if `candidate` lies on the line through `anchor`.
    pub fn is_aligned(self, anchor: Coordinate, candidate: Coordinate) -> bool {
        match self {
            Orientation::Horizontal => anchor.row == candidate.row,
            Orientation::Vertical => anchor.col == candidate.col,
        }
    }
}

/// A ship: ordered locations with a parallel hit flag per location.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(try_from = "ShipRecord"))]
pub struct Ship {
    locations: Vec<Coordinate>,
    hits: Vec<bool>,
    orientation: Orientation,
}

impl Ship {
    /// Build a ship from explicit locations. No geometry checks are made.
    pub fn new(locations: Vec<Coordinate>, orientation: Orientation) -> Self {
        let hits = vec![false; locations.len()];
        Ship {
            locations,
            hits,
            orientation,
        }
    }

    /// Build a straight run of `length` cells from `start`.
    pub fn create(start: Coordinate, length: usize, orientation: Orientation) -> Self {
        let locations = (0..length).map(|i| orientation.step(start, i)).collect();
        Ship::new(locations, orientation)
    }

    /// Returns `true` if a run of `length` cells from `start` fits the board.
    pub fn is_valid_placement(
        start: Coordinate,
        length: usize,
        orientation: Orientation,
        board_size: usize,
    ) -> bool {
        match orientation {
            Orientation::Horizontal => {
                start.row < board_size && start.col + length <= board_size
            }
            Orientation::Vertical => start.col < board_size && start.row + length <= board_size,
        }
    }

    pub fn locations(&self) -> &[Coordinate] {
        &self.locations
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    fn index_of(&self, coord: Coordinate) -> Option<usize> {
        self.locations.iter().position(|&c| c == coord)
    }

    pub fn has_location(&self, coord: Coordinate) -> bool {
        self.index_of(coord).is_some()
    }

    /// Record a hit at `coord`.
    /// Returns `false` if `coord` is not part of the ship or was already hit.
    pub fn hit(&mut self, coord: Coordinate) -> bool {
        match self.index_of(coord) {
            Some(i) => match self.hits.get_mut(i) {
                Some(flag) if !*flag => {
                    *flag = true;
                    true
                }
                _ => false,
            },
            None => false,
        }
    }

    pub fn is_hit(&self, coord: Coordinate) -> bool {
        self.index_of(coord)
            .and_then(|i| self.hits.get(i).copied())
            .unwrap_or(false)
    }

    /// Check if the ship is sunk (all segments hit). A ship without cells is sunk.
    pub fn is_sunk(&self) -> bool {
        self.hits.iter().all(|&h| h)
    }

    pub fn hit_count(&self) -> usize {
        self.hits.iter().filter(|&&h| h).count()
    }

    /// Clear all recorded hits.
    pub fn reset(&mut self) {
        self.hits.iter_mut().for_each(|h| *h = false);
    }
}

/// Wire form of a [`Ship`], checked before it becomes one.
#[cfg(feature = "std")]
#[derive(serde::Deserialize)]
struct ShipRecord {
    locations: Vec<Coordinate>,
    hits: Vec<bool>,
    orientation: Orientation,
}

#[cfg(feature = "std")]
impl TryFrom<ShipRecord> for Ship {
    type Error = crate::common::BoardError;

    fn try_from(record: ShipRecord) -> Result<Self, Self::Error> {
        if record.hits.len() != record.locations.len() {
            return Err(crate::common::BoardError::MalformedShip {
                locations: record.locations.len(),
                hits: record.hits.len(),
            });
        }
        Ok(Ship {
            locations: record.locations,
            hits: record.hits,
            orientation: record.orientation,
        })
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ locations: {:?}, orientation: {:?}, hits: {}/{} }}",
            self.locations,
            self.orientation,
            self.hit_count(),
            self.len(),
        )
    }
}
