//! Game board state: cell grid, owned fleet and attack history.

use alloc::collections::BTreeSet;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use rand::Rng;

use crate::common::{AttackResult, BoardError, ShipId};
use crate::config::{BOARD_SIZE, MAX_PLACEMENT_ATTEMPTS};
use crate::coordinate::Coordinate;
use crate::ship::{Orientation, Ship};

/// Visible state of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    Water,
    Ship,
    Hit,
    Miss,
}

/// Aggregate counters over a board's fleet and attack history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardStats {
    pub total_ships: usize,
    pub sunk_ships: usize,
    pub remaining_ships: usize,
    pub total_hits: usize,
    pub total_misses: usize,
    pub total_guesses: usize,
}

impl BoardStats {
    /// Percentage of guesses that hit, `0.0` before any guess.
    pub fn accuracy(&self) -> f64 {
        if self.total_guesses == 0 {
            return 0.0;
        }
        self.total_hits as f64 / self.total_guesses as f64 * 100.0
    }
}

/// Serializable view of a board for rendering or diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardSnapshot {
    pub size: usize,
    pub grid: Vec<Vec<Cell>>,
    pub ships: Vec<Ship>,
    pub guesses: Vec<Coordinate>,
}

pub struct Board {
    size: usize,
    grid: Vec<Cell>,
    /// Ship occupying each cell, row-major.
    owners: Vec<Option<ShipId>>,
    ships: Vec<Ship>,
    guesses: BTreeSet<Coordinate>,
}

impl Board {
    /// Create an empty `size`×`size` board (no ships placed).
    pub fn new(size: usize) -> Self {
        Board {
            size,
            grid: vec![Cell::Water; size * size],
            owners: vec![None; size * size],
            ships: Vec::new(),
            guesses: BTreeSet::new(),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Immutable view of placed ships, indexed by [`ShipId`].
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn ship(&self, id: ShipId) -> Option<&Ship> {
        self.ships.get(id.0)
    }

    /// Coordinates attacked so far.
    pub fn guesses(&self) -> &BTreeSet<Coordinate> {
        &self.guesses
    }

    pub fn has_been_guessed(&self, coord: Coordinate) -> bool {
        self.guesses.contains(&coord)
    }

    fn index(&self, coord: Coordinate) -> Result<usize, BoardError> {
        if coord.in_bounds(self.size) {
            Ok(coord.row * self.size + coord.col)
        } else {
            Err(BoardError::OutOfBounds {
                row: coord.row,
                col: coord.col,
            })
        }
    }

    pub fn cell_at(&self, coord: Coordinate) -> Result<Cell, BoardError> {
        Ok(self.grid[self.index(coord)?])
    }

    /// Place a ship. Either every location is accepted or the board is left untouched.
    ///
    /// With `reveal` the ship's cells are drawn on the grid; boards whose
    /// fleet must stay hidden from the viewer keep them as water. Hits
    /// recorded on `ship` beforehand are cleared.
    pub fn place_ship(&mut self, mut ship: Ship, reveal: bool) -> Result<ShipId, BoardError> {
        let locations = ship.locations();
        for (i, &loc) in locations.iter().enumerate() {
            let idx = self.index(loc).map_err(|_| BoardError::ShipOutOfBounds)?;
            if self.owners[idx].is_some() || locations[..i].contains(&loc) {
                return Err(BoardError::ShipOverlaps);
            }
        }

        ship.reset();
        let id = ShipId(self.ships.len());
        for &loc in ship.locations() {
            let idx = loc.row * self.size + loc.col;
            self.owners[idx] = Some(id);
            if reveal {
                self.grid[idx] = Cell::Ship;
            }
        }
        log::debug!("placed ship {:?} as {:?}", ship, id);
        self.ships.push(ship);
        Ok(id)
    }

    /// Randomly place up to `count` straight ships of `length` cells.
    ///
    /// Gives up after [`MAX_PLACEMENT_ATTEMPTS`] tries and returns the number
    /// of ships actually placed; comparing it with `count` is the caller's job.
    pub fn place_ships_randomly<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        count: usize,
        length: usize,
        reveal: bool,
    ) -> usize {
        if length == 0 || length > self.size {
            log::warn!(
                "ships of length {} cannot be placed on a {}x{} board",
                length,
                self.size,
                self.size
            );
            return 0;
        }

        let mut placed = 0;
        let mut attempts = 0;
        while placed < count && attempts < MAX_PLACEMENT_ATTEMPTS {
            attempts += 1;
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_r, max_c) = match orientation {
                Orientation::Horizontal => (self.size - 1, self.size - length),
                Orientation::Vertical => (self.size - length, self.size - 1),
            };
            let start = Coordinate::new(rng.random_range(0..=max_r), rng.random_range(0..=max_c));
            let ship = Ship::create(start, length, orientation);
            if self.place_ship(ship, reveal).is_ok() {
                placed += 1;
            }
        }

        if placed < count {
            log::warn!(
                "placed only {} of {} ships after {} attempts",
                placed,
                count,
                attempts
            );
        }
        placed
    }

    /// Resolve an attack at `coord`, marking hits/misses and reporting result.
    pub fn process_attack(&mut self, coord: Coordinate) -> Result<AttackResult, BoardError> {
        let idx = self.index(coord)?;
        // prevent duplicates
        if self.guesses.contains(&coord) {
            return Err(BoardError::AlreadyGuessed);
        }

        let Some(id) = self.owners[idx] else {
            self.guesses.insert(coord);
            self.grid[idx] = Cell::Miss;
            log::trace!("attack at {} missed", coord);
            return Ok(AttackResult::miss());
        };

        let ship = &mut self.ships[id.0];
        if !ship.hit(coord) {
            log::error!("ship cell {} resolved twice without a recorded guess", coord);
            return Err(BoardError::CellAlreadyHit {
                row: coord.row,
                col: coord.col,
            });
        }
        let sunk = ship.is_sunk();
        self.guesses.insert(coord);
        self.grid[idx] = Cell::Hit;
        log::trace!("attack at {} hit {:?} (sunk: {})", coord, id, sunk);
        Ok(AttackResult::hit(id, sunk))
    }

    /// Number of ships that are still afloat.
    pub fn remaining_ship_count(&self) -> usize {
        self.ships.iter().filter(|s| !s.is_sunk()).count()
    }

    /// Returns `true` when all ships are sunk. A board without ships is never sunk.
    pub fn all_ships_sunk(&self) -> bool {
        !self.ships.is_empty() && self.ships.iter().all(Ship::is_sunk)
    }

    /// Copy of the grid, one `Vec` per row.
    pub fn grid_copy(&self) -> Vec<Vec<Cell>> {
        if self.size == 0 {
            return Vec::new();
        }
        self.grid.chunks(self.size).map(|row| row.to_vec()).collect()
    }

    pub fn stats(&self) -> BoardStats {
        let total_ships = self.ships.len();
        let sunk_ships = self.ships.iter().filter(|s| s.is_sunk()).count();
        let total_hits = self.ships.iter().map(Ship::hit_count).sum();
        let total_guesses = self.guesses.len();
        BoardStats {
            total_ships,
            sunk_ships,
            remaining_ships: total_ships - sunk_ships,
            total_hits,
            total_misses: total_guesses.saturating_sub(total_hits),
            total_guesses,
        }
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            size: self.size,
            grid: self.grid_copy(),
            ships: self.ships.clone(),
            guesses: self.guesses.iter().copied().collect(),
        }
    }

    /// Remove all ships and attacks.
    pub fn reset(&mut self) {
        *self = Board::new(self.size);
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new(BOARD_SIZE)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Board {{ size: {}, ships: {:?}, guesses: {} }}",
            self.size,
            self.ships,
            self.guesses.len()
        )
    }
}
