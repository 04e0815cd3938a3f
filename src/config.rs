//! Game configuration: board dimensions and fleet composition.

use crate::common::ConfigError;

pub const BOARD_SIZE: usize = 10;
pub const SHIP_COUNT: usize = 3;
pub const SHIP_LENGTH: usize = 3;

/// Upper bound on random placement tries for a whole fleet.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1000;

/// Upper bound on rejection samples before hunt mode falls back to a scan.
pub const MAX_HUNT_SAMPLES: usize = 1000;

/// Largest board whose coordinates fit the two-digit `"rc"` encoding.
pub const MAX_COMPACT_BOARD_SIZE: usize = 10;

/// Setup parameters for one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    pub board_size: usize,
    pub ship_count: usize,
    pub ship_length: usize,
}

impl GameConfig {
    pub const fn new(board_size: usize, ship_count: usize, ship_length: usize) -> Self {
        Self {
            board_size,
            ship_count,
            ship_length,
        }
    }

    /// Check that the requested fleet can possibly fit on the board.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 {
            return Err(ConfigError::EmptyBoard);
        }
        if self.ship_count == 0 {
            return Err(ConfigError::NoShips);
        }
        if self.ship_length == 0 {
            return Err(ConfigError::EmptyShip);
        }
        if self.ship_length > self.board_size {
            return Err(ConfigError::ShipTooLong {
                length: self.ship_length,
                board_size: self.board_size,
            });
        }
        let cells = self.ship_count.saturating_mul(self.ship_length);
        if cells > self.board_size * self.board_size {
            return Err(ConfigError::FleetTooLarge {
                cells,
                capacity: self.board_size * self.board_size,
            });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(BOARD_SIZE, SHIP_COUNT, SHIP_LENGTH)
    }
}
