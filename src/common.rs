//! Common types for Sea Battle: attack outcomes and error enums.

use core::fmt;

/// Index of a ship in the fleet of the board that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipId(pub usize);

/// Outcome of a resolved attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackResult {
    /// The attack landed on a ship segment.
    pub hit: bool,
    /// The attack sank the ship it hit.
    pub sunk: bool,
    /// The ship that was hit, if any.
    pub ship: Option<ShipId>,
}

impl AttackResult {
    pub const fn miss() -> Self {
        Self {
            hit: false,
            sunk: false,
            ship: None,
        }
    }

    pub const fn hit(ship: ShipId, sunk: bool) -> Self {
        Self {
            hit: true,
            sunk,
            ship: Some(ship),
        }
    }
}

/// One of the two participants of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::First => write!(f, "first"),
            Side::Second => write!(f, "second"),
        }
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate lies outside the board.
    OutOfBounds { row: usize, col: usize },
    /// Ship placement leaves the board.
    ShipOutOfBounds,
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// Guess was already made at this position.
    AlreadyGuessed,
    /// A ship cell was resolved twice even though the guess set did not know it.
    CellAlreadyHit { row: usize, col: usize },
    /// Stored ship data has a hit flag count different from its cell count.
    MalformedShip { locations: usize, hits: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds { row, col } => {
                write!(f, "Coordinate ({}, {}) is outside the board", row, col)
            }
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::AlreadyGuessed => write!(f, "Guess was already made at this position"),
            BoardError::CellAlreadyHit { row, col } => {
                write!(f, "Ship cell ({}, {}) was already hit", row, col)
            }
            BoardError::MalformedShip { locations, hits } => write!(
                f,
                "Ship has {} cells but {} hit flags",
                locations, hits
            ),
        }
    }
}

/// Reasons a raw coordinate string is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Compact boards expect exactly two characters.
    InvalidLength,
    /// Large boards expect a `row,col` pair.
    InvalidFormat,
    /// An axis is not a decimal number.
    NotANumber,
    /// An axis is outside `0..=max`.
    OutOfRange { max: usize },
    /// This side already attacked the coordinate.
    AlreadyGuessed,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidLength => {
                write!(f, "Input must be exactly two digits (e.g., 00, 34, 98)")
            }
            ValidationError::InvalidFormat => {
                write!(f, "Input must be a row and column separated by a comma (e.g., 3,11)")
            }
            ValidationError::NotANumber => write!(f, "Row and column must be numbers"),
            ValidationError::OutOfRange { max } => {
                write!(f, "Row and column must be between 0 and {}", max)
            }
            ValidationError::AlreadyGuessed => write!(f, "You already guessed that location"),
        }
    }
}

/// Failure of an attempted guess against an opponent board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    /// Input was rejected before reaching the opponent board.
    Invalid(ValidationError),
    /// The opponent board refused the attack.
    Rejected(BoardError),
}

impl From<ValidationError> for GuessError {
    fn from(err: ValidationError) -> Self {
        GuessError::Invalid(err)
    }
}

impl From<BoardError> for GuessError {
    fn from(err: BoardError) -> Self {
        GuessError::Rejected(err)
    }
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuessError::Invalid(e) => write!(f, "Invalid guess: {}", e),
            GuessError::Rejected(e) => write!(f, "Attack rejected: {}", e),
        }
    }
}

/// Errors returned when a strategy cannot produce a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Every coordinate of the board has already been guessed.
    BoardExhausted,
    /// A scripted attacker ran out of supplied moves.
    ScriptExhausted,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::BoardExhausted => write!(f, "Every coordinate has already been guessed"),
            MoveError::ScriptExhausted => write!(f, "No scripted moves left"),
        }
    }
}

/// Errors returned by [`GameConfig::validate`](crate::GameConfig::validate).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    EmptyBoard,
    NoShips,
    EmptyShip,
    ShipTooLong { length: usize, board_size: usize },
    FleetTooLarge { cells: usize, capacity: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyBoard => write!(f, "Board size must be at least 1"),
            ConfigError::NoShips => write!(f, "Fleet must contain at least one ship"),
            ConfigError::EmptyShip => write!(f, "Ship length must be at least 1"),
            ConfigError::ShipTooLong { length, board_size } => write!(
                f,
                "Ship length {} does not fit a {}x{} board",
                length, board_size, board_size
            ),
            ConfigError::FleetTooLarge { cells, capacity } => write!(
                f,
                "Fleet needs {} cells but the board only has {}",
                cells, capacity
            ),
        }
    }
}

/// Errors surfaced by the game orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    Config(ConfigError),
    /// Random placement could not fit the requested fleet.
    FleetShortfall {
        side: Side,
        placed: usize,
        requested: usize,
    },
    /// Turns were requested before `setup` completed.
    NotSetUp,
    /// The game already has a winner.
    GameOver,
    Move(MoveError),
    Guess(GuessError),
}

impl From<ConfigError> for GameError {
    fn from(err: ConfigError) -> Self {
        GameError::Config(err)
    }
}

impl From<MoveError> for GameError {
    fn from(err: MoveError) -> Self {
        GameError::Move(err)
    }
}

impl From<GuessError> for GameError {
    fn from(err: GuessError) -> Self {
        GameError::Guess(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Config(e) => write!(f, "Invalid configuration: {}", e),
            GameError::FleetShortfall {
                side,
                placed,
                requested,
            } => write!(
                f,
                "Only {} of {} ships could be placed for the {} side",
                placed, requested, side
            ),
            GameError::NotSetUp => write!(f, "Game has not been set up"),
            GameError::GameOver => write!(f, "Game is already over"),
            GameError::Move(e) => write!(f, "{}", e),
            GameError::Guess(e) => write!(f, "{}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
#[cfg(feature = "std")]
impl std::error::Error for ValidationError {}
#[cfg(feature = "std")]
impl std::error::Error for GuessError {}
#[cfg(feature = "std")]
impl std::error::Error for MoveError {}
#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
#[cfg(feature = "std")]
impl std::error::Error for GameError {}
