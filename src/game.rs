//! Headless two-sided game: setup, alternating turns and win detection.

use rand::{Rng, RngCore};

use crate::{
    board::Board,
    common::{AttackResult, GameError, GuessError, Side},
    config::GameConfig,
    coordinate::Coordinate,
    player::{Attacker, Strategy},
};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    FirstWon,
    SecondWon,
}

/// A single resolved attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnReport {
    pub side: Side,
    pub coord: Coordinate,
    pub result: AttackResult,
}

/// Own board and attack state of one participant.
///
/// Read-only outside the game so attacks always pass through the attacker
/// and its guess set stays in step with the opposing board.
#[derive(Debug)]
pub struct Fleet<S> {
    board: Board,
    attacker: Attacker<S>,
}

impl<S> Fleet<S> {
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn attacker(&self) -> &Attacker<S> {
        &self.attacker
    }
}

/// Turn-based game between two attackers, each firing at the other's board.
#[derive(Debug)]
pub struct Game<A, B> {
    config: GameConfig,
    first: Fleet<A>,
    second: Fleet<B>,
    to_move: Side,
    turns: usize,
    ready: bool,
}

impl<A: Strategy, B: Strategy> Game<A, B> {
    /// Create a game with empty boards; call [`Game::setup`] before playing.
    pub fn new(config: GameConfig, first: A, second: B) -> Result<Self, GameError> {
        config.validate()?;
        let size = config.board_size;
        Ok(Self {
            config,
            first: Fleet {
                board: Board::new(size),
                attacker: Attacker::new(size, first),
            },
            second: Fleet {
                board: Board::new(size),
                attacker: Attacker::new(size, second),
            },
            to_move: Side::First,
            turns: 0,
            ready: false,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn first(&self) -> &Fleet<A> {
        &self.first
    }

    pub fn second(&self) -> &Fleet<B> {
        &self.second
    }

    pub fn to_move(&self) -> Side {
        self.to_move
    }

    pub fn turns(&self) -> usize {
        self.turns
    }

    /// Place both fleets at random. The first side's board is revealed.
    pub fn setup<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        let GameConfig {
            ship_count,
            ship_length,
            ..
        } = self.config;
        for (side, board, reveal) in [
            (Side::First, &mut self.first.board, true),
            (Side::Second, &mut self.second.board, false),
        ] {
            board.reset();
            let placed = board.place_ships_randomly(&mut *rng, ship_count, ship_length, reveal);
            if placed != ship_count {
                return Err(GameError::FleetShortfall {
                    side,
                    placed,
                    requested: ship_count,
                });
            }
            log::info!("{} ships placed for the {} side", placed, side);
        }
        self.ready = true;
        Ok(())
    }

    /// Evaluate the current game status.
    pub fn status(&self) -> GameStatus {
        if self.second.board.all_ships_sunk() {
            GameStatus::FirstWon
        } else if self.first.board.all_ships_sunk() {
            GameStatus::SecondWon
        } else {
            GameStatus::InProgress
        }
    }

    fn ensure_playable(&self) -> Result<(), GameError> {
        if !self.ready {
            return Err(GameError::NotSetUp);
        }
        if self.status() != GameStatus::InProgress {
            return Err(GameError::GameOver);
        }
        Ok(())
    }

    fn finish_turn(&mut self, coord: Coordinate, result: AttackResult) -> TurnReport {
        let report = TurnReport {
            side: self.to_move,
            coord,
            result,
        };
        log::debug!(
            "{} side fired at {}: hit={} sunk={}",
            report.side,
            coord,
            result.hit,
            result.sunk
        );
        self.turns += 1;
        self.to_move = self.to_move.opponent();
        report
    }

    /// Let the side to move pick and resolve its next attack.
    pub fn play_turn(&mut self, rng: &mut dyn RngCore) -> Result<TurnReport, GameError> {
        self.ensure_playable()?;
        let (coord, result) = match self.to_move {
            Side::First => self.first.attacker.take_turn(rng, &mut self.second.board)?,
            Side::Second => self.second.attacker.take_turn(rng, &mut self.first.board)?,
        };
        Ok(self.finish_turn(coord, result))
    }

    /// Play a raw coordinate for the side to move.
    /// Invalid input does not consume the turn.
    pub fn submit(&mut self, raw: &str) -> Result<TurnReport, GameError> {
        self.ensure_playable()?;
        let (coord, result) = match self.to_move {
            Side::First => {
                let coord = self.first.attacker.validate_coordinate(raw).map_err(GuessError::from)?;
                let result = self.first.attacker.attack(coord, &mut self.second.board)?;
                self.first.attacker.record_result(coord, &result);
                (coord, result)
            }
            Side::Second => {
                let coord = self.second.attacker.validate_coordinate(raw).map_err(GuessError::from)?;
                let result = self.second.attacker.attack(coord, &mut self.first.board)?;
                self.second.attacker.record_result(coord, &result);
                (coord, result)
            }
        };
        Ok(self.finish_turn(coord, result))
    }

    /// Play turns until one fleet is sunk. Returns the final status.
    pub fn run(&mut self, rng: &mut dyn RngCore) -> Result<GameStatus, GameError> {
        while self.status() == GameStatus::InProgress {
            self.play_turn(rng)?;
        }
        Ok(self.status())
    }
}
