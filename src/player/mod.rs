//! Attackers and the strategies that drive them
//!
//! An [`Attacker`] tracks the coordinates one side has fired at an opposing
//! board and owns a [`Strategy`] that decides where to fire next:
//! - Scripted: moves supplied from outside (human input, replays, tests)
//! - HuntTarget: random search that narrows in on hits

use alloc::collections::{BTreeSet, VecDeque};
use rand::RngCore;

use crate::{
    board::Board,
    common::{AttackResult, BoardError, GameError, GuessError, MoveError, ValidationError},
    coordinate::Coordinate,
};

pub mod ai;
pub use ai::{HuntTarget, Mode, TargetingSnapshot};

/// What a strategy may look at when choosing or learning from a move.
#[derive(Debug, Clone, Copy)]
pub struct AttackContext<'a> {
    pub board_size: usize,
    pub guessed: &'a BTreeSet<Coordinate>,
}

impl AttackContext<'_> {
    /// Returns `true` if `coord` is on the board and not yet attacked.
    pub fn is_open(&self, coord: Coordinate) -> bool {
        coord.in_bounds(self.board_size) && !self.guessed.contains(&coord)
    }

    /// First open coordinate in row-major order.
    pub fn first_open(&self) -> Option<Coordinate> {
        (0..self.board_size)
            .flat_map(|row| (0..self.board_size).map(move |col| Coordinate::new(row, col)))
            .find(|&c| !self.guessed.contains(&c))
    }
}

/// Decision logic plugged into an [`Attacker`].
pub trait Strategy {
    /// Choose the next coordinate to attack. Must return an open coordinate.
    fn next_move(
        &mut self,
        ctx: &AttackContext<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<Coordinate, MoveError>;

    /// Inform the strategy of the outcome of an attack at `coord`.
    fn on_result(&mut self, _ctx: &AttackContext<'_>, _coord: Coordinate, _result: &AttackResult) {}
}

/// Moves supplied from outside, played in FIFO order.
#[derive(Debug, Clone, Default)]
pub struct Scripted {
    moves: VecDeque<Coordinate>,
}

impl Scripted {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_moves<I: IntoIterator<Item = Coordinate>>(moves: I) -> Self {
        Self {
            moves: moves.into_iter().collect(),
        }
    }

    pub fn push(&mut self, coord: Coordinate) {
        self.moves.push_back(coord);
    }

    pub fn pending(&self) -> usize {
        self.moves.len()
    }
}

impl Strategy for Scripted {
    fn next_move(
        &mut self,
        ctx: &AttackContext<'_>,
        _rng: &mut dyn RngCore,
    ) -> Result<Coordinate, MoveError> {
        while let Some(coord) = self.moves.pop_front() {
            if ctx.is_open(coord) {
                return Ok(coord);
            }
            log::debug!("skipping scripted move {}: not open", coord);
        }
        Err(MoveError::ScriptExhausted)
    }
}

/// One side's attack history against an opposing board, plus its strategy.
#[derive(Debug, Clone)]
pub struct Attacker<S> {
    board_size: usize,
    guesses: BTreeSet<Coordinate>,
    strategy: S,
}

pub type HumanAttacker = Attacker<Scripted>;
pub type TargetingAi = Attacker<HuntTarget>;

impl<S> Attacker<S> {
    /// Create an attacker aiming at a board of `board_size`.
    pub fn new(board_size: usize, strategy: S) -> Self {
        Self {
            board_size,
            guesses: BTreeSet::new(),
            strategy,
        }
    }

    pub fn board_size(&self) -> usize {
        self.board_size
    }

    pub fn guesses(&self) -> &BTreeSet<Coordinate> {
        &self.guesses
    }

    pub fn has_guessed(&self, coord: Coordinate) -> bool {
        self.guesses.contains(&coord)
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    pub fn strategy_mut(&mut self) -> &mut S {
        &mut self.strategy
    }

    /// Parse and check a raw coordinate against the board and this side's history.
    pub fn validate_coordinate(&self, raw: &str) -> Result<Coordinate, ValidationError> {
        let coord = Coordinate::parse(raw, self.board_size)?;
        if self.guesses.contains(&coord) {
            return Err(ValidationError::AlreadyGuessed);
        }
        Ok(coord)
    }

    /// Validate `raw` and fire it at `opponent`.
    /// The opponent board is untouched when validation fails.
    pub fn make_guess(&mut self, raw: &str, opponent: &mut Board) -> Result<AttackResult, GuessError> {
        let coord = self.validate_coordinate(raw)?;
        self.fire(coord, opponent)
    }

    /// Fire an already parsed coordinate at `opponent`.
    pub fn attack(&mut self, coord: Coordinate, opponent: &mut Board) -> Result<AttackResult, GuessError> {
        if !coord.in_bounds(self.board_size) {
            return Err(ValidationError::OutOfRange {
                max: self.board_size.saturating_sub(1),
            }
            .into());
        }
        if self.guesses.contains(&coord) {
            return Err(ValidationError::AlreadyGuessed.into());
        }
        self.fire(coord, opponent)
    }

    fn fire(&mut self, coord: Coordinate, opponent: &mut Board) -> Result<AttackResult, GuessError> {
        match opponent.process_attack(coord) {
            Ok(result) => {
                self.guesses.insert(coord);
                Ok(result)
            }
            Err(err) => {
                // the board already holds this guess, so keep both sets in lockstep
                if err == BoardError::AlreadyGuessed {
                    self.guesses.insert(coord);
                }
                Err(err.into())
            }
        }
    }
}

impl<S: Strategy> Attacker<S> {
    /// Ask the strategy for the next coordinate to attack.
    pub fn next_move(&mut self, rng: &mut dyn RngCore) -> Result<Coordinate, MoveError> {
        let ctx = AttackContext {
            board_size: self.board_size,
            guessed: &self.guesses,
        };
        self.strategy.next_move(&ctx, rng)
    }

    /// Feed the outcome of an attack at `coord` back to the strategy.
    pub fn record_result(&mut self, coord: Coordinate, result: &AttackResult) {
        let ctx = AttackContext {
            board_size: self.board_size,
            guessed: &self.guesses,
        };
        self.strategy.on_result(&ctx, coord, result);
    }

    /// Choose a move, resolve it on `opponent` and learn from the outcome.
    pub fn take_turn(
        &mut self,
        rng: &mut dyn RngCore,
        opponent: &mut Board,
    ) -> Result<(Coordinate, AttackResult), GameError> {
        let coord = self.next_move(rng)?;
        let result = self.attack(coord, opponent)?;
        self.record_result(coord, &result);
        Ok((coord, result))
    }

    /// Open coordinates left on the target board.
    pub fn remaining_moves(&self) -> usize {
        (self.board_size * self.board_size).saturating_sub(self.guesses.len())
    }
}

impl TargetingAi {
    /// AI attacker starting in hunt mode.
    pub fn targeting(board_size: usize) -> Self {
        Attacker::new(board_size, HuntTarget::new())
    }
}

impl HumanAttacker {
    /// Attacker whose moves are pushed in by the caller.
    pub fn scripted(board_size: usize) -> Self {
        Attacker::new(board_size, Scripted::new())
    }
}
