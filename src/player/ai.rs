//! Hunt/target guessing logic for the opponent board.
//!
//! Random search until a hit, then sweep its neighbors, then follow the line
//! once two hits fix the ship's orientation.

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use rand::{Rng, RngCore};

use crate::{
    common::{AttackResult, MoveError},
    config::MAX_HUNT_SAMPLES,
    coordinate::Coordinate,
    ship::Orientation,
};

use super::{AttackContext, Strategy};

/// Search state of the targeting AI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    /// No lead: pick unguessed cells at random.
    Hunt,
    /// Exploit a known hit through the pending queue.
    Target,
}

/// Introspection record of the AI state, for diagnostics and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetingSnapshot {
    pub mode: Mode,
    pub pending: Vec<Coordinate>,
    pub last_hit: Option<Coordinate>,
    pub orientation: Option<Orientation>,
}

/// Hunt/target state machine.
#[derive(Debug, Clone)]
pub struct HuntTarget {
    mode: Mode,
    queue: VecDeque<Coordinate>,
    last_hit: Option<Coordinate>,
    orientation: Option<Orientation>,
}

impl Default for HuntTarget {
    fn default() -> Self {
        Self::new()
    }
}

impl HuntTarget {
    pub fn new() -> Self {
        Self {
            mode: Mode::Hunt,
            queue: VecDeque::new(),
            last_hit: None,
            orientation: None,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Pending target coordinates in queue order.
    pub fn pending(&self) -> impl Iterator<Item = &Coordinate> {
        self.queue.iter()
    }

    pub fn last_hit(&self) -> Option<Coordinate> {
        self.last_hit
    }

    pub fn orientation(&self) -> Option<Orientation> {
        self.orientation
    }

    pub fn snapshot(&self) -> TargetingSnapshot {
        TargetingSnapshot {
            mode: self.mode,
            pending: self.queue.iter().copied().collect(),
            last_hit: self.last_hit,
            orientation: self.orientation,
        }
    }

    fn reset(&mut self) {
        self.mode = Mode::Hunt;
        self.queue.clear();
        self.last_hit = None;
        self.orientation = None;
    }

    fn enqueue(&mut self, ctx: &AttackContext<'_>, coord: Coordinate) {
        if ctx.is_open(coord) && !self.queue.contains(&coord) {
            self.queue.push_back(coord);
        }
    }

    /// Uniform pick among unguessed cells, with a scan once sampling gives up.
    fn hunt(ctx: &AttackContext<'_>, rng: &mut dyn RngCore) -> Result<Coordinate, MoveError> {
        let size = ctx.board_size;
        if ctx.guessed.len() < size * size {
            for _ in 0..MAX_HUNT_SAMPLES {
                let coord = Coordinate::new(rng.random_range(0..size), rng.random_range(0..size));
                if !ctx.guessed.contains(&coord) {
                    return Ok(coord);
                }
            }
        }
        ctx.first_open().ok_or(MoveError::BoardExhausted)
    }

    /// Next queued target, preferring cells on the line through the last hit.
    fn pop_target(&mut self) -> Option<Coordinate> {
        if let (Some(orientation), Some(anchor)) = (self.orientation, self.last_hit) {
            if self.queue.len() > 1 {
                let aligned = self
                    .queue
                    .iter()
                    .position(|&c| orientation.is_aligned(anchor, c));
                if let Some(i) = aligned {
                    return self.queue.remove(i);
                }
            }
        }
        self.queue.pop_front()
    }

    fn on_hit(&mut self, ctx: &AttackContext<'_>, coord: Coordinate) {
        self.queue.retain(|&c| ctx.is_open(c));
        let inferred = self.last_hit.and_then(|prev| {
            if prev.row == coord.row {
                Some(Orientation::Horizontal)
            } else if prev.col == coord.col {
                Some(Orientation::Vertical)
            } else {
                None
            }
        });

        match inferred {
            Some(orientation) => {
                log::debug!("hit at {} fixes orientation {:?}", coord, orientation);
                self.orientation = Some(orientation);
                self.queue.retain(|&c| orientation.is_aligned(coord, c));
                let ends = match orientation {
                    Orientation::Horizontal => [coord.left(), coord.right(ctx.board_size)],
                    Orientation::Vertical => [coord.up(), coord.down(ctx.board_size)],
                };
                for end in ends.into_iter().flatten() {
                    self.enqueue(ctx, end);
                }
            }
            None => {
                if self.last_hit.is_some() {
                    log::debug!("hit at {} is off the current line, widening search", coord);
                    self.orientation = None;
                } else {
                    log::debug!("hit at {}, switching to target mode", coord);
                }
                for n in coord.neighbors(ctx.board_size) {
                    self.enqueue(ctx, n);
                }
            }
        }
        self.mode = Mode::Target;
        self.last_hit = Some(coord);
    }
}

impl Strategy for HuntTarget {
    fn next_move(
        &mut self,
        ctx: &AttackContext<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<Coordinate, MoveError> {
        if self.mode == Mode::Hunt {
            return Self::hunt(ctx, rng);
        }

        self.queue.retain(|&c| ctx.is_open(c));
        if let Some(coord) = self.pop_target() {
            return Ok(coord);
        }

        let coord = Self::hunt(ctx, rng)?;
        log::debug!("target queue empty, hunting at {}", coord);
        self.reset();
        Ok(coord)
    }

    fn on_result(&mut self, ctx: &AttackContext<'_>, coord: Coordinate, result: &AttackResult) {
        if result.sunk {
            log::debug!("sunk ship at {}, back to hunt mode", coord);
            self.reset();
        } else if result.hit {
            self.on_hit(ctx, coord);
        } else if self.mode == Mode::Target {
            self.queue.retain(|&c| ctx.is_open(c));
            if self.queue.is_empty() {
                log::debug!("miss at {} with no targets left, back to hunt mode", coord);
                self.reset();
            }
        }
    }
}
