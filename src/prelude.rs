//! Commonly used types and utilities for ease of import.

pub use crate::{
    AttackResult, Attacker, Board, Coordinate, Game, GameConfig, GameStatus, HuntTarget,
    Orientation, Scripted, Ship, Strategy, TargetingAi,
};

#[cfg(feature = "std")]
pub use crate::init_logging;
