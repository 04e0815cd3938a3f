#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod board;
mod common;
mod config;
mod coordinate;
mod game;
#[cfg(feature = "std")]
mod logging;
pub mod player;
pub mod prelude;
mod ship;

pub use board::*;
pub use common::*;
pub use config::*;
pub use coordinate::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
pub use player::{
    AttackContext, Attacker, HumanAttacker, HuntTarget, Mode, Scripted, Strategy, TargetingAi,
    TargetingSnapshot,
};
pub use ship::*;
