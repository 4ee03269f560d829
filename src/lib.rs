//! A rule engine for two-player board games built from ray-walking pieces.
//!
//! The engine enumerates legal moves and captures, enforces turn order,
//! forced and chained captures, promotion, and decides wins and stalemates.
//! It does not search or evaluate positions.

#[macro_use]
mod logging;

pub mod board;
pub mod events;
pub mod protocol;
pub mod timer;

pub use board::{Coord, Game, GameBuilder, GameConfig, PieceId, PlayerId, TurnState};
pub use events::{GameEvent, Observer};
