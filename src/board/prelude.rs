//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use board_rules::board::prelude::*;
//! ```

pub use super::{
    presets, Applied, Coord, Direction, Game, GameBuilder, GameConfig, IllegalAction,
    InvalidConfiguration, Outcome, PieceId, PieceKind, PlayerId, PlayerSetup, TurnState,
    VariantRules,
};
pub use crate::events::{EventKind, GameEvent};
