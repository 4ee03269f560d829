//! Board representation and rule engine.
//!
//! Pieces are plain data: a kind describes rays for moving and capturing,
//! and the generator walks those rays over a small board. Two rule sets are
//! supported through [`VariantRules`]: a checkers-style capture game and a
//! chess-like game.
//!
//! # Example
//! ```
//! use board_rules::board::{presets, Game};
//!
//! let mut game = Game::new(&presets::checkers()).expect("preset is valid");
//! game.start().expect("fresh game");
//! println!("{} pieces can move", game.selectable_pieces().count());
//! ```

mod builder;
mod catalog;
mod config;
#[cfg(debug_assertions)]
mod debug;
mod error;
mod kinds;
mod movegen;
mod outcome;
pub mod prelude;
pub mod presets;
mod query;
mod render;
mod rules;
mod state;
mod turn;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::GameBuilder;
pub use catalog::{Catalog, PieceKind, PlayerSetup, Promotion};
pub use config::{GameConfig, Pacing};
pub use error::{IllegalAction, InvalidConfiguration};
pub use outcome::Outcome;
pub use rules::{AliveTest, CaptureGeometry, VariantRules};
pub use state::{Game, LegalActions};
pub use turn::{Applied, TurnState};
pub use types::{
    Capture, Coord, Direction, KindId, Piece, PieceId, PlayerId, DIAGONALS, KNIGHT_JUMPS,
    ORTHOGONALS,
};

// Lower-level building blocks for callers that drive generation themselves
pub use kinds::{KindTable, PromotionRule, ResolvedKind};
pub use query::{BoardView, Cell};
