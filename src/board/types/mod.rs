//! Core board types.
//!
//! - `Coord` - board cells
//! - `Direction` - bounded rays used by move and capture generation
//! - `Piece` and its identifiers (`PieceId`, `PlayerId`, `KindId`)

mod coord;
mod direction;
mod piece;

pub use coord::Coord;
pub use direction::{Direction, DIAGONALS, KNIGHT_JUMPS, ORTHOGONALS};
pub use piece::{Capture, KindId, Piece, PieceId, PlayerId};
