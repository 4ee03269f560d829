//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Ray casting over hand-built positions
//! - `turn.rs` - Turn sequencing, forced capture and capture chains
//! - `outcome.rs` - Wins, stalemates and the lifecycle around them
//! - `edge_cases.rs` - Promotion, stale ids and other corners
//! - `proptest.rs` - Property-based tests over random playouts

mod movegen;
mod turn;

use std::sync::Arc;

use parking_lot::Mutex;

use crate::board::{Direction, Game, PieceKind, PlayerSetup, DIAGONALS};
use crate::events::GameEvent;

/// A checkers man: steps diagonally forward, captures in every diagonal,
/// becomes a flying king on `far_row`.
pub(super) fn man(forward: i32, far_row: i32, width: i32) -> PieceKind {
    PieceKind::new(
        "man",
        vec![Direction::step(-1, forward), Direction::step(1, forward)],
    )
    .with_captures(Direction::set(&DIAGONALS, 1))
    .promotes_to("king", (0..width).map(|x| crate::board::Coord::new(x, far_row)).collect())
}

pub(super) fn flying_king() -> PieceKind {
    PieceKind::new("king", Direction::set(&DIAGONALS, u32::MAX))
}

/// A 10x10 checkers side with an empty layout.
pub(super) fn checkers_side(id: u32, forward: i32) -> PlayerSetup {
    let far_row = if forward > 0 { 9 } else { 0 };
    PlayerSetup::new(id, format!("p{id}"))
        .kind(man(forward, far_row, 10))
        .kind(flying_king())
}

/// Collect every event the game delivers.
pub(super) fn record(game: &Game) -> Arc<Mutex<Vec<GameEvent>>> {
    let log = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    game.observers()
        .subscribe(move |event: &GameEvent| sink.lock().push(event.clone()));
    log
}
